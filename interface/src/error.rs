//! Classification of the custom error codes an Anchor program returns in
//! `InstructionError::Custom`.

/// Framework codes below this are Anchor's own; at and above it they're defined by the program.
pub const PROGRAM_ERROR_OFFSET: u32 = 6000;

#[repr(u32)]
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    PartialEq,
    strum_macros::Display,
    strum_macros::EnumIter,
    strum_macros::FromRepr,
)]
pub enum AnchorErrorCode {
    InstructionMissing = 100,
    InstructionFallbackNotFound = 101,
    InstructionDidNotDeserialize = 102,
    InstructionDidNotSerialize = 103,
    ConstraintMut = 2000,
    ConstraintHasOne = 2001,
    ConstraintSigner = 2002,
    ConstraintRaw = 2003,
    ConstraintOwner = 2004,
    ConstraintRentExempt = 2005,
    ConstraintSeeds = 2006,
    ConstraintExecutable = 2007,
    ConstraintAddress = 2012,
    ConstraintZero = 2013,
    ConstraintSpace = 2019,
    AccountDiscriminatorAlreadySet = 3000,
    AccountDiscriminatorNotFound = 3001,
    AccountDiscriminatorMismatch = 3002,
    AccountDidNotDeserialize = 3003,
    AccountDidNotSerialize = 3004,
    AccountNotEnoughKeys = 3005,
    AccountNotMutable = 3006,
    AccountOwnedByWrongProgram = 3007,
    InvalidProgramId = 3008,
    InvalidProgramExecutable = 3009,
    AccountNotSigner = 3010,
    AccountNotSystemOwned = 3011,
    AccountNotInitialized = 3012,
    DeclaredProgramIdMismatch = 4100,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, strum_macros::Display)]
pub enum ErrorCategory {
    Instruction,
    Constraint,
    Account,
    Program,
    Unknown,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RemoteErrorCode {
    Anchor(AnchorErrorCode),
    /// A framework-range code this client doesn't name.
    UnknownFramework(u32),
    /// A program-defined code, stored relative to [`PROGRAM_ERROR_OFFSET`].
    Program(u32),
}

impl RemoteErrorCode {
    pub fn from_custom(code: u32) -> Self {
        if code >= PROGRAM_ERROR_OFFSET {
            return Self::Program(code - PROGRAM_ERROR_OFFSET);
        }
        match AnchorErrorCode::from_repr(code) {
            Some(anchor) => Self::Anchor(anchor),
            None => Self::UnknownFramework(code),
        }
    }

    pub fn code(&self) -> u32 {
        match self {
            Self::Anchor(anchor) => *anchor as u32,
            Self::UnknownFramework(code) => *code,
            Self::Program(offset) => PROGRAM_ERROR_OFFSET + offset,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self.code() {
            100..1000 => ErrorCategory::Instruction,
            2000..2500 => ErrorCategory::Constraint,
            3000..4101 => ErrorCategory::Account,
            code if code >= PROGRAM_ERROR_OFFSET => ErrorCategory::Program,
            _ => ErrorCategory::Unknown,
        }
    }

    /// Whether the program rejected the call because of who signed it.
    ///
    /// `initialize` pins its signer with a raw key constraint, so a wrong wallet shows up as
    /// `ConstraintRaw` rather than a signer error.
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::Anchor(
                AnchorErrorCode::ConstraintRaw
                    | AnchorErrorCode::ConstraintSigner
                    | AnchorErrorCode::ConstraintHasOne
                    | AnchorErrorCode::AccountNotSigner
            )
        )
    }
}

impl core::fmt::Display for RemoteErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Anchor(anchor) => write!(f, "{anchor} ({})", self.code()),
            Self::UnknownFramework(code) => write!(f, "AnchorError ({code})"),
            Self::Program(offset) => write!(f, "ProgramError #{offset} ({})", self.code()),
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn anchor_codes_round_trip_exhaustive() {
        for variant in AnchorErrorCode::iter() {
            let code = variant as u32;
            assert_eq!(RemoteErrorCode::from_custom(code), RemoteErrorCode::Anchor(variant));
            assert_eq!(RemoteErrorCode::from_custom(code).code(), code);
        }
    }

    #[test]
    fn categories() {
        assert_eq!(
            RemoteErrorCode::from_custom(102).category(),
            ErrorCategory::Instruction
        );
        assert_eq!(
            RemoteErrorCode::from_custom(2003).category(),
            ErrorCategory::Constraint
        );
        assert_eq!(
            RemoteErrorCode::from_custom(3012).category(),
            ErrorCategory::Account
        );
        assert_eq!(
            RemoteErrorCode::from_custom(6001).category(),
            ErrorCategory::Program
        );
        assert_eq!(RemoteErrorCode::from_custom(1).category(), ErrorCategory::Unknown);
    }

    #[test]
    fn program_codes_are_offset() {
        assert_eq!(RemoteErrorCode::from_custom(6000), RemoteErrorCode::Program(0));
        assert_eq!(RemoteErrorCode::from_custom(6003), RemoteErrorCode::Program(3));
        assert_eq!(RemoteErrorCode::Program(3).code(), 6003);
    }

    #[test]
    fn unnamed_framework_codes_are_kept() {
        assert_eq!(
            RemoteErrorCode::from_custom(2008),
            RemoteErrorCode::UnknownFramework(2008)
        );
    }

    #[test]
    fn authorization_codes() {
        assert!(RemoteErrorCode::from_custom(2003).is_authorization());
        assert!(RemoteErrorCode::from_custom(3010).is_authorization());
        assert!(!RemoteErrorCode::from_custom(3012).is_authorization());
        assert!(!RemoteErrorCode::from_custom(6000).is_authorization());
    }

    #[test]
    fn display() {
        assert_eq!(
            RemoteErrorCode::from_custom(2003).to_string(),
            "ConstraintRaw (2003)"
        );
        assert_eq!(
            RemoteErrorCode::from_custom(6002).to_string(),
            "ProgramError #2 (6002)"
        );
    }
}
