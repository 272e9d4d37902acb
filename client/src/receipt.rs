use std::fmt::{
    self,
    Display,
    Formatter,
};

use solana_sdk::{
    pubkey::Pubkey,
    signature::Signature,
};

use crate::error::RemoteCallFailure;

/// The result of a confirmed remote call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionReceipt {
    signature: Signature,
    program_id: Pubkey,
    payer: Pubkey,
}

impl TransactionReceipt {
    /// Fails with [`RemoteCallFailure::EmptyIdentifier`] for the all-zero signature, which no
    /// confirmed transaction can have.
    pub fn new(
        signature: Signature,
        program_id: Pubkey,
        payer: Pubkey,
    ) -> Result<Self, RemoteCallFailure> {
        if signature == Signature::default() {
            return Err(RemoteCallFailure::EmptyIdentifier);
        }
        Ok(Self {
            signature,
            program_id,
            payer,
        })
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// The base58 transaction identifier.
    pub fn identifier(&self) -> String {
        self.signature.to_string()
    }

    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }

    pub fn payer(&self) -> Pubkey {
        self.payer
    }
}

impl Display for TransactionReceipt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.signature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_is_non_empty() -> anyhow::Result<()> {
        let receipt = TransactionReceipt::new(
            Signature::from([7u8; 64]),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
        )?;
        assert!(!receipt.identifier().is_empty());
        assert_eq!(receipt.to_string(), receipt.identifier());
        Ok(())
    }

    #[test]
    fn default_signature_is_rejected() {
        let receipt = TransactionReceipt::new(
            Signature::default(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
        );
        assert!(matches!(receipt, Err(RemoteCallFailure::EmptyIdentifier)));
    }
}
