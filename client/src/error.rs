//! The single failure type surfaced by a probe run.

use std::fmt::{
    self,
    Display,
    Formatter,
};

use solana_client::client_error::{
    ClientError,
    ClientErrorKind,
};
use solana_instruction::Instruction;
use solana_instruction_error::InstructionError;
use solana_sdk::{
    pubkey::Pubkey,
    signer::SignerError,
};
use solana_transaction_error::TransactionError;
use spin_game_interface::error::RemoteErrorCode;

use crate::pretty::instruction_error::{
    transaction_error,
    InstructionFailure,
};

#[derive(Debug)]
pub enum RemoteCallFailure {
    /// The endpoint couldn't be reached or the transport failed mid-request.
    Connectivity {
        endpoint: String,
        source: Box<ClientError>,
    },
    /// The remote program refused the signer.
    Unauthorized { signer: Pubkey, reason: String },
    ProgramNotDeployed { program_id: Pubkey },
    /// The cluster accepted the request but execution failed.
    Rejected {
        failure: Option<InstructionFailure>,
        reason: String,
    },
    Signing(SignerError),
    /// A confirmed call came back without a usable transaction identifier.
    EmptyIdentifier,
    /// The call confirmed but the accounts it initializes don't show it.
    StateMismatch { reason: String },
}

/// Everything [`RemoteCallFailure::classify`] needs to attribute a client error.
pub struct CallSite<'a> {
    pub endpoint: &'a str,
    pub signer: Pubkey,
    pub program_id: Pubkey,
    pub instructions: &'a [Instruction],
}

impl RemoteCallFailure {
    pub fn classify(error: ClientError, site: &CallSite<'_>) -> Self {
        if let Some(transaction_error) = transaction_error(&error) {
            return Self::from_transaction_error(&transaction_error, site);
        }

        // Only transport failures mean the node wasn't reached. A node that answered badly is a
        // rejection.
        if matches!(
            error.kind(),
            ClientErrorKind::Io(_) | ClientErrorKind::Reqwest(_)
        ) {
            return Self::Connectivity {
                endpoint: site.endpoint.to_string(),
                source: Box::new(error),
            };
        }

        match *error.kind {
            ClientErrorKind::SigningError(signer_error) => Self::Signing(signer_error),
            kind => Self::Rejected {
                failure: None,
                reason: kind.to_string(),
            },
        }
    }

    pub fn from_transaction_error(error: &TransactionError, site: &CallSite<'_>) -> Self {
        match error {
            TransactionError::ProgramAccountNotFound
            | TransactionError::InvalidProgramForExecution => Self::ProgramNotDeployed {
                program_id: site.program_id,
            },
            TransactionError::SignatureFailure => Self::Unauthorized {
                signer: site.signer,
                reason: error.to_string(),
            },
            _ => {
                let failure = InstructionFailure::from_transaction_error(
                    error,
                    site.instructions,
                    &site.program_id,
                );
                match &failure {
                    Some(InstructionFailure::Program { error: code, .. })
                        if code.is_authorization() =>
                    {
                        Self::Unauthorized {
                            signer: site.signer,
                            reason: code.to_string(),
                        }
                    }
                    Some(InstructionFailure::Solana {
                        error: InstructionError::MissingRequiredSignature,
                        ..
                    }) => Self::Unauthorized {
                        signer: site.signer,
                        reason: InstructionError::MissingRequiredSignature.to_string(),
                    },
                    _ => Self::Rejected {
                        failure,
                        reason: error.to_string(),
                    },
                }
            }
        }
    }

    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Connectivity { .. })
    }

    pub fn remote_error_code(&self) -> Option<RemoteErrorCode> {
        match self {
            Self::Rejected {
                failure: Some(InstructionFailure::Program { error, .. }),
                ..
            } => Some(*error),
            _ => None,
        }
    }
}

impl Display for RemoteCallFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connectivity { endpoint, source } => {
                write!(f, "Couldn't reach {endpoint}: {source}")
            }
            Self::Unauthorized { signer, reason } => {
                write!(f, "Signer {signer} isn't authorized: {reason}")
            }
            Self::ProgramNotDeployed { program_id } => {
                write!(f, "Program {program_id} isn't deployed")
            }
            Self::Rejected { reason, .. } => write!(f, "Remote call rejected: {reason}"),
            Self::Signing(error) => write!(f, "Couldn't sign the transaction: {error}"),
            Self::EmptyIdentifier => f.write_str("Confirmed call returned an empty signature"),
            Self::StateMismatch { reason } => {
                write!(f, "Call confirmed but state doesn't match: {reason}")
            }
        }
    }
}

impl std::error::Error for RemoteCallFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Connectivity { source, .. } => Some(source.as_ref()),
            Self::Signing(error) => Some(error),
            _ => None,
        }
    }
}

impl From<SignerError> for RemoteCallFailure {
    fn from(error: SignerError) -> Self {
        Self::Signing(error)
    }
}

#[cfg(test)]
mod tests {
    use solana_client::rpc_request::RpcError;
    use spin_game_interface::{
        constants::SYSTEM_PROGRAM_ID,
        program,
    };

    use super::*;

    fn instructions() -> Vec<Instruction> {
        vec![
            Instruction::new_with_bytes(SYSTEM_PROGRAM_ID, &[0], vec![]),
            Instruction::new_with_bytes(program::ID, &[1], vec![]),
        ]
    }

    fn classify(error: ClientError) -> RemoteCallFailure {
        let instructions = instructions();
        RemoteCallFailure::classify(
            error,
            &CallSite {
                endpoint: "http://127.0.0.1:1",
                signer: Pubkey::new_unique(),
                program_id: program::ID,
                instructions: &instructions,
            },
        )
    }

    #[test]
    fn io_errors_are_connectivity() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let failure = classify(ClientError::from(io));
        assert!(failure.is_connectivity());
        assert!(std::error::Error::source(&failure).is_some());
    }

    #[test]
    fn wrong_initializer_is_unauthorized() {
        let error = TransactionError::InstructionError(1, InstructionError::Custom(2003));
        assert!(matches!(
            classify(error.into()),
            RemoteCallFailure::Unauthorized { .. }
        ));
    }

    #[test]
    fn missing_program_is_not_deployed() {
        assert!(matches!(
            classify(TransactionError::ProgramAccountNotFound.into()),
            RemoteCallFailure::ProgramNotDeployed { program_id } if program_id == program::ID
        ));
    }

    #[test]
    fn program_errors_are_rejections_with_codes() {
        let error = TransactionError::InstructionError(1, InstructionError::Custom(6001));
        let failure = classify(error.into());
        assert!(matches!(failure, RemoteCallFailure::Rejected { .. }));
        assert_eq!(failure.remote_error_code(), Some(RemoteErrorCode::Program(1)));
    }

    #[test]
    fn system_errors_are_rejections_without_codes() {
        let error = TransactionError::InstructionError(0, InstructionError::Custom(1));
        let failure = classify(error.into());
        assert!(matches!(failure, RemoteCallFailure::Rejected { failure: Some(_), .. }));
        assert_eq!(failure.remote_error_code(), None);
    }

    #[test]
    fn misbehaving_node_is_a_rejection() {
        let error = RpcError::RpcRequestError(
            "RPC node returned mismatched signature".to_string(),
        );
        let failure = classify(error.into());
        assert!(!failure.is_connectivity());
        assert!(matches!(
            &failure,
            RemoteCallFailure::Rejected { failure: None, reason } if reason.contains("mismatched")
        ));
    }

    #[test]
    fn for_user_errors_are_rejections() {
        let failure = classify(RpcError::ForUser("AccountNotFound".to_string()).into());
        assert!(matches!(failure, RemoteCallFailure::Rejected { .. }));
    }

    #[test]
    fn signer_errors_are_signing_failures() {
        let failure = classify(SignerError::KeypairPubkeyMismatch.into());
        assert!(matches!(failure, RemoteCallFailure::Signing(_)));
    }
}
