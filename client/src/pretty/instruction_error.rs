//! Interprets RPC and on-chain errors into readable `spin_game`/Solana instruction error messages.

use std::fmt::Display;

use solana_client::{
    client_error::{
        ClientError,
        ClientErrorKind,
    },
    rpc_request::{
        RpcError::RpcResponseError,
        RpcResponseErrorData,
    },
    rpc_response::RpcSimulateTransactionResult,
};
use solana_instruction::Instruction;
use solana_instruction_error::InstructionError as SolanaInstructionError;
use solana_sdk::pubkey::Pubkey;
use solana_transaction_error::TransactionError;
use spin_game_interface::error::RemoteErrorCode;

use crate::{
    fmt_kv,
    LogColor,
};

/// Extracts the transaction error from either a failed preflight simulation or a confirmed,
/// failed transaction.
pub fn transaction_error(error: &ClientError) -> Option<TransactionError> {
    match error.kind() {
        ClientErrorKind::RpcError(RpcResponseError {
            data:
                RpcResponseErrorData::SendTransactionPreflightFailure(RpcSimulateTransactionResult {
                    err: Some(ui_err),
                    ..
                }),
            ..
        }) => Some(ui_err.clone().into()),
        ClientErrorKind::TransactionError(transaction_error) => Some(transaction_error.clone()),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InstructionFailure {
    Solana {
        instruction_index: u8,
        program_id: Option<Pubkey>,
        error: SolanaInstructionError,
    },
    /// A custom code raised by the probed program itself.
    Program {
        instruction_index: u8,
        error: RemoteErrorCode,
    },
}

impl InstructionFailure {
    /// Decodes the failing instruction, attributing custom codes to `program_id` only when the
    /// failing instruction actually targeted it.
    pub fn from_transaction_error(
        transaction_error: &TransactionError,
        instructions: &[Instruction],
        program_id: &Pubkey,
    ) -> Option<Self> {
        let TransactionError::InstructionError(instruction_index, error) = transaction_error
        else {
            return None;
        };
        let target = instructions
            .get(*instruction_index as usize)
            .map(|instruction| instruction.program_id);

        let failure = match error {
            SolanaInstructionError::Custom(code) if target.as_ref() == Some(program_id) => {
                Self::Program {
                    instruction_index: *instruction_index,
                    error: RemoteErrorCode::from_custom(*code),
                }
            }
            error => Self::Solana {
                instruction_index: *instruction_index,
                program_id: target,
                error: error.clone(),
            },
        };

        Some(failure)
    }
}

pub struct PrettyInstructionError<'a>(pub &'a InstructionFailure);

impl Display for PrettyInstructionError<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (error_type, message) = match self.0 {
            InstructionFailure::Solana {
                instruction_index,
                program_id,
                error,
            } => {
                let program = program_id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "unknown program".into());
                (
                    "SolanaInstructionError",
                    format!("(#{instruction_index} {program}, {error})"),
                )
            }
            InstructionFailure::Program {
                instruction_index,
                error,
            } => (
                "SpinGameError",
                format!("(#{instruction_index} initialize, {error})"),
            ),
        };

        write!(f, "{}", fmt_kv!(error_type, message, LogColor::Error))
    }
}
