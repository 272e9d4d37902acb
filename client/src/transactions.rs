use colored::Colorize;
use solana_compute_budget_interface::ComputeBudgetInstruction;
use solana_instruction::Instruction;
use solana_sdk::{
    message::Message,
    pubkey::Pubkey,
    signature::{
        Keypair,
        Signature,
        Signer,
    },
    transaction::Transaction,
};

use crate::{
    error::{
        CallSite,
        RemoteCallFailure,
    },
    logs::{
        log_error,
        log_info,
        LogColor,
    },
    pretty::instruction_error::PrettyInstructionError,
    provider::ProviderContext,
};

pub struct SendTransactionConfig {
    pub compute_budget: Option<u32>,
    pub debug_logs: bool,
}

impl Default for SendTransactionConfig {
    fn default() -> Self {
        SendTransactionConfig {
            compute_budget: Default::default(),
            debug_logs: true,
        }
    }
}

/// Prepends compute budget instructions when a budget is set.
pub fn with_compute_budget(
    compute_budget: Option<u32>,
    instructions: &[Instruction],
) -> Vec<Instruction> {
    [
        compute_budget.map_or(vec![], |budget| {
            vec![
                ComputeBudgetInstruction::set_compute_unit_limit(budget),
                ComputeBudgetInstruction::set_compute_unit_price(1),
            ]
        }),
        instructions.to_vec(),
    ]
    .concat()
}

/// Signs with the provider's payer plus `signers`, submits once, and waits for confirmation.
///
/// Nothing is retried. `program_id` is only used to attribute custom error codes.
pub async fn send_and_confirm(
    provider: &ProviderContext,
    signers: &[&Keypair],
    instructions: &[Instruction],
    program_id: Pubkey,
    config: &SendTransactionConfig,
) -> Result<Signature, RemoteCallFailure> {
    let payer = provider.payer();
    let endpoint = provider.endpoint();
    let instructions = with_compute_budget(config.compute_budget, instructions);
    let site = CallSite {
        endpoint: &endpoint,
        signer: payer.pubkey(),
        program_id,
        instructions: &instructions,
    };

    let bh = provider
        .rpc
        .get_latest_blockhash()
        .await
        .map_err(|error| report(RemoteCallFailure::classify(error, &site), payer))?;

    let msg = Message::new(&instructions, Some(&payer.pubkey()));
    let mut tx = Transaction::new_unsigned(msg);
    tx.try_sign(
        &std::iter::once(payer)
            .chain(signers.iter().copied())
            .collect::<Vec<_>>(),
        bh,
    )?;

    match provider.rpc.send_and_confirm_transaction(&tx).await {
        Ok(sig) => {
            // The caller reports the signature itself.
            if config.debug_logs {
                let sender_info = format!("{}: {}", "sender".color(LogColor::Gray), payer.pubkey());
                log_info("Confirmed", sender_info);
            }
            Ok(sig)
        }
        Err(error) => Err(report(RemoteCallFailure::classify(error, &site), payer)),
    }
}

fn report(failure: RemoteCallFailure, payer: &Keypair) -> RemoteCallFailure {
    if let RemoteCallFailure::Rejected {
        failure: Some(instruction_failure),
        ..
    } = &failure
    {
        log_error(
            "Instruction failed",
            PrettyInstructionError(instruction_failure),
        );
    }
    log_error("Failed transaction submission", &failure);
    log_info("Payer", payer.pubkey());
    failure
}
