//! The initialization probe: one `initialize` call against the configured cluster, reported once.

use solana_sdk::pubkey::Pubkey;
use spin_game_interface::constants::INITIALIZER_KEY;

use crate::{
    config::ProbeConfig,
    error::RemoteCallFailure,
    logs::{
        log_info,
        log_success,
        log_warning,
    },
    program::SpinGameProgram,
    provider::ProviderContext,
    receipt::TransactionReceipt,
    transactions::SendTransactionConfig,
};

/// `Pending` until the single call settles; `Confirmed` and `Failed` are terminal.
#[derive(Debug)]
pub enum ProbeState {
    Pending,
    Confirmed(TransactionReceipt),
    Failed(RemoteCallFailure),
}

impl ProbeState {
    /// Settles a pending probe. A terminal state ignores later outcomes.
    pub fn settle(self, outcome: Result<TransactionReceipt, RemoteCallFailure>) -> Self {
        match self {
            Self::Pending => match outcome {
                Ok(receipt) => Self::Confirmed(receipt),
                Err(failure) => Self::Failed(failure),
            },
            terminal => terminal,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

pub struct InitializationProbe<'a> {
    provider: &'a ProviderContext,
    program_id: Pubkey,
    state_space: usize,
    compute_units: Option<u32>,
    debug_logs: bool,
    check_deployment: bool,
    verify_state: bool,
    super_admin: Option<Pubkey>,
}

impl<'a> InitializationProbe<'a> {
    pub fn new(provider: &'a ProviderContext, config: &ProbeConfig) -> Self {
        Self {
            provider,
            program_id: config.program_id,
            state_space: config.state_space,
            compute_units: config.compute_units,
            debug_logs: config.debug_logs,
            check_deployment: config.check_deployment,
            verify_state: config.verify_state,
            super_admin: None,
        }
    }

    pub fn with_super_admin(mut self, super_admin: Pubkey) -> Self {
        self.super_admin = Some(super_admin);
        self
    }

    /// Runs the probe and returns the receipt, or the failure for the test harness to report.
    ///
    /// Consumes the probe so a single probe can't submit twice.
    pub async fn run(self) -> Result<TransactionReceipt, RemoteCallFailure> {
        let outcome = self.call().await;
        if let Ok(receipt) = &outcome {
            log_success("Your transaction signature", receipt);
        }
        outcome
    }

    /// Runs the probe to a terminal [`ProbeState`].
    pub async fn settle(self) -> ProbeState {
        ProbeState::Pending.settle(self.run().await)
    }

    /// The program rejects any other initializer, so a mismatch explains the failure that follows.
    fn initializer_warning(&self) -> Option<String> {
        let payer = self.provider.payer_pubkey();
        (self.debug_logs && payer != INITIALIZER_KEY)
            .then(|| format!("{payer} isn't the program's initializer key {INITIALIZER_KEY}"))
    }

    async fn call(&self) -> Result<TransactionReceipt, RemoteCallFailure> {
        if let Some(warning) = self.initializer_warning() {
            log_warning("Initializer", warning);
        }
        if self.debug_logs {
            log_info("Endpoint", self.provider.endpoint());
            log_info("Program", self.program_id);
        }

        let program = SpinGameProgram::new(self.provider, self.program_id);
        if self.check_deployment {
            program.check_deployed().await?;
        }
        let before = if self.verify_state {
            Some(program.snapshot().await?)
        } else {
            None
        };

        let request = program
            .initialize()
            .state_space(self.state_space)
            .send_config(SendTransactionConfig {
                compute_budget: self.compute_units,
                debug_logs: self.debug_logs,
            });
        let request = match self.super_admin {
            Some(super_admin) => request.super_admin(super_admin),
            None => request,
        };
        let receipt = request.rpc().await?;

        if let Some(before) = before {
            program
                .snapshot()
                .await?
                .verify_initialized(&before, &self.program_id)?;
            if self.debug_logs {
                log_info("State", "PDAs created and vault funded");
            }
        }

        Ok(receipt)
    }
}
