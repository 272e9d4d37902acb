//! A statically typed handle to the deployed `spin_game` program.
//!
//! The callable surface is fixed at compile time by [`spin_game_interface`]; there's no runtime
//! IDL lookup. See [`crate::idl`] for checking an IDL artifact against it.

use solana_account::Account;
use solana_instruction::Instruction;
use solana_sdk::{
    pubkey::Pubkey,
    signature::Keypair,
    signer::Signer,
};
use solana_system_interface::instruction::create_account;
use spin_game_interface::{
    constants::{
        DEFAULT_STATE_ACCOUNT_SPACE,
        INITIALIZE_VAULT_LAMPORTS,
    },
    instructions::{
        initialize::{
            Initialize,
            InitializeAccounts,
        },
        RemoteInstruction,
    },
    pda::{
        find_admin_info_address,
        find_last_users_address,
        find_pool_address,
        find_vault_address,
    },
};

use crate::{
    error::{
        CallSite,
        RemoteCallFailure,
    },
    logs::log_info,
    provider::ProviderContext,
    receipt::TransactionReceipt,
    transactions::{
        send_and_confirm,
        SendTransactionConfig,
    },
};

pub struct SpinGameProgram<'a> {
    provider: &'a ProviderContext,
    program_id: Pubkey,
}

impl<'a> SpinGameProgram<'a> {
    pub fn new(provider: &'a ProviderContext, program_id: Pubkey) -> Self {
        Self {
            provider,
            program_id,
        }
    }

    pub fn id(&self) -> Pubkey {
        self.program_id
    }

    /// Starts an `initialize` call. The provider's payer signs as the initializer and, unless
    /// overridden, is recorded as the super admin.
    pub fn initialize(&self) -> InitializeRequest<'a> {
        InitializeRequest {
            provider: self.provider,
            program_id: self.program_id,
            super_admin: self.provider.payer_pubkey(),
            state: Keypair::new(),
            state_space: DEFAULT_STATE_ACCOUNT_SPACE,
            send_config: SendTransactionConfig::default(),
        }
    }

    /// Fails unless the program account exists and is executable.
    pub async fn check_deployed(&self) -> Result<(), RemoteCallFailure> {
        let [program_account] = self.fetch_accounts([self.program_id]).await?;

        match program_account {
            Some(account) if account.executable => Ok(()),
            _ => Err(RemoteCallFailure::ProgramNotDeployed {
                program_id: self.program_id,
            }),
        }
    }

    /// Reads the accounts `initialize` creates or funds.
    pub async fn snapshot(&self) -> Result<PdaSnapshot, RemoteCallFailure> {
        let [pool, last_users, admin_info, vault] = self
            .fetch_accounts([
                find_pool_address(&self.program_id).0,
                find_last_users_address(&self.program_id).0,
                find_admin_info_address(&self.program_id).0,
                find_vault_address(&self.program_id).0,
            ])
            .await?;

        Ok(PdaSnapshot {
            pool_owner: pool.map(|account| account.owner),
            last_users_owner: last_users.map(|account| account.owner),
            admin_info_owner: admin_info.map(|account| account.owner),
            vault_lamports: vault.map_or(0, |account| account.lamports),
        })
    }

    /// `getMultipleAccounts` returns transport errors as-is, unlike `getAccountInfo`, which
    /// reports them as a missing account.
    async fn fetch_accounts<const N: usize>(
        &self,
        addresses: [Pubkey; N],
    ) -> Result<[Option<Account>; N], RemoteCallFailure> {
        let endpoint = self.provider.endpoint();
        let accounts = self
            .provider
            .rpc
            .get_multiple_accounts_with_commitment(&addresses, self.provider.commitment())
            .await
            .map_err(|error| {
                RemoteCallFailure::classify(
                    error,
                    &CallSite {
                        endpoint: &endpoint,
                        signer: self.provider.payer_pubkey(),
                        program_id: self.program_id,
                        instructions: &[],
                    },
                )
            })?
            .value;

        let received = accounts.len();
        <[Option<Account>; N]>::try_from(accounts).map_err(|_| RemoteCallFailure::Rejected {
            failure: None,
            reason: format!("Asked for {N} accounts, node returned {received}"),
        })
    }
}

/// Owners and balance of the accounts `initialize` touches, as read from the cluster.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PdaSnapshot {
    pub pool_owner: Option<Pubkey>,
    pub last_users_owner: Option<Pubkey>,
    pub admin_info_owner: Option<Pubkey>,
    /// Zero when the vault doesn't exist yet.
    pub vault_lamports: u64,
}

impl PdaSnapshot {
    /// Checks that, relative to `before`, the program created its three PDAs and the vault
    /// received [`INITIALIZE_VAULT_LAMPORTS`].
    pub fn verify_initialized(
        &self,
        before: &PdaSnapshot,
        program_id: &Pubkey,
    ) -> Result<(), RemoteCallFailure> {
        for (name, owner) in [
            ("pool", self.pool_owner),
            ("last_users", self.last_users_owner),
            ("admin_info", self.admin_info_owner),
        ] {
            match owner {
                Some(owner) if owner == *program_id => {}
                Some(owner) => {
                    return Err(RemoteCallFailure::StateMismatch {
                        reason: format!("`{name}` is owned by {owner}, not {program_id}"),
                    })
                }
                None => {
                    return Err(RemoteCallFailure::StateMismatch {
                        reason: format!("`{name}` wasn't created"),
                    })
                }
            }
        }

        let received = self.vault_lamports.saturating_sub(before.vault_lamports);
        if received != INITIALIZE_VAULT_LAMPORTS {
            return Err(RemoteCallFailure::StateMismatch {
                reason: format!(
                    "vault received {received} lamports, expected {INITIALIZE_VAULT_LAMPORTS}"
                ),
            });
        }

        Ok(())
    }
}

pub struct InitializeRequest<'a> {
    provider: &'a ProviderContext,
    program_id: Pubkey,
    super_admin: Pubkey,
    state: Keypair,
    state_space: usize,
    send_config: SendTransactionConfig,
}

impl InitializeRequest<'_> {
    pub fn super_admin(mut self, super_admin: Pubkey) -> Self {
        self.super_admin = super_admin;
        self
    }

    /// Uses `state` as the fresh state account instead of a random keypair.
    pub fn state(mut self, state: Keypair) -> Self {
        self.state = state;
        self
    }

    pub fn state_space(mut self, state_space: usize) -> Self {
        self.state_space = state_space;
        self
    }

    pub fn send_config(mut self, send_config: SendTransactionConfig) -> Self {
        self.send_config = send_config;
        self
    }

    pub fn state_pubkey(&self) -> Pubkey {
        self.state.pubkey()
    }

    fn initialize_instruction(&self) -> Initialize {
        Initialize {
            program_id: self.program_id,
            initializer: self.provider.payer_pubkey(),
            super_admin: self.super_admin,
            state: self.state.pubkey(),
        }
    }

    pub fn accounts(&self) -> InitializeAccounts {
        self.initialize_instruction().accounts()
    }

    /// Lamports the payer spends besides fees: state account rent plus the vault seed.
    pub fn required_lamports(state_rent: u64) -> u64 {
        state_rent.saturating_add(INITIALIZE_VAULT_LAMPORTS)
    }

    /// The transaction body: allocate the zeroed, program-owned state account, then `initialize`.
    pub fn instructions(&self, state_rent: u64) -> Vec<Instruction> {
        vec![
            create_account(
                &self.provider.payer_pubkey(),
                &self.state.pubkey(),
                state_rent,
                self.state_space as u64,
                &self.program_id,
            ),
            self.initialize_instruction().to_instruction(),
        ]
    }

    /// Submits the call once and waits for confirmation.
    pub async fn rpc(self) -> Result<TransactionReceipt, RemoteCallFailure> {
        let endpoint = self.provider.endpoint();
        let state_rent = self
            .provider
            .rpc
            .get_minimum_balance_for_rent_exemption(self.state_space)
            .await
            .map_err(|error| {
                RemoteCallFailure::classify(
                    error,
                    &CallSite {
                        endpoint: &endpoint,
                        signer: self.provider.payer_pubkey(),
                        program_id: self.program_id,
                        instructions: &[],
                    },
                )
            })?;
        if self.send_config.debug_logs {
            log_info(
                "Lamports",
                format!("{} (state rent + vault seed)", Self::required_lamports(state_rent)),
            );
        }

        let instructions = self.instructions(state_rent);
        let signature = send_and_confirm(
            self.provider,
            &[&self.state],
            &instructions,
            self.program_id,
            &self.send_config,
        )
        .await?;

        TransactionReceipt::new(signature, self.program_id, self.provider.payer_pubkey())
    }
}
