use solana_instruction::AccountMeta;
use solana_sdk::pubkey::Pubkey;

use crate::{
    constants::SYSTEM_PROGRAM_ID,
    discriminator::{
        DISCRIMINATOR_LEN,
        INITIALIZE_DISCRIMINATOR,
    },
    instructions::RemoteInstruction,
    pda::{
        find_admin_info_address,
        find_last_users_address,
        find_pool_address,
        find_vault_address,
    },
};

/// Creates the game pool, the latest-users ring, the admin list, and seeds the SOL vault.
///
/// Takes no arguments; the instruction data is the discriminator alone.
///
/// ### Accounts
///  0. `[WRITE, SIGNER]` Initializer, must be [`crate::constants::INITIALIZER_KEY`]
///  1. `[WRITE]` Pool PDA
///  2. `[WRITE]` Last users PDA
///  3. `[READ]` Super admin
///  4. `[WRITE, SIGNER]` State account, zeroed and owned by the program
///  5. `[WRITE]` Admin info PDA
///  6. `[WRITE]` SOL vault PDA
///  7. `[READ]` System program
#[derive(Clone, Debug)]
pub struct Initialize {
    pub program_id: Pubkey,
    pub initializer: Pubkey,
    pub super_admin: Pubkey,
    pub state: Pubkey,
}

/// The fully resolved account list for [`Initialize`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitializeAccounts {
    pub initializer: Pubkey,
    pub pool: Pubkey,
    pub last_users: Pubkey,
    pub super_admin: Pubkey,
    pub state: Pubkey,
    pub admin_info: Pubkey,
    pub vault: Pubkey,
    pub system_program: Pubkey,
}

impl Initialize {
    pub fn accounts(&self) -> InitializeAccounts {
        InitializeAccounts {
            initializer: self.initializer,
            pool: find_pool_address(&self.program_id).0,
            last_users: find_last_users_address(&self.program_id).0,
            super_admin: self.super_admin,
            state: self.state,
            admin_info: find_admin_info_address(&self.program_id).0,
            vault: find_vault_address(&self.program_id).0,
            system_program: SYSTEM_PROGRAM_ID,
        }
    }
}

impl InitializeAccounts {
    pub fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.initializer, true),
            AccountMeta::new(self.pool, false),
            AccountMeta::new(self.last_users, false),
            AccountMeta::new_readonly(self.super_admin, false),
            AccountMeta::new(self.state, true),
            AccountMeta::new(self.admin_info, false),
            AccountMeta::new(self.vault, false),
            AccountMeta::new_readonly(self.system_program, false),
        ]
    }
}

impl RemoteInstruction for Initialize {
    const NAME: &'static str = "initialize";
    const DISCRIMINATOR: [u8; DISCRIMINATOR_LEN] = INITIALIZE_DISCRIMINATOR;
    const ACCOUNT_NAMES: &'static [&'static str] = &[
        "initializer",
        "pool",
        "last_users",
        "super_admin",
        "state",
        "admin_info",
        "vault",
        "system_program",
    ];

    fn program_id(&self) -> Pubkey {
        self.program_id
    }

    fn account_metas(&self) -> Vec<AccountMeta> {
        self.accounts().to_account_metas()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        discriminator::instruction_discriminator,
        program,
    };

    fn initialize() -> Initialize {
        Initialize {
            program_id: program::ID,
            initializer: Pubkey::new_unique(),
            super_admin: Pubkey::new_unique(),
            state: Pubkey::new_unique(),
        }
    }

    #[test]
    fn instruction_data_is_only_the_discriminator() {
        let instruction = initialize().to_instruction();
        assert_eq!(instruction.program_id, program::ID);
        assert_eq!(instruction.data, instruction_discriminator(Initialize::NAME));
    }

    #[test]
    fn account_order_and_flags() {
        let ix = initialize();
        let accounts = ix.accounts();
        let metas = ix.to_instruction().accounts;

        let expected = [
            (accounts.initializer, true, true),
            (accounts.pool, false, true),
            (accounts.last_users, false, true),
            (accounts.super_admin, false, false),
            (accounts.state, true, true),
            (accounts.admin_info, false, true),
            (accounts.vault, false, true),
            (SYSTEM_PROGRAM_ID, false, false),
        ];

        assert_eq!(metas.len(), expected.len());
        assert_eq!(Initialize::ACCOUNT_NAMES.len(), expected.len());
        for (meta, (pubkey, is_signer, is_writable)) in metas.iter().zip(expected) {
            assert_eq!(meta.pubkey, pubkey);
            assert_eq!(meta.is_signer, is_signer);
            assert_eq!(meta.is_writable, is_writable);
        }
    }

    #[test]
    fn pdas_follow_the_program_id() {
        let mut ix = initialize();
        let default_accounts = ix.accounts();
        ix.program_id = Pubkey::new_unique();
        let other_accounts = ix.accounts();

        assert_ne!(default_accounts.pool, other_accounts.pool);
        assert_ne!(default_accounts.vault, other_accounts.vault);
        assert_eq!(default_accounts.initializer, other_accounts.initializer);
    }
}
