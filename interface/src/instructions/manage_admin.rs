use solana_instruction::AccountMeta;
use solana_sdk::pubkey::Pubkey;

use crate::{
    discriminator::{
        ADD_ADMIN_DISCRIMINATOR,
        DELETE_ADMIN_DISCRIMINATOR,
        DISCRIMINATOR_LEN,
    },
    instructions::RemoteInstruction,
    pda::{
        find_admin_info_address,
        find_pool_address,
    },
};

const MANAGE_ADMIN_ACCOUNT_NAMES: &[&str] = &["authority", "pool", "admin_info", "admin"];

/// Shared account list of `add_admin` and `delete_admin`.
///
/// ### Accounts
///  0. `[WRITE, SIGNER]` Authority, must be the pool's super admin
///  1. `[READ]` Pool PDA
///  2. `[WRITE]` Admin info PDA
///  3. `[READ]` Admin being added or removed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManageAdminAccounts {
    pub authority: Pubkey,
    pub pool: Pubkey,
    pub admin_info: Pubkey,
    pub admin: Pubkey,
}

impl ManageAdminAccounts {
    pub fn new(program_id: &Pubkey, authority: Pubkey, admin: Pubkey) -> Self {
        Self {
            authority,
            pool: find_pool_address(program_id).0,
            admin_info: find_admin_info_address(program_id).0,
            admin,
        }
    }

    pub fn to_account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.authority, true),
            AccountMeta::new_readonly(self.pool, false),
            AccountMeta::new(self.admin_info, false),
            AccountMeta::new_readonly(self.admin, false),
        ]
    }
}

/// Appends `admin` to the admin list. The list holds at most 15 entries.
#[derive(Clone, Debug)]
pub struct AddAdmin {
    pub program_id: Pubkey,
    pub authority: Pubkey,
    pub admin: Pubkey,
}

/// Removes `admin` from the admin list.
#[derive(Clone, Debug)]
pub struct DeleteAdmin {
    pub program_id: Pubkey,
    pub authority: Pubkey,
    pub admin: Pubkey,
}

impl RemoteInstruction for AddAdmin {
    const NAME: &'static str = "add_admin";
    const DISCRIMINATOR: [u8; DISCRIMINATOR_LEN] = ADD_ADMIN_DISCRIMINATOR;
    const ACCOUNT_NAMES: &'static [&'static str] = MANAGE_ADMIN_ACCOUNT_NAMES;

    fn program_id(&self) -> Pubkey {
        self.program_id
    }

    fn account_metas(&self) -> Vec<AccountMeta> {
        ManageAdminAccounts::new(&self.program_id, self.authority, self.admin).to_account_metas()
    }
}

impl RemoteInstruction for DeleteAdmin {
    const NAME: &'static str = "delete_admin";
    const DISCRIMINATOR: [u8; DISCRIMINATOR_LEN] = DELETE_ADMIN_DISCRIMINATOR;
    const ACCOUNT_NAMES: &'static [&'static str] = MANAGE_ADMIN_ACCOUNT_NAMES;

    fn program_id(&self) -> Pubkey {
        self.program_id
    }

    fn account_metas(&self) -> Vec<AccountMeta> {
        ManageAdminAccounts::new(&self.program_id, self.authority, self.admin).to_account_metas()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program;

    #[test]
    fn add_and_delete_share_accounts_but_not_selectors() {
        let authority = Pubkey::new_unique();
        let admin = Pubkey::new_unique();
        let add = AddAdmin {
            program_id: program::ID,
            authority,
            admin,
        }
        .to_instruction();
        let delete = DeleteAdmin {
            program_id: program::ID,
            authority,
            admin,
        }
        .to_instruction();

        assert_eq!(add.accounts, delete.accounts);
        assert_eq!(add.data, ADD_ADMIN_DISCRIMINATOR);
        assert_eq!(delete.data, DELETE_ADMIN_DISCRIMINATOR);
    }

    #[test]
    fn account_order_and_flags() {
        let authority = Pubkey::new_unique();
        let admin = Pubkey::new_unique();
        let metas = AddAdmin {
            program_id: program::ID,
            authority,
            admin,
        }
        .account_metas();

        let expected = [
            (authority, true, true),
            (find_pool_address(&program::ID).0, false, false),
            (find_admin_info_address(&program::ID).0, false, true),
            (admin, false, false),
        ];

        assert_eq!(metas.len(), AddAdmin::ACCOUNT_NAMES.len());
        for (meta, (pubkey, is_signer, is_writable)) in metas.iter().zip(expected) {
            assert_eq!(meta.pubkey, pubkey);
            assert_eq!(meta.is_signer, is_signer);
            assert_eq!(meta.is_writable, is_writable);
        }
    }
}
