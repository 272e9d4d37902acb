//! PDA helpers for deriving the accounts `initialize` creates.

use solana_sdk::pubkey::Pubkey;

use crate::constants::{
    ADMIN_LIST_SEED,
    LAST_USERS_SEED,
    POOL_SEED,
    VAULT_SEED,
};

/// The pool PDA also acts as the token escrow authority.
pub fn find_pool_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL_SEED], program_id)
}

pub fn find_last_users_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[LAST_USERS_SEED], program_id)
}

pub fn find_admin_info_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ADMIN_LIST_SEED], program_id)
}

/// The system-owned SOL vault funded during `initialize`.
pub fn find_vault_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED], program_id)
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::program;

    #[test]
    fn pdas_are_deterministic() {
        assert_eq!(find_pool_address(&program::ID), find_pool_address(&program::ID));
        assert_eq!(find_vault_address(&program::ID), find_vault_address(&program::ID));
    }

    #[test]
    fn pdas_are_distinct_and_off_curve() {
        let addresses = [
            find_pool_address(&program::ID).0,
            find_last_users_address(&program::ID).0,
            find_admin_info_address(&program::ID).0,
            find_vault_address(&program::ID).0,
        ];

        assert!(addresses.iter().all_unique());
        assert!(addresses.iter().all(|address| !address.is_on_curve()));
    }

    #[test]
    fn pdas_depend_on_program_id() {
        let other = Pubkey::new_unique();
        assert_ne!(find_pool_address(&program::ID).0, find_pool_address(&other).0);
    }
}
