use solana_instruction::AccountMeta;
use solana_sdk::pubkey::Pubkey;

use crate::{
    constants::MAX_TOTAL_FEE,
    discriminator::{
        DISCRIMINATOR_LEN,
        SET_PAY_INFO_DISCRIMINATOR,
    },
    instructions::RemoteInstruction,
    pda::{
        find_admin_info_address,
        find_pool_address,
    },
};

/// Sets the spin price. When signed by the super admin it also replaces the fee split.
///
/// Fees are in [`crate::constants::PERCENT_MULTIPLIER`] units per percent.
///
/// ### Accounts
///  0. `[WRITE, SIGNER]` Admin or super admin
///  1. `[WRITE]` Pool PDA
///  2. `[WRITE]` Admin info PDA
#[derive(Clone, Debug)]
pub struct SetPayInfo {
    pub program_id: Pubkey,
    pub admin: Pubkey,
    pub price: u64,
    pub dev_fee: u64,
    pub dev_wallet: Pubkey,
    pub burn_fee: u64,
    pub burn_wallet: Pubkey,
}

impl SetPayInfo {
    /// Whether the program will accept the fee split.
    pub fn fees_within_limit(&self) -> bool {
        self.dev_fee
            .checked_add(self.burn_fee)
            .is_some_and(|total| total < MAX_TOTAL_FEE)
    }
}

impl RemoteInstruction for SetPayInfo {
    const NAME: &'static str = "set_pay_info";
    const DISCRIMINATOR: [u8; DISCRIMINATOR_LEN] = SET_PAY_INFO_DISCRIMINATOR;
    const ACCOUNT_NAMES: &'static [&'static str] = &["admin", "pool", "admin_info"];
    const ARG_NAMES: &'static [&'static str] =
        &["price", "dev_fee", "dev_wallet", "burn_fee", "burn_wallet"];

    fn program_id(&self) -> Pubkey {
        self.program_id
    }

    fn account_metas(&self) -> Vec<AccountMeta> {
        vec![
            AccountMeta::new(self.admin, true),
            AccountMeta::new(find_pool_address(&self.program_id).0, false),
            AccountMeta::new(find_admin_info_address(&self.program_id).0, false),
        ]
    }

    fn pack_args(&self) -> Vec<u8> {
        [
            self.price.to_le_bytes().as_slice(),
            &self.dev_fee.to_le_bytes(),
            self.dev_wallet.as_ref(),
            &self.burn_fee.to_le_bytes(),
            self.burn_wallet.as_ref(),
        ]
        .concat()
    }
}
