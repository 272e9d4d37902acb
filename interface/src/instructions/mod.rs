use solana_instruction::{
    AccountMeta,
    Instruction,
};
use solana_sdk::pubkey::Pubkey;

use crate::discriminator::DISCRIMINATOR_LEN;

pub mod initialize;
pub mod manage_admin;
pub mod set_pay_info;

/// A remote instruction known at compile time: its IDL name, its selector, and how to build it.
pub trait RemoteInstruction {
    const NAME: &'static str;
    const DISCRIMINATOR: [u8; DISCRIMINATOR_LEN];
    /// Account names in instruction order, as the program's IDL spells them.
    const ACCOUNT_NAMES: &'static [&'static str];
    const ARG_NAMES: &'static [&'static str] = &[];

    fn program_id(&self) -> Pubkey;

    fn account_metas(&self) -> Vec<AccountMeta>;

    /// Borsh-encoded arguments that follow the discriminator.
    fn pack_args(&self) -> Vec<u8> {
        vec![]
    }

    fn to_instruction(&self) -> Instruction {
        Instruction {
            program_id: self.program_id(),
            accounts: self.account_metas(),
            data: [Self::DISCRIMINATOR.as_slice(), &self.pack_args()].concat(),
        }
    }
}
