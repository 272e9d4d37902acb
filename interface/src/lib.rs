//! Static description of the deployed `spin_game` program's call surface: `initialize` and the
//! admin instructions whose accounts are fully determined by the program's PDAs.
//!
//! Nothing here talks to a cluster. The client crate uses these definitions to build the exact
//! instructions the remote program expects without loading an IDL at runtime.

pub mod constants;
pub mod discriminator;
pub mod error;
pub mod instructions;
pub mod pda;

pub mod program {
    use solana_sdk::{
        pubkey,
        pubkey::Pubkey,
    };

    pub const ID: Pubkey = pubkey!("BgNAhuXboSjPugSwmVu43yPXEXguZF7ToNePWuzCTcZe");

    /// The program name used in IDL artifacts and Anchor workspace lookups.
    pub const NAME: &str = "spin_game";
}
