use solana_sdk::{
    pubkey,
    pubkey::Pubkey,
};

/// The only key the remote program accepts as the `initialize` signer.
pub const INITIALIZER_KEY: Pubkey = pubkey!("3ttYrBAp5D2sTG2gaBjg8EtrZecqBQSBuFRhsqHWPYxX");

/// Receives the developer fee; `initialize` writes it into the pool.
pub const DEV_WALLET_KEY: Pubkey = pubkey!("74abUnzELqrKsJip68xVQdvduUUzQanjsdoN6jnRzqfp");

pub const SYSTEM_PROGRAM_ID: Pubkey = pubkey!("11111111111111111111111111111111");

pub const POOL_SEED: &[u8] = b"sw_game_vault_auth";
pub const LAST_USERS_SEED: &[u8] = b"LAST_USERS_SEED";
pub const ADMIN_LIST_SEED: &[u8] = b"ADMIN_LIST_SEED";
pub const VAULT_SEED: &[u8] = b"SOL_VAULT";

/// Lamports `initialize` moves from the initializer into the SOL vault.
pub const INITIALIZE_VAULT_LAMPORTS: u64 = 10_000_000;

/// Fees passed to `set_pay_info` are fixed-point with this many units per percent.
pub const PERCENT_MULTIPLIER: u64 = 1000;

/// `set_pay_info` rejects a burn fee plus dev fee at or above this.
pub const MAX_TOTAL_FEE: u64 = 100 * PERCENT_MULTIPLIER;

/// Default size of the zeroed `state` account created alongside `initialize`.
///
/// The remote program only requires the account to be zeroed, program-owned, and at least as large
/// as its item list, so this over-allocates.
pub const DEFAULT_STATE_ACCOUNT_SPACE: usize = 10_240;
