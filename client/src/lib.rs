//! Client-side probe for the deployed `spin_game` program.
//!
//! Builds an explicit provider context, resolves a statically typed program handle, submits
//! `initialize` once, and reports the transaction signature.

pub mod config;
pub mod error;
pub mod idl;
pub mod logs;
pub mod pretty;
pub mod probe;
pub mod program;
pub mod provider;
pub mod receipt;
pub mod transactions;

pub use config::ProbeConfig;
pub use error::RemoteCallFailure;
pub use logs::LogColor;
pub use probe::{
    InitializationProbe,
    ProbeState,
};
pub use provider::ProviderContext;
pub use receipt::TransactionReceipt;
