//! Environment-driven configuration for the probe.
//!
//! Variable names follow Anchor's provider conventions so an existing `anchor test` environment
//! works unchanged.

use std::{
    path::PathBuf,
    str::FromStr,
};

use anyhow::Context;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use spin_game_interface::{
    constants::DEFAULT_STATE_ACCOUNT_SPACE,
    program,
};

pub const PROVIDER_URL_VAR: &str = "ANCHOR_PROVIDER_URL";
pub const WALLET_VAR: &str = "ANCHOR_WALLET";
pub const PROGRAM_ID_VAR: &str = "SPIN_GAME_PROGRAM_ID";
pub const COMMITMENT_VAR: &str = "SPIN_GAME_COMMITMENT";
pub const STATE_SPACE_VAR: &str = "SPIN_GAME_STATE_SPACE";
pub const COMPUTE_UNITS_VAR: &str = "SPIN_GAME_COMPUTE_UNITS";
pub const DEBUG_LOGS_VAR: &str = "SPIN_GAME_DEBUG_LOGS";
pub const CHECK_DEPLOYMENT_VAR: &str = "SPIN_GAME_CHECK_DEPLOYMENT";
pub const VERIFY_STATE_VAR: &str = "SPIN_GAME_VERIFY_STATE";

pub const LOCALNET_URL: &str = "http://127.0.0.1:8899";
const DEFAULT_WALLET_PATH: &str = ".config/solana/id.json";

#[derive(Clone, Debug)]
pub struct ProbeConfig {
    pub rpc_url: String,
    pub wallet_path: PathBuf,
    pub commitment: CommitmentConfig,
    pub program_id: Pubkey,
    /// Bytes allocated for the zeroed `state` account created with `initialize`.
    pub state_space: usize,
    /// Prepends compute budget instructions when set.
    pub compute_units: Option<u32>,
    pub debug_logs: bool,
    /// Confirms the program account is deployed and executable before submitting.
    pub check_deployment: bool,
    /// Reads the initialized PDAs back after confirmation and checks the vault was funded.
    pub verify_state: bool,
}

impl ProbeConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source. Unset keys fall back to localnet defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let rpc_url = lookup(PROVIDER_URL_VAR)
            .map(|url| resolve_cluster_url(&url))
            .unwrap_or_else(|| LOCALNET_URL.to_string());

        let wallet_path = match lookup(WALLET_VAR) {
            Some(path) => PathBuf::from(path),
            None => {
                let home = lookup("HOME").with_context(|| {
                    format!("{WALLET_VAR} is unset and there's no HOME to find a default wallet")
                })?;
                PathBuf::from(home).join(DEFAULT_WALLET_PATH)
            }
        };

        let commitment = lookup(COMMITMENT_VAR)
            .map(|level| parse_commitment(&level))
            .transpose()?
            .unwrap_or_else(CommitmentConfig::confirmed);

        let program_id = lookup(PROGRAM_ID_VAR)
            .map(|id| {
                Pubkey::from_str(&id).with_context(|| format!("{PROGRAM_ID_VAR} is invalid: {id}"))
            })
            .transpose()?
            .unwrap_or(program::ID);

        let state_space = lookup(STATE_SPACE_VAR)
            .map(|space| {
                space
                    .parse::<usize>()
                    .with_context(|| format!("{STATE_SPACE_VAR} is invalid: {space}"))
            })
            .transpose()?
            .unwrap_or(DEFAULT_STATE_ACCOUNT_SPACE);
        if state_space == 0 {
            anyhow::bail!("{STATE_SPACE_VAR} must be greater than zero");
        }

        let compute_units = lookup(COMPUTE_UNITS_VAR)
            .map(|units| {
                units
                    .parse::<u32>()
                    .with_context(|| format!("{COMPUTE_UNITS_VAR} is invalid: {units}"))
            })
            .transpose()?;

        let debug_logs = lookup(DEBUG_LOGS_VAR)
            .map(|flag| parse_flag(DEBUG_LOGS_VAR, &flag))
            .transpose()?
            .unwrap_or(true);

        let check_deployment = lookup(CHECK_DEPLOYMENT_VAR)
            .map(|flag| parse_flag(CHECK_DEPLOYMENT_VAR, &flag))
            .transpose()?
            .unwrap_or(true);

        let verify_state = lookup(VERIFY_STATE_VAR)
            .map(|flag| parse_flag(VERIFY_STATE_VAR, &flag))
            .transpose()?
            .unwrap_or(false);

        Ok(Self {
            rpc_url,
            wallet_path,
            commitment,
            program_id,
            state_space,
            compute_units,
            debug_logs,
            check_deployment,
            verify_state,
        })
    }
}

/// Maps the cluster monikers Anchor accepts to their RPC URLs; anything else is used verbatim.
pub fn resolve_cluster_url(url_or_moniker: &str) -> String {
    match url_or_moniker.trim() {
        "localnet" | "l" => LOCALNET_URL.to_string(),
        "devnet" | "d" => "https://api.devnet.solana.com".to_string(),
        "testnet" | "t" => "https://api.testnet.solana.com".to_string(),
        "mainnet" | "mainnet-beta" | "m" => "https://api.mainnet-beta.solana.com".to_string(),
        url => url.to_string(),
    }
}

pub fn parse_commitment(level: &str) -> anyhow::Result<CommitmentConfig> {
    match level.trim().to_ascii_lowercase().as_str() {
        "processed" => Ok(CommitmentConfig::processed()),
        "confirmed" => Ok(CommitmentConfig::confirmed()),
        "finalized" => Ok(CommitmentConfig::finalized()),
        other => Err(anyhow::anyhow!("Unknown commitment level: {other}")),
    }
}

fn parse_flag(key: &str, value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow::anyhow!("{key} should be a boolean, got {other}")),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> anyhow::Result<ProbeConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ProbeConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_localnet() -> anyhow::Result<()> {
        let config = config_from(&[("HOME", "/home/tester")])?;

        assert_eq!(config.rpc_url, LOCALNET_URL);
        assert_eq!(
            config.wallet_path,
            PathBuf::from("/home/tester/.config/solana/id.json")
        );
        assert_eq!(config.commitment, CommitmentConfig::confirmed());
        assert_eq!(config.program_id, program::ID);
        assert_eq!(config.state_space, DEFAULT_STATE_ACCOUNT_SPACE);
        assert_eq!(config.compute_units, None);
        assert!(config.debug_logs);
        assert!(config.check_deployment);
        assert!(!config.verify_state);
        Ok(())
    }

    #[test]
    fn reads_anchor_provider_vars() -> anyhow::Result<()> {
        let program_id = Pubkey::new_unique();
        let program_id_str = program_id.to_string();
        let config = config_from(&[
            (PROVIDER_URL_VAR, "http://10.0.0.2:8899"),
            (WALLET_VAR, "/keys/payer.json"),
            (PROGRAM_ID_VAR, &program_id_str),
            (COMMITMENT_VAR, "Finalized"),
            (STATE_SPACE_VAR, "4096"),
            (COMPUTE_UNITS_VAR, "200000"),
            (DEBUG_LOGS_VAR, "off"),
            (CHECK_DEPLOYMENT_VAR, "0"),
            (VERIFY_STATE_VAR, "yes"),
        ])?;

        assert_eq!(config.rpc_url, "http://10.0.0.2:8899");
        assert_eq!(config.wallet_path, PathBuf::from("/keys/payer.json"));
        assert_eq!(config.program_id, program_id);
        assert_eq!(config.commitment, CommitmentConfig::finalized());
        assert_eq!(config.state_space, 4096);
        assert_eq!(config.compute_units, Some(200_000));
        assert!(!config.debug_logs);
        assert!(!config.check_deployment);
        assert!(config.verify_state);
        Ok(())
    }

    #[test]
    fn cluster_monikers() {
        assert_eq!(resolve_cluster_url("localnet"), LOCALNET_URL);
        assert_eq!(
            resolve_cluster_url("devnet"),
            "https://api.devnet.solana.com"
        );
        assert_eq!(
            resolve_cluster_url("mainnet-beta"),
            "https://api.mainnet-beta.solana.com"
        );
        assert_eq!(resolve_cluster_url("http://x:1"), "http://x:1");
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(config_from(&[(WALLET_VAR, "/k.json"), (PROGRAM_ID_VAR, "not-a-key")]).is_err());
        assert!(config_from(&[(WALLET_VAR, "/k.json"), (COMMITMENT_VAR, "soon")]).is_err());
        assert!(config_from(&[(WALLET_VAR, "/k.json"), (STATE_SPACE_VAR, "0")]).is_err());
        assert!(config_from(&[(WALLET_VAR, "/k.json"), (DEBUG_LOGS_VAR, "maybe")]).is_err());
    }

    #[test]
    fn state_space_must_fit_in_memory() {
        let too_large = format!("{}0", usize::MAX);
        assert!(config_from(&[(WALLET_VAR, "/k.json"), (STATE_SPACE_VAR, &too_large)]).is_err());
        assert!(config_from(&[(WALLET_VAR, "/k.json"), (STATE_SPACE_VAR, "-1")]).is_err());
    }

    #[test]
    fn missing_wallet_and_home_is_an_error() {
        assert!(config_from(&[]).is_err());
    }
}
