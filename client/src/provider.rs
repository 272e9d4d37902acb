//! The explicit provider context: one RPC endpoint and one signing identity, built once per run and
//! passed by reference to everything that talks to the cluster.

use anyhow::Context;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use solana_sdk::{
    pubkey::Pubkey,
    signature::Keypair,
    signer::Signer,
};

use crate::config::ProbeConfig;

pub struct ProviderContext {
    pub rpc: RpcClient,
    payer: Keypair,
}

impl ProviderContext {
    /// Connects to the configured endpoint and loads the wallet keypair from disk.
    ///
    /// No request is made here; an unreachable endpoint only surfaces on the first call.
    pub fn new(config: &ProbeConfig) -> anyhow::Result<Self> {
        let payer = solana_keypair::read_keypair_file(&config.wallet_path)
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| {
                format!(
                    "Couldn't read the wallet keypair at {}",
                    config.wallet_path.display()
                )
            })?;
        let rpc = RpcClient::new_with_commitment(config.rpc_url.clone(), config.commitment);

        Ok(Self::with_payer(rpc, payer))
    }

    pub fn with_payer(rpc: RpcClient, payer: Keypair) -> Self {
        Self { rpc, payer }
    }

    pub fn payer(&self) -> &Keypair {
        &self.payer
    }

    pub fn payer_pubkey(&self) -> Pubkey {
        self.payer.pubkey()
    }

    pub fn endpoint(&self) -> String {
        self.rpc.url()
    }

    pub fn commitment(&self) -> CommitmentConfig {
        self.rpc.commitment()
    }
}
