//! Submits `spin_game`'s `initialize` once against the configured cluster and prints the
//! transaction signature.
//!
//! Flags override the `ANCHOR_PROVIDER_URL`/`ANCHOR_WALLET` environment.

use std::{
    path::PathBuf,
    str::FromStr,
};

use anyhow::Context;
use clap::Parser;
use client::{
    config::resolve_cluster_url,
    idl::ProgramIdl,
    logs::log_success,
    print_kv,
    InitializationProbe,
    LogColor,
    ProbeConfig,
    ProviderContext,
};
use solana_sdk::pubkey::Pubkey;

#[derive(Parser, Debug)]
#[command(about = "Calls spin_game::initialize and prints the transaction signature")]
struct Args {
    /// RPC URL or cluster moniker (localnet, devnet, testnet, mainnet).
    #[arg(long, short)]
    url: Option<String>,
    /// Path to the payer keypair; must be the program's initializer.
    #[arg(long, short)]
    wallet: Option<PathBuf>,
    #[arg(long)]
    program_id: Option<String>,
    /// An Anchor IDL to check against the compiled-in interface before submitting.
    #[arg(long)]
    idl: Option<PathBuf>,
    /// Only print the signature line.
    #[arg(long, short)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = ProbeConfig::from_env()?;
    if let Some(url) = args.url {
        config.rpc_url = resolve_cluster_url(&url);
    }
    if let Some(wallet) = args.wallet {
        config.wallet_path = wallet;
    }
    if let Some(program_id) = args.program_id {
        config.program_id = Pubkey::from_str(&program_id)
            .with_context(|| format!("Invalid program id {program_id}"))?;
    }
    if args.quiet {
        config.debug_logs = false;
    }

    if let Some(idl_path) = args.idl {
        ProgramIdl::from_file(&idl_path)?.verify_initialize(&config.program_id)?;
        if config.debug_logs {
            log_success("IDL", format!("{} matches", idl_path.display()));
        }
    }

    let provider = ProviderContext::new(&config)?;
    if config.debug_logs {
        print_kv!("Payer", provider.payer_pubkey(), LogColor::Info);
    }

    let receipt = InitializationProbe::new(&provider, &config).run().await?;
    if config.debug_logs {
        print_kv!("Program", receipt.program_id(), LogColor::Info);
    }

    Ok(())
}
