//! Checks an Anchor IDL artifact against the compiled-in instruction interfaces.
//!
//! The probe never needs the IDL to run. This exists so a test can fail early when the deployed
//! program's published interface drifts from what this client builds.

use std::{
    path::Path,
    str::FromStr,
};

use anyhow::{
    bail,
    Context,
};
use serde::Deserialize;
use solana_sdk::pubkey::Pubkey;
use spin_game_interface::instructions::{
    initialize::Initialize,
    RemoteInstruction,
};

#[derive(Debug, Deserialize)]
pub struct ProgramIdl {
    /// Present in IDLs generated by Anchor 0.30 and later.
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub metadata: Option<IdlMetadata>,
    /// Legacy IDLs keep the name at the top level.
    #[serde(default)]
    pub name: Option<String>,
    pub instructions: Vec<IdlInstruction>,
}

#[derive(Debug, Deserialize)]
pub struct IdlMetadata {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct IdlInstruction {
    pub name: String,
    #[serde(default)]
    pub discriminator: Option<Vec<u8>>,
    pub accounts: Vec<IdlAccount>,
    #[serde(default)]
    pub args: Vec<IdlArg>,
}

#[derive(Debug, Deserialize)]
pub struct IdlArg {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: serde_json::Value,
}

#[derive(Debug, Deserialize)]
pub struct IdlAccount {
    pub name: String,
    #[serde(default, alias = "isMut")]
    pub writable: bool,
    #[serde(default, alias = "isSigner")]
    pub signer: bool,
}

impl ProgramIdl {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Couldn't read IDL at {}", path.display()))?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Couldn't parse IDL JSON")
    }

    pub fn program_name(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .map(|metadata| metadata.name.as_str())
            .or(self.name.as_deref())
    }

    pub fn program_id(&self) -> anyhow::Result<Option<Pubkey>> {
        self.address
            .as_deref()
            .map(|address| {
                Pubkey::from_str(address).with_context(|| format!("Invalid IDL address {address}"))
            })
            .transpose()
    }

    pub fn instruction(&self, name: &str) -> Option<&IdlInstruction> {
        self.instructions
            .iter()
            .find(|instruction| normalize(&instruction.name) == normalize(name))
    }

    /// Fails with a description of the first difference between the IDL's `initialize` and the
    /// static [`Initialize`] definition for `program_id`.
    pub fn verify_initialize(&self, program_id: &Pubkey) -> anyhow::Result<()> {
        self.verify(&Initialize {
            program_id: *program_id,
            initializer: Pubkey::new_unique(),
            super_admin: Pubkey::new_unique(),
            state: Pubkey::new_unique(),
        })
    }

    /// Checks the IDL entry named [`RemoteInstruction::NAME`] against `instruction`'s address,
    /// selector, account list, and argument names.
    pub fn verify<I: RemoteInstruction>(&self, instruction: &I) -> anyhow::Result<()> {
        let program_id = instruction.program_id();
        if let Some(address) = self.program_id()? {
            if address != program_id {
                bail!("IDL address {address} doesn't match program {program_id}");
            }
        }

        let entry = self
            .instruction(I::NAME)
            .with_context(|| format!("IDL has no `{}` instruction", I::NAME))?;

        if let Some(discriminator) = &entry.discriminator {
            if discriminator.as_slice() != I::DISCRIMINATOR {
                bail!(
                    "IDL discriminator {discriminator:?} doesn't match {:?}",
                    I::DISCRIMINATOR
                );
            }
        }

        if entry.args.len() != I::ARG_NAMES.len() {
            bail!(
                "IDL `{}` takes {} argument(s), expected {}",
                I::NAME,
                entry.args.len(),
                I::ARG_NAMES.len()
            );
        }
        for (arg, expected_name) in entry.args.iter().zip(I::ARG_NAMES) {
            if normalize(&arg.name) != normalize(expected_name) {
                bail!("`{}` argument is `{}`, expected `{expected_name}`", I::NAME, arg.name);
            }
        }

        let expected_metas = instruction.account_metas();
        if entry.accounts.len() != expected_metas.len() {
            bail!(
                "IDL `{}` has {} accounts, expected {}",
                I::NAME,
                entry.accounts.len(),
                expected_metas.len()
            );
        }

        for (i, ((account, meta), expected_name)) in entry
            .accounts
            .iter()
            .zip(expected_metas.iter())
            .zip(I::ACCOUNT_NAMES)
            .enumerate()
        {
            if normalize(&account.name) != normalize(expected_name) {
                bail!("Account #{i} is `{}`, expected `{expected_name}`", account.name);
            }
            if account.signer != meta.is_signer || account.writable != meta.is_writable {
                bail!(
                    "Account `{expected_name}` flags (signer: {}, writable: {}) don't match \
                     (signer: {}, writable: {})",
                    account.signer,
                    account.writable,
                    meta.is_signer,
                    meta.is_writable
                );
            }
        }

        Ok(())
    }
}

/// IDLs before Anchor 0.30 use camelCase names; newer ones use snake_case.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
