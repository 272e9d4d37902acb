use std::path::PathBuf;

use client::idl::ProgramIdl;
use solana_sdk::pubkey::Pubkey;
use spin_game_interface::{
    constants::DEV_WALLET_KEY,
    instructions::{
        initialize::Initialize,
        manage_admin::{
            AddAdmin,
            DeleteAdmin,
        },
        set_pay_info::SetPayInfo,
        RemoteInstruction,
    },
    program,
};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/spin_game.json")
}

#[test]
fn published_idl_matches_static_interface() -> anyhow::Result<()> {
    let idl = ProgramIdl::from_file(fixture())?;

    assert_eq!(idl.program_name(), Some(program::NAME));
    assert_eq!(idl.program_id()?, Some(program::ID));

    let initialize = idl
        .instruction(Initialize::NAME)
        .expect("fixture has initialize");
    assert_eq!(
        initialize.discriminator.as_deref(),
        Some(Initialize::DISCRIMINATOR.as_slice())
    );

    idl.verify_initialize(&program::ID)
}

#[test]
fn admin_instructions_match_static_interface() -> anyhow::Result<()> {
    let idl = ProgramIdl::from_file(fixture())?;
    let authority = Pubkey::new_unique();
    let admin = Pubkey::new_unique();

    idl.verify(&AddAdmin {
        program_id: program::ID,
        authority,
        admin,
    })?;
    idl.verify(&DeleteAdmin {
        program_id: program::ID,
        authority,
        admin,
    })?;
    idl.verify(&SetPayInfo {
        program_id: program::ID,
        admin: authority,
        price: 1_000_000,
        dev_fee: 3_000,
        dev_wallet: DEV_WALLET_KEY,
        burn_fee: 0,
        burn_wallet: Pubkey::new_unique(),
    })
}

#[test]
fn renamed_argument_is_rejected() -> anyhow::Result<()> {
    let json = std::fs::read_to_string(fixture())?.replace(
        r#""name": "burn_wallet""#,
        r#""name": "treasury""#,
    );
    let idl = ProgramIdl::from_json(&json)?;
    let err = idl
        .verify(&SetPayInfo {
            program_id: program::ID,
            admin: Pubkey::new_unique(),
            price: 0,
            dev_fee: 0,
            dev_wallet: DEV_WALLET_KEY,
            burn_fee: 0,
            burn_wallet: Pubkey::new_unique(),
        })
        .expect_err("argument names differ");
    assert!(err.to_string().contains("treasury"));
    Ok(())
}

#[test]
fn idl_for_another_address_is_rejected() -> anyhow::Result<()> {
    let idl = ProgramIdl::from_file(fixture())?;
    assert!(idl.verify_initialize(&Pubkey::new_unique()).is_err());
    Ok(())
}

#[test]
fn missing_idl_file_is_an_error() {
    assert!(ProgramIdl::from_file("tests/fixtures/does_not_exist.json").is_err());
}
