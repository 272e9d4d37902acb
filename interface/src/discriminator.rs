//! Anchor-style instruction selectors.
//!
//! An Anchor program dispatches on the first 8 bytes of instruction data, which are the first 8
//! bytes of `sha256("global:<instruction name>")`.

use sha2::{
    Digest,
    Sha256,
};

pub const DISCRIMINATOR_LEN: usize = 8;

const GLOBAL_NAMESPACE: &str = "global";

/// `sha256("global:initialize")[..8]`
pub const INITIALIZE_DISCRIMINATOR: [u8; DISCRIMINATOR_LEN] = [175, 175, 109, 31, 13, 152, 155, 237];
pub const SET_PAY_INFO_DISCRIMINATOR: [u8; DISCRIMINATOR_LEN] = [59, 174, 252, 46, 215, 154, 169, 82];
pub const ADD_ADMIN_DISCRIMINATOR: [u8; DISCRIMINATOR_LEN] = [177, 236, 33, 205, 124, 152, 55, 186];
pub const DELETE_ADMIN_DISCRIMINATOR: [u8; DISCRIMINATOR_LEN] = [185, 158, 127, 54, 59, 60, 205, 164];

/// Computes the 8-byte discriminator for the instruction named `name`.
pub fn instruction_discriminator(name: &str) -> [u8; DISCRIMINATOR_LEN] {
    let preimage = format!("{GLOBAL_NAMESPACE}:{name}");
    let hash = Sha256::digest(preimage.as_bytes());

    let mut discriminator = [0u8; DISCRIMINATOR_LEN];
    discriminator.copy_from_slice(&hash[..DISCRIMINATOR_LEN]);
    discriminator
}
