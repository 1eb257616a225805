use anchor_lang::prelude::*;

#[constant]
pub const REGISTRY_SEED: &[u8] = b"registry";
#[constant]
pub const PROPOSAL_SEED: &[u8] = b"proposal";
#[constant]
pub const BALLOT_SEED: &[u8] = b"ballot";

/// Maximum proposal title length in bytes
pub const MAX_TITLE_LEN: usize = 64;

pub const FIRST_PROPOSAL_ID: u64 = 1;
