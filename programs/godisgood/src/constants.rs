use anchor_lang::prelude::*;

// PDA seeds
#[constant]
pub const REGISTRY_SEED: &[u8] = b"registry";
#[constant]
pub const CAMPAIGN_SEED: &[u8] = b"campaign";
#[constant]
pub const ACT_SEED: &[u8] = b"act";
#[constant]
pub const RECEIPT_SEED: &[u8] = b"receipt";

// Text bounds, in bytes
pub const MAX_TITLE_LEN: usize = 64;
pub const MAX_DESCRIPTION_LEN: usize = 128;

/// Ids start at 1 so that 0 can mean "none" in `Campaign::leading_act_id`.
pub const FIRST_ID: u64 = 1;
