use anchor_lang::prelude::*;

/// Marks that `voter` has spent their vote in a campaign.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct VoteReceipt {
    pub campaign_id: u64,
    /// Act the vote went to
    pub act_id: u64,
    pub voter: Pubkey,
    /// False until the receipt has been used. The account is created with
    /// `init_if_needed`, so a fresh receipt reads as all zeroes.
    pub voted: bool,
    pub bump: u8,
}
