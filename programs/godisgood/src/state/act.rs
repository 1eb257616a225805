use anchor_lang::prelude::*;

/// A nominated act of kindness inside a campaign.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Act {
    /// Store-wide id, not per campaign
    pub id: u64,
    pub campaign_id: u64,
    /// Who submitted the act; receives the win if it leads
    pub actor: Pubkey,
    #[max_len(128)]
    pub description: String,
    pub vote_count: u64,
    pub bump: u8,
}
