use anchor_lang::prelude::*;

#[event]
pub struct CampaignCreated {
    pub campaign_id: u64,
    pub creator: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct ActAdded {
    pub campaign_id: u64,
    pub act_id: u64,
    pub actor: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct ActVoted {
    pub campaign_id: u64,
    pub act_id: u64,
    pub voter: Pubkey,
    /// Vote count of the act after this vote
    pub votes: u64,
    pub timestamp: i64,
}

#[event]
pub struct CampaignClosed {
    pub campaign_id: u64,
    pub timestamp: i64,
}

#[event]
pub struct WinnerSelected {
    pub campaign_id: u64,
    pub act_id: u64,
    pub winner: Pubkey,
    pub votes: u64,
    pub timestamp: i64,
}
