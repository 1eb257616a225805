use anchor_lang::prelude::*;

#[event]
pub struct ProposalCreated {
    pub proposal_id: u64,
    pub creator: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct ProposalVoted {
    pub proposal_id: u64,
    pub voter: Pubkey,
    /// true = yes, false = no
    pub choice: bool,
    pub timestamp: i64,
}

#[event]
pub struct ProposalClosed {
    pub proposal_id: u64,
    /// Final tallies at the moment of closing
    pub yes: u64,
    pub no: u64,
    pub timestamp: i64,
}
