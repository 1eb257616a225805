use anchor_lang::prelude::*;

/// One voter's vote on one proposal.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Ballot {
    pub proposal_id: u64,
    pub voter: Pubkey,
    pub choice: bool,
    /// Created with `init_if_needed`; false until the vote is cast
    pub voted: bool,
    pub bump: u8,
}
