use anchor_lang::prelude::*;

use crate::{constants::MAX_TITLE_LEN, error::ErrorCode, state::Ballot};

/// A yes/no question with a creator-controlled lifecycle.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Proposal {
    /// Sequential identifier, starting at 1
    pub id: u64,
    /// Public key of the proposal creator (only they can close it)
    pub creator: Pubkey,
    /// The question being voted on (max 64 bytes)
    #[max_len(64)]
    pub title: String,
    /// Number of yes votes
    pub yes: u64,
    /// Number of no votes
    pub no: u64,
    /// Accepting votes while true
    pub open: bool,
    pub created_at: i64,
    /// 0 while open
    pub closed_at: i64,
    /// PDA bump seed
    pub bump: u8,
}

/// What `get_proposal` hands back to readers.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ProposalView {
    pub creator: Pubkey,
    pub title: String,
    pub yes: u64,
    pub no: u64,
    pub open: bool,
}

impl Proposal {
    pub fn init(
        &mut self,
        id: u64,
        creator: Pubkey,
        title: String,
        created_at: i64,
        bump: u8,
    ) -> Result<()> {
        require!(!title.is_empty(), ErrorCode::EmptyTitle);
        require!(title.len() <= MAX_TITLE_LEN, ErrorCode::TitleTooLong);

        self.id = id;
        self.creator = creator;
        self.title = title;
        self.yes = 0;
        self.no = 0;
        self.open = true;
        self.created_at = created_at;
        self.closed_at = 0;
        self.bump = bump;
        Ok(())
    }

    /// Counts `choice` (true = yes) and marks the voter's ballot as used.
    pub fn cast_vote(
        &mut self,
        ballot: &mut Ballot,
        voter: Pubkey,
        choice: bool,
        ballot_bump: u8,
    ) -> Result<()> {
        require!(self.open, ErrorCode::ProposalClosed);
        require!(!ballot.voted, ErrorCode::AlreadyVoted);

        if choice {
            self.yes = self.yes.checked_add(1).ok_or(ErrorCode::Overflow)?;
        } else {
            self.no = self.no.checked_add(1).ok_or(ErrorCode::Overflow)?;
        }

        ballot.proposal_id = self.id;
        ballot.voter = voter;
        ballot.choice = choice;
        ballot.voted = true;
        ballot.bump = ballot_bump;
        Ok(())
    }

    /// Stops voting. Tallies are kept as they were.
    pub fn mark_closed(&mut self, caller: Pubkey, closed_at: i64) -> Result<()> {
        require_keys_eq!(caller, self.creator, ErrorCode::Unauthorized);
        require!(self.open, ErrorCode::ProposalClosed);

        self.open = false;
        self.closed_at = closed_at;
        Ok(())
    }

    pub fn view(&self) -> ProposalView {
        ProposalView {
            creator: self.creator,
            title: self.title.clone(),
            yes: self.yes,
            no: self.no,
            open: self.open,
        }
    }
}
