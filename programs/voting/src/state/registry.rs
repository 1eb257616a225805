use anchor_lang::prelude::*;

use crate::{constants::FIRST_PROPOSAL_ID, error::ErrorCode};

/// Singleton holding the proposal id counter.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Registry {
    pub authority: Pubkey,
    pub next_proposal_id: u64,
    pub bump: u8,
}

impl Registry {
    pub fn init(&mut self, authority: Pubkey, bump: u8) {
        self.authority = authority;
        self.next_proposal_id = FIRST_PROPOSAL_ID;
        self.bump = bump;
    }

    pub fn claim_proposal_id(&mut self) -> Result<u64> {
        let id = self.next_proposal_id;
        self.next_proposal_id = id.checked_add(1).ok_or(ErrorCode::Overflow)?;
        Ok(id)
    }
}
