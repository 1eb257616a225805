use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_DESCRIPTION_LEN, MAX_TITLE_LEN},
    error::ErrorCode,
    state::{Act, VoteReceipt},
};

/// A karma raffle: participants add acts, everyone votes, the creator closes
/// the campaign and the actor of the most voted act wins.
///
/// The leading act is tracked incrementally as votes come in. Ties go to the
/// act with the lowest id.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Campaign {
    pub id: u64,
    /// Only the creator can close the campaign and select the winner
    pub creator: Pubkey,
    #[max_len(64)]
    pub title: String,
    pub closed: bool,
    /// Set once by `select_winner`, never changed afterwards
    pub winner: Option<Pubkey>,
    pub act_count: u32,
    pub total_votes: u64,
    /// 0 while the campaign has no acts
    pub leading_act_id: u64,
    pub leading_actor: Pubkey,
    pub leading_votes: u64,
    pub created_at: i64,
    /// PDA bump seed
    pub bump: u8,
}

/// The act currently holding the most votes in a campaign.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeadingAct {
    pub act_id: u64,
    pub actor: Pubkey,
    pub votes: u64,
}

fn check_text(text: &str, max_len: usize, empty: ErrorCode, too_long: ErrorCode) -> Result<()> {
    if text.is_empty() {
        return Err(empty.into());
    }
    if text.len() > max_len {
        return Err(too_long.into());
    }
    Ok(())
}

impl Campaign {
    pub fn init(
        &mut self,
        id: u64,
        creator: Pubkey,
        title: String,
        created_at: i64,
        bump: u8,
    ) -> Result<()> {
        check_text(
            &title,
            MAX_TITLE_LEN,
            ErrorCode::EmptyTitle,
            ErrorCode::TitleTooLong,
        )?;

        self.id = id;
        self.creator = creator;
        self.title = title;
        self.closed = false;
        self.winner = None;
        self.act_count = 0;
        self.total_votes = 0;
        self.leading_act_id = 0;
        self.leading_actor = Pubkey::default();
        self.leading_votes = 0;
        self.created_at = created_at;
        self.bump = bump;
        Ok(())
    }

    /// Registers `act` under this campaign. `act_id` must be a fresh store-wide
    /// id, so it is always higher than any act already in the campaign.
    pub fn add_act(
        &mut self,
        act: &mut Act,
        act_id: u64,
        actor: Pubkey,
        description: String,
        bump: u8,
    ) -> Result<()> {
        require!(!self.closed, ErrorCode::CampaignClosed);
        check_text(
            &description,
            MAX_DESCRIPTION_LEN,
            ErrorCode::EmptyDescription,
            ErrorCode::DescriptionTooLong,
        )?;
        let act_count = self.act_count.checked_add(1).ok_or(ErrorCode::Overflow)?;

        act.id = act_id;
        act.campaign_id = self.id;
        act.actor = actor;
        act.description = description;
        act.vote_count = 0;
        act.bump = bump;

        self.act_count = act_count;
        // The first act leads with zero votes. Later acts can only overtake it
        // by getting more votes, since their ids are higher.
        if self.leading_act_id == 0 {
            self.promote(act);
        }
        Ok(())
    }

    /// Adds one vote from `voter` to `act` and spends the voter's receipt.
    pub fn cast_vote(
        &mut self,
        act: &mut Act,
        receipt: &mut VoteReceipt,
        voter: Pubkey,
        receipt_bump: u8,
    ) -> Result<u64> {
        require!(act.campaign_id == self.id, ErrorCode::NotFound);
        require!(!self.closed, ErrorCode::CampaignClosed);
        require!(!receipt.voted, ErrorCode::AlreadyVoted);

        let votes = act.vote_count.checked_add(1).ok_or(ErrorCode::Overflow)?;
        let total_votes = self.total_votes.checked_add(1).ok_or(ErrorCode::Overflow)?;

        act.vote_count = votes;
        self.total_votes = total_votes;

        receipt.campaign_id = self.id;
        receipt.act_id = act.id;
        receipt.voter = voter;
        receipt.voted = true;
        receipt.bump = receipt_bump;

        if self.overtaken_by(act) {
            self.promote(act);
        }
        Ok(votes)
    }

    pub fn leading(&self) -> Option<LeadingAct> {
        if self.leading_act_id == 0 {
            return None;
        }
        Some(LeadingAct {
            act_id: self.leading_act_id,
            actor: self.leading_actor,
            votes: self.leading_votes,
        })
    }

    pub fn mark_closed(&mut self, caller: Pubkey) -> Result<()> {
        require_keys_eq!(caller, self.creator, ErrorCode::Unauthorized);
        require!(!self.closed, ErrorCode::AlreadyClosed);

        self.closed = true;
        Ok(())
    }

    /// Fixes the actor of the leading act as the winner.
    pub fn select_winner(&mut self, caller: Pubkey) -> Result<LeadingAct> {
        require!(self.closed, ErrorCode::NotClosed);
        require_keys_eq!(caller, self.creator, ErrorCode::Unauthorized);
        require!(self.winner.is_none(), ErrorCode::AlreadySelected);
        let leader = self.leading().ok_or(ErrorCode::NoActs)?;

        self.winner = Some(leader.actor);
        Ok(leader)
    }

    fn overtaken_by(&self, act: &Act) -> bool {
        self.leading_act_id == 0
            || act.vote_count > self.leading_votes
            || (act.vote_count == self.leading_votes && act.id < self.leading_act_id)
    }

    fn promote(&mut self, act: &Act) {
        self.leading_act_id = act.id;
        self.leading_actor = act.actor;
        self.leading_votes = act.vote_count;
    }
}
