use anchor_lang::prelude::*;

use crate::{
    constants::{BALLOT_SEED, PROPOSAL_SEED},
    state::{Ballot, Proposal, ProposalVoted},
};

#[derive(Accounts)]
#[instruction(proposal_id: u64)]
pub struct CastVote<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    #[account(
        mut,
        seeds = [PROPOSAL_SEED, proposal_id.to_le_bytes().as_ref()],
        bump = proposal.bump,
    )]
    pub proposal: Account<'info, Proposal>,

    #[account(
        init_if_needed,
        payer = voter,
        space = 8 + Ballot::INIT_SPACE,
        seeds = [BALLOT_SEED, proposal_id.to_le_bytes().as_ref(), voter.key().as_ref()],
        bump,
    )]
    pub ballot: Account<'info, Ballot>,

    pub system_program: Program<'info, System>,
}

/// Votes yes (`choice = true`) or no on an open proposal.
///
/// # Arguments
/// * `proposal_id` - The proposal (used for account derivation via `#[instruction]`)
/// * `choice` - true for yes, false for no
///
/// Returns `true` once the vote is counted.
#[allow(unused_variables)]
pub fn vote(mut ctx: Context<CastVote>, proposal_id: u64, choice: bool) -> Result<bool> {
    let accounts = &mut ctx.accounts;
    let voter = accounts.voter.key();

    accounts
        .proposal
        .cast_vote(&mut accounts.ballot, voter, choice, ctx.bumps.ballot)?;

    msg!(
        "Vote recorded on proposal {}: yes={} no={}",
        accounts.proposal.id,
        accounts.proposal.yes,
        accounts.proposal.no
    );

    emit!(ProposalVoted {
        proposal_id: accounts.proposal.id,
        voter,
        choice,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(true)
}
