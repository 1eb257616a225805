use anchor_lang::prelude::*;

use crate::{
    constants::PROPOSAL_SEED,
    state::{Proposal, ProposalClosed},
};

#[derive(Accounts)]
#[instruction(proposal_id: u64)]
pub struct CloseProposal<'info> {
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [PROPOSAL_SEED, proposal_id.to_le_bytes().as_ref()],
        bump = proposal.bump,
    )]
    pub proposal: Account<'info, Proposal>,
}

/// Ends voting on a proposal. Only the creator can close it. Returns `true`.
#[allow(unused_variables)]
pub fn close(ctx: Context<CloseProposal>, proposal_id: u64) -> Result<bool> {
    let now = Clock::get()?.unix_timestamp;
    let proposal = &mut ctx.accounts.proposal;
    proposal.mark_closed(ctx.accounts.creator.key(), now)?;

    msg!(
        "Closed proposal {} with yes={} no={}",
        proposal.id,
        proposal.yes,
        proposal.no
    );

    emit!(ProposalClosed {
        proposal_id: proposal.id,
        yes: proposal.yes,
        no: proposal.no,
        timestamp: now,
    });

    Ok(true)
}
