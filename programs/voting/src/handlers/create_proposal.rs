use anchor_lang::prelude::*;

use crate::{
    constants::{PROPOSAL_SEED, REGISTRY_SEED},
    state::{Proposal, ProposalCreated, Registry},
};

#[derive(Accounts)]
pub struct CreateProposal<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        init,
        payer = creator,
        space = 8 + Proposal::INIT_SPACE,
        seeds = [PROPOSAL_SEED, registry.next_proposal_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub proposal: Account<'info, Proposal>,

    pub system_program: Program<'info, System>,
}

/// Creates a proposal open for yes/no votes.
///
/// # Arguments
/// * `title` - The question voters will respond to (max 64 bytes)
///
/// Returns the id of the new proposal.
pub fn create_proposal(ctx: Context<CreateProposal>, title: String) -> Result<u64> {
    let creator = ctx.accounts.creator.key();
    let now = Clock::get()?.unix_timestamp;
    let id = ctx.accounts.registry.next_proposal_id;

    msg!("Creating proposal {}", id);

    ctx.accounts
        .proposal
        .init(id, creator, title, now, ctx.bumps.proposal)?;
    ctx.accounts.registry.claim_proposal_id()?;

    emit!(ProposalCreated {
        proposal_id: id,
        creator,
        timestamp: now,
    });

    Ok(id)
}
