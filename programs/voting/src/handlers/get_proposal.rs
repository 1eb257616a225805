use anchor_lang::prelude::*;

use crate::{
    constants::PROPOSAL_SEED,
    state::{Proposal, ProposalView},
};

#[derive(Accounts)]
#[instruction(proposal_id: u64)]
pub struct GetProposal<'info> {
    /// CHECK: may not exist; only deserialized when owned by this program
    #[account(
        seeds = [PROPOSAL_SEED, proposal_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub proposal: UncheckedAccount<'info>,
}

/// Reads a proposal. Unknown ids yield `None` instead of an error.
#[allow(unused_variables)]
pub fn get_proposal(ctx: Context<GetProposal>, proposal_id: u64) -> Result<Option<ProposalView>> {
    let info = ctx.accounts.proposal.to_account_info();
    if info.owner != &crate::ID || info.data_is_empty() {
        return Ok(None);
    }

    let data = info.try_borrow_data()?;
    let proposal = Proposal::try_deserialize(&mut &data[..])?;
    Ok(Some(proposal.view()))
}
