use anchor_lang::prelude::*;

use crate::{
    constants::CAMPAIGN_SEED,
    state::{Campaign, LeadingAct},
};

#[derive(Accounts)]
#[instruction(campaign_id: u64)]
pub struct GetLeading<'info> {
    #[account(
        seeds = [CAMPAIGN_SEED, campaign_id.to_le_bytes().as_ref()],
        bump = campaign.bump,
    )]
    pub campaign: Account<'info, Campaign>,
}

/// Returns the act with the most votes, lowest act id on ties. `None` while
/// the campaign has no acts.
#[allow(unused_variables)]
pub fn get_leading(ctx: Context<GetLeading>, campaign_id: u64) -> Result<Option<LeadingAct>> {
    Ok(ctx.accounts.campaign.leading())
}
