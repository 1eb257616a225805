use anchor_lang::prelude::*;

use crate::{constants::CAMPAIGN_SEED, state::Campaign};

#[derive(Accounts)]
#[instruction(campaign_id: u64)]
pub struct GetWinner<'info> {
    #[account(
        seeds = [CAMPAIGN_SEED, campaign_id.to_le_bytes().as_ref()],
        bump = campaign.bump,
    )]
    pub campaign: Account<'info, Campaign>,
}

/// Returns the winner recorded by `select_winner`, or `None` until one has
/// been selected.
#[allow(unused_variables)]
pub fn get_winner(ctx: Context<GetWinner>, campaign_id: u64) -> Result<Option<Pubkey>> {
    Ok(ctx.accounts.campaign.winner)
}
