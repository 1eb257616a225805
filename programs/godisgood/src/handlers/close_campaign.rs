use anchor_lang::prelude::*;

use crate::{
    constants::CAMPAIGN_SEED,
    state::{Campaign, CampaignClosed},
};

#[derive(Accounts)]
#[instruction(campaign_id: u64)]
pub struct CloseCampaign<'info> {
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [CAMPAIGN_SEED, campaign_id.to_le_bytes().as_ref()],
        bump = campaign.bump,
    )]
    pub campaign: Account<'info, Campaign>,
}

/// Stops the campaign from accepting acts and votes.
///
/// Only the campaign creator can close it, and only once. Returns `true`.
#[allow(unused_variables)]
pub fn close_campaign(ctx: Context<CloseCampaign>, campaign_id: u64) -> Result<bool> {
    ctx.accounts.campaign.mark_closed(ctx.accounts.creator.key())?;

    msg!("Closed campaign {}", ctx.accounts.campaign.id);

    emit!(CampaignClosed {
        campaign_id: ctx.accounts.campaign.id,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(true)
}
