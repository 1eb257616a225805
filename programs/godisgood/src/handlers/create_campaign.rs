use anchor_lang::prelude::*;

use crate::{
    constants::{CAMPAIGN_SEED, REGISTRY_SEED},
    state::{Campaign, CampaignCreated, Registry},
};

#[derive(Accounts)]
pub struct CreateCampaign<'info> {
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
        space = 8 + Campaign::INIT_SPACE,
        seeds = [CAMPAIGN_SEED, registry.next_campaign_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub campaign: Account<'info, Campaign>,

    pub system_program: Program<'info, System>,
}

/// Opens a new campaign owned by the signer.
///
/// # Arguments
/// * `title` - Campaign title, 1 to `MAX_TITLE_LEN` bytes
///
/// Returns the id of the new campaign.
pub fn create_campaign(ctx: Context<CreateCampaign>, title: String) -> Result<u64> {
    let creator = ctx.accounts.creator.key();
    let now = Clock::get()?.unix_timestamp;
    let id = ctx.accounts.registry.next_campaign_id;

    msg!("Creating campaign {}", id);

    ctx.accounts
        .campaign
        .init(id, creator, title, now, ctx.bumps.campaign)?;
    ctx.accounts.registry.claim_campaign_id()?;

    emit!(CampaignCreated {
        campaign_id: id,
        creator,
        timestamp: now,
    });

    Ok(id)
}
