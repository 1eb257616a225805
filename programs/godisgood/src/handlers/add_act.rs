use anchor_lang::prelude::*;

use crate::{
    constants::{ACT_SEED, CAMPAIGN_SEED, REGISTRY_SEED},
    state::{Act, ActAdded, Campaign, Registry},
};

#[derive(Accounts)]
#[instruction(campaign_id: u64)]
pub struct AddAct<'info> {
    #[account(mut)]
    pub actor: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        mut,
        seeds = [CAMPAIGN_SEED, campaign_id.to_le_bytes().as_ref()],
        bump = campaign.bump,
    )]
    pub campaign: Account<'info, Campaign>,

    #[account(
        init,
        payer = actor,
        space = 8 + Act::INIT_SPACE,
        seeds = [ACT_SEED, registry.next_act_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub act: Account<'info, Act>,

    pub system_program: Program<'info, System>,
}

/// Nominates an act in an open campaign. The signer becomes the act's actor.
///
/// # Arguments
/// * `campaign_id` - Campaign to add the act to (used for account derivation)
/// * `description` - What was done, 1 to `MAX_DESCRIPTION_LEN` bytes
///
/// Returns the store-wide id of the new act.
#[allow(unused_variables)]
pub fn add_act(mut ctx: Context<AddAct>, campaign_id: u64, description: String) -> Result<u64> {
    let accounts = &mut ctx.accounts;
    let actor = accounts.actor.key();
    let act_id = accounts.registry.next_act_id;

    msg!("Adding act {} to campaign {}", act_id, accounts.campaign.id);

    accounts
        .campaign
        .add_act(&mut accounts.act, act_id, actor, description, ctx.bumps.act)?;
    accounts.registry.claim_act_id()?;

    emit!(ActAdded {
        campaign_id: accounts.campaign.id,
        act_id,
        actor,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(act_id)
}
