use anchor_lang::prelude::*;

use crate::{
    constants::CAMPAIGN_SEED,
    state::{Campaign, WinnerSelected},
};

#[derive(Accounts)]
#[instruction(campaign_id: u64)]
pub struct SelectWinner<'info> {
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [CAMPAIGN_SEED, campaign_id.to_le_bytes().as_ref()],
        bump = campaign.bump,
    )]
    pub campaign: Account<'info, Campaign>,
}

/// Records the actor of the leading act as the campaign winner.
///
/// The campaign must be closed and the caller must be its creator. The winner
/// cannot be changed once selected.
#[allow(unused_variables)]
pub fn select_winner(ctx: Context<SelectWinner>, campaign_id: u64) -> Result<Pubkey> {
    let campaign = &mut ctx.accounts.campaign;
    let leader = campaign.select_winner(ctx.accounts.creator.key())?;

    msg!(
        "Campaign {} won by {} with {} votes",
        campaign.id,
        leader.actor,
        leader.votes
    );

    emit!(WinnerSelected {
        campaign_id: campaign.id,
        act_id: leader.act_id,
        winner: leader.actor,
        votes: leader.votes,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(leader.actor)
}
