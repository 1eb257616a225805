use anchor_lang::prelude::*;

use crate::{
    constants::{ACT_SEED, CAMPAIGN_SEED, RECEIPT_SEED},
    state::{Act, ActVoted, Campaign, VoteReceipt},
};

#[derive(Accounts)]
#[instruction(campaign_id: u64, act_id: u64)]
pub struct CastVote<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    #[account(
        mut,
        seeds = [CAMPAIGN_SEED, campaign_id.to_le_bytes().as_ref()],
        bump = campaign.bump,
    )]
    pub campaign: Account<'info, Campaign>,

    #[account(
        mut,
        seeds = [ACT_SEED, act_id.to_le_bytes().as_ref()],
        bump = act.bump,
    )]
    pub act: Account<'info, Act>,

    #[account(
        init_if_needed,
        payer = voter,
        space = 8 + VoteReceipt::INIT_SPACE,
        seeds = [RECEIPT_SEED, campaign_id.to_le_bytes().as_ref(), voter.key().as_ref()],
        bump,
    )]
    pub receipt: Account<'info, VoteReceipt>,

    pub system_program: Program<'info, System>,
}

/// Casts the signer's vote for an act. Each voter gets one vote per campaign.
///
/// # Arguments
/// * `campaign_id` - Campaign the act belongs to
/// * `act_id` - Act to vote for
///
/// Note: both ids are only consumed by the account constraints, hence the
/// `unused_variables` allowance.
///
/// Returns `true` once the vote is counted.
#[allow(unused_variables)]
pub fn vote(mut ctx: Context<CastVote>, campaign_id: u64, act_id: u64) -> Result<bool> {
    let accounts = &mut ctx.accounts;
    let voter = accounts.voter.key();

    let votes = accounts.campaign.cast_vote(
        &mut accounts.act,
        &mut accounts.receipt,
        voter,
        ctx.bumps.receipt,
    )?;

    msg!(
        "Vote recorded: act {} in campaign {} now has {} votes",
        accounts.act.id,
        accounts.campaign.id,
        votes
    );

    emit!(ActVoted {
        campaign_id: accounts.campaign.id,
        act_id: accounts.act.id,
        voter,
        votes,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(true)
}
