use anchor_lang::prelude::*;

use crate::{constants::REGISTRY_SEED, state::Registry};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = 8 + Registry::INIT_SPACE,
        seeds = [REGISTRY_SEED],
        bump,
    )]
    pub registry: Account<'info, Registry>,

    pub system_program: Program<'info, System>,
}

/// One-off setup of the proposal id counter.
pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    msg!("Initializing proposal registry");

    ctx.accounts
        .registry
        .init(ctx.accounts.payer.key(), ctx.bumps.registry);

    Ok(())
}
