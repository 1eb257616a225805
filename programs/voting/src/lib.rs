// Stops Rust Analyzer complaining about missing configs
// See https://solana.stackexchange.com/questions/17777
#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod handlers;
pub mod state;

pub use error::ErrorCode;
use handlers::*;

pub use handlers::{CastVote, CloseProposal, CreateProposal, GetProposal, Initialize};
pub use state::{Ballot, Proposal, ProposalView, Registry};

declare_id!("HqUctYfXfeZZbn1LtiX977paeFjsWkKrjEMcA7v1KNzT");

#[program]
pub mod voting {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        handlers::initialize::initialize(ctx)
    }

    pub fn create_proposal(ctx: Context<CreateProposal>, title: String) -> Result<u64> {
        handlers::create_proposal::create_proposal(ctx, title)
    }

    pub fn vote(ctx: Context<CastVote>, proposal_id: u64, choice: bool) -> Result<bool> {
        handlers::vote::vote(ctx, proposal_id, choice)
    }

    pub fn close(ctx: Context<CloseProposal>, proposal_id: u64) -> Result<bool> {
        handlers::close::close(ctx, proposal_id)
    }

    pub fn get_proposal(
        ctx: Context<GetProposal>,
        proposal_id: u64,
    ) -> Result<Option<ProposalView>> {
        handlers::get_proposal::get_proposal(ctx, proposal_id)
    }
}
