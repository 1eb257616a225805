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

pub use handlers::{
    AddAct, CastVote, CloseCampaign, CreateCampaign, GetLeading, GetWinner, Initialize,
    SelectWinner,
};
pub use state::{Act, Campaign, LeadingAct, Registry, VoteReceipt};

declare_id!("J8wAn4yxQSR6eLf81x9th8wkzgJ6w3jKhzUY3YbpR6Q6");

#[program]
pub mod godisgood {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        handlers::initialize::initialize(ctx)
    }

    pub fn create_campaign(ctx: Context<CreateCampaign>, title: String) -> Result<u64> {
        handlers::create_campaign::create_campaign(ctx, title)
    }

    pub fn add_act(ctx: Context<AddAct>, campaign_id: u64, description: String) -> Result<u64> {
        handlers::add_act::add_act(ctx, campaign_id, description)
    }

    pub fn vote(ctx: Context<CastVote>, campaign_id: u64, act_id: u64) -> Result<bool> {
        handlers::vote::vote(ctx, campaign_id, act_id)
    }

    pub fn get_leading(ctx: Context<GetLeading>, campaign_id: u64) -> Result<Option<LeadingAct>> {
        handlers::get_leading::get_leading(ctx, campaign_id)
    }

    pub fn close_campaign(ctx: Context<CloseCampaign>, campaign_id: u64) -> Result<bool> {
        handlers::close_campaign::close_campaign(ctx, campaign_id)
    }

    pub fn select_winner(ctx: Context<SelectWinner>, campaign_id: u64) -> Result<Pubkey> {
        handlers::select_winner::select_winner(ctx, campaign_id)
    }

    pub fn get_winner(ctx: Context<GetWinner>, campaign_id: u64) -> Result<Option<Pubkey>> {
        handlers::get_winner::get_winner(ctx, campaign_id)
    }
}
