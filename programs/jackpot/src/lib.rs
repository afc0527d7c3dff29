#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

declare_id!("CPt5RvQDXnHDGi9EHdThFSLqVcgNwkmYKNRNkVcYyxVL");

#[program]
pub mod jackpot {
    use super::*;

    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        entrance_min: u64,
        entrance_max: u64,
        fee_rate_bps: u16,
        game_interval: i64,
    ) -> Result<()> {
        process_initialize_config(ctx, entrance_min, entrance_max, fee_rate_bps, game_interval)
    }

    pub fn enter_jackpot(ctx: Context<EnterJackpot>, amount: u64) -> Result<()> {
        process_enter_jackpot(ctx, amount)
    }

    pub fn check_upkeep(ctx: Context<CheckUpkeep>) -> Result<bool> {
        process_check_upkeep(ctx)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
        process_perform_upkeep(ctx)
    }

    pub fn settle_round(ctx: Context<SettleRound>) -> Result<()> {
        process_settle_round(ctx)
    }
}
