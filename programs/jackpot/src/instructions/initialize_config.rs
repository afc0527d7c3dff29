use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOMINATOR, JACKPOT_SEED};
use crate::error::JackpotError;
use crate::state::{GameState, JackpotGame};

/// Accounts required to initialize the jackpot game.
/// Creates the singleton game PDA holding the round state and, over its
/// lifetime, the pooled deposits.
#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    /// The account paying for account creation. Becomes the game authority
    /// and receives the game fee at every settlement.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The JackpotGame state account tracking the current round.
    #[account(
        init,
        payer = payer,
        space = 8 + JackpotGame::INIT_SPACE,
        seeds = [JACKPOT_SEED],
        bump
    )]
    pub jackpot_game: Box<Account<'info, JackpotGame>>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Initializes the game with its immutable parameters and opens the first
/// round.
///
/// # Arguments
/// * `entrance_min` - Minimum cumulative deposit per player, in lamports
/// * `entrance_max` - Maximum cumulative deposit per player, in lamports
/// * `fee_rate_bps` - Fee rate in basis points taken at settlement
/// * `game_interval` - Minimum seconds a round runs before it may close
pub fn process_initialize_config(
    ctx: Context<InitializeConfig>,
    entrance_min: u64,
    entrance_max: u64,
    fee_rate_bps: u16,
    game_interval: i64,
) -> Result<()> {
    require!(
        entrance_min > 0 && entrance_min <= entrance_max,
        JackpotError::InvalidEntranceBounds
    );
    require!(
        fee_rate_bps as u64 <= BPS_DENOMINATOR,
        JackpotError::InvalidFeeRate
    );
    require!(game_interval > 0, JackpotError::InvalidGameInterval);

    let clock = Clock::get()?;
    let game = &mut ctx.accounts.jackpot_game;
    game.bump = ctx.bumps.jackpot_game;
    game.authority = ctx.accounts.payer.key();
    game.state = GameState::Idle;
    game.entrance_min = entrance_min;
    game.entrance_max = entrance_max;
    game.fee_rate_bps = fee_rate_bps;
    game.game_interval = game_interval;
    game.round_start_time = clock.unix_timestamp;
    game.total_pool = 0;
    game.players = Vec::new();
    game.pending_randomness = None;
    game.last_round = None;

    Ok(())
}
