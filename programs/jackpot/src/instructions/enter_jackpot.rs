use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::JACKPOT_SEED;
use crate::events::JackpotEntered;
use crate::state::JackpotGame;

/// Accounts required to enter the jackpot with a deposit.
#[derive(Accounts)]
pub struct EnterJackpot<'info> {
    /// The player depositing into the pool.
    #[account(mut)]
    pub player: Signer<'info>,

    /// The JackpotGame state account. Also holds the pooled lamports.
    #[account(
        mut,
        seeds = [JACKPOT_SEED],
        bump = jackpot_game.bump
    )]
    pub jackpot_game: Account<'info, JackpotGame>,

    /// System program for the deposit transfer.
    pub system_program: Program<'info, System>,
}

/// Enters the caller into the current round.
///
/// Steps performed:
/// 1. Validate the deposit against the round state and entrance bounds.
/// 2. Record the entry in the ledger; a repeat entry tops up the existing
///    stake instead of adding a duplicate player.
/// 3. Re-check the pool accounting identity.
/// 4. Transfer the deposit from the player into the pool.
///
/// The round flips `Idle -> Ready` on the entry that brings in the second
/// distinct player.
pub fn process_enter_jackpot(ctx: Context<EnterJackpot>, amount: u64) -> Result<()> {
    let player_key = ctx.accounts.player.key();

    let game = &mut ctx.accounts.jackpot_game;
    game.record_entry(player_key, amount)?;
    game.assert_pool_accounting()?;
    let cumulative_deposit = game.player_deposit(&player_key);
    let pool = game.total_pool;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.jackpot_game.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(JackpotEntered {
        player: player_key,
        amount,
        cumulative_deposit,
        pool,
    });

    Ok(())
}
