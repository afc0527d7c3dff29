use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::JACKPOT_SEED;
use crate::error::JackpotError;
use crate::events::RandomnessRequested;
use crate::state::JackpotGame;

/// Accounts for the read-only upkeep probe.
#[derive(Accounts)]
pub struct CheckUpkeep<'info> {
    /// The JackpotGame state account.
    #[account(
        seeds = [JACKPOT_SEED],
        bump = jackpot_game.bump
    )]
    pub jackpot_game: Account<'info, JackpotGame>,
}

/// Accounts required to close the round and commit randomness.
///
/// Ensures:
/// 1. The round is actually eligible to close (same predicate the probe
///    evaluates).
/// 2. The randomness account is valid and has not been revealed previously.
#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    /// The account paying transaction fees. Any caller may perform upkeep;
    /// the keeper is simply the expected one.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The JackpotGame state account.
    #[account(
        mut,
        seeds = [JACKPOT_SEED],
        bump = jackpot_game.bump
    )]
    pub jackpot_game: Account<'info, JackpotGame>,

    /// Randomness account from Switchboard.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

/// Returns whether the round is eligible to close: the state is `Ready`,
/// the game interval has elapsed, and the pool is non-empty. Read-only and
/// free of side effects, so keepers may poll it speculatively.
pub fn process_check_upkeep(ctx: Context<CheckUpkeep>) -> Result<bool> {
    let clock = Clock::get()?;
    Ok(ctx.accounts.jackpot_game.is_ready(clock.unix_timestamp))
}

/// Closes the round to entries and commits the randomness account the
/// reveal will be read from.
///
/// Returns immediately after recording the pending request; the reveal is
/// delivered through a later `settle_round` call once the oracle resolves.
pub fn process_perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
    let clock = Clock::get()?;
    let game = &mut ctx.accounts.jackpot_game;

    require!(
        game.is_ready(clock.unix_timestamp),
        JackpotError::UpkeepNotNeeded
    );

    let randomness_data =
        RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
            .map_err(|_| JackpotError::InvalidRandomnessAccount)?;

    // Only accept randomness seeded at the previous slot; anything older
    // is already revealable and could be cherry-picked.
    if randomness_data.seed_slot != clock.slot - 1 {
        return Err(JackpotError::RandomnessAlreadyRevealed.into());
    }

    game.begin_settlement(ctx.accounts.randomness_account_data.key());

    msg!("Round frozen; awaiting randomness reveal");
    emit!(RandomnessRequested {
        randomness_account: ctx.accounts.randomness_account_data.key(),
        pool: ctx.accounts.jackpot_game.total_pool,
        players: ctx.accounts.jackpot_game.player_count() as u32,
    });

    Ok(())
}
