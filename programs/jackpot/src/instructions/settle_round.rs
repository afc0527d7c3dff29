use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::JACKPOT_SEED;
use crate::error::JackpotError;
use crate::events::{GameFeeTransferred, WinnerSelected};
use crate::state::{JackpotGame, RoundResult};

/// Accounts required to settle the round once the committed randomness has
/// resolved.
///
/// Ensures:
/// 1. The randomness account matches the pending request exactly.
/// 2. The passed winner account is the one the weighted draw selects.
/// 3. The fee goes to the stored game authority and nowhere else.
#[derive(Accounts)]
pub struct SettleRound<'info> {
    /// The account paying transaction fees. Any caller may settle; the
    /// winner is fixed by the revealed randomness either way.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The JackpotGame state account holding the pooled lamports.
    #[account(
        mut,
        seeds = [JACKPOT_SEED],
        bump = jackpot_game.bump
    )]
    pub jackpot_game: Account<'info, JackpotGame>,

    /// The randomness oracle account committed at upkeep.
    /// CHECK: validated against the pending request within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,

    /// The drawn winner's account, receiving the payout.
    /// CHECK: validated against the weighted draw within the handler.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,

    /// The operator account receiving the game fee.
    /// CHECK: validated against the stored game authority within the handler.
    #[account(mut)]
    pub fee_recipient: UncheckedAccount<'info>,
}

/// Settles the round against the revealed randomness.
///
/// Steps performed:
/// 1. Reject stale or foreign randomness accounts without mutating state.
/// 2. Read the revealed value; fail (retryably) if not yet resolved.
/// 3. Draw the winner weighted by deposit share and split the pool into
///    fee and payout.
/// 4. Move the payout to the winner and the fee to the authority.
/// 5. Record the round result and reset the ledger for the next round.
///
/// The instruction either applies all of steps 3-5 or none of them: any
/// failure aborts the transaction, reverting every lamport move and state
/// write, and the round stays `Settling` for a retry.
pub fn process_settle_round(ctx: Context<SettleRound>) -> Result<()> {
    let clock = Clock::get()?;
    let randomness_key = ctx.accounts.randomness_account_data.key();

    let game = &ctx.accounts.jackpot_game;
    require!(
        game.is_pending_request(&randomness_key),
        JackpotError::UnknownRandomnessRequest
    );

    let randomness_data =
        RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
            .map_err(|_| JackpotError::InvalidRandomnessAccount)?;
    let revealed = randomness_data
        .get_value(&clock)
        .map_err(|_| JackpotError::RandomnessNotResolved)?;

    game.assert_pool_accounting()?;
    let pick = game.pick_winner(&revealed)?;
    let (fee, payout) = game.settlement_split()?;
    let pool_at_settlement = game.total_pool;

    require_keys_eq!(
        ctx.accounts.winner.key(),
        pick.player,
        JackpotError::WinnerAccountMismatch
    );
    require_keys_eq!(
        ctx.accounts.fee_recipient.key(),
        game.authority,
        JackpotError::IncorrectFeeRecipient
    );

    msg!(
        "Winner: {} (target {} of pool {})",
        pick.player,
        pick.target,
        pool_at_settlement
    );

    let game_info = ctx.accounts.jackpot_game.to_account_info();
    {
        let mut pool_lamports = game_info.try_borrow_mut_lamports()?;
        **pool_lamports = (**pool_lamports)
            .checked_sub(pool_at_settlement)
            .ok_or(JackpotError::TransferFailed)?;
    }
    {
        let mut winner_lamports = ctx.accounts.winner.try_borrow_mut_lamports()?;
        **winner_lamports = (**winner_lamports)
            .checked_add(payout)
            .ok_or(JackpotError::TransferFailed)?;
    }
    {
        let mut fee_lamports = ctx.accounts.fee_recipient.try_borrow_mut_lamports()?;
        **fee_lamports = (**fee_lamports)
            .checked_add(fee)
            .ok_or(JackpotError::TransferFailed)?;
    }

    let game = &mut ctx.accounts.jackpot_game;
    game.last_round = Some(RoundResult {
        winner: pick.player,
        winner_deposit: pick.deposit,
        payout,
        fee,
        pool: pool_at_settlement,
        raw_random: revealed,
    });
    game.reset_round(clock.unix_timestamp);

    emit!(WinnerSelected {
        winner: pick.player,
        raw_random: revealed,
        range_start: pick.range_start,
        pool: pool_at_settlement,
    });
    emit!(GameFeeTransferred { fee });

    Ok(())
}
