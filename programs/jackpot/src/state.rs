use anchor_lang::prelude::*;

use crate::constants::{BPS_DENOMINATOR, MAX_PLAYERS};
use crate::error::JackpotError;

/// Lifecycle of a round.
///
/// `Idle` accepts entries but cannot close yet (fewer than two players).
/// `Ready` accepts entries and may close once the game interval elapsed.
/// `Settling` is frozen: randomness was committed and the round waits for
/// the reveal. No entries are accepted until settlement resets the round.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameState {
    Idle,
    Ready,
    Settling,
}

/// One player's cumulative stake in the current round.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub struct PlayerEntry {
    pub player: Pubkey,
    pub amount: u64,
}

/// Snapshot of the most recently settled round, kept until the next
/// settlement overwrites it.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub struct RoundResult {
    pub winner: Pubkey,
    pub winner_deposit: u64,
    pub payout: u64,
    pub fee: u64,
    pub pool: u64,
    pub raw_random: [u8; 32],
}

/// Outcome of a weighted draw, before any funds move.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct WinnerPick {
    pub index: u32,
    pub player: Pubkey,
    pub deposit: u64,
    /// Start of the winner's contiguous weight range within the pool.
    pub range_start: u64,
    /// The reduced random value, `raw mod total_pool`.
    pub target: u64,
}

#[account]
#[derive(InitSpace)]
pub struct JackpotGame {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The operator of the game. Receives the game fee at settlement.
    pub authority: Pubkey,

    /// Current phase of the round state machine.
    pub state: GameState,

    /// Minimum cumulative deposit (in lamports) a player must reach.
    pub entrance_min: u64,

    /// Maximum cumulative deposit (in lamports) a player may reach.
    pub entrance_max: u64,

    /// Fee rate in basis points taken from the pool at settlement.
    pub fee_rate_bps: u16,

    /// Minimum seconds a round must run before it may close.
    pub game_interval: i64,

    /// UNIX timestamp of the last round reset.
    pub round_start_time: i64,

    /// Total lamports deposited this round. Always equals the sum of all
    /// player entries; the identity is re-checked on every mutation.
    pub total_pool: u64,

    /// Players in first-entry order. A player appears at most once; repeat
    /// deposits accumulate into the existing entry.
    #[max_len(MAX_PLAYERS)]
    pub players: Vec<PlayerEntry>,

    /// The committed randomness account while `Settling`, `None` otherwise.
    pub pending_randomness: Option<Pubkey>,

    /// Result of the most recently settled round.
    pub last_round: Option<RoundResult>,
}

impl JackpotGame {
    /// Cumulative deposit of `player` this round, zero if absent.
    pub fn player_deposit(&self, player: &Pubkey) -> u64 {
        self.players
            .iter()
            .find(|entry| entry.player == *player)
            .map(|entry| entry.amount)
            .unwrap_or(0)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Players in first-entry order.
    pub fn players_in_order(&self) -> impl Iterator<Item = &Pubkey> {
        self.players.iter().map(|entry| &entry.player)
    }

    pub fn recent_winner(&self) -> Option<Pubkey> {
        self.last_round.as_ref().map(|result| result.winner)
    }

    pub fn recent_winner_amount(&self) -> Option<u64> {
        self.last_round.as_ref().map(|result| result.payout)
    }

    /// Records a deposit for `player` and advances `Idle -> Ready` once two
    /// distinct players are in. Rejects entries while the round settles.
    pub fn record_entry(&mut self, player: Pubkey, amount: u64) -> Result<()> {
        require!(self.state != GameState::Settling, JackpotError::RoundNotOpen);

        let previous = self.player_deposit(&player);
        let cumulative = previous
            .checked_add(amount)
            .ok_or(JackpotError::NumericalOverflow)?;

        require!(
            amount > 0 && cumulative >= self.entrance_min,
            JackpotError::EntryTooSmall
        );
        require!(cumulative <= self.entrance_max, JackpotError::EntryTooLarge);

        match self.players.iter().position(|entry| entry.player == player) {
            Some(index) => self.players[index].amount = cumulative,
            None => {
                require!(self.players.len() < MAX_PLAYERS, JackpotError::RoundFull);
                self.players.push(PlayerEntry { player, amount });
            }
        }

        self.total_pool = self
            .total_pool
            .checked_add(amount)
            .ok_or(JackpotError::NumericalOverflow)?;

        // The state never regresses from Ready; only Idle advances here.
        if self.state == GameState::Idle && self.players.len() >= 2 {
            self.state = GameState::Ready;
        }

        Ok(())
    }

    /// The upkeep predicate. Pure: reads only the round and the supplied
    /// clock value, so the speculative query and the trigger guard agree.
    pub fn is_ready(&self, now: i64) -> bool {
        self.state == GameState::Ready
            && now.saturating_sub(self.round_start_time) >= self.game_interval
            && self.total_pool > 0
    }

    /// Freezes the round and records the committed randomness account.
    pub fn begin_settlement(&mut self, randomness_account: Pubkey) {
        self.state = GameState::Settling;
        self.pending_randomness = Some(randomness_account);
    }

    /// True iff the round is settling against exactly this randomness
    /// account. Anything else is a stale or foreign request.
    pub fn is_pending_request(&self, randomness_account: &Pubkey) -> bool {
        self.state == GameState::Settling
            && self.pending_randomness.as_ref() == Some(randomness_account)
    }

    /// Re-checks the accounting identity `sum(deposits) == total_pool`.
    pub fn assert_pool_accounting(&self) -> Result<()> {
        let mut sum: u64 = 0;
        for entry in &self.players {
            sum = sum
                .checked_add(entry.amount)
                .ok_or(JackpotError::NumericalOverflow)?;
        }
        require!(sum == self.total_pool, JackpotError::PoolAccountingMismatch);
        Ok(())
    }

    /// Weighted draw over the stored player order.
    ///
    /// Reduces the oracle value to `target = raw mod total_pool` and scans
    /// the prefix sums; each player owns the contiguous range
    /// `[range_start, range_start + amount)`, so the win probability equals
    /// the deposited share exactly. Deterministic byte-for-byte in `raw`.
    pub fn pick_winner(&self, raw_random: &[u8; 32]) -> Result<WinnerPick> {
        require!(self.total_pool > 0, JackpotError::PoolEmpty);

        let mut seed = [0u8; 16];
        seed.copy_from_slice(&raw_random[..16]);
        let target = (u128::from_le_bytes(seed) % self.total_pool as u128) as u64;

        let mut range_start: u64 = 0;
        for (index, entry) in self.players.iter().enumerate() {
            let range_end = range_start
                .checked_add(entry.amount)
                .ok_or(JackpotError::NumericalOverflow)?;
            if target < range_end {
                return Ok(WinnerPick {
                    index: index as u32,
                    player: entry.player,
                    deposit: entry.amount,
                    range_start,
                    target,
                });
            }
            range_start = range_end;
        }

        // The ranges cover [0, total_pool) exactly, so falling through
        // means the ledger and the pool disagree.
        Err(JackpotError::PoolAccountingMismatch.into())
    }

    /// Fee and payout for the current pool. The fee rounds down, the payout
    /// takes the remainder, so the two always sum to the pool exactly.
    pub fn settlement_split(&self) -> Result<(u64, u64)> {
        let fee = (self.total_pool as u128)
            .checked_mul(self.fee_rate_bps as u128)
            .and_then(|product| product.checked_div(BPS_DENOMINATOR as u128))
            .ok_or(JackpotError::NumericalOverflow)? as u64;
        let payout = self
            .total_pool
            .checked_sub(fee)
            .ok_or(JackpotError::NumericalOverflow)?;
        Ok((fee, payout))
    }

    /// Clears the ledger and opens the next round.
    pub fn reset_round(&mut self, now: i64) {
        self.players.clear();
        self.total_pool = 0;
        self.pending_randomness = None;
        self.state = GameState::Idle;
        self.round_start_time = now;
    }
}
