/// Seed for the singleton jackpot game PDA.
pub const JACKPOT_SEED: &[u8] = b"jackpot";

/// Upper bound on distinct players per round, fixed by the account size
/// reserved at initialization.
pub const MAX_PLAYERS: usize = 100;

/// Basis-point denominator for the fee rate (10_000 bps = 100%).
pub const BPS_DENOMINATOR: u64 = 10_000;
