/// Entry instruction: deposits into the current round's pool.
pub mod enter_jackpot;

/// One-time game initialization with the immutable round parameters.
pub mod initialize_config;

/// Settlement instruction: consumes the revealed randomness, pays out,
/// and resets the round.
pub mod settle_round;

/// Keeper surface: the read-only readiness probe and the round-closing
/// trigger that commits randomness.
pub mod upkeep;

pub use enter_jackpot::*;
pub use initialize_config::*;
pub use settle_round::*;
pub use upkeep::*;
