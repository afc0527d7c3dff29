use anchor_lang::prelude::*;

#[event]
pub struct JackpotEntered {
    pub player: Pubkey,
    pub amount: u64,
    pub cumulative_deposit: u64,
    pub pool: u64,
}

#[event]
pub struct RandomnessRequested {
    pub randomness_account: Pubkey,
    pub pool: u64,
    pub players: u32,
}

#[event]
pub struct WinnerSelected {
    pub winner: Pubkey,
    pub raw_random: [u8; 32],
    pub range_start: u64,
    pub pool: u64,
}

#[event]
pub struct GameFeeTransferred {
    pub fee: u64,
}
