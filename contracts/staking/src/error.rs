use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("no stake tokens sent")]
    NoFundsSent,

    #[error("must send exactly one coin")]
    InvalidFunds,

    #[error("must send the stake denom, got {denom}")]
    WrongDenom { denom: String },

    #[error("amount = 0")]
    ZeroAmount,

    #[error("duration = 0")]
    ZeroDuration,

    #[error("reward duration not finished (finishes at {finish_at})")]
    DurationNotFinished { finish_at: u64 },

    #[error("reward duration not set")]
    DurationNotSet,

    #[error("reward rate = 0")]
    RewardRateZero,

    #[error("reward amount {amount} > balance {balance}")]
    RewardExceedsBalance { amount: Uint128, balance: Uint128 },

    #[error("withdraw amount {amount} exceeds staked balance {staked}")]
    Underflow { amount: Uint128, staked: Uint128 },

    #[error("{address} has no staked balance to compound")]
    InsufficientStake { address: String },
}
