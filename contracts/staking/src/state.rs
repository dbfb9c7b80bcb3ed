use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Decimal, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONFIG: Item<Config> = Item::new("config");
pub const POOL: Item<PoolState> = Item::new("pool");
pub const ACCOUNTS: Map<&Addr, StakeAccount> = Map::new("accounts");

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    /// Native denom deposited by stakers.
    pub stake_denom: String,
    /// Native denom the pool distributes as rewards. The pool must be
    /// funded with this denom before a reward amount can be scheduled.
    pub reward_denom: String,
}

/// Pool-wide ledger state. One aggregate, passed through every
/// operation; nothing here lives as ambient globals.
#[cw_serde]
pub struct PoolState {
    /// Sum of all accounts' `staked` balances.
    pub total_supply: Uint128,
    /// Length of a reward epoch in seconds. 0 until first set.
    pub duration: u64,
    /// Reward units distributed per second.
    pub reward_rate: Uint128,
    /// Timestamp the current epoch ends. 0 before any epoch is configured.
    pub finish_at: u64,
    /// Last timestamp the reward-per-token accumulator was settled.
    pub updated_at: u64,
    /// Lazily accumulated reward per staked unit.
    pub reward_per_token: Decimal,
}

/// The reward schedule as an explicit state machine:
/// Unconfigured → Active → Finished → Active (new epoch) → …
#[cw_serde]
pub enum EpochPhase {
    Unconfigured,
    Active,
    Finished,
}

impl PoolState {
    pub fn zero() -> Self {
        PoolState {
            total_supply: Uint128::zero(),
            duration: 0,
            reward_rate: Uint128::zero(),
            finish_at: 0,
            updated_at: 0,
            reward_per_token: Decimal::zero(),
        }
    }

    pub fn phase(&self, now: u64) -> EpochPhase {
        if self.finish_at == 0 {
            EpochPhase::Unconfigured
        } else if now < self.finish_at {
            EpochPhase::Active
        } else {
            EpochPhase::Finished
        }
    }

    /// Rewards stop accruing once the epoch finishes.
    pub fn last_time_reward_applicable(&self, now: u64) -> u64 {
        now.min(self.finish_at)
    }

    /// Advance the reward-per-token accumulator up to `now` (bounded by
    /// the epoch end). When nobody is staked, time still advances so
    /// rewards are not granted retroactively to later stakers.
    pub fn accrue(&mut self, now: u64) {
        let applicable = self.last_time_reward_applicable(now);
        if applicable <= self.updated_at {
            return;
        }
        if !self.total_supply.is_zero() {
            let elapsed = applicable - self.updated_at;
            let accrued = self.reward_rate * Uint128::from(elapsed);
            self.reward_per_token =
                self.reward_per_token + Decimal::from_ratio(accrued, self.total_supply);
        }
        self.updated_at = applicable;
    }

    /// Settle an account against the accumulator, folding newly earned
    /// rewards into both `rewards` and `staked` (auto-compounding).
    /// Returns the newly earned amount. Maintains the invariant
    /// `staked == principal + rewards`.
    pub fn settle(&mut self, account: &mut StakeAccount, now: u64) -> Uint128 {
        self.accrue(now);
        let delta = self.reward_per_token - account.reward_per_token_paid;
        account.reward_per_token_paid = self.reward_per_token;
        if delta.is_zero() || account.staked.is_zero() {
            return Uint128::zero();
        }
        let earned = account.staked.mul_floor(delta);
        account.rewards += earned;
        account.staked += earned;
        self.total_supply += earned;
        earned
    }

    /// Rewards the account would earn if settled at `now`. Read-only.
    pub fn pending_reward(&self, account: &StakeAccount, now: u64) -> Uint128 {
        let mut projected = self.clone();
        projected.accrue(now);
        let delta = projected.reward_per_token - account.reward_per_token_paid;
        account.staked.mul_floor(delta)
    }
}

/// Per-account stake record. Invariant after every settled operation:
/// `staked == principal + rewards`.
#[cw_serde]
pub struct StakeAccount {
    /// Amount explicitly deposited, net of withdrawals.
    pub principal: Uint128,
    /// Total economic stake: principal plus compounded rewards.
    pub staked: Uint128,
    /// Accrued rewards folded in by compounding, not yet withdrawn.
    pub rewards: Uint128,
    /// Accumulator marker from the account's last settlement.
    pub reward_per_token_paid: Decimal,
}

impl StakeAccount {
    pub fn zero() -> Self {
        StakeAccount {
            principal: Uint128::zero(),
            staked: Uint128::zero(),
            rewards: Uint128::zero(),
            reward_per_token_paid: Decimal::zero(),
        }
    }
}
