use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

use crate::state::{Config, EpochPhase, PoolState};

#[cw_serde]
pub struct InstantiateMsg {
    pub stake_denom: String,
    pub reward_denom: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Set the length of the next reward epoch. Owner only; allowed
    /// only before the first epoch or after the current one finishes.
    SetDuration { seconds: u64 },
    /// Schedule `amount` of the reward denom to be distributed over the
    /// configured duration. Owner only. The pool must already hold at
    /// least that much of the reward denom.
    SetRewardAmount { amount: Uint128 },
    /// Deposit stake tokens. Send the stake denom in info.funds.
    Stake {},
    /// Withdraw part of the staked balance back to the caller.
    Withdraw { amount: Uint128 },
    /// Fold an account's newly accrued rewards into its staked balance.
    /// Callable by anyone on behalf of any account.
    AutoCompound { account: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    Config {},
    #[returns(PoolResponse)]
    Pool {},
    #[returns(AccountResponse)]
    Account { address: String },
    /// Rewards accrued since the account's last settlement, not yet
    /// folded into its balances.
    #[returns(Uint128)]
    Earned { address: String },
    #[returns(Uint128)]
    TotalSupply {},
}

#[cw_serde]
pub struct PoolResponse {
    pub state: PoolState,
    pub phase: EpochPhase,
}

#[cw_serde]
pub struct AccountResponse {
    pub address: String,
    pub principal: Uint128,
    pub staked: Uint128,
    pub rewards: Uint128,
}
