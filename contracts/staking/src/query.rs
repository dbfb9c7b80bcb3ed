use cosmwasm_std::{to_json_binary, Binary, Deps, StdResult};

use crate::msg::{AccountResponse, PoolResponse};
use crate::state::{StakeAccount, ACCOUNTS, CONFIG, POOL};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_pool(deps: Deps, now: u64) -> StdResult<Binary> {
    let state = POOL.load(deps.storage)?;
    let phase = state.phase(now);
    to_json_binary(&PoolResponse { state, phase })
}

pub fn query_account(deps: Deps, address: String) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&address)?;
    let account = ACCOUNTS
        .may_load(deps.storage, &addr)?
        .unwrap_or_else(StakeAccount::zero);
    to_json_binary(&AccountResponse {
        address,
        principal: account.principal,
        staked: account.staked,
        rewards: account.rewards,
    })
}

pub fn query_earned(deps: Deps, address: String, now: u64) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&address)?;
    let account = ACCOUNTS
        .may_load(deps.storage, &addr)?
        .unwrap_or_else(StakeAccount::zero);
    let pool = POOL.load(deps.storage)?;
    to_json_binary(&pool.pending_reward(&account, now))
}

pub fn query_total_supply(deps: Deps) -> StdResult<Binary> {
    let pool = POOL.load(deps.storage)?;
    to_json_binary(&pool.total_supply)
}
