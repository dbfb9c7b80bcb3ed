use cosmwasm_std::{entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::query;
use crate::state::{Config, PoolState, CONFIG, POOL};

const CONTRACT_NAME: &str = "crates.io:staking";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        owner: info.sender.clone(),
        stake_denom: msg.stake_denom,
        reward_denom: msg.reward_denom,
    };
    CONFIG.save(deps.storage, &config)?;
    POOL.save(deps.storage, &PoolState::zero())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "staking")
        .add_attribute("owner", info.sender.to_string()))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetDuration { seconds } => execute::set_duration(deps, env, info, seconds),
        ExecuteMsg::SetRewardAmount { amount } => {
            execute::set_reward_amount(deps, env, info, amount)
        }
        ExecuteMsg::Stake {} => execute::stake(deps, env, info),
        ExecuteMsg::Withdraw { amount } => execute::withdraw(deps, env, info, amount),
        ExecuteMsg::AutoCompound { account } => execute::auto_compound(deps, env, info, account),
    }
}

#[entry_point]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    let now = env.block.time.seconds();
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::Pool {} => query::query_pool(deps, now),
        QueryMsg::Account { address } => query::query_account(deps, address),
        QueryMsg::Earned { address } => query::query_earned(deps, address, now),
        QueryMsg::TotalSupply {} => query::query_total_supply(deps),
    }
}
