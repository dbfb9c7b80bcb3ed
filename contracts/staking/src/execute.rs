use cosmwasm_std::{
    coins, BankMsg, DepsMut, Env, Event, MessageInfo, Response, Uint128,
};

use crate::error::ContractError;
use crate::state::{EpochPhase, StakeAccount, ACCOUNTS, CONFIG, POOL};

/// Set the length of the next reward epoch. Owner only. Allowed only
/// while no epoch is configured or the current one has finished.
pub fn set_duration(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    seconds: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {
            reason: "only the owner can set the reward duration".to_string(),
        });
    }
    if seconds == 0 {
        return Err(ContractError::ZeroDuration);
    }

    let mut pool = POOL.load(deps.storage)?;
    let now = env.block.time.seconds();
    if matches!(pool.phase(now), EpochPhase::Active) {
        return Err(ContractError::DurationNotFinished {
            finish_at: pool.finish_at,
        });
    }

    pool.duration = seconds;
    POOL.save(deps.storage, &pool)?;

    Ok(Response::new()
        .add_attribute("action", "set_duration")
        .add_attribute("seconds", seconds.to_string())
        .add_event(Event::new("duration_set").add_attribute("seconds", seconds.to_string())))
}

/// Schedule `amount` of the reward denom over the configured duration.
/// Owner only. Any undistributed remainder of a still-active epoch is
/// carried into the new rate.
pub fn set_reward_amount(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized {
            reason: "only the owner can schedule rewards".to_string(),
        });
    }

    let mut pool = POOL.load(deps.storage)?;
    if pool.duration == 0 {
        return Err(ContractError::DurationNotSet);
    }

    let now = env.block.time.seconds();
    pool.accrue(now);

    let total = match pool.phase(now) {
        EpochPhase::Active => {
            let remaining = pool.reward_rate * Uint128::from(pool.finish_at - now);
            amount + remaining
        }
        _ => amount,
    };

    let rate = total / Uint128::from(pool.duration);
    if rate.is_zero() {
        return Err(ContractError::RewardRateZero);
    }

    let balance = deps
        .querier
        .query_balance(&env.contract.address, &config.reward_denom)?
        .amount;
    if total > balance {
        return Err(ContractError::RewardExceedsBalance {
            amount: total,
            balance,
        });
    }

    pool.reward_rate = rate;
    pool.finish_at = now + pool.duration;
    pool.updated_at = now;
    POOL.save(deps.storage, &pool)?;

    Ok(Response::new()
        .add_attribute("action", "set_reward_amount")
        .add_attribute("amount", amount.to_string())
        .add_attribute("reward_rate", rate.to_string())
        .add_event(
            Event::new("reward_scheduled")
                .add_attribute("amount", amount.to_string())
                .add_attribute("reward_rate", rate.to_string())
                .add_attribute("finish_at", pool.finish_at.to_string()),
        ))
}

/// Deposit stake tokens sent in info.funds.
pub fn stake(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    // Validate funds: exactly one coin, must be the stake denom
    if info.funds.is_empty() {
        return Err(ContractError::NoFundsSent);
    }
    if info.funds.len() != 1 {
        return Err(ContractError::InvalidFunds);
    }
    let sent = &info.funds[0];
    if sent.denom != config.stake_denom {
        return Err(ContractError::WrongDenom {
            denom: sent.denom.clone(),
        });
    }
    let amount = sent.amount;
    if amount.is_zero() {
        return Err(ContractError::NoFundsSent);
    }

    let mut pool = POOL.load(deps.storage)?;
    let mut account = ACCOUNTS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_else(StakeAccount::zero);

    let now = env.block.time.seconds();
    pool.settle(&mut account, now);

    account.principal += amount;
    account.staked += amount;
    pool.total_supply += amount;

    ACCOUNTS.save(deps.storage, &info.sender, &account)?;
    POOL.save(deps.storage, &pool)?;

    Ok(Response::new()
        .add_attribute("action", "stake")
        .add_attribute("user", info.sender.to_string())
        .add_attribute("amount", amount.to_string())
        .add_event(
            Event::new("pool_stake")
                .add_attribute("user", info.sender.to_string())
                .add_attribute("amount", amount.to_string())
                .add_attribute("principal", account.principal.to_string())
                .add_attribute("staked", account.staked.to_string())
                .add_attribute("total_supply", pool.total_supply.to_string()),
        ))
}

/// Withdraw part of the staked balance back to the caller.
pub fn withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let config = CONFIG.load(deps.storage)?;
    let mut pool = POOL.load(deps.storage)?;
    let mut account = ACCOUNTS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_else(StakeAccount::zero);

    let now = env.block.time.seconds();
    pool.settle(&mut account, now);

    let staked = account.staked;
    account.staked = staked
        .checked_sub(amount)
        .map_err(|_| ContractError::Underflow { amount, staked })?;
    account.principal = account
        .principal
        .checked_sub(amount)
        .map_err(|_| ContractError::Underflow { amount, staked })?;
    pool.total_supply = pool
        .total_supply
        .checked_sub(amount)
        .map_err(|_| ContractError::Underflow { amount, staked })?;

    ACCOUNTS.save(deps.storage, &info.sender, &account)?;
    POOL.save(deps.storage, &pool)?;

    let send_msg = BankMsg::Send {
        to_address: info.sender.to_string(),
        amount: coins(amount.u128(), config.stake_denom),
    };

    Ok(Response::new()
        .add_message(send_msg)
        .add_attribute("action", "withdraw")
        .add_attribute("user", info.sender.to_string())
        .add_attribute("amount", amount.to_string())
        .add_event(
            Event::new("pool_withdraw")
                .add_attribute("user", info.sender.to_string())
                .add_attribute("amount", amount.to_string())
                .add_attribute("principal", account.principal.to_string())
                .add_attribute("staked", account.staked.to_string())
                .add_attribute("total_supply", pool.total_supply.to_string()),
        ))
}

/// Fold an account's newly accrued rewards into its staked balance.
/// Callable by anyone on behalf of any account.
pub fn auto_compound(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    account_addr: String,
) -> Result<Response, ContractError> {
    let addr = deps.api.addr_validate(&account_addr)?;

    let mut account = ACCOUNTS
        .may_load(deps.storage, &addr)?
        .unwrap_or_else(StakeAccount::zero);
    if account.staked.is_zero() {
        return Err(ContractError::InsufficientStake {
            address: account_addr,
        });
    }

    let mut pool = POOL.load(deps.storage)?;
    let now = env.block.time.seconds();
    let accrued = pool.settle(&mut account, now);

    ACCOUNTS.save(deps.storage, &addr, &account)?;
    POOL.save(deps.storage, &pool)?;

    Ok(Response::new()
        .add_attribute("action", "auto_compound")
        .add_attribute("account", addr.to_string())
        .add_attribute("accrued", accrued.to_string())
        .add_event(
            Event::new("pool_auto_compound")
                .add_attribute("caller", info.sender.to_string())
                .add_attribute("account", addr.to_string())
                .add_attribute("accrued", accrued.to_string())
                .add_attribute("staked", account.staked.to_string())
                .add_attribute("rewards", account.rewards.to_string()),
        ))
}
