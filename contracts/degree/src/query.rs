use cosmwasm_std::{to_json_binary, Binary, Deps, StdError, StdResult};
use degree_common::owners;

use crate::state::{BALANCES, PRIMARY_OWNER, TOKENS};

/// Owner-set membership check. `caller` must itself be an owner and
/// `address` must be non-empty.
pub fn query_check_owner(deps: Deps, caller: String, address: String) -> StdResult<Binary> {
    if address.is_empty() {
        return Err(StdError::generic_err("address can't be empty"));
    }
    let caller = deps.api.addr_validate(&caller)?;
    if !owners::is_owner(deps.storage, &caller) {
        return Err(StdError::generic_err(format!(
            "unauthorized: {} is not an authorized owner",
            caller
        )));
    }
    let addr = deps.api.addr_validate(&address)?;
    to_json_binary(&owners::is_owner(deps.storage, &addr))
}

pub fn query_student_details(deps: Deps, token_id: u64) -> StdResult<Binary> {
    let token = TOKENS
        .may_load(deps.storage, token_id)?
        .ok_or_else(|| StdError::generic_err(format!("invalid token id {}", token_id)))?;
    to_json_binary(&token.student)
}

pub fn query_token_uri(deps: Deps, token_id: u64) -> StdResult<Binary> {
    let token = TOKENS
        .may_load(deps.storage, token_id)?
        .ok_or_else(|| StdError::generic_err(format!("invalid token id {}", token_id)))?;
    to_json_binary(&token.token_uri)
}

pub fn query_owner_of(deps: Deps, token_id: u64) -> StdResult<Binary> {
    let token = TOKENS
        .may_load(deps.storage, token_id)?
        .ok_or_else(|| StdError::generic_err(format!("invalid token id {}", token_id)))?;
    to_json_binary(&token.holder)
}

pub fn query_balance_of(deps: Deps, address: String) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&address)?;
    let balance = BALANCES.may_load(deps.storage, &addr)?.unwrap_or(0);
    to_json_binary(&balance)
}

pub fn query_primary_owner(deps: Deps) -> StdResult<Binary> {
    let primary = PRIMARY_OWNER.load(deps.storage)?;
    to_json_binary(&primary)
}
