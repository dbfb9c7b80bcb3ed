use cosmwasm_std::{Addr, Api, DepsMut, Event, MessageInfo, Response, Storage};
use degree_common::owners;

use crate::error::ContractError;
use crate::state::{DegreeToken, StudentRecord, BALANCES, NEXT_TOKEN_ID, PRIMARY_OWNER, TOKENS};

/// Guard: caller must be in the owner set.
fn require_owner(storage: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
    if !owners::is_owner(storage, sender) {
        return Err(ContractError::Unauthorized {
            reason: format!("{} is not an authorized owner", sender),
        });
    }
    Ok(())
}

/// Guard: caller must be the primary owner. Secondary owners can mint
/// but cannot mutate the owner set or burn.
fn require_primary_owner(
    storage: &dyn Storage,
    sender: &Addr,
    reason: &str,
) -> Result<(), ContractError> {
    let primary = PRIMARY_OWNER.load(storage)?;
    if *sender != primary {
        return Err(ContractError::Unauthorized {
            reason: reason.to_string(),
        });
    }
    Ok(())
}

/// Validate an externally supplied address string. Empty input is
/// rejected up front so the caller gets a descriptive reason instead of
/// a bech32 parse error.
fn validate_address(api: &dyn Api, address: &str) -> Result<Addr, ContractError> {
    if address.is_empty() {
        return Err(ContractError::EmptyAddress);
    }
    Ok(api.addr_validate(address)?)
}

/// Authorize an address as an owner. Primary owner only.
pub fn set_owner(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    require_primary_owner(
        deps.storage,
        &info.sender,
        "only the primary owner can add owners",
    )?;
    let addr = validate_address(deps.api, &address)?;

    if owners::is_owner(deps.storage, &addr) {
        return Err(ContractError::AlreadyOwner { address });
    }
    owners::add(deps.storage, &addr)?;

    Ok(Response::new()
        .add_attribute("action", "set_owner")
        .add_attribute("address", address.clone())
        .add_event(Event::new("owner_added").add_attribute("address", address)))
}

/// Revoke an address's owner status. Primary owner only.
pub fn remove_owner(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    require_primary_owner(
        deps.storage,
        &info.sender,
        "only the primary owner can remove owners",
    )?;
    let addr = validate_address(deps.api, &address)?;

    if !owners::is_owner(deps.storage, &addr) {
        return Err(ContractError::NotAnOwner { address });
    }
    owners::remove(deps.storage, &addr);

    Ok(Response::new()
        .add_attribute("action", "remove_owner")
        .add_attribute("address", address.clone())
        .add_event(Event::new("owner_removed").add_attribute("address", address)))
}

/// Mint a degree credential to `to`, assigning the next sequential
/// token id. Owners only.
pub fn safe_mint(
    deps: DepsMut,
    info: MessageInfo,
    to: String,
    name: String,
    roll: u64,
    university_name: String,
    token_uri: String,
) -> Result<Response, ContractError> {
    require_owner(deps.storage, &info.sender)?;
    let recipient = validate_address(deps.api, &to)?;

    let token_id = NEXT_TOKEN_ID.load(deps.storage)?;
    let token = DegreeToken {
        holder: recipient.clone(),
        student: StudentRecord {
            name: name.clone(),
            roll,
            university_name: university_name.clone(),
        },
        token_uri,
    };
    TOKENS.save(deps.storage, token_id, &token)?;
    NEXT_TOKEN_ID.save(deps.storage, &(token_id + 1))?;

    let balance = BALANCES
        .may_load(deps.storage, &recipient)?
        .unwrap_or(0);
    BALANCES.save(deps.storage, &recipient, &(balance + 1))?;

    Ok(Response::new()
        .add_attribute("action", "safe_mint")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("to", recipient.to_string())
        .add_event(
            Event::new("student_registered")
                .add_attribute("token_id", token_id.to_string())
                .add_attribute("name", name)
                .add_attribute("roll", roll.to_string())
                .add_attribute("university_name", university_name),
        ))
}

/// Burn a token and its student record. Primary owner only.
pub fn burn_token(
    deps: DepsMut,
    info: MessageInfo,
    token_id: u64,
) -> Result<Response, ContractError> {
    let token = TOKENS
        .may_load(deps.storage, token_id)?
        .ok_or(ContractError::InvalidTokenId { token_id })?;

    require_primary_owner(
        deps.storage,
        &info.sender,
        "only the primary owner can burn tokens",
    )?;

    TOKENS.remove(deps.storage, token_id);

    let balance = BALANCES.load(deps.storage, &token.holder)?;
    BALANCES.save(deps.storage, &token.holder, &(balance - 1))?;

    Ok(Response::new()
        .add_attribute("action", "burn_token")
        .add_attribute("token_id", token_id.to_string())
        .add_event(
            Event::new("degree_burned")
                .add_attribute("token_id", token_id.to_string())
                .add_attribute("holder", token.holder.to_string()),
        ))
}
