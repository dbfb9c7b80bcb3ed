use cosmwasm_std::{entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;
use degree_common::owners;

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::query;
use crate::state::{NEXT_TOKEN_ID, PRIMARY_OWNER};

const CONTRACT_NAME: &str = "crates.io:degree";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    // The deployer is the primary owner and the first entry in the owner set
    PRIMARY_OWNER.save(deps.storage, &info.sender)?;
    owners::add(deps.storage, &info.sender)?;
    NEXT_TOKEN_ID.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "degree")
        .add_attribute("primary_owner", info.sender.to_string()))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetOwner { address } => execute::set_owner(deps, info, address),
        ExecuteMsg::RemoveOwner { address } => execute::remove_owner(deps, info, address),
        ExecuteMsg::SafeMint {
            to,
            name,
            roll,
            university_name,
            token_uri,
        } => execute::safe_mint(deps, info, to, name, roll, university_name, token_uri),
        ExecuteMsg::BurnToken { token_id } => execute::burn_token(deps, info, token_id),
    }
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::CheckOwner { caller, address } => {
            query::query_check_owner(deps, caller, address)
        }
        QueryMsg::StudentDetails { token_id } => query::query_student_details(deps, token_id),
        QueryMsg::TokenUri { token_id } => query::query_token_uri(deps, token_id),
        QueryMsg::OwnerOf { token_id } => query::query_owner_of(deps, token_id),
        QueryMsg::BalanceOf { address } => query::query_balance_of(deps, address),
        QueryMsg::PrimaryOwner {} => query::query_primary_owner(deps),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StudentRecord;
    use cosmwasm_std::testing::{message_info, mock_dependencies, mock_env, MockApi};
    use cosmwasm_std::{from_json, Addr};

    const TOKEN_URI: &str = "https://university.example/degrees/11.json";

    fn deployer(api: &MockApi) -> Addr {
        api.addr_make("deployer")
    }

    fn setup_contract(deps: DepsMut, api: &MockApi) {
        let info = message_info(&deployer(api), &[]);
        instantiate(deps, mock_env(), info, InstantiateMsg {}).unwrap();
    }

    fn mint_msg(to: &Addr) -> ExecuteMsg {
        ExecuteMsg::SafeMint {
            to: to.to_string(),
            name: "Bappa".to_string(),
            roll: 11,
            university_name: "VU".to_string(),
            token_uri: TOKEN_URI.to_string(),
        }
    }

    fn check_owner(deps: Deps, caller: &Addr, address: &str) -> StdResult<bool> {
        let bin = query(
            deps,
            mock_env(),
            QueryMsg::CheckOwner {
                caller: caller.to_string(),
                address: address.to_string(),
            },
        )?;
        from_json(bin)
    }

    fn balance_of(deps: Deps, address: &Addr) -> u64 {
        let bin = query(
            deps,
            mock_env(),
            QueryMsg::BalanceOf {
                address: address.to_string(),
            },
        )
        .unwrap();
        from_json(bin).unwrap()
    }

    #[test]
    fn test_instantiate() {
        let mut deps = mock_dependencies();
        let api = deps.api;
        setup_contract(deps.as_mut(), &api);
        let deployer = deployer(&api);

        let bin = query(deps.as_ref(), mock_env(), QueryMsg::PrimaryOwner {}).unwrap();
        let primary: Addr = from_json(bin).unwrap();
        assert_eq!(primary, deployer);

        // Deployer is seeded into the owner set
        assert!(check_owner(deps.as_ref(), &deployer, deployer.as_str()).unwrap());
    }

    #[test]
    fn test_set_owner() {
        let mut deps = mock_dependencies();
        let api = deps.api;
        setup_contract(deps.as_mut(), &api);
        let deployer = deployer(&api);
        let registrar = api.addr_make("registrar");

        let info = message_info(&deployer, &[]);
        let res = execute(
            deps.as_mut(),
            mock_env(),
            info,
            ExecuteMsg::SetOwner {
                address: registrar.to_string(),
            },
        )
        .unwrap();
        assert!(res.events.iter().any(|e| e.ty == "owner_added"));

        assert!(check_owner(deps.as_ref(), &deployer, registrar.as_str()).unwrap());
    }

    #[test]
    fn test_set_owner_unauthorized() {
        let mut deps = mock_dependencies();
        let api = deps.api;
        setup_contract(deps.as_mut(), &api);
        let random = api.addr_make("random");

        let info = message_info(&random, &[]);
        let err = execute(
            deps.as_mut(),
            mock_env(),
            info,
            ExecuteMsg::SetOwner {
                address: random.to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::Unauthorized { .. }));
    }

    #[test]
    fn test_set_owner_already_owner() {
        let mut deps = mock_dependencies();
        let api = deps.api;
        setup_contract(deps.as_mut(), &api);
        let deployer = deployer(&api);

        let info = message_info(&deployer, &[]);
        let err = execute(
            deps.as_mut(),
            mock_env(),
            info,
            ExecuteMsg::SetOwner {
                address: deployer.to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::AlreadyOwner { .. }));
    }

    #[test]
    fn test_remove_owner() {
        let mut deps = mock_dependencies();
        let api = deps.api;
        setup_contract(deps.as_mut(), &api);
        let deployer = deployer(&api);
        let registrar = api.addr_make("registrar");

        let info = message_info(&deployer, &[]);
        execute(
            deps.as_mut(),
            mock_env(),
            info.clone(),
            ExecuteMsg::SetOwner {
                address: registrar.to_string(),
            },
        )
        .unwrap();
        assert!(check_owner(deps.as_ref(), &deployer, registrar.as_str()).unwrap());

        let res = execute(
            deps.as_mut(),
            mock_env(),
            info,
            ExecuteMsg::RemoveOwner {
                address: registrar.to_string(),
            },
        )
        .unwrap();
        assert!(res.events.iter().any(|e| e.ty == "owner_removed"));
        assert!(!check_owner(deps.as_ref(), &deployer, registrar.as_str()).unwrap());
    }

    #[test]
    fn test_remove_owner_not_an_owner() {
        let mut deps = mock_dependencies();
        let api = deps.api;
        setup_contract(deps.as_mut(), &api);
        let deployer = deployer(&api);
        let stranger = api.addr_make("stranger");

        let info = message_info(&deployer, &[]);
        let err = execute(
            deps.as_mut(),
            mock_env(),
            info,
            ExecuteMsg::RemoveOwner {
                address: stranger.to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::NotAnOwner { .. }));
    }

    #[test]
    fn test_remove_owner_unauthorized() {
        let mut deps = mock_dependencies();
        let api = deps.api;
        setup_contract(deps.as_mut(), &api);
        let deployer = deployer(&api);
        let random = api.addr_make("random");

        let info = message_info(&random, &[]);
        let err = execute(
            deps.as_mut(),
            mock_env(),
            info,
            ExecuteMsg::RemoveOwner {
                address: deployer.to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::Unauthorized { .. }));
    }

    #[test]
    fn test_secondary_owner_cannot_manage_owner_set() {
        let mut deps = mock_dependencies();
        let api = deps.api;
        setup_contract(deps.as_mut(), &api);
        let deployer = deployer(&api);
        let registrar = api.addr_make("registrar");
        let mole = api.addr_make("mole");

        let info = message_info(&deployer, &[]);
        execute(
            deps.as_mut(),
            mock_env(),
            info,
            ExecuteMsg::SetOwner {
                address: registrar.to_string(),
            },
        )
        .unwrap();

        // A secondary owner can neither add owners...
        let info = message_info(&registrar, &[]);
        let err = execute(
            deps.as_mut(),
            mock_env(),
            info.clone(),
            ExecuteMsg::SetOwner {
                address: mole.to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::Unauthorized { .. }));
        assert!(!check_owner(deps.as_ref(), &deployer, mole.as_str()).unwrap());

        // ...nor remove the primary owner
        let err = execute(
            deps.as_mut(),
            mock_env(),
            info,
            ExecuteMsg::RemoveOwner {
                address: deployer.to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::Unauthorized { .. }));
        assert!(check_owner(deps.as_ref(), &deployer, deployer.as_str()).unwrap());
    }

    #[test]
    fn test_check_owner_query() {
        let mut deps = mock_dependencies();
        let api = deps.api;
        setup_contract(deps.as_mut(), &api);
        let deployer = deployer(&api);
        let stranger = api.addr_make("stranger");

        assert!(check_owner(deps.as_ref(), &deployer, deployer.as_str()).unwrap());
        assert!(!check_owner(deps.as_ref(), &deployer, stranger.as_str()).unwrap());
    }

    #[test]
    fn test_check_owner_empty_address() {
        let mut deps = mock_dependencies();
        let api = deps.api;
        setup_contract(deps.as_mut(), &api);
        let deployer = deployer(&api);

        let err = check_owner(deps.as_ref(), &deployer, "").unwrap_err();
        assert!(err.to_string().contains("address can't be empty"));
    }

    #[test]
    fn test_check_owner_unauthorized_caller() {
        let mut deps = mock_dependencies();
        let api = deps.api;
        setup_contract(deps.as_mut(), &api);
        let deployer = deployer(&api);
        let stranger = api.addr_make("stranger");

        let err = check_owner(deps.as_ref(), &stranger, deployer.as_str()).unwrap_err();
        assert!(err.to_string().contains("unauthorized"));
    }

    #[test]
    fn test_safe_mint() {
        let mut deps = mock_dependencies();
        let api = deps.api;
        setup_contract(deps.as_mut(), &api);
        let deployer = deployer(&api);
        let student = api.addr_make("student");

        let info = message_info(&deployer, &[]);
        let res = execute(deps.as_mut(), mock_env(), info, mint_msg(&student)).unwrap();

        // Registration event carries the metadata
        let event = res
            .events
            .iter()
            .find(|e| e.ty == "student_registered")
            .unwrap();
        assert!(event
            .attributes
            .iter()
            .any(|a| a.key == "token_id" && a.value == "0"));
        assert!(event
            .attributes
            .iter()
            .any(|a| a.key == "name" && a.value == "Bappa"));
        assert!(event
            .attributes
            .iter()
            .any(|a| a.key == "roll" && a.value == "11"));
        assert!(event
            .attributes
            .iter()
            .any(|a| a.key == "university_name" && a.value == "VU"));

        assert_eq!(balance_of(deps.as_ref(), &student), 1);

        let bin = query(deps.as_ref(), mock_env(), QueryMsg::OwnerOf { token_id: 0 }).unwrap();
        let holder: Addr = from_json(bin).unwrap();
        assert_eq!(holder, student);

        let bin = query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::StudentDetails { token_id: 0 },
        )
        .unwrap();
        let record: StudentRecord = from_json(bin).unwrap();
        assert_eq!(record.name, "Bappa");
        assert_eq!(record.roll, 11);
        assert_eq!(record.university_name, "VU");

        let bin = query(deps.as_ref(), mock_env(), QueryMsg::TokenUri { token_id: 0 }).unwrap();
        let uri: String = from_json(bin).unwrap();
        assert_eq!(uri, TOKEN_URI);
    }

    #[test]
    fn test_safe_mint_sequential_ids() {
        let mut deps = mock_dependencies();
        let api = deps.api;
        setup_contract(deps.as_mut(), &api);
        let deployer = deployer(&api);
        let student = api.addr_make("student");

        let info = message_info(&deployer, &[]);
        let res = execute(deps.as_mut(), mock_env(), info.clone(), mint_msg(&student)).unwrap();
        assert!(res
            .attributes
            .iter()
            .any(|a| a.key == "token_id" && a.value == "0"));

        let res = execute(deps.as_mut(), mock_env(), info, mint_msg(&student)).unwrap();
        assert!(res
            .attributes
            .iter()
            .any(|a| a.key == "token_id" && a.value == "1"));

        assert_eq!(balance_of(deps.as_ref(), &student), 2);
    }

    #[test]
    fn test_safe_mint_empty_recipient() {
        let mut deps = mock_dependencies();
        let api = deps.api;
        setup_contract(deps.as_mut(), &api);
        let deployer = deployer(&api);

        let info = message_info(&deployer, &[]);
        let err = execute(
            deps.as_mut(),
            mock_env(),
            info,
            ExecuteMsg::SafeMint {
                to: String::new(),
                name: "Bappa".to_string(),
                roll: 11,
                university_name: "VU".to_string(),
                token_uri: TOKEN_URI.to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::EmptyAddress));
    }

    #[test]
    fn test_safe_mint_unauthorized() {
        let mut deps = mock_dependencies();
        let api = deps.api;
        setup_contract(deps.as_mut(), &api);
        let random = api.addr_make("random");
        let student = api.addr_make("student");

        let info = message_info(&random, &[]);
        let err = execute(deps.as_mut(), mock_env(), info, mint_msg(&student)).unwrap_err();
        assert!(matches!(err, ContractError::Unauthorized { .. }));
    }

    #[test]
    fn test_burn_token() {
        let mut deps = mock_dependencies();
        let api = deps.api;
        setup_contract(deps.as_mut(), &api);
        let deployer = deployer(&api);
        let student = api.addr_make("student");

        let info = message_info(&deployer, &[]);
        execute(deps.as_mut(), mock_env(), info.clone(), mint_msg(&student)).unwrap();
        assert_eq!(balance_of(deps.as_ref(), &student), 1);

        execute(
            deps.as_mut(),
            mock_env(),
            info,
            ExecuteMsg::BurnToken { token_id: 0 },
        )
        .unwrap();

        assert_eq!(balance_of(deps.as_ref(), &student), 0);

        // Token and metadata are gone
        let err = query(deps.as_ref(), mock_env(), QueryMsg::TokenUri { token_id: 0 }).unwrap_err();
        assert!(err.to_string().contains("invalid token id"));
        let err = query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::StudentDetails { token_id: 0 },
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid token id"));
    }

    #[test]
    fn test_burn_token_invalid_id() {
        let mut deps = mock_dependencies();
        let api = deps.api;
        setup_contract(deps.as_mut(), &api);
        let deployer = deployer(&api);

        let info = message_info(&deployer, &[]);
        let err = execute(
            deps.as_mut(),
            mock_env(),
            info,
            ExecuteMsg::BurnToken { token_id: 11 },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::InvalidTokenId { token_id: 11 }));
    }

    #[test]
    fn test_burn_token_not_primary_owner() {
        let mut deps = mock_dependencies();
        let api = deps.api;
        setup_contract(deps.as_mut(), &api);
        let deployer = deployer(&api);
        let registrar = api.addr_make("registrar");
        let student = api.addr_make("student");

        let info = message_info(&deployer, &[]);
        execute(deps.as_mut(), mock_env(), info.clone(), mint_msg(&student)).unwrap();

        // A secondary owner can mint but not burn
        execute(
            deps.as_mut(),
            mock_env(),
            info,
            ExecuteMsg::SetOwner {
                address: registrar.to_string(),
            },
        )
        .unwrap();

        let info = message_info(&registrar, &[]);
        let err = execute(
            deps.as_mut(),
            mock_env(),
            info,
            ExecuteMsg::BurnToken { token_id: 0 },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::Unauthorized { .. }));
    }

    #[test]
    fn test_token_uri_never_minted() {
        let mut deps = mock_dependencies();
        let api = deps.api;
        setup_contract(deps.as_mut(), &api);

        let err = query(deps.as_ref(), mock_env(), QueryMsg::TokenUri { token_id: 1 }).unwrap_err();
        assert!(err.to_string().contains("invalid token id"));
    }

    #[test]
    fn test_secondary_owner_can_mint() {
        let mut deps = mock_dependencies();
        let api = deps.api;
        setup_contract(deps.as_mut(), &api);
        let deployer = deployer(&api);
        let registrar = api.addr_make("registrar");
        let student = api.addr_make("student");

        let info = message_info(&deployer, &[]);
        execute(
            deps.as_mut(),
            mock_env(),
            info,
            ExecuteMsg::SetOwner {
                address: registrar.to_string(),
            },
        )
        .unwrap();

        let info = message_info(&registrar, &[]);
        execute(deps.as_mut(), mock_env(), info, mint_msg(&student)).unwrap();

        let bin = query(deps.as_ref(), mock_env(), QueryMsg::OwnerOf { token_id: 0 }).unwrap();
        let holder: Addr = from_json(bin).unwrap();
        assert_eq!(holder, student);
    }
}
