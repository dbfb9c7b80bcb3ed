use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("{address} is already an owner")]
    AlreadyOwner { address: String },

    #[error("{address} is not an owner")]
    NotAnOwner { address: String },

    #[error("address can't be empty")]
    EmptyAddress,

    #[error("invalid token id {token_id}")]
    InvalidTokenId { token_id: u64 },
}
