use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;

use crate::state::StudentRecord;

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Authorize an address as an owner. Primary owner only.
    SetOwner { address: String },
    /// Revoke an address's owner status. Primary owner only.
    RemoveOwner { address: String },
    /// Mint a degree credential to `to`. Owners only.
    SafeMint {
        to: String,
        name: String,
        roll: u64,
        university_name: String,
        token_uri: String,
    },
    /// Burn a token and its student record. Primary owner only.
    BurnToken { token_id: u64 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Owner-set membership check. `caller` must itself be an owner.
    #[returns(bool)]
    CheckOwner { caller: String, address: String },
    #[returns(StudentRecord)]
    StudentDetails { token_id: u64 },
    #[returns(String)]
    TokenUri { token_id: u64 },
    #[returns(Addr)]
    OwnerOf { token_id: u64 },
    #[returns(u64)]
    BalanceOf { address: String },
    #[returns(Addr)]
    PrimaryOwner {},
}
