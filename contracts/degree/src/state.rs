use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};

/// The instantiating address. The only address allowed to burn tokens.
/// Also seeded into the owner set (degree_common::owners).
pub const PRIMARY_OWNER: Item<Addr> = Item::new("primary_owner");
/// Sequential token id assignment, starting at 0.
pub const NEXT_TOKEN_ID: Item<u64> = Item::new("next_token_id");
pub const TOKENS: Map<u64, DegreeToken> = Map::new("tokens");
pub const BALANCES: Map<&Addr, u64> = Map::new("balances");

#[cw_serde]
pub struct StudentRecord {
    pub name: String,
    pub roll: u64,
    pub university_name: String,
}

#[cw_serde]
pub struct DegreeToken {
    pub holder: Addr,
    pub student: StudentRecord,
    /// Stored verbatim, never validated for reachability.
    pub token_uri: String,
}
