//! Owner-set storage helpers shared by contracts that keep a list of
//! privileged addresses, as opposed to a single admin field.

use cosmwasm_std::{Addr, Empty, StdResult, Storage};
use cw_storage_plus::Map;

pub const OWNERS: Map<&Addr, Empty> = Map::new("owners");

/// Add an address to the owner set. Idempotent at the storage level;
/// callers enforce their own already-an-owner rules.
pub fn add(storage: &mut dyn Storage, addr: &Addr) -> StdResult<()> {
    OWNERS.save(storage, addr, &Empty {})
}

pub fn remove(storage: &mut dyn Storage, addr: &Addr) {
    OWNERS.remove(storage, addr)
}

pub fn is_owner(storage: &dyn Storage, addr: &Addr) -> bool {
    OWNERS.has(storage, addr)
}
