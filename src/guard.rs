//! Checks run ahead of every state change.
//!
//! Entry points call the `require_*` helpers in a fixed order (pause, then
//! ownership or admin, then payload, then identity) and return on the first
//! failure, so a rejected call never touches storage.

use soroban_sdk::{Address, Bytes, Env, String};

use crate::admin;
use crate::storage_types::NULL_ACCOUNT;
use crate::Error;

pub fn null_account(e: &Env) -> Address {
    Address::from_string(&String::from_str(e, NULL_ACCOUNT))
}

pub fn is_admin(e: &Env, caller: &Address) -> bool {
    admin::read_admin(e).is_some_and(|admin| admin == *caller)
}

pub fn not_paused(e: &Env) -> bool {
    !admin::read_paused(e)
}

pub fn is_owner(caller: &Address, owner: &Address) -> bool {
    caller == owner
}

pub fn valid_identity(e: &Env, id: &Address) -> bool {
    *id != null_account(e)
}

pub fn require_initialized(e: &Env) -> Result<(), Error> {
    if !admin::has_admin(e) {
        return Err(Error::NotInitialized);
    }
    Ok(())
}

pub fn require_admin(e: &Env, caller: &Address) -> Result<(), Error> {
    require_initialized(e)?;
    if !is_admin(e, caller) {
        return Err(Error::NotAuthorized);
    }
    Ok(())
}

pub fn require_not_paused(e: &Env) -> Result<(), Error> {
    if !not_paused(e) {
        return Err(Error::Paused);
    }
    Ok(())
}

pub fn require_owner(caller: &Address, owner: &Address) -> Result<(), Error> {
    if !is_owner(caller, owner) {
        return Err(Error::NotAuthorized);
    }
    Ok(())
}

pub fn require_payload(payload: &Bytes) -> Result<(), Error> {
    if payload.is_empty() {
        return Err(Error::InvalidData);
    }
    Ok(())
}

pub fn require_valid_identity(e: &Env, id: &Address) -> Result<(), Error> {
    if !valid_identity(e, id) {
        return Err(Error::InvalidIdentity);
    }
    Ok(())
}

/// Full guard chain for a record write by `caller` on behalf of `owner`.
pub fn check_record_write(
    e: &Env,
    caller: &Address,
    owner: &Address,
    payload: &Bytes,
) -> Result<(), Error> {
    require_not_paused(e)?;
    require_owner(caller, owner)?;
    require_payload(payload)?;
    require_valid_identity(e, owner)
}
