#![no_std]
use soroban_sdk::{contract, contracterror, contractimpl, log, Address, Bytes, Env, Vec};

mod admin;
mod audit;
mod events;
mod guard;
mod ledger;
mod storage_types;

pub use storage_types::{AuditEntry, Record, NULL_ACCOUNT};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    MissingAuditEntry = 3,
    NotAuthorized = 100,
    InvalidIdentity = 101,
    NotFound = 102,
    Paused = 103,
    InvalidData = 104,
}

#[contract]
pub struct RecordVaultContract;

#[contractimpl]
impl RecordVaultContract {
    /// Initialize the vault with its first admin. Only can be called once.
    pub fn initialize(e: Env, admin: Address) -> Result<(), Error> {
        if admin::has_admin(&e) {
            return Err(Error::AlreadyInitialized);
        }
        guard::require_valid_identity(&e, &admin)?;

        admin::write_admin(&e, &admin);
        admin::write_paused(&e, false);
        admin::extend_instance(&e);

        log!(&e, "vault initialized", admin);
        events::initialized(&e, &admin);
        Ok(())
    }

    /// Pause or resume record writes. Only callable by the admin.
    ///
    /// Setting the flag to its current value still refreshes the
    /// last-updated timestamp.
    pub fn set_paused(e: Env, caller: Address, pause: bool) -> Result<bool, Error> {
        caller.require_auth();
        guard::require_admin(&e, &caller)?;

        admin::write_paused(&e, pause);
        let now = admin::touch_last_updated(&e);
        admin::extend_instance(&e);

        log!(&e, "pause flag set", pause, now);
        events::paused_set(&e, &caller, pause, now);
        Ok(pause)
    }

    /// Hand the admin role to `new_admin`. Takes effect immediately; there is
    /// no acceptance step and the old admin keeps no rights.
    ///
    /// # Arguments
    /// * `caller` - The current admin
    /// * `new_admin` - The account receiving the role, never the null account
    pub fn transfer_admin(e: Env, caller: Address, new_admin: Address) -> Result<bool, Error> {
        caller.require_auth();
        guard::require_admin(&e, &caller)?;
        guard::require_valid_identity(&e, &new_admin)?;

        admin::write_admin(&e, &new_admin);
        let now = admin::touch_last_updated(&e);
        admin::extend_instance(&e);

        log!(&e, "admin transferred", caller, new_admin);
        events::admin_transferred(&e, &caller, &new_admin, now);
        Ok(true)
    }

    pub fn get_admin(e: Env) -> Result<Address, Error> {
        admin::read_admin(&e).ok_or(Error::NotInitialized)
    }

    pub fn is_paused(e: Env) -> bool {
        admin::read_paused(&e)
    }

    pub fn get_last_updated(e: Env) -> u64 {
        admin::read_last_updated(&e)
    }

    /// Store a new record for `owner` and return its id.
    ///
    /// # Arguments
    /// * `caller` - Must be the owner
    /// * `owner` - The account the record belongs to
    /// * `payload` - Opaque, non-empty record contents
    pub fn store_record(
        e: Env,
        caller: Address,
        owner: Address,
        payload: Bytes,
    ) -> Result<u64, Error> {
        caller.require_auth();
        guard::check_record_write(&e, &caller, &owner, &payload)?;

        let now = e.ledger().timestamp();
        let record_id = ledger::insert_record(&e, &owner, payload, now);
        audit::open_trail(&e, &owner, record_id);
        admin::extend_instance(&e);

        log!(&e, "record stored", owner, record_id);
        events::record_stored(&e, &owner, record_id, now);
        Ok(record_id)
    }

    /// Replace the payload of an existing record and return its new version.
    ///
    /// Existence is checked after every other guard, so a caller who does not
    /// own `owner`'s records cannot tell which ids exist.
    pub fn update_record(
        e: Env,
        caller: Address,
        owner: Address,
        record_id: u64,
        payload: Bytes,
    ) -> Result<u64, Error> {
        caller.require_auth();
        guard::check_record_write(&e, &caller, &owner, &payload)?;
        let record = ledger::read_record(&e, &owner, record_id).ok_or(Error::NotFound)?;

        let now = e.ledger().timestamp();
        let version = ledger::replace_record(&e, &owner, record_id, record, payload, now);
        admin::extend_instance(&e);

        log!(&e, "record updated", owner, record_id, version);
        events::record_updated(&e, &owner, record_id, version, now);
        Ok(version)
    }

    /// Read a record. Allowed while paused. Every successful read is appended
    /// to the record's access trail.
    pub fn get_record(
        e: Env,
        caller: Address,
        owner: Address,
        record_id: u64,
    ) -> Result<Record, Error> {
        caller.require_auth();
        guard::require_owner(&caller, &owner)?;
        let record = ledger::read_record(&e, &owner, record_id).ok_or(Error::NotFound)?;

        let now = e.ledger().timestamp();
        let entry = AuditEntry {
            accessor: caller.clone(),
            timestamp: now,
        };
        let reads = audit::append(&e, &owner, record_id, &entry);
        ledger::bump_record(&e, &owner, record_id);
        admin::extend_instance(&e);

        log!(&e, "record read", owner, record_id, reads);
        events::record_read(&e, &owner, record_id, &caller, now);
        Ok(record)
    }

    pub fn get_record_version(e: Env, owner: Address, record_id: u64) -> Result<u64, Error> {
        ledger::read_record(&e, &owner, record_id)
            .map(|record| record.version)
            .ok_or(Error::NotFound)
    }

    /// Id the next `store_record` for `owner` will receive.
    pub fn get_next_record_id(e: Env, owner: Address) -> u64 {
        ledger::read_next_id(&e, &owner)
    }

    /// Full access trail for a record, newest first. Empty for unknown records.
    pub fn get_access_audit_log(e: Env, owner: Address, record_id: u64) -> Vec<AuditEntry> {
        audit::read_all(&e, &owner, record_id)
    }

    pub fn get_access_audit_count(e: Env, owner: Address, record_id: u64) -> u64 {
        audit::read_count(&e, &owner, record_id)
    }

    /// A window of the access trail, newest first.
    ///
    /// # Arguments
    /// * `start` - Number of newest entries to skip
    /// * `limit` - Maximum number of entries returned
    pub fn get_access_audit_page(
        e: Env,
        owner: Address,
        record_id: u64,
        start: u64,
        limit: u64,
    ) -> Vec<AuditEntry> {
        audit::read_page(&e, &owner, record_id, start, limit)
    }
}
