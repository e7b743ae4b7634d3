//! Per-record access trail.
//!
//! Each entry sits under its own `AuditSlot(owner, id, seq)` key with
//! `AuditCount(owner, id)` holding the number of entries. Sequence numbers
//! start at 0 and only grow; listings walk them from the highest down so the
//! newest entry comes first.

use soroban_sdk::{panic_with_error, Address, Env, Vec};

use crate::storage_types::{AuditEntry, DataKey, RECORD_BUMP_AMOUNT, RECORD_LIFETIME_THRESHOLD};
use crate::Error;

pub fn read_count(e: &Env, owner: &Address, record_id: u64) -> u64 {
    e.storage()
        .persistent()
        .get(&DataKey::AuditCount(owner.clone(), record_id))
        .unwrap_or(0)
}

fn write_count(e: &Env, owner: &Address, record_id: u64, count: u64) {
    let key = DataKey::AuditCount(owner.clone(), record_id);
    e.storage().persistent().set(&key, &count);
    e.storage()
        .persistent()
        .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

/// Creates the empty trail for a freshly stored record.
pub fn open_trail(e: &Env, owner: &Address, record_id: u64) {
    write_count(e, owner, record_id, 0);
}

pub fn append(e: &Env, owner: &Address, record_id: u64, entry: &AuditEntry) -> u64 {
    let seq = read_count(e, owner, record_id);
    let key = DataKey::AuditSlot(owner.clone(), record_id, seq);
    e.storage().persistent().set(&key, entry);
    e.storage()
        .persistent()
        .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
    write_count(e, owner, record_id, seq + 1);
    seq + 1
}

/// Up to `limit` entries, newest first, skipping the `start` newest ones.
pub fn read_page(
    e: &Env,
    owner: &Address,
    record_id: u64,
    start: u64,
    limit: u64,
) -> Vec<AuditEntry> {
    let mut out = Vec::new(e);
    let count = read_count(e, owner, record_id);
    if start >= count {
        return out;
    }
    let mut seq = count - start;
    let mut taken = 0;
    while seq > 0 && taken < limit {
        seq -= 1;
        let key = DataKey::AuditSlot(owner.clone(), record_id, seq);
        // Slots below the count are never removed.
        let entry: AuditEntry = e
            .storage()
            .persistent()
            .get(&key)
            .unwrap_or_else(|| panic_with_error!(e, Error::MissingAuditEntry));
        out.push_back(entry);
        taken += 1;
    }
    out
}

pub fn read_all(e: &Env, owner: &Address, record_id: u64) -> Vec<AuditEntry> {
    read_page(e, owner, record_id, 0, u64::MAX)
}
