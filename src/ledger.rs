use soroban_sdk::{Address, Bytes, Env};

use crate::storage_types::{DataKey, Record, RECORD_BUMP_AMOUNT, RECORD_LIFETIME_THRESHOLD};

/// Next id to hand out for `owner`. Owners that never stored a record start at 1.
pub fn read_next_id(e: &Env, owner: &Address) -> u64 {
    e.storage()
        .persistent()
        .get(&DataKey::NextId(owner.clone()))
        .unwrap_or(1)
}

fn write_next_id(e: &Env, owner: &Address, next: u64) {
    let key = DataKey::NextId(owner.clone());
    e.storage().persistent().set(&key, &next);
    e.storage()
        .persistent()
        .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

pub fn read_record(e: &Env, owner: &Address, record_id: u64) -> Option<Record> {
    e.storage()
        .persistent()
        .get(&DataKey::Record(owner.clone(), record_id))
}

/// Keeps a record alive for as long as it keeps being read.
pub fn bump_record(e: &Env, owner: &Address, record_id: u64) {
    e.storage().persistent().extend_ttl(
        &DataKey::Record(owner.clone(), record_id),
        RECORD_LIFETIME_THRESHOLD,
        RECORD_BUMP_AMOUNT,
    );
}

fn write_record(e: &Env, owner: &Address, record_id: u64, record: &Record) {
    let key = DataKey::Record(owner.clone(), record_id);
    e.storage().persistent().set(&key, record);
    e.storage()
        .persistent()
        .extend_ttl(&key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

/// Allocates the next id for `owner` and writes version 1 of the record.
/// Callers must have passed the write guards.
pub fn insert_record(e: &Env, owner: &Address, payload: Bytes, timestamp: u64) -> u64 {
    let record_id = read_next_id(e, owner);
    let record = Record {
        payload,
        version: 1,
        timestamp,
    };
    write_record(e, owner, record_id, &record);
    write_next_id(e, owner, record_id + 1);
    record_id
}

/// Replaces payload and timestamp of an existing record and bumps its version.
pub fn replace_record(
    e: &Env,
    owner: &Address,
    record_id: u64,
    mut record: Record,
    payload: Bytes,
    timestamp: u64,
) -> u64 {
    record.version += 1;
    record.payload = payload;
    record.timestamp = timestamp;
    write_record(e, owner, record_id, &record);
    record.version
}
