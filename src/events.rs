//! Contract events. The first topic is always the operation name.

use soroban_sdk::{symbol_short, Address, Env};

pub fn initialized(e: &Env, admin: &Address) {
    let topics = (symbol_short!("init"), admin.clone());
    e.events().publish(topics, e.ledger().timestamp());
}

pub fn paused_set(e: &Env, admin: &Address, paused: bool, timestamp: u64) {
    let topics = (symbol_short!("paused"), admin.clone());
    e.events().publish(topics, (paused, timestamp));
}

pub fn admin_transferred(e: &Env, previous: &Address, new_admin: &Address, timestamp: u64) {
    let topics = (symbol_short!("admin"), previous.clone());
    e.events().publish(topics, (new_admin.clone(), timestamp));
}

pub fn record_stored(e: &Env, owner: &Address, record_id: u64, timestamp: u64) {
    let topics = (symbol_short!("store"), owner.clone(), record_id);
    e.events().publish(topics, (1u64, timestamp));
}

pub fn record_updated(e: &Env, owner: &Address, record_id: u64, version: u64, timestamp: u64) {
    let topics = (symbol_short!("update"), owner.clone(), record_id);
    e.events().publish(topics, (version, timestamp));
}

pub fn record_read(e: &Env, owner: &Address, record_id: u64, accessor: &Address, timestamp: u64) {
    let topics = (symbol_short!("read"), owner.clone(), record_id);
    e.events().publish(topics, (accessor.clone(), timestamp));
}
