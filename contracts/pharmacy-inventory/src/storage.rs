use soroban_sdk::{Env, Vec};

use crate::types::{DataKey, HospitalOrder, InventoryItem};

// -----------------------------------------------------------------------
// Inventory items
// -----------------------------------------------------------------------

pub fn save_item(env: &Env, item: &InventoryItem) {
    env.storage()
        .persistent()
        .set(&DataKey::Item(item.medication_id), item);
}

pub fn load_item(env: &Env, medication_id: u64) -> Option<InventoryItem> {
    env.storage().persistent().get(&DataKey::Item(medication_id))
}

pub fn add_to_item_list(env: &Env, medication_id: u64) {
    let mut ids: Vec<u64> = env
        .storage()
        .persistent()
        .get(&DataKey::AllItems)
        .unwrap_or(Vec::new(env));
    ids.push_back(medication_id);
    env.storage().persistent().set(&DataKey::AllItems, &ids);
}

pub fn item_ids(env: &Env) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::AllItems)
        .unwrap_or(Vec::new(env))
}

// -----------------------------------------------------------------------
// Orders
// -----------------------------------------------------------------------

pub fn next_order_id(env: &Env) -> u64 {
    let id: u64 = env
        .storage()
        .instance()
        .get(&DataKey::OrderCounter)
        .unwrap_or(0);
    let next = id + 1;
    env.storage().instance().set(&DataKey::OrderCounter, &next);
    next
}

pub fn save_order(env: &Env, order: &HospitalOrder) {
    env.storage()
        .persistent()
        .set(&DataKey::Order(order.id), order);
}

pub fn load_order(env: &Env, id: u64) -> Option<HospitalOrder> {
    env.storage().persistent().get(&DataKey::Order(id))
}

pub fn pending_orders(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::PendingOrders)
        .unwrap_or(0)
}

pub fn bump_pending_orders(env: &Env, delta: i32) {
    let current = pending_orders(env) as i32 + delta;
    let next = if current < 0 { 0 } else { current as u32 };
    env.storage()
        .persistent()
        .set(&DataKey::PendingOrders, &next);
}
