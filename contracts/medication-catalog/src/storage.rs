use soroban_sdk::{Env, Vec};

use crate::types::{DataKey, Medication};

pub fn next_medication_id(env: &Env) -> u64 {
    let id: u64 = env
        .storage()
        .instance()
        .get(&DataKey::MedicationCounter)
        .unwrap_or(0);
    let next = id + 1;
    env.storage()
        .instance()
        .set(&DataKey::MedicationCounter, &next);
    next
}

pub fn save_medication(env: &Env, medication: &Medication) {
    env.storage()
        .persistent()
        .set(&DataKey::Medication(medication.id), medication);
}

pub fn load_medication(env: &Env, id: u64) -> Option<Medication> {
    env.storage().persistent().get(&DataKey::Medication(id))
}

pub fn add_to_catalog_list(env: &Env, id: u64) {
    let mut ids: Vec<u64> = env
        .storage()
        .persistent()
        .get(&DataKey::AllMedications)
        .unwrap_or(Vec::new(env));
    ids.push_back(id);
    env.storage().persistent().set(&DataKey::AllMedications, &ids);
}

pub fn catalog_ids(env: &Env) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::AllMedications)
        .unwrap_or(Vec::new(env))
}
