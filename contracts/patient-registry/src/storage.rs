use soroban_sdk::{Address, Env, Vec};

use crate::types::{DataKey, PatientRecord};

pub fn save_patient(env: &Env, record: &PatientRecord) {
    env.storage()
        .persistent()
        .set(&DataKey::Patient(record.account.clone()), record);
}

pub fn load_patient(env: &Env, account: &Address) -> Option<PatientRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Patient(account.clone()))
}

pub fn add_to_patient_list(env: &Env, account: &Address) {
    let mut all: Vec<Address> = env
        .storage()
        .persistent()
        .get(&DataKey::AllPatients)
        .unwrap_or(Vec::new(env));
    all.push_back(account.clone());
    env.storage().persistent().set(&DataKey::AllPatients, &all);
}

pub fn patient_list_len(env: &Env) -> u32 {
    let all: Vec<Address> = env
        .storage()
        .persistent()
        .get(&DataKey::AllPatients)
        .unwrap_or(Vec::new(env));
    all.len()
}
