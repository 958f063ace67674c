use soroban_sdk::{Address, Env, Vec};

use crate::types::{DataKey, Prescription};

pub fn next_prescription_id(env: &Env) -> u64 {
    let id: u64 = env
        .storage()
        .instance()
        .get(&DataKey::PrescriptionCounter)
        .unwrap_or(0);
    let next = id + 1;
    env.storage()
        .instance()
        .set(&DataKey::PrescriptionCounter, &next);
    next
}

pub fn save_prescription(env: &Env, prescription: &Prescription) {
    env.storage()
        .persistent()
        .set(&DataKey::Prescription(prescription.id), prescription);
}

pub fn load_prescription(env: &Env, id: u64) -> Option<Prescription> {
    env.storage().persistent().get(&DataKey::Prescription(id))
}

pub fn add_patient_prescription(env: &Env, patient: &Address, id: u64) {
    let mut ids: Vec<u64> = env
        .storage()
        .persistent()
        .get(&DataKey::PatientPrescriptions(patient.clone()))
        .unwrap_or(Vec::new(env));
    ids.push_back(id);
    env.storage()
        .persistent()
        .set(&DataKey::PatientPrescriptions(patient.clone()), &ids);
}

pub fn patient_prescription_ids(env: &Env, patient: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::PatientPrescriptions(patient.clone()))
        .unwrap_or(Vec::new(env))
}
