use soroban_sdk::{Address, Env, Vec};

use crate::types::{DataKey, LabReport};

pub fn next_report_id(env: &Env) -> u64 {
    let id: u64 = env
        .storage()
        .instance()
        .get(&DataKey::ReportCounter)
        .unwrap_or(0);
    let next = id + 1;
    env.storage().instance().set(&DataKey::ReportCounter, &next);
    next
}

pub fn save_report(env: &Env, report: &LabReport) {
    env.storage()
        .persistent()
        .set(&DataKey::Report(report.id), report);
}

pub fn load_report(env: &Env, id: u64) -> Option<LabReport> {
    env.storage().persistent().get(&DataKey::Report(id))
}

pub fn add_patient_report(env: &Env, patient: &Address, id: u64) {
    let mut ids: Vec<u64> = env
        .storage()
        .persistent()
        .get(&DataKey::PatientReports(patient.clone()))
        .unwrap_or(Vec::new(env));
    ids.push_back(id);
    env.storage()
        .persistent()
        .set(&DataKey::PatientReports(patient.clone()), &ids);
}

pub fn patient_report_ids(env: &Env, patient: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::PatientReports(patient.clone()))
        .unwrap_or(Vec::new(env))
}

pub fn pending_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::PendingCount)
        .unwrap_or(0)
}

pub fn bump_pending_count(env: &Env, delta: i32) {
    let current = pending_count(env) as i32 + delta;
    let next = if current < 0 { 0 } else { current as u32 };
    env.storage().persistent().set(&DataKey::PendingCount, &next);
}
