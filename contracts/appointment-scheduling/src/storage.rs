use soroban_sdk::{Address, Env, Vec};

use crate::types::{Appointment, DataKey};

pub fn next_appointment_id(env: &Env) -> u64 {
    let id: u64 = env
        .storage()
        .instance()
        .get(&DataKey::AppointmentCounter)
        .unwrap_or(0);
    let next = id + 1;
    env.storage()
        .instance()
        .set(&DataKey::AppointmentCounter, &next);
    next
}

pub fn save_appointment(env: &Env, appointment: &Appointment) {
    env.storage()
        .persistent()
        .set(&DataKey::Appointment(appointment.id), appointment);
}

pub fn load_appointment(env: &Env, id: u64) -> Option<Appointment> {
    env.storage().persistent().get(&DataKey::Appointment(id))
}

pub fn add_patient_appointment(env: &Env, patient: &Address, id: u64) {
    let mut ids: Vec<u64> = env
        .storage()
        .persistent()
        .get(&DataKey::PatientAppointments(patient.clone()))
        .unwrap_or(Vec::new(env));
    ids.push_back(id);
    env.storage()
        .persistent()
        .set(&DataKey::PatientAppointments(patient.clone()), &ids);
}

pub fn add_staff_appointment(env: &Env, staff: &Address, id: u64) {
    let mut ids: Vec<u64> = env
        .storage()
        .persistent()
        .get(&DataKey::StaffAppointments(staff.clone()))
        .unwrap_or(Vec::new(env));
    ids.push_back(id);
    env.storage()
        .persistent()
        .set(&DataKey::StaffAppointments(staff.clone()), &ids);
}

pub fn patient_appointment_ids(env: &Env, patient: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::PatientAppointments(patient.clone()))
        .unwrap_or(Vec::new(env))
}

pub fn staff_appointment_ids(env: &Env, staff: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::StaffAppointments(staff.clone()))
        .unwrap_or(Vec::new(env))
}
