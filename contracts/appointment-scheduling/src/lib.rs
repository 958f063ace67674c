#![no_std]

mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Vec};
use storage::*;

use access_control::{AccessControlClient, Role};
use patient_registry::PatientRegistryClient;

pub use types::{Appointment, AppointmentStatus, Error};
use types::DataKey;

#[contract]
pub struct AppointmentScheduling;

#[contractimpl]
impl AppointmentScheduling {
    pub fn init(
        env: Env,
        access_control: Address,
        patient_registry: Address,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::AccessControl) {
            return Err(Error::AlreadyInitialized);
        }
        env.storage()
            .instance()
            .set(&DataKey::AccessControl, &access_control);
        env.storage()
            .instance()
            .set(&DataKey::PatientRegistry, &patient_registry);
        Ok(())
    }

    /// Book an encounter. Hospital staff and admins may schedule for any
    /// registered patient; a patient may request one for themselves.
    pub fn schedule_appointment(
        env: Env,
        caller: Address,
        patient: Address,
        staff: Address,
        scheduled_at: u64,
        department: String,
        reason: String,
    ) -> Result<u64, Error> {
        caller.require_auth();

        if caller != patient {
            Self::require_hospital_staff(&env, &caller)?;
        }

        if department.is_empty() {
            return Err(Error::InvalidInput);
        }
        if scheduled_at <= env.ledger().timestamp() {
            return Err(Error::InvalidAppointmentDate);
        }

        let registry = Self::patient_registry(&env)?;
        if !registry.has_patient(&patient) {
            return Err(Error::PatientNotFound);
        }

        let id = next_appointment_id(&env);
        let now = env.ledger().timestamp();
        let appointment = Appointment {
            id,
            patient: patient.clone(),
            staff: staff.clone(),
            scheduled_at,
            department,
            reason,
            notes: String::from_str(&env, ""),
            cancellation_reason: String::from_str(&env, ""),
            status: AppointmentStatus::Scheduled,
            created_at: now,
            updated_at: now,
        };
        save_appointment(&env, &appointment);
        add_patient_appointment(&env, &patient, id);
        add_staff_appointment(&env, &staff, id);

        env.events()
            .publish((symbol_short!("appt_new"), id), (patient, staff));

        Ok(id)
    }

    /// Mark a scheduled appointment as completed, recording visit notes.
    pub fn complete_appointment(
        env: Env,
        caller: Address,
        id: u64,
        notes: String,
    ) -> Result<(), Error> {
        caller.require_auth();
        Self::require_hospital_staff(&env, &caller)?;

        let mut appointment = Self::load_for_transition(&env, id, AppointmentStatus::Completed)?;
        appointment.status = AppointmentStatus::Completed;
        appointment.notes = notes;
        appointment.updated_at = env.ledger().timestamp();
        save_appointment(&env, &appointment);

        env.events().publish((symbol_short!("appt_cmp"), id), caller);
        Ok(())
    }

    /// Cancel a scheduled appointment with a reason.
    pub fn cancel_appointment(
        env: Env,
        caller: Address,
        id: u64,
        reason: String,
    ) -> Result<(), Error> {
        caller.require_auth();
        Self::require_hospital_staff(&env, &caller)?;

        let mut appointment = Self::load_for_transition(&env, id, AppointmentStatus::Cancelled)?;
        appointment.status = AppointmentStatus::Cancelled;
        appointment.cancellation_reason = reason;
        appointment.updated_at = env.ledger().timestamp();
        save_appointment(&env, &appointment);

        env.events().publish((symbol_short!("appt_can"), id), caller);
        Ok(())
    }

    /// Record that the patient did not show up.
    pub fn mark_no_show(env: Env, caller: Address, id: u64) -> Result<(), Error> {
        caller.require_auth();
        Self::require_hospital_staff(&env, &caller)?;

        let mut appointment = Self::load_for_transition(&env, id, AppointmentStatus::NoShow)?;
        appointment.status = AppointmentStatus::NoShow;
        appointment.updated_at = env.ledger().timestamp();
        save_appointment(&env, &appointment);

        env.events().publish((symbol_short!("appt_ns"), id), caller);
        Ok(())
    }

    /// Move a still-scheduled appointment to a new future time.
    pub fn reschedule_appointment(
        env: Env,
        caller: Address,
        id: u64,
        scheduled_at: u64,
    ) -> Result<(), Error> {
        caller.require_auth();
        Self::require_hospital_staff(&env, &caller)?;

        if scheduled_at <= env.ledger().timestamp() {
            return Err(Error::InvalidAppointmentDate);
        }

        let mut appointment = load_appointment(&env, id).ok_or(Error::AppointmentNotFound)?;
        if appointment.status != AppointmentStatus::Scheduled {
            return Err(Error::InvalidStatusTransition);
        }
        appointment.scheduled_at = scheduled_at;
        appointment.updated_at = env.ledger().timestamp();
        save_appointment(&env, &appointment);

        env.events()
            .publish((symbol_short!("appt_rs"), id), scheduled_at);
        Ok(())
    }

    /// Read one appointment. The owning patient, hospital staff, or admin.
    pub fn get_appointment(env: Env, caller: Address, id: u64) -> Result<Appointment, Error> {
        caller.require_auth();

        let appointment = load_appointment(&env, id).ok_or(Error::AppointmentNotFound)?;
        if caller != appointment.patient {
            Self::require_hospital_staff(&env, &caller)?;
        }
        Ok(appointment)
    }

    /// All appointments for a patient. The owning patient, hospital
    /// staff, or admin.
    pub fn get_patient_appointments(
        env: Env,
        caller: Address,
        patient: Address,
    ) -> Result<Vec<Appointment>, Error> {
        caller.require_auth();
        if caller != patient {
            Self::require_hospital_staff(&env, &caller)?;
        }
        Ok(Self::collect(&env, patient_appointment_ids(&env, &patient)))
    }

    /// All appointments assigned to a staff member. Hospital staff or
    /// admin.
    pub fn get_staff_appointments(
        env: Env,
        caller: Address,
        staff: Address,
    ) -> Result<Vec<Appointment>, Error> {
        caller.require_auth();
        Self::require_hospital_staff(&env, &caller)?;
        Ok(Self::collect(&env, staff_appointment_ids(&env, &staff)))
    }

    /// Dashboard count of still-scheduled appointments for a patient.
    pub fn scheduled_appointment_count(
        env: Env,
        caller: Address,
        patient: Address,
    ) -> Result<u32, Error> {
        let appointments = Self::get_patient_appointments(env.clone(), caller, patient)?;
        let mut count = 0;
        for appointment in appointments.iter() {
            if appointment.status == AppointmentStatus::Scheduled {
                count += 1;
            }
        }
        Ok(count)
    }

    fn collect(env: &Env, ids: Vec<u64>) -> Vec<Appointment> {
        let mut appointments = Vec::new(env);
        for id in ids.iter() {
            if let Some(appointment) = load_appointment(env, id) {
                appointments.push_back(appointment);
            }
        }
        appointments
    }

    fn load_for_transition(
        env: &Env,
        id: u64,
        target: AppointmentStatus,
    ) -> Result<Appointment, Error> {
        let appointment = load_appointment(env, id).ok_or(Error::AppointmentNotFound)?;
        if !appointment.status.can_transition_to(target) {
            return Err(Error::InvalidStatusTransition);
        }
        Ok(appointment)
    }

    fn require_hospital_staff(env: &Env, caller: &Address) -> Result<(), Error> {
        let addr: Address = env
            .storage()
            .instance()
            .get(&DataKey::AccessControl)
            .ok_or(Error::NotInitialized)?;
        let ac = AccessControlClient::new(env, &addr);

        let mut allowed = Vec::new(env);
        allowed.push_back(Role::HospitalStaff);
        allowed.push_back(Role::Admin);
        if !ac.has_any_role(caller, &allowed) {
            return Err(Error::NotAuthorized);
        }
        Ok(())
    }

    fn patient_registry(env: &Env) -> Result<PatientRegistryClient<'static>, Error> {
        let addr: Address = env
            .storage()
            .instance()
            .get(&DataKey::PatientRegistry)
            .ok_or(Error::NotInitialized)?;
        Ok(PatientRegistryClient::new(env, &addr))
    }
}
