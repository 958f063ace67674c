#![no_std]

mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Vec};
use storage::*;

use access_control::{AccessControlClient, Role};
use medication_catalog::MedicationCatalogClient;
use patient_registry::PatientRegistryClient;

pub use types::{Error, Prescription, PrescriptionStatus};
use types::DataKey;

#[contract]
pub struct PrescriptionManagement;

#[contractimpl]
impl PrescriptionManagement {
    pub fn init(
        env: Env,
        access_control: Address,
        patient_registry: Address,
        medication_catalog: Address,
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
        env.storage()
            .instance()
            .set(&DataKey::MedicationCatalog, &medication_catalog);
        Ok(())
    }

    /// Create a prescription for a registered patient. Hospital staff or
    /// admin; the prescriber is always the authenticated caller.
    pub fn create_prescription(
        env: Env,
        caller: Address,
        patient: Address,
        medication_id: u64,
        dosage: String,
        frequency: String,
        start_date: u64,
        end_date: u64,
        instructions: String,
        refills_allowed: u32,
    ) -> Result<u64, Error> {
        caller.require_auth();
        Self::require_hospital_staff(&env, &caller)?;

        if dosage.is_empty() || frequency.is_empty() {
            return Err(Error::InvalidInput);
        }
        if end_date != 0 && end_date <= start_date {
            return Err(Error::InvalidDateRange);
        }

        let registry = Self::patient_registry(&env)?;
        if !registry.has_patient(&patient) {
            return Err(Error::PatientNotFound);
        }
        let catalog = Self::medication_catalog(&env)?;
        if !catalog.has_medication(&medication_id) {
            return Err(Error::MedicationNotFound);
        }

        let id = next_prescription_id(&env);
        let now = env.ledger().timestamp();
        let prescription = Prescription {
            id,
            patient: patient.clone(),
            medication_id,
            prescribed_by: caller.clone(),
            dosage,
            frequency,
            start_date,
            end_date,
            instructions,
            refills_allowed,
            refills_used: 0,
            status: PrescriptionStatus::Active,
            created_at: now,
            updated_at: now,
        };
        save_prescription(&env, &prescription);
        add_patient_prescription(&env, &patient, id);

        env.events()
            .publish((symbol_short!("rx_new"), id), (patient, caller));

        Ok(id)
    }

    /// Mark an active prescription as completed. Terminal.
    pub fn complete_prescription(env: Env, caller: Address, id: u64) -> Result<(), Error> {
        Self::transition(&env, caller, id, PrescriptionStatus::Completed)
    }

    /// Discontinue an active prescription. Terminal.
    pub fn discontinue_prescription(env: Env, caller: Address, id: u64) -> Result<(), Error> {
        Self::transition(&env, caller, id, PrescriptionStatus::Discontinued)
    }

    /// Record a refill against an active prescription.
    pub fn record_refill(env: Env, caller: Address, id: u64) -> Result<u32, Error> {
        caller.require_auth();
        Self::require_hospital_staff(&env, &caller)?;

        let mut prescription =
            load_prescription(&env, id).ok_or(Error::PrescriptionNotFound)?;

        if prescription.status != PrescriptionStatus::Active {
            return Err(Error::InvalidStatusTransition);
        }
        if prescription.refills_used >= prescription.refills_allowed {
            return Err(Error::RefillsExhausted);
        }

        prescription.refills_used += 1;
        prescription.updated_at = env.ledger().timestamp();
        save_prescription(&env, &prescription);

        env.events()
            .publish((symbol_short!("rx_refill"), id), prescription.refills_used);

        Ok(prescription.refills_used)
    }

    /// Read one prescription. The owning patient, hospital staff, or admin.
    pub fn get_prescription(
        env: Env,
        caller: Address,
        id: u64,
    ) -> Result<Prescription, Error> {
        caller.require_auth();

        let prescription = load_prescription(&env, id).ok_or(Error::PrescriptionNotFound)?;
        if caller != prescription.patient {
            Self::require_hospital_staff(&env, &caller)?;
        }
        Ok(prescription)
    }

    /// All prescriptions for a patient. The owning patient, hospital
    /// staff, or admin.
    pub fn get_patient_prescriptions(
        env: Env,
        caller: Address,
        patient: Address,
    ) -> Result<Vec<Prescription>, Error> {
        caller.require_auth();
        if caller != patient {
            Self::require_hospital_staff(&env, &caller)?;
        }

        let ids = patient_prescription_ids(&env, &patient);
        let mut prescriptions = Vec::new(&env);
        for id in ids.iter() {
            if let Some(prescription) = load_prescription(&env, id) {
                prescriptions.push_back(prescription);
            }
        }
        Ok(prescriptions)
    }

    /// Dashboard count of active prescriptions for a patient.
    pub fn active_prescription_count(
        env: Env,
        caller: Address,
        patient: Address,
    ) -> Result<u32, Error> {
        let prescriptions = Self::get_patient_prescriptions(env.clone(), caller, patient)?;
        let mut count = 0;
        for prescription in prescriptions.iter() {
            if prescription.status == PrescriptionStatus::Active {
                count += 1;
            }
        }
        Ok(count)
    }

    fn transition(
        env: &Env,
        caller: Address,
        id: u64,
        target: PrescriptionStatus,
    ) -> Result<(), Error> {
        caller.require_auth();
        Self::require_hospital_staff(env, &caller)?;

        let mut prescription =
            load_prescription(env, id).ok_or(Error::PrescriptionNotFound)?;

        if !prescription.status.can_transition_to(target) {
            return Err(Error::InvalidStatusTransition);
        }

        prescription.status = target;
        prescription.updated_at = env.ledger().timestamp();
        save_prescription(env, &prescription);

        let topic = match target {
            PrescriptionStatus::Completed => symbol_short!("rx_done"),
            _ => symbol_short!("rx_disc"),
        };
        env.events().publish((topic, id), caller);

        Ok(())
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

    fn medication_catalog(env: &Env) -> Result<MedicationCatalogClient<'static>, Error> {
        let addr: Address = env
            .storage()
            .instance()
            .get(&DataKey::MedicationCatalog)
            .ok_or(Error::NotInitialized)?;
        Ok(MedicationCatalogClient::new(env, &addr))
    }
}
