#![no_std]

mod storage;
mod types;
mod validation;


use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Vec};
use storage::*;
use validation::*;

use access_control::{AccessControlClient, Role};

pub use types::{Error, PatientRecord};
use types::DataKey;

#[contract]
pub struct PatientRegistry;

#[contractimpl]
impl PatientRegistry {
    /// Stores the address of the access-control contract consulted on
    /// every gated operation.
    pub fn init(env: Env, access_control: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::AccessControl) {
            return Err(Error::AlreadyInitialized);
        }
        env.storage()
            .instance()
            .set(&DataKey::AccessControl, &access_control);
        Ok(())
    }

    /// Create the caller's own patient record, empty of clinical data.
    ///
    /// This is the explicit follow-up step to signup: the account must
    /// already hold the patient role. Clinical fields are filled in later
    /// by hospital staff through `update_medical_details`.
    pub fn register_patient(env: Env, account: Address) -> Result<(), Error> {
        account.require_auth();

        let ac = Self::access_control(&env)?;
        if !ac.has_role(&account, &Role::Patient) {
            return Err(Error::NotAuthorized);
        }

        if load_patient(&env, &account).is_some() {
            return Err(Error::AlreadyRegistered);
        }

        let now = env.ledger().timestamp();
        let record = PatientRecord {
            account: account.clone(),
            date_of_birth: 0,
            blood_type: String::from_str(&env, ""),
            allergies: Vec::new(&env),
            emergency_contact: String::from_str(&env, ""),
            emergency_phone: String::from_str(&env, ""),
            registered_at: now,
            updated_at: now,
        };
        save_patient(&env, &record);
        add_to_patient_list(&env, &account);

        env.events()
            .publish((symbol_short!("pat_reg"), account), symbol_short!("success"));

        Ok(())
    }

    /// Update a patient's clinical details. Hospital staff or admin only.
    pub fn update_medical_details(
        env: Env,
        caller: Address,
        account: Address,
        date_of_birth: u64,
        blood_type: String,
        allergies: Vec<String>,
        emergency_contact: String,
        emergency_phone: String,
    ) -> Result<(), Error> {
        caller.require_auth();
        Self::require_hospital_staff(&env, &caller)?;

        validate_blood_type(&blood_type)?;
        validate_phone(&emergency_phone)?;
        validate_contact(&emergency_contact)?;

        let mut record = load_patient(&env, &account).ok_or(Error::PatientNotFound)?;
        record.date_of_birth = date_of_birth;
        record.blood_type = blood_type;
        record.allergies = allergies;
        record.emergency_contact = emergency_contact;
        record.emergency_phone = emergency_phone;
        record.updated_at = env.ledger().timestamp();
        save_patient(&env, &record);

        env.events()
            .publish((symbol_short!("pat_upd"), account), caller);

        Ok(())
    }

    /// Read a patient record. The owning patient, hospital staff, or admin.
    pub fn get_patient(
        env: Env,
        caller: Address,
        account: Address,
    ) -> Result<PatientRecord, Error> {
        caller.require_auth();

        if caller != account {
            Self::require_hospital_staff(&env, &caller)?;
        }

        load_patient(&env, &account).ok_or(Error::PatientNotFound)
    }

    /// Existence check used by the clinical contracts to keep referential
    /// integrity. Side-effect-free.
    pub fn has_patient(env: Env, account: Address) -> bool {
        load_patient(&env, &account).is_some()
    }

    /// Number of registered patients, for dashboard summaries.
    pub fn patient_count(env: Env, caller: Address) -> Result<u32, Error> {
        caller.require_auth();
        Self::require_hospital_staff(&env, &caller)?;
        Ok(patient_list_len(&env))
    }

    fn access_control(env: &Env) -> Result<AccessControlClient<'static>, Error> {
        let addr: Address = env
            .storage()
            .instance()
            .get(&DataKey::AccessControl)
            .ok_or(Error::NotInitialized)?;
        Ok(AccessControlClient::new(env, &addr))
    }

    fn require_hospital_staff(env: &Env, caller: &Address) -> Result<(), Error> {
        let ac = Self::access_control(env)?;
        let mut allowed = Vec::new(env);
        allowed.push_back(Role::HospitalStaff);
        allowed.push_back(Role::Admin);
        if !ac.has_any_role(caller, &allowed) {
            return Err(Error::NotAuthorized);
        }
        Ok(())
    }
}
