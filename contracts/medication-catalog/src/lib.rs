#![no_std]

mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Vec};
use storage::*;

use access_control::{AccessControlClient, Role};

pub use types::{Error, Medication};
use types::DataKey;

#[contract]
pub struct MedicationCatalog;

#[contractimpl]
impl MedicationCatalog {
    pub fn init(env: Env, access_control: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::AccessControl) {
            return Err(Error::AlreadyInitialized);
        }
        env.storage()
            .instance()
            .set(&DataKey::AccessControl, &access_control);
        Ok(())
    }

    /// Add a medication to the catalog. Hospital staff, pharmacy staff,
    /// or admin.
    pub fn add_medication(
        env: Env,
        caller: Address,
        name: String,
        description: String,
        dosage_form: String,
        manufacturer: String,
    ) -> Result<u64, Error> {
        caller.require_auth();
        Self::require_catalog_staff(&env, &caller)?;

        if name.is_empty() {
            return Err(Error::InvalidInput);
        }

        let id = next_medication_id(&env);
        let now = env.ledger().timestamp();
        let medication = Medication {
            id,
            name,
            description,
            dosage_form,
            manufacturer,
            created_at: now,
            updated_at: now,
        };
        save_medication(&env, &medication);
        add_to_catalog_list(&env, id);

        env.events().publish((symbol_short!("med_add"), id), caller);

        Ok(id)
    }

    /// Update a catalog entry. Same write policy as `add_medication`.
    pub fn update_medication(
        env: Env,
        caller: Address,
        id: u64,
        name: String,
        description: String,
        dosage_form: String,
        manufacturer: String,
    ) -> Result<(), Error> {
        caller.require_auth();
        Self::require_catalog_staff(&env, &caller)?;

        if name.is_empty() {
            return Err(Error::InvalidInput);
        }

        let mut medication = load_medication(&env, id).ok_or(Error::MedicationNotFound)?;
        medication.name = name;
        medication.description = description;
        medication.dosage_form = dosage_form;
        medication.manufacturer = manufacturer;
        medication.updated_at = env.ledger().timestamp();
        save_medication(&env, &medication);

        env.events().publish((symbol_short!("med_upd"), id), caller);

        Ok(())
    }

    /// Read a catalog entry. Any authenticated principal.
    pub fn get_medication(env: Env, caller: Address, id: u64) -> Result<Medication, Error> {
        caller.require_auth();
        load_medication(&env, id).ok_or(Error::MedicationNotFound)
    }

    /// All catalog ids, for list views.
    pub fn list_medications(env: Env, caller: Address) -> Vec<u64> {
        caller.require_auth();
        catalog_ids(&env)
    }

    /// Existence check used by prescriptions, inventory, and orders.
    /// Side-effect-free.
    pub fn has_medication(env: Env, id: u64) -> bool {
        load_medication(&env, id).is_some()
    }

    fn require_catalog_staff(env: &Env, caller: &Address) -> Result<(), Error> {
        let addr: Address = env
            .storage()
            .instance()
            .get(&DataKey::AccessControl)
            .ok_or(Error::NotInitialized)?;
        let ac = AccessControlClient::new(env, &addr);

        let mut allowed = Vec::new(env);
        allowed.push_back(Role::HospitalStaff);
        allowed.push_back(Role::PharmacyStaff);
        allowed.push_back(Role::Admin);
        if !ac.has_any_role(caller, &allowed) {
            return Err(Error::NotAuthorized);
        }
        Ok(())
    }
}
