use soroban_sdk::{contracterror, contracttype, String};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    MedicationNotFound = 4,
    InvalidInput = 5,
}

/// Catalog entry referenced by prescriptions, inventory, and orders.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Medication {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub dosage_form: String,
    pub manufacturer: String,
    pub created_at: u64,
    pub updated_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Address of the access-control contract, set at init.
    AccessControl,
    /// Auto-increment counter for medication ids.
    MedicationCounter,
    /// medication_id -> Medication
    Medication(u64),
    /// Vec<u64> of all catalog ids.
    AllMedications,
}
