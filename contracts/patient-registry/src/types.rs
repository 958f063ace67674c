use soroban_sdk::{contracterror, contracttype, Address, String, Vec};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    AlreadyRegistered = 4,
    PatientNotFound = 5,
    InvalidBloodType = 6,
    InvalidPhone = 7,
    InvalidInput = 8,
}

/// Clinical subject record, linked 1:1 to an account.
///
/// Created empty right after signup; clinical fields are filled in by
/// hospital staff. `date_of_birth` of 0 means unknown, and an empty
/// `blood_type` means not yet recorded.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientRecord {
    pub account: Address,
    pub date_of_birth: u64,
    pub blood_type: String,
    pub allergies: Vec<String>,
    pub emergency_contact: String,
    pub emergency_phone: String,
    pub registered_at: u64,
    pub updated_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Address of the access-control contract, set at init.
    AccessControl,
    /// account -> PatientRecord
    Patient(Address),
    /// Vec<Address> of all registered patients.
    AllPatients,
}
