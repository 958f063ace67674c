use soroban_sdk::{contracterror, contracttype, Address, String};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    PrescriptionNotFound = 4,
    PatientNotFound = 5,
    MedicationNotFound = 6,
    InvalidInput = 7,
    InvalidDateRange = 8,
    InvalidStatusTransition = 9,
    RefillsExhausted = 10,
}

/// Lifecycle status of a prescription. Completed and Discontinued are
/// terminal.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PrescriptionStatus {
    Active,
    Completed,
    Discontinued,
}

impl PrescriptionStatus {
    /// Transition legality check: a prescription only ever leaves Active.
    pub fn can_transition_to(self, target: PrescriptionStatus) -> bool {
        matches!(
            (self, target),
            (PrescriptionStatus::Active, PrescriptionStatus::Completed)
                | (PrescriptionStatus::Active, PrescriptionStatus::Discontinued)
        )
    }
}

/// A clinical directive tying a patient to a catalog medication.
///
/// `end_date` of 0 means open-ended.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Prescription {
    pub id: u64,
    pub patient: Address,
    pub medication_id: u64,
    pub prescribed_by: Address,
    pub dosage: String,
    pub frequency: String,
    pub start_date: u64,
    pub end_date: u64,
    pub instructions: String,
    pub refills_allowed: u32,
    pub refills_used: u32,
    pub status: PrescriptionStatus,
    pub created_at: u64,
    pub updated_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Address of the access-control contract, set at init.
    AccessControl,
    /// Address of the patient-registry contract, set at init.
    PatientRegistry,
    /// Address of the medication-catalog contract, set at init.
    MedicationCatalog,
    /// Auto-increment counter for prescription ids.
    PrescriptionCounter,
    /// prescription_id -> Prescription
    Prescription(u64),
    /// patient -> Vec<u64> (prescription ids)
    PatientPrescriptions(Address),
}
