use soroban_sdk::{contracterror, contracttype, Address, String};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    AppointmentNotFound = 4,
    PatientNotFound = 5,
    InvalidInput = 6,
    InvalidAppointmentDate = 7,
    InvalidStatusTransition = 8,
}

/// Lifecycle status of an appointment. Everything after Scheduled is
/// terminal; no regression once advanced.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    pub fn can_transition_to(self, target: AppointmentStatus) -> bool {
        matches!(
            (self, target),
            (AppointmentStatus::Scheduled, AppointmentStatus::Completed)
                | (AppointmentStatus::Scheduled, AppointmentStatus::Cancelled)
                | (AppointmentStatus::Scheduled, AppointmentStatus::NoShow)
        )
    }
}

/// A scheduled clinical encounter between a patient and a staff member.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Appointment {
    pub id: u64,
    pub patient: Address,
    pub staff: Address,
    pub scheduled_at: u64,
    pub department: String,
    pub reason: String,
    pub notes: String,
    pub cancellation_reason: String,
    pub status: AppointmentStatus,
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
    /// Auto-increment counter for appointment ids.
    AppointmentCounter,
    /// appointment_id -> Appointment
    Appointment(u64),
    /// patient -> Vec<u64> (appointment ids)
    PatientAppointments(Address),
    /// staff -> Vec<u64> (appointment ids)
    StaffAppointments(Address),
}
