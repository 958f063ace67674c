use soroban_sdk::{contracterror, contracttype, Address, String};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    ReportNotFound = 4,
    PatientNotFound = 5,
    InvalidInput = 6,
    InvalidStatusTransition = 7,
}

/// Lifecycle status of a lab report. Strictly monotonic:
/// Pending -> Completed -> Reviewed, never backwards.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ReportStatus {
    Pending,
    Completed,
    Reviewed,
}

impl ReportStatus {
    pub fn can_transition_to(self, target: ReportStatus) -> bool {
        matches!(
            (self, target),
            (ReportStatus::Pending, ReportStatus::Completed)
                | (ReportStatus::Completed, ReportStatus::Reviewed)
        )
    }
}

/// A diagnostic test record. `results` stays empty until the report is
/// completed; `reviewed_by` is set only on review.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LabReport {
    pub id: u64,
    pub patient: Address,
    pub test_name: String,
    pub test_date: u64,
    pub results: String,
    pub ordered_by: Address,
    pub reviewed_by: Option<Address>,
    pub status: ReportStatus,
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
    /// Auto-increment counter for report ids.
    ReportCounter,
    /// report_id -> LabReport
    Report(u64),
    /// patient -> Vec<u64> (report ids)
    PatientReports(Address),
    /// Count of reports still pending, for dashboards.
    PendingCount,
}
