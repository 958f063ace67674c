#![no_std]

mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Vec};
use storage::*;

use access_control::{AccessControlClient, Role};
use patient_registry::PatientRegistryClient;

pub use types::{Error, LabReport, ReportStatus};
use types::DataKey;

#[contract]
pub struct LabReports;

#[contractimpl]
impl LabReports {
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

    /// Order a lab test for a registered patient. Hospital staff or admin;
    /// the report starts Pending with no results.
    pub fn order_lab_report(
        env: Env,
        caller: Address,
        patient: Address,
        test_name: String,
        test_date: u64,
    ) -> Result<u64, Error> {
        caller.require_auth();
        Self::require_hospital_staff(&env, &caller)?;

        if test_name.is_empty() {
            return Err(Error::InvalidInput);
        }

        let registry = Self::patient_registry(&env)?;
        if !registry.has_patient(&patient) {
            return Err(Error::PatientNotFound);
        }

        let id = next_report_id(&env);
        let now = env.ledger().timestamp();
        let report = LabReport {
            id,
            patient: patient.clone(),
            test_name,
            test_date,
            results: String::from_str(&env, ""),
            ordered_by: caller.clone(),
            reviewed_by: None,
            status: ReportStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        save_report(&env, &report);
        add_patient_report(&env, &patient, id);
        bump_pending_count(&env, 1);

        env.events()
            .publish((symbol_short!("lab_new"), id), (patient, caller));

        Ok(id)
    }

    /// Attach results to a pending report, advancing it to Completed.
    pub fn complete_lab_report(
        env: Env,
        caller: Address,
        id: u64,
        results: String,
    ) -> Result<(), Error> {
        caller.require_auth();
        Self::require_hospital_staff(&env, &caller)?;

        if results.is_empty() {
            return Err(Error::InvalidInput);
        }

        let mut report = load_report(&env, id).ok_or(Error::ReportNotFound)?;
        if !report.status.can_transition_to(ReportStatus::Completed) {
            return Err(Error::InvalidStatusTransition);
        }

        report.status = ReportStatus::Completed;
        report.results = results;
        report.updated_at = env.ledger().timestamp();
        save_report(&env, &report);
        bump_pending_count(&env, -1);

        env.events().publish((symbol_short!("lab_cmp"), id), caller);
        Ok(())
    }

    /// Sign off a completed report, advancing it to Reviewed. Terminal.
    pub fn review_lab_report(env: Env, caller: Address, id: u64) -> Result<(), Error> {
        caller.require_auth();
        Self::require_hospital_staff(&env, &caller)?;

        let mut report = load_report(&env, id).ok_or(Error::ReportNotFound)?;
        if !report.status.can_transition_to(ReportStatus::Reviewed) {
            return Err(Error::InvalidStatusTransition);
        }

        report.status = ReportStatus::Reviewed;
        report.reviewed_by = Some(caller.clone());
        report.updated_at = env.ledger().timestamp();
        save_report(&env, &report);

        env.events().publish((symbol_short!("lab_rev"), id), caller);
        Ok(())
    }

    /// Read one report. The owning patient, hospital staff, or admin.
    pub fn get_lab_report(env: Env, caller: Address, id: u64) -> Result<LabReport, Error> {
        caller.require_auth();

        let report = load_report(&env, id).ok_or(Error::ReportNotFound)?;
        if caller != report.patient {
            Self::require_hospital_staff(&env, &caller)?;
        }
        Ok(report)
    }

    /// All reports for a patient. The owning patient, hospital staff, or
    /// admin.
    pub fn get_patient_lab_reports(
        env: Env,
        caller: Address,
        patient: Address,
    ) -> Result<Vec<LabReport>, Error> {
        caller.require_auth();
        if caller != patient {
            Self::require_hospital_staff(&env, &caller)?;
        }

        let ids = patient_report_ids(&env, &patient);
        let mut reports = Vec::new(&env);
        for id in ids.iter() {
            if let Some(report) = load_report(&env, id) {
                reports.push_back(report);
            }
        }
        Ok(reports)
    }

    /// Dashboard count of reports still pending across all patients.
    pub fn pending_report_count(env: Env, caller: Address) -> Result<u32, Error> {
        caller.require_auth();
        Self::require_hospital_staff(&env, &caller)?;
        Ok(pending_count(&env))
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
