#![cfg(test)]

use super::*;
use soroban_sdk::{testutils::Address as _, testutils::Ledger, Address, Env, String};

use access_control::{AccessControl, AccessControlClient};
use patient_registry::{PatientRegistry, PatientRegistryClient};

// -----------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------

struct Ctx {
    env: Env,
    ac: AccessControlClient<'static>,
    registry: PatientRegistryClient<'static>,
    scheduling: AppointmentSchedulingClient<'static>,
    admin: Address,
    staff: Address,
}

fn setup() -> Ctx {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(1_000_000);

    let ac_id = env.register(AccessControl, ());
    let ac = AccessControlClient::new(&env, &ac_id);
    let admin = Address::generate(&env);
    ac.init(&admin);

    let registry_id = env.register(PatientRegistry, ());
    let registry = PatientRegistryClient::new(&env, &registry_id);
    registry.init(&ac_id);

    let scheduling_id = env.register(AppointmentScheduling, ());
    let scheduling = AppointmentSchedulingClient::new(&env, &scheduling_id);
    scheduling.init(&ac_id, &registry_id);

    let staff = Address::generate(&env);
    ac.signup(
        &staff,
        &String::from_str(&env, "Dr. Musa"),
        &String::from_str(&env, ""),
    );
    ac.grant_role(&admin, &staff, &access_control::Role::HospitalStaff);

    Ctx {
        env,
        ac,
        registry,
        scheduling,
        admin,
        staff,
    }
}

fn make_patient(ctx: &Ctx, name: &str) -> Address {
    let account = Address::generate(&ctx.env);
    ctx.ac.signup(
        &account,
        &String::from_str(&ctx.env, name),
        &String::from_str(&ctx.env, ""),
    );
    ctx.registry.register_patient(&account);
    account
}

fn book(ctx: &Ctx, caller: &Address, patient: &Address) -> u64 {
    ctx.scheduling.schedule_appointment(
        caller,
        patient,
        &ctx.staff,
        &2_000_000u64,
        &String::from_str(&ctx.env, "Cardiology"),
        &String::from_str(&ctx.env, "Chest pain follow-up"),
    )
}

// -----------------------------------------------------------------------
// schedule_appointment
// -----------------------------------------------------------------------

#[test]
fn test_staff_schedules_for_patient() {
    let ctx = setup();
    let patient = make_patient(&ctx, "Ada Obi");
    let id = book(&ctx, &ctx.staff, &patient);
    assert_eq!(id, 1);

    let appointment = ctx.scheduling.get_appointment(&patient, &id);
    assert_eq!(appointment.status, AppointmentStatus::Scheduled);
    assert_eq!(appointment.department, String::from_str(&ctx.env, "Cardiology"));
    assert_eq!(appointment.patient, patient);
    assert_eq!(appointment.staff, ctx.staff);
}

#[test]
fn test_patient_requests_own_appointment() {
    let ctx = setup();
    let patient = make_patient(&ctx, "Ada Obi");
    let id = book(&ctx, &patient, &patient);

    let appointment = ctx.scheduling.get_appointment(&patient, &id);
    assert_eq!(appointment.status, AppointmentStatus::Scheduled);
}

#[test]
fn test_patient_cannot_schedule_for_another() {
    let ctx = setup();
    let patient = make_patient(&ctx, "Ada Obi");
    let other = make_patient(&ctx, "Ben Eze");

    let result = ctx.scheduling.try_schedule_appointment(
        &other,
        &patient,
        &ctx.staff,
        &2_000_000u64,
        &String::from_str(&ctx.env, "Cardiology"),
        &String::from_str(&ctx.env, ""),
    );
    assert_eq!(result, Err(Ok(Error::NotAuthorized)));
}

#[test]
fn test_schedule_unregistered_patient_fails() {
    let ctx = setup();
    let stranger = Address::generate(&ctx.env);

    let result = ctx.scheduling.try_schedule_appointment(
        &ctx.staff,
        &stranger,
        &ctx.staff,
        &2_000_000u64,
        &String::from_str(&ctx.env, "Cardiology"),
        &String::from_str(&ctx.env, ""),
    );
    assert_eq!(result, Err(Ok(Error::PatientNotFound)));
}

#[test]
fn test_schedule_in_past_fails() {
    let ctx = setup();
    let patient = make_patient(&ctx, "Ada Obi");

    let result = ctx.scheduling.try_schedule_appointment(
        &ctx.staff,
        &patient,
        &ctx.staff,
        &999u64,
        &String::from_str(&ctx.env, "Cardiology"),
        &String::from_str(&ctx.env, ""),
    );
    assert_eq!(result, Err(Ok(Error::InvalidAppointmentDate)));
}

#[test]
fn test_schedule_empty_department_fails() {
    let ctx = setup();
    let patient = make_patient(&ctx, "Ada Obi");

    let result = ctx.scheduling.try_schedule_appointment(
        &ctx.staff,
        &patient,
        &ctx.staff,
        &2_000_000u64,
        &String::from_str(&ctx.env, ""),
        &String::from_str(&ctx.env, ""),
    );
    assert_eq!(result, Err(Ok(Error::InvalidInput)));
}

// -----------------------------------------------------------------------
// Status transitions
// -----------------------------------------------------------------------

#[test]
fn test_complete_records_notes() {
    let ctx = setup();
    let patient = make_patient(&ctx, "Ada Obi");
    let id = book(&ctx, &ctx.staff, &patient);

    ctx.scheduling.complete_appointment(
        &ctx.staff,
        &id,
        &String::from_str(&ctx.env, "BP normal, follow up in 6 months"),
    );

    let appointment = ctx.scheduling.get_appointment(&patient, &id);
    assert_eq!(appointment.status, AppointmentStatus::Completed);
    assert_eq!(
        appointment.notes,
        String::from_str(&ctx.env, "BP normal, follow up in 6 months")
    );
}

#[test]
fn test_cancel_records_reason() {
    let ctx = setup();
    let patient = make_patient(&ctx, "Ada Obi");
    let id = book(&ctx, &ctx.staff, &patient);

    ctx.scheduling.cancel_appointment(
        &ctx.staff,
        &id,
        &String::from_str(&ctx.env, "Patient requested"),
    );

    let appointment = ctx.scheduling.get_appointment(&patient, &id);
    assert_eq!(appointment.status, AppointmentStatus::Cancelled);
    assert_eq!(
        appointment.cancellation_reason,
        String::from_str(&ctx.env, "Patient requested")
    );
}

#[test]
fn test_mark_no_show() {
    let ctx = setup();
    let patient = make_patient(&ctx, "Ada Obi");
    let id = book(&ctx, &ctx.staff, &patient);

    ctx.scheduling.mark_no_show(&ctx.staff, &id);
    let appointment = ctx.scheduling.get_appointment(&patient, &id);
    assert_eq!(appointment.status, AppointmentStatus::NoShow);
}

#[test]
fn test_completed_is_terminal() {
    let ctx = setup();
    let patient = make_patient(&ctx, "Ada Obi");
    let id = book(&ctx, &ctx.staff, &patient);
    ctx.scheduling
        .complete_appointment(&ctx.staff, &id, &String::from_str(&ctx.env, ""));

    let result = ctx.scheduling.try_cancel_appointment(
        &ctx.staff,
        &id,
        &String::from_str(&ctx.env, "too late"),
    );
    assert_eq!(result, Err(Ok(Error::InvalidStatusTransition)));

    let result = ctx.scheduling.try_mark_no_show(&ctx.staff, &id);
    assert_eq!(result, Err(Ok(Error::InvalidStatusTransition)));
}

#[test]
fn test_patient_cannot_transition() {
    let ctx = setup();
    let patient = make_patient(&ctx, "Ada Obi");
    let id = book(&ctx, &ctx.staff, &patient);

    let result = ctx.scheduling.try_complete_appointment(
        &patient,
        &id,
        &String::from_str(&ctx.env, ""),
    );
    assert_eq!(result, Err(Ok(Error::NotAuthorized)));
}

// -----------------------------------------------------------------------
// reschedule_appointment
// -----------------------------------------------------------------------

#[test]
fn test_reschedule_moves_time() {
    let ctx = setup();
    let patient = make_patient(&ctx, "Ada Obi");
    let id = book(&ctx, &ctx.staff, &patient);

    ctx.scheduling
        .reschedule_appointment(&ctx.staff, &id, &3_000_000u64);
    let appointment = ctx.scheduling.get_appointment(&patient, &id);
    assert_eq!(appointment.scheduled_at, 3_000_000);
    assert_eq!(appointment.status, AppointmentStatus::Scheduled);
}

#[test]
fn test_reschedule_cancelled_fails() {
    let ctx = setup();
    let patient = make_patient(&ctx, "Ada Obi");
    let id = book(&ctx, &ctx.staff, &patient);
    ctx.scheduling
        .cancel_appointment(&ctx.staff, &id, &String::from_str(&ctx.env, "conflict"));

    let result = ctx
        .scheduling
        .try_reschedule_appointment(&ctx.staff, &id, &3_000_000u64);
    assert_eq!(result, Err(Ok(Error::InvalidStatusTransition)));
}

// -----------------------------------------------------------------------
// Read policy
// -----------------------------------------------------------------------

#[test]
fn test_unrelated_patient_cannot_read() {
    let ctx = setup();
    let patient = make_patient(&ctx, "Ada Obi");
    let other = make_patient(&ctx, "Ben Eze");
    let id = book(&ctx, &ctx.staff, &patient);

    let result = ctx.scheduling.try_get_appointment(&other, &id);
    assert_eq!(result, Err(Ok(Error::NotAuthorized)));
}

#[test]
fn test_admin_reads_any() {
    let ctx = setup();
    let patient = make_patient(&ctx, "Ada Obi");
    let id = book(&ctx, &ctx.staff, &patient);

    let appointment = ctx.scheduling.get_appointment(&ctx.admin, &id);
    assert_eq!(appointment.id, id);
}

#[test]
fn test_staff_appointment_list() {
    let ctx = setup();
    let patient = make_patient(&ctx, "Ada Obi");
    book(&ctx, &ctx.staff, &patient);
    book(&ctx, &ctx.staff, &patient);

    let appointments = ctx.scheduling.get_staff_appointments(&ctx.staff, &ctx.staff);
    assert_eq!(appointments.len(), 2);

    let result = ctx
        .scheduling
        .try_get_staff_appointments(&patient, &ctx.staff);
    assert_eq!(result, Err(Ok(Error::NotAuthorized)));
}

#[test]
fn test_scheduled_count_skips_terminal() {
    let ctx = setup();
    let patient = make_patient(&ctx, "Ada Obi");
    let first = book(&ctx, &ctx.staff, &patient);
    book(&ctx, &ctx.staff, &patient);
    ctx.scheduling
        .complete_appointment(&ctx.staff, &first, &String::from_str(&ctx.env, ""));

    assert_eq!(
        ctx.scheduling.scheduled_appointment_count(&patient, &patient),
        1
    );
}
