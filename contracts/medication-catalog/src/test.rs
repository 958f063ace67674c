#![cfg(test)]

use super::*;
use soroban_sdk::{testutils::Address as _, Address, Env, String};

use access_control::{AccessControl, AccessControlClient};

// -----------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------

struct Ctx {
    env: Env,
    ac: AccessControlClient<'static>,
    catalog: MedicationCatalogClient<'static>,
    admin: Address,
}

fn setup() -> Ctx {
    let env = Env::default();
    env.mock_all_auths();

    let ac_id = env.register(AccessControl, ());
    let ac = AccessControlClient::new(&env, &ac_id);
    let admin = Address::generate(&env);
    ac.init(&admin);

    let catalog_id = env.register(MedicationCatalog, ());
    let catalog = MedicationCatalogClient::new(&env, &catalog_id);
    catalog.init(&ac_id);

    Ctx {
        env,
        ac,
        catalog,
        admin,
    }
}

fn make_pharmacist(ctx: &Ctx) -> Address {
    let account = Address::generate(&ctx.env);
    ctx.ac.signup(
        &account,
        &String::from_str(&ctx.env, "Ife Ngo"),
        &String::from_str(&ctx.env, ""),
    );
    ctx.ac
        .grant_role(&ctx.admin, &account, &access_control::Role::PharmacyStaff);
    account
}

fn make_patient(ctx: &Ctx) -> Address {
    let account = Address::generate(&ctx.env);
    ctx.ac.signup(
        &account,
        &String::from_str(&ctx.env, "Ada Obi"),
        &String::from_str(&ctx.env, ""),
    );
    account
}

fn add_amoxicillin(ctx: &Ctx, caller: &Address) -> u64 {
    ctx.catalog.add_medication(
        caller,
        &String::from_str(&ctx.env, "Amoxicillin"),
        &String::from_str(&ctx.env, "Broad-spectrum antibiotic"),
        &String::from_str(&ctx.env, "capsule"),
        &String::from_str(&ctx.env, "GSK"),
    )
}

// -----------------------------------------------------------------------
// add_medication / get_medication
// -----------------------------------------------------------------------

#[test]
fn test_add_and_read_back_round_trip() {
    let ctx = setup();
    let pharmacist = make_pharmacist(&ctx);
    let id = add_amoxicillin(&ctx, &pharmacist);
    assert_eq!(id, 1);

    let medication = ctx.catalog.get_medication(&pharmacist, &id);
    assert_eq!(medication.name, String::from_str(&ctx.env, "Amoxicillin"));
    assert_eq!(
        medication.description,
        String::from_str(&ctx.env, "Broad-spectrum antibiotic")
    );
    assert_eq!(medication.dosage_form, String::from_str(&ctx.env, "capsule"));
    assert_eq!(medication.manufacturer, String::from_str(&ctx.env, "GSK"));
}

#[test]
fn test_add_increments_ids() {
    let ctx = setup();
    let pharmacist = make_pharmacist(&ctx);
    assert_eq!(add_amoxicillin(&ctx, &pharmacist), 1);
    assert_eq!(add_amoxicillin(&ctx, &pharmacist), 2);
}

#[test]
fn test_patient_cannot_add() {
    let ctx = setup();
    let patient = make_patient(&ctx);

    let result = ctx.catalog.try_add_medication(
        &patient,
        &String::from_str(&ctx.env, "Amoxicillin"),
        &String::from_str(&ctx.env, ""),
        &String::from_str(&ctx.env, "capsule"),
        &String::from_str(&ctx.env, "GSK"),
    );
    assert_eq!(result, Err(Ok(Error::NotAuthorized)));
}

#[test]
fn test_add_empty_name_fails() {
    let ctx = setup();
    let pharmacist = make_pharmacist(&ctx);

    let result = ctx.catalog.try_add_medication(
        &pharmacist,
        &String::from_str(&ctx.env, ""),
        &String::from_str(&ctx.env, ""),
        &String::from_str(&ctx.env, "tablet"),
        &String::from_str(&ctx.env, ""),
    );
    assert_eq!(result, Err(Ok(Error::InvalidInput)));
}

#[test]
fn test_patient_can_read_catalog() {
    let ctx = setup();
    let pharmacist = make_pharmacist(&ctx);
    let patient = make_patient(&ctx);
    let id = add_amoxicillin(&ctx, &pharmacist);

    let medication = ctx.catalog.get_medication(&patient, &id);
    assert_eq!(medication.id, id);
}

#[test]
fn test_get_unknown_medication_fails() {
    let ctx = setup();
    let patient = make_patient(&ctx);

    let result = ctx.catalog.try_get_medication(&patient, &999);
    assert_eq!(result, Err(Ok(Error::MedicationNotFound)));
}

// -----------------------------------------------------------------------
// update_medication
// -----------------------------------------------------------------------

#[test]
fn test_update_medication() {
    let ctx = setup();
    let pharmacist = make_pharmacist(&ctx);
    let id = add_amoxicillin(&ctx, &pharmacist);

    ctx.catalog.update_medication(
        &pharmacist,
        &id,
        &String::from_str(&ctx.env, "Amoxicillin 500mg"),
        &String::from_str(&ctx.env, "Broad-spectrum antibiotic"),
        &String::from_str(&ctx.env, "capsule"),
        &String::from_str(&ctx.env, "GSK"),
    );

    let medication = ctx.catalog.get_medication(&pharmacist, &id);
    assert_eq!(
        medication.name,
        String::from_str(&ctx.env, "Amoxicillin 500mg")
    );
}

#[test]
fn test_update_unknown_medication_fails() {
    let ctx = setup();
    let pharmacist = make_pharmacist(&ctx);

    let result = ctx.catalog.try_update_medication(
        &pharmacist,
        &7,
        &String::from_str(&ctx.env, "Ibuprofen"),
        &String::from_str(&ctx.env, ""),
        &String::from_str(&ctx.env, "tablet"),
        &String::from_str(&ctx.env, ""),
    );
    assert_eq!(result, Err(Ok(Error::MedicationNotFound)));
}

// -----------------------------------------------------------------------
// list / existence
// -----------------------------------------------------------------------

#[test]
fn test_list_medications() {
    let ctx = setup();
    let pharmacist = make_pharmacist(&ctx);
    add_amoxicillin(&ctx, &pharmacist);
    add_amoxicillin(&ctx, &pharmacist);

    let ids = ctx.catalog.list_medications(&pharmacist);
    assert_eq!(ids.len(), 2);
}

#[test]
fn test_has_medication() {
    let ctx = setup();
    let pharmacist = make_pharmacist(&ctx);
    let id = add_amoxicillin(&ctx, &pharmacist);

    assert!(ctx.catalog.has_medication(&id));
    assert!(!ctx.catalog.has_medication(&42));
}
