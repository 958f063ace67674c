use soroban_sdk::{contracterror, contracttype, Address, String};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    AlreadyRegistered = 3,
    ProfileNotFound = 4,
    RoleAlreadyAssigned = 5,
    RoleNotAssigned = 6,
    NotAuthorized = 7,
}

/// Capability set granted to an account.
///
/// Self-service signup only ever yields `Patient`; the staff and admin
/// roles are granted through the admin-gated `grant_role` path.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Role {
    Patient = 0,
    HospitalStaff = 1,
    PharmacyStaff = 2,
    Admin = 3,
}

/// Display identity for an account, created at signup.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Profile {
    pub account: Address,
    pub full_name: String,
    pub phone: String,
    pub created_at: u64,
    pub updated_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Bootstrap admin account set at init.
    Admin,
    /// account -> Profile
    Profile(Address),
    /// account -> Vec<Role>
    Roles(Address),
}
