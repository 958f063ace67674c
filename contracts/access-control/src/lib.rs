#![no_std]

mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Vec};
use storage::*;

pub use types::{Error, Profile, Role};
use types::DataKey;

#[contract]
pub struct AccessControl;

#[contractimpl]
impl AccessControl {
    /// One-shot bootstrap: stores the admin account, creates its profile,
    /// and records the admin role assignment.
    pub fn init(env: Env, admin: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);

        let now = env.ledger().timestamp();
        let profile = Profile {
            account: admin.clone(),
            full_name: String::from_str(&env, ""),
            phone: String::from_str(&env, ""),
            created_at: now,
            updated_at: now,
        };
        save_profile(&env, &profile);

        let mut roles = Vec::new(&env);
        roles.push_back(Role::Admin);
        save_roles(&env, &admin, &roles);

        env.events()
            .publish((symbol_short!("init"), admin), symbol_short!("success"));

        Ok(())
    }

    /// Self-service signup. Creates the account's profile (empty strings
    /// are permitted for missing metadata) and records the patient role.
    ///
    /// The role is never taken from the caller: signup can only ever grant
    /// `Patient`. Staff and admin escalation goes through `grant_role`.
    pub fn signup(
        env: Env,
        account: Address,
        full_name: String,
        phone: String,
    ) -> Result<(), Error> {
        account.require_auth();

        if load_profile(&env, &account).is_some() {
            return Err(Error::AlreadyRegistered);
        }

        let now = env.ledger().timestamp();
        let profile = Profile {
            account: account.clone(),
            full_name,
            phone,
            created_at: now,
            updated_at: now,
        };
        save_profile(&env, &profile);

        let mut roles = Vec::new(&env);
        roles.push_back(Role::Patient);
        save_roles(&env, &account, &roles);

        env.events()
            .publish((symbol_short!("signup"), account), symbol_short!("success"));

        Ok(())
    }

    /// Grant a role to an account. Admin only; duplicate grants fail.
    pub fn grant_role(
        env: Env,
        admin: Address,
        account: Address,
        role: Role,
    ) -> Result<(), Error> {
        admin.require_auth();
        Self::require_admin(&env, &admin)?;

        if load_profile(&env, &account).is_none() {
            return Err(Error::ProfileNotFound);
        }

        let mut roles = load_roles(&env, &account);
        if roles.contains(&role) {
            return Err(Error::RoleAlreadyAssigned);
        }
        roles.push_back(role);
        save_roles(&env, &account, &roles);

        env.events()
            .publish((symbol_short!("rolegrant"), account), role);

        Ok(())
    }

    /// Revoke a role from an account. Admin only.
    pub fn revoke_role(
        env: Env,
        admin: Address,
        account: Address,
        role: Role,
    ) -> Result<(), Error> {
        admin.require_auth();
        Self::require_admin(&env, &admin)?;

        let roles = load_roles(&env, &account);
        if !roles.contains(&role) {
            return Err(Error::RoleNotAssigned);
        }

        let mut remaining = Vec::new(&env);
        for r in roles.iter() {
            if r != role {
                remaining.push_back(r);
            }
        }
        save_roles(&env, &account, &remaining);

        env.events()
            .publish((symbol_short!("rolervk"), account), role);

        Ok(())
    }

    /// Side-effect-free role membership test. Consulted by every other
    /// contract in the workspace before returning rows or committing a
    /// mutation, always with the authenticated caller's address.
    pub fn has_role(env: Env, account: Address, role: Role) -> bool {
        load_roles(&env, &account).contains(&role)
    }

    /// True if the account holds at least one of the given roles.
    pub fn has_any_role(env: Env, account: Address, roles: Vec<Role>) -> bool {
        let assigned = load_roles(&env, &account);
        for role in roles.iter() {
            if assigned.contains(&role) {
                return true;
            }
        }
        false
    }

    /// Read an account's role set. Self or admin.
    pub fn get_roles(
        env: Env,
        requester: Address,
        account: Address,
    ) -> Result<Vec<Role>, Error> {
        requester.require_auth();
        if requester != account && !load_roles(&env, &requester).contains(&Role::Admin) {
            return Err(Error::NotAuthorized);
        }
        Ok(load_roles(&env, &account))
    }

    /// Read the caller's own profile.
    pub fn get_profile(env: Env, account: Address) -> Result<Profile, Error> {
        account.require_auth();
        load_profile(&env, &account).ok_or(Error::ProfileNotFound)
    }

    /// Update the caller's own profile.
    pub fn update_profile(
        env: Env,
        account: Address,
        full_name: String,
        phone: String,
    ) -> Result<(), Error> {
        account.require_auth();

        let mut profile = load_profile(&env, &account).ok_or(Error::ProfileNotFound)?;
        profile.full_name = full_name;
        profile.phone = phone;
        profile.updated_at = env.ledger().timestamp();
        save_profile(&env, &profile);

        env.events()
            .publish((symbol_short!("prof_upd"), account), symbol_short!("success"));

        Ok(())
    }

    fn require_admin(env: &Env, account: &Address) -> Result<(), Error> {
        if !env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::NotInitialized);
        }
        if !load_roles(env, account).contains(&Role::Admin) {
            return Err(Error::NotAuthorized);
        }
        Ok(())
    }
}
