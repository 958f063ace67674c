use soroban_sdk::{Address, Env, Vec};

use crate::types::{DataKey, Profile, Role};

pub fn save_profile(env: &Env, profile: &Profile) {
    env.storage()
        .persistent()
        .set(&DataKey::Profile(profile.account.clone()), profile);
}

pub fn load_profile(env: &Env, account: &Address) -> Option<Profile> {
    env.storage()
        .persistent()
        .get(&DataKey::Profile(account.clone()))
}

pub fn save_roles(env: &Env, account: &Address, roles: &Vec<Role>) {
    env.storage()
        .persistent()
        .set(&DataKey::Roles(account.clone()), roles);
}

pub fn load_roles(env: &Env, account: &Address) -> Vec<Role> {
    env.storage()
        .persistent()
        .get(&DataKey::Roles(account.clone()))
        .unwrap_or(Vec::new(env))
}
