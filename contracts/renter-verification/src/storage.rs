use soroban_sdk::{contracttype, Address, Env};

use rental_lib::{ttl, AuthorityRecord, VerificationRecord};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Delegation record of a verification authority
    Authority(Address),
    /// Latest verification grant of a renter
    Verification(Address),
}

/* ---------------- AUTHORITIES ---------------- */

pub fn save_authority(env: &Env, authority: &Address, record: &AuthorityRecord) {
    let key = DataKey::Authority(authority.clone());
    env.storage().persistent().set(&key, record);
    ttl::bump_record(env, &key);
}

pub fn load_authority(env: &Env, authority: &Address) -> Option<AuthorityRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Authority(authority.clone()))
}

pub fn is_active_authority(env: &Env, authority: &Address) -> bool {
    load_authority(env, authority)
        .map(|record| record.is_active)
        .unwrap_or(false)
}

/* ---------------- VERIFICATIONS ---------------- */

pub fn save_verification(env: &Env, renter: &Address, record: &VerificationRecord) {
    let key = DataKey::Verification(renter.clone());
    env.storage().persistent().set(&key, record);
    ttl::bump_record(env, &key);
}

pub fn load_verification(env: &Env, renter: &Address) -> Option<VerificationRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Verification(renter.clone()))
}
