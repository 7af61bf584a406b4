use soroban_sdk::{Address, Env};

use crate::{ttl, CONTRACT_OWNER_KEY};

/// Failures of the contract-owner binding. Contracts map these onto their own
/// `#[contracterror]` codes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AdminError {
    NotInitialized,
    AlreadyInitialized,
    NotAdmin,
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&CONTRACT_OWNER_KEY)
}

/// Binds the contract owner. The binding is permanent.
pub fn init_admin(env: &Env, admin: &Address) -> Result<(), AdminError> {
    if has_admin(env) {
        return Err(AdminError::AlreadyInitialized);
    }
    env.storage().instance().set(&CONTRACT_OWNER_KEY, admin);
    ttl::bump_instance(env);
    Ok(())
}

pub fn get_admin(env: &Env) -> Result<Address, AdminError> {
    env.storage()
        .instance()
        .get(&CONTRACT_OWNER_KEY)
        .ok_or(AdminError::NotInitialized)
}

pub fn verify_admin(env: &Env, caller: &Address) -> Result<(), AdminError> {
    let admin = get_admin(env)?;
    if &admin != caller {
        return Err(AdminError::NotAdmin);
    }
    Ok(())
}
