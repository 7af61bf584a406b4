#![cfg_attr(not(test), no_std)]

use rental_lib::{
    admin::{self, AdminError},
    ttl, AuthorityRecord, VerificationRecord, AUTHORITY_SET_TOPIC, OWNER_BOUND_TOPIC,
    RENTER_VERIFIED_TOPIC, UNVERIFIED_QUALIFICATION_LEVEL,
};
use soroban_sdk::{contract, contracterror, contractimpl, log, Address, Env};

mod storage;


use storage::*;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotContractOwner = 1,
    NotAuthority = 2,
    AlreadyInitialized = 3,
    NotInitialized = 4,
}

impl From<AdminError> for Error {
    fn from(err: AdminError) -> Self {
        match err {
            AdminError::NotInitialized => Error::NotInitialized,
            AdminError::AlreadyInitialized => Error::AlreadyInitialized,
            AdminError::NotAdmin => Error::NotContractOwner,
        }
    }
}

#[contract]
pub struct RenterVerification;

#[contractimpl]
impl RenterVerification {
    /// Bind the contract owner (one-time setup)
    pub fn init_contract(env: Env, owner: Address) -> Result<(), Error> {
        owner.require_auth();
        admin::init_admin(&env, &owner)?;

        env.events().publish((OWNER_BOUND_TOPIC,), owner);
        Ok(())
    }

    pub fn contract_owner(env: Env) -> Option<Address> {
        admin::get_admin(&env).ok()
    }

    /// Grant or revoke verification rights. Contract owner only.
    ///
    /// Upserts the authority record, last write wins. Revoking an authority
    /// leaves the grants it already issued intact.
    pub fn set_verification_authority(
        env: Env,
        caller: Address,
        authority: Address,
        is_active: bool,
    ) -> Result<bool, Error> {
        caller.require_auth();
        if let Err(err) = admin::verify_admin(&env, &caller) {
            log!(&env, "authority change rejected", caller, authority);
            return Err(err.into());
        }

        save_authority(&env, &authority, &AuthorityRecord { is_active });
        ttl::bump_instance(&env);

        env.events().publish((AUTHORITY_SET_TOPIC, authority), is_active);

        Ok(true)
    }

    /// Issue a qualification grant to a renter, replacing any previous one.
    ///
    /// The caller must be an active authority. `expiry` is a ledger sequence
    /// and is not required to lie in the future.
    pub fn verify_renter(
        env: Env,
        authority: Address,
        renter: Address,
        expiry: u32,
        qualification_level: u32,
    ) -> Result<bool, Error> {
        authority.require_auth();
        if !is_active_authority(&env, &authority) {
            log!(&env, "verification rejected: not an active authority", authority);
            return Err(Error::NotAuthority);
        }

        let record = VerificationRecord {
            is_verified: true,
            verification_expiry: expiry,
            qualification_level,
            verification_authority: authority.clone(),
        };
        save_verification(&env, &renter, &record);
        ttl::bump_instance(&env);

        env.events().publish(
            (RENTER_VERIFIED_TOPIC, renter),
            (authority, expiry, qualification_level),
        );

        Ok(true)
    }

    pub fn is_authority(env: Env, authority: Address) -> bool {
        is_active_authority(&env, &authority)
    }

    /// Whether the renter holds a grant that is still valid at the current
    /// ledger sequence.
    pub fn is_verified(env: Env, renter: Address) -> bool {
        let current_ledger = env.ledger().sequence();
        load_verification(&env, &renter)
            .map(|record| record.is_valid_at(current_ledger))
            .unwrap_or(false)
    }

    /// Last granted qualification level, whether or not the grant has expired.
    /// Renters that were never verified report 0.
    pub fn get_qualification_level(env: Env, renter: Address) -> u32 {
        load_verification(&env, &renter)
            .map(|record| record.qualification_level)
            .unwrap_or(UNVERIFIED_QUALIFICATION_LEVEL)
    }

    /// Raw stored grant, without expiry evaluation
    pub fn get_verification(env: Env, renter: Address) -> Option<VerificationRecord> {
        load_verification(&env, &renter)
    }
}
