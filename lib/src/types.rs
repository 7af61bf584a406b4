use soroban_sdk::{contracttype, Address, String};

/// A piece of equipment listed for rent.
///
/// Only `is_available` changes after registration, and only at the owner's
/// request.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Equipment {
    pub name: String,
    pub description: String,
    pub owner: Address,
    pub daily_rate: u128,
    pub deposit_amount: u128,
    pub is_available: bool,
}

/// Delegation granted by the contract owner to a verification authority.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub struct AuthorityRecord {
    pub is_active: bool,
}

/// Latest qualification grant issued to a renter.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VerificationRecord {
    pub is_verified: bool,
    /// Ledger sequence at which the grant stops being valid (exclusive).
    pub verification_expiry: u32,
    pub qualification_level: u32,
    /// Authority that issued the grant.
    pub verification_authority: Address,
}

impl VerificationRecord {
    /// Returns `true` while `current_ledger` is strictly before the expiry.
    pub fn is_valid_at(&self, current_ledger: u32) -> bool {
        self.is_verified && current_ledger < self.verification_expiry
    }
}
