#![no_std]
pub mod admin;
pub mod storage_keys;
pub mod ttl;
pub mod types;

pub use storage_keys::*;
pub use types::*;

/// Ledger entry lifetimes, in ledgers (~5s each)
// Instance entries: contract owner, id counters
pub const INSTANCE_TTL_THRESHOLD: u32 = 17_280; // ~1 day
pub const INSTANCE_TTL_EXTEND: u32 = 518_400; // ~30 days

// Persistent records: equipment, authorities, verifications
pub const RECORD_TTL_THRESHOLD: u32 = 518_400; // ~30 days
pub const RECORD_TTL_EXTEND: u32 = 1_036_800; // ~60 days

/// Qualification level reported for renters that were never verified.
pub const UNVERIFIED_QUALIFICATION_LEVEL: u32 = 0;
