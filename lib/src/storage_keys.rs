use soroban_sdk::{symbol_short, Symbol};

pub const CONTRACT_OWNER_KEY: Symbol = symbol_short!("c_owner");

// Event topics
pub const EQUIPMENT_REGISTERED_TOPIC: Symbol = symbol_short!("equip_reg");
pub const AVAILABILITY_UPDATED_TOPIC: Symbol = symbol_short!("equip_avl");
pub const OWNER_BOUND_TOPIC: Symbol = symbol_short!("init");
pub const AUTHORITY_SET_TOPIC: Symbol = symbol_short!("auth_set");
pub const RENTER_VERIFIED_TOPIC: Symbol = symbol_short!("verified");
