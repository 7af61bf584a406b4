use soroban_sdk::{contracttype, Env};

use rental_lib::{ttl, Equipment};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Last assigned equipment id (0 before the first registration)
    LastEquipmentId,
    /// Equipment record by id
    Equipment(u64),
}

/* ---------------- EQUIPMENT COUNTER ---------------- */

pub fn get_last_equipment_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::LastEquipmentId)
        .unwrap_or(0)
}

/// Pre-increments the counter and returns the freshly allocated id.
pub fn next_equipment_id(env: &Env) -> u64 {
    let id = get_last_equipment_id(env) + 1;
    env.storage().instance().set(&DataKey::LastEquipmentId, &id);
    ttl::bump_instance(env);
    id
}

/* ---------------- EQUIPMENT ---------------- */

pub fn save_equipment(env: &Env, equipment_id: u64, equipment: &Equipment) {
    let key = DataKey::Equipment(equipment_id);
    env.storage().persistent().set(&key, equipment);
    ttl::bump_record(env, &key);
}

pub fn load_equipment(env: &Env, equipment_id: u64) -> Option<Equipment> {
    env.storage()
        .persistent()
        .get(&DataKey::Equipment(equipment_id))
}
