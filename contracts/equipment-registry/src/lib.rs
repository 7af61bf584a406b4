#![cfg_attr(not(test), no_std)]

use rental_lib::{Equipment, AVAILABILITY_UPDATED_TOPIC, EQUIPMENT_REGISTERED_TOPIC};
use soroban_sdk::{contract, contracterror, contractimpl, log, Address, Env, String};

mod storage;


use storage::*;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotFound = 1,
    NotOwner = 2,
}

#[contract]
pub struct EquipmentRegistry;

#[contractimpl]
impl EquipmentRegistry {
    /// List a new piece of equipment owned by the caller.
    ///
    /// Any address may register. Returns the newly assigned id; ids start at
    /// 1 and are never reused.
    pub fn register_equipment(
        env: Env,
        owner: Address,
        name: String,
        description: String,
        daily_rate: u128,
        deposit_amount: u128,
    ) -> u64 {
        owner.require_auth();

        let equipment_id = next_equipment_id(&env);
        let equipment = Equipment {
            name,
            description,
            owner: owner.clone(),
            daily_rate,
            deposit_amount,
            is_available: true,
        };
        save_equipment(&env, equipment_id, &equipment);

        env.events().publish(
            (EQUIPMENT_REGISTERED_TOPIC, equipment_id),
            (owner, daily_rate, deposit_amount),
        );

        equipment_id
    }

    /// Get an equipment record, `None` if the id was never assigned
    pub fn get_equipment(env: Env, equipment_id: u64) -> Option<Equipment> {
        load_equipment(&env, equipment_id)
    }

    /// Mark equipment as available or unavailable. Owner only.
    pub fn update_availability(
        env: Env,
        owner: Address,
        equipment_id: u64,
        is_available: bool,
    ) -> Result<bool, Error> {
        owner.require_auth();

        let mut equipment = load_equipment(&env, equipment_id).ok_or(Error::NotFound)?;
        if equipment.owner != owner {
            log!(&env, "availability update rejected: not owner", equipment_id, owner);
            return Err(Error::NotOwner);
        }

        equipment.is_available = is_available;
        save_equipment(&env, equipment_id, &equipment);

        env.events().publish(
            (AVAILABILITY_UPDATED_TOPIC, equipment_id),
            (owner, is_available),
        );

        Ok(true)
    }

    /// Last assigned equipment id, which is also the number of listings
    pub fn last_equipment_id(env: Env) -> u64 {
        get_last_equipment_id(&env)
    }
}
