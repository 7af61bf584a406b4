use soroban_sdk::{Env, IntoVal, Val};

use crate::{INSTANCE_TTL_EXTEND, INSTANCE_TTL_THRESHOLD, RECORD_TTL_EXTEND, RECORD_TTL_THRESHOLD};

/// Keep the contract instance (owner binding, counters) alive.
pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend a persistent record after it has been written.
pub fn bump_record<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);
}
