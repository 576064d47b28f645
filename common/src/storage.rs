//! Thin wrappers over instance and persistent storage.
//!
//! Every write bumps the TTL of what it touched to the network maximum, so an
//! escrow that is still referenced never has its entries archived. Lists that
//! any caller can grow live in persistent storage, one entry per list, and go
//! through `append_persistent`. Instance storage only holds fixed-size config.

use soroban_sdk::{Env, IntoVal, TryFromVal, Val, Vec};

const WEEK_OF_LEDGERS: u32 = 60 * 60 * 24 / 5 * 7;

pub fn extend_instance(env: &Env) {
    let max_ttl: u32 = env.storage().max_ttl();
    env.storage()
        .instance()
        .extend_ttl(max_ttl - WEEK_OF_LEDGERS, max_ttl);
}

pub fn extend_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    let max_ttl: u32 = env.storage().max_ttl();
    env.storage()
        .persistent()
        .extend_ttl::<K>(key, max_ttl - WEEK_OF_LEDGERS, max_ttl);
}

// PERSISTENT STORAGE
pub fn store_persistent<K, V>(env: &Env, key: &K, val: &V)
where
    K: IntoVal<Env, Val>,
    V: IntoVal<Env, Val>,
{
    env.storage().persistent().set(key, val);
    extend_persistent(env, key);
}

pub fn get_persistent<K, V>(env: &Env, key: &K) -> Option<V>
where
    K: IntoVal<Env, Val>,
    V: TryFromVal<Env, Val>,
{
    env.storage().persistent().get(key)
}

pub fn remove_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage().persistent().remove(key)
}

/// Pushes `item` onto the persistent list under `key` and returns the list.
pub fn append_persistent<K, T>(env: &Env, key: &K, item: T) -> Vec<T>
where
    K: IntoVal<Env, Val>,
    T: IntoVal<Env, Val> + TryFromVal<Env, Val>,
{
    let mut items: Vec<T> = get_persistent(env, key).unwrap_or_else(|| Vec::new(env));
    items.push_back(item);
    store_persistent(env, key, &items);
    items
}

// INSTANCE STORAGE
pub fn store_data<K, V>(env: &Env, key: &K, val: &V)
where
    K: IntoVal<Env, Val>,
    V: IntoVal<Env, Val>,
{
    env.storage().instance().set(key, val);
    extend_instance(env);
}

pub fn get_data<K, V>(env: &Env, key: &K) -> Option<V>
where
    K: IntoVal<Env, Val>,
    V: TryFromVal<Env, Val>,
{
    env.storage().instance().get(key)
}
