use audit_types::LpPool;
use soroban_sdk::{contracttype, Address, Env};

/// Withdraw-side model of an LP pool, in SQUID terms
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolProfile {
    /// SQUID claimable by the whole LP supply
    pub squid_reserve: i128,
    /// Outstanding LP tokens
    pub lp_supply: i128,
    /// Quantities below this revert (0 disables the guard)
    pub min_quantity: u128,
    /// Fixed SQUID added to every withdrawal quote, whatever its size
    pub withdraw_offset: i128,
}

impl PoolProfile {
    pub fn is_valid(&self) -> bool {
        self.squid_reserve >= 0 && self.lp_supply > 0 && self.withdraw_offset >= 0
    }
}

/// USD prices (WAD-scaled)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Prices {
    pub eth: u128,
    pub squid: u128,
    pub squill: u128,
}

/// Storage keys for the calculator contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Admin address (Instance storage)
    Admin,
    /// Pool profile per LP pool (Instance storage)
    Pool(LpPool),
    /// Price feeds (Instance storage)
    Prices,
    /// Raw SQUID held by a voter (Persistent storage)
    SquidBalance(Address),
    /// LP tokens held by a voter in a pool (Persistent storage)
    LpBalance(LpPool, Address),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Admin ===

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Address {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .expect("Not initialized")
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    extend_instance_ttl(env);
}

// === Pools ===

pub fn get_pool(env: &Env, pool: LpPool) -> Option<PoolProfile> {
    env.storage().instance().get(&DataKey::Pool(pool))
}

pub fn set_pool(env: &Env, pool: LpPool, profile: &PoolProfile) {
    env.storage().instance().set(&DataKey::Pool(pool), profile);
    extend_instance_ttl(env);
}

// === Prices ===

pub fn get_prices(env: &Env) -> Prices {
    env.storage()
        .instance()
        .get(&DataKey::Prices)
        .expect("Price not set")
}

pub fn set_prices(env: &Env, prices: &Prices) {
    env.storage().instance().set(&DataKey::Prices, prices);
    extend_instance_ttl(env);
}

// === Balances ===

pub fn get_squid_balance(env: &Env, voter: &Address) -> u128 {
    let key = DataKey::SquidBalance(voter.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_squid_balance(env: &Env, voter: &Address, amount: u128) {
    let key = DataKey::SquidBalance(voter.clone());
    set_or_remove(env, &key, amount);
}

pub fn get_lp_balance(env: &Env, pool: LpPool, voter: &Address) -> u128 {
    let key = DataKey::LpBalance(pool, voter.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_lp_balance(env: &Env, pool: LpPool, voter: &Address, amount: u128) {
    let key = DataKey::LpBalance(pool, voter.clone());
    set_or_remove(env, &key, amount);
}

fn set_or_remove(env: &Env, key: &DataKey, amount: u128) {
    if amount == 0 {
        // Remove empty balance
        env.storage().persistent().remove(key);
    } else {
        env.storage().persistent().set(key, &amount);
        extend_persistent_ttl(env, key);
    }
}
