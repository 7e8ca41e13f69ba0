#![no_std]

mod equivalence;
mod storage;

pub use storage::PoolProfile;

use audit_types::{LpPool, WAD};
use soroban_sdk::{contract, contractimpl, Address, Env, Symbol};

/// Vote-weight calculator for the SQUID DAO.
///
/// Voting power is raw SQUID plus LP holdings converted to SQUID at the
/// pool's withdraw rate. Everything except the admin setters is a view.
#[contract]
pub struct VoteCalculator;

#[contractimpl]
impl VoteCalculator {
    /// Initialize calculator with an admin
    pub fn initialize(env: Env, admin: Address) {
        if storage::has_admin(&env) {
            panic!("Already initialized");
        }
        admin.require_auth();
        storage::set_admin(&env, &admin);
    }

    /// Configure (or reconfigure) the withdraw model of a pool
    pub fn set_pool(env: Env, pool: LpPool, profile: PoolProfile) {
        storage::get_admin(&env).require_auth();

        if !profile.is_valid() {
            panic!("Invalid pool profile");
        }

        storage::set_pool(&env, pool, &profile);

        env.events()
            .publish((Symbol::new(&env, "pool_set"), pool), profile);
    }

    /// Set USD price feeds (WAD-scaled)
    pub fn set_prices(env: Env, eth: u128, squid: u128, squill: u128) {
        storage::get_admin(&env).require_auth();
        storage::set_prices(&env, &storage::Prices { eth, squid, squill });
    }

    pub fn set_squid_balance(env: Env, voter: Address, amount: u128) {
        storage::get_admin(&env).require_auth();
        storage::set_squid_balance(&env, &voter, amount);
    }

    pub fn set_lp_balance(env: Env, pool: LpPool, voter: Address, amount: u128) {
        storage::get_admin(&env).require_auth();
        storage::set_lp_balance(&env, pool, &voter, amount);
    }

    // === Rate views ===

    /// SQUID per SQUID/ETH LP (WAD-scaled) at `quantity` wei, one LP if None
    pub fn squid_lp_equivalent(env: Env, quantity: Option<u128>) -> u128 {
        rate(&env, LpPool::SquidEth, quantity.unwrap_or(WAD))
    }

    /// SQUID per SQUID/SQUILL LP (WAD-scaled) at `quantity` wei, one LP if None
    pub fn squill_lp_equivalent(env: Env, quantity: Option<u128>) -> u128 {
        rate(&env, LpPool::SquidSquill, quantity.unwrap_or(WAD))
    }

    // === Price views ===

    pub fn eth_price(env: Env) -> u128 {
        storage::get_prices(&env).eth
    }

    pub fn squid_price(env: Env) -> u128 {
        storage::get_prices(&env).squid
    }

    pub fn squill_price(env: Env) -> u128 {
        storage::get_prices(&env).squill
    }

    // === Balance views ===

    pub fn squid_balance(env: Env, voter: Address) -> u128 {
        storage::get_squid_balance(&env, &voter)
    }

    pub fn lp_balance(env: Env, pool: LpPool, voter: Address) -> u128 {
        storage::get_lp_balance(&env, pool, &voter)
    }

    /// Voter's LP holdings in a pool converted to SQUID (0 for dust)
    pub fn lp_balance_in_squid(env: Env, pool: LpPool, voter: Address) -> u128 {
        balance_in_squid(&env, pool, &voter)
    }

    /// Total voting power: raw SQUID plus both LP positions in SQUID
    pub fn balance_of(env: Env, voter: Address) -> u128 {
        storage::get_squid_balance(&env, &voter)
            + balance_in_squid(&env, LpPool::SquidEth, &voter)
            + balance_in_squid(&env, LpPool::SquidSquill, &voter)
    }

    // === Config views ===

    pub fn get_pool(env: Env, pool: LpPool) -> Option<PoolProfile> {
        storage::get_pool(&env, pool)
    }

    pub fn get_admin(env: Env) -> Address {
        storage::get_admin(&env)
    }
}

fn rate(env: &Env, pool: LpPool, quantity: u128) -> u128 {
    let profile = storage::get_pool(env, pool).expect("Pool not configured");
    equivalence::lp_equivalent(env, &profile, quantity)
}

fn balance_in_squid(env: &Env, pool: LpPool, voter: &Address) -> u128 {
    let balance = storage::get_lp_balance(env, pool, voter);
    if balance == 0 {
        return 0;
    }
    let profile = storage::get_pool(env, pool).expect("Pool not configured");
    equivalence::lp_balance_in_squid(env, &profile, balance)
}
