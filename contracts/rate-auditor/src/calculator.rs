//! Read-only calls into the vote calculator.
//!
//! Rate, price and balance-pricing reads go through `try_invoke_contract` so that a revert
//! in the calculator comes back as data instead of aborting the audit.

use audit_types::{LpPool, RateRead};
use soroban_sdk::{Address, Env, IntoVal, Symbol, Val, Vec};

pub fn rate_function(pool: LpPool) -> &'static str {
    match pool {
        LpPool::SquidEth => "squid_lp_equivalent",
        LpPool::SquidSquill => "squill_lp_equivalent",
    }
}

/// Rate at `quantity` wei of LP
pub fn read_rate(env: &Env, calculator: &Address, pool: LpPool, quantity: u128) -> RateRead {
    let read = try_read(
        env,
        calculator,
        rate_function(pool),
        (Some(quantity),).into_val(env),
    );
    RateRead::from_option(read)
}

/// One of the calculator's USD price feeds
pub fn read_price(env: &Env, calculator: &Address, feed: &str) -> Option<u128> {
    try_read(env, calculator, feed, ().into_val(env))
}

pub fn lp_balance(env: &Env, calculator: &Address, pool: LpPool, voter: &Address) -> u128 {
    env.invoke_contract(
        calculator,
        &Symbol::new(env, "lp_balance"),
        (pool, voter).into_val(env),
    )
}

/// Calculator's own SQUID figure for a voter's LP position
pub fn lp_balance_in_squid(
    env: &Env,
    calculator: &Address,
    pool: LpPool,
    voter: &Address,
) -> Option<u128> {
    try_read(
        env,
        calculator,
        "lp_balance_in_squid",
        (pool, voter).into_val(env),
    )
}

fn try_read(env: &Env, calculator: &Address, func: &str, args: Vec<Val>) -> Option<u128> {
    match env.try_invoke_contract::<u128, soroban_sdk::Error>(calculator, &Symbol::new(env, func), args) {
        Ok(Ok(value)) => Some(value),
        _ => None,
    }
}
