use audit_types::{DUST_THRESHOLD, WAD};
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::Env;

use crate::storage::PoolProfile;

const WAD_I128: i128 = WAD as i128;

/// SQUID per LP (WAD-scaled) implied by withdrawing `quantity` LP.
///
/// Returns a rate, not a total: out * 10^18 / quantity.
/// Panics on dust below the pool's guard and on quantities past i128.
pub fn lp_equivalent(env: &Env, profile: &PoolProfile, quantity: u128) -> u128 {
    if quantity == 0 {
        return 0;
    }
    if quantity < profile.min_quantity {
        panic!("Dust amount");
    }

    let amount = i128::try_from(quantity).unwrap_or_else(|_| panic!("Quantity out of range"));
    let out = withdraw_one_coin(env, profile, amount);
    let rate = out.fixed_div_floor(env, &amount, &WAD_I128);

    rate as u128
}

/// SQUID received for burning `amount` LP
pub fn withdraw_one_coin(env: &Env, profile: &PoolProfile, amount: i128) -> i128 {
    let pro_rata = amount.fixed_mul_floor(env, &profile.squid_reserve, &profile.lp_supply);
    pro_rata + profile.withdraw_offset
}

/// SQUID credited for an LP balance. Dust balances count for nothing.
pub fn lp_balance_in_squid(env: &Env, profile: &PoolProfile, balance: u128) -> u128 {
    if balance < DUST_THRESHOLD {
        return 0;
    }
    let rate = lp_equivalent(env, profile, balance);
    audit_math::mul_div(env, balance, rate, WAD)
}
