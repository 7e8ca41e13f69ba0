use soroban_sdk::{Env, U256};

/// Multiply and divide with 256-bit intermediate precision (rounds down)
/// Returns (a * b) / denominator
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    if denominator == 0 {
        panic!("Division by zero");
    }

    let result = product(env, a, b).div(&U256::from_u128(env, denominator));
    u128_from_u256(env, &result)
}

/// Like `mul_div` but returns None on a zero denominator or when the
/// quotient does not fit in u128
pub fn checked_mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> Option<u128> {
    if denominator == 0 {
        return None;
    }

    let result = product(env, a, b).div(&U256::from_u128(env, denominator));
    result.to_u128()
}

/// Like `mul_div` but never panics.
///
/// Quotients past u128::MAX saturate. A zero denominator yields 0 for a
/// zero product and u128::MAX otherwise (x / 0 treated as unbounded).
pub fn saturating_mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    if denominator == 0 {
        return if a == 0 || b == 0 { 0 } else { u128::MAX };
    }
    checked_mul_div(env, a, b, denominator).unwrap_or(u128::MAX)
}

/// Exact comparison of two products: a * b > c * d
///
/// Lets callers compare ratios without truncating either side:
/// x / y > r / s  <=>  x * s > r * y  (for positive y, s)
pub fn product_gt(env: &Env, a: u128, b: u128, c: u128, d: u128) -> bool {
    product(env, a, b).gt(&product(env, c, d))
}

/// |a - b|
pub fn abs_diff(a: u128, b: u128) -> u128 {
    if a > b {
        a - b
    } else {
        b - a
    }
}

fn product(env: &Env, a: u128, b: u128) -> U256 {
    U256::from_u128(env, a).mul(&U256::from_u128(env, b))
}

/// Convert U256 to u128, panics if overflow
fn u128_from_u256(env: &Env, value: &U256) -> u128 {
    let max_u128 = U256::from_u128(env, u128::MAX);
    if value.gt(&max_u128) {
        panic!("U256 overflow when converting to u128");
    }
    value.to_u128().unwrap()
}
