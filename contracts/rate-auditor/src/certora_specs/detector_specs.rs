// ============================================================================
// DETECTOR SPECIFICATIONS
// ============================================================================
//
// KEY PROPERTIES:
// 1. A zero quantity that returned a rate is Normal(0)
// 2. A revert below the dust threshold is the protected path
// 3. A revert at or above the threshold is always a finding
// 4. A probe priced exactly at the baseline never alarms
// 5. Verdicts agree with which side of the threshold the quantity is on
//
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::Env;

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

/// RULE: Sanity - a dust inflation verdict is reachable
#[cfg(feature = "certora")]
#[rule]
pub fn sanity_dust_inflated_reachable(env: Env, quantity: u128, rate: u128, baseline: u128) {
    use audit_types::{RateRead, ThresholdSet, Verdict};

    let thresholds = ThresholdSet::default();
    let verdict = audit_math::evaluate(&env, quantity, &RateRead::Value(rate), baseline, &thresholds);
    cvlr_satisfy!(matches!(verdict, Verdict::DustInflated(_, _)));
}

/// RULE: Zero quantity with a rate carries no evidence
#[cfg(feature = "certora")]
#[rule]
pub fn zero_quantity_is_normal(env: Env, rate: u128, baseline: u128) {
    use audit_types::{RateRead, ThresholdSet, Verdict};

    let thresholds = ThresholdSet::default();
    let verdict = audit_math::evaluate(&env, 0, &RateRead::Value(rate), baseline, &thresholds);
    cvlr_assert!(verdict == Verdict::Normal(0));
}

/// RULE: Reverting on dust is the protected path, never a finding
#[cfg(feature = "certora")]
#[rule]
pub fn dust_revert_is_protected(env: Env, quantity: u128, baseline: u128) {
    use audit_types::{RateRead, ThresholdSet, Verdict};

    let thresholds = ThresholdSet::default();
    cvlr_assume!(quantity < thresholds.dust_threshold);

    let verdict = audit_math::evaluate(&env, quantity, &RateRead::Reverted, baseline, &thresholds);
    cvlr_assert!(verdict == Verdict::Reverted);
    cvlr_assert!(!verdict.is_finding());
}

/// RULE: Reverting on a legitimate balance is always reported
#[cfg(feature = "certora")]
#[rule]
pub fn legitimate_revert_is_finding(env: Env, quantity: u128, baseline: u128) {
    use audit_types::{RateRead, ThresholdSet, Verdict};

    let thresholds = ThresholdSet::default();
    cvlr_assume!(quantity >= thresholds.dust_threshold);

    let verdict = audit_math::evaluate(&env, quantity, &RateRead::Reverted, baseline, &thresholds);
    cvlr_assert!(verdict == Verdict::UnexpectedRevert);
    cvlr_assert!(verdict.is_finding());
}

/// RULE: A rate equal to the baseline never raises an alarm
#[cfg(feature = "certora")]
#[rule]
pub fn baseline_rate_never_alarms(env: Env, quantity: u128, baseline: u128) {
    use audit_types::{RateRead, ThresholdSet};

    let thresholds = ThresholdSet::default();
    cvlr_assume!(baseline > 0);
    cvlr_assume!(quantity <= u128::MAX / baseline);

    let verdict = audit_math::evaluate(&env, quantity, &RateRead::Value(baseline), baseline, &thresholds);
    cvlr_assert!(!verdict.is_finding());
}

/// RULE: Verdict side matches quantity side for any read
#[cfg(feature = "certora")]
#[rule]
pub fn verdict_respects_threshold(env: Env, quantity: u128, rate: u128, baseline: u128, reverted: bool) {
    use audit_types::{RateRead, ThresholdSet};

    let thresholds = ThresholdSet::default();
    let read = if reverted { RateRead::Reverted } else { RateRead::Value(rate) };

    let verdict = audit_math::evaluate(&env, quantity, &read, baseline, &thresholds);
    cvlr_assert!(crate::invariants::verdict_matches_quantity(&thresholds, quantity, &verdict));
    cvlr_assert!(crate::invariants::zero_quantity_is_inert(quantity, reverted, &verdict));
}
