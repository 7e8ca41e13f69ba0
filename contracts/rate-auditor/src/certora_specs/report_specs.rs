// ============================================================================
// REPORT SPECIFICATIONS
// ============================================================================
//
// KEY PROPERTIES:
// 1. Counters always sum to the number of probes
// 2. A report passes exactly when it carries no finding
// 3. Threat level is the maximum severity over all verdicts
//
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::Env;

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume};

/// RULE: A two-probe batch produces a consistent report
#[cfg(feature = "certora")]
#[rule]
pub fn batch_report_consistent(
    env: Env,
    q1: u128,
    r1: u128,
    q2: u128,
    r2: u128,
    baseline: u128,
    reverted: bool,
) {
    use audit_types::{Probe, RateRead, ThresholdSet};
    use soroban_sdk::vec;

    let thresholds = ThresholdSet::default();
    let first = if reverted { RateRead::Reverted } else { RateRead::Value(r1) };
    let probes = vec![&env, Probe::new(q1, first), Probe::new(q2, RateRead::Value(r2))];

    let report = audit_math::evaluate_batch(&env, &probes, baseline, &thresholds);
    cvlr_assert!(report.probes == 2);
    cvlr_assert!(crate::invariants::report_consistent(&report));
}

/// RULE: Threat level dominates every recorded verdict
#[cfg(feature = "certora")]
#[rule]
pub fn threat_level_dominates(env: Env, quantity: u128, rate: u128, baseline: u128) {
    use audit_types::{Probe, RateRead, ThresholdSet};
    use soroban_sdk::vec;

    let thresholds = ThresholdSet::default();
    cvlr_assume!(baseline > 0);

    let read = RateRead::Value(rate);
    let verdict = audit_math::evaluate(&env, quantity, &read, baseline, &thresholds);
    let report = audit_math::evaluate_batch(&env, &vec![&env, Probe::new(quantity, read)], baseline, &thresholds);

    cvlr_assert!(report.threat_level == verdict.severity());
}
