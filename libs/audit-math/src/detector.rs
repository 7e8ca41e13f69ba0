//! Rate anomaly detection.
//!
//! A probe rate (SQUID per LP at some quantity) is judged against the
//! baseline rate observed at one full LP unit (10^18 wei). Dust probes that
//! are priced far above the baseline are inflation findings; larger probes
//! whose voting power drifts from the linear projection of the baseline are
//! precision-loss findings. Reverts are classified by whether the quantity
//! sits on the protected dust path.
//!
//! All ratios are WAD-scaled and every comparison against a threshold is
//! exact (cross-multiplied in 256 bits), so evidence values may be
//! truncated but verdicts are not.

use audit_types::{AuditReport, Probe, RateRead, ThresholdSet, Verdict, HUNDRED_PCT, WAD};
use soroban_sdk::{Env, Vec};

use crate::full_math::{abs_diff, product_gt, saturating_mul_div};

/// Classify a single probe. Never panics.
pub fn evaluate(
    env: &Env,
    quantity: u128,
    read: &RateRead,
    baseline_rate: u128,
    thresholds: &ThresholdSet,
) -> Verdict {
    let probe_rate = match read {
        RateRead::Value(rate) => *rate,
        RateRead::Reverted => {
            return if thresholds.is_dust(quantity) {
                Verdict::Reverted
            } else {
                Verdict::UnexpectedRevert
            };
        }
    };

    // Zero LP is worth zero votes whatever the rate
    if quantity == 0 {
        return Verdict::Normal(0);
    }

    let factor = inflation_factor(env, probe_rate, baseline_rate);

    if thresholds.is_dust(quantity)
        && exceeds_inflation_alarm(env, probe_rate, baseline_rate, thresholds.inflation_alarm_factor)
    {
        return Verdict::DustInflated(factor, voting_power(env, quantity, probe_rate));
    }

    let expected = voting_power(env, quantity, baseline_rate);
    let actual = voting_power(env, quantity, probe_rate);
    if expected > 0 {
        let diff = abs_diff(actual, expected);
        // diff / expected * 100% > alarm  <=>  diff * 100% > alarm * expected
        if product_gt(env, diff, HUNDRED_PCT, thresholds.precision_loss_alarm_pct, expected) {
            return Verdict::PrecisionLoss(saturating_mul_div(env, diff, HUNDRED_PCT, expected));
        }
    }

    Verdict::Normal(factor)
}

pub fn evaluate_probe(
    env: &Env,
    probe: &Probe,
    baseline_rate: u128,
    thresholds: &ThresholdSet,
) -> Verdict {
    evaluate(env, probe.quantity, &probe.read, baseline_rate, thresholds)
}

/// Evaluate a batch of probes against one baseline and tally the verdicts
pub fn evaluate_batch(
    env: &Env,
    probes: &Vec<Probe>,
    baseline_rate: u128,
    thresholds: &ThresholdSet,
) -> AuditReport {
    let mut report = AuditReport::new(env);
    for probe in probes.iter() {
        let verdict = evaluate_probe(env, &probe, baseline_rate, thresholds);
        report.record(probe.quantity, &verdict);
    }
    report
}

/// probe_rate / baseline_rate, WAD-scaled and rounded down
pub fn inflation_factor(env: &Env, probe_rate: u128, baseline_rate: u128) -> u128 {
    saturating_mul_div(env, probe_rate, WAD, baseline_rate)
}

/// Voting power credited for `quantity` LP at `rate`: quantity * rate / 10^18
pub fn voting_power(env: &Env, quantity: u128, rate: u128) -> u128 {
    saturating_mul_div(env, quantity, rate, WAD)
}

/// probe_rate / baseline_rate > alarm_factor / WAD, without truncation
pub fn exceeds_inflation_alarm(
    env: &Env,
    probe_rate: u128,
    baseline_rate: u128,
    alarm_factor: u128,
) -> bool {
    product_gt(env, probe_rate, WAD, alarm_factor, baseline_rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use audit_types::Severity;
    use soroban_sdk::{vec, Env};

    /// 12.6445 SQUID per LP
    const BASELINE: u128 = 12_644_500_000_000_000_000;

    fn thresholds() -> ThresholdSet {
        ThresholdSet::default()
    }

    // === Reverts ===

    #[test]
    fn test_revert_below_threshold_is_protected() {
        let env = Env::default();
        let verdict = evaluate(&env, 9_999_999, &RateRead::Reverted, BASELINE, &thresholds());
        assert_eq!(verdict, Verdict::Reverted);
    }

    #[test]
    fn test_revert_above_threshold_is_unexpected() {
        let env = Env::default();
        let verdict = evaluate(&env, 10_000_001, &RateRead::Reverted, BASELINE, &thresholds());
        assert_eq!(verdict, Verdict::UnexpectedRevert);

        // The threshold itself is not dust
        let verdict = evaluate(&env, 10_000_000, &RateRead::Reverted, BASELINE, &thresholds());
        assert_eq!(verdict, Verdict::UnexpectedRevert);
    }

    #[test]
    fn test_revert_takes_precedence_over_zero_quantity() {
        let env = Env::default();
        let verdict = evaluate(&env, 0, &RateRead::Reverted, BASELINE, &thresholds());
        assert_eq!(verdict, Verdict::Reverted);
    }

    // === Zero quantity ===

    #[test]
    fn test_zero_quantity_is_normal_for_any_rate() {
        let env = Env::default();
        for rate in [0u128, 1, BASELINE, 5_162_271 * WAD, u128::MAX] {
            let verdict = evaluate(&env, 0, &RateRead::Value(rate), BASELINE, &thresholds());
            assert_eq!(verdict, Verdict::Normal(0));
        }
    }

    // === Dust inflation ===

    #[test]
    fn test_one_wei_dust_attack() {
        let env = Env::default();
        let probe_rate = 5_162_271 * WAD;

        let verdict = evaluate(&env, 1, &RateRead::Value(probe_rate), BASELINE, &thresholds());

        match verdict {
            Verdict::DustInflated(factor, voting_power) => {
                // ~408,000x
                assert!(factor > 408_000 * WAD && factor < 409_000 * WAD);
                assert_eq!(factor / WAD, 408_262);
                assert_eq!(voting_power, 5_162_271);
            }
            other => panic!("expected DustInflated, got {:?}", other),
        }
    }

    #[test]
    fn test_dust_below_alarm_factor_is_not_inflated() {
        let env = Env::default();
        // 50x at 1,000 wei: inflated, but under the 100x alarm
        let verdict = evaluate(&env, 1_000, &RateRead::Value(BASELINE * 50), BASELINE, &thresholds());
        assert!(!matches!(verdict, Verdict::DustInflated(_, _)));
    }

    #[test]
    fn test_alarm_factor_is_strict() {
        let env = Env::default();
        // Exactly 100x is not above the alarm
        let verdict = evaluate(&env, 1, &RateRead::Value(BASELINE * 100), BASELINE, &thresholds());
        assert!(!matches!(verdict, Verdict::DustInflated(_, _)));

        let verdict = evaluate(&env, 1, &RateRead::Value(BASELINE * 100 + 1), BASELINE, &thresholds());
        assert!(matches!(verdict, Verdict::DustInflated(_, _)));
    }

    #[test]
    fn test_large_quantity_never_dust_inflated() {
        let env = Env::default();
        // 1000x at the threshold: a finding, but not a dust finding
        for quantity in [10_000_000u128, 10_000_001, WAD, 1_000 * WAD] {
            let verdict = evaluate(&env, quantity, &RateRead::Value(BASELINE * 1_000), BASELINE, &thresholds());
            assert!(!matches!(verdict, Verdict::DustInflated(_, _)));
        }
    }

    #[test]
    fn test_within_alarm_above_threshold_not_dust_inflated() {
        let env = Env::default();
        for quantity in [10_000_000u128, 10u128.pow(9), 10u128.pow(15), WAD, 10u128.pow(24)] {
            for rate in [BASELINE / 2, BASELINE, BASELINE * 2, BASELINE * 100] {
                let verdict = evaluate(&env, quantity, &RateRead::Value(rate), BASELINE, &thresholds());
                assert!(!matches!(verdict, Verdict::DustInflated(_, _)));
            }
        }
    }

    // === Precision loss ===

    #[test]
    fn test_one_percent_drift_is_precision_loss() {
        let env = Env::default();
        let probe_rate = BASELINE + BASELINE / 100;

        let verdict = evaluate(&env, 30_000_000, &RateRead::Value(probe_rate), BASELINE, &thresholds());
        // expected 379,335,000 vs actual 383,128,350: exactly 1%
        assert_eq!(verdict, Verdict::PrecisionLoss(WAD));
        assert_eq!(verdict.severity(), Severity::Medium);
    }

    #[test]
    fn test_under_rate_is_precision_loss_too() {
        let env = Env::default();
        let verdict = evaluate(&env, WAD, &RateRead::Value(BASELINE / 2), BASELINE, &thresholds());
        // Half the votes: 50% loss
        assert_eq!(verdict, Verdict::PrecisionLoss(50 * WAD));
    }

    #[test]
    fn test_single_wei_rounding_is_tolerated() {
        let env = Env::default();
        // One wei of voting power off out of ~126M is far below 0.01%
        let probe_rate = BASELINE - 1;
        let verdict = evaluate(&env, 10_000_001, &RateRead::Value(probe_rate), BASELINE, &thresholds());
        assert!(matches!(verdict, Verdict::Normal(_)));
    }

    #[test]
    fn test_zero_expected_power_skips_loss_check() {
        let env = Env::default();
        // 5 wei at a tiny baseline rounds to zero expected votes
        let baseline = 1_000;
        let verdict = evaluate(&env, 5, &RateRead::Value(baseline * 2), baseline, &thresholds());
        assert_eq!(verdict, Verdict::Normal(2 * WAD));
    }

    // === Normal ===

    #[test]
    fn test_threshold_quantity_equal_rates_is_normal() {
        let env = Env::default();
        let verdict = evaluate(&env, 10_000_000, &RateRead::Value(BASELINE), BASELINE, &thresholds());
        assert_eq!(verdict, Verdict::Normal(WAD));
    }

    #[test]
    fn test_full_unit_equal_rates_is_normal() {
        let env = Env::default();
        let verdict = evaluate(&env, WAD, &RateRead::Value(BASELINE), BASELINE, &thresholds());
        assert_eq!(verdict, Verdict::Normal(WAD));
    }

    #[test]
    fn test_equal_rates_always_normal() {
        let env = Env::default();
        for quantity in [1u128, 100, 9_999_999, 10_000_000, 10u128.pow(12), WAD, 10u128.pow(27)] {
            let verdict = evaluate(&env, quantity, &RateRead::Value(BASELINE), BASELINE, &thresholds());
            assert_eq!(verdict, Verdict::Normal(WAD), "quantity {}", quantity);
        }
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let env = Env::default();
        let cases = [
            (1u128, RateRead::Value(5_162_271 * WAD)),
            (9_999_999, RateRead::Reverted),
            (10_000_001, RateRead::Reverted),
            (30_000_000, RateRead::Value(BASELINE + BASELINE / 100)),
            (WAD, RateRead::Value(BASELINE)),
        ];
        for (quantity, read) in cases {
            let first = evaluate(&env, quantity, &read, BASELINE, &thresholds());
            let second = evaluate(&env, quantity, &read, BASELINE, &thresholds());
            assert_eq!(first, second);
        }
    }

    // === Degenerate inputs ===

    #[test]
    fn test_zero_baseline_does_not_panic() {
        let env = Env::default();
        let verdict = evaluate(&env, 1, &RateRead::Value(WAD), 0, &thresholds());
        assert_eq!(verdict, Verdict::DustInflated(u128::MAX, 1));

        let verdict = evaluate(&env, WAD, &RateRead::Value(0), 0, &thresholds());
        assert_eq!(verdict, Verdict::Normal(0));
    }

    #[test]
    fn test_huge_quantity_saturates_evidence() {
        let env = Env::default();
        let verdict = evaluate(&env, u128::MAX, &RateRead::Value(BASELINE), BASELINE, &thresholds());
        assert_eq!(verdict, Verdict::Normal(WAD));
    }

    // === Batches ===

    #[test]
    fn test_evaluate_batch_tallies_verdicts() {
        let env = Env::default();
        let probes = vec![
            &env,
            Probe::new(1, RateRead::Value(5_162_271 * WAD)),
            Probe::new(9_999_999, RateRead::Reverted),
            Probe::new(10_000_000, RateRead::Value(BASELINE)),
            Probe::new(10_000_001, RateRead::Reverted),
            Probe::new(WAD, RateRead::Value(BASELINE)),
        ];

        let report = evaluate_batch(&env, &probes, BASELINE, &thresholds());

        assert_eq!(report.probes, 5);
        assert_eq!(report.dust_inflated, 1);
        assert_eq!(report.reverted, 1);
        assert_eq!(report.unexpected_revert, 1);
        assert_eq!(report.normal, 2);
        assert_eq!(report.max_dust_voting_power, 5_162_271);
        assert_eq!(report.threat_level, Severity::Critical);
        assert_eq!(report.findings.len(), 2);
        assert!(!report.passed);
    }
}
