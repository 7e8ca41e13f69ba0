// ============================================================================
// AUDIT INVARIANTS
// ============================================================================
//
// Properties every verdict and report produced by the auditor must satisfy.
// Checked in debug builds after each sweep and reused by the formal
// verification rules.
//
// 1. VERDICT INVARIANTS
//    - Dust inflation and protected reverts only occur below the threshold
//    - Unexpected reverts only occur at or above it
//    - A zero quantity that returned a rate is always Normal(0)
//
// 2. REPORT INVARIANTS
//    - Verdict counters sum to the probe count
//    - A report passes exactly when it holds no finding
//    - A passing report has threat level Info
//
// ============================================================================

use audit_types::{AuditReport, Severity, ThresholdSet, Verdict};

// ============================================================================
// VERDICT INVARIANTS
// ============================================================================

/// Invariant: the verdict agrees with which side of the dust threshold
/// the quantity is on
pub fn verdict_matches_quantity(thresholds: &ThresholdSet, quantity: u128, verdict: &Verdict) -> bool {
    match verdict {
        Verdict::DustInflated(_, _) | Verdict::Reverted => thresholds.is_dust(quantity),
        Verdict::UnexpectedRevert => !thresholds.is_dust(quantity),
        Verdict::Normal(_) | Verdict::PrecisionLoss(_) => true,
    }
}

/// Invariant: a zero quantity that returned a rate carries no evidence
pub fn zero_quantity_is_inert(quantity: u128, reverted: bool, verdict: &Verdict) -> bool {
    quantity != 0 || reverted || *verdict == Verdict::Normal(0)
}

// ============================================================================
// REPORT INVARIANTS
// ============================================================================

/// Invariant: counters sum to probes
pub fn report_counts_consistent(report: &AuditReport) -> bool {
    let total = report.normal as u64
        + report.dust_inflated as u64
        + report.precision_loss as u64
        + report.reverted as u64
        + report.unexpected_revert as u64;
    total == report.probes as u64
}

/// Invariant: passed <=> no findings, and findings == non-info verdicts
pub fn report_passed_iff_clean(report: &AuditReport) -> bool {
    let flagged = report.dust_inflated + report.precision_loss + report.unexpected_revert;
    report.passed == report.findings.is_empty() && report.findings.len() == flagged
}

/// Invariant: threat level is Info exactly when the report passed
pub fn threat_level_consistent(report: &AuditReport) -> bool {
    report.passed == (report.threat_level == Severity::Info)
}

pub fn report_consistent(report: &AuditReport) -> bool {
    report_counts_consistent(report) && report_passed_iff_clean(report) && threat_level_consistent(report)
}
