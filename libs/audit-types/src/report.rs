use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::{Severity, Verdict};

/// A probe that produced a finding
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Finding {
    pub quantity: u128,
    pub verdict: Verdict,
}

/// Aggregated result of a batch of probes against one pool
#[contracttype]
#[derive(Clone, Debug)]
pub struct AuditReport {
    /// Number of probes evaluated
    pub probes: u32,
    pub normal: u32,
    pub dust_inflated: u32,
    pub precision_loss: u32,
    pub reverted: u32,
    pub unexpected_revert: u32,
    /// Highest severity observed
    pub threat_level: Severity,
    /// Largest inflation factor observed on any probe that returned a rate
    pub max_inflation_factor: u128,
    /// Largest voting power obtained from a dust-inflated probe
    pub max_dust_voting_power: u128,
    /// Probes with severity above Info, in evaluation order
    pub findings: Vec<Finding>,
    /// True when no finding was recorded
    pub passed: bool,
}

impl AuditReport {
    pub fn new(env: &Env) -> Self {
        Self {
            probes: 0,
            normal: 0,
            dust_inflated: 0,
            precision_loss: 0,
            reverted: 0,
            unexpected_revert: 0,
            threat_level: Severity::Info,
            max_inflation_factor: 0,
            max_dust_voting_power: 0,
            findings: Vec::new(env),
            passed: true,
        }
    }

    /// Fold one verdict into the report
    pub fn record(&mut self, quantity: u128, verdict: &Verdict) {
        self.probes += 1;

        match verdict {
            Verdict::Normal(_) => self.normal += 1,
            Verdict::DustInflated(_, voting_power) => {
                self.dust_inflated += 1;
                if *voting_power > self.max_dust_voting_power {
                    self.max_dust_voting_power = *voting_power;
                }
            }
            Verdict::PrecisionLoss(_) => self.precision_loss += 1,
            Verdict::Reverted => self.reverted += 1,
            Verdict::UnexpectedRevert => self.unexpected_revert += 1,
        }

        if let Some(factor) = verdict.inflation_factor() {
            if factor > self.max_inflation_factor {
                self.max_inflation_factor = factor;
            }
        }

        let severity = verdict.severity();
        if severity > self.threat_level {
            self.threat_level = severity;
        }

        if verdict.is_finding() {
            self.findings.push_back(Finding {
                quantity,
                verdict: verdict.clone(),
            });
            self.passed = false;
        }
    }
}

/// USD price feeds as read through the calculator (WAD-scaled).
/// `None` means the feed reverted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PriceSnapshot {
    pub eth: Option<u128>,
    pub squid: Option<u128>,
    pub squill: Option<u128>,
}

impl PriceSnapshot {
    pub fn is_complete(&self) -> bool {
        self.eth.is_some() && self.squid.is_some() && self.squill.is_some()
    }
}

/// Recomputation of a voter's LP holdings in SQUID against the calculator's figure
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BalanceCheck {
    pub voter: Address,
    /// LP balance in wei
    pub lp_balance: u128,
    /// SQUID equivalent reported by the calculator
    pub reported: u128,
    /// SQUID equivalent recomputed from the probed rate
    pub recomputed: u128,
    /// Reported and recomputed agree within rounding tolerance
    pub consistent: bool,
    /// The calculator reverted while pricing the balance; `reported` is 0
    pub calculator_reverted: bool,
}
