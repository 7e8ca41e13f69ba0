use soroban_sdk::contracttype;

use crate::{DEFAULT_INFLATION_ALARM_FACTOR, DEFAULT_PRECISION_LOSS_ALARM_PCT, DUST_THRESHOLD};

/// Alarm thresholds for the rate anomaly detector
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ThresholdSet {
    /// Quantities strictly below this (wei) are dust
    pub dust_threshold: u128,
    /// Probe/baseline ratio above which a dust probe is inflated (WAD-scaled)
    pub inflation_alarm_factor: u128,
    /// Voting power deviation above which precision loss is reported
    /// (WAD-scaled percent, so 0.01% is WAD / 100)
    pub precision_loss_alarm_pct: u128,
}

impl ThresholdSet {
    pub fn new(
        dust_threshold: u128,
        inflation_alarm_factor: u128,
        precision_loss_alarm_pct: u128,
    ) -> Self {
        Self {
            dust_threshold,
            inflation_alarm_factor,
            precision_loss_alarm_pct,
        }
    }

    /// A zero dust threshold or alarm factor makes every probe ambiguous
    pub fn is_valid(&self) -> bool {
        self.dust_threshold > 0 && self.inflation_alarm_factor > 0
    }

    pub fn is_dust(&self, quantity: u128) -> bool {
        quantity < self.dust_threshold
    }
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self::new(
            DUST_THRESHOLD,
            DEFAULT_INFLATION_ALARM_FACTOR,
            DEFAULT_PRECISION_LOSS_ALARM_PCT,
        )
    }
}
