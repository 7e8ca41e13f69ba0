#![no_std]

mod probe;
mod report;
mod thresholds;
mod verdict;

pub use probe::*;
pub use report::*;
pub use thresholds::*;
pub use verdict::*;

/// Fixed-point scale (10^18) for rates, prices and ratios
pub const WAD: u128 = 1_000_000_000_000_000_000;

/// Minimum LP quantity (in wei) the calculator is expected to price.
/// Anything below is dust and should revert or count for nothing.
pub const DUST_THRESHOLD: u128 = 10_000_000;

/// Default inflation alarm: probe rate more than 100x the baseline (WAD-scaled)
pub const DEFAULT_INFLATION_ALARM_FACTOR: u128 = 100 * WAD;

/// Default precision loss alarm: 0.01% (WAD-scaled percent)
pub const DEFAULT_PRECISION_LOSS_ALARM_PCT: u128 = WAD / 100;

/// One hundred percent, WAD-scaled
pub const HUNDRED_PCT: u128 = 100 * WAD;
