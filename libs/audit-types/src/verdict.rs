use soroban_sdk::contracttype;

/// Classification of a single probe.
///
/// Ratios carried as evidence are WAD-scaled: an inflation factor of
/// `WAD` means the probe rate equals the baseline rate, and a loss of
/// `WAD` means a 1% deviation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Verdict {
    /// Nothing anomalous; carries the inflation factor (0 for a zero quantity)
    Normal(u128),
    /// Dust probe priced far above the baseline: (inflation factor, voting power)
    DustInflated(u128, u128),
    /// Voting power drifts from the linear projection: loss percent
    PrecisionLoss(u128),
    /// Read reverted for a dust quantity (the protected path)
    Reverted,
    /// Read reverted for a quantity the calculator should price
    UnexpectedRevert,
}

/// How bad a verdict is, ordered from harmless to critical
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Medium,
    High,
    Critical,
}

impl Verdict {
    pub fn severity(&self) -> Severity {
        match self {
            Verdict::Normal(_) | Verdict::Reverted => Severity::Info,
            Verdict::PrecisionLoss(_) => Severity::Medium,
            Verdict::UnexpectedRevert => Severity::High,
            Verdict::DustInflated(_, _) => Severity::Critical,
        }
    }

    /// True if the verdict should be surfaced as an audit finding
    pub fn is_finding(&self) -> bool {
        self.severity() > Severity::Info
    }

    /// Inflation factor evidence, if the verdict carries one
    pub fn inflation_factor(&self) -> Option<u128> {
        match self {
            Verdict::Normal(factor) | Verdict::DustInflated(factor, _) => Some(*factor),
            _ => None,
        }
    }
}
