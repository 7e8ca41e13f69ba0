use soroban_sdk::contracttype;

/// LP pool whose SQUID equivalence rate is being probed
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LpPool {
    /// SQUID/ETH pool (Curve-style, guards dust withdrawals)
    SquidEth,
    /// SQUID/SQUILL pool
    SquidSquill,
}

/// Outcome of a read-only rate call against the calculator.
/// A revert is data, not an error of the caller.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RateRead {
    /// The call returned a rate (SQUID per LP, WAD-scaled)
    Value(u128),
    /// The call reverted
    Reverted,
}

impl RateRead {
    pub fn from_option(value: Option<u128>) -> Self {
        match value {
            Some(rate) => RateRead::Value(rate),
            None => RateRead::Reverted,
        }
    }

    pub fn is_reverted(&self) -> bool {
        matches!(self, RateRead::Reverted)
    }
}

/// A quantity under test together with what the calculator answered for it
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Probe {
    /// LP amount in wei passed to the equivalence function
    pub quantity: u128,
    /// Rate returned for that amount
    pub read: RateRead,
}

impl Probe {
    pub fn new(quantity: u128, read: RateRead) -> Self {
        Self { quantity, read }
    }
}
