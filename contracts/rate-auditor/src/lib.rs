#![no_std]

mod calculator;
mod certora_specs;
mod invariants;


use audit_math::{abs_diff, evaluate, evaluate_batch, voting_power};
use audit_types::{
    AuditReport, BalanceCheck, Finding, LpPool, PriceSnapshot, Probe, RateRead, ThresholdSet,
    Verdict, WAD,
};
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, log, panic_with_error, Address, Env,
    Symbol, Vec,
};

#[contract]
pub struct RateAuditor;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AuditError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidThresholds = 3,
    BaselineUnavailable = 4,
    TooManyProbes = 5,
}

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    /// Vote calculator under audit
    Calculator,
    /// Active ThresholdSet
    Thresholds,
}

/// Maximum quantities per sweep.
/// Each probe costs one cross-contract read; 50 keeps a sweep well inside
/// Soroban's per-transaction read budget.
pub const MAX_PROBES_PER_SWEEP: u32 = 50;

/// Rounding tolerance (wei of SQUID) when reconciling voter balances
pub const BALANCE_TOLERANCE: u128 = 1;

/// Dust quantities from the audit plan. A dust sweep follows them with the
/// neighbourhood of the configured threshold and one full LP.
pub const DUST_PROBE_QUANTITIES: [u128; 5] = [1, 100, 1_000, 1_000_000, 5_000_000];

const INSTANCE_TTL_THRESHOLD: u32 = 17280;
const INSTANCE_TTL_EXTEND: u32 = 518400;

#[contractimpl]
impl RateAuditor {
    /// Initialize auditor against a calculator.
    /// `None` thresholds fall back to the defaults (10M wei, 100x, 0.01%).
    pub fn initialize(
        env: Env,
        admin: Address,
        calculator: Address,
        thresholds: Option<ThresholdSet>,
    ) {
        if env.storage().instance().has(&DataKey::Admin) {
            panic_with_error!(&env, AuditError::AlreadyInitialized);
        }
        admin.require_auth();

        let thresholds = thresholds.unwrap_or_default();
        if !thresholds.is_valid() {
            panic_with_error!(&env, AuditError::InvalidThresholds);
        }

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Calculator, &calculator);
        env.storage().instance().set(&DataKey::Thresholds, &thresholds);
        extend_instance_ttl(&env);
    }

    /// Replace the alarm thresholds
    pub fn set_thresholds(env: Env, thresholds: ThresholdSet) {
        get_admin(&env).require_auth();

        if !thresholds.is_valid() {
            panic_with_error!(&env, AuditError::InvalidThresholds);
        }

        env.storage().instance().set(&DataKey::Thresholds, &thresholds);
        extend_instance_ttl(&env);
    }

    pub fn get_thresholds(env: Env) -> ThresholdSet {
        get_thresholds(&env)
    }

    pub fn get_calculator(env: Env) -> Address {
        get_calculator(&env)
    }

    pub fn get_admin(env: Env) -> Address {
        get_admin(&env)
    }

    // === Probing ===

    /// Baseline rate: SQUID per LP at one full LP unit
    pub fn baseline(env: Env, pool: LpPool) -> u128 {
        let calculator = get_calculator(&env);
        require_baseline(&env, &calculator, pool)
    }

    /// Fallible rate read at `quantity` wei
    pub fn read_rate(env: Env, pool: LpPool, quantity: u128) -> RateRead {
        let calculator = get_calculator(&env);
        calculator::read_rate(&env, &calculator, pool, quantity)
    }

    /// Probe one quantity and classify the rate it returns
    pub fn probe(env: Env, pool: LpPool, quantity: u128) -> Verdict {
        let calculator = get_calculator(&env);
        let thresholds = get_thresholds(&env);
        let baseline = require_baseline(&env, &calculator, pool);

        let read = calculator::read_rate(&env, &calculator, pool, quantity);
        let verdict = evaluate(&env, quantity, &read, baseline, &thresholds);

        log!(&env, "probe", pool, quantity, verdict.clone());
        if verdict.is_finding() {
            publish_finding(
                &env,
                pool,
                &Finding {
                    quantity,
                    verdict: verdict.clone(),
                },
            );
        }

        verdict
    }

    /// Probe a batch of quantities against one baseline
    pub fn sweep(env: Env, pool: LpPool, quantities: Vec<u128>) -> AuditReport {
        if quantities.len() > MAX_PROBES_PER_SWEEP {
            panic_with_error!(&env, AuditError::TooManyProbes);
        }
        run_sweep(&env, pool, quantities.iter())
    }

    /// Standard dust-attack sweep: the planned dust amounts, one wei below
    /// the dust threshold, the threshold itself, one wei above, and one full LP
    pub fn dust_sweep(env: Env, pool: LpPool) -> AuditReport {
        let threshold = get_thresholds(&env).dust_threshold;
        let boundary = [
            threshold - 1,
            threshold,
            threshold.saturating_add(1),
            WAD,
        ];
        run_sweep(
            &env,
            pool,
            DUST_PROBE_QUANTITIES.into_iter().chain(boundary),
        )
    }

    // === Oracle ===

    /// Current USD prices as seen through the calculator
    pub fn oracle_snapshot(env: Env) -> PriceSnapshot {
        let calculator = get_calculator(&env);
        let snapshot = PriceSnapshot {
            eth: calculator::read_price(&env, &calculator, "eth_price"),
            squid: calculator::read_price(&env, &calculator, "squid_price"),
            squill: calculator::read_price(&env, &calculator, "squill_price"),
        };

        if !snapshot.is_complete() {
            log!(&env, "price feed unavailable", snapshot.clone());
        }
        snapshot
    }

    // === Balances ===

    /// Recompute a voter's LP-in-SQUID from the probed rate and compare it
    /// with what the calculator credits
    pub fn reconcile_balance(env: Env, pool: LpPool, voter: Address) -> BalanceCheck {
        let calculator = get_calculator(&env);
        let thresholds = get_thresholds(&env);

        let lp_balance = calculator::lp_balance(&env, &calculator, pool, &voter);

        let recomputed = if lp_balance == 0 || thresholds.is_dust(lp_balance) {
            0
        } else {
            match calculator::read_rate(&env, &calculator, pool, lp_balance) {
                RateRead::Value(rate) => voting_power(&env, lp_balance, rate),
                RateRead::Reverted => 0,
            }
        };

        let check = match calculator::lp_balance_in_squid(&env, &calculator, pool, &voter) {
            Some(reported) => BalanceCheck {
                voter,
                lp_balance,
                reported,
                recomputed,
                consistent: abs_diff(reported, recomputed) <= BALANCE_TOLERANCE,
                calculator_reverted: false,
            },
            None => BalanceCheck {
                voter,
                lp_balance,
                reported: 0,
                recomputed,
                consistent: false,
                calculator_reverted: true,
            },
        };

        if !check.consistent {
            log!(
                &env,
                "balance mismatch",
                pool,
                check.reported,
                check.recomputed,
                check.calculator_reverted
            );
        }
        check
    }
}

fn run_sweep<I>(env: &Env, pool: LpPool, quantities: I) -> AuditReport
where
    I: Iterator<Item = u128>,
{
    let calculator = get_calculator(env);
    let thresholds = get_thresholds(env);
    let baseline = require_baseline(env, &calculator, pool);

    let mut probes: Vec<Probe> = Vec::new(env);
    for quantity in quantities {
        let read = calculator::read_rate(env, &calculator, pool, quantity);
        probes.push_back(Probe::new(quantity, read));
    }

    let report = evaluate_batch(env, &probes, baseline, &thresholds);
    debug_assert!(invariants::report_consistent(&report));

    for finding in report.findings.iter() {
        publish_finding(env, pool, &finding);
    }

    log!(env, "sweep", pool, report.probes, report.passed);
    report
}

fn require_baseline(env: &Env, calculator: &Address, pool: LpPool) -> u128 {
    match calculator::read_rate(env, calculator, pool, WAD) {
        RateRead::Value(rate) if rate > 0 => rate,
        _ => panic_with_error!(env, AuditError::BaselineUnavailable),
    }
}

fn publish_finding(env: &Env, pool: LpPool, finding: &Finding) {
    env.events().publish(
        (Symbol::new(env, "finding"), pool),
        (finding.quantity, finding.verdict.severity(), finding.verdict.clone()),
    );
}

fn get_admin(env: &Env) -> Address {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .unwrap_or_else(|| panic_with_error!(env, AuditError::NotInitialized))
}

fn get_calculator(env: &Env) -> Address {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&DataKey::Calculator)
        .unwrap_or_else(|| panic_with_error!(env, AuditError::NotInitialized))
}

fn get_thresholds(env: &Env) -> ThresholdSet {
    env.storage()
        .instance()
        .get(&DataKey::Thresholds)
        .unwrap_or_else(|| panic_with_error!(env, AuditError::NotInitialized))
}

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}
