// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Rules for the rate auditor's classification logic.
//
// - detector_specs.rs : Per-probe verdict properties
// - report_specs.rs   : Aggregation properties over a batch
//
// Each rules module also carries plain unit tests exercising the same
// properties on concrete values, so the claims are checked without the
// prover.
//
// USAGE:
// - Unit tests: cargo test -p rate-auditor
// - Certora build: cargo build --features certora -p rate-auditor
//
// ============================================================================

pub mod detector_specs;
pub mod report_specs;
