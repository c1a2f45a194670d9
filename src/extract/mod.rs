//! Per-scanner field extractors.
//!
//! Each scanner module maps one loosely-typed raw record to a
//! [`NormalizedFinding`](crate::findings::NormalizedFinding) through an
//! explicit ordered list of candidate fields with a typed default, so a
//! renamed or missing field degrades to a placeholder value instead of
//! dropping the record. Scanners are independent of each other; a new
//! format is a new module plus one pipeline entry in the composer.

pub mod fields;

pub mod bandit;
pub mod gitleaks;
pub mod grype;
pub mod nuclei;
pub mod semgrep;
pub mod trivy;
