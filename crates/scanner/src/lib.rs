//! Secret detection engine - scan staged files for credential-like patterns
//!
//! The engine evaluates an ordered registry of named regex rules against
//! file contents and reduces matches to reportable findings. Known
//! limitation, kept on purpose: only the first (non-excluded) occurrence
//! of each rule per file is reported, not every occurrence.

#![warn(clippy::all)]

pub mod engine;
pub mod report;
pub mod rules;

pub use engine::{scan_content, scan_files};
pub use report::{print_report, Finding, ScanReport};
pub use rules::{builtin_rules, registry, DetectionRule};
