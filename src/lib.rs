//! credsweep: discover credential material scattered across a
//! filesystem, classify each finding by type and risk, and flag
//! exposure conditions like git-tracked secrets and world-readable
//! keys.
//!
//! The classification core is pure and registry-driven: parsers extract
//! key/value candidates per format, the classifier decides kind and
//! value presence against static pattern tables, and the scorer turns
//! base risk, value presence, and file age into an explainable 1-10
//! score. Traversal, rendering, and fix suggestions are collaborators
//! around that core.

pub mod aggregate;
pub mod classifier;
pub mod cli;
pub mod error;
pub mod exposure;
pub mod fixer;
pub mod model;
pub mod parsers;
pub mod registry;
pub mod reporter;
pub mod scanner;
pub mod scoring;

pub use cli::{Cli, OutputFormat};
pub use error::{Result, ScanError};
pub use fixer::{suggest_fixes, FixSuggestion};
pub use model::{
    CredentialEntry, CredentialKind, Exposure, ExposureKind, ScanResult, ScannedFile, Severity,
    SourceKind,
};
pub use reporter::{JsonReporter, Reporter, TerminalReporter};
pub use scanner::{run_scan, ScanConfig};
