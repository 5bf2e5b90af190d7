//! Format-specific extraction of credential candidates.
//!
//! Each parser turns the raw content of one scanned file into zero or
//! more classified, scored entries. Dispatch is by [`SourceKind`]; the
//! first parser that handles a file's source wins.

mod env;
mod git_credentials;
mod keyfile;
mod npmrc;
mod object;

pub use env::EnvParser;
pub use git_credentials::GitCredentialsParser;
pub use keyfile::KeyFileParser;
pub use npmrc::NpmrcParser;
pub use object::ObjectParser;

use crate::classifier::Classification;
use crate::model::{CredentialEntry, ScannedFile, SourceKind};
use crate::scoring;
use std::sync::LazyLock;

pub trait SourceParser: Send + Sync {
    /// Whether this parser understands files of the given source kind.
    fn handles(&self, source: SourceKind) -> bool;

    /// Extract credential candidates from one file.
    fn parse(&self, file: &ScannedFile) -> Vec<CredentialEntry>;
}

static PARSERS: LazyLock<Vec<Box<dyn SourceParser>>> = LazyLock::new(|| {
    vec![
        Box::new(EnvParser),
        Box::new(ObjectParser),
        Box::new(NpmrcParser),
        Box::new(GitCredentialsParser),
        Box::new(KeyFileParser),
    ]
});

/// Parse one file with the parser responsible for its source kind.
/// Files with no matching parser contribute nothing.
pub fn parse_file(file: &ScannedFile) -> Vec<CredentialEntry> {
    match PARSERS.iter().find(|p| p.handles(file.source)) {
        Some(parser) => parser.parse(file),
        None => Vec::new(),
    }
}

/// Build a scored entry from a classification. Shape-matched values
/// bypass the age-aware scorer and carry a fixed risk and reason.
pub(crate) fn build_entry(
    name: String,
    file: &ScannedFile,
    classification: &Classification,
) -> CredentialEntry {
    let (risk, risk_reason) = if classification.from_value_shape {
        (
            crate::classifier::VALUE_SHAPE_RISK,
            "value matches known secret pattern".to_string(),
        )
    } else {
        scoring::score(
            classification.kind,
            classification.base_risk,
            classification.has_value,
            file.age_days,
        )
    };

    CredentialEntry {
        name,
        location: file.location.clone(),
        kind: classification.kind,
        source: file.source,
        risk,
        risk_reason,
        last_modified: file.last_modified,
        age_days: file.age_days,
        has_value: classification.has_value,
        masked_value: classification.masked_value.clone(),
    }
}
