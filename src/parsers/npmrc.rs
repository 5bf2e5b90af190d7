//! npm-style registry ini parser.
//!
//! Registry auth lines (`//registry.npmjs.org/:_authToken=...`) carry a
//! fixed risk rather than funneling through the age scorer: a registry
//! token is equally abusable whether it was written yesterday or three
//! years ago.

use super::SourceParser;
use crate::classifier;
use crate::model::{CredentialEntry, CredentialKind, ScannedFile, SourceKind};

const REAL_RISK: u8 = 7;
const PLACEHOLDER_RISK: u8 = 3;

const AUTH_MARKERS: &[&str] = &["_authToken", "_password", "_auth"];

pub struct NpmrcParser;

impl SourceParser for NpmrcParser {
    fn handles(&self, source: SourceKind) -> bool {
        source == SourceKind::NpmConfig
    }

    fn parse(&self, file: &ScannedFile) -> Vec<CredentialEntry> {
        let Some(content) = file.content.as_deref() else {
            return Vec::new();
        };

        let mut entries = Vec::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            if !AUTH_MARKERS.iter().any(|m| line.contains(m)) {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim().trim_end_matches(':');
            let value = value.trim().trim_matches('"');

            let has_value = classifier::has_real_value(value);
            let (risk, risk_reason) = if has_value {
                (REAL_RISK, "Registry auth token with real value".to_string())
            } else {
                (PLACEHOLDER_RISK, "Placeholder/empty value".to_string())
            };

            entries.push(CredentialEntry {
                name: key.to_string(),
                location: file.location.clone(),
                kind: CredentialKind::Token,
                source: file.source,
                risk,
                risk_reason,
                last_modified: file.last_modified,
                age_days: file.age_days,
                has_value,
                masked_value: has_value.then(|| classifier::mask_value(value)),
            });
        }
        entries
    }
}
