//! Remediation suggestions generated from scan results.
//!
//! The core never embeds shell commands in its own data; this module is
//! the one place findings turn into actionable text.

use crate::model::{ExposureKind, ScanResult, SourceKind};
use crate::scoring::STALE_AGE_DAYS;
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct FixSuggestion {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    pub detail: String,
}

/// Generate suggestions for every exposure and for credential patterns
/// with a known remediation.
pub fn suggest_fixes(result: &ScanResult) -> Vec<FixSuggestion> {
    let mut suggestions = Vec::new();

    for exposure in &result.exposures {
        suggestions.push(match exposure.kind {
            ExposureKind::GitTracked => FixSuggestion {
                title: format!("Untrack {}", exposure.location),
                command: Some(format!("git rm --cached {}", exposure.location)),
                detail: "Remove the file from the index, then rotate every credential it \
                         contains; git history still holds the old values."
                    .to_string(),
            },
            ExposureKind::NoGitignore => {
                let dir = Path::new(&exposure.location)
                    .parent()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| ".".to_string());
                FixSuggestion {
                    title: format!("Ignore env files near {}", exposure.location),
                    command: Some(format!("printf '.env*\\n' >> {dir}/.gitignore")),
                    detail: "Add an ignore rule before the file is ever staged.".to_string(),
                }
            }
            ExposureKind::WorldReadable => FixSuggestion {
                title: format!("Restrict permissions on {}", exposure.location),
                command: Some(format!("chmod 600 {}", exposure.location)),
                detail: "Private keys must be readable by the owner only.".to_string(),
            },
            ExposureKind::PlaintextPassword => FixSuggestion {
                title: format!("Replace plaintext store {}", exposure.location),
                command: Some("git config --global credential.helper cache".to_string()),
                detail: "Switch to a caching or OS-keychain credential helper and delete \
                         the plaintext store."
                    .to_string(),
            },
            ExposureKind::ExpiredToken => FixSuggestion {
                title: format!("Rotate stale credential in {}", exposure.location),
                command: None,
                detail: exposure.description.clone(),
            },
        });
    }

    // One consolidation hint per env file holding real values.
    let env_locations: BTreeSet<&str> = result
        .credentials
        .iter()
        .filter(|c| c.source == SourceKind::EnvFile && c.has_value)
        .map(|c| c.location.as_str())
        .collect();
    for location in env_locations {
        suggestions.push(FixSuggestion {
            title: format!("Move secrets out of {location}"),
            command: None,
            detail: "Load these values from a secret manager or injected environment \
                     instead of a file on disk."
                .to_string(),
        });
    }

    // Rotation reminders for anything older than the staleness threshold.
    for credential in &result.credentials {
        if credential.has_value && credential.age_days > STALE_AGE_DAYS {
            suggestions.push(FixSuggestion {
                title: format!("Rotate {}", credential.name),
                command: None,
                detail: format!(
                    "{} was last modified {} days ago.",
                    credential.name, credential.age_days
                ),
            });
        }
    }

    suggestions
}
