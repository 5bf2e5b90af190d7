//! Final result assembly: dedup, sorting, and summary counts.

use crate::model::{CredentialEntry, Exposure, ScanResult};
use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use std::path::Path;
use std::time::Duration;

/// Threshold above which a credential counts as high risk.
pub const HIGH_RISK_THRESHOLD: u8 = 7;

/// Collapse duplicate findings at the same `(location, name)` key,
/// keeping the higher-risk entry. Earlier discovery wins ties, so the
/// surviving list preserves discovery order.
pub fn dedup_credentials(entries: Vec<CredentialEntry>) -> Vec<CredentialEntry> {
    let mut index: FxHashMap<(String, String), usize> = FxHashMap::default();
    let mut kept: Vec<CredentialEntry> = Vec::with_capacity(entries.len());

    for entry in entries {
        let key = (entry.location.clone(), entry.name.clone());
        match index.get(&key) {
            Some(&i) if kept[i].risk >= entry.risk => {}
            Some(&i) => kept[i] = entry,
            None => {
                index.insert(key, kept.len());
                kept.push(entry);
            }
        }
    }
    kept
}

/// Build the read-only [`ScanResult`].
///
/// Credentials sort descending by risk with a stable sort, so ties keep
/// discovery order. Exposures sort by severity rank, critical first.
/// The high-risk count is always recomputed from the final list.
pub fn assemble(
    scan_start: DateTime<Utc>,
    duration: Duration,
    root: &Path,
    mut credentials: Vec<CredentialEntry>,
    mut exposures: Vec<Exposure>,
) -> ScanResult {
    credentials.sort_by(|a, b| b.risk.cmp(&a.risk));
    exposures.sort_by(|a, b| b.severity.cmp(&a.severity));

    let total_found = credentials.len();
    let high_risk = credentials
        .iter()
        .filter(|c| c.risk >= HIGH_RISK_THRESHOLD)
        .count();

    ScanResult {
        scan_time: scan_start.to_rfc3339(),
        scan_duration_ms: duration.as_millis() as u64,
        root_dir: root.display().to_string(),
        total_found,
        high_risk,
        credentials,
        exposures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CredentialKind, ExposureKind, Severity, SourceKind};

    fn entry(name: &str, location: &str, risk: u8) -> CredentialEntry {
        CredentialEntry {
            name: name.to_string(),
            location: location.to_string(),
            kind: CredentialKind::ApiKey,
            source: SourceKind::EnvFile,
            risk,
            risk_reason: String::new(),
            last_modified: Utc::now(),
            age_days: 0,
            has_value: true,
            masked_value: None,
        }
    }

    fn exposure(severity: Severity) -> Exposure {
        Exposure {
            kind: ExposureKind::NoGitignore,
            location: "/p/.env".to_string(),
            description: String::new(),
            severity,
        }
    }

    #[test]
    fn test_dedup_keeps_higher_risk() {
        let deduped = dedup_credentials(vec![
            entry("API_KEY", "/p/.env", 4),
            entry("API_KEY", "/p/.env", 8),
        ]);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].risk, 8);
    }

    #[test]
    fn test_dedup_first_wins_on_ties() {
        let mut first = entry("API_KEY", "/p/.env", 8);
        first.risk_reason = "first".to_string();
        let mut second = entry("API_KEY", "/p/.env", 8);
        second.risk_reason = "second".to_string();

        let deduped = dedup_credentials(vec![first, second]);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].risk_reason, "first");
    }

    #[test]
    fn test_dedup_distinguishes_locations() {
        let deduped = dedup_credentials(vec![
            entry("API_KEY", "/a/.env", 8),
            entry("API_KEY", "/b/.env", 8),
        ]);
        assert_eq!(deduped.len(), 2);
    }

    #[test]
    fn test_sort_credentials_desc_stable() {
        let result = assemble(
            Utc::now(),
            Duration::from_millis(5),
            Path::new("/p"),
            vec![
                entry("LOW", "/p/.env", 3),
                entry("FIRST_HIGH", "/p/.env", 8),
                entry("SECOND_HIGH", "/p/b.env", 8),
            ],
            vec![],
        );
        assert_eq!(result.credentials[0].name, "FIRST_HIGH");
        assert_eq!(result.credentials[1].name, "SECOND_HIGH");
        assert_eq!(result.credentials[2].name, "LOW");
    }

    #[test]
    fn test_sort_exposures_by_severity_rank() {
        let result = assemble(
            Utc::now(),
            Duration::ZERO,
            Path::new("/p"),
            vec![],
            vec![
                exposure(Severity::Medium),
                exposure(Severity::Critical),
                exposure(Severity::Low),
                exposure(Severity::High),
            ],
        );
        let order: Vec<_> = result.exposures.iter().map(|e| e.severity).collect();
        assert_eq!(
            order,
            vec![
                Severity::Critical,
                Severity::High,
                Severity::Medium,
                Severity::Low
            ]
        );
    }

    #[test]
    fn test_high_risk_recomputed_from_final_list() {
        let result = assemble(
            Utc::now(),
            Duration::ZERO,
            Path::new("/p"),
            vec![
                entry("A", "/p/.env", 10),
                entry("B", "/p/.env", 7),
                entry("C", "/p/.env", 6),
            ],
            vec![],
        );
        assert_eq!(result.total_found, 3);
        assert_eq!(result.high_risk, 2);
    }
}
