//! Core data model shared by the scanner, parsers, and reporters.
//!
//! Everything here is semantic data only. Colors, emoji, and other
//! presentation concerns live in the reporter layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// What kind of credential a finding represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CredentialKind {
    ApiKey,
    Token,
    Password,
    Secret,
    PrivateKey,
    ConnectionString,
    CloudCredential,
    EncryptedFile,
}

impl CredentialKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialKind::ApiKey => "api-key",
            CredentialKind::Token => "token",
            CredentialKind::Password => "password",
            CredentialKind::Secret => "secret",
            CredentialKind::PrivateKey => "private-key",
            CredentialKind::ConnectionString => "connection-string",
            CredentialKind::CloudCredential => "cloud-credential",
            CredentialKind::EncryptedFile => "encrypted-file",
        }
    }
}

impl std::fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The file format a credential was extracted from. Drives parser dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    EnvFile,
    ShellConfig,
    JsonConfig,
    NpmConfig,
    GitCredentials,
    CloudConfig,
    SshKey,
    EncryptedFile,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::EnvFile => "env-file",
            SourceKind::ShellConfig => "shell-config",
            SourceKind::JsonConfig => "json-config",
            SourceKind::NpmConfig => "npm-config",
            SourceKind::GitCredentials => "git-credentials",
            SourceKind::CloudConfig => "cloud-config",
            SourceKind::SshKey => "ssh-key",
            SourceKind::EncryptedFile => "encrypted-file",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExposureKind {
    GitTracked,
    WorldReadable,
    NoGitignore,
    PlaintextPassword,
    ExpiredToken,
}

impl ExposureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExposureKind::GitTracked => "git-tracked",
            ExposureKind::WorldReadable => "world-readable",
            ExposureKind::NoGitignore => "no-gitignore",
            ExposureKind::PlaintextPassword => "plaintext-password",
            ExposureKind::ExpiredToken => "expired-token",
        }
    }
}

/// A single detected credential, risk-scored and masked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialEntry {
    pub name: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: CredentialKind,
    pub source: SourceKind,
    /// Final risk score, 1-10.
    pub risk: u8,
    pub risk_reason: String,
    pub last_modified: DateTime<Utc>,
    pub age_days: u64,
    pub has_value: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub masked_value: Option<String>,
}

impl CredentialEntry {
    /// Copy of this entry with the git-tracked escalation applied.
    ///
    /// This is the only place a score changes after initial scoring; the
    /// original entry is left untouched so escalation stays a rebuild,
    /// not a mutation.
    pub fn escalated(&self) -> Self {
        let mut entry = self.clone();
        entry.risk = (entry.risk + 2).min(10);
        entry.risk_reason.push_str(" [GIT-TRACKED]");
        entry
    }
}

/// A filesystem or VCS condition that elevates leak risk, independent of
/// any credential's intrinsic score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exposure {
    #[serde(rename = "type")]
    pub kind: ExposureKind,
    pub location: String,
    pub description: String,
    pub severity: Severity,
}

/// One file handed to the parsing core by the traversal layer.
///
/// `content` is `None` when the file could not be read; oversized files
/// arrive with empty content instead. `mode` is only populated for home
/// key locations where permission bits matter.
#[derive(Debug, Clone)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub location: String,
    pub source: SourceKind,
    pub last_modified: DateTime<Utc>,
    pub age_days: u64,
    pub content: Option<String>,
    pub mode: Option<u32>,
}

/// Final aggregate handed to reporters. Built once, read-only afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub scan_time: String,
    pub scan_duration_ms: u64,
    pub root_dir: String,
    pub total_found: usize,
    /// Count of credentials with risk >= 7, recomputed from the final list.
    pub high_risk: usize,
    pub credentials: Vec<CredentialEntry>,
    pub exposures: Vec<Exposure>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(risk: u8) -> CredentialEntry {
        CredentialEntry {
            name: "API_KEY".to_string(),
            location: "/tmp/.env".to_string(),
            kind: CredentialKind::ApiKey,
            source: SourceKind::EnvFile,
            risk,
            risk_reason: "api-key with real value".to_string(),
            last_modified: Utc::now(),
            age_days: 0,
            has_value: true,
            masked_value: Some("sk-1**********cdef".to_string()),
        }
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(format!("{}", Severity::Critical), "CRITICAL");
        assert_eq!(format!("{}", Severity::Low), "LOW");
    }

    #[test]
    fn test_kind_serialization_is_kebab_case() {
        let json = serde_json::to_string(&CredentialKind::ConnectionString).unwrap();
        assert_eq!(json, "\"connection-string\"");
        let json = serde_json::to_string(&ExposureKind::GitTracked).unwrap();
        assert_eq!(json, "\"git-tracked\"");
        let json = serde_json::to_string(&SourceKind::EncryptedFile).unwrap();
        assert_eq!(json, "\"encrypted-file\"");
    }

    #[test]
    fn test_entry_serializes_wire_field_names() {
        let json = serde_json::to_string(&entry(8)).unwrap();
        assert!(json.contains("\"type\":\"api-key\""));
        assert!(json.contains("\"riskReason\""));
        assert!(json.contains("\"ageDays\""));
        assert!(json.contains("\"hasValue\""));
        assert!(json.contains("\"maskedValue\""));
        assert!(json.contains("\"lastModified\""));
    }

    #[test]
    fn test_masked_value_omitted_when_absent() {
        let mut e = entry(4);
        e.has_value = false;
        e.masked_value = None;
        let json = serde_json::to_string(&e).unwrap();
        assert!(!json.contains("maskedValue"));
    }

    #[test]
    fn test_escalated_adds_two_capped_at_ten() {
        let e = entry(7).escalated();
        assert_eq!(e.risk, 9);
        assert!(e.risk_reason.ends_with("[GIT-TRACKED]"));

        let e = entry(9).escalated();
        assert_eq!(e.risk, 10);

        let e = entry(10).escalated();
        assert_eq!(e.risk, 10);
    }

    #[test]
    fn test_escalated_does_not_mutate_original() {
        let original = entry(7);
        let _ = original.escalated();
        assert_eq!(original.risk, 7);
        assert!(!original.risk_reason.contains("GIT-TRACKED"));
    }
}
