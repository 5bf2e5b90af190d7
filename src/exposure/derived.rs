//! Exposures derived purely from already-collected scan data.

use crate::model::{
    CredentialEntry, CredentialKind, Exposure, ExposureKind, ScannedFile, Severity, SourceKind,
};
use crate::scoring::STALE_AGE_DAYS;

/// One exposure per credential-store file that yielded at least one URL
/// credential: the store holds live passwords in plaintext by design.
pub fn plaintext_password_exposures(
    files: &[ScannedFile],
    credentials: &[CredentialEntry],
) -> Vec<Exposure> {
    files
        .iter()
        .filter(|f| f.source == SourceKind::GitCredentials)
        .filter(|f| credentials.iter().any(|c| c.location == f.location))
        .map(|f| Exposure {
            kind: ExposureKind::PlaintextPassword,
            location: f.location.clone(),
            description: format!("{} stores passwords in plaintext", f.location),
            severity: Severity::High,
        })
        .collect()
}

/// Medium-severity exposure for each token or API key with a real value
/// that has sat unrotated past the staleness threshold.
pub fn expired_token_exposures(credentials: &[CredentialEntry]) -> Vec<Exposure> {
    credentials
        .iter()
        .filter(|c| matches!(c.kind, CredentialKind::Token | CredentialKind::ApiKey))
        .filter(|c| c.has_value && c.age_days > STALE_AGE_DAYS)
        .map(|c| Exposure {
            kind: ExposureKind::ExpiredToken,
            location: c.location.clone(),
            description: format!("{} not rotated in {} days", c.name, c.age_days),
            severity: Severity::Medium,
        })
        .collect()
}
