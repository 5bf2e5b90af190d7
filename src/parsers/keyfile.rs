//! Key-file presence markers: SSH private keys and encrypted blobs.
//!
//! No content parsing. Existence alone yields one fixed-risk entry;
//! encrypted files score lower since the payload is only as exposed as
//! its passphrase is weak.

use super::SourceParser;
use crate::model::{CredentialEntry, CredentialKind, ScannedFile, SourceKind};

const SSH_KEY_RISK: u8 = 5;
const ENCRYPTED_RISK: u8 = 3;

pub struct KeyFileParser;

impl SourceParser for KeyFileParser {
    fn handles(&self, source: SourceKind) -> bool {
        matches!(source, SourceKind::SshKey | SourceKind::EncryptedFile)
    }

    fn parse(&self, file: &ScannedFile) -> Vec<CredentialEntry> {
        let name = file
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.location.clone());

        let (kind, risk, reason) = match file.source {
            SourceKind::SshKey => (
                CredentialKind::PrivateKey,
                SSH_KEY_RISK,
                "SSH private key on disk",
            ),
            _ => (
                CredentialKind::EncryptedFile,
                ENCRYPTED_RISK,
                "Encrypted file, risk depends on passphrase strength",
            ),
        };

        vec![CredentialEntry {
            name,
            location: file.location.clone(),
            kind,
            source: file.source,
            risk,
            risk_reason: reason.to_string(),
            last_modified: file.last_modified,
            age_days: file.age_days,
            has_value: true,
            masked_value: None,
        }]
    }
}
