//! Static pattern registry: key-name rules and well-known credential
//! locations.
//!
//! The key-pattern table is an ordered list with first-match-wins
//! semantics. Order encodes priority: specific rules (AUTH_TOKEN, AWS_*)
//! must precede their generalizations (TOKEN, *_KEY). Adding a provider
//! means appending one record here; scorer logic never changes.

pub mod shapes;

use crate::model::{CredentialKind, SourceKind};
use regex::Regex;
use std::sync::LazyLock;

/// One key-name rule: regex over the candidate key, the credential kind
/// it implies, and the base risk fed to the scorer.
#[derive(Debug)]
pub struct CredentialPattern {
    pub key_pattern: Regex,
    pub kind: CredentialKind,
    pub base_risk: u8,
}

impl CredentialPattern {
    fn new(pattern: &str, kind: CredentialKind, base_risk: u8) -> Self {
        Self {
            key_pattern: Regex::new(pattern).expect("registry: invalid key pattern"),
            kind,
            base_risk,
        }
    }
}

static KEY_PATTERNS: LazyLock<Vec<CredentialPattern>> = LazyLock::new(|| {
    vec![
        // Cloud provider credentials before anything generic.
        CredentialPattern::new(
            r"(?i)aws[_-]?(access|secret|session)[_-]?",
            CredentialKind::CloudCredential,
            9,
        ),
        CredentialPattern::new(
            r"(?i)(database|db|mongo(db)?|postgres|mysql|redis)[_-]?(url|uri|dsn)",
            CredentialKind::ConnectionString,
            9,
        ),
        CredentialPattern::new(
            r"(?i)connection[_-]?string",
            CredentialKind::ConnectionString,
            9,
        ),
        CredentialPattern::new(r"(?i)private[_-]?key", CredentialKind::PrivateKey, 9),
        // AUTH_TOKEN family must come before the generic TOKEN rule.
        CredentialPattern::new(
            r"(?i)(auth|access|refresh|session|bearer)[_-]?token",
            CredentialKind::Token,
            8,
        ),
        CredentialPattern::new(r"(?i)api[_-]?key", CredentialKind::ApiKey, 8),
        CredentialPattern::new(r"(?i)secret", CredentialKind::Secret, 8),
        CredentialPattern::new(r"(?i)credential", CredentialKind::Secret, 7),
        CredentialPattern::new(r"(?i)(password|passwd|pwd)", CredentialKind::Password, 7),
        CredentialPattern::new(r"(?i)token", CredentialKind::Token, 6),
        CredentialPattern::new(r"(?i)(^|[_-])key$", CredentialKind::ApiKey, 6),
    ]
});

/// The ordered key-name rule table.
pub fn key_patterns() -> &'static [CredentialPattern] {
    &KEY_PATTERNS
}

/// First key-name rule matching `key`, if any.
pub fn match_key(key: &str) -> Option<&'static CredentialPattern> {
    KEY_PATTERNS.iter().find(|p| p.key_pattern.is_match(key))
}

/// A well-known credential path, relative to the home directory (or the
/// project root when `is_home` is false).
#[derive(Debug, Clone, Copy)]
pub struct KnownLocation {
    pub path: &'static str,
    pub source: SourceKind,
    pub is_home: bool,
    pub description: &'static str,
}

pub const KNOWN_LOCATIONS: &[KnownLocation] = &[
    KnownLocation {
        path: ".aws/credentials",
        source: SourceKind::CloudConfig,
        is_home: true,
        description: "AWS CLI credentials",
    },
    KnownLocation {
        path: ".aws/config",
        source: SourceKind::CloudConfig,
        is_home: true,
        description: "AWS CLI configuration",
    },
    KnownLocation {
        path: ".npmrc",
        source: SourceKind::NpmConfig,
        is_home: true,
        description: "npm registry configuration",
    },
    KnownLocation {
        path: ".git-credentials",
        source: SourceKind::GitCredentials,
        is_home: true,
        description: "git credential store",
    },
    KnownLocation {
        path: ".docker/config.json",
        source: SourceKind::JsonConfig,
        is_home: true,
        description: "Docker registry auth",
    },
    KnownLocation {
        path: ".ssh/id_rsa",
        source: SourceKind::SshKey,
        is_home: true,
        description: "SSH RSA private key",
    },
    KnownLocation {
        path: ".ssh/id_ed25519",
        source: SourceKind::SshKey,
        is_home: true,
        description: "SSH Ed25519 private key",
    },
    KnownLocation {
        path: ".ssh/id_ecdsa",
        source: SourceKind::SshKey,
        is_home: true,
        description: "SSH ECDSA private key",
    },
    KnownLocation {
        path: ".ssh/id_dsa",
        source: SourceKind::SshKey,
        is_home: true,
        description: "SSH DSA private key",
    },
    KnownLocation {
        path: ".bashrc",
        source: SourceKind::ShellConfig,
        is_home: true,
        description: "bash shell configuration",
    },
    KnownLocation {
        path: ".zshrc",
        source: SourceKind::ShellConfig,
        is_home: true,
        description: "zsh shell configuration",
    },
    KnownLocation {
        path: ".profile",
        source: SourceKind::ShellConfig,
        is_home: true,
        description: "login shell profile",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_env_keys() {
        assert_eq!(
            match_key("DATABASE_URL").map(|p| p.kind),
            Some(CredentialKind::ConnectionString)
        );
        assert_eq!(
            match_key("API_KEY").map(|p| p.kind),
            Some(CredentialKind::ApiKey)
        );
        assert_eq!(
            match_key("SECRET_KEY").map(|p| p.kind),
            Some(CredentialKind::Secret)
        );
        assert_eq!(
            match_key("AWS_SECRET_ACCESS_KEY").map(|p| p.kind),
            Some(CredentialKind::CloudCredential)
        );
    }

    #[test]
    fn test_camel_case_json_keys_match() {
        assert_eq!(
            match_key("apiKey").map(|p| p.kind),
            Some(CredentialKind::ApiKey)
        );
        assert_eq!(
            match_key("clientSecret").map(|p| p.kind),
            Some(CredentialKind::Secret)
        );
    }

    #[test]
    fn test_unrelated_keys_do_not_match() {
        assert!(match_key("NODE_ENV").is_none());
        assert!(match_key("PORT").is_none());
        assert!(match_key("LOG_LEVEL").is_none());
        assert!(match_key("KEYBOARD_LAYOUT").is_none());
    }

    #[test]
    fn test_specific_rules_precede_generalizations() {
        // AUTH_TOKEN must hit the specific token rule (risk 8), not the
        // generic TOKEN rule (risk 6).
        let auth = match_key("AUTH_TOKEN").unwrap();
        assert_eq!(auth.base_risk, 8);
        let generic = match_key("CSRF_TOKEN").unwrap();
        assert_eq!(generic.base_risk, 6);

        // AWS keys classify as cloud credentials, not generic secrets.
        let aws = match_key("AWS_ACCESS_KEY_ID").unwrap();
        assert_eq!(aws.kind, CredentialKind::CloudCredential);
        assert_eq!(aws.base_risk, 9);
    }

    #[test]
    fn test_generic_key_suffix_rule() {
        assert_eq!(
            match_key("ENCRYPTION_KEY").map(|p| p.base_risk),
            Some(6)
        );
        // Not a trailing "key": no match.
        assert!(match_key("KEYSTONE_URL").is_none());
    }

    #[test]
    fn test_all_base_risks_in_range() {
        for pattern in key_patterns() {
            assert!((1..=10).contains(&pattern.base_risk));
        }
    }

    #[test]
    fn test_known_locations_are_home_relative() {
        for loc in KNOWN_LOCATIONS {
            assert!(loc.is_home);
            assert!(!loc.path.starts_with('/'));
            assert!(!loc.description.is_empty());
        }
    }
}
