//! Risk scoring: base risk + value presence + file age -> final score
//! with a human-readable justification.
//!
//! Every generic parser funnels through [`score`], so a credential is
//! scored the same way no matter where it was found.

use crate::model::CredentialKind;
use chrono::{DateTime, Utc};

pub const MIN_RISK: u8 = 1;
pub const MAX_RISK: u8 = 10;

/// Deduction applied when the value is a placeholder or empty.
pub const PLACEHOLDER_PENALTY: u8 = 4;

/// Age past which a credential is considered never rotated.
pub const STALE_AGE_DAYS: u64 = 365;

/// Age past which the reason text starts mentioning age.
pub const AGING_AGE_DAYS: u64 = 180;

/// Compute the final 1-10 risk and its justification.
pub fn score(kind: CredentialKind, base_risk: u8, has_value: bool, age_days: u64) -> (u8, String) {
    if !has_value {
        let risk = base_risk.saturating_sub(PLACEHOLDER_PENALTY).max(MIN_RISK);
        return (risk, "Placeholder/empty value".to_string());
    }

    let mut risk = base_risk;
    let mut reason = format!("{kind} with real value");

    if age_days > STALE_AGE_DAYS {
        risk = (risk + 1).min(MAX_RISK);
        reason.push_str(&format!(", not rotated in {age_days} days"));
    } else if age_days > AGING_AGE_DAYS {
        reason.push_str(&format!(", {age_days} days old"));
    }

    (risk, reason)
}

/// Whole days (floor) between a file's mtime and the scan start.
/// Files modified after the scan started count as zero days old.
pub fn age_in_days(last_modified: DateTime<Utc>, scan_start: DateTime<Utc>) -> u64 {
    scan_start
        .signed_duration_since(last_modified)
        .num_days()
        .max(0) as u64
}
