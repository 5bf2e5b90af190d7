//! Ignore-file coverage check for env files.

use crate::model::{Exposure, ExposureKind, ScannedFile, Severity};
use std::fs;
use std::path::Path;

/// Whether a `.gitignore` body covers `.env` files.
fn covers_env(gitignore: &str) -> bool {
    gitignore
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .any(|l| l.contains(".env"))
}

/// Check one env-like file for missing ignore coverage.
///
/// A `.gitignore` beside the file that lacks a `.env` pattern, or no
/// `.gitignore` at all while a `.git` marker sits in the same directory,
/// is a high-severity exposure. Neither file nor marker means the
/// directory is not a tracked-repo context, which is not a finding.
pub fn check_ignore_coverage(file: &ScannedFile) -> Option<Exposure> {
    let dir = file.path.parent()?;
    let gitignore = dir.join(".gitignore");

    let description = if gitignore.exists() {
        let content = fs::read_to_string(&gitignore).ok()?;
        if covers_env(&content) {
            return None;
        }
        format!(
            "{} is not covered by the .gitignore in its directory",
            file.location
        )
    } else if has_vcs_marker(dir) {
        format!(
            "{} sits in a git repository with no .gitignore",
            file.location
        )
    } else {
        return None;
    };

    Some(Exposure {
        kind: ExposureKind::NoGitignore,
        location: file.location.clone(),
        description,
        severity: Severity::High,
    })
}

fn has_vcs_marker(dir: &Path) -> bool {
    dir.join(".git").exists()
}
