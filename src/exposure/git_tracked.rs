//! Git-tracked credential detection.
//!
//! Runs `git ls-files` once per scan, after all file-level scanning, and
//! cross-references the tracked set against the collected credentials.
//! Absence of a repository, a missing git binary, or a hung subprocess
//! all degrade to "no findings" rather than failing the scan.

use crate::model::{CredentialEntry, Exposure, ExposureKind, Severity};
use rustc_hash::FxHashSet;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use tracing::debug;

/// Hard ceiling on the subprocess; past it the child is killed.
const GIT_TIMEOUT: Duration = Duration::from_secs(5);

/// Escalation preconditions: a tracked credential is only flagged when
/// it holds a real value and already scored at least this much.
const ESCALATION_MIN_RISK: u8 = 5;

/// Relative paths of all files git tracks under `root`, or `None` when
/// the query is unavailable for any reason.
pub fn list_tracked_files(root: &Path) -> Option<FxHashSet<String>> {
    let mut child = Command::new("git")
        .args(["ls-files", "-z"])
        .current_dir(root)
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .stdin(Stdio::null())
        .spawn()
        .ok()?;

    // Drain stdout on a helper thread so a large tracked list cannot
    // deadlock against the pipe buffer while we poll for exit.
    let mut stdout = child.stdout.take()?;
    let reader = std::thread::spawn(move || {
        let mut buf = String::new();
        stdout.read_to_string(&mut buf).ok();
        buf
    });

    let deadline = Instant::now() + GIT_TIMEOUT;
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) if Instant::now() >= deadline => {
                debug!("git ls-files timed out, skipping git exposure checks");
                let _ = child.kill();
                let _ = child.wait();
                return None;
            }
            Ok(None) => std::thread::sleep(Duration::from_millis(10)),
            Err(_) => return None,
        }
    };

    if !status.success() {
        debug!("git ls-files failed, likely not a repository");
        return None;
    }

    let output = reader.join().ok()?;
    Some(
        output
            .split('\0')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

/// Rebuild the credential list with tracked entries escalated, emitting
/// one critical exposure per affected file.
///
/// Escalation replaces matched entries with an escalated copy rather
/// than mutating in place, so the pass stays safe to run after any
/// future parallel collection.
pub fn escalate_tracked(
    credentials: Vec<CredentialEntry>,
    tracked: &FxHashSet<String>,
    root: &Path,
) -> (Vec<CredentialEntry>, Vec<Exposure>) {
    let mut exposures = Vec::new();
    let mut flagged_locations: FxHashSet<String> = FxHashSet::default();

    let credentials = credentials
        .into_iter()
        .map(|entry| {
            let relative = Path::new(&entry.location)
                .strip_prefix(root)
                .map(|p| p.to_string_lossy().into_owned());
            let Ok(relative) = relative else {
                return entry;
            };
            if !tracked.contains(&relative)
                || !entry.has_value
                || entry.risk < ESCALATION_MIN_RISK
            {
                return entry;
            }
            if flagged_locations.insert(entry.location.clone()) {
                exposures.push(Exposure {
                    kind: ExposureKind::GitTracked,
                    location: entry.location.clone(),
                    description: format!("{relative} holds credentials and is tracked by git"),
                    severity: Severity::Critical,
                });
            }
            entry.escalated()
        })
        .collect();

    (credentials, exposures)
}
