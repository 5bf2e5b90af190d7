//! Home-directory enumeration of well-known credential locations.

use super::walker::load_file;
use crate::model::{ScannedFile, SourceKind};
use crate::registry::KNOWN_LOCATIONS;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing::debug;

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

/// Probe every known home location that exists on disk.
///
/// SSH key locations carry their permission bits so the world-readable
/// check can run on them.
pub fn scan_home_locations(scan_start: DateTime<Utc>) -> Vec<ScannedFile> {
    let Some(home) = home_dir() else {
        debug!("no home directory resolved, skipping known locations");
        return Vec::new();
    };

    KNOWN_LOCATIONS
        .iter()
        .filter(|loc| loc.is_home)
        .filter_map(|loc| {
            let path = home.join(loc.path);
            if !path.is_file() {
                return None;
            }
            debug!(path = %path.display(), "probing known location");
            let with_mode = loc.source == SourceKind::SshKey;
            Some(load_file(&path, loc.source, scan_start, with_mode))
        })
        .collect()
}
