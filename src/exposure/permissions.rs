//! Permission-bit check for private key files.

use crate::model::{Exposure, ExposureKind, ScannedFile, Severity};

/// Group/other read bits.
const WORLD_READ_MASK: u32 = 0o044;

/// Flag an SSH key whose mode lets group or other read it.
///
/// Only meaningful on unix; elsewhere the check contributes nothing.
#[cfg(unix)]
pub fn check_world_readable(file: &ScannedFile) -> Option<Exposure> {
    let mode = file.mode?;
    if mode & WORLD_READ_MASK == 0 {
        return None;
    }
    Some(Exposure {
        kind: ExposureKind::WorldReadable,
        location: file.location.clone(),
        description: format!(
            "{} is readable by group/other (mode {:o})",
            file.location,
            mode & 0o777
        ),
        severity: Severity::Critical,
    })
}

#[cfg(not(unix))]
pub fn check_world_readable(_file: &ScannedFile) -> Option<Exposure> {
    None
}
