//! Exposure detection: independent, stateless checks for conditions
//! that put a credential at elevated risk of leaking.
//!
//! Each check is a pure function of already-collected scan data except
//! the git-tracked query, which shells out once per scan.

mod derived;
mod git_tracked;
mod gitignore;
mod permissions;

pub use derived::{expired_token_exposures, plaintext_password_exposures};
pub use git_tracked::{escalate_tracked, list_tracked_files};
pub use gitignore::check_ignore_coverage;
pub use permissions::check_world_readable;
