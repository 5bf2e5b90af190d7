pub mod json;
pub mod terminal;

pub use json::JsonReporter;
pub use terminal::TerminalReporter;

use crate::model::ScanResult;

pub trait Reporter {
    fn report(&self, result: &ScanResult) -> String;
}
