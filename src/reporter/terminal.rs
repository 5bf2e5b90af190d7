use crate::model::{CredentialEntry, Exposure, ScanResult, Severity};
use crate::reporter::Reporter;
use colored::Colorize;

pub struct TerminalReporter {
    verbose: bool,
}

impl TerminalReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn risk_label(&self, risk: u8) -> colored::ColoredString {
        let label = format!("[{risk:>2}/10]");
        match risk {
            9..=10 => label.red().bold(),
            7..=8 => label.yellow().bold(),
            5..=6 => label.cyan(),
            _ => label.white(),
        }
    }

    fn severity_label(&self, severity: Severity) -> colored::ColoredString {
        let label = format!("[{severity}]");
        match severity {
            Severity::Critical => label.red().bold(),
            Severity::High => label.yellow().bold(),
            Severity::Medium => label.cyan(),
            Severity::Low => label.white(),
        }
    }

    fn format_credential(&self, entry: &CredentialEntry) -> String {
        let mut line = format!(
            "  {} {} ({})\n",
            self.risk_label(entry.risk),
            entry.name.bold(),
            entry.location.dimmed()
        );
        if let Some(masked) = &entry.masked_value {
            line.push_str(&format!("           value: {}\n", masked));
        }
        line.push_str(&format!("           {}\n", entry.risk_reason.dimmed()));
        if self.verbose {
            line.push_str(&format!(
                "           source: {}, modified {} days ago\n",
                entry.source.as_str(),
                entry.age_days
            ));
        }
        line
    }

    fn format_exposure(&self, exposure: &Exposure) -> String {
        format!(
            "  {} {} {}\n           {}\n",
            self.severity_label(exposure.severity),
            exposure.kind.as_str().bold(),
            exposure.location.dimmed(),
            exposure.description
        )
    }
}

impl Reporter for TerminalReporter {
    fn report(&self, result: &ScanResult) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "\n{} {}\n",
            "credsweep scan:".bold(),
            result.root_dir
        ));
        out.push_str(&format!(
            "{}\n\n",
            format!(
                "{} credential(s) found, {} high risk, {} exposure(s), {} ms",
                result.total_found,
                result.high_risk,
                result.exposures.len(),
                result.scan_duration_ms
            )
            .dimmed()
        ));

        if result.credentials.is_empty() && result.exposures.is_empty() {
            out.push_str(&format!("{}\n", "No credentials found.".green().bold()));
            return out;
        }

        if !result.credentials.is_empty() {
            out.push_str(&format!("{}\n", "Credentials".bold().underline()));
            for entry in &result.credentials {
                out.push_str(&self.format_credential(entry));
            }
            out.push('\n');
        }

        if !result.exposures.is_empty() {
            out.push_str(&format!("{}\n", "Exposures".bold().underline()));
            for exposure in &result.exposures {
                out.push_str(&self.format_exposure(exposure));
            }
        }

        out
    }
}
