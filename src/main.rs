use clap::Parser;
use credsweep::{
    suggest_fixes, Cli, JsonReporter, OutputFormat, Reporter, ScanConfig, Severity,
    TerminalReporter,
};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_tracing(cli: &Cli) {
    let default_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("credsweep={default_level}")));

    // Logs go to stderr so stdout stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    let config = ScanConfig::new(&cli.path)
        .with_max_depth(cli.max_depth)
        .with_home(cli.include_home)
        .with_git(!cli.no_git);

    let result = match credsweep::run_scan(&config) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    let report = match cli.format {
        OutputFormat::Terminal => TerminalReporter::new(cli.verbose).report(&result),
        OutputFormat::Json => JsonReporter::new().report(&result),
    };
    println!("{report}");

    if cli.fix && matches!(cli.format, OutputFormat::Terminal) {
        let fixes = suggest_fixes(&result);
        if !fixes.is_empty() {
            println!("Suggested fixes:");
            for fix in fixes {
                println!("  - {}", fix.title);
                if let Some(command) = fix.command {
                    println!("      $ {command}");
                }
                println!("      {}", fix.detail);
            }
        }
    }

    let has_critical = result
        .exposures
        .iter()
        .any(|e| e.severity == Severity::Critical);
    if has_critical {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
