//! CLI entry point for pragma-check.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `pragma-check-app` crate.

mod telemetry;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use pragma_check_app::{CheckInput, render_report, run_check, verdict_exit_code};
use pragma_check_settings::{DEFAULT_CONFIG_FILE, Overrides};
use std::io::Write;

/// Exit status for configuration, input and parse failures.
const EXIT_FATAL: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "pragma-check",
    version,
    about = "Check that imported Solidity files accept the compiler versions of their importers"
)]
struct Cli {
    /// Compiler artifacts (build-info JSON files, or directories of them).
    #[arg(required = true, value_name = "ARTIFACT")]
    artifacts: Vec<Utf8PathBuf>,

    /// Project root that artifact and config paths are resolved against.
    #[arg(long, default_value = ".")]
    project_root: Utf8PathBuf,

    /// Path to the config TOML. A missing file means defaults.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: Utf8PathBuf,

    /// Extra glob of source paths to exclude (repeatable).
    #[arg(long = "skip", value_name = "GLOB")]
    skip: Vec<String>,

    /// Do not apply the built-in skip patterns.
    #[arg(long)]
    no_default_skip: bool,

    /// What to do with several version pragmas in one file (first|error).
    #[arg(long)]
    duplicate_pragma: Option<String>,

    /// Output format (text|github|json).
    #[arg(long)]
    format: Option<String>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(err) = telemetry::init_logging(&cli.log_level) {
        eprintln!("pragma-check error: init logging: {err:#}");
        std::process::exit(EXIT_FATAL);
    }

    match cmd_check(cli) {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("pragma-check error: {err:#}");
            std::process::exit(EXIT_FATAL);
        }
    }
}

fn cmd_check(cli: Cli) -> anyhow::Result<i32> {
    let project_root = cli
        .project_root
        .canonicalize_utf8()
        .unwrap_or_else(|_| cli.project_root.clone());
    if !project_root.is_dir() {
        anyhow::bail!("project root does not exist: {}", project_root);
    }

    let config_text = read_config(&project_root.join(&cli.config))?;

    let input = CheckInput {
        project_root: &project_root,
        config_text: &config_text,
        overrides: Overrides {
            skip: cli.skip,
            no_default_skip: cli.no_default_skip,
            duplicate_pragma: cli.duplicate_pragma,
            format: cli.format,
        },
        artifacts: cli.artifacts,
    };

    let output = run_check(input)?;
    let rendered = render_report(&output.report, output.resolved_config.format)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(rendered.as_bytes())
        .and_then(|()| stdout.flush())
        .context("write report")?;

    Ok(verdict_exit_code(output.report.verdict))
}

/// Missing config is allowed (defaults apply); an unreadable one is not.
fn read_config(path: &Utf8Path) -> anyhow::Result<String> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(config = %path, "no config file; using defaults");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config {path}")),
    }
}
