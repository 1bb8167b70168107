//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `header_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Report rendering and exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use header_audit::initialization::init_logger_with;
use header_audit::{run_audit, Config, LogFormat, LogLevel, Mode, OutputFormat};

#[derive(Debug, Parser)]
#[command(
    name = "header_audit",
    version,
    about = "Fetches a URL and reports which security response headers are present, missing, or deprecated"
)]
struct Cli {
    /// Target URL to audit (https:// is assumed when the scheme is missing)
    url: String,

    /// Which checklist to evaluate the response against
    #[arg(long, value_enum)]
    mode: Mode,

    /// Optional Authorization header value (e.g. "Bearer eyJ...")
    #[arg(long)]
    auth_token: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = header_audit::config::DEFAULT_TIMEOUT_SECS)]
    timeout_seconds: u64,

    /// Disable TLS certificate verification (dangerous, off by default)
    #[arg(long)]
    insecure: bool,

    /// HTTP User-Agent header value
    #[arg(long, default_value = header_audit::config::DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Report output format
    #[arg(long, value_enum, default_value = "plain")]
    output: OutputFormat,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    log_format: LogFormat,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            url: cli.url,
            mode: cli.mode,
            auth_token: cli.auth_token,
            timeout_seconds: cli.timeout_seconds,
            insecure: cli.insecure,
            user_agent: cli.user_agent,
            log_level: cli.log_level,
            log_format: cli.log_format,
            output: cli.output,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = cli.log_level.clone();
    let log_format = cli.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let config = Config::from(cli);

    match run_audit(&config).await {
        Ok(report) => {
            // Missing headers are a finding, not an error: exit 0 either way
            match config.output {
                OutputFormat::Plain => print!("{}", report.render_plain()),
                OutputFormat::Json => println!(
                    "{}",
                    report
                        .render_json()
                        .context("Failed to serialize report")?
                ),
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("header_audit error: {:#}", e);
            process::exit(1);
        }
    }
}
