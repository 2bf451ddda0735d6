// # godaddy-ddns - GoDaddy DNS "A" record updater
//
// This binary is a THIN integration layer: it reads the command line,
// builds the IP source, provider and updater, runs one update and turns the
// outcome into output and an exit code. Validation and HTTP handling live
// in the library crates.
//
// ## Usage
//
// ```bash
// godaddy-ddns sub.example.com --key MY-KEY --secret MY-SECRET
// godaddy-ddns sub.example.com --ip 1.2.3.4 %godaddy-ddns.config
// ```
//
// ## Environment
//
// - `GODADDY_KEY`, `GODADDY_SECRET`: credentials, instead of --key/--secret
// - `DDNS_LOG_LEVEL`: trace, debug, info, warn (default) or error
//
// Logs go to stderr; stdout carries only the confirmation line.

mod cli;

use clap::Parser;
use cli::{Cli, expand_arg_files};
use ddns_core::{Credentials, Result, TtlPolicy, Updater, UpdaterConfig};
use ddns_ip_http::{HttpIpSource, HttpIpSourceConfig};
use ddns_provider_godaddy::{GODADDY_OTE_RECORD_ENDPOINT, GoDaddyConfig, GoDaddyProvider};
use std::env;
use std::process::ExitCode;
use std::time::Duration;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

/// Exit codes for different termination scenarios
///
/// - 0: Record updated
/// - 1: Validation, lookup or provider failure
/// - 2: Usage, configuration or startup error
#[derive(Debug, Clone, Copy)]
enum DdnsExitCode {
    /// Record updated (or dry-run completed)
    Updated = 0,
    /// The update failed
    UpdateFailed = 1,
    /// Bad arguments, invalid --ip-url/--api-url/--timeout, or startup failure
    StartupError = 2,
}

impl From<DdnsExitCode> for ExitCode {
    fn from(code: DdnsExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

fn main() -> ExitCode {
    let args = match expand_arg_files(env::args()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Argument error: {:#}", e);
            return DdnsExitCode::StartupError.into();
        }
    };

    // Prints help/version/usage errors and exits
    let cli = Cli::try_parse_from(args).unwrap_or_else(|e| e.exit());

    let log_level = match env::var("DDNS_LOG_LEVEL")
        .unwrap_or_else(|_| "warn".to_string())
        .to_lowercase()
        .as_str()
    {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        other => {
            eprintln!(
                "DDNS_LOG_LEVEL '{}' is not valid. Valid levels: trace, debug, info, warn, error",
                other
            );
            return DdnsExitCode::StartupError.into();
        }
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return DdnsExitCode::StartupError.into();
    }

    let updater = match build_updater(cli) {
        Ok(updater) => updater,
        Err(e) => {
            eprintln!("{}", e);
            return DdnsExitCode::StartupError.into();
        }
    };

    // Two sequential requests at most: a single-threaded runtime is enough
    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to create tokio runtime: {}", e);
            return DdnsExitCode::StartupError.into();
        }
    };

    match rt.block_on(updater.run()) {
        Ok(result) => {
            println!("{}", result);
            DdnsExitCode::Updated.into()
        }
        Err(e) => {
            eprintln!("{}", e);
            DdnsExitCode::UpdateFailed.into()
        }
    }
}

/// Build the IP source, provider and updater from the command line
///
/// Fails only on configuration problems; nothing is sent on the network.
fn build_updater(cli: Cli) -> Result<Updater> {
    let timeout = cli.timeout.map(Duration::from_secs);

    let updater_config = UpdaterConfig::new(cli.hostname)
        .with_ip(cli.ip)
        .with_ttl(cli.ttl)
        .with_ttl_policy(if cli.forward_ttl {
            TtlPolicy::Forward
        } else {
            TtlPolicy::Fixed
        });

    let mut ip_config = HttpIpSourceConfig {
        url: cli.ip_url,
        ..HttpIpSourceConfig::default()
    };
    let mut provider_config = GoDaddyConfig::new(Credentials::from_parts(cli.key, cli.secret));
    provider_config.dry_run = cli.dry_run;

    if let Some(template) = cli.api_url {
        provider_config.record_endpoint = template;
    } else if cli.ote {
        provider_config.record_endpoint = GODADDY_OTE_RECORD_ENDPOINT.to_string();
    }

    if let Some(timeout) = timeout {
        ip_config.timeout = timeout;
        provider_config.timeout = timeout;
    }

    debug!("Updater configuration: {:?}", updater_config);
    debug!("Provider configuration: {:?}", provider_config);

    let ip_source = HttpIpSource::from_config(ip_config)?;
    let provider = GoDaddyProvider::new(provider_config)?;

    Ok(Updater::new(
        updater_config,
        Box::new(ip_source),
        Box::new(provider),
    ))
}
