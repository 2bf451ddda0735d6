//! Command-line surface
//!
//! Arguments may also come from a file: any argument of the form `%FILE` is
//! replaced by the lines of FILE, one argument per line, before parsing.
//! Keeping `--key` and `--secret` in such a file keeps them out of shell
//! history and process listings.

use anyhow::{Context, Result, bail};
use clap::Parser;
use ddns_core::DEFAULT_TTL;
use ddns_ip_http::DEFAULT_IP_SERVICE;

/// Prefix marking an argument file
pub const ARG_FILE_PREFIX: char = '%';

/// Argument files may include other argument files up to this depth
const MAX_ARG_FILE_DEPTH: usize = 8;

const EPILOG: &str = "\
GoDaddy customers can obtain values for the KEY and SECRET arguments by creating a production key at
https://developer.godaddy.com/keys/.

Command line arguments may be specified in a FILE, one to a line, by instead giving the argument
\"%FILE\". For security reasons, it is particularly recommended to supply the KEY and SECRET arguments
in such a file, rather than directly on the command line:

  $ cat godaddy-ddns.config
  MY.FULLY.QUALIFIED.HOSTNAME.COM
  --key
  MY-KEY-FROM-GODADDY
  --secret
  MY-SECRET-FROM-GODADDY

  $ godaddy-ddns %godaddy-ddns.config";

/// Update a GoDaddy DNS "A" record to the current public IP address
#[derive(Parser, Debug)]
#[command(name = "godaddy-ddns", version, about, after_help = EPILOG)]
pub struct Cli {
    /// DNS fully-qualified host name with an 'A' record
    pub hostname: String,

    /// DNS address (defaults to the public WAN address from --ip-url)
    #[arg(long)]
    pub ip: Option<String>,

    /// GoDaddy production key
    #[arg(long, env = "GODADDY_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// GoDaddy production secret
    #[arg(long, env = "GODADDY_SECRET", hide_env_values = true)]
    pub secret: Option<String>,

    /// DNS TTL (only sent with --forward-ttl; otherwise 3600 is sent)
    #[arg(long, default_value_t = DEFAULT_TTL)]
    pub ttl: u32,

    /// Send --ttl in the update instead of the fixed 3600
    #[arg(long)]
    pub forward_ttl: bool,

    /// Service that answers a GET with the caller's public IP
    #[arg(long, value_name = "URL", default_value = DEFAULT_IP_SERVICE)]
    pub ip_url: String,

    /// Record endpoint template with {domain}, {type} and {name} placeholders
    #[arg(long, value_name = "TEMPLATE", conflicts_with = "ote")]
    pub api_url: Option<String>,

    /// Use GoDaddy's OTE test environment
    #[arg(long)]
    pub ote: bool,

    /// HTTP timeout in seconds for both the IP lookup and the update
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Build and log the update without sending it
    #[arg(long)]
    pub dry_run: bool,
}

/// Replace every `%FILE` argument with the lines of FILE
///
/// The first argument (the program name) is never expanded. Blank lines are
/// skipped; other lines are taken verbatim, apart from the line terminator.
pub fn expand_arg_files<I>(args: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut expanded: Vec<String> = args.next().into_iter().collect();

    for arg in args {
        expand_into(arg, 0, &mut expanded)?;
    }

    Ok(expanded)
}

fn expand_into(arg: String, depth: usize, out: &mut Vec<String>) -> Result<()> {
    let Some(path) = arg.strip_prefix(ARG_FILE_PREFIX) else {
        out.push(arg);
        return Ok(());
    };

    if depth >= MAX_ARG_FILE_DEPTH {
        bail!(
            "Argument file {} nested more than {} levels deep",
            path,
            MAX_ARG_FILE_DEPTH
        );
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read argument file {}", path))?;

    for line in contents.lines() {
        if line.trim().is_empty() {
            continue;
        }
        expand_into(line.to_string(), depth + 1, out)?;
    }

    Ok(())
}
