//! Command line interface.

use crate::config::Config;
use crate::error::CalcError;
use crate::output::{self, OutputFormat};
use crate::{describe, sample_addresses, split, DEFAULT_SAMPLE_LIMIT};
use clap::{Parser, Subcommand};

/// IPv4 / IPv6 subnet calculator.
#[derive(Debug, Parser)]
#[command(name = "subnet-calc")]
#[command(about = "Network, broadcast, host range and subnet splits for IPv4 and IPv6")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    /// Output format (defaults to SUBNET_CALC_FORMAT, then text).
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Describe an address and its network.
    Describe {
        /// Address, optionally with /prefix (e.g. 192.168.1.10/24, 2001:db8::1/64).
        address: String,
        /// Dotted decimal netmask or prefix length, used when the address has no /prefix.
        #[arg(long)]
        netmask: Option<String>,
    },
    /// Split a network into subnets of a longer prefix.
    Split {
        /// Network in CIDR notation (bare IPv6 is taken as /64).
        address: String,
        /// Target prefix length.
        prefix: u8,
    },
    /// List the first addresses of a CIDR block.
    Sample {
        /// Block in CIDR notation.
        cidr: String,
        /// Number of addresses to list.
        #[arg(long, default_value_t = DEFAULT_SAMPLE_LIMIT)]
        limit: usize,
    },
}

/// Run a parsed command and render its result.
pub fn run(cli: &Cli, config: &Config) -> Result<String, CalcError> {
    let format = cli.format.unwrap_or(config.format);
    log::debug!("run({:?}) format={format}", cli.command);

    match &cli.command {
        Command::Describe { address, netmask } => {
            let descriptor = describe(address, netmask.as_deref())?;
            Ok(match format {
                OutputFormat::Text => output::descriptor_text(&descriptor),
                OutputFormat::Csv => output::descriptor_csv(&descriptor),
                OutputFormat::Json => pretty(&output::descriptor_json(&descriptor)),
            })
        }
        Command::Split { address, prefix } => {
            let set = split(address, *prefix)?;
            Ok(match format {
                OutputFormat::Text => output::subnet_set_text(&set),
                OutputFormat::Csv => output::subnet_set_csv(&set),
                OutputFormat::Json => pretty(&output::subnet_set_json(&set)),
            })
        }
        Command::Sample { cidr, limit } => {
            let addresses = sample_addresses(cidr, *limit)?;
            Ok(match format {
                OutputFormat::Json => pretty(&output::sample_json(cidr, &addresses)),
                OutputFormat::Text | OutputFormat::Csv => output::sample_text(&addresses),
            })
        }
    }
}

/// Render an error for the selected format.
pub fn render_error(error: &CalcError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => pretty(&output::error_json(error)),
        OutputFormat::Text | OutputFormat::Csv => format!("{}: {}\n", error.kind(), error),
    }
}

fn pretty(value: &serde_json::Value) -> String {
    let mut out = serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        log::error!("Error serializing JSON: {e}");
        value.to_string()
    });
    out.push('\n');
    out
}
