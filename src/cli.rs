use std::path::PathBuf;

use clap::Parser;

use crate::model::IntegrationType;

/// AWLS Preflight Check
///
/// Validates that an Azure environment is ready for an Agentless Workload
/// Scanning deployment: the deploying identity must hold every required
/// permission, and the target regions must have enough usage quota headroom
/// for the planned scan workers.
#[derive(Parser, Debug)]
#[command(name = "awls-preflight")]
#[command(version)]
#[command(about, long_about)]
pub struct Cli {
    /// Path to the environment snapshot file (JSON)
    #[arg(short = 's', long = "snapshot")]
    pub snapshot: PathBuf,

    /// Subscription the scanner infrastructure is deployed into
    #[arg(long = "scanning-subscription")]
    pub scanning_subscription: String,

    /// Subscriptions whose workloads are scanned (comma-separated)
    #[arg(short = 'm', long = "monitored-subscriptions", value_delimiter = ',')]
    pub monitored_subscriptions: Vec<String>,

    /// Regions to validate (comma-separated); defaults to every region with
    /// detected VMs
    #[arg(short = 'r', long = "regions", value_delimiter = ',')]
    pub regions: Vec<String>,

    /// Integration level of the scanner
    #[arg(short = 'i', long = "integration-type", default_value = "tenant")]
    pub integration_type: IntegrationType,

    /// Plan without a NAT gateway (one public IP per scan worker)
    #[arg(long = "no-nat-gateway")]
    pub no_nat_gateway: bool,

    /// Number of target VMs one scan worker processes concurrently
    #[arg(short = 'b', long = "batch-size", default_value_t = crate::quota::DEFAULT_BATCH_SIZE)]
    pub batch_size: u64,

    /// Output format: table, json
    #[arg(short = 'f', long = "output-format", default_value = "table")]
    pub output_format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Suppress colored output (useful for CI/CD pipelines)
    #[arg(short = 'n', long = "no-color")]
    pub no_color: bool,

    /// Enable verbose output for debugging
    #[arg(long = "verbose")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
