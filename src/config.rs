use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat};
use crate::error::{PreflightError, Result};
use crate::model::{DeploymentPlan, IntegrationType, Subscription};
use crate::snapshot::Snapshot;

#[derive(Debug)]
pub struct Config {
    pub no_color: bool,
    pub verbose: bool,
    pub snapshot: PathBuf,
    pub scanning_subscription: String,
    pub monitored_subscriptions: Vec<String>,
    pub regions: Vec<String>,
    pub integration_type: IntegrationType,
    pub use_nat_gateway: bool,
    pub batch_size: u64,
    pub output_format: OutputFormat,
    pub output: Option<PathBuf>,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        if !cli.snapshot.exists() {
            return Err(PreflightError::Config(format!(
                "Snapshot file does not exist: {}",
                cli.snapshot.display()
            )));
        }

        if !cli.snapshot.is_file() {
            return Err(PreflightError::Config(format!(
                "Snapshot path is not a file: {}",
                cli.snapshot.display()
            )));
        }

        if cli.batch_size == 0 {
            return Err(PreflightError::Config(
                "Batch size must be at least 1".to_string(),
            ));
        }

        let monitored_subscriptions = match cli.integration_type {
            // A single-subscription integration scans the subscription it is
            // deployed into.
            IntegrationType::Subscription => {
                if !cli.monitored_subscriptions.is_empty() {
                    log::warn!(
                        "Ignoring --monitored-subscriptions for a subscription integration"
                    );
                }
                vec![cli.scanning_subscription.clone()]
            }
            IntegrationType::Tenant => {
                if cli.monitored_subscriptions.is_empty() {
                    return Err(PreflightError::Config(
                        "A tenant integration requires at least one monitored subscription"
                            .to_string(),
                    ));
                }
                cli.monitored_subscriptions
            }
        };

        Ok(Self {
            no_color: cli.no_color,
            verbose: cli.verbose,
            snapshot: cli.snapshot,
            scanning_subscription: cli.scanning_subscription,
            monitored_subscriptions,
            regions: cli.regions,
            integration_type: cli.integration_type,
            use_nat_gateway: !cli.no_nat_gateway,
            batch_size: cli.batch_size,
            output_format: cli.output_format,
            output: cli.output,
        })
    }

    /// Resolves the configured subscription IDs and regions against the
    /// snapshot into a deployment plan.
    ///
    /// When no regions are requested, every region with detected VMs is
    /// validated. Requested regions without any detected VMs are dropped with
    /// a warning: there is nothing to scan there, so no quota is needed.
    pub fn deployment_plan(&self, snapshot: &Snapshot) -> Result<DeploymentPlan> {
        let scanning_subscription = snapshot.subscription(&self.scanning_subscription)?;

        let monitored_subscriptions = self
            .monitored_subscriptions
            .iter()
            .map(|id| snapshot.subscription(id))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let observed: BTreeSet<&str> = monitored_subscriptions
            .iter()
            .flat_map(|sub| sub.regions.keys())
            .map(String::as_str)
            .collect();

        let regions = if self.regions.is_empty() {
            observed.iter().map(|r| r.to_string()).collect()
        } else {
            let (known, unknown): (Vec<_>, Vec<_>) = self
                .regions
                .iter()
                .partition(|region| observed.contains(region.as_str()));
            for region in unknown {
                log::warn!("No VMs detected in region {region}; skipping it");
            }
            known.into_iter().cloned().collect()
        };

        Ok(DeploymentPlan {
            integration_type: self.integration_type,
            scanning_subscription,
            monitored_subscriptions,
            regions,
            use_nat_gateway: self.use_nat_gateway,
            batch_size: self.batch_size,
        })
    }
}
