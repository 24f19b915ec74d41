use clap::Parser;
use awls_preflight::{
    cli::Cli,
    config::Config,
    logging::init_logging,
    preflight::PreflightCheck,
    report::ReportWriter,
    snapshot::Snapshot,
};

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => {
            // Checks ran to completion but at least one failed.
            std::process::exit(1);
        }
        Err(error) => {
            log::error!("{error:#}");
            std::process::exit(2);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = Config::from_cli(cli)?;

    log::debug!("Configuration: {:?}", config);

    let snapshot = Snapshot::load(&config.snapshot)?;
    let plan = config.deployment_plan(&snapshot)?;

    log::debug!(
        "Validating {} regions across {} monitored subscriptions",
        plan.regions.len(),
        plan.monitored_subscriptions.len()
    );

    let assignments = snapshot.role_assignments()?;
    let quota_limits = snapshot.quota_limits();

    let preflight = PreflightCheck::run(plan, &assignments, &quota_limits)?;

    let writer = ReportWriter::new(config.output_format, config.output.clone(), config.no_color);
    writer.write(&preflight)?;

    Ok(preflight.success())
}
