//! Human-readable table report.

use std::fmt::Write;

use colored::Colorize;

use crate::auth::check::AuthCheck;
use crate::preflight::PreflightCheck;
use crate::quota::checks::{QuotaCheckOutcome, RegionQuotaChecks};

/// Renders the full preflight result as text for the terminal.
pub fn render(preflight: &PreflightCheck, no_color: bool) -> String {
    let mut out = String::new();

    write_header(&mut out, "Deployment", no_color);
    let plan = &preflight.plan;
    let _ = writeln!(out, "Scanning subscription:  {}", plan.scanning_subscription);
    let _ = writeln!(
        out,
        "Monitored subscriptions: {}",
        plan.monitored_subscriptions.len()
    );
    let _ = writeln!(out, "Regions:                {}", plan.regions.join(", "));
    let _ = writeln!(out, "Detected VMs:           {}", preflight.total_vms());
    let _ = writeln!(
        out,
        "NAT gateway:            {}",
        if plan.use_nat_gateway { "yes" } else { "no" }
    );

    let _ = writeln!(out);
    write_header(&mut out, "Permissions", no_color);
    write_auth_check(&mut out, &preflight.auth_checks.scanning_subscription, no_color);
    for check in &preflight.auth_checks.monitored_subscriptions {
        write_auth_check(&mut out, check, no_color);
    }

    let _ = writeln!(out);
    write_header(&mut out, "Usage quotas", no_color);
    let _ = writeln!(
        out,
        "Checked in subscription {} ({})",
        preflight.quota_checks.subscription.name, preflight.quota_checks.subscription.id
    );
    for region in &preflight.quota_checks.regions {
        write_region_quotas(&mut out, region, no_color);
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Preflight check result: {}",
        status(preflight.success(), no_color)
    );

    out
}

fn write_header(out: &mut String, title: &str, no_color: bool) {
    let header = format!("----------- {} -----------", title);
    if no_color {
        let _ = writeln!(out, "{header}");
    } else {
        let _ = writeln!(out, "{}", header.cyan().bold());
    }
}

fn status(passed: bool, no_color: bool) -> String {
    match (passed, no_color) {
        (true, true) => "PASSED".to_string(),
        (true, false) => "PASSED".green().bold().to_string(),
        (false, true) => "FAILED".to_string(),
        (false, false) => "FAILED".red().bold().to_string(),
    }
}

fn write_auth_check(out: &mut String, check: &AuthCheck, no_color: bool) {
    let _ = writeln!(
        out,
        "{}  {} ({} permissions checked)",
        status(check.success(), no_color),
        check.subscription.name,
        check.checked_permissions.len()
    );

    for missing in check.missing_permissions() {
        let line = format!("    missing: {}", missing.action);
        if no_color {
            let _ = writeln!(out, "{line}");
        } else {
            let _ = writeln!(out, "{}", line.yellow());
        }
    }
}

fn write_region_quotas(out: &mut String, region: &RegionQuotaChecks, no_color: bool) {
    let _ = writeln!(
        out,
        "\nRegion {} ({} VMs)",
        region.region.name, region.region.vm_count
    );
    let _ = writeln!(
        out,
        "  {:<42} {:>9} {:>9} {:>9}  result",
        "quota", "required", "limit", "usage"
    );

    for outcome in &region.outcomes {
        match outcome {
            QuotaCheckOutcome::Evaluated(check) => {
                let _ = writeln!(
                    out,
                    "  {:<42} {:>9} {:>9} {:>9}  {}",
                    check.kind.display_name(),
                    check.required_quota,
                    check.configured_limit,
                    check.current_usage,
                    status(check.success(), no_color)
                );
                if !check.success() {
                    let _ = writeln!(out, "    request an increase: {}", check.kind.fix_url());
                }
            }
            QuotaCheckOutcome::Unavailable { kind, error } => {
                let line = format!(
                    "  {:<42} {:>9} {:>9} {:>9}  UNAVAILABLE ({error})",
                    kind.display_name(),
                    "-",
                    "-",
                    "-"
                );
                if no_color {
                    let _ = writeln!(out, "{line}");
                } else {
                    let _ = writeln!(out, "{}", line.yellow());
                }
            }
        }
    }
}
