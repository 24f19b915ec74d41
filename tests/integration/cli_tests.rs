//! Integration tests for the awls-preflight CLI.
//!
//! Each test drives the binary over a snapshot fixture written to a temp
//! file and asserts on exit codes and report contents.

#![allow(deprecated)] // cargo_bin is deprecated but works fine for standard builds

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

/// A healthy environment: Owner everywhere, ample quota in eastus.
const PASSING_SNAPSHOT: &str = r#"{
    "subscriptions": [
        { "id": "scan-sub", "name": "Scanning", "regions": {} },
        { "id": "mon-1", "name": "Monitored", "regions": { "eastus": 10 } }
    ],
    "roleAssignments": {
        "scan-sub": [
            {
                "id": "/subscriptions/scan-sub/assignments/1",
                "name": "Owner",
                "scope": "scan-sub",
                "principal": { "id": "principal-1", "type": "ServicePrincipal" },
                "permissions": { "actions": ["*"] }
            }
        ],
        "mon-1": [
            {
                "id": "/subscriptions/mon-1/assignments/1",
                "name": "Owner",
                "scope": "mon-1",
                "principal": { "id": "principal-1", "type": "ServicePrincipal" },
                "permissions": { "actions": ["*"] }
            }
        ]
    },
    "quotaLimits": {
        "eastus": {
            "cores": { "displayName": "Total Regional vCPUs", "limit": 100, "usage": 0 },
            "standardDSv3Family": { "displayName": "Standard DSv3 Family vCPUs", "limit": 100, "usage": 0 },
            "standardDSv4Family": { "displayName": "Standard DSv4 Family vCPUs", "limit": 100, "usage": 0 },
            "standardDSv5Family": { "displayName": "Standard DSv5 Family vCPUs", "limit": 100, "usage": 0 },
            "PublicIPAddresses": { "displayName": "Public IP Addresses", "limit": 100, "usage": 0 },
            "IPv4StandardSkuPublicIpAddresses": { "displayName": "Standard Sku Public IP Addresses", "limit": 100, "usage": 0 }
        }
    }
}"#;

fn snapshot_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write snapshot fixture");
    file
}

fn preflight() -> Command {
    Command::cargo_bin("awls-preflight").unwrap()
}

// ============================================================================
// Help and Version tests
// ============================================================================

#[test]
fn test_help_describes_the_check() {
    preflight()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Agentless Workload Scanning"));
}

#[test]
fn test_help_shows_all_options() {
    preflight()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--snapshot"))
        .stdout(predicate::str::contains("--scanning-subscription"))
        .stdout(predicate::str::contains("--monitored-subscriptions"))
        .stdout(predicate::str::contains("--regions"))
        .stdout(predicate::str::contains("--integration-type"))
        .stdout(predicate::str::contains("--no-nat-gateway"))
        .stdout(predicate::str::contains("--batch-size"))
        .stdout(predicate::str::contains("--output-format"))
        .stdout(predicate::str::contains("--no-color"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn test_version() {
    preflight()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_required_args_fails() {
    preflight()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--snapshot"));
}

#[test]
fn test_invalid_output_format_fails() {
    preflight()
        .args(["--output-format", "invalid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid"));
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_passing_environment_exits_zero() {
    let snapshot = snapshot_file(PASSING_SNAPSHOT);
    preflight()
        .args([
            "--snapshot",
            snapshot.path().to_str().unwrap(),
            "--scanning-subscription",
            "scan-sub",
            "--monitored-subscriptions",
            "mon-1",
            "--no-color",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("PASSED"));
}

#[test]
fn test_exhausted_quota_exits_one() {
    // 10 VMs at batch size 4 need 5 vCPUs; limit 5 with usage 1 leaves 4.
    let fixture = PASSING_SNAPSHOT.replace(
        r#""cores": { "displayName": "Total Regional vCPUs", "limit": 100, "usage": 0 }"#,
        r#""cores": { "displayName": "Total Regional vCPUs", "limit": 5, "usage": 1 }"#,
    );
    let snapshot = snapshot_file(&fixture);

    preflight()
        .args([
            "--snapshot",
            snapshot.path().to_str().unwrap(),
            "--scanning-subscription",
            "scan-sub",
            "--monitored-subscriptions",
            "mon-1",
            "--no-color",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("FAILED"))
        .stdout(predicate::str::contains("QuotaRequestsBlade"));
}

#[test]
fn test_missing_permission_exits_one() {
    let fixture = PASSING_SNAPSHOT.replace(
        r#""permissions": { "actions": ["*"] }
            }
        ],
        "mon-1""#,
        r#""permissions": { "actions": ["*/read"] }
            }
        ],
        "mon-1""#,
    );
    let snapshot = snapshot_file(&fixture);

    preflight()
        .args([
            "--snapshot",
            snapshot.path().to_str().unwrap(),
            "--scanning-subscription",
            "scan-sub",
            "--monitored-subscriptions",
            "mon-1",
            "--no-color",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("missing:"));
}

#[test]
fn test_nonexistent_snapshot_exits_two() {
    preflight()
        .args([
            "--snapshot",
            "/nonexistent/snapshot.json",
            "--scanning-subscription",
            "scan-sub",
            "--monitored-subscriptions",
            "mon-1",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_malformed_snapshot_exits_two() {
    let snapshot = snapshot_file("{ not json");
    preflight()
        .args([
            "--snapshot",
            snapshot.path().to_str().unwrap(),
            "--scanning-subscription",
            "scan-sub",
            "--monitored-subscriptions",
            "mon-1",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("parse"));
}

#[test]
fn test_malformed_role_pattern_exits_two() {
    let fixture = PASSING_SNAPSHOT.replacen(r#""actions": ["*"]"#, r#""actions": ["broken"]"#, 1);
    let snapshot = snapshot_file(&fixture);

    preflight()
        .args([
            "--snapshot",
            snapshot.path().to_str().unwrap(),
            "--scanning-subscription",
            "scan-sub",
            "--monitored-subscriptions",
            "mon-1",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("malformed pattern"));
}

#[test]
fn test_unknown_subscription_exits_two() {
    let snapshot = snapshot_file(PASSING_SNAPSHOT);
    preflight()
        .args([
            "--snapshot",
            snapshot.path().to_str().unwrap(),
            "--scanning-subscription",
            "scan-sub",
            "--monitored-subscriptions",
            "missing-sub",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing-sub"));
}

#[test]
fn test_tenant_integration_without_monitored_subscriptions_exits_two() {
    let snapshot = snapshot_file(PASSING_SNAPSHOT);
    preflight()
        .args([
            "--snapshot",
            snapshot.path().to_str().unwrap(),
            "--scanning-subscription",
            "scan-sub",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("monitored subscription"));
}

// ============================================================================
// JSON report
// ============================================================================

#[test]
fn test_json_report_fields() {
    let snapshot = snapshot_file(PASSING_SNAPSHOT);
    let output = preflight()
        .args([
            "--snapshot",
            snapshot.path().to_str().unwrap(),
            "--scanning-subscription",
            "scan-sub",
            "--monitored-subscriptions",
            "mon-1",
            "--output-format",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["success"], true);
    assert_eq!(report["vmCount"], 10);
    assert_eq!(report["permissionsCheck"]["success"], true);
    assert_eq!(report["usageQuotaCheck"]["success"], true);
    assert_eq!(
        report["deploymentConfig"]["scanningSubscription"]["id"],
        "scan-sub"
    );
    assert_eq!(
        report["usageQuotaCheck"]["quotaChecks"][0]["region"],
        "eastus"
    );
}

#[test]
fn test_json_report_names_missing_permissions() {
    let fixture = PASSING_SNAPSHOT.replace(
        r#""permissions": { "actions": ["*"] }
            }
        ]
    },
    "quotaLimits""#,
        r#""permissions": { "actions": ["Microsoft.Authorization/roleAssignments/*", "Microsoft.Authorization/roleDefinitions/read", "Microsoft.Authorization/roleDefinitions/delete"] }
            }
        ]
    },
    "quotaLimits""#,
    );
    let snapshot = snapshot_file(&fixture);

    let output = preflight()
        .args([
            "--snapshot",
            snapshot.path().to_str().unwrap(),
            "--scanning-subscription",
            "scan-sub",
            "--monitored-subscriptions",
            "mon-1",
            "--output-format",
            "json",
        ])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["permissionsCheck"]["success"], false);
    let missing = report["permissionsCheck"]["monitoredSubscriptions"][0]["missingPermissions"]
        .as_array()
        .unwrap();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0], "Microsoft.Authorization/roleDefinitions/write");
}

#[test]
fn test_missing_region_limits_reported_as_unavailable() {
    let fixture = PASSING_SNAPSHOT.replace(r#""eastus": {
            "cores""#, r#""westus": {
            "cores""#);
    let snapshot = snapshot_file(&fixture);

    let output = preflight()
        .args([
            "--snapshot",
            snapshot.path().to_str().unwrap(),
            "--scanning-subscription",
            "scan-sub",
            "--monitored-subscriptions",
            "mon-1",
            "--output-format",
            "json",
        ])
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let quotas = report["usageQuotaCheck"]["quotaChecks"][0]["quotas"]
        .as_array()
        .unwrap();
    assert_eq!(quotas.len(), 4);
    for quota in quotas {
        assert_eq!(quota["success"], false);
        assert!(quota["error"].as_str().unwrap().contains("eastus"));
    }
}

// ============================================================================
// Output file
// ============================================================================

#[test]
fn test_output_file_written() {
    let snapshot = snapshot_file(PASSING_SNAPSHOT);
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("report.json");

    preflight()
        .args([
            "--snapshot",
            snapshot.path().to_str().unwrap(),
            "--scanning-subscription",
            "scan-sub",
            "--monitored-subscriptions",
            "mon-1",
            "--output-format",
            "json",
            "--output",
            path.to_str().unwrap(),
        ])
        .assert()
        .success();

    let contents = std::fs::read_to_string(&path).unwrap();
    let report: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(report["success"], true);
}

// ============================================================================
// Plan flags
// ============================================================================

#[test]
fn test_no_nat_gateway_raises_ip_requirement() {
    // 10 VMs at batch size 4 need 3 public IPs without a NAT gateway; a
    // limit of 1 only fits the NAT case.
    let fixture = PASSING_SNAPSHOT
        .replace(
            r#""PublicIPAddresses": { "displayName": "Public IP Addresses", "limit": 100, "usage": 0 }"#,
            r#""PublicIPAddresses": { "displayName": "Public IP Addresses", "limit": 1, "usage": 0 }"#,
        )
        .replace(
            r#""IPv4StandardSkuPublicIpAddresses": { "displayName": "Standard Sku Public IP Addresses", "limit": 100, "usage": 0 }"#,
            r#""IPv4StandardSkuPublicIpAddresses": { "displayName": "Standard Sku Public IP Addresses", "limit": 1, "usage": 0 }"#,
        );
    let snapshot = snapshot_file(&fixture);

    preflight()
        .args([
            "--snapshot",
            snapshot.path().to_str().unwrap(),
            "--scanning-subscription",
            "scan-sub",
            "--monitored-subscriptions",
            "mon-1",
        ])
        .assert()
        .success();

    preflight()
        .args([
            "--snapshot",
            snapshot.path().to_str().unwrap(),
            "--scanning-subscription",
            "scan-sub",
            "--monitored-subscriptions",
            "mon-1",
            "--no-nat-gateway",
        ])
        .assert()
        .code(1);
}

#[test]
fn test_subscription_integration_monitors_itself() {
    // For a subscription integration the scanning subscription is the only
    // monitored one; scan-sub has no VMs, so there is nothing to fail on.
    let snapshot = snapshot_file(PASSING_SNAPSHOT);
    preflight()
        .args([
            "--snapshot",
            snapshot.path().to_str().unwrap(),
            "--scanning-subscription",
            "scan-sub",
            "--integration-type",
            "subscription",
        ])
        .assert()
        .success();
}

#[test]
fn test_requested_region_without_vms_is_skipped() {
    let snapshot = snapshot_file(PASSING_SNAPSHOT);
    preflight()
        .args([
            "--snapshot",
            snapshot.path().to_str().unwrap(),
            "--scanning-subscription",
            "scan-sub",
            "--monitored-subscriptions",
            "mon-1",
            "--regions",
            "eastus,northeurope",
            "--verbose",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("northeurope"));
}

#[test]
fn test_batch_size_changes_requirements() {
    // Batch size 1 needs 20 vCPUs for 10 VMs; a limit of 10 fails.
    let fixture = PASSING_SNAPSHOT.replace(
        r#""cores": { "displayName": "Total Regional vCPUs", "limit": 100, "usage": 0 }"#,
        r#""cores": { "displayName": "Total Regional vCPUs", "limit": 10, "usage": 0 }"#,
    );
    let snapshot = snapshot_file(&fixture);

    preflight()
        .args([
            "--snapshot",
            snapshot.path().to_str().unwrap(),
            "--scanning-subscription",
            "scan-sub",
            "--monitored-subscriptions",
            "mon-1",
            "--batch-size",
            "1",
        ])
        .assert()
        .code(1);
}

#[test]
fn test_zero_batch_size_rejected() {
    let snapshot = snapshot_file(PASSING_SNAPSHOT);
    preflight()
        .args([
            "--snapshot",
            snapshot.path().to_str().unwrap(),
            "--scanning-subscription",
            "scan-sub",
            "--monitored-subscriptions",
            "mon-1",
            "--batch-size",
            "0",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Batch size"));
}
