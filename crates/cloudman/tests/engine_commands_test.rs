mod common;

use common::StubProject;
use predicates::prelude::*;

/// validate runs init first and reports a clean configuration
#[test]
fn test_validate_success() {
    let project = StubProject::new("");

    project
        .cmd()
        .args(["validate", "-e", "dev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid!"));

    assert_eq!(project.count("init"), 1);
    assert_eq!(project.count("validate"), 1);
}

/// A zero exit with warnings on stderr still succeeds, but surfaces them
#[test]
fn test_validate_surfaces_warnings() {
    let project = StubProject::new(
        r#"case "$cmd" in
  validate) echo "Warning: deprecated attribute" >&2; exit 0 ;;
esac"#,
    );

    project
        .cmd()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid!"))
        .stdout(predicate::str::contains("Warnings:"))
        .stdout(predicate::str::contains("deprecated attribute"));
}

#[test]
fn test_validate_failure() {
    let project = StubProject::new(
        r#"case "$cmd" in
  validate) echo "Unsupported block type" >&2; exit 1 ;;
esac"#,
    );

    project
        .cmd()
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation failed"))
        .stderr(predicate::str::contains("Unsupported block type"));
}

#[test]
fn test_validate_init_failure() {
    let project = StubProject::new(
        r#"case "$cmd" in
  init) echo "no credentials" >&2; exit 1 ;;
esac"#,
    );

    project
        .cmd()
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Terraform init failed"));

    assert_eq!(project.count("validate"), 0);
}

/// output prints the trimmed value and nothing else on stdout
#[test]
fn test_output_trims_value() {
    let project = StubProject::new(
        r#"case "$cmd" in
  output) printf 'vpc-123456\n'; exit 0 ;;
esac"#,
    );

    project
        .cmd()
        .args(["output", "-e", "dev", "vpc_id"])
        .assert()
        .success()
        .stdout("vpc-123456\n");
}

#[test]
fn test_output_failure() {
    let project = StubProject::new(
        r#"case "$cmd" in
  output) echo 'Output "vpc_id" not found' >&2; exit 1 ;;
esac"#,
    );

    project
        .cmd()
        .args(["output", "vpc_id"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to get output"));
}

/// The output name reaches the engine invocation
#[test]
fn test_output_passes_name() {
    let project = StubProject::new("");

    project.cmd().args(["output", "subnet_ids"]).assert().success();

    let calls = project.invocations();
    assert!(calls.iter().any(|line| {
        line.starts_with("output") && line.contains("subnet_ids")
    }));
}

/// cost estimate is a stub that always succeeds
#[test]
fn test_cost_estimate_stub() {
    let project = StubProject::new("");

    project
        .cmd()
        .args(["cost", "estimate", "-e", "prod"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Estimating costs for prod"))
        .stdout(predicate::str::contains("coming soon"));

    assert!(project.invocations().is_empty());
}
