// End-to-end checks of the armid binary.

use assert_cmd::Command;
use predicates::str::contains;

fn armid() -> Command {
    let mut cmd = Command::cargo_bin("armid").unwrap();
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

#[test]
fn parse_prints_json_description() {
    let output = armid()
        .args([
            "parse",
            "--format",
            "json",
            "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Foo/foos/foo1/bars/bar1",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let description: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(description["kind"], "scoped");
    assert_eq!(description["type"], "Microsoft.Foo/foos/bars");
    assert_eq!(
        description["scope"],
        "/subscriptions/resourceGroups/Microsoft.Foo/foos/bars"
    );
    assert_eq!(description["route_scope"], "/Microsoft.Foo/foos/bars");
    assert_eq!(description["provider"], "Microsoft.Foo");
    assert_eq!(
        description["parent"],
        "/subscriptions/sub1/resourceGroups/rg1/providers/Microsoft.Foo/foos/foo1"
    );
    assert_eq!(
        description["root_scope"],
        "/subscriptions/sub1/resourceGroups/rg1"
    );
}

#[test]
fn parse_text_output() {
    armid()
        .args(["parse", "/providers/Microsoft.Management/managementGroups/mg1"])
        .assert()
        .success()
        .stdout(contains("management_group"))
        .stdout(contains("Microsoft.Management/managementGroups"));
}

#[test]
fn parse_rejects_invalid_id() {
    armid()
        .args(["parse", "subscriptions/sub1"])
        .assert()
        .code(2)
        .stderr(contains("id should start with"));
}

#[test]
fn normalize_applies_template_casing() {
    armid()
        .args([
            "normalize",
            "/subscriptions/sub1/resourceGroups/rg1/providers/MICROSOFT.Foo/FOOS/foo1",
            "--scope",
            "/SUBSCRIPTIONS/RESOURCEGROUPS/MICROSOFT.FOO/FOOS",
        ])
        .assert()
        .success()
        .stdout("/SUBSCRIPTIONS/sub1/RESOURCEGROUPS/rg1/providers/MICROSOFT.FOO/FOOS/foo1\n");
}

#[test]
fn normalize_route_scope_only_touches_leaf() {
    armid()
        .args([
            "normalize",
            "/subscriptions/sub1/resourceGroups/rg1/providers/MICROSOFT.Foo/FOOS/foo1",
            "--scope",
            "/microsoft.foo/foos",
            "--route",
        ])
        .assert()
        .success()
        .stdout("/subscriptions/sub1/resourceGroups/rg1/providers/microsoft.foo/foos/foo1\n");
}

#[test]
fn normalize_reports_mismatch() {
    armid()
        .args([
            "normalize",
            "/providers/Microsoft.Foo/foos/foo1",
            "--scope",
            "/Microsoft.Bar/foos",
        ])
        .assert()
        .code(2)
        .stderr(contains("mismatch scope string"));
}

#[test]
fn parents_walks_to_top() {
    armid()
        .args(["parents", "/subscriptions/sub1/tagNames/name1/tagValues/value1"])
        .assert()
        .success()
        .stdout(
            "/subscriptions/sub1/tagNames/name1/tagValues/value1\n\
             /subscriptions/sub1/tagNames/name1\n\
             /subscriptions/sub1\n",
        );
}

#[test]
fn eq_ignores_case() {
    armid()
        .args([
            "eq",
            "/subscriptions/SUB1/resourceGroups/RG1",
            "/subscriptions/sub1/resourcegroups/rg1",
        ])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn scope_eq_false_exits_one() {
    armid()
        .args([
            "scope-eq",
            "/subscriptions/sub1/resourceGroups/rg1",
            "/subscriptions/sub1",
        ])
        .assert()
        .code(1)
        .stdout("false\n");
}

#[test]
fn json_log_format_writes_json_lines_to_stderr() {
    armid()
        .args([
            "--log-level",
            "trace",
            "--log-format",
            "json",
            "parse",
            "/subscriptions/sub1",
        ])
        .assert()
        .success()
        .stdout(contains("subscription"))
        .stderr(contains(r#""level":"TRACE""#))
        .stderr(contains(r#""target":"armid::parser""#))
        .stderr(contains(r#""message":"parsed resource id""#));
}

#[test]
fn log_format_from_environment() {
    armid()
        .env("ARMID_LOG_LEVEL", "debug")
        .env("ARMID_LOG_FORMAT", "json")
        .args(["parse", "/subscriptions//sub1"])
        .assert()
        .code(2)
        .stderr(contains(r#""level":"DEBUG""#))
        .stderr(contains(r#""message":"rejected resource id""#));
}

#[test]
fn eq_help_describes_both_ids() {
    armid()
        .args(["eq", "--help"])
        .assert()
        .success()
        .stdout(contains("First resource id"))
        .stdout(contains("Second resource id"));
}
