use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn draagkracht(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("draagkracht").unwrap();
    cmd.env("DRAAGKRACHT_DATA_DIR", dir.path())
        .env_remove("DRAAGKRACHT_LOG");
    cmd
}

#[test]
fn fee_prints_maximum() {
    let dir = TempDir::new().unwrap();
    draagkracht(&dir)
        .args(["fee", "2500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Maximum fee: €375.00"));
}

#[test]
fn fee_applies_minimum_to_small_and_negative_principals() {
    let dir = TempDir::new().unwrap();
    draagkracht(&dir)
        .args(["fee", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€40.00").and(predicate::str::contains("(minimum fee)")));

    draagkracht(&dir)
        .args(["fee", "-250"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Maximum fee: €40.00"));
}

#[test]
fn fee_breakdown_lists_brackets() {
    let dir = TempDir::new().unwrap();
    draagkracht(&dir)
        .args(["fee", "3000", "--breakdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("15%").and(predicate::str::contains("€425.00")));
}

#[test]
fn fee_json_output() {
    let dir = TempDir::new().unwrap();
    let output = draagkracht(&dir)
        .args(["--format", "json", "fee", "5000"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["kind"], "fee");
    assert_eq!(report["schema_version"], "1.0.0");
    assert_eq!(report["data"]["max_fee"].as_f64(), Some(625.0));
}

#[test]
fn protect_alone_is_partially_protected() {
    let dir = TempDir::new().unwrap();
    draagkracht(&dir)
        .args(["protect", "2000"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("€37.40")
                .and(predicate::str::contains("€1962.60"))
                .and(predicate::str::contains("partially_protected")),
        );
}

#[test]
fn protect_family_is_fully_protected() {
    let dir = TempDir::new().unwrap();
    draagkracht(&dir)
        .args(["protect", "2000", "--status", "married", "--children", "2"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("fully_protected").and(predicate::str::contains("€2530.00")),
        );
}

#[test]
fn protect_rejects_unknown_status() {
    let dir = TempDir::new().unwrap();
    draagkracht(&dir)
        .args(["protect", "2000", "--status", "single-ish"])
        .assert()
        .failure();
}

#[test]
fn capacity_splits_free_budget() {
    let dir = TempDir::new().unwrap();
    draagkracht(&dir)
        .args(["capacity", "2000", "1200", "300"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("€500.00")
                .and(predicate::str::contains("€300.00"))
                .and(predicate::str::contains("€125.00"))
                .and(predicate::str::contains("€75.00")),
        );
}

#[test]
fn capacity_reports_shortfall() {
    let dir = TempDir::new().unwrap();
    draagkracht(&dir)
        .args(["capacity", "1000", "1200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("does not cover"));
}

#[test]
fn distribute_evenly_leaves_remainder() {
    let dir = TempDir::new().unwrap();
    draagkracht(&dir)
        .args(["distribute", "500", "A", "B", "C", "--strategy", "even"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("€166.00").and(predicate::str::contains("Undistributed: €2.00")),
        );
}

#[test]
fn distribute_heuristic_uses_priority_flag() {
    let dir = TempDir::new().unwrap();
    let output = draagkracht(&dir)
        .args([
            "--format", "json", "distribute", "1000", "Huur", "Markt", "Vervoer", "--priority",
            "markt",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let categories = report["data"]["categories"].as_array().unwrap();
    assert_eq!(categories[1]["current_allocation"].as_f64(), Some(500.0));
    assert_eq!(categories[0]["current_allocation"].as_f64(), Some(250.0));
}

#[test]
fn distribute_nothing_with_zero_budget() {
    let dir = TempDir::new().unwrap();
    draagkracht(&dir)
        .args(["distribute", "0", "A", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to distribute"));
}

#[test]
fn init_then_plan() {
    let dir = TempDir::new().unwrap();
    draagkracht(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample household written"));
    assert!(dir.path().join("household.json").exists());
    assert!(dir.path().join("config.json").exists());

    draagkracht(&dir)
        .args(["plan", "--month", "2025-03"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Financial plan 2025-03")
                .and(predicate::str::contains("€932.00"))
                .and(predicate::str::contains("€466.00"))
                .and(predicate::str::contains("Belastingdienst")),
        );
}

#[test]
fn init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    draagkracht(&dir).arg("init").assert().success();
    draagkracht(&dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    draagkracht(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn plan_with_exclusion_and_override() {
    let dir = TempDir::new().unwrap();
    draagkracht(&dir).arg("init").assert().success();

    let output = draagkracht(&dir)
        .args([
            "--format",
            "json",
            "plan",
            "--month",
            "2025-03",
            "--exclude",
            "kleding",
            "--set",
            "Vervoer=100",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let categories = report["data"]["categories"].as_array().unwrap();
    let kleding = categories.iter().find(|c| c["name"] == "Kleding").unwrap();
    let vervoer = categories.iter().find(|c| c["name"] == "Vervoer").unwrap();
    assert_eq!(kleding["included"], false);
    assert_eq!(vervoer["current_allocation"].as_f64(), Some(100.0));
}

#[test]
fn plan_yaml_output() {
    let dir = TempDir::new().unwrap();
    draagkracht(&dir).arg("init").assert().success();
    draagkracht(&dir)
        .args(["--format", "yaml", "plan", "--month", "2025-03"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Draagkracht plan report").and(
            predicate::str::contains("kind: plan"),
        ));
}

#[test]
fn plan_unknown_pot_fails() {
    let dir = TempDir::new().unwrap();
    draagkracht(&dir).arg("init").assert().success();
    draagkracht(&dir)
        .args(["plan", "--exclude", "Vakantie"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Vakantie"));
}

#[test]
fn plan_without_snapshot_fails() {
    let dir = TempDir::new().unwrap();
    draagkracht(&dir).arg("plan").assert().failure();
}

#[test]
fn plan_reads_yaml_snapshot() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("gezin.yaml");
    std::fs::write(
        &file,
        r#"
household:
  marital_status: married
  number_of_children: 1
incomes:
  - description: Salaris
    amount: "2600"
monthly_costs:
  - name: Huur
    amount: 1000
debts: []
pots:
  - name: Eten en drinken
    budget: 0
  - name: Vervoer
    budget: 0
  - name: Kleding
"#,
    )
    .unwrap();

    draagkracht(&dir)
        .args(["plan", "--month", "2025-03", "--file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("€1600.00")
                .and(predicate::str::contains("€800.00"))
                .and(predicate::str::contains("€400.00")),
        );
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();
    draagkracht(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("household.json")
                .and(predicate::str::contains("Default strategy:  heuristic")),
        );
}
