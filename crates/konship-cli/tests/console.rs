use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::tempdir;

fn cli() -> Command {
    let mut cmd = cargo_bin_cmd!("konship");
    cmd.env("NO_COLOR", "1")
        .env("RUST_LOG", "error")
        .env_remove("KONSHIP_WEIGHT_POLICY")
        .env_remove("KONSHIP_DEFAULT_MAX_PAYLOAD");
    cmd
}

#[test]
fn empty_session_lists_nothing() {
    cli()
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(contains("List of container ships: None"))
        .stdout(contains("List of containers: None"));
}

#[test]
fn builds_inventory_and_loads_containers() {
    let script = "\
add-ship --speed 20 --max-containers 2 --max-weight 5000
add-container liquid
add-container gas --pressure 2.5
add-container refrigerated --product \"Frozen fish\" --temperature -18
load KON-L-1 KON-S-1
load KON-G-1 KON-S-1
load KON-R-1 KON-S-1
list
";

    cli()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("Container ship KON-S-1 added."))
        .stdout(contains("Container KON-R-1 added."))
        .stdout(contains("Container KON-G-1 loaded onto ship KON-S-1."))
        .stdout(contains(
            "error: cannot add more containers to ship KON-S-1: capacity of 2 reached",
        ))
        .stdout(contains(
            "Ship KON-S-1 (speed=20, maxContainerNum=2, maxWeight=5000)",
        ))
        .stdout(contains(
            "Container KON-L-1: LiquidContainer, Cargo Mass = 0 kg, aboard KON-S-1",
        ))
        .stdout(contains(
            "Container KON-R-1: RefrigeratedContainer, Cargo Mass = 0 kg\n",
        ));
}

#[test]
fn overload_prints_hazard_then_error() {
    let script = "\
add-container gas --pressure 1
load-cargo KON-G-1 200
empty-cargo KON-G-1
load-cargo KON-G-1 1001
";

    cli()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("Loaded 200 kg into container KON-G-1."))
        .stdout(contains("Container KON-G-1 emptied; 10 kg remaining."))
        .stdout(contains(
            "Hazard Notification for KON-G-1: Attempting to overload: KON-G-1",
        ))
        .stdout(contains("error: attempted to overload container KON-G-1"));
}

#[test]
fn refrigerated_overload_has_no_hazard() {
    cli()
        .write_stdin("add-container refrigerated --product Milk --temperature 4\nload-cargo KON-R-1 5000\n")
        .assert()
        .success()
        .stdout(contains("error: attempted to overload container KON-R-1"))
        .stdout(contains("Hazard Notification").not());
}

#[test]
fn unknown_ship_suggests_existing_serial() {
    cli()
        .write_stdin("add-ship --speed 10 --max-containers 1 --max-weight 100\nremove-ship KON-S-2\n")
        .assert()
        .success()
        .stdout(contains(
            "error: container ship not found: KON-S-2. Did you mean 'KON-S-1'?",
        ));
}

#[test]
fn enforce_weight_flag_rejects_overweight_load() {
    let script = "\
add-ship --speed 10 --max-containers 3 --max-weight 500
add-container liquid
load-cargo KON-L-1 450
load KON-L-1 KON-S-1
show-ship KON-S-1
";

    cli()
        .arg("--enforce-weight")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains(
            "error: cannot load onto ship KON-S-1: projected weight 550 exceeds capacity 500",
        ))
        .stdout(contains("Loaded 0/3 containers"));
}

#[test]
fn weight_policy_can_come_from_environment() {
    let script = "\
add-ship --speed 10 --max-containers 3 --max-weight 50
add-container liquid
load KON-L-1 KON-S-1
";

    cli()
        .env("KONSHIP_WEIGHT_POLICY", "enforced")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("projected weight 100 exceeds capacity 50"));
}

#[test]
fn invalid_environment_configuration_fails() {
    cli()
        .env("KONSHIP_DEFAULT_MAX_PAYLOAD", "lots")
        .write_stdin("list\n")
        .assert()
        .failure()
        .stderr(contains("KONSHIP_DEFAULT_MAX_PAYLOAD"));
}

#[test]
fn json_listing_is_machine_readable() {
    let output = cli()
        .write_stdin("add-container liquid --hazardous --max-payload 2000\nlist --format json\n")
        .output()
        .expect("run konship");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf8");
    let json_start = stdout.find('{').expect("json object in output");
    let json: serde_json::Value =
        serde_json::from_str(&stdout[json_start..]).expect("valid json");
    let container = &json["containers"][0];
    assert_eq!(container["serial_number"], "KON-L-1");
    assert_eq!(container["kind"], "liquid");
    assert_eq!(container["hazardous"], true);
    assert_eq!(container["max_payload"], 2000.0);
}

#[test]
fn script_file_with_fail_fast_stops_at_first_error() {
    let temp = tempdir().expect("create temp dir");
    let script = temp.path().join("inventory.konship");
    fs::write(
        &script,
        "# fleet setup\nadd-container gas --pressure 1\nload KON-G-1 KON-S-1\nadd-container liquid\n",
    )
    .expect("write script");

    cli()
        .arg("--script")
        .arg(&script)
        .arg("--fail-fast")
        .assert()
        .failure()
        .stdout(contains("Container KON-G-1 added."))
        .stdout(contains("error: container ship not found: KON-S-1"))
        .stdout(contains("KON-L-1").not());
}

#[test]
fn exit_ends_session_early() {
    cli()
        .write_stdin("exit\nadd-ship --speed 1 --max-containers 1 --max-weight 1\n")
        .assert()
        .success()
        .stdout(contains("added").not());
}

#[test]
fn hazard_is_reported_once_at_default_log_level() {
    cli()
        .env_remove("RUST_LOG")
        .write_stdin("add-container gas --pressure 1\nload-cargo KON-G-1 5000\n")
        .assert()
        .success()
        .stdout(contains("Hazard Notification for KON-G-1"))
        .stderr(contains("hazard").not());
}

#[test]
fn load_event_logs_stored_serials() {
    let script = "\
add-ship --speed 10 --max-containers 1 --max-weight 1000
add-container liquid
load \"  KON-L-1 \" \" KON-S-1  \"
";

    cli()
        .env("RUST_LOG", "konship_lib=info")
        .arg("--log-format")
        .arg("json")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("Container KON-L-1 loaded onto ship KON-S-1."))
        .stderr(contains("\"ship\":\"KON-S-1\""))
        .stderr(contains("\"container\":\"KON-L-1\""))
        .stderr(contains("KON-S-1  \"").not());
}
