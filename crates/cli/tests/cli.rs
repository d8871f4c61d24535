use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn gfcalc() -> Command {
    let mut cmd = Command::cargo_bin("gfcalc").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn calc_prime_field() {
    gfcalc()
        .args(["calc", "5", "3", "*", "4"])
        .assert()
        .success()
        .stdout("2\n");

    gfcalc()
        .args(["calc", "5", "3", "+", "4"])
        .assert()
        .success()
        .stdout("2\n");

    gfcalc()
        .args(["calc", "5", "2", "/", "4"])
        .assert()
        .success()
        .stdout("3\n");

    gfcalc()
        .args(["calc", "5", "1", "-", "3"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn calc_extension_field_with_polynomials() {
    gfcalc()
        .args(["calc", "4", "2", "mul", "3", "-i", "1 1 1"])
        .assert()
        .success()
        .stdout("1\n");

    gfcalc()
        .args(["calc", "4", "2", "*", "3", "-i", "1 1 1", "--show-polynomials"])
        .assert()
        .success()
        .stdout("(x) * (x + 1) = 1\n1\n");
}

#[test]
fn calc_errors() {
    gfcalc()
        .args(["calc", "5", "1", "/", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to compute 1 / 0"));

    gfcalc()
        .args(["-v", "calc", "5", "1", "/", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Caused by: Division by zero"));

    gfcalc()
        .args(["calc", "12", "1", "+", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GF(12) doesn't exist"));

    gfcalc()
        .args(["calc", "5", "7", "+", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Element 7 is not in GF(5)"));

    gfcalc()
        .args(["calc", "5", "1", "%", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid operation"));

    gfcalc()
        .args(["calc", "9", "1", "+", "1", "-i", "1 0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected degree 2, found 1"));
}

#[test]
fn table_text_and_csv() {
    gfcalc()
        .args(["table", "4", "--op", "add", "-i", "1 1 1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+ │ 0 1 2 3"))
        .stdout(predicate::str::contains("3 │ 3 2 1 0"));

    gfcalc()
        .args(["table", "4", "--op", "div", "-i", "1 1 1", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("/,0,1,2,3\n0,,0,0,0\n1,,1,3,2\n"));
}

#[test]
fn table_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mul.json");

    gfcalc()
        .args(["-q", "table", "3", "--format", "json", "-o"])
        .arg(&path)
        .assert()
        .success()
        .stdout("");

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["order"], 3);
    assert_eq!(json["cells"][2][2], 1);
}

#[test]
fn table_size_limit() {
    gfcalc()
        .args(["table", "128"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    let mut config = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut config, b"[limits]\nmax_table_order = 2\n").unwrap();

    gfcalc()
        .arg("-c")
        .arg(config.path())
        .args(["table", "3"])
        .assert()
        .failure();

    gfcalc()
        .arg("-c")
        .arg(config.path())
        .args(["table", "3", "--force"])
        .assert()
        .success();
}

#[test]
fn info_formats() {
    gfcalc()
        .args(["info", "4", "--elements", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Irreducible: x^2 + x + 1 (1 1 1)"))
        .stdout(predicate::str::contains("every nonzero element is invertible"))
        .stdout(predicate::str::contains("3  x + 1"));

    let output = gfcalc()
        .args(["info", "9", "--output-format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["prime"], 3);
    assert_eq!(json["power"], 2);
    assert_eq!(json["irreducible_coefficients"], "1 0 1");
    assert!(json.get("elements").is_none());

    gfcalc()
        .args(["info", "4", "--output-format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("x^2 + x + 1"));
}

#[test]
fn info_listing_size_limit() {
    gfcalc()
        .args(["info", "65536", "--check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    gfcalc()
        .args(["info", "128", "--elements"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("more than the table limit of 64"));

    gfcalc()
        .args(["info", "128"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Field GF(128)"));

    gfcalc()
        .args(["info", "128", "--elements", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("127  x^6 + x^5 + x^4 + x^3 + x^2 + x + 1"));
}

#[test]
fn info_flags_reducible_modulus() {
    gfcalc()
        .args(["info", "4", "-i", "1 0 1", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("zero divisors found"));
}

#[test]
fn config_supplies_irreducible() {
    let mut config = tempfile::NamedTempFile::new().unwrap();
    std::io::Write::write_all(&mut config, b"[irreducible]\n\"9\" = \"1 1 2\"\n").unwrap();

    gfcalc()
        .arg("-c")
        .arg(config.path())
        .args(["info", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("x^2 + x + 2"));
}

#[test]
fn search_limit() {
    gfcalc()
        .args(["calc", "1048576", "1", "+", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("too big to search"));
}

#[test]
fn irreducible_listing() {
    gfcalc()
        .args(["irreducible", "8"])
        .assert()
        .success()
        .stdout("1 0 1 1  x^3 + x + 1\n1 1 0 1  x^3 + x^2 + 1\n");

    gfcalc()
        .args(["irreducible", "25", "--limit", "3"])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| out.lines().count() == 3));

    gfcalc()
        .args(["irreducible", "25", "--all"])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| out.lines().count() == 10));

    gfcalc()
        .args(["irreducible", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GF(10) doesn't exist"));
}
