//! Command-line behavior of the `bizday` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A command isolated from the user's config file and environment.
fn bizday(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bizday").unwrap();
    cmd.arg("--config")
        .arg(dir.path().join("config.json"))
        .env_remove("BIZDAY_COUNTRY")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn is_business_reports_us_holidays() {
    let dir = TempDir::new().unwrap();
    bizday(&dir)
        .args(["is-business", "2018-12-25", "--country", "US"])
        .assert()
        .success()
        .stdout("false\n");
    bizday(&dir)
        .args(["is-business", "2019-01-23", "--country", "us"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn is_holiday_uses_country() {
    let dir = TempDir::new().unwrap();
    bizday(&dir)
        .args(["is-holiday", "2019-07-14", "-c", "FR"])
        .assert()
        .success()
        .stdout("true\n");
    bizday(&dir)
        .args(["is-holiday", "2019-07-14", "-c", "BJ"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn country_from_environment() {
    let dir = TempDir::new().unwrap();
    bizday(&dir)
        .env("BIZDAY_COUNTRY", "FR")
        .args(["is-holiday", "2019-07-14"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn unknown_country_warns_and_uses_sentinels() {
    let dir = TempDir::new().unwrap();
    bizday(&dir)
        .args(["is-business", "2019-01-23", "--country", "USAT"])
        .assert()
        .success()
        .stdout("false\n")
        .stderr(predicate::str::contains("Unknown country code 'USAT'"));
    bizday(&dir)
        .args(["--quiet", "is-business", "2019-01-23", "--country", "USAT"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn weekend_and_weekday_predicates() {
    let dir = TempDir::new().unwrap();
    bizday(&dir)
        .args(["is-weekend", "2019-06-01"])
        .assert()
        .success()
        .stdout("true\n");
    bizday(&dir)
        .args(["is-weekday", "2019-06-05"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn check_json_output() {
    let dir = TempDir::new().unwrap();
    bizday(&dir)
        .args(["check", "2019-01-22", "--country", "US", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"date\": \"2019-01-22\""))
        .stdout(predicate::str::contains("\"holiday\": true"))
        .stdout(predicate::str::contains("\"business\": false"));
}

#[test]
fn check_table_output() {
    let dir = TempDir::new().unwrap();
    bizday(&dir)
        .args(["check", "2019-01-23", "--country", "US"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wednesday, January 23rd 2019"))
        .stdout(predicate::str::contains("is a business day in US"));
}

#[test]
fn between_minimal_output() {
    let dir = TempDir::new().unwrap();
    bizday(&dir)
        .args(["between", "2018-12-25", "2019-01-25", "-c", "US", "-f", "minimal"])
        .assert()
        .success()
        .stdout("23 8 4\n");
}

#[test]
fn between_reversed_range() {
    let dir = TempDir::new().unwrap();
    bizday(&dir)
        .args(["between", "2019-06-07", "2019-06-01", "-c", "US", "-f", "minimal"])
        .assert()
        .success()
        .stdout("-4 -2 -1\n");
}

#[test]
fn add_business_days() {
    let dir = TempDir::new().unwrap();
    bizday(&dir)
        .args(["add", "2018-12-25", "20", "-c", "US", "-f", "minimal"])
        .assert()
        .success()
        .stdout("2019-01-28\n");
    bizday(&dir)
        .args(["add", "2018-12-25", "20", "-c", "US", "-f", "minimal", "--style", "long"])
        .assert()
        .success()
        .stdout("Monday, January 28th 2019\n");
}

#[test]
fn add_non_positive_amount_prints_none() {
    let dir = TempDir::new().unwrap();
    bizday(&dir)
        .args(["add", "2018-12-25", "-1", "-c", "US", "-f", "minimal"])
        .assert()
        .success()
        .stdout("none\n");
    bizday(&dir)
        .args(["add", "2018-12-25", "3", "-c", "US", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"result\": \"2018-12-31\""));
}

#[test]
fn calendar_lists_each_day() {
    let dir = TempDir::new().unwrap();
    bizday(&dir)
        .args(["calendar", "2019-07-13", "2019-07-15", "-c", "FR", "-f", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("date,weekday,weekend,holiday,business\n"))
        .stdout(predicate::str::contains("2019-07-14,Sunday,true,true,false"))
        .stdout(predicate::str::contains("2019-07-15,Monday,false,false,true"));
}

#[test]
fn calendar_rejects_reversed_range() {
    let dir = TempDir::new().unwrap();
    bizday(&dir)
        .args(["calendar", "2019-07-15", "2019-07-13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid range"));
}

#[test]
fn malformed_date_fails() {
    let dir = TempDir::new().unwrap();
    bizday(&dir)
        .args(["is-weekend", "June 1 2019"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid date format: June 1 2019. Use YYYY-MM-DD.",
        ));
}

#[test]
fn config_default_country_is_used() {
    let dir = TempDir::new().unwrap();
    bizday(&dir)
        .args(["config", "set", "country", "fr"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set default_country = FR"));
    bizday(&dir)
        .args(["is-holiday", "2019-07-14"])
        .assert()
        .success()
        .stdout("true\n");
    bizday(&dir)
        .args(["config", "get", "default_country", "-f", "minimal"])
        .assert()
        .success()
        .stdout("FR\n");
}

#[test]
fn config_rejects_invalid_values() {
    let dir = TempDir::new().unwrap();
    bizday(&dir)
        .args(["config", "set", "default_country", "USAT"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid country code"));
    bizday(&dir)
        .args(["config", "set", "currency", "USD"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration key"));
}

#[test]
fn config_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();
    bizday(&dir).args(["config", "set", "date_style", "long"]).assert().success();
    bizday(&dir)
        .args(["add", "2019-06-07", "1", "-c", "GB", "-f", "minimal"])
        .assert()
        .success()
        .stdout("Monday, June 10th 2019\n");

    bizday(&dir).args(["config", "reset", "--all"]).assert().success();
    bizday(&dir)
        .args(["config", "show", "-f", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("date_style=iso"))
        .stdout(predicate::str::contains("default_country=US"));
}

#[test]
fn unreadable_settings_fall_back_to_defaults_until_reset() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ not json").unwrap();

    bizday(&dir)
        .args(["is-weekend", "2019-06-01"])
        .assert()
        .success()
        .stdout("true\n")
        .stderr(predicate::str::contains("Ignoring settings file"));
    bizday(&dir)
        .args(["-q", "is-business", "2018-12-25"])
        .assert()
        .success()
        .stdout("false\n")
        .stderr(predicate::str::is_empty());

    bizday(&dir).args(["config", "reset", "--all"]).assert().success();
    bizday(&dir)
        .args(["config", "show", "-f", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_country=US"))
        .stderr(predicate::str::is_empty());
}
