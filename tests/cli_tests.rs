//! Integration tests for the command line interface

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary isolated from the user's config and data
fn carefinder(data: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("carefinder").unwrap();
    cmd.env("CAREFINDER_DATA_DIR", data.path())
        .env("CAREFINDER_API_URL", "http://127.0.0.1:9/api")
        .env("CAREFINDER_TIMEOUT_SECS", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_cli_help_flag() {
    let data = TempDir::new().unwrap();
    carefinder(&data)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("serve-mock"));
}

#[test]
fn test_fee_with_discount() {
    let data = TempDir::new().unwrap();
    carefinder(&data)
        .args(["fee", "--grade", "3", "--discount"])
        .assert()
        .success()
        .stdout(predicate::str::contains("64만원"));
}

#[test]
fn test_fee_without_grade_shows_placeholder() {
    let data = TempDir::new().unwrap();
    carefinder(&data)
        .arg("fee")
        .assert()
        .success()
        .stdout(predicate::str::contains("월 예상 비용: -"));
}

#[test]
fn test_launch_routes_by_onboarding_state() {
    let data = TempDir::new().unwrap();
    carefinder(&data)
        .args(["launch", "--no-splash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/welcome"));

    carefinder(&data)
        .args(["onboard", "--has-grade", "yes", "--service", "home"])
        .assert()
        .success();

    carefinder(&data)
        .args(["launch", "--no-splash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/home"));
}

#[test]
fn test_search_remembers_service_type() {
    let data = TempDir::new().unwrap();
    carefinder(&data)
        .args(["search", "--type", "시설급여"])
        .assert()
        .success()
        .stdout(predicate::str::contains("해피케어요양원"))
        .stdout(predicate::str::contains("한결요양원"))
        .stdout(predicate::str::contains("든든재가센터").not());

    carefinder(&data)
        .args(["search", "한결"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[시설급여] 1 results"));
}

#[test]
fn test_filters_set_and_show() {
    let data = TempDir::new().unwrap();
    carefinder(&data)
        .args(["filters", "set", "--distance", "3", "--fee-min", "60", "--vehicle", "yes"])
        .assert()
        .success();

    carefinder(&data)
        .args(["filters", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3km"))
        .stdout(predicate::str::contains("true"));

    assert!(data.path().join("store.json").exists());
}

#[test]
fn test_invalid_filter_fee_exits_with_validation_code() {
    let data = TempDir::new().unwrap();
    carefinder(&data)
        .args(["filters", "set", "--fee-min", "육십"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("feeMin"));
}

#[test]
fn test_onboard_requires_service_with_grade() {
    let data = TempDir::new().unwrap();
    carefinder(&data)
        .args(["onboard", "--has-grade", "yes"])
        .assert()
        .code(2);
}

#[test]
fn test_review_requires_login() {
    let data = TempDir::new().unwrap();
    carefinder(&data)
        .args(["review", "1", "--rating", "5", "--content", "좋아요"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("로그인이 필요합니다"));
}

#[test]
fn test_feed_reports_load_failure() {
    let data = TempDir::new().unwrap();
    carefinder(&data)
        .arg("feed")
        .assert()
        .failure()
        .stderr(predicate::str::contains("데이터를 불러오지 못했어요"));
}

#[test]
fn test_record_set_then_show() {
    let data = TempDir::new().unwrap();
    carefinder(&data)
        .args([
            "record",
            "set",
            "--facility",
            "한결요양원",
            "--date",
            "2024-03-09",
            "--amount",
            "1200000",
            "--services",
            "day-care,shuttle",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("저장되었습니다"));

    carefinder(&data)
        .args(["record", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("한결요양원"))
        .stdout(predicate::str::contains("2024-03-09"))
        .stdout(predicate::str::contains("1,200,000원"))
        .stdout(predicate::str::contains("송영(차량)"));
}

#[test]
fn test_record_without_facility_is_validation_error() {
    let data = TempDir::new().unwrap();
    carefinder(&data)
        .args(["record", "set", "--payment-day", "31"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("시설명을 입력해주세요."));

    carefinder(&data)
        .args(["record", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("저장된 기록이 없습니다."));
}

#[test]
fn test_find_featured_tolerates_offline_api() {
    let data = TempDir::new().unwrap();
    carefinder(&data)
        .args(["find", "--featured"])
        .assert()
        .success()
        .stdout(predicate::str::contains("검색 결과가 없습니다."));
}
