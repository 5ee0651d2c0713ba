use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/data")
}

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("econ-charts").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("render").and(predicate::str::contains("domain")));
}

#[test]
fn render_writes_three_svgs_and_a_page() {
    let out = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("econ-charts").unwrap();
    cmd.arg("render")
        .arg("--data-dir")
        .arg(fixtures())
        .arg("--out-dir")
        .arg(out.path())
        .arg("--page");
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Wrote page to"));

    for name in ["bar-chart.svg", "line-chart.svg", "scatterplot.svg", "index.html"] {
        assert!(out.path().join(name).exists(), "{name} missing");
    }
}

#[test]
fn render_with_custom_palette() {
    let dir = tempdir().unwrap();
    let palette = dir.path().join("palette.json");
    std::fs::write(
        &palette,
        r##"{
            "entries": [{"name": "Japan", "label": "JP", "color": "#112233"}],
            "fallback": {"name": "Other", "label": "Other", "color": "#445566"}
        }"##,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("econ-charts").unwrap();
    cmd.arg("render")
        .arg("--data-dir")
        .arg(fixtures())
        .arg("--out-dir")
        .arg(dir.path())
        .arg("--palette")
        .arg(&palette);
    cmd.assert().success();

    let svg = std::fs::read_to_string(dir.path().join("bar-chart.svg")).unwrap();
    assert!(svg.to_lowercase().contains("#112233"));
    assert!(svg.contains("JP"));
}

#[test]
fn render_fails_when_no_dataset_loads() {
    let empty = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("econ-charts").unwrap();
    cmd.arg("render")
        .arg("--data-dir")
        .arg(empty.path())
        .arg("--out-dir")
        .arg(empty.path().join("out"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no chart could be rendered"));
}

#[test]
fn domain_prints_grouped_values() {
    let mut cmd = Command::cargo_bin("econ-charts").unwrap();
    cmd.arg("domain")
        .arg("--data-dir")
        .arg(fixtures())
        .args(["--locale", "de"]);
    cmd.assert()
        .success()
        // 44968.2 rounded up to the next tick boundary
        .stdout(predicate::str::contains("bar-chart  GDP_per_Capita  years=2000..=2010  values=0..=45.000"))
        .stdout(predicate::str::contains("line-chart  GDP  years=1970..=2020"));
}

#[test]
fn domain_skips_an_empty_dataset_and_prints_the_rest() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("gdp_per_capita.json"), "[]").unwrap();
    for name in ["gdp.json", "population.json"] {
        std::fs::copy(fixtures().join(name), dir.path().join(name)).unwrap();
    }

    let mut cmd = Command::cargo_bin("econ-charts").unwrap();
    cmd.arg("domain").arg("--data-dir").arg(dir.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("bar-chart").not())
        .stdout(predicate::str::contains("line-chart  GDP  years=1970..=2020"))
        .stdout(predicate::str::contains("scatterplot  Population  years=1970..=2020"));
}

#[test]
fn domain_fails_when_nothing_can_be_computed() {
    let empty = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("econ-charts").unwrap();
    cmd.arg("domain").arg("--data-dir").arg(empty.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no chart domain could be computed"));
}
