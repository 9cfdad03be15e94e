use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use devchart::{CalendarWindow, Chart, ChartConfig, View};
use sha2::{Digest, Sha256};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

fn fixture_chart() -> Chart {
    let html = fs::read_to_string("tests/fixtures/github_contributions.html").expect("read fixture");
    let json = fs::read_to_string("tests/fixtures/gitlab_calendar.json").expect("read fixture");
    let window = CalendarWindow::ending(NaiveDate::from_ymd_opt(2024, 10, 16).unwrap());
    Chart::from_payloads(window, Some(Ok(html)), Some(Ok(json)))
}

/// Compare the SHA-256 of `svg` with the stored digest, or refresh it when
/// `UPDATE_GOLDENS` is set.
fn check_golden(name: &str, svg: &str) {
    let digest = hex::encode(Sha256::digest(svg.as_bytes()));
    let expected_path = golden_path(name);
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, &digest).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    if !expected_path.exists() {
        println!(
            "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
            expected_path
        );
        return;
    }

    let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(digest, exp.trim(), "SVG for {} changed", name);
}

#[test]
fn golden_daily_svg() {
    let svg = fixture_chart().to_svg(View::Daily, &ChartConfig::default());
    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="734" height="148""#));
    // 364 cells plus two split days, 8 legend swatches, 1 background.
    assert_eq!(svg.matches("<rect ").count(), 366 + 8 + 1);
    check_golden("daily.svg.sha256", &svg);
}

#[test]
fn golden_weekly_svg() {
    let svg = fixture_chart().to_svg(View::Weekly, &ChartConfig::default());
    assert!(svg.contains(r#"height="64""#));
    // 52 weekly positions plus three split weeks.
    assert_eq!(svg.matches("<rect ").count(), 55 + 8 + 1);
    assert!(svg.contains("<title>40 contributions in GitHub on Sun Mar 03 2024 - Sat Mar 09 2024</title>"));
    check_golden("weekly.svg.sha256", &svg);
}

#[test]
fn goldens_are_committed() {
    for name in ["daily.svg.sha256", "weekly.svg.sha256"] {
        let digest = fs::read_to_string(golden_path(name)).unwrap_or_default();
        assert_eq!(digest.trim().len(), 64, "missing or malformed golden {}", name);
    }
}

#[test]
fn svg_is_deterministic() {
    let chart = fixture_chart();
    let config = ChartConfig::default();
    assert_eq!(chart.to_svg(View::Daily, &config), chart.to_svg(View::Daily, &config));
}
