// tests/integration_pipeline.rs
//! Full runs against throwaway log/report directories.

use anyhow::Result;
use flate2::write::GzEncoder;
use flate2::Compression;
use latency_report_core::config::Config;
use latency_report_core::error::AnalyzerError;
use latency_report_core::pipeline;
use latency_report_core::types::RunOutcome;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

const LOG_OK: &str = r#"0.0.0.0 -  - [] "GET /api1 HTTP/1.1" 200 927 "-" "-" "-" "-" "-" 1
0.0.0.0 -  - [] "GET /api1 HTTP/1.1" 200 927 "-" "-" "-" "-" "-" 1.4
0.0.0.0 -  - [] "GET /api2 HTTP/1.1" 200 927 "-" "-" "-" "-" "-" 2
"#;

const LOG_NOISY: &str = r#"0.0.0.0 -  - [] "GET /api1 HTTP/1.1" 200 927 "-" "-" "-" "-" "-" 1
0.0.0.0 -  - [] "GET /api1 HTTP/1.1" 200 927 "-" "-" "-" "-" "-" 1.4
0.0.0.0 -  - [] "GET /api2 HTTP/1.1" 200 927 "-" "-" "-" "-" "-" 2
0.0.0.0 -  - [] "GET /api2 HTTP/1.1" 200 927 "-" "-" "-" "-" "-" "-"
"#;

// --- Helpers ---

struct Env {
    _root: TempDir,
    config: Config,
}

fn env(errors_limit: f64) -> Result<Env> {
    let root = TempDir::new()?;
    let log_dir = root.path().join("log");
    let report_dir = root.path().join("reports");
    fs::create_dir_all(&log_dir)?;
    let config = Config {
        log_dir,
        report_dir,
        errors_limit,
        report_size: 10,
        ..Config::default()
    };
    Ok(Env {
        _root: root,
        config,
    })
}

fn write_plain(dir: &Path, name: &str, content: &str) -> Result<()> {
    fs::write(dir.join(name), content)?;
    Ok(())
}

fn write_gz(dir: &Path, name: &str, content: &str) -> Result<()> {
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(content.as_bytes())?;
    fs::write(dir.join(name), enc.finish()?)?;
    Ok(())
}

/// Pulls the JSON array back out of the built-in page.
fn table_json(report: &Path) -> Result<serde_json::Value> {
    let html = fs::read_to_string(report)?;
    let start = html.find("var table = ").map(|i| i + "var table = ".len());
    let json = start
        .and_then(|s| html[s..].find(";\n").map(|e| &html[s..s + e]))
        .ok_or_else(|| anyhow::anyhow!("no table in report"))?;
    Ok(serde_json::from_str(json)?)
}

fn assert_close(v: &serde_json::Value, expected: f64) {
    let actual = v.as_f64().unwrap_or(f64::NAN);
    assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {v}");
}

// --- Runs ---

#[test]
fn test_latest_log_picked_and_reported() -> Result<()> {
    let e = env(0.1)?;
    write_plain(&e.config.log_dir, "nginx-access-ui.log-20170628", LOG_OK)?;
    write_gz(&e.config.log_dir, "nginx-access-ui.log-20170629.gz", LOG_OK)?;
    write_plain(&e.config.log_dir, "nginx-access-ui.log-20170630.bz2", "not gzip")?;

    let outcome = pipeline::run(&e.config)?;
    let expected = e.config.report_dir.join("report-2017.06.29.html");
    assert_eq!(outcome.report_path(), &expected);
    assert!(outcome.was_published());
    assert!(expected.exists());
    assert!(!e.config.report_dir.join("report-2017.06.28.html").exists());
    Ok(())
}

#[test]
fn test_report_contains_ranked_rows() -> Result<()> {
    let e = env(0.1)?;
    write_gz(&e.config.log_dir, "nginx-access-ui.log-20170629.gz", LOG_OK)?;

    let outcome = pipeline::run(&e.config)?;
    let table = table_json(outcome.report_path())?;
    let rows = table.as_array().expect("array");
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0]["url"], "/api1");
    assert_eq!(rows[0]["count"], 2);
    assert_close(&rows[0]["count_perc"], 66.667);
    assert_close(&rows[0]["time_sum"], 2.4);
    assert_close(&rows[0]["time_perc"], 54.545);
    assert_close(&rows[0]["time_avg"], 1.2);
    assert_close(&rows[0]["time_max"], 1.4);
    assert_close(&rows[0]["time_med"], 1.2);

    assert_eq!(rows[1]["url"], "/api2");
    assert_eq!(rows[1]["count"], 1);
    assert_close(&rows[1]["count_perc"], 33.333);
    assert_close(&rows[1]["time_sum"], 2.0);
    assert_close(&rows[1]["time_perc"], 45.455);
    Ok(())
}

#[test]
fn test_no_matching_log_is_an_error() -> Result<()> {
    let e = env(0.1)?;
    write_plain(&e.config.log_dir, "nginx-access-ui.log-20170628.bz2", LOG_OK)?;

    match pipeline::run(&e.config) {
        Err(AnalyzerError::NoLogFound { dir }) => assert_eq!(dir, e.config.log_dir),
        other => panic!("expected NoLogFound, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_missing_log_dir_is_no_log() -> Result<()> {
    let mut e = env(0.1)?;
    e.config.log_dir = e.config.log_dir.join("absent");
    assert!(matches!(
        pipeline::run(&e.config),
        Err(AnalyzerError::NoLogFound { .. })
    ));
    Ok(())
}

#[test]
fn test_existing_report_is_up_to_date() -> Result<()> {
    let e = env(0.1)?;
    write_plain(&e.config.log_dir, "nginx-access-ui.log-20170628", LOG_OK)?;
    fs::create_dir_all(&e.config.report_dir)?;
    let report = e.config.report_dir.join("report-2017.06.28.html");
    fs::write(&report, "")?;

    let outcome = pipeline::run(&e.config)?;
    assert_eq!(outcome, RunOutcome::UpToDate { report: report.clone() });
    assert_eq!(fs::read_to_string(&report)?, "");
    Ok(())
}

#[test]
fn test_second_run_is_noop() -> Result<()> {
    let e = env(0.1)?;
    write_plain(&e.config.log_dir, "nginx-access-ui.log-20170628", LOG_OK)?;

    let first = pipeline::run(&e.config)?;
    assert!(first.was_published());
    let written = fs::read_to_string(first.report_path())?;

    let second = pipeline::run(&e.config)?;
    assert!(!second.was_published());
    assert_eq!(second.report_path(), first.report_path());
    assert_eq!(fs::read_to_string(second.report_path())?, written);
    assert_eq!(fs::read_dir(&e.config.report_dir)?.count(), 1);
    Ok(())
}

#[test]
fn test_errors_limit_exceeded_writes_nothing() -> Result<()> {
    let e = env(0.1)?;
    write_plain(&e.config.log_dir, "nginx-access-ui.log-20170628", LOG_NOISY)?;

    match pipeline::run(&e.config) {
        Err(AnalyzerError::ErrorsLimitExceeded { failed, total, .. }) => {
            assert_eq!((failed, total), (1, 4));
        }
        other => panic!("expected ErrorsLimitExceeded, got {other:?}"),
    }
    assert!(!e.config.report_dir.join("report-2017.06.28.html").exists());
    Ok(())
}

#[test]
fn test_noise_within_limit_still_reports() -> Result<()> {
    let e = env(0.5)?;
    write_plain(&e.config.log_dir, "nginx-access-ui.log-20170628", LOG_NOISY)?;

    match pipeline::run(&e.config)? {
        RunOutcome::Published { rows, gate, .. } => {
            assert_eq!(rows.len(), 2);
            assert_eq!(gate.total_lines, 4);
            assert_eq!(gate.failed_lines, 1);
        }
        other => panic!("expected a published report, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_empty_log_gives_empty_report() -> Result<()> {
    let e = env(0.0)?;
    write_plain(&e.config.log_dir, "nginx-access-ui.log-20170628", "")?;

    let outcome = pipeline::run(&e.config)?;
    let table = table_json(outcome.report_path())?;
    assert_eq!(table, serde_json::json!([]));
    Ok(())
}

#[test]
fn test_report_dir_template_used() -> Result<()> {
    let e = env(0.1)?;
    write_plain(&e.config.log_dir, "nginx-access-ui.log-20170628", LOG_OK)?;
    fs::create_dir_all(&e.config.report_dir)?;
    fs::write(e.config.report_dir.join("report.html"), "var table = $table_json;")?;

    let outcome = pipeline::run(&e.config)?;
    let html = fs::read_to_string(outcome.report_path())?;
    assert!(html.starts_with("var table = [{\"url\":\"/api1\""));
    Ok(())
}

#[test]
fn test_invalid_config_rejected_before_io() -> Result<()> {
    let mut e = env(0.1)?;
    e.config.errors_limit = 64.0;
    assert!(matches!(
        pipeline::run(&e.config),
        Err(AnalyzerError::Config(_))
    ));
    Ok(())
}

#[test]
fn test_corrupt_gzip_read_error_names_log() -> Result<()> {
    let e = env(0.5)?;
    let log = e.config.log_dir.join("nginx-access-ui.log-20170628.gz");
    let mut bytes = vec![0x1f, 0x8b, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff];
    bytes.extend_from_slice(&[0xff; 64]);
    fs::write(&log, bytes)?;

    match pipeline::run(&e.config) {
        Err(AnalyzerError::Io { path, .. }) => assert_eq!(path, log),
        other => panic!("expected an I/O error, got {other:?}"),
    }
    assert!(!e.config.report_dir.join("report-2017.06.28.html").exists());
    Ok(())
}

#[test]
fn test_over_long_line_counts_as_unparsable() -> Result<()> {
    let e = env(0.5)?;
    let junk = "x".repeat(latency_report_core::source::MAX_LINE_BYTES * 2);
    write_plain(
        &e.config.log_dir,
        "nginx-access-ui.log-20170628",
        &format!("{junk}\n{LOG_OK}"),
    )?;

    match pipeline::run(&e.config)? {
        RunOutcome::Published { rows, gate, .. } => {
            assert_eq!(rows.len(), 2);
            assert_eq!(gate.total_lines, 4);
            assert_eq!(gate.failed_lines, 1);
        }
        other => panic!("expected a published report, got {other:?}"),
    }
    Ok(())
}
