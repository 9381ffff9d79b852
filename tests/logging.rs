use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use compare_files::loader::{LoadOptions, LoadSeverity, TracingObserver, load_from_bytes, load_from_path};
use compare_files::logging::{LoggingConfig, build_subscriber};

fn tmp_log(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("compare-files-{name}-{nanos}.log"))
}

fn file_config(path: PathBuf) -> LoggingConfig {
    LoggingConfig {
        ansi: false,
        log_file: Some(path),
        ..Default::default()
    }
}

#[test]
fn log_file_records_load_outcomes() {
    let path = tmp_log("outcomes");
    let (subscriber, guard) = build_subscriber(&file_config(path.clone())).unwrap();

    let opts = LoadOptions {
        observer: Some(Arc::new(TracingObserver)),
        alert_at_or_above: LoadSeverity::Error,
        ..Default::default()
    };
    tracing::subscriber::with_default(subscriber, || {
        load_from_path("tests/fixtures/ledger_right.csv", &opts).unwrap();
        let _ = load_from_bytes(b"a\n1,2\n", "bad.csv", &opts).unwrap_err();
    });
    // Flushes the background writer.
    drop(guard);

    let log = std::fs::read_to_string(&path).unwrap();
    assert!(log.contains("table loaded"), "{log}");
    assert!(log.contains("source=tests/fixtures/ledger_right.csv"), "{log}");
    assert!(log.contains("rows=3"), "{log}");
    assert!(log.contains("table load failed"), "{log}");
    assert!(log.contains("table load alert"), "{log}");
    assert!(log.contains("source=bad.csv"), "{log}");

    let _ = std::fs::remove_file(&path);
}

#[test]
fn log_file_appends_across_runs() {
    let path = tmp_log("append");
    std::fs::write(&path, "earlier run\n").unwrap();

    let (subscriber, guard) = build_subscriber(&file_config(path.clone())).unwrap();
    tracing::subscriber::with_default(subscriber, || {
        tracing::warn!("second run");
    });
    drop(guard);

    let log = std::fs::read_to_string(&path).unwrap();
    assert!(log.starts_with("earlier run\n"), "{log}");
    assert!(log.contains("second run"), "{log}");

    let _ = std::fs::remove_file(&path);
}

#[test]
fn unopenable_log_file_is_an_error() {
    let path = std::env::temp_dir()
        .join("compare-files-no-such-dir")
        .join("nested")
        .join("run.log");
    assert!(build_subscriber(&file_config(path)).is_err());
}

#[test]
fn json_log_file_writes_json_lines() {
    let path = tmp_log("json");
    let config = LoggingConfig {
        json: true,
        ..file_config(path.clone())
    };
    let (subscriber, guard) = build_subscriber(&config).unwrap();
    tracing::subscriber::with_default(subscriber, || {
        tracing::warn!(rows = 3, "table loaded");
    });
    drop(guard);

    let log = std::fs::read_to_string(&path).unwrap();
    let line = log.lines().next().unwrap();
    let event: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(event["fields"]["message"], "table loaded");
    assert_eq!(event["fields"]["rows"], 3);

    let _ = std::fs::remove_file(&path);
}
