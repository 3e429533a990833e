//! Golden file tests for the demo report.
//!
//! The text rendering of a full demo run is compared byte-for-byte against
//! `tests/golden/demo_report.txt`.
//!
//! # Updating Golden Files
//!
//! When making intentional changes to report output:
//! ```bash
//! TALLY_UPDATE_GOLDEN=1 cargo test --test golden_tests
//! git diff tests/golden/  # Review changes
//! ```

use std::fs;
use std::path::PathBuf;

use tally::demo::{run_demo, ARRAY_BATCH, SINGLE_BATCH, STRING_BATCH};
use tally::output::{emit_response, render_text};

fn golden_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("golden")
        .join(name)
}

fn update_golden() -> bool {
    std::env::var("TALLY_UPDATE_GOLDEN").is_ok()
}

#[test]
fn golden_text_report() {
    let mut out = Vec::new();
    render_text(&run_demo(), &mut out).expect("render should succeed");
    let actual = String::from_utf8(out).expect("report is UTF-8");

    let path = golden_path("demo_report.txt");
    if update_golden() {
        fs::write(&path, &actual).expect("failed to write golden file");
        return;
    }

    let expected = fs::read_to_string(&path).expect("failed to read golden file");
    assert_eq!(
        actual, expected,
        "text report differs from {}; rerun with TALLY_UPDATE_GOLDEN=1 if intentional",
        path.display()
    );
}

#[test]
fn text_report_error_lines_per_batch() {
    let mut out = Vec::new();
    render_text(&run_demo(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let single_errors = text
        .lines()
        .filter(|line| *line == "Error: Cannot apply XOR operation to SingleElement type")
        .count();
    let array_errors = text
        .lines()
        .filter(|line| *line == "Error: Cannot apply XOR operation to ArrayElement type")
        .count();
    assert_eq!(single_errors, 9);
    assert_eq!(array_errors, 4);
    assert!(!text.contains("StringElement type"));
}

#[test]
fn json_report_structure() {
    let mut out = Vec::new();
    emit_response(&run_demo(), &mut out).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).expect("valid JSON");

    assert_eq!(json["status"], "ok");
    let batches = json["batches"].as_array().expect("batches array");
    assert_eq!(batches.len(), 3);

    assert_eq!(batches[0]["name"], SINGLE_BATCH);
    assert_eq!(batches[1]["name"], ARRAY_BATCH);
    assert_eq!(batches[2]["name"], STRING_BATCH);

    for batch in batches {
        assert_eq!(batch["sum"], 45.0);
        assert_eq!(batch["product"], 362880.0);
    }
    assert_eq!(batches[0]["errors"].as_array().unwrap().len(), 9);
    assert_eq!(batches[1]["errors"].as_array().unwrap().len(), 4);
    assert_eq!(batches[1]["errors"][0]["operation"], "xor");
    assert_eq!(batches[2]["errors"].as_array().unwrap().len(), 0);
    assert_eq!(batches[2]["checksum"], 51);
}
