//! Asset loading and quality analysis against fixture catalogs, plus a check
//! of the shipped data asset.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use matrixhub::catalog::DetailView;
use matrixhub::data::{analyze_catalog, load_catalog};

fn record_json(id: &str, n: u64, extra: &str) -> String {
    format!(
        r#"{{
            "id": "{id}",
            "name": "Matrix {id}",
            "description": "fixture record",
            "size": "{n} x {n}",
            "n": {n},
            "type": "DFT",
            "system": "Si",
            "symmetryType": "Hermitian",
            "software": "FLEUR",
            "dataType": "Complex double",
            "format": "Dense binary",
            "nev": 8,
            "properties": ["Dense"],
            "downloadUrl": "https://matrixhub.example.org/files/{id}/id_1.bin"{extra}
        }}"#
    )
}

fn write_asset(dir: &TempDir, name: &str, records: &[String]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, format!("[{}]", records.join(","))).unwrap();
    path
}

#[test]
fn good_asset_loads_with_first_seen_options() {
    let dir = TempDir::new().unwrap();
    let path = write_asset(
        &dir,
        "good.json",
        &[
            record_json("a", 100, ""),
            record_json("b", 200, ""),
            record_json("c", 300, ""),
        ],
    );
    let catalog = load_catalog(&path).unwrap();
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.options().systems, vec!["Si"]);
    match catalog.detail("b") {
        DetailView::Found(m) => assert_eq!(m.n, 200),
        DetailView::NotFound { .. } => panic!("expected record b"),
    }
}

#[test]
fn duplicate_ids_fail_to_load() {
    let dir = TempDir::new().unwrap();
    let path = write_asset(
        &dir,
        "dup.json",
        &[record_json("a", 100, ""), record_json("a", 200, "")],
    );
    let err = load_catalog(&path).unwrap_err();
    assert!(err.contains("duplicate"), "err was {}", err);
}

#[test]
fn malformed_json_fails_to_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "[{").unwrap();
    assert!(load_catalog(&path).is_err());
}

#[test]
fn analysis_counts_bad_records_and_duplicates() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mixed.json");
    fs::write(
        &path,
        format!(
            "[{},{},{}]",
            record_json("a", 100, ""),
            r#"{"id": "broken"}"#,
            record_json("a", 300, ""),
        ),
    )
    .unwrap();

    let (manifest, report) = analyze_catalog(&path).unwrap();
    assert_eq!(manifest.record_count, 2);
    assert_eq!(manifest.bad_records, 1);
    assert_eq!(manifest.duplicate_ids, vec!["a"]);
    assert_eq!(report.duplicates, 1);
    assert!(report.warnings.iter().any(|w| w.contains("bad_record")));
}

#[test]
fn analysis_warns_on_suspect_records() {
    let dir = TempDir::new().unwrap();
    let nonsense_nev = record_json("a", 4, "").replace("\"nev\": 8", "\"nev\": 999");
    let broken_sequence = record_json("b", 64, ", \"numCorrelatedSystems\": 5")
        .replace("id_1.bin", "whole_series.tar");
    let path = write_asset(&dir, "suspect.json", &[nonsense_nev, broken_sequence]);

    let (_, report) = analyze_catalog(&path).unwrap();
    assert!(report.warnings.iter().any(|w| w.contains("nev")));
    assert!(report
        .warnings
        .iter()
        .any(|w| w.contains("id_<k>.bin")));
}

#[test]
fn manifest_hash_is_stable_across_reads() {
    let dir = TempDir::new().unwrap();
    let path = write_asset(&dir, "stable.json", &[record_json("a", 100, "")]);
    let (first, _) = analyze_catalog(&path).unwrap();
    let (second, _) = analyze_catalog(&path).unwrap();
    assert_eq!(first.hash_sha256, second.hash_sha256);
    assert_eq!(first.hash_sha256.len(), 64);
}

#[test]
fn shipped_asset_is_valid() {
    let path = Path::new("data/matrices.json");
    if !path.exists() {
        eprintln!("SKIP shipped_asset_is_valid: {} not found", path.display());
        return;
    }
    let catalog = load_catalog(path).unwrap();
    assert!(!catalog.is_empty());
    let (manifest, report) = analyze_catalog(path).unwrap();
    assert_eq!(manifest.record_count as usize, catalog.len());
    assert_eq!(manifest.bad_records, 0);
    assert!(manifest.duplicate_ids.is_empty());
    assert!(
        report.warnings.is_empty(),
        "shipped asset has warnings: {:?}",
        report.warnings
    );
}
