//! Loading and quality analysis for the static matrix data asset.
//!
//! The asset is the one external input of the system: an ordered JSON list of
//! matrix records. It is read once, validated, and never written. The manifest
//! produced here is what tooling and tests use to pin down exactly which asset
//! a run saw.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::catalog::{Catalog, MatrixRecord};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogManifest {
    pub path: String,
    pub hash_sha256: String,
    pub record_count: u64,
    pub bad_records: u64,
    pub duplicate_ids: Vec<String>,
    pub warnings: Vec<String>,
    pub generated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogQualityReport {
    pub records: u64,
    pub bad_records: u64,
    pub duplicates: u64,
    pub warnings: Vec<String>,
}

/// Load the asset into a catalog. Malformed JSON and duplicate ids are load
/// failures; per-record oddities are surfaced by [`analyze_catalog`] instead.
pub fn load_catalog(path: &Path) -> Result<Catalog, String> {
    let records = read_records(path)?;
    Catalog::new(records)
}

fn read_records(path: &Path) -> Result<Vec<MatrixRecord>, String> {
    let mut file = File::open(path).map_err(|e| format!("cannot open {}: {}", path.display(), e))?;
    let mut raw = String::new();
    file.read_to_string(&mut raw)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    serde_json::from_str(&raw).map_err(|e| format!("bad catalog json: {}", e))
}

/// Analysis pass over the raw asset. Tolerates records the strict loader would
/// reject so the report can say *what* is wrong rather than just failing.
pub fn analyze_catalog(path: &Path) -> Result<(CatalogManifest, CatalogQualityReport), String> {
    let mut warnings = Vec::new();
    let hash = file_sha256(path)?;

    let mut file = File::open(path).map_err(|e| e.to_string())?;
    let mut raw = String::new();
    file.read_to_string(&mut raw).map_err(|e| e.to_string())?;
    let parsed: Value = serde_json::from_str(&raw).map_err(|e| format!("bad catalog json: {}", e))?;
    let entries = parsed
        .as_array()
        .ok_or_else(|| "catalog root is not an array".to_string())?;

    let mut record_count = 0u64;
    let mut bad_records = 0u64;
    let mut seen = std::collections::HashSet::new();
    let mut duplicate_ids = Vec::new();

    for (idx, entry) in entries.iter().enumerate() {
        match serde_json::from_value::<MatrixRecord>(entry.clone()) {
            Ok(record) => {
                record_count += 1;
                if !seen.insert(record.id.clone()) {
                    duplicate_ids.push(record.id.clone());
                }
                warnings.extend(inspect_record(&record));
            }
            Err(err) => {
                bad_records += 1;
                warnings.push(format!("bad_record at index {}: {}", idx, err));
            }
        }
    }

    let manifest = CatalogManifest {
        path: path.display().to_string(),
        hash_sha256: hash,
        record_count,
        bad_records,
        duplicate_ids: duplicate_ids.clone(),
        warnings: warnings.clone(),
        generated_at: crate::logging::ts_now(),
    };

    let report = CatalogQualityReport {
        records: record_count,
        bad_records,
        duplicates: duplicate_ids.len() as u64,
        warnings,
    };

    Ok((manifest, report))
}

/// Per-record sanity checks. Warnings only; the listing renders these records
/// regardless.
fn inspect_record(record: &MatrixRecord) -> Vec<String> {
    let mut warnings = Vec::new();
    if record.n == 0 {
        warnings.push(format!("{}: dimension n is zero", record.id));
    }
    if record.nev > record.n {
        warnings.push(format!(
            "{}: nev {} exceeds dimension {}",
            record.id, record.nev, record.n
        ));
    }
    if record.download_url.trim().is_empty() {
        warnings.push(format!("{}: empty download url", record.id));
    }
    if let Some(count) = record.num_correlated_systems {
        if count > 1 && crate::download::sequence_command(record).is_none() {
            warnings.push(format!(
                "{}: sequence of {} but download url does not end in id_<k>.bin",
                record.id, count
            ));
        }
    }
    warnings
}

pub fn file_sha256(path: &Path) -> Result<String, String> {
    let mut file = File::open(path).map_err(|e| e.to_string())?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; 8192];
    loop {
        let n = file.read(&mut buf).map_err(|e| e.to_string())?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}
