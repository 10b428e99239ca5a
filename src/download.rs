//! Static wget command lines for a matrix record. No file I/O happens here:
//! downloads are delegated entirely to the visitor's own tooling.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use crate::catalog::MatrixRecord;

/// Trailing sequence-member filename, e.g. `id_3.bin`.
fn sequence_suffix() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"id_\d+\.bin$").expect("sequence suffix pattern"))
}

#[derive(Debug, Clone, Serialize)]
pub struct DownloadInstructions {
    pub binary: String,
    pub metadata: Option<String>,
    pub sequence: Option<String>,
}

pub fn binary_command(record: &MatrixRecord) -> String {
    format!("wget {}", record.download_url)
}

pub fn metadata_command(record: &MatrixRecord) -> Option<String> {
    record
        .metadata_url
        .as_ref()
        .map(|url| format!("wget {}", url))
}

/// Shell loop fetching every member of a correlated-system sequence. Only
/// produced when the record declares more than one system and its download
/// URL ends in `id_<k>.bin` (the base URL comes from stripping that suffix).
pub fn sequence_command(record: &MatrixRecord) -> Option<String> {
    let count = record.num_correlated_systems?;
    if count <= 1 {
        return None;
    }
    let re = sequence_suffix();
    if !re.is_match(&record.download_url) {
        return None;
    }
    let base = re.replace(&record.download_url, "");
    Some(format!(
        "for i in {{1..{}}}; do wget {}id_$i.bin; done",
        count, base
    ))
}

pub fn instructions(record: &MatrixRecord) -> DownloadInstructions {
    DownloadInstructions {
        binary: binary_command(record),
        metadata: metadata_command(record),
        sequence: sequence_command(record),
    }
}
