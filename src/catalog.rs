//! The static matrix catalog: an ordered, immutable list of records loaded
//! once at startup. Records are never mutated after load; every view over the
//! catalog is derived, not stored.

use serde::{Deserialize, Serialize};

/// One entry in the catalog. Field names follow the data asset's keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixRecord {
    /// Unique across the catalog; never mutated after load.
    pub id: String,
    pub name: String,
    pub description: String,
    /// Display string, e.g. "10,000 x 10,000".
    pub size: String,
    /// Numeric dimension backing the size filters and the size sort.
    pub n: u64,
    /// Comma-joined tag list, e.g. "DFT, FLAPW".
    #[serde(rename = "type")]
    pub matrix_type: String,
    pub system: String,
    pub symmetry_type: String,
    pub software: String,
    pub data_type: String,
    pub format: String,
    /// Number of eigenvalues of interest.
    pub nev: u64,
    /// Number of excitons, where applicable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nex: Option<u64>,
    /// Sequence length for correlated-system series.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_correlated_systems: Option<u32>,
    pub properties: Vec<String>,
    pub download_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_url: Option<String>,
}

/// Distinct values observed per filterable field, in first-seen order.
/// Computed once at load; the source list never changes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FilterOptions {
    pub types: Vec<String>,
    pub systems: Vec<String>,
    pub symmetry_types: Vec<String>,
    pub software: Vec<String>,
    pub data_types: Vec<String>,
}

/// Result of a detail lookup. An unknown id is a presentation state, not an
/// error.
#[derive(Debug, Clone)]
pub enum DetailView<'a> {
    Found(&'a MatrixRecord),
    NotFound { id: String },
}

#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<MatrixRecord>,
    options: FilterOptions,
}

impl Catalog {
    /// Build a catalog from an ordered record list. Fails on duplicate ids.
    pub fn new(records: Vec<MatrixRecord>) -> Result<Self, String> {
        let mut seen = std::collections::HashSet::new();
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                return Err(format!("duplicate matrix id: {}", record.id));
            }
        }
        let options = FilterOptions {
            types: distinct(records.iter().map(|m| m.matrix_type.as_str())),
            systems: distinct(records.iter().map(|m| m.system.as_str())),
            symmetry_types: distinct(records.iter().map(|m| m.symmetry_type.as_str())),
            software: distinct(records.iter().map(|m| m.software.as_str())),
            data_types: distinct(records.iter().map(|m| m.data_type.as_str())),
        };
        Ok(Self { records, options })
    }

    pub fn records(&self) -> &[MatrixRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Linear scan is fine at catalog scale; ids are unique by construction.
    pub fn find(&self, id: &str) -> Option<&MatrixRecord> {
        self.records.iter().find(|m| m.id == id)
    }

    pub fn detail(&self, id: &str) -> DetailView<'_> {
        match self.find(id) {
            Some(record) => DetailView::Found(record),
            None => {
                crate::logging::log_detail_not_found(id);
                DetailView::NotFound { id: id.to_string() }
            }
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();
    for v in values {
        if seen.insert(v) {
            out.push(v.to_string());
        }
    }
    out
}
