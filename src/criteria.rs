//! The criteria set: the complete filter/sort state of one listing view.
//!
//! All fields are carried as raw strings, exactly as they appear in the query
//! string. Nothing is validated at assignment time; enum-like fields resolve
//! to typed keys when the view is computed, and values that resolve to nothing
//! degrade per the error-handling rules (unknown filter value matches no
//! record, unknown sort key reorders nothing, unparsable bound constrains
//! nothing).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Criteria {
    pub search: String,
    #[serde(rename = "type")]
    pub matrix_type: String,
    pub system: String,
    pub symmetry_type: String,
    pub software: String,
    pub data_type: String,
    pub min_size: String,
    pub max_size: String,
    pub sort_criteria: String,
    pub sort_order: String,
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            matrix_type: String::new(),
            system: String::new(),
            symmetry_type: String::new(),
            software: String::new(),
            data_type: String::new(),
            min_size: String::new(),
            max_size: String::new(),
            sort_criteria: "name".to_string(),
            sort_order: "asc".to_string(),
        }
    }
}

/// One editable field of the criteria set. UI edits arrive as (field, value)
/// pairs; the query codec maps each field to one query key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Search,
    Type,
    System,
    SymmetryType,
    Software,
    DataType,
    MinSize,
    MaxSize,
    SortCriteria,
    SortOrder,
}

/// Serialization order of the query keys.
pub const FIELD_ORDER: [Field; 10] = [
    Field::Search,
    Field::Type,
    Field::System,
    Field::SymmetryType,
    Field::Software,
    Field::DataType,
    Field::MinSize,
    Field::MaxSize,
    Field::SortCriteria,
    Field::SortOrder,
];

impl Field {
    pub fn query_key(&self) -> &'static str {
        match self {
            Field::Search => "search",
            Field::Type => "type",
            Field::System => "system",
            Field::SymmetryType => "symmetryType",
            Field::Software => "software",
            Field::DataType => "dataType",
            Field::MinSize => "minSize",
            Field::MaxSize => "maxSize",
            Field::SortCriteria => "sortCriteria",
            Field::SortOrder => "sortOrder",
        }
    }

    pub fn from_query_key(key: &str) -> Option<Field> {
        FIELD_ORDER.iter().copied().find(|f| f.query_key() == key)
    }

    /// Value the field takes when its query key is absent.
    pub fn default_value(&self) -> &'static str {
        match self {
            Field::SortCriteria => "name",
            Field::SortOrder => "asc",
            _ => "",
        }
    }
}

/// Typed sort key, resolved from the raw `sortCriteria` string at compute
/// time. `None` means the value named no known key and the view keeps its
/// original order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Size,
    Name,
    Type,
    System,
    SymmetryType,
    Software,
}

impl SortKey {
    pub fn parse(raw: &str) -> Option<SortKey> {
        match raw {
            "size" => Some(SortKey::Size),
            "name" => Some(SortKey::Name),
            "type" => Some(SortKey::Type),
            "system" => Some(SortKey::System),
            "symmetryType" => Some(SortKey::SymmetryType),
            "software" => Some(SortKey::Software),
            _ => None,
        }
    }
}

impl Criteria {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Search => &self.search,
            Field::Type => &self.matrix_type,
            Field::System => &self.system,
            Field::SymmetryType => &self.symmetry_type,
            Field::Software => &self.software,
            Field::DataType => &self.data_type,
            Field::MinSize => &self.min_size,
            Field::MaxSize => &self.max_size,
            Field::SortCriteria => &self.sort_criteria,
            Field::SortOrder => &self.sort_order,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Search => &mut self.search,
            Field::Type => &mut self.matrix_type,
            Field::System => &mut self.system,
            Field::SymmetryType => &mut self.symmetry_type,
            Field::Software => &mut self.software,
            Field::DataType => &mut self.data_type,
            Field::MinSize => &mut self.min_size,
            Field::MaxSize => &mut self.max_size,
            Field::SortCriteria => &mut self.sort_criteria,
            Field::SortOrder => &mut self.sort_order,
        };
        *slot = value;
    }

    pub fn sort_key(&self) -> Option<SortKey> {
        SortKey::parse(&self.sort_criteria)
    }

    /// Anything other than "asc" sorts descending.
    pub fn descending(&self) -> bool {
        self.sort_order != "asc"
    }

    /// Flip between ascending and descending (the sort-direction button).
    pub fn toggle_sort_order(&mut self) {
        self.sort_order = if self.sort_order == "asc" {
            "desc".to_string()
        } else {
            "asc".to_string()
        };
    }

    /// Inclusive lower bound on `n`, or `None` when empty or unparsable.
    pub fn min_bound(&self) -> Option<i64> {
        parse_bound(&self.min_size)
    }

    /// Inclusive upper bound on `n`, or `None` when empty or unparsable.
    pub fn max_bound(&self) -> Option<i64> {
        parse_bound(&self.max_size)
    }
}

/// Fails open: a bound that does not parse as an integer constrains nothing.
fn parse_bound(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}
