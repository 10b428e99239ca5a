//! The filter/sort engine: a pure function from {full record list, criteria}
//! to the derived view. Safe to call on every render; the view is always
//! rebuilt from scratch, never patched.

use std::cmp::Ordering;

use crate::catalog::MatrixRecord;
use crate::criteria::{Criteria, SortKey};

/// Compute the ordered, filtered view. Deterministic and side-effect free.
pub fn compute_view<'a>(records: &'a [MatrixRecord], criteria: &Criteria) -> Vec<&'a MatrixRecord> {
    let mut view: Vec<&MatrixRecord> = records.iter().filter(|m| matches(m, criteria)).collect();
    if let Some(key) = criteria.sort_key() {
        // Stable sort: ties keep their original relative order.
        view.sort_by(|a, b| {
            let ord = compare(a, b, key);
            if criteria.descending() {
                ord.reverse()
            } else {
                ord
            }
        });
    }
    view
}

/// A record passes iff every clause holds. Empty fields constrain nothing;
/// so do numeric bounds that fail to parse.
pub fn matches(record: &MatrixRecord, criteria: &Criteria) -> bool {
    let matches_search = criteria.search.is_empty() || {
        let needle = criteria.search.to_lowercase();
        record.name.to_lowercase().contains(&needle)
            || record.description.to_lowercase().contains(&needle)
    };
    // Substring match so one tag can hit within a comma-joined tag list.
    let matches_type =
        criteria.matrix_type.is_empty() || record.matrix_type.contains(&criteria.matrix_type);
    let matches_system = criteria.system.is_empty() || record.system == criteria.system;
    let matches_symmetry =
        criteria.symmetry_type.is_empty() || record.symmetry_type == criteria.symmetry_type;
    let matches_software = criteria.software.is_empty() || record.software == criteria.software;
    let matches_data_type =
        criteria.data_type.is_empty() || record.data_type == criteria.data_type;
    let matches_min = criteria
        .min_bound()
        .map_or(true, |bound| record.n as i64 >= bound);
    let matches_max = criteria
        .max_bound()
        .map_or(true, |bound| record.n as i64 <= bound);

    matches_search
        && matches_type
        && matches_system
        && matches_symmetry
        && matches_software
        && matches_data_type
        && matches_min
        && matches_max
}

fn compare(a: &MatrixRecord, b: &MatrixRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Size => a.n.cmp(&b.n),
        SortKey::Name => cmp_ci(&a.name, &b.name),
        SortKey::Type => cmp_ci(&a.matrix_type, &b.matrix_type),
        SortKey::System => cmp_ci(&a.system, &b.system),
        SortKey::SymmetryType => cmp_ci(&a.symmetry_type, &b.symmetry_type),
        SortKey::Software => cmp_ci(&a.software, &b.software),
    }
}

/// Case-insensitive comparison with a case-sensitive tiebreak, so equal-modulo
/// -case strings still order deterministically.
fn cmp_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::record;

    #[test]
    fn empty_criteria_matches_everything() {
        let r = record("a", "A", 10);
        assert!(matches(&r, &Criteria::default()));
    }

    #[test]
    fn search_is_case_insensitive() {
        let mut c = Criteria::default();
        c.search = "flapw".to_string();
        let mut r = record("a", "A", 10);
        r.description = "A FLAPW overlap matrix".to_string();
        assert!(matches(&r, &c));
        r.description = "something else".to_string();
        assert!(!matches(&r, &c));
    }

    #[test]
    fn type_matches_one_tag_in_joined_list() {
        let mut c = Criteria::default();
        c.matrix_type = "DFT".to_string();
        let mut r = record("a", "A", 10);
        r.matrix_type = "DFT, FLAPW".to_string();
        assert!(matches(&r, &c));
        c.matrix_type = "BSE".to_string();
        assert!(!matches(&r, &c));
    }

    #[test]
    fn bounds_are_inclusive() {
        let mut c = Criteria::default();
        c.min_size = "10".to_string();
        c.max_size = "10".to_string();
        assert!(matches(&record("a", "A", 10), &c));
        assert!(!matches(&record("b", "B", 9), &c));
        assert!(!matches(&record("c", "C", 11), &c));
    }

    #[test]
    fn unparsable_bound_filters_nothing() {
        let mut c = Criteria::default();
        c.min_size = "not-a-number".to_string();
        assert!(matches(&record("a", "A", 1), &c));
    }

    #[test]
    fn case_insensitive_compare_orders_mixed_case() {
        assert_eq!(cmp_ci("apple", "Banana"), Ordering::Less);
        assert_eq!(cmp_ci("Apple", "apple"), Ordering::Less);
        assert_eq!(cmp_ci("same", "same"), Ordering::Equal);
    }
}
