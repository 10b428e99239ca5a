//! Synchronizer behavior: loop freedom, guard timing, history semantics.
//!
//! These tests drive the listing session the way a browser event loop would:
//! external navigations arrive as `UrlChanged`, the host honors
//! `ScheduleGuardClear` by delivering `GuardCleared` on the next tick, and
//! every `ReplaceUrl` effect echoes back as a `UrlChanged` with the written
//! query (which the session must ignore).

use matrixhub::criteria::Field;
use matrixhub::sync::{BrowserEvent, Effect, ListingSession, SyncPhase};

fn edit(field: Field, value: &str) -> BrowserEvent {
    BrowserEvent::Edit {
        field,
        value: value.to_string(),
    }
}

fn url(query: &str) -> BrowserEvent {
    BrowserEvent::UrlChanged {
        query: query.to_string(),
    }
}

#[test]
fn external_nav_then_edit_preserves_sort_keys_without_reparse() {
    let mut session = ListingSession::new("t", "");
    let initial_parses = session.parse_count();

    // External navigation with sort parameters.
    let effects = session.apply_event(url("sortCriteria=system&sortOrder=desc"));
    assert_eq!(effects, vec![Effect::ScheduleGuardClear]);
    assert_eq!(session.parse_count(), initial_parses + 1);
    assert_eq!(session.criteria().sort_criteria, "system");
    assert_eq!(session.criteria().sort_order, "desc");

    // Host clears the guard on the next tick.
    session.apply_event(BrowserEvent::GuardCleared);

    // User types into the search box.
    let effects = session.apply_event(edit(Field::Search, "laplace"));
    assert_eq!(
        effects,
        vec![Effect::ReplaceUrl {
            query: "search=laplace&sortCriteria=system&sortOrder=desc".to_string()
        }]
    );

    // Browser echoes our own write; the parse path must not fire again.
    let effects = session.apply_event(url("search=laplace&sortCriteria=system&sortOrder=desc"));
    assert!(effects.is_empty());
    assert_eq!(
        session.parse_count(),
        initial_parses + 1,
        "parse handler fired more than once for one external navigation"
    );
}

#[test]
fn edits_while_applying_from_url_write_nothing() {
    let mut session = ListingSession::new("t", "");
    session.apply_event(url("search=si"));
    assert_eq!(session.phase(), SyncPhase::ApplyingFromUrl);

    // Control updates triggered by the parse land before the guard clears.
    assert!(session.apply_event(edit(Field::Search, "si")).is_empty());
    assert!(session
        .apply_event(edit(Field::System, "NaCl"))
        .is_empty());

    session.apply_event(BrowserEvent::GuardCleared);

    // The first post-guard edit resumes write-back, carrying everything.
    let effects = session.apply_event(edit(Field::MinSize, "100"));
    assert_eq!(
        effects,
        vec![Effect::ReplaceUrl {
            query: "search=si&system=NaCl&minSize=100".to_string()
        }]
    );
}

#[test]
fn identical_write_back_is_a_no_op() {
    let mut session = ListingSession::new("t", "search=si");
    // Re-asserting the current value serializes to the current query.
    assert!(session.apply_event(edit(Field::Search, "si")).is_empty());
    assert_eq!(session.current_query(), "search=si");
}

#[test]
fn external_nav_replaces_criteria_wholesale() {
    let mut session = ListingSession::new("t", "");
    session.apply_event(edit(Field::Search, "si"));
    session.apply_event(edit(Field::MinSize, "100"));

    // Back/forward to a URL naming only a sort: every other field resets.
    session.apply_event(url("sortCriteria=size"));
    assert_eq!(session.criteria().search, "");
    assert_eq!(session.criteria().min_size, "");
    assert_eq!(session.criteria().sort_criteria, "size");
    assert_eq!(session.criteria().sort_order, "asc");
}

#[test]
fn rapid_edits_each_retrigger_comparison() {
    let mut session = ListingSession::new("t", "");
    let mut effects = Vec::new();
    for value in ["l", "la", "lap"] {
        effects.extend(session.apply_event(edit(Field::Search, value)));
    }
    assert_eq!(
        effects,
        vec![
            Effect::ReplaceUrl {
                query: "search=l".to_string()
            },
            Effect::ReplaceUrl {
                query: "search=la".to_string()
            },
            Effect::ReplaceUrl {
                query: "search=lap".to_string()
            },
        ]
    );
}

#[test]
fn back_navigation_reproduces_previous_state() {
    let mut session = ListingSession::new("t", "");
    session.apply_event(edit(Field::Software, "FLEUR"));
    let first_query = session.current_query().to_string();
    session.apply_event(edit(Field::Software, "exciting"));

    // Browser back: the old query re-enters through the parse path.
    let effects = session.apply_event(url(&first_query));
    assert_eq!(effects, vec![Effect::ScheduleGuardClear]);
    session.apply_event(BrowserEvent::GuardCleared);
    assert_eq!(session.criteria().software, "FLEUR");
    assert_eq!(session.current_query(), first_query);
}

#[test]
fn toggle_sort_round_trips_through_url() {
    let mut session = ListingSession::new("t", "");
    let effects = session.apply_event(BrowserEvent::ToggleSortOrder);
    assert_eq!(
        effects,
        vec![Effect::ReplaceUrl {
            query: "sortOrder=desc".to_string()
        }]
    );
    let effects = session.apply_event(BrowserEvent::ToggleSortOrder);
    // Back to the all-default state: the bare path, i.e. an empty query.
    assert_eq!(
        effects,
        vec![Effect::ReplaceUrl {
            query: String::new()
        }]
    );
}
