//! URL ↔ criteria synchronization for one listing view.
//!
//! A classic feedback-loop problem: the query string drives the criteria set,
//! and the criteria set drives the query string. The binding is an explicit
//! two-state machine rather than ad hoc booleans:
//!
//! - `Idle`: user edits mutate the criteria; each edit serializes the set,
//!   compares it against the current query string, and emits a `ReplaceUrl`
//!   effect only when different (replace, not push — no history spam, no
//!   scroll). An identical write-back is a no-op, so nothing feeds back into
//!   the parse path.
//! - `ApplyingFromUrl`: entered when the query string changes for a reason
//!   other than this session's own write (back/forward, a typed URL, an
//!   external link). All recognized keys are parsed into the criteria set
//!   atomically, and criteria changes emit no URL writes until the guard
//!   clears.
//!
//! Guard-clear timing contract: `ScheduleGuardClear` asks the host to deliver
//! `GuardCleared` on the next scheduling tick — strictly after dependent
//! re-renders have observed the `ApplyingFromUrl` phase, and before the next
//! user-driven mutation is processed. The host event loop is single-threaded,
//! so ordinary event ordering satisfies this.

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, MatrixRecord};
use crate::criteria::{Criteria, Field};
use crate::logging;
use crate::query::{parse_query, serialize_query};
use crate::view::compute_view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    Idle,
    ApplyingFromUrl,
}

/// Everything the browser can do to a listing session, as an ordered event
/// stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum BrowserEvent {
    /// The query string changed underneath us (back/forward, typed URL,
    /// external link). The session's own writes echo back as the identical
    /// query and are ignored.
    UrlChanged { query: String },
    /// One UI control changed one criteria field.
    Edit { field: Field, value: String },
    /// The sort-direction button.
    ToggleSortOrder,
    /// The deferred guard clear; see the timing contract above.
    GuardCleared,
}

/// Instructions for the host/render layer. The session never touches the
/// browser itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    /// Replace the URL's query portion without adding a history entry and
    /// without scrolling.
    ReplaceUrl { query: String },
    /// Deliver `GuardCleared` on the next tick.
    ScheduleGuardClear,
}

/// One page-view instance: owns the criteria set and the guard phase. Nothing
/// here is global, so concurrently rendered listings cannot leak state into
/// each other.
#[derive(Debug, Clone)]
pub struct ListingSession {
    id: String,
    phase: SyncPhase,
    criteria: Criteria,
    current_query: String,
    parse_count: u64,
}

impl ListingSession {
    /// Construct from the URL of the page view. The initial parse happens
    /// here; no render has observed anything yet, so the guard window is
    /// vacuous and the session starts `Idle`.
    pub fn new(id: impl Into<String>, initial_query: &str) -> Self {
        let id = id.into();
        let query = normalize(initial_query);
        let criteria = parse_query(&query);
        logging::log_url_parsed(&id, &query);
        Self {
            id,
            phase: SyncPhase::Idle,
            criteria,
            current_query: query,
            parse_count: 1,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn phase(&self) -> SyncPhase {
        self.phase
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn current_query(&self) -> &str {
        &self.current_query
    }

    /// How many times the parse path has run (initial load included).
    pub fn parse_count(&self) -> u64 {
        self.parse_count
    }

    /// Feed one event through the machine and collect the effects the host
    /// must execute.
    pub fn apply_event(&mut self, event: BrowserEvent) -> Vec<Effect> {
        match event {
            BrowserEvent::UrlChanged { query } => {
                let query = normalize(&query);
                if query == self.current_query {
                    // Our own write echoing back, or no change at all.
                    return Vec::new();
                }
                self.criteria = parse_query(&query);
                self.phase = SyncPhase::ApplyingFromUrl;
                self.parse_count += 1;
                logging::log_url_parsed(&self.id, &query);
                self.current_query = query;
                vec![Effect::ScheduleGuardClear]
            }
            BrowserEvent::Edit { field, value } => {
                self.criteria.set(field, value);
                self.write_back()
            }
            BrowserEvent::ToggleSortOrder => {
                self.criteria.toggle_sort_order();
                self.write_back()
            }
            BrowserEvent::GuardCleared => {
                self.phase = SyncPhase::Idle;
                Vec::new()
            }
        }
    }

    /// Recompute the derived view. Pure delegation; the session stores no
    /// view state.
    pub fn view<'a>(&self, catalog: &'a Catalog) -> Vec<&'a MatrixRecord> {
        let view = compute_view(catalog.records(), &self.criteria);
        logging::log_view_computed(&self.current_query, view.len(), catalog.len());
        view
    }

    fn write_back(&mut self) -> Vec<Effect> {
        if self.phase == SyncPhase::ApplyingFromUrl {
            return Vec::new();
        }
        let query = serialize_query(&self.criteria);
        if query == self.current_query {
            return Vec::new();
        }
        self.current_query = query.clone();
        logging::log_url_replaced(&self.id, &query);
        vec![Effect::ReplaceUrl { query }]
    }
}

fn normalize(query: &str) -> String {
    query.strip_prefix('?').unwrap_or(query).to_string()
}
