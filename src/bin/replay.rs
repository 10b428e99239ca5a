//! Replay a browser-event stream through a listing session.
//!
//! Usage:
//!   replay <events.jsonl> [initial-query]
//!
//! Each line is one event, e.g.:
//!   {"event":"url_changed","query":"sortCriteria=system&sortOrder=desc"}
//!   {"event":"guard_cleared"}
//!   {"event":"edit","field":"search","value":"si"}
//!
//! Effects are printed as JSON lines as they are emitted, followed by a
//! summary object. The parse counter makes loop regressions visible: one
//! external navigation must account for exactly one parse.

use anyhow::{anyhow, Result};
use serde_json::json;
use std::fs::File;
use std::io::{BufRead, BufReader};

use matrixhub::logging;
use matrixhub::sync::{BrowserEvent, ListingSession};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let path = args
        .first()
        .ok_or_else(|| anyhow!("usage: replay <events.jsonl> [initial-query]"))?;
    let initial_query = args.get(1).map(String::as_str).unwrap_or("");

    let file = File::open(path)?;
    let mut session = ListingSession::new("replay", initial_query);
    let mut events = 0u64;
    let mut effects = 0u64;

    for line in BufReader::new(file).lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let event: BrowserEvent =
            serde_json::from_str(trimmed).map_err(|e| anyhow!("bad event '{}': {}", trimmed, e))?;
        events += 1;
        for effect in session.apply_event(event) {
            effects += 1;
            println!("{}", serde_json::to_string(&effect)?);
        }
    }

    let summary = json!({
        "events": events,
        "effects": effects,
        "parses": session.parse_count(),
        "final_query": session.current_query(),
    });
    logging::log(
        logging::Level::Info,
        logging::Domain::Audit,
        "replay_summary",
        logging::obj(&[
            ("events", json!(events)),
            ("effects", json!(effects)),
            ("parses", json!(session.parse_count())),
        ]),
    );
    println!("{}", summary);
    Ok(())
}
