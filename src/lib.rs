//! Matrix Hub catalog core.
//!
//! A static catalog of scientific matrices, browsed through a filtered and
//! sorted listing whose state lives in the URL query string. Architecture:
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   Browser    │────►│  Event feed  │────►│   Session    │
//! │ (URL, edits) │     │  (ordered)   │     │  (reducer)   │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                                                  │
//!                                                  ▼
//!                      ┌──────────────┐     ┌──────────────┐
//!                      │   Effects    │◄────│   Criteria   │
//!                      │ (replace URL)│     │  + derived   │
//!                      └──────────────┘     │     view     │
//!                                           └──────────────┘
//! ```
//!
//! The catalog itself is an immutable data asset loaded once; every view is
//! recomputed from scratch from {full list, criteria}, and the URL is the only
//! persistent state.

pub mod catalog;
pub mod config;
pub mod criteria;
pub mod data;
pub mod download;
pub mod logging;
pub mod query;
pub mod sync;
pub mod view;
