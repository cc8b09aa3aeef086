//! # Clientbook
//!
//! File-backed client record store for a small back-office portal.
//!
//! Clientbook owns the full lifecycle of a collection of client records
//! (identity, contact, risk classification) kept as one JSON document on
//! disk: loading, validating, mutating, and persisting. Server-rendered
//! pages and a JSON API sit above it as thin consumers of the same five
//! operations.
//!
//! ## Quick Start
//!
//! ```ignore
//! use clientbook::prelude::*;
//!
//! let store = ClientStore::open("./clients.json")?;
//!
//! let ada = store.create(ClientDraft::new("Ada Lovelace", "ada@example.com", "low"))?;
//! assert_eq!(ada.risk_category, RiskCategory::Low);
//!
//! let listed = store.list();
//! let fetched = store.get(&ada.id.to_string())?;
//! store.delete(&ada.id.to_string())?;
//! ```
//!
//! ## Design
//!
//! - Every operation re-reads the document at entry; mutators rewrite it in
//!   full on exit. No in-memory cache survives an operation.
//! - Reads are fail-open (missing or malformed document reads as empty);
//!   writes are fail-closed (atomic replace, failures propagate).
//! - Mutating operations are serialized through an in-process mutex, so one
//!   store handle never loses writes or mints duplicate ids. Cross-process
//!   writers are not coordinated; single-writer deployment is assumed.

#![warn(missing_docs)]

mod error;
mod store;
mod types;
mod validate;

pub mod persist;
pub mod prelude;
pub mod wire;

// Re-export main entry points
pub use error::{Error, Result};
pub use store::{ClientStore, ClientStoreBuilder};

// Re-export types and the pure validation helpers
pub use types::{Client, ClientDraft, ClientId, RiskCategory};
pub use validate::{is_valid_email, normalize_risk_category, validate_draft, ValidDraft};
