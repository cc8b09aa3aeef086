//! Convenience re-exports for common usage.
//!
//! ```ignore
//! use clientbook::prelude::*;
//!
//! let store = ClientStore::open("./clients.json")?;
//! ```

pub use crate::error::{Error, Result};
pub use crate::store::{ClientStore, ClientStoreBuilder};
pub use crate::types::{Client, ClientDraft, ClientId, RiskCategory};
