//! JSON wire bodies for the API consumer.
//!
//! The store itself is presentation-agnostic; this module holds the
//! serializable response shapes the JSON API layer puts on the wire, plus
//! the error-to-body mapping. Success bodies:
//!
//! ```json
//! {"total": 2, "clients": [...]}
//! {"client": {...}}
//! ```
//!
//! Error bodies (with their status hints):
//!
//! | Error | Status | Body |
//! |-------|--------|------|
//! | NotFound | 404 | `{"error":"Client Not Found","id":"..."}` |
//! | Validation | 400 | `{"error":"ValidationError","details":[...]}` |
//! | Io / Serialization | 500 | `{"error":"Internal Server Error"}` |

use crate::error::Error;
use crate::types::Client;
use serde::Serialize;
use serde_json::json;

/// Body of a successful `list`: the full collection plus its size.
#[derive(Debug, Serialize)]
pub struct ListBody {
    /// Number of records in the collection.
    pub total: usize,
    /// The records, in storage order.
    pub clients: Vec<Client>,
}

impl ListBody {
    /// Wrap a loaded collection.
    pub fn new(clients: Vec<Client>) -> Self {
        Self {
            total: clients.len(),
            clients,
        }
    }
}

/// Body of a successful `get`, `create` (201), or `update`.
#[derive(Debug, Serialize)]
pub struct ClientBody {
    /// The affected record.
    pub client: Client,
}

impl ClientBody {
    /// Wrap one record.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

/// Map a store error to its HTTP status hint and JSON body.
///
/// A successful `delete` has no body (204); persistence write failures are
/// the only 500s the store can produce.
pub fn error_body(error: &Error) -> (u16, serde_json::Value) {
    match error {
        Error::NotFound { id } => (404, json!({ "error": "Client Not Found", "id": id })),
        Error::Validation(details) => {
            (400, json!({ "error": "ValidationError", "details": details }))
        }
        Error::Io(_) | Error::Serialization(_) => {
            (500, json!({ "error": "Internal Server Error" }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn not_found_body_echoes_requested_id() {
        let (status, body) = error_body(&Error::not_found("999"));
        assert_eq!(status, 404);
        assert_eq!(body, serde_json::json!({"error": "Client Not Found", "id": "999"}));
    }

    #[test]
    fn validation_body_carries_all_details() {
        let details = vec![
            "fullName is required".to_string(),
            "email format is invalid".to_string(),
        ];
        let (status, body) = error_body(&Error::Validation(details.clone()));
        assert_eq!(status, 400);
        assert_eq!(body["error"], "ValidationError");
        assert_eq!(body["details"], serde_json::json!(details));
    }

    #[test]
    fn list_body_reports_total() {
        let body = ListBody::new(Vec::new());
        let encoded = serde_json::to_value(&body).unwrap();
        assert_eq!(encoded, serde_json::json!({"total": 0, "clients": []}));
    }
}
