//! Core types for the client record store.
//!
//! This module defines the fundamental types used throughout the crate:
//! - [`ClientId`]: numeric identity of a client record
//! - [`RiskCategory`]: canonical risk classification
//! - [`Client`]: one persisted client record
//! - [`ClientDraft`]: caller-proposed fields before validation

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Unique identifier for a client record.
///
/// Ids are strictly positive integers, assigned by the store and immutable
/// after creation. Caller-supplied ids arrive as untrusted text and are
/// parsed with [`ClientId::parse`]; comparison is always numeric.
///
/// # Examples
///
/// ```
/// use clientbook::ClientId;
///
/// assert_eq!(ClientId::parse("7"), Some(ClientId::new(7)));
/// assert_eq!(ClientId::parse(" 7 "), Some(ClientId::new(7)));
/// assert_eq!(ClientId::parse("0"), None);
/// assert_eq!(ClientId::parse("seven"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(u64);

impl ClientId {
    /// Wrap a raw id value.
    pub fn new(id: u64) -> Self {
        ClientId(id)
    }

    /// Parse a caller-supplied id from text.
    ///
    /// Trims whitespace and parses as a positive integer. Returns `None`
    /// for zero, negative, or non-numeric input.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u64>() {
            Ok(0) | Err(_) => None,
            Ok(n) => Some(ClientId(n)),
        }
    }

    /// The raw numeric value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical risk classification of a client.
///
/// Input is matched case-insensitively ([`RiskCategory::from_input`]) and
/// always serialized in canonical casing (`"Low"`, `"Medium"`, `"High"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskCategory {
    /// Low risk.
    Low,
    /// Medium risk.
    Medium,
    /// High risk.
    High,
}

impl RiskCategory {
    /// All canonical values, in display order.
    pub const ALL: [RiskCategory; 3] =
        [RiskCategory::Low, RiskCategory::Medium, RiskCategory::High];

    /// Match untrusted input against the canonical values.
    ///
    /// Trims, then compares ignoring case. Returns `None` for empty or
    /// unrecognized input.
    pub fn from_input(input: &str) -> Option<Self> {
        let v = input.trim();
        Self::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(v))
    }

    /// The canonical string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskCategory::Low => "Low",
            RiskCategory::Medium => "Medium",
            RiskCategory::High => "High",
        }
    }
}

impl fmt::Display for RiskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Lenient on read: documents written by older tooling may carry any casing.
impl<'de> Deserialize<'de> for RiskCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RiskCategory::from_input(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown risk category: {:?}", s)))
    }
}

fn epoch_date() -> NaiveDate {
    NaiveDate::default()
}

/// One persisted client record.
///
/// Serialized with the document's wire field names (`fullName`,
/// `riskCategory`, `createdDate`). `full_name` and `email` tolerate absence
/// in older documents; a record without an `id` is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    /// Store-assigned identity; immutable after creation.
    pub id: ClientId,
    /// Display name, trimmed and non-empty on any record the store wrote.
    #[serde(default)]
    pub full_name: String,
    /// Contact email, trimmed.
    #[serde(default)]
    pub email: String,
    /// Canonical risk classification.
    pub risk_category: RiskCategory,
    /// Set once when the record is created; never modified.
    #[serde(default = "epoch_date")]
    pub created_date: NaiveDate,
}

/// Caller-proposed fields for a create or update, before validation.
///
/// All fields are raw strings exactly as received from the consumer; the
/// validator trims and normalizes them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDraft {
    /// Proposed display name.
    #[serde(default)]
    pub full_name: String,
    /// Proposed contact email.
    #[serde(default)]
    pub email: String,
    /// Proposed risk classification, any casing.
    #[serde(default)]
    pub risk_category: String,
}

impl ClientDraft {
    /// Convenience constructor for consumers assembling a draft by hand.
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        risk_category: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            risk_category: risk_category.into(),
        }
    }
}
