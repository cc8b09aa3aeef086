//! Field validation and normalization.
//!
//! Pure functions, no side effects. The validator accumulates *all*
//! violations in a fixed order so consumers can show them together, rather
//! than failing on the first.

use crate::types::{ClientDraft, RiskCategory};

/// A draft whose fields passed validation, trimmed and normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    /// Trimmed, non-empty display name.
    pub full_name: String,
    /// Trimmed email in `local@domain.tld` shape.
    pub email: String,
    /// Canonical risk classification.
    pub risk_category: RiskCategory,
}

/// Match untrusted risk input against the canonical categories.
///
/// Trims, then compares case-insensitively. `None` for empty or
/// unrecognized input.
pub fn normalize_risk_category(input: &str) -> Option<RiskCategory> {
    RiskCategory::from_input(input)
}

/// Lightweight email shape check: `non-ws-no-@ "@" non-ws-no-@ "." non-ws-no-@`.
///
/// Intentionally permissive (not RFC-complete); one `@`, and at least one
/// `.` somewhere after it.
pub fn is_valid_email(input: &str) -> bool {
    let e = input.trim();
    if e.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = e.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    // Domain needs a dot with non-empty text on both sides.
    match domain.rsplit_once('.') {
        Some((head, tld)) => !head.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Validate a draft, accumulating every violation in order.
///
/// Order is fixed: missing fullName, missing email, invalid email format
/// (only when email is present), missing/invalid riskCategory. On success
/// returns the trimmed and normalized fields.
pub fn validate_draft(draft: &ClientDraft) -> Result<ValidDraft, Vec<String>> {
    let full_name = draft.full_name.trim();
    let email = draft.email.trim();
    let risk_category = normalize_risk_category(&draft.risk_category);

    let mut errors = Vec::new();
    if full_name.is_empty() {
        errors.push("fullName is required".to_string());
    }
    if email.is_empty() {
        errors.push("email is required".to_string());
    } else if !is_valid_email(email) {
        errors.push("email format is invalid".to_string());
    }
    match risk_category {
        Some(risk_category) if errors.is_empty() => Ok(ValidDraft {
            full_name: full_name.to_string(),
            email: email.to_string(),
            risk_category,
        }),
        Some(_) => Err(errors),
        None => {
            errors.push("riskCategory must be Low, Medium, or High".to_string());
            Err(errors)
        }
    }
}
