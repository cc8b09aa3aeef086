//! Client store operation tests.
//!
//! Scenario and invariant tests for list/get/create/update/delete against a
//! temp-directory-backed store.

use clientbook::{ClientDraft, ClientStore, RiskCategory};

fn temp_store() -> ClientStore {
    ClientStore::builder().open_temp().expect("temp store")
}

fn ada() -> ClientDraft {
    ClientDraft::new("Ada Lovelace", "ada@example.com", "low")
}

fn grace() -> ClientDraft {
    ClientDraft::new("Grace Hopper", "grace@example.com", "Medium")
}

// ============================================================================
// Create
// ============================================================================

#[test]
fn create_on_empty_store_assigns_id_one() {
    let store = temp_store();

    let before = chrono::Local::now().date_naive();
    let client = store.create(ada()).unwrap();
    let after = chrono::Local::now().date_naive();

    assert_eq!(client.id.value(), 1);
    assert_eq!(client.full_name, "Ada Lovelace");
    assert_eq!(client.email, "ada@example.com");
    assert_eq!(client.risk_category, RiskCategory::Low);
    assert!(client.created_date >= before && client.created_date <= after);
}

#[test]
fn create_normalizes_risk_casing_and_trims_fields() {
    let store = temp_store();

    let client = store
        .create(ClientDraft::new("  Ada Lovelace ", " ada@example.com ", "hIgH"))
        .unwrap();

    assert_eq!(client.full_name, "Ada Lovelace");
    assert_eq!(client.email, "ada@example.com");
    assert_eq!(client.risk_category, RiskCategory::High);
}

#[test]
fn second_create_gets_id_two() {
    let store = temp_store();

    store.create(ada()).unwrap();
    let second = store.create(grace()).unwrap();

    assert_eq!(second.id.value(), 2);
}

#[test]
fn create_id_is_strictly_greater_than_every_present_id() {
    let store = temp_store();

    for _ in 0..3 {
        store.create(ada()).unwrap();
    }
    store.delete("3").unwrap();

    let present: Vec<u64> = store.list().iter().map(|c| c.id.value()).collect();
    let created = store.create(grace()).unwrap();

    assert!(present.iter().all(|&id| created.id.value() > id));
}

#[test]
fn create_validation_failure_persists_nothing() {
    let store = temp_store();

    let err = store.create(ClientDraft::new("", "bad", "purple")).unwrap_err();

    assert!(err.is_validation());
    assert_eq!(
        err.validation_details().unwrap(),
        &[
            "fullName is required".to_string(),
            "email format is invalid".to_string(),
            "riskCategory must be Low, Medium, or High".to_string(),
        ]
    );
    assert!(store.list().is_empty());
}

#[test]
fn ids_stay_pairwise_distinct_across_creates_and_deletes() {
    let store = temp_store();

    for _ in 0..5 {
        store.create(ada()).unwrap();
    }
    store.delete("2").unwrap();
    store.delete("4").unwrap();
    store.create(grace()).unwrap();
    store.create(grace()).unwrap();

    let mut ids: Vec<u64> = store.list().iter().map(|c| c.id.value()).collect();
    let len = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), len);
}

// ============================================================================
// Get / list
// ============================================================================

#[test]
fn get_returns_the_matching_record() {
    let store = temp_store();
    let created = store.create(ada()).unwrap();

    let fetched = store.get("1").unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn get_parses_untrusted_id_text() {
    let store = temp_store();
    store.create(ada()).unwrap();
    store.create(grace()).unwrap();

    assert_eq!(store.get(" 2 ").unwrap().full_name, "Grace Hopper");

    let err = store.get("abc").unwrap_err();
    assert!(err.is_not_found());

    let err = store.get("0").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn get_missing_id_is_not_found() {
    let store = temp_store();

    let err = store.get("999").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn list_preserves_storage_order() {
    let store = temp_store();
    store.create(ada()).unwrap();
    store.create(grace()).unwrap();

    let names: Vec<String> = store.list().into_iter().map(|c| c.full_name).collect();
    assert_eq!(names, vec!["Ada Lovelace", "Grace Hopper"]);
}

// ============================================================================
// Update
// ============================================================================

#[test]
fn update_replaces_fields_and_preserves_identity() {
    let store = temp_store();
    let created = store.create(ada()).unwrap();

    let updated = store
        .update("1", ClientDraft::new("Ada King", "ada@lovelace.org", "HIGH"))
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_date, created.created_date);
    assert_eq!(updated.full_name, "Ada King");
    assert_eq!(updated.email, "ada@lovelace.org");
    assert_eq!(updated.risk_category, RiskCategory::High);

    // The persisted document reflects the change.
    assert_eq!(store.get("1").unwrap(), updated);
}

#[test]
fn update_with_missing_full_name_reports_only_that_violation() {
    let store = temp_store();
    store.create(ada()).unwrap();

    let err = store
        .update("1", ClientDraft::new("", "x@x.com", "High"))
        .unwrap_err();

    assert_eq!(
        err.validation_details().unwrap(),
        &["fullName is required".to_string()]
    );
    // Nothing persisted.
    assert_eq!(store.get("1").unwrap().full_name, "Ada Lovelace");
}

#[test]
fn update_unknown_id_short_circuits_before_validation() {
    let store = temp_store();
    store.create(ada()).unwrap();

    // Invalid fields too, but lookup failure wins.
    let err = store.update("42", ClientDraft::new("", "", "")).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(store.list().len(), 1);
}

// ============================================================================
// Delete
// ============================================================================

#[test]
fn delete_then_get_is_not_found() {
    let store = temp_store();
    store.create(ada()).unwrap();

    store.delete("1").unwrap();

    assert!(store.get("1").unwrap_err().is_not_found());
    assert!(store.list().is_empty());
}

#[test]
fn delete_unknown_id_leaves_store_unchanged() {
    let store = temp_store();
    store.create(ada()).unwrap();

    let err = store.delete("999").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(store.list().len(), 1);
}

#[test]
fn delete_preserves_order_of_remaining_records() {
    let store = temp_store();
    store.create(ada()).unwrap();
    store.create(grace()).unwrap();
    store.create(ClientDraft::new("Edsger Dijkstra", "ewd@example.com", "high")).unwrap();

    store.delete("2").unwrap();

    let ids: Vec<u64> = store.list().iter().map(|c| c.id.value()).collect();
    assert_eq!(ids, vec![1, 3]);
}
