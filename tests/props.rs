//! Property tests for id-space invariants.
//!
//! For any sequence of create/delete operations, every id in the resulting
//! collection is pairwise distinct, and every successful create mints an id
//! strictly greater than all ids present immediately before it.

use clientbook::{ClientDraft, ClientStore};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Create,
    // Index into the live collection, reduced modulo its length.
    Delete(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::Create),
        1 => (0usize..16).prop_map(Op::Delete),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn id_space_invariants_hold_for_any_op_sequence(ops in prop::collection::vec(op_strategy(), 1..24)) {
        let store = ClientStore::builder().open_temp().unwrap();

        for op in ops {
            match op {
                Op::Create => {
                    let before: Vec<u64> =
                        store.list().iter().map(|c| c.id.value()).collect();
                    let created = store
                        .create(ClientDraft::new("Ada Lovelace", "ada@example.com", "low"))
                        .unwrap();
                    prop_assert!(
                        before.iter().all(|&id| created.id.value() > id),
                        "created id {} not fresh against {:?}",
                        created.id,
                        before
                    );
                }
                Op::Delete(index) => {
                    let live = store.list();
                    if live.is_empty() {
                        continue;
                    }
                    let target = live[index % live.len()].id;
                    store.delete(&target.to_string()).unwrap();
                    prop_assert!(store.get(&target.to_string()).unwrap_err().is_not_found());
                }
            }

            let mut ids: Vec<u64> = store.list().iter().map(|c| c.id.value()).collect();
            let len = ids.len();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), len, "duplicate ids in collection");
        }
    }
}
