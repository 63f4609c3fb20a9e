#![cfg(test)]

// Property tests for BucketMap kept inside the crate so they can build
// maps with arbitrary hashing capabilities without feature gates.

use crate::bucket_map::{BucketMap, InsertError};
use crate::key_hash::{FnKeyHash, KeyHash};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use std::collections::HashMap;

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length. The pool may
// contain the empty string to exercise the empty-key rejection.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(String),
    Mutate(usize, i32),
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            idx.clone().prop_map(OpI::Remove),
            idx.clone().prop_map(OpI::Get),
            prop_oneof![
                contains_pool.prop_map(|s: String| s),
                "[a-z]{0,5}".prop_map(|s| s)
            ]
            .prop_map(OpI::Contains),
            (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
            Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

// State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - Empty keys and duplicate keys are rejected, hand the value back and
//   leave the map unchanged (first writer wins).
// - `get`/`contains_key` parity with the model; removal returns the
//   model's value and leaves other entries intact.
// - `iter` yields each live entry exactly once.
// - `len`/`is_empty` parity with the model after every op.
fn run_scenario<H: KeyHash>(
    mut sut: BucketMap<i32, H>,
    pool: &[String],
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<String, i32> = HashMap::new();

    for op in ops {
        match op {
            OpI::Insert(i, v) => {
                let k = &pool[i];
                let already = model.contains_key(k);
                match sut.insert(k, v) {
                    Ok(()) => {
                        prop_assert!(!k.is_empty(), "empty key must be rejected");
                        prop_assert!(!already, "insert must fail on duplicate");
                        model.insert(k.clone(), v);
                    }
                    Err(InsertError::EmptyKey(rv)) => {
                        prop_assert!(k.is_empty());
                        prop_assert_eq!(rv, v, "rejected value handed back");
                    }
                    Err(InsertError::DuplicateKey(rv)) => {
                        prop_assert!(already, "duplicate error only when key exists");
                        prop_assert_eq!(rv, v, "rejected value handed back");
                        prop_assert_eq!(sut.get(k), model.get(k), "value unchanged");
                    }
                }
            }
            OpI::Remove(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.remove(k), model.remove(k));
                prop_assert_eq!(sut.get(k), None);
            }
            OpI::Get(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.get(k), model.get(k));
            }
            OpI::Contains(s) => {
                prop_assert_eq!(sut.contains_key(&s), model.contains_key(&s));
            }
            OpI::Mutate(i, d) => {
                let k = &pool[i];
                match (sut.get_mut(k), model.get_mut(k)) {
                    (Some(sv), Some(mv)) => {
                        *sv = sv.saturating_add(d);
                        *mv = mv.saturating_add(d);
                    }
                    (None, None) => {}
                    (s, m) => {
                        prop_assert!(false, "get_mut parity broken: {:?} vs {:?}", s, m);
                    }
                }
            }
            OpI::Iterate => {
                let mut s_pairs: Vec<(String, i32)> =
                    sut.iter().map(|(k, v)| (k.to_string(), *v)).collect();
                let mut m_pairs: Vec<(String, i32)> =
                    model.iter().map(|(k, v)| (k.clone(), *v)).collect();
                s_pairs.sort();
                m_pairs.sort();
                prop_assert_eq!(s_pairs, m_pairs);
            }
        }

        // Post-conditions after each op
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        let sut: BucketMap<i32> = BucketMap::with_buckets(8).unwrap();
        run_scenario(sut, &pool, ops)?;
    }
}

// Worst-case collision variant: a constant hash forces every key into
// one bucket, so every operation runs through chain maintenance. Only
// performance may degrade under pathological hashing, never correctness.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_constant_hash((pool, ops) in arb_scenario()) {
        let sut = BucketMap::with_buckets_and_hasher(3, FnKeyHash(|_: &str| 0u64)).unwrap();
        run_scenario(sut, &pool, ops)?;
    }
}
