#![cfg(test)]

// Property tests for ProbeHashMap kept inside the crate so they can
// assert on internals (capacity, tombstone count) alongside the model.

use crate::probe_hash_map::{ProbeHashMap, SetOutcome};
use core::hash::Hasher;
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Set(usize, u32),
    Remove(usize),
    Get(usize),
    Contains(String),
    TopN(usize),
    Sorted,
}

fn key_from(pool: &[String], i: usize) -> String {
    pool[i].clone()
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            (idx.clone(), any::<u32>()).prop_map(|(i, v)| OpI::Set(i, v)),
            idx.clone().prop_map(OpI::Remove),
            idx.clone().prop_map(OpI::Get),
            prop_oneof![
                contains_pool.prop_map(|s: String| s),
                "[a-z]{0,5}".prop_map(|s| s)
            ]
            .prop_map(OpI::Contains),
            (0usize..10).prop_map(OpI::TopN),
            Just(OpI::Sorted),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

fn run_scenario<S>(
    mut sut: ProbeHashMap<String, u32, S>,
    pool: Vec<String>,
    ops: Vec<OpI>,
) -> Result<(), TestCaseError>
where
    S: core::hash::BuildHasher,
{
    let mut model: HashMap<String, u32> = HashMap::new();

    for op in ops {
        match op {
            // set reports Updated exactly when the key is live; an
            // absent key yields Inserted or (on a resize) Grown.
            OpI::Set(i, v) => {
                let k = key_from(&pool, i);
                let already = model.contains_key(&k);
                match sut.set(k.clone(), v) {
                    SetOutcome::Updated => prop_assert!(already, "Updated only for live keys"),
                    SetOutcome::Inserted | SetOutcome::Grown => {
                        prop_assert!(!already, "insert outcomes only for absent keys")
                    }
                }
                model.insert(k, v);
            }
            // remove returns the model's value for present keys and
            // None (with no bookkeeping change) for absent ones.
            OpI::Remove(i) => {
                let k = key_from(&pool, i);
                let expected = model.remove(&k);
                prop_assert_eq!(sut.remove(k.as_str()), expected);
            }
            OpI::Get(i) => {
                let k = key_from(&pool, i);
                prop_assert_eq!(sut.get(k.as_str()), model.get(&k));
            }
            OpI::Contains(s) => {
                prop_assert_eq!(sut.contains_key(s.as_str()), model.contains_key(&s));
            }
            // top_n yields min(n, live) entries (all of them for n == 0),
            // each one present in the model.
            OpI::TopN(n) => {
                let yielded: Vec<_> = sut.top_n(n).collect();
                let expected = if n == 0 { model.len() } else { n.min(model.len()) };
                prop_assert_eq!(yielded.len(), expected);
                for (k, v) in yielded {
                    prop_assert_eq!(model.get(k), Some(v));
                }
            }
            // The sorted view is a value-descending permutation of the
            // model's entries.
            OpI::Sorted => {
                let sorted = sut.entries_by_value_desc();
                prop_assert_eq!(sorted.len(), model.len());
                for pair in sorted.windows(2) {
                    prop_assert!(pair[0].1 >= pair[1].1, "values must be non-increasing");
                }
                let seen: BTreeMap<String, u32> =
                    sorted.iter().map(|(k, v)| ((*k).clone(), **v)).collect();
                let expected: BTreeMap<String, u32> =
                    model.iter().map(|(k, v)| (k.clone(), *v)).collect();
                prop_assert_eq!(seen, expected);
            }
        }

        // Post-conditions after each op
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        prop_assert!(sut.len() < sut.capacity(), "live count must stay below capacity");
    }

    // Final parity: iteration yields exactly the model's entries.
    let seen: BTreeMap<String, u32> = sut.iter().map(|(k, v)| (k.clone(), *v)).collect();
    let expected: BTreeMap<String, u32> = model.into_iter().collect();
    prop_assert_eq!(seen, expected);
    Ok(())
}

// Property: state-machine equivalence against std::collections::HashMap
// across random operation sequences.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        run_scenario(ProbeHashMap::new(), pool, ops)?;
    }
}

// Collision variant using a constant hasher so every key shares one home
// slot, plus a tiny initial capacity so growth fires constantly. This
// stresses probe chains, tombstone skipping/reuse, and rehashing.
#[derive(Clone, Default)]
struct ConstBuildHasher;
struct ConstHasher;
impl std::hash::BuildHasher for ConstBuildHasher {
    type Hasher = ConstHasher;
    fn build_hasher(&self) -> Self::Hasher {
        ConstHasher
    }
}
impl Hasher for ConstHasher {
    fn write(&mut self, _bytes: &[u8]) {}
    fn finish(&self) -> u64 {
        0
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario()) {
        run_scenario(
            ProbeHashMap::with_capacity_and_hasher(2, ConstBuildHasher),
            pool,
            ops,
        )?;
    }
}
