// ProbeHashMap property tests over the public API (consolidated).
//
// Property 1: counting semantics. Feeding a random token stream through
// the get → increment → set driver cycle must agree with a
// std::collections::HashMap doing entry-style counting, regardless of
// how often the table grew along the way.
//
// Property 2: set/remove sequences keep membership and len() in
// lockstep with a model map, starting from a tiny capacity so growth
// and tombstone reuse both fire repeatedly.
use probe_hashmap::ProbeHashMap;
use proptest::prelude::*;
use std::collections::HashMap;

proptest! {
    #[test]
    fn prop_counting_matches_model(tokens in proptest::collection::vec("[a-d]{1,3}", 0..300)) {
        let mut sut: ProbeHashMap<String, u64> = ProbeHashMap::with_capacity(2);
        let mut model: HashMap<String, u64> = HashMap::new();

        for token in &tokens {
            let next = sut.get(token.as_str()).copied().unwrap_or(0) + 1;
            sut.set(token.clone(), next);
            *model.entry(token.clone()).or_insert(0) += 1;
        }

        prop_assert_eq!(sut.len(), model.len());
        for (k, v) in &model {
            prop_assert_eq!(sut.get(k.as_str()), Some(v));
        }
        // The sorted report covers every counted token exactly once.
        let sorted = sut.entries_by_value_desc();
        prop_assert_eq!(sorted.len(), model.len());
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].1 >= pair[1].1);
        }
    }
}

proptest! {
    #[test]
    fn prop_set_remove_matches_model(
        ops in proptest::collection::vec(("[a-c]{1,2}", any::<u64>(), any::<bool>()), 1..200)
    ) {
        let mut sut: ProbeHashMap<String, u64> = ProbeHashMap::with_capacity(2);
        let mut model: HashMap<String, u64> = HashMap::new();

        for (key, value, is_set) in ops {
            if is_set {
                sut.set(key.clone(), value);
                model.insert(key, value);
            } else {
                prop_assert_eq!(sut.remove(key.as_str()), model.remove(&key));
            }
            prop_assert_eq!(sut.len(), model.len());
        }

        for (k, v) in &model {
            prop_assert_eq!(sut.get(k.as_str()), Some(v));
        }
    }
}
