#![cfg(test)]

// Property tests for LongMap kept inside the crate so they can inspect
// chain layout through the test-only `chain` accessor.

use crate::hash;
use crate::long_map::LongMap;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Put(usize, i32),
    Get(usize),
    Remove(usize),
    ContainsValue(i32),
    Mutate(usize, i32),
    Keys,
    Clear,
}

fn arb_scenario(keys: BoxedStrategy<i64>) -> impl Strategy<Value = (Vec<i64>, Vec<OpI>)> {
    proptest::collection::vec(keys, 1..=12).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            4 => (idx.clone(), -8i32..8).prop_map(|(i, v)| OpI::Put(i, v)),
            2 => idx.clone().prop_map(OpI::Get),
            2 => idx.clone().prop_map(OpI::Remove),
            1 => (-8i32..8).prop_map(OpI::ContainsValue),
            1 => (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
            1 => Just(OpI::Keys),
            1 => Just(OpI::Clear),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

fn run_against_model(
    mut sut: LongMap<i32>,
    pool: &[i64],
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<i64, i32> = HashMap::new();

    for op in ops {
        match op {
            OpI::Put(i, v) => {
                let k = pool[i];
                prop_assert_eq!(sut.put(k, v), model.insert(k, v));
            }
            OpI::Get(i) => {
                let k = pool[i];
                prop_assert_eq!(sut.get(k), model.get(&k));
                prop_assert_eq!(sut.contains_key(k), model.contains_key(&k));
            }
            OpI::Remove(i) => {
                let k = pool[i];
                prop_assert_eq!(sut.remove(k), model.remove(&k));
                prop_assert!(!sut.contains_key(k));
            }
            OpI::ContainsValue(v) => {
                let has_model = model.values().any(|mv| *mv == v);
                prop_assert_eq!(sut.contains_value(&v), has_model);
            }
            OpI::Mutate(i, d) => {
                let k = pool[i];
                if let Some(vr) = sut.get_mut(k) {
                    *vr = vr.wrapping_add(d);
                    let mv = model.get_mut(&k).expect("present in model");
                    *mv = mv.wrapping_add(d);
                } else {
                    prop_assert!(!model.contains_key(&k));
                }
            }
            OpI::Keys => {
                let s_keys = sut.keys();
                let unique: BTreeSet<i64> = s_keys.iter().copied().collect();
                prop_assert_eq!(unique.len(), s_keys.len(), "keys must not repeat");
                let m_keys: BTreeSet<i64> = model.keys().copied().collect();
                prop_assert_eq!(unique, m_keys);
                prop_assert_eq!(sut.keys(), s_keys, "order stable without mutation");
            }
            OpI::Clear => {
                let cap = sut.capacity();
                sut.clear();
                model.clear();
                prop_assert_eq!(sut.capacity(), cap);
            }
        }

        // Post-conditions after each op
        // 1) Size parity
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        prop_assert_eq!(sut.keys().len(), model.len());
        prop_assert_eq!(sut.values().len(), model.len());
        // 2) Every key sits in the chain its hash selects
        let cap = sut.capacity();
        let mut placed = 0;
        for b in 0..cap {
            for k in sut.chain(b) {
                prop_assert_eq!(hash::bucket_index(k, cap), b);
                placed += 1;
            }
        }
        prop_assert_eq!(placed, model.len());
        // 3) Capacity is the initial bucket count doubled zero or more times
        let base = sut.initial_capacity().max(1);
        prop_assert!(cap == 0 || (cap % base == 0 && (cap / base).is_power_of_two()));
    }
    Ok(())
}

// Property: State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - `put` returns the previous value exactly as the model does.
// - `get`/`contains_key`/`remove` parity with the model.
// - `keys` yields each live key once and is stable between reads.
// - Entries are always in the bucket their hash selects, including after resizes.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario(any::<i64>().boxed())) {
        run_against_model(LongMap::new(), &pool, ops)?;
    }
}

// Property: Same invariants under heavy collisions. A single-bucket start
// with a high load factor keeps chains long, and the key pool is drawn from
// a narrow range of multiples so many keys share a bucket after each resize.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions(
        (pool, ops) in arb_scenario((0i64..16).prop_map(|k| k * 64).boxed()),
        load_factor in prop_oneof![Just(0.25f32), Just(0.75f32), Just(4.0f32)],
    ) {
        let sut = LongMap::with_capacity_and_load_factor(1, load_factor).unwrap();
        run_against_model(sut, &pool, ops)?;
    }
}
