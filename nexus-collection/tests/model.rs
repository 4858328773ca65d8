//! Model-based checks against `Vec`.

use nexus_collection::{Collection, CollectionBuilder, Growth};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Add(u32),
    AddRange(Vec<u32>),
    InsertAt(usize, u32),
    RemoveAt(usize),
    Set(usize, u32),
    Exchange(usize, usize),
    Pop,
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        8 => any::<u32>().prop_map(Op::Add),
        2 => prop::collection::vec(any::<u32>(), 0..64).prop_map(Op::AddRange),
        3 => (0..80usize, any::<u32>()).prop_map(|(i, v)| Op::InsertAt(i, v)),
        3 => (0..80usize).prop_map(Op::RemoveAt),
        2 => (0..80usize, any::<u32>()).prop_map(|(i, v)| Op::Set(i, v)),
        2 => (0..80usize, 0..80usize).prop_map(|(i, j)| Op::Exchange(i, j)),
        1 => Just(Op::Pop),
        1 => Just(Op::Clear),
    ]
}

fn growth_policy() -> impl Strategy<Value = Growth> {
    prop_oneof![Just(Growth::Double), Just(Growth::OneAndHalf)]
}

fn apply(coll: &mut Collection<u32>, model: &mut Vec<u32>, op: Op) -> Result<(), TestCaseError> {
    let before = model.clone();
    let cap_before = coll.capacity();

    match op {
        Op::Add(v) => {
            coll.add(v);
            model.push(v);
        }
        Op::AddRange(vs) => {
            coll.add_range(vs.iter().copied());
            model.extend_from_slice(&vs);
        }
        Op::InsertAt(i, v) => {
            let result = coll.insert_at(i, v);
            prop_assert_eq!(result.is_ok(), i <= model.len());
            if result.is_ok() {
                model.insert(i, v);
            }
        }
        Op::RemoveAt(i) => {
            let result = coll.remove_at(i);
            prop_assert_eq!(result.is_ok(), i < model.len());
            if let Ok(v) = result {
                prop_assert_eq!(v, model.remove(i));
            }
        }
        Op::Set(i, v) => {
            let result = coll.set(i, v);
            prop_assert_eq!(result.is_ok(), i < model.len());
            if let Ok(old) = result {
                prop_assert_eq!(old, std::mem::replace(&mut model[i], v));
            }
        }
        Op::Exchange(i, j) => {
            let result = coll.exchange(i, j);
            prop_assert_eq!(result.is_ok(), i < model.len() && j < model.len());
            if result.is_ok() {
                model.swap(i, j);
            }
        }
        Op::Pop => {
            prop_assert_eq!(coll.pop(), model.pop());
        }
        Op::Clear => {
            coll.clear();
            model.clear();
        }
    }

    if *model == before {
        // failed calls and no-op swaps never reallocate
        prop_assert_eq!(coll.capacity(), cap_before);
    }
    prop_assert!(coll.capacity() >= coll.len());
    prop_assert!(coll.capacity() >= cap_before);
    prop_assert_eq!(coll.as_slice(), model.as_slice());
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128, ..ProptestConfig::default()
    })]

    /// Property: every operation matches Vec and keeps capacity >= len
    #[test]
    fn matches_vec_model(
        growth in growth_policy(),
        initial in 1..16usize,
        ops in prop::collection::vec(op(), 0..200),
    ) {
        let mut coll = CollectionBuilder::default()
            .capacity(initial)
            .growth(growth)
            .build::<u32>()
            .unwrap();
        let mut model = Vec::new();

        for op in ops {
            apply(&mut coll, &mut model, op)?;
        }

        prop_assert_eq!(coll.len(), model.len());
        let rendered = format!(
            "[{}]",
            model.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
        );
        prop_assert_eq!(coll.to_string(), rendered);
    }

    /// Property: a bulk add never over-allocates past the growth factor
    #[test]
    fn add_range_capacity_is_bounded(
        seed in prop::collection::vec(any::<u32>(), 0..32),
        extra in 0..10_000usize,
    ) {
        let mut coll: Collection<u32> = seed.iter().copied().collect();
        coll.add_range(0..extra as u32);

        prop_assert_eq!(coll.len(), seed.len() + extra);
        prop_assert!(coll.capacity() >= coll.len());
        prop_assert!(coll.capacity() <= 2 * coll.len().max(4));
    }

    /// Property: seeded items read back in order
    #[test]
    fn seeded_round_trip(items in prop::collection::vec(any::<i64>(), 0..256)) {
        let coll: Collection<i64> = items.iter().copied().collect();
        for (i, item) in items.iter().enumerate() {
            prop_assert_eq!(coll.get(i), Ok(item));
        }
        prop_assert!(coll.get(items.len()).is_err());
    }
}
