use std::cell::Cell;
use std::ops::ControlFlow;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use seqops::{
    concat, concat_sequences, filter, for_each, from_fn, from_iter, map, reduce, shuffle_with,
    values, BoxedSequence, Sequence, SequenceExt,
};

fn take<S: Sequence>(mut sequence: S, n: usize) -> Vec<S::Item> {
    let mut taken = Vec::new();
    if n == 0 {
        return taken;
    }
    let _ = sequence.drive(|item| {
        taken.push(item);
        if taken.len() == n {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    taken
}

#[test]
fn test_pipeline_scenario() {
    let parts = [vec![1, 2, 3], vec![7, 8, 9]];
    let all: Vec<i32> = concat(&parts).cloned().to_vec();
    assert_eq!(all, vec![1, 2, 3, 7, 8, 9]);

    let even: Vec<i32> = filter(values(&all), |v| **v % 2 == 0).cloned().to_vec();
    assert_eq!(even, vec![2, 8]);

    let doubled: Vec<i32> = map(values(&[1, 2, 3]), |v| v * 2).to_vec();
    assert_eq!(doubled, vec![2, 4, 6]);

    assert_eq!(reduce(values(&all), |acc, v| acc + v, 0), 30);
    assert_eq!(reduce(values(&all), |acc, v| acc - v, 40), 10);
}

#[test]
fn test_for_each_three_calls() {
    let mut indices = Vec::new();
    for_each(values(&[1, 2, 3]), |index, _| indices.push(index));
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn test_infinite_producers_concatenated() {
    let naturals = || {
        from_fn(|step: &mut dyn FnMut(u64) -> ControlFlow<()>| {
            let mut n = 0;
            loop {
                step(n)?;
                n += 1;
            }
        })
    };
    // the second producer is never reached, the first never ends
    let sequences: Vec<BoxedSequence<'_, u64>> = vec![naturals().boxed(), naturals().boxed()];
    let squares = concat_sequences(sequences)
        .filter(|n| n % 3 == 0)
        .map(|n| n * n);
    assert_eq!(take(squares, 4), vec![0, 9, 36, 81]);
}

#[test]
fn test_early_stop_through_map_and_filter() {
    let predicate_calls = Cell::new(0);
    let map_calls = Cell::new(0);
    let items: Vec<u32> = (0..100).collect();
    let sequence = values(&items)
        .filter(|v| {
            predicate_calls.set(predicate_calls.get() + 1);
            **v % 10 == 5
        })
        .map(|v| {
            map_calls.set(map_calls.get() + 1);
            v + 1
        });
    assert_eq!(take(sequence, 2), vec![6, 16]);
    assert_eq!(map_calls.get(), 2);
    assert_eq!(predicate_calls.get(), 16);
}

#[test]
fn test_shuffled_pipeline() {
    let mut deck: Vec<u32> = (1..=52).collect();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
    let total = shuffle_with(&mut deck, &mut rng).reduce(|acc, card| acc + card, 0);
    assert_eq!(total, (1..=52).sum::<u32>());
}

#[test]
fn test_redrive_restarts() {
    let items = ["hello", "world", "gophers"];
    let mut sequence = from_iter(items).filter(|v| v.len() == 5);
    assert_eq!((&mut sequence).to_vec(), vec!["hello", "world"]);
    assert_eq!((&mut sequence).to_vec(), vec!["hello", "world"]);
}

proptest! {
    #[test]
    fn prop_concat_preserves_order_and_count(a in prop::collection::vec(any::<i32>(), 0..50), b in prop::collection::vec(any::<i32>(), 0..50)) {
        let parts = [a.clone(), b.clone()];
        let joined: Vec<i32> = concat(&parts).cloned().to_vec();
        prop_assert_eq!(joined.len(), a.len() + b.len());
        prop_assert_eq!(&joined[..a.len()], &a[..]);
        prop_assert_eq!(&joined[a.len()..], &b[..]);

        let lazy: Vec<i32> = concat_sequences([values(&a), values(&b)]).cloned().to_vec();
        prop_assert_eq!(lazy, joined);
    }

    #[test]
    fn prop_shuffle_is_permutation(items in prop::collection::vec(any::<u16>(), 0..100), seed in any::<u64>()) {
        let mut storage = items.clone();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
        let mut shuffled: Vec<u16> = shuffle_with(&mut storage, &mut rng).cloned().to_vec();
        prop_assert_eq!(&shuffled, &storage);
        let mut expected = items;
        expected.sort_unstable();
        shuffled.sort_unstable();
        prop_assert_eq!(shuffled, expected);
    }

    #[test]
    fn prop_filter_keeps_exactly_matching(items in prop::collection::vec(any::<i64>(), 0..100)) {
        let kept: Vec<i64> = values(&items).cloned().filter(|v| v % 3 == 0).to_vec();
        prop_assert!(kept.len() <= items.len());
        prop_assert!(kept.iter().all(|v| v % 3 == 0));
        let expected: Vec<i64> = items.iter().copied().filter(|v| v % 3 == 0).collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn prop_map_is_one_to_one(items in prop::collection::vec(any::<i32>(), 0..100)) {
        let mapped: Vec<i64> = values(&items).map(|v| i64::from(*v) * 2).to_vec();
        prop_assert_eq!(mapped.len(), items.len());
        for (input, output) in items.iter().zip(&mapped) {
            prop_assert_eq!(*output, i64::from(*input) * 2);
        }
    }

    #[test]
    fn prop_reduce_matches_fold(items in prop::collection::vec(any::<i16>(), 0..100)) {
        let sum = values(&items).reduce(|acc: i64, v| acc + i64::from(*v), 0);
        prop_assert_eq!(sum, items.iter().map(|v| i64::from(*v)).sum::<i64>());
    }
}
