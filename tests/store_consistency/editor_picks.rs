//! Editor Pick Tests
//!
//! Sampling semantics and consistency of picks under concurrent updates.

use crate::*;
use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

fn pick(isbn: i64, flag: bool) -> EditorPick {
    EditorPick::new(isbn, flag)
}

#[test]
fn test_picks_are_distinct_and_flagged() {
    for f in fixtures() {
        for isbn in 1..=20 {
            f.add_book(isbn, 1);
        }
        let picks: Vec<EditorPick> = (1..=20).map(|isbn| pick(isbn, isbn % 4 == 0)).collect();
        f.manager.update_editor_picks(&picks).unwrap();

        for _ in 0..20 {
            let sample = f.client.get_editor_picks(3).unwrap();
            let distinct: HashSet<i64> = sample.iter().map(|b| b.isbn.get()).collect();
            assert_eq!(distinct.len(), 3, "{}", f.label);
            assert!(
                sample.iter().all(|b| b.editor_pick && b.isbn.get() % 4 == 0),
                "{}: {:?}",
                f.label,
                sample
            );
        }

        // All five picks, in some order
        let all: HashSet<i64> = f
            .client
            .get_editor_picks(5)
            .unwrap()
            .iter()
            .map(|b| b.isbn.get())
            .collect();
        assert_eq!(all, [4, 8, 12, 16, 20].into_iter().collect(), "{}", f.label);
    }
}

#[test]
fn test_sample_larger_than_picks() {
    for f in fixtures_with_default_book() {
        f.manager
            .update_editor_picks(&[pick(TEST_ISBN, true)])
            .unwrap();

        let err = f.client.get_editor_picks(2).unwrap_err();
        assert_eq!(
            err,
            StoreError::SampleSize {
                requested: 2,
                available: 1
            },
            "{}",
            f.label
        );
        assert!(f.client.get_editor_picks(0).unwrap().is_empty(), "{}", f.label);
    }
}

#[test]
fn test_clearing_picks() {
    for f in fixtures_with_default_book() {
        f.manager
            .update_editor_picks(&[pick(TEST_ISBN, true)])
            .unwrap();
        f.manager
            .update_editor_picks(&[pick(TEST_ISBN, false)])
            .unwrap();

        assert!(!f.book(TEST_ISBN).editor_pick, "{}", f.label);
        assert!(f.client.get_editor_picks(1).unwrap_err().is_sample_size());
    }
}

/// The pick swaps between A and B in single batches; a sample of one is
/// always A or B and never fails for lack of picks.
#[test]
fn test_pick_swap_is_atomic() {
    const ROUNDS: usize = 200;
    let (a, b) = (TEST_ISBN, TEST_ISBN + 1);

    for f in fixtures_with_default_book() {
        f.add_book(b, NUM_COPIES);
        let pick_a = vec![pick(a, true), pick(b, false)];
        let pick_b = vec![pick(a, false), pick(b, true)];
        f.manager.update_editor_picks(&pick_a).unwrap();

        let barrier = Arc::new(Barrier::new(2));
        let swapper = {
            let manager = Arc::clone(&f.manager);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..ROUNDS {
                    manager.update_editor_picks(&pick_b).unwrap();
                    manager.update_editor_picks(&pick_a).unwrap();
                }
            })
        };
        let sampler = {
            let client = Arc::clone(&f.client);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..ROUNDS {
                    let sample = client.get_editor_picks(1).unwrap();
                    assert_eq!(sample.len(), 1);
                    let isbn = sample[0].isbn.get();
                    assert!(isbn == a || isbn == b, "unexpected pick {}", isbn);
                }
            })
        };

        swapper.join().unwrap();
        sampler.join().unwrap();
    }
}
