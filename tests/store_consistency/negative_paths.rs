//! Negative Path Tests
//!
//! Every rejected call fails with the right error kind and leaves the
//! catalog field-for-field identical. The store stays usable afterwards.

use crate::*;

/// Run `op`, expect it to fail, and check the catalog did not move
fn assert_rejected<T: std::fmt::Debug>(
    f: &Fixture,
    op: impl FnOnce(&Fixture) -> Result<T, StoreError>,
    check: impl Fn(&StoreError) -> bool,
) {
    let before = f.books();
    let err = op(f).unwrap_err();
    assert!(check(&err), "{}: unexpected error {:?}", f.label, err);
    assert_eq!(f.books(), before, "{}: catalog changed", f.label);
}

// =============================================================================
// BUY
// =============================================================================

#[test]
fn test_buy_invalid_isbn() {
    for f in fixtures_with_default_book() {
        assert_rejected(
            &f,
            |f| f.client.buy_books(&copies(&[(TEST_ISBN, 1), (-1, 1)])),
            StoreError::is_validation,
        );
    }
}

#[test]
fn test_buy_non_existing_isbn() {
    for f in fixtures_with_default_book() {
        assert_rejected(
            &f,
            |f| f.client.buy_books(&copies(&[(TEST_ISBN, 1), (100000, 10)])),
            StoreError::is_not_found,
        );
    }
}

#[test]
fn test_buy_too_many_books() {
    for f in fixtures_with_default_book() {
        assert_rejected(
            &f,
            |f| f.client.buy_books(&copies(&[(TEST_ISBN, NUM_COPIES as i64 + 1)])),
            |e| {
                *e == StoreError::InsufficientStock {
                    isbn: Isbn::new(TEST_ISBN),
                    requested: NUM_COPIES + 1,
                    available: NUM_COPIES,
                }
            },
        );
        assert_eq!(f.book(TEST_ISBN).num_copies, NUM_COPIES, "{}", f.label);
    }
}

#[test]
fn test_buy_negative_number_of_copies() {
    for f in fixtures_with_default_book() {
        assert_rejected(
            &f,
            |f| f.client.buy_books(&copies(&[(TEST_ISBN, -1)])),
            StoreError::is_validation,
        );
        assert_rejected(
            &f,
            |f| f.client.buy_books(&copies(&[(TEST_ISBN, 0)])),
            StoreError::is_validation,
        );
    }
}

#[test]
fn test_buy_duplicate_isbn() {
    for f in fixtures_with_default_book() {
        assert_rejected(
            &f,
            |f| f.client.buy_books(&copies(&[(TEST_ISBN, 1), (TEST_ISBN, 2)])),
            StoreError::is_duplicate,
        );
    }
}

#[test]
fn test_partial_stock_rejects_whole_batch() {
    for f in fixtures_with_default_book() {
        f.add_book(1, 100);
        assert_rejected(
            &f,
            |f| f.client.buy_books(&copies(&[(1, 50), (TEST_ISBN, 6)])),
            StoreError::is_insufficient_stock,
        );
    }
}

// =============================================================================
// RESTOCK / PICKS / RATINGS
// =============================================================================

#[test]
fn test_add_copies_rejections() {
    for f in fixtures_with_default_book() {
        assert_rejected(
            &f,
            |f| f.manager.add_copies(&copies(&[(TEST_ISBN, 0)])),
            StoreError::is_validation,
        );
        assert_rejected(
            &f,
            |f| f.manager.add_copies(&copies(&[(TEST_ISBN, 1), (7, 1)])),
            StoreError::is_not_found,
        );
        assert_rejected(
            &f,
            |f| f.manager.add_copies(&copies(&[(TEST_ISBN, 1), (TEST_ISBN, 1)])),
            StoreError::is_duplicate,
        );
    }
}

#[test]
fn test_update_editor_picks_rejections() {
    for f in fixtures_with_default_book() {
        assert_rejected(
            &f,
            |f| {
                f.manager.update_editor_picks(&[
                    EditorPick::new(TEST_ISBN, true),
                    EditorPick::new(9, true),
                ])
            },
            StoreError::is_not_found,
        );
        assert_rejected(
            &f,
            |f| f.manager.update_editor_picks(&[EditorPick::new(0, true)]),
            StoreError::is_validation,
        );
    }
}

#[test]
fn test_rate_books_rejections() {
    for f in fixtures_with_default_book() {
        assert_rejected(
            &f,
            |f| f.client.rate_books(&[BookRating::new(TEST_ISBN, 6)]),
            StoreError::is_validation,
        );
        assert_rejected(
            &f,
            |f| {
                f.client
                    .rate_books(&[BookRating::new(TEST_ISBN, 4), BookRating::new(TEST_ISBN, 2)])
            },
            StoreError::is_duplicate,
        );
    }
}

// =============================================================================
// STRUCTURAL
// =============================================================================

#[test]
fn test_add_existing_isbn() {
    for f in fixtures_with_default_book() {
        assert_rejected(
            &f,
            |f| f.manager.add_books(vec![book(1, 1), book(TEST_ISBN, 1)]),
            StoreError::is_duplicate,
        );
    }
}

#[test]
fn test_add_duplicate_in_batch() {
    for f in fixtures() {
        assert_rejected(
            &f,
            |f| f.manager.add_books(vec![book(1, 1), book(2, 1), book(1, 3)]),
            StoreError::is_duplicate,
        );
    }
}

#[test]
fn test_add_invalid_fields() {
    for f in fixtures() {
        let invalid = vec![
            StockRecord::new(0, "Title", "Author", 1.0, 1),
            StockRecord::new(1, "", "Author", 1.0, 1),
            StockRecord::new(1, "Title", "", 1.0, 1),
            StockRecord::new(1, "Title", "Author", -1.0, 1),
        ];
        for record in invalid {
            assert_rejected(
                &f,
                |f| f.manager.add_books(vec![book(2, 1), record]),
                StoreError::is_validation,
            );
        }
    }
}

// =============================================================================
// READS
// =============================================================================

#[test]
fn test_get_invalid_isbn() {
    for f in fixtures_with_default_book() {
        assert_rejected(
            &f,
            |f| f.manager.get_books_by_isbn(&[Isbn::new(TEST_ISBN), Isbn::new(-1)]),
            StoreError::is_validation,
        );
        assert_rejected(
            &f,
            |f| f.client.get_books(&[Isbn::new(TEST_ISBN), Isbn::new(404)]),
            StoreError::is_not_found,
        );
    }
}

#[test]
fn test_store_usable_after_rejections() {
    for f in fixtures_with_default_book() {
        let _ = f.client.buy_books(&copies(&[(TEST_ISBN, 99)]));
        let _ = f.manager.add_copies(&copies(&[(404, 1)]));
        let _ = f.manager.add_books(vec![book(TEST_ISBN, 1)]);

        f.client.buy_books(&copies(&[(TEST_ISBN, 2)])).unwrap();
        assert_eq!(f.book(TEST_ISBN).num_copies, 3, "{}", f.label);
    }
}
