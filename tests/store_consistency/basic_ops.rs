//! Basic Operation Tests
//!
//! Happy paths of every operation, on a quiet store.

use crate::*;

// =============================================================================
// BUY / RESTOCK
// =============================================================================

#[test]
fn test_buy_all_copies_default_book() {
    for f in fixtures_with_default_book() {
        f.client.buy_books(&copies(&[(TEST_ISBN, 5)])).unwrap();

        let books = f.books();
        assert_eq!(books.len(), 1, "{}", f.label);
        assert_eq!(books[0].isbn, Isbn::new(TEST_ISBN), "{}", f.label);
        assert_eq!(books[0].num_copies, 0, "{}", f.label);
    }
}

#[test]
fn test_buy_several_titles_in_one_batch() {
    for f in fixtures_with_default_book() {
        f.add_book(1, 10);
        f.add_book(2, 10);

        f.client
            .buy_books(&copies(&[(2, 4), (TEST_ISBN, 1), (1, 10)]))
            .unwrap();

        let remaining: Vec<u64> = f.books().iter().map(|b| b.num_copies).collect();
        assert_eq!(remaining, vec![0, 6, 4], "{}", f.label);
    }
}

#[test]
fn test_add_copies() {
    for f in fixtures_with_default_book() {
        f.manager.add_copies(&copies(&[(TEST_ISBN, 7)])).unwrap();
        assert_eq!(f.book(TEST_ISBN).num_copies, 12, "{}", f.label);
    }
}

// =============================================================================
// READS
// =============================================================================

#[test]
fn test_get_books() {
    for f in fixtures_with_default_book() {
        let added = vec![
            StockRecord::new(
                TEST_ISBN + 1,
                "The Art of Computer Programming",
                "Donald Knuth",
                300.0,
                5,
            ),
            StockRecord::new(
                TEST_ISBN + 2,
                "The C Programming Language",
                "Dennis Ritchie and Brian Kerninghan",
                50.0,
                5,
            ),
        ];
        f.manager.add_books(added.clone()).unwrap();

        let books = f.books();
        assert_eq!(books.len(), 3, "{}", f.label);
        assert_eq!(&books[1..], &added[..], "{}", f.label);
    }
}

#[test]
fn test_get_certain_books() {
    for f in fixtures_with_default_book() {
        f.add_book(TEST_ISBN + 1, 1);
        f.add_book(TEST_ISBN + 2, 2);

        let books = f
            .manager
            .get_books_by_isbn(&[Isbn::new(TEST_ISBN + 2), Isbn::new(TEST_ISBN + 1)])
            .unwrap();
        let isbns: Vec<i64> = books.iter().map(|b| b.isbn.get()).collect();
        assert_eq!(isbns, vec![TEST_ISBN + 1, TEST_ISBN + 2], "{}", f.label);
    }
}

#[test]
fn test_storefront_view() {
    for f in fixtures_with_default_book() {
        let books = f.client.get_books(&[Isbn::new(TEST_ISBN)]).unwrap();
        assert_eq!(books, vec![book(TEST_ISBN, NUM_COPIES).to_book()], "{}", f.label);
    }
}

// =============================================================================
// RATINGS
// =============================================================================

#[test]
fn test_rate_and_top_rated() {
    for f in fixtures() {
        for isbn in 1..=3 {
            f.add_book(isbn, 1);
        }
        f.client
            .rate_books(&[BookRating::new(1, 2), BookRating::new(3, 5)])
            .unwrap();
        f.client.rate_books(&[BookRating::new(1, 4)]).unwrap();

        let record = f.book(1);
        assert_eq!(record.num_times_rated, 2, "{}", f.label);
        assert_eq!(record.total_rating, 6, "{}", f.label);
        assert_eq!(record.average_rating(), Some(3.0), "{}", f.label);

        let top: Vec<i64> = f
            .client
            .get_top_rated_books(2)
            .unwrap()
            .iter()
            .map(|b| b.isbn.get())
            .collect();
        assert_eq!(top, vec![3, 1], "{}", f.label);
    }
}

#[test]
fn test_books_in_demand() {
    for f in fixtures() {
        f.manager
            .add_books(vec![book(1, 0).with_sale_misses(3), book(2, 4)])
            .unwrap();
        let in_demand = f.manager.get_books_in_demand().unwrap();
        assert_eq!(in_demand.len(), 1, "{}", f.label);
        assert_eq!(in_demand[0].num_sale_misses, 3, "{}", f.label);
    }
}

// =============================================================================
// RESET
// =============================================================================

#[test]
fn test_remove_all_books() {
    for f in fixtures_with_default_book() {
        f.add_book(1, 1);
        assert_eq!(f.manager.remove_all_books().unwrap(), 2, "{}", f.label);
        assert!(f.books().is_empty(), "{}", f.label);

        // Idempotent
        assert_eq!(f.manager.remove_all_books().unwrap(), 0, "{}", f.label);

        f.add_book(TEST_ISBN, NUM_COPIES);
        assert_eq!(f.books().len(), 1, "{}", f.label);
    }
}
