//! Remote Boundary Tests
//!
//! The command protocol carries results and structured errors end-to-end,
//! and a remote client shares the catalog with local callers.

use crate::*;
use bookstore::{Command, Output};
use serde_json::{json, Value};

#[test]
fn test_json_protocol_scenario() {
    let store = BookStore::new();
    let executor = store.executor();

    let add = json!({
        "op": "add_books",
        "args": {"books": [{
            "isbn": TEST_ISBN,
            "title": "Test of Thrones",
            "author": "George RR Testin'",
            "price": 10.0,
            "num_copies": 5,
            "num_sale_misses": 0,
            "num_times_rated": 0,
            "total_rating": 0,
            "editor_pick": false
        }]}
    });
    let response: Value = serde_json::from_str(&executor.handle_json(&add.to_string())).unwrap();
    assert_eq!(response, json!({"status": "ok", "output": "unit"}));

    let buy = json!({"op": "buy_books", "args": {"copies": [{"isbn": TEST_ISBN, "quantity": 6}]}});
    let response: Value = serde_json::from_str(&executor.handle_json(&buy.to_string())).unwrap();
    assert_eq!(response["status"], "error");
    assert_eq!(response["error"]["code"], "InsufficientStock");
    assert_eq!(
        response["error"]["details"],
        json!({"isbn": TEST_ISBN, "requested": 6, "available": 5})
    );

    let get = json!({"op": "get_books"});
    let response: Value = serde_json::from_str(&executor.handle_json(&get.to_string())).unwrap();
    assert_eq!(response["output"]["stock_records"][0]["num_copies"], 5);
}

#[test]
fn test_remote_and_local_share_catalog() {
    let store = BookStore::builder().global_lock().build();
    let remote = store.remote();

    store.stock_manager().add_books(vec![book(1, 10)]).unwrap();
    remote.buy_books(&copies(&[(1, 4)])).unwrap();
    assert_eq!(store.stock_manager().get_books().unwrap()[0].num_copies, 6);

    remote.remove_all_books().unwrap();
    assert!(store.stock_manager().get_books().unwrap().is_empty());
}

#[test]
fn test_remote_errors_match_local() {
    let store = BookStore::new();
    let local = store.storefront();
    let remote = store.remote();
    store.stock_manager().add_books(vec![book(TEST_ISBN, NUM_COPIES)]).unwrap();

    let requests = vec![
        copies(&[(TEST_ISBN, 6)]),
        copies(&[(TEST_ISBN, -6)]),
        copies(&[(TEST_ISBN, 1), (TEST_ISBN, 1)]),
        copies(&[(TEST_ISBN, 1), (12, 1)]),
    ];
    for request in requests {
        let local_err = local.buy_books(&request).unwrap_err();
        let remote_err = remote.buy_books(&request).unwrap_err();
        assert_eq!(remote_err, local_err, "request {:?}", request);
    }
    assert_eq!(store.stock_manager().get_books().unwrap()[0].num_copies, NUM_COPIES);
}

#[test]
fn test_commands_execute_directly() {
    let store = BookStore::new();
    let executor = store.executor();

    let output = executor
        .execute(Command::AddBooks {
            books: vec![book(1, 1), book(2, 1)],
        })
        .unwrap();
    assert_eq!(output, Output::Unit);
    assert_eq!(executor.execute(Command::RemoveAllBooks).unwrap(), Output::Count(2));
}

#[test]
fn test_retry_contract() {
    let writes = [
        Command::AddBooks { books: vec![] },
        Command::AddCopies { copies: vec![] },
        Command::BuyBooks { copies: vec![] },
        Command::UpdateEditorPicks { picks: vec![] },
        Command::RateBooks { ratings: vec![] },
    ];
    assert!(writes.iter().all(|c| !c.is_idempotent()));

    let safe = [
        Command::GetBooks,
        Command::GetBooksByIsbn { isbns: vec![] },
        Command::GetEditorPicks { count: 1 },
        Command::RemoveAllBooks,
    ];
    assert!(safe.iter().all(Command::is_idempotent));
}
