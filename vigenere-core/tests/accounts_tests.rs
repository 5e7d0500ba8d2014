#![allow(missing_docs)]
#![cfg(feature = "accounts")]
use rusqlite::Connection;
use rusqlite::types::Value;
use vigenere_core::AccountError;
use vigenere_core::accounts::{UserRow, find_users_by_username, validate_username};

fn seeded_db() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE users (id INTEGER PRIMARY KEY, username TEXT NOT NULL, email TEXT);
         INSERT INTO users (username, email) VALUES ('alice', 'alice@example.com');
         INSERT INTO users (username, email) VALUES ('bob', NULL);
         INSERT INTO users (username, email) VALUES ('alice', 'second@example.com');",
    )
    .unwrap();
    conn
}

#[test]
fn test_valid_usernames() {
    for name in ["alice", "Bob_42", "_", "ABC123"] {
        assert!(validate_username(name).is_ok(), "{name} should be valid");
    }
}

#[test]
fn test_invalid_usernames() {
    for name in ["", "al ice", "bob!", "ívan", "x;DROP TABLE users", "name\n"] {
        assert!(
            matches!(validate_username(name), Err(AccountError::InvalidUsername(_))),
            "{name:?} should be rejected"
        );
    }
}

#[test]
fn test_find_users_returns_all_columns() {
    let conn = seeded_db();
    let rows = find_users_by_username(&conn, "bob").unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].columns, ["id", "username", "email"]);
    assert_eq!(rows[0].get("username"), Some(&Value::Text("bob".to_string())));
    assert_eq!(rows[0].get("email"), Some(&Value::Null));
    assert_eq!(rows[0].get("missing"), None);
}

#[test]
fn test_find_users_multiple_matches() {
    let conn = seeded_db();
    let rows = find_users_by_username(&conn, "alice").unwrap();
    assert_eq!(rows.len(), 2);
}

#[test]
fn test_find_users_treats_input_literally() {
    let conn = seeded_db();
    let rows = find_users_by_username(&conn, "' OR '1'='1").unwrap();
    assert!(rows.is_empty());
    // The table is still intact.
    let rows = find_users_by_username(&conn, "x'; DROP TABLE users; --").unwrap();
    assert!(rows.is_empty());
    assert_eq!(find_users_by_username(&conn, "bob").unwrap().len(), 1);
}

#[test]
fn test_find_users_without_table() {
    let conn = Connection::open_in_memory().unwrap();
    assert!(matches!(
        find_users_by_username(&conn, "alice"),
        Err(AccountError::Database(_))
    ));
}

#[test]
fn test_user_row_get_with_missing_value() {
    let row = UserRow {
        columns: vec!["id".to_string(), "username".to_string()],
        values: vec![Value::Integer(1)],
    };
    assert_eq!(row.get("id"), Some(&Value::Integer(1)));
    assert_eq!(row.get("username"), None);
}
