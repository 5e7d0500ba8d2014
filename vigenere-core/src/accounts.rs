// File:    accounts.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: Username format checks and a parameterized user lookup against SQLite.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Account helpers that sit next to the cipher.
//!
//! Neither helper touches the cipher; they are kept here so the CLI and
//! downstream services share one definition of a valid username and one
//! injection-safe lookup.

use crate::error::AccountError;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use rusqlite::Connection;
use rusqlite::types::Value;

#[allow(clippy::expect_used)]
static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("username pattern is valid"));

const FIND_USERS_SQL: &str = "SELECT * FROM users WHERE username = ?1";

/// One row of the `users` table, with every column in table order.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRow {
    /// Column names, as reported by the statement.
    pub columns: Vec<String>,
    /// Column values, aligned with `columns`.
    pub values: Vec<Value>,
}

impl UserRow {
    /// Returns the value of the column called `name`, if there is one.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns
            .iter()
            .position(|c| c == name)
            .and_then(|i| self.values.get(i))
    }
}

/// Checks that `username` consists only of ASCII letters, digits and underscores.
///
/// # Errors
///
/// Returns [`AccountError::InvalidUsername`] if the name is empty or contains
/// any other character.
pub fn validate_username(username: &str) -> Result<(), AccountError> {
    if USERNAME_RE.is_match(username) {
        Ok(())
    } else {
        Err(AccountError::InvalidUsername(username.to_string()))
    }
}

/// Returns every row of `users` whose `username` equals `username`.
///
/// The value is bound as a statement parameter, never spliced into the SQL.
///
/// # Errors
///
/// Returns [`AccountError::Database`] if the statement cannot be prepared or run.
pub fn find_users_by_username(
    conn: &Connection,
    username: &str,
) -> Result<Vec<UserRow>, AccountError> {
    let mut stmt = conn.prepare(FIND_USERS_SQL)?;
    let columns: Vec<String> = stmt
        .column_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    let column_count = columns.len();

    let rows = stmt.query_map([username], |row| {
        (0..column_count)
            .map(|i| row.get::<_, Value>(i))
            .collect::<Result<Vec<_>, _>>()
    })?;

    let mut users = Vec::new();
    for values in rows {
        users.push(UserRow {
            columns: columns.clone(),
            values: values?,
        });
    }
    debug!("User lookup returned {} row(s).", users.len());
    Ok(users)
}
