// File:    validate.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: Checks that every character of a text belongs to an alphabet.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::alphabet::AlphabetTable;
use crate::error::CipherError;

/// Checks that every character of `text` is part of `table`.
///
/// The text is scanned left to right and the first foreign character is
/// reported with its character position.
///
/// # Errors
///
/// Returns [`CipherError::InvalidCharacter`] for the first character not in the table.
pub fn validate(table: &AlphabetTable, text: &str) -> Result<(), CipherError> {
    match text.chars().enumerate().find(|&(_, c)| !table.contains(c)) {
        Some((position, character)) => Err(CipherError::InvalidCharacter {
            character,
            position,
        }),
        None => Ok(()),
    }
}
