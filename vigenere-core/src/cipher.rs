// File:    cipher.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: The cipher engine: per-character modular shifting over an alphabet table.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The cipher engine.
//!
//! Shifting happens inside the *shift ring*: the table's symbols with the
//! pass-through characters removed, in table order. A shifted character can
//! therefore never turn into a pass-through character, which decryption would
//! leave untouched. For the standard table the whitespace symbols are last, so
//! every other character keeps its registry index inside the ring.

use crate::alphabet::AlphabetTable;
use crate::error::CipherError;
use crate::key::extend_key;
use crate::validate::validate;
use log::debug;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static STANDARD_CIPHER: Lazy<Cipher<'static>> =
    Lazy::new(|| Cipher::new(AlphabetTable::standard()));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// A Vigenère cipher bound to one alphabet table.
#[derive(Debug, Clone)]
pub struct Cipher<'a> {
    table: &'a AlphabetTable,
    ring: Vec<char>,
    ring_index: HashMap<char, usize>,
}

impl<'a> Cipher<'a> {
    /// Creates a cipher over `table`.
    #[must_use]
    pub fn new(table: &'a AlphabetTable) -> Self {
        let ring: Vec<char> = table
            .symbols()
            .iter()
            .copied()
            .filter(|&c| !table.is_passthrough(c))
            .collect();
        let ring_index = ring.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Self {
            table,
            ring,
            ring_index,
        }
    }

    /// Returns the shared cipher over the standard table.
    #[must_use]
    pub fn standard() -> &'static Cipher<'static> {
        &STANDARD_CIPHER
    }

    /// The table this cipher validates against.
    #[must_use]
    pub const fn table(&self) -> &'a AlphabetTable {
        self.table
    }

    /// Number of symbols that take part in shifting.
    #[must_use]
    pub const fn ring_len(&self) -> usize {
        self.ring.len()
    }

    /// Encrypts `message` with `key`.
    ///
    /// Pass-through characters are copied unchanged; every other character is
    /// shifted forward by the index of the key character at the same position.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidCharacter`] if the message or key contains a
    /// character outside the alphabet, and [`CipherError::EmptyKey`] if the key is empty.
    pub fn encrypt(&self, message: &str, key: &str) -> Result<String, CipherError> {
        self.apply(message, key, Direction::Encrypt)
    }

    /// Decrypts `ciphertext` with `key`.
    ///
    /// # Errors
    ///
    /// Same as [`Cipher::encrypt`].
    pub fn decrypt(&self, ciphertext: &str, key: &str) -> Result<String, CipherError> {
        self.apply(ciphertext, key, Direction::Decrypt)
    }

    fn apply(&self, text: &str, key: &str, direction: Direction) -> Result<String, CipherError> {
        validate(self.table, text)?;
        if key.is_empty() {
            return Err(CipherError::EmptyKey);
        }
        validate(self.table, key)?;

        let length = text.chars().count();
        let extended_key = extend_key(length, key)?;
        debug!(
            "{direction:?}: {length} character(s) over alphabet '{}' (ring of {}).",
            self.table.name(),
            self.ring.len()
        );

        let modulus = self.ring.len();
        let mut output = String::with_capacity(text.len());
        for (position, (c, k)) in text.chars().zip(extended_key.chars()).enumerate() {
            if self.table.is_passthrough(c) {
                output.push(c);
                continue;
            }
            // Both lookups succeed once validation has passed.
            let (Some(&from), Some(key_index)) = (self.ring_index.get(&c), self.table.index_of(k))
            else {
                return Err(CipherError::InvalidCharacter {
                    character: c,
                    position,
                });
            };
            let shift = key_index % modulus;
            let to = match direction {
                Direction::Encrypt => (from + shift) % modulus,
                // Floor-mod: shift < modulus, so the sum stays non-negative.
                Direction::Decrypt => (from + modulus - shift) % modulus,
            };
            output.push(self.ring[to]);
        }
        Ok(output)
    }
}
