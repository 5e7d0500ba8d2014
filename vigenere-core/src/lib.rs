// File:    lib.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: The main library crate for vigenere-core, exposing the alphabet registry and the cipher.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Vigenère Core Library
//!
//! A polyalphabetic substitution cipher over a fixed alphabet that mixes CJK,
//! kana, Hangul jamo, Cyrillic, emoji, Latin letters, digits and punctuation.
//! Spaces and newlines pass through unchanged.
//!
//! This is a classical cipher. It offers no confidentiality against frequency
//! or key-length analysis.
//!
//! ```
//! let ciphertext = vigenere_core::encrypt("HELLO WORLD", "KEY").unwrap();
//! assert_eq!(ciphertext.chars().count(), 11);
//! assert_eq!(vigenere_core::decrypt(&ciphertext, "KEY").unwrap(), "HELLO WORLD");
//! ```

/// Username checks and the parameterized user lookup.
#[cfg(feature = "accounts")]
pub mod accounts;
/// The ordered symbol set and its index mapping.
pub mod alphabet;
/// The cipher engine.
pub mod cipher;
/// Alphabet configuration files.
pub mod config;
/// Error types.
pub mod error;
/// Key extension and key generation.
pub mod key;
/// Alphabet membership checks.
pub mod validate;

pub use alphabet::{AlphabetTable, DuplicatePolicy};
pub use cipher::Cipher;
pub use config::{AlphabetBlock, AlphabetConfig};
pub use error::{CipherError, ConfigError};
#[cfg(feature = "accounts")]
pub use error::AccountError;
pub use key::{extend_key, generate_key, generate_key_with};

/// Encrypts `message` with `key` over the standard alphabet.
///
/// # Errors
///
/// See [`Cipher::encrypt`].
pub fn encrypt(message: &str, key: &str) -> Result<String, CipherError> {
    Cipher::standard().encrypt(message, key)
}

/// Decrypts `ciphertext` with `key` over the standard alphabet.
///
/// # Errors
///
/// See [`Cipher::decrypt`].
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String, CipherError> {
    Cipher::standard().decrypt(ciphertext, key)
}

/// Checks that every character of `text` is in the standard alphabet.
///
/// # Errors
///
/// Returns [`CipherError::InvalidCharacter`] for the first character outside the alphabet.
pub fn validate(text: &str) -> Result<(), CipherError> {
    validate::validate(AlphabetTable::standard(), text)
}
