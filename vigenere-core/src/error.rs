// File:    error.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: Error types returned by the cipher, the alphabet configuration and the accounts helpers.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Error types for the Vigenère core library.

use thiserror::Error;

/// Errors produced while validating input or running the cipher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// A character of the message or key is not part of the alphabet.
    #[error(
        "invalid character '{}' at position {position}: only characters in the defined alphabet are allowed",
        .character.escape_debug()
    )]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Position of the character, counted in characters rather than bytes.
        position: usize,
    },
    /// The key has zero length and cannot be extended over the message.
    #[error("key must be at least 1 character long")]
    EmptyKey,
    /// Every symbol of the alphabet passes through unchanged, so no key can be drawn.
    #[error("alphabet has no shiftable symbols")]
    NoShiftableSymbols,
    /// The operating system random source could not be used.
    #[error("failed to seed random generator: {0}")]
    Entropy(String),
}

/// Errors produced while loading or saving an alphabet configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Reading or writing the configuration file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The configuration file is not valid JSON for an alphabet.
    #[error("failed to parse alphabet configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// The configured blocks contain no characters at all.
    #[error("alphabet configuration defines no symbols")]
    EmptyAlphabet,
}

/// Errors produced by the account helpers.
#[cfg(feature = "accounts")]
#[derive(Error, Debug)]
pub enum AccountError {
    /// The username does not match `^[A-Za-z0-9_]+$`.
    #[error("invalid username format: '{0}'")]
    InvalidUsername(String),
    /// The database rejected the lookup.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}
