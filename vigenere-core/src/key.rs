// File:    key.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: Extends a key over a message and generates random keys from an alphabet.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::alphabet::AlphabetTable;
use crate::error::CipherError;
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Repeats `key` until it is exactly `message_length` characters long.
///
/// The key is used as many whole times as fit, followed by the prefix needed
/// to reach the length. The key's characters are not checked against any
/// alphabet.
///
/// # Errors
///
/// Returns [`CipherError::EmptyKey`] if `key` is empty.
pub fn extend_key(message_length: usize, key: &str) -> Result<String, CipherError> {
    if key.is_empty() {
        return Err(CipherError::EmptyKey);
    }
    trace!(
        "Extending a {}-character key to {message_length} characters.",
        key.chars().count()
    );
    Ok(key.chars().cycle().take(message_length).collect())
}

/// Draws a random key of `length` symbols from the shiftable part of `table`.
///
/// Pass-through characters are never drawn, since they would leave the
/// message character unchanged.
///
/// # Errors
///
/// Returns [`CipherError::EmptyKey`] if `length` is zero and
/// [`CipherError::NoShiftableSymbols`] if every symbol is pass-through.
pub fn generate_key_with<R: Rng + ?Sized>(
    rng: &mut R,
    table: &AlphabetTable,
    length: usize,
) -> Result<String, CipherError> {
    if length == 0 {
        return Err(CipherError::EmptyKey);
    }
    let candidates: Vec<char> = table
        .symbols()
        .iter()
        .copied()
        .filter(|&c| !table.is_passthrough(c))
        .collect();
    if candidates.is_empty() {
        return Err(CipherError::NoShiftableSymbols);
    }
    Ok((0..length)
        .map(|_| candidates[rng.random_range(0..candidates.len())])
        .collect())
}

/// Draws a random key of `length` symbols using a generator seeded by the operating system.
///
/// # Errors
///
/// Returns [`CipherError::Entropy`] if the operating system random source fails,
/// and the errors of [`generate_key_with`] otherwise.
pub fn generate_key(table: &AlphabetTable, length: usize) -> Result<String, CipherError> {
    let mut rng =
        StdRng::try_from_os_rng().map_err(|e| CipherError::Entropy(e.to_string()))?;
    let key = generate_key_with(&mut rng, table, length)?;
    debug!("Generated a {length}-character key from alphabet '{}'.", table.name());
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::DuplicatePolicy;

    #[test]
    fn test_extend_key_repeats_and_truncates() {
        assert_eq!(extend_key(7, "ab").unwrap(), "abababa");
        assert_eq!(extend_key(5, "xyz").unwrap(), "xyzxy");
    }

    #[test]
    fn test_extend_key_shorter_than_key() {
        assert_eq!(extend_key(2, "secret").unwrap(), "se");
        assert_eq!(extend_key(0, "secret").unwrap(), "");
    }

    #[test]
    fn test_extend_key_counts_characters() {
        assert_eq!(extend_key(5, "的😀").unwrap(), "的😀的😀的");
    }

    #[test]
    fn test_extend_key_rejects_empty_key() {
        assert_eq!(extend_key(3, ""), Err(CipherError::EmptyKey));
        assert_eq!(extend_key(0, ""), Err(CipherError::EmptyKey));
    }

    #[test]
    fn test_generated_key_skips_passthrough() {
        let table = AlphabetTable::from_blocks("t", ["ab \n"], DuplicatePolicy::KeepFirst, " \n");
        let mut rng = StdRng::seed_from_u64(7);
        let key = generate_key_with(&mut rng, &table, 64).unwrap();
        assert_eq!(key.chars().count(), 64);
        assert!(key.chars().all(|c| c == 'a' || c == 'b'));
    }

    #[test]
    fn test_generate_key_without_shiftable_symbols() {
        let table = AlphabetTable::from_blocks("t", [" "], DuplicatePolicy::KeepFirst, " ");
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            generate_key_with(&mut rng, &table, 4),
            Err(CipherError::NoShiftableSymbols)
        );
    }

    #[test]
    fn test_generate_key_from_os() {
        let key = generate_key(AlphabetTable::standard(), 16).unwrap();
        assert_eq!(key.chars().count(), 16);
        assert!(key.chars().all(|c| AlphabetTable::standard().contains(c)));
    }
}
