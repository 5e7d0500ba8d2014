// File:    alphabet.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: The alphabet registry: the ordered symbol set and its two-way index mapping.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The alphabet registry.
//!
//! An [`AlphabetTable`] is built once from a list of symbol blocks and is
//! read-only afterwards. Characters that appear in more than one block are
//! collapsed according to a [`DuplicatePolicy`], so `index_of` and `char_at`
//! are always exact inverses over `0..len()`.

use log::debug;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::{HashMap, HashSet};

/// Common Chinese characters.
pub const CHINESE: &str = "的一是了我不人在他有这个上们来到时大地为子中你说生国年就那和要她出也得里后自以会家可下而过天去能对小多然于心学之都好看起发工还";
/// Japanese hiragana.
pub const JAPANESE: &str = "あいうえおかきくけこさしすせそたちつてとなにぬねのはひふへほまみむめもやゆよらりるれろわをん";
/// Korean jamo. The block repeats the same ten jamo four times; only ten survive deduplication.
pub const KOREAN: &str = "ㅂㅈㄷㄱㅅㅛㅕㅑㅐㅔㅂㅈㄷㄱㅅㅛㅕㅑㅐㅔㅂㅈㄷㄱㅅㅛㅕㅑㅐㅔㅂㅈㄷㄱㅅㅛㅕㅑㅐㅔ";
/// Russian Cyrillic, lowercase.
pub const RUSSIAN: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";
/// Ukrainian Cyrillic, lowercase. Shares most letters with [`RUSSIAN`].
pub const UKRAINIAN: &str = "абвгґдежзийклмнопрстуфхцчшщьюя";
/// Face emoji, one scalar value each.
pub const EMOJI: &str = "😀😁😂🤣😃😄😅😆😉😊😋😎😍😘😗😙😚😜😝😛";
/// Latin letters, lowercase then uppercase.
pub const ENGLISH: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Digits, punctuation, currency signs and the space character.
pub const NUMBERS_AND_SYMBOLS: &str = "0123456789?&@“$();:/-‘.,-/[]{}#%^*+=•¥£€><~|\\_ ";
/// The line break, registered after the space so both whitespace symbols sit at the end.
pub const LINE_BREAK: &str = "\n";

/// The named blocks that make up the standard alphabet, in order.
pub const STANDARD_BLOCKS: &[(&str, &str)] = &[
    ("chinese", CHINESE),
    ("japanese", JAPANESE),
    ("korean", KOREAN),
    ("russian", RUSSIAN),
    ("ukrainian", UKRAINIAN),
    ("emoji", EMOJI),
    ("english", ENGLISH),
    ("numbers_and_symbols", NUMBERS_AND_SYMBOLS),
    ("line_break", LINE_BREAK),
];

/// Characters copied to the output unchanged by the cipher.
pub const DEFAULT_PASSTHROUGH: &str = " \n";

/// Name of the built-in alphabet.
pub const STANDARD_NAME: &str = "standard";

static STANDARD: Lazy<AlphabetTable> = Lazy::new(|| {
    AlphabetTable::from_blocks(
        STANDARD_NAME,
        STANDARD_BLOCKS.iter().map(|(_, symbols)| *symbols),
        DuplicatePolicy::KeepFirst,
        DEFAULT_PASSTHROUGH,
    )
});

/// How a character that appears more than once across the blocks is placed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// The character keeps the position of its first occurrence.
    #[default]
    KeepFirst,
    /// The character keeps the position of its last occurrence.
    ///
    /// This keeps the relative ordering an overwrite-last-wins assignment
    /// would produce, compacted so that no index is left unassigned.
    KeepLast,
}

/// The fixed, ordered symbol set and its bijective index mapping.
#[derive(Debug, Clone)]
pub struct AlphabetTable {
    name: String,
    symbols: Vec<char>,
    index: HashMap<char, usize>,
    passthrough: Vec<char>,
}

impl AlphabetTable {
    /// Returns the shared built-in table.
    ///
    /// It is built on first use and lives for the rest of the process.
    #[must_use]
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Builds a table by concatenating `blocks` and collapsing duplicates.
    ///
    /// Characters of `passthrough` are registered like any other symbol when
    /// they occur in the blocks, but the cipher copies them unchanged.
    #[must_use]
    pub fn from_blocks<'b, I>(name: &str, blocks: I, policy: DuplicatePolicy, passthrough: &str) -> Self
    where
        I: IntoIterator<Item = &'b str>,
    {
        let raw: Vec<char> = blocks.into_iter().flat_map(str::chars).collect();
        let symbols = dedup(&raw, policy);
        let index: HashMap<char, usize> = symbols
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, i))
            .collect();

        let mut passthrough_chars: Vec<char> = Vec::new();
        for c in passthrough.chars() {
            if !passthrough_chars.contains(&c) {
                passthrough_chars.push(c);
            }
        }

        debug!(
            "Built alphabet '{name}': {} raw characters, {} distinct symbols ({policy:?}).",
            raw.len(),
            symbols.len()
        );

        Self {
            name: name.to_string(),
            symbols,
            index,
            passthrough: passthrough_chars,
        }
    }

    /// The name this table was built under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of distinct symbols.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the table has no symbols at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Whether `c` is part of the alphabet.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.index.contains_key(&c)
    }

    /// Position of `c` in the alphabet, if it is registered.
    #[must_use]
    pub fn index_of(&self, c: char) -> Option<usize> {
        self.index.get(&c).copied()
    }

    /// Symbol at `index`, if `index < len()`.
    #[must_use]
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// The ordered symbols.
    #[must_use]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Whether the cipher copies `c` to its output unchanged.
    #[must_use]
    pub fn is_passthrough(&self, c: char) -> bool {
        self.passthrough.contains(&c)
    }

    /// The pass-through characters, in the order they were configured.
    #[must_use]
    pub fn passthrough(&self) -> &[char] {
        &self.passthrough
    }

    /// The ordered symbols joined into one string.
    #[must_use]
    pub fn as_string(&self) -> String {
        self.symbols.iter().collect()
    }

    /// Hex SHA-256 over the ordered symbols and the pass-through set.
    ///
    /// Two tables with the same fingerprint encrypt every message identically.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.as_string().as_bytes());
        hasher.update([0u8]);
        hasher.update(self.passthrough.iter().collect::<String>().as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

fn dedup(raw: &[char], policy: DuplicatePolicy) -> Vec<char> {
    let mut seen = HashSet::with_capacity(raw.len());
    match policy {
        DuplicatePolicy::KeepFirst => raw
            .iter()
            .copied()
            .filter(|&c| seen.insert(c))
            .collect(),
        DuplicatePolicy::KeepLast => {
            let mut kept: Vec<char> = raw
                .iter()
                .rev()
                .copied()
                .filter(|&c| seen.insert(c))
                .collect();
            kept.reverse();
            kept
        }
    }
}
