// File:    config.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: Loads and saves alphabet configurations and turns them into alphabet tables.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::alphabet::{
    AlphabetTable, DEFAULT_PASSTHROUGH, DuplicatePolicy, STANDARD_BLOCKS, STANDARD_NAME,
};
use crate::error::ConfigError;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A named run of symbols inside an alphabet configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AlphabetBlock {
    /// A label for the block, used only for display.
    pub name: String,
    /// The characters of the block, in order.
    pub symbols: String,
}

/// The serialized description of an alphabet table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AlphabetConfig {
    /// The name of the alphabet.
    pub name: String,
    /// The blocks, concatenated in order.
    pub blocks: Vec<AlphabetBlock>,
    /// How characters repeated across blocks are placed.
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
    /// Characters the cipher copies unchanged.
    #[serde(default = "default_passthrough")]
    pub passthrough: String,
}

fn default_passthrough() -> String {
    DEFAULT_PASSTHROUGH.to_string()
}

impl Default for AlphabetConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl AlphabetConfig {
    /// The configuration of the built-in alphabet.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            name: STANDARD_NAME.to_string(),
            blocks: STANDARD_BLOCKS
                .iter()
                .map(|(name, symbols)| AlphabetBlock {
                    name: (*name).to_string(),
                    symbols: (*symbols).to_string(),
                })
                .collect(),
            duplicates: DuplicatePolicy::default(),
            passthrough: default_passthrough(),
        }
    }

    /// Reads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid configuration.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config_str = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&config_str)?;
        info!(
            "Loaded alphabet '{}' with {} block(s) from '{}'.",
            config.name,
            config.blocks.len(),
            path.display()
        );
        Ok(config)
    }

    /// Writes the configuration to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized or written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let config_str = serde_json::to_string_pretty(self)?;
        fs::write(path, config_str)?;
        Ok(())
    }

    /// Builds the alphabet table this configuration describes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAlphabet`] if the blocks contain no characters.
    pub fn build(&self) -> Result<AlphabetTable, ConfigError> {
        let table = AlphabetTable::from_blocks(
            &self.name,
            self.blocks.iter().map(|b| b.symbols.as_str()),
            self.duplicates,
            &self.passthrough,
        );
        if table.is_empty() {
            return Err(ConfigError::EmptyAlphabet);
        }
        Ok(table)
    }
}
