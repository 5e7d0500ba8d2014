use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use vigenere_core::AlphabetTable;

/// Metadata stored alongside the ciphertext to check it before decryption.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct CiphertextMetadata {
    pub(crate) alphabet: String,
    pub(crate) alphabet_fingerprint: String,
    pub(crate) alphabet_length: usize,
    pub(crate) length: usize,
    pub(crate) ciphertext_hash: String,
}

impl CiphertextMetadata {
    /// Describes `ciphertext` as produced over `table`.
    pub(crate) fn describe(table: &AlphabetTable, ciphertext: &str) -> Self {
        Self {
            alphabet: table.name().to_string(),
            alphabet_fingerprint: table.fingerprint(),
            alphabet_length: table.len(),
            length: ciphertext.chars().count(),
            ciphertext_hash: hash_text(ciphertext),
        }
    }

    /// The sidecar path used for an output file.
    pub(crate) fn path_for(output: &Path) -> PathBuf {
        PathBuf::from(format!("{}.metadata.json", output.display()))
    }

    pub(crate) fn read(path: &Path) -> io::Result<Self> {
        let metadata_str = fs::read_to_string(path)?;
        serde_json::from_str(&metadata_str).map_err(io::Error::other)
    }

    pub(crate) fn write(&self, path: &Path) -> io::Result<()> {
        let metadata_str = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, metadata_str)
    }

    /// Checks that `ciphertext` and `table` match what was recorded at encryption time.
    pub(crate) fn verify(&self, table: &AlphabetTable, ciphertext: &str) -> Result<(), String> {
        if self.alphabet_fingerprint != table.fingerprint() {
            return Err(format!(
                "Ciphertext was produced with alphabet '{}' ({} symbols), which differs from the active alphabet '{}'.",
                self.alphabet,
                self.alphabet_length,
                table.name()
            ));
        }
        let length = ciphertext.chars().count();
        if length != self.length {
            return Err(format!(
                "Ciphertext has {length} characters but the metadata records {}.",
                self.length
            ));
        }
        if hash_text(ciphertext) != self.ciphertext_hash {
            return Err(
                "Ciphertext hash does not match metadata hash. The file may be corrupt or tampered with."
                    .to_string(),
            );
        }
        Ok(())
    }
}

fn hash_text(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}
