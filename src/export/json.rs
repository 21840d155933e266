//! JSON serialization of the trie
//!
//! The trie serializes to a nested object: per node a reserved `_end` key
//! with the terminal flag, a `char` key with the decoded character on
//! terminal nodes, then the `.` and `-` child subtrees. Key emission order
//! is fixed, so output for an unchanged trie is byte-identical across runs.

use std::fs;
use std::path::Path;

use crate::error::MorseSpectacleError;
use crate::trie::Trie;

/// Pretty-printed JSON text for the whole trie.
pub fn to_json_string(trie: &Trie) -> Result<String, MorseSpectacleError> {
    serde_json::to_string_pretty(trie.root()).map_err(MorseSpectacleError::Json)
}

/// Write the trie as JSON to `path`, with a trailing newline.
pub fn write_json(trie: &Trie, path: &Path) -> Result<(), MorseSpectacleError> {
    let mut text = to_json_string(trie)?;
    text.push('\n');
    fs::write(path, text).map_err(MorseSpectacleError::Io)
}
