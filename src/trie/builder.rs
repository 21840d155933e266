//! Trie construction from a code table

use crate::alphabet::{self, CodeEntry};
use crate::error::MorseSpectacleError;
use crate::trie::TrieNode;

/// A prefix tree over the two-symbol Morse alphabet, built once from a code
/// table and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    /// Build a trie from an ordered list of code entries.
    ///
    /// Each entry's sequence is walked from the root, creating missing
    /// children along the way; the node reached by the last symbol is marked
    /// terminal with the entry's character. Entries sharing a prefix reuse
    /// the same nodes, so the resulting shape is independent of entry order.
    ///
    /// Fails with [`MorseSpectacleError::InvalidSequence`] if any entry has
    /// an empty sequence or a symbol other than `.`/`-`.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, MorseSpectacleError>
    where
        I: IntoIterator<Item = &'a CodeEntry>,
    {
        let mut root = TrieNode::new();

        for entry in entries {
            let symbols = alphabet::parse_sequence(entry.sequence)?;
            let mut node = &mut root;
            for symbol in symbols {
                node = node.child_or_insert(symbol);
            }
            node.mark_terminal(entry.character);
        }

        Ok(Self { root })
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Total node count, root included.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }
}
