//! # Trie Construction Module
//!
//! Builds the Morse prefix tree from a code table.
//!
//! ## Components
//!
//! - **Trie**: the built tree, immutable after construction
//! - **TrieNode**: one node with a fixed two-slot child table, a terminal
//!   flag and an optional decoded character
//!
//! ## Example
//!
//! ```
//! use morse_spectacle::alphabet::{CodeEntry, Symbol};
//! use morse_spectacle::trie::Trie;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let entries = [CodeEntry::new(".", 'E'), CodeEntry::new("-", 'T')];
//! let trie = Trie::from_entries(&entries)?;
//!
//! assert_eq!(trie.node_count(), 3);
//! let e = trie.root().child(Symbol::Dot).unwrap();
//! assert_eq!(e.decoded(), Some('E'));
//! # Ok(())
//! # }
//! ```

mod builder;
mod node;

pub use builder::Trie;
pub use node::{CHAR_KEY, END_KEY, TrieNode};
