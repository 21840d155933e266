//! # Graph Derivation and Rendering Module
//!
//! Derives a directed-graph description from a built trie and renders it as
//! Graphviz DOT text.
//!
//! ## Components
//!
//! ### Graph Building
//! - **TrieGraphBuilder**: walks the trie depth-first, pre-order, assigning
//!   each node a stable `n<i>` identifier
//! - **GlyphNode** / **NodeKind**: the per-node role the styling derives
//!   from (root, dot/dash intermediate, terminal)
//!
//! ### Graph Rendering
//! - **DotRenderer**: emits the DOT document with per-role shapes and
//!   colors and a configurable layout orientation
//!
//! ## Example
//!
//! ```
//! use morse_spectacle::alphabet::CodeEntry;
//! use morse_spectacle::cli::RankDir;
//! use morse_spectacle::graph::{DotRenderer, TrieGraphBuilder};
//! use morse_spectacle::trie::Trie;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let entries = [CodeEntry::new(".", 'E'), CodeEntry::new("-", 'T')];
//! let trie = Trie::from_entries(&entries)?;
//!
//! let mut builder = TrieGraphBuilder::new();
//! builder.build_from_trie(&trie);
//!
//! let renderer = DotRenderer::new(RankDir::Tb, None);
//! let mut output = Vec::new();
//! renderer.render_dot(builder.graph(), &mut output)?;
//!
//! let dot = String::from_utf8(output)?;
//! assert!(dot.contains("digraph"));
//! assert!(dot.contains("doublecircle"));
//! # Ok(())
//! # }
//! ```

mod builder;
mod renderer;
mod types;

// Re-export main types
pub use builder::TrieGraphBuilder;
pub use renderer::DotRenderer;
pub use types::{GlyphNode, NodeKind};
