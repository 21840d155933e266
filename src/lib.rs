//! # Morse Spectacle - Visualize the Morse Code Trie
//!
//! Morse Spectacle builds a prefix tree (trie) from the fixed ITU M.1677
//! Morse code table and exports it two ways: as a nested JSON structure and
//! as a Graphviz diagram rendered by the external `dot` program.
//!
//! ## Main Components
//!
//! - **Alphabet**: the two-symbol Morse alphabet and the compiled-in code
//!   table
//! - **Trie**: builds the prefix tree, one shared node per shared prefix
//! - **Graph**: derives a styled directed-graph description from the trie
//! - **Export**: writes the JSON data file and drives the external Graphviz
//!   renderer
//!
//! ## Usage
//!
//! ### Example: Building and Serializing the Trie
//!
//! ```
//! use morse_spectacle::alphabet::ITU_M1677;
//! use morse_spectacle::export::to_json_string;
//! use morse_spectacle::trie::Trie;
//!
//! # fn main() -> miette::Result<()> {
//! let trie = Trie::from_entries(ITU_M1677)?;
//!
//! // 49 sequences collapse into a much smaller shared-prefix tree
//! assert!(trie.node_count() < 100);
//!
//! let json = to_json_string(&trie)?;
//! assert!(json.starts_with('{'));
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Emitting a DOT Diagram
//!
//! ```
//! use morse_spectacle::alphabet::ITU_M1677;
//! use morse_spectacle::cli::RankDir;
//! use morse_spectacle::graph::{DotRenderer, TrieGraphBuilder};
//! use morse_spectacle::trie::Trie;
//!
//! # fn main() -> miette::Result<()> {
//! let trie = Trie::from_entries(ITU_M1677)?;
//!
//! let mut builder = TrieGraphBuilder::new();
//! builder.build_from_trie(&trie);
//!
//! let renderer = DotRenderer::new(RankDir::Lr, None);
//! let mut output = Vec::new();
//! renderer.render_dot(builder.graph(), &mut output)?;
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;

// Public modules
pub mod alphabet;
pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod export;
pub mod graph;
pub mod trie;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::config::ExportOptions;
    use crate::executor::{CommandExecutor, ExportExecutor};

    let cli = cli::Cli::parse();
    let config = ExportOptions::from_cli(cli)?;

    ExportExecutor::execute(config)
}
