//! # Export Module
//!
//! Flat-file outputs for a built trie: the JSON data file and the rendered
//! image artifacts produced by the external Graphviz collaborator.

mod graphviz;
mod json;

pub use graphviz::GraphvizRenderer;
pub use json::{to_json_string, write_json};
