//! Core graph types
//!
//! Export-only view of the trie: one [`GlyphNode`] per trie node, carrying
//! the stable identifier and role the renderer styles from.

use crate::alphabet::Symbol;

/// Role of a node in the diagram; all style attributes derive from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The trie root, drawn as an unfilled box.
    Root,
    /// A non-terminal node, shaded by the symbol edge it was reached
    /// through.
    Intermediate(Symbol),
    /// The end of a complete sequence, labeled with its decoded character.
    /// `None` means the builder failed to set one; the renderer falls back
    /// to a placeholder label.
    Terminal(Option<char>),
}

/// One diagram node derived from a trie node.
#[derive(Debug, Clone)]
pub struct GlyphNode {
    id: String,
    kind: NodeKind,
}

impl GlyphNode {
    pub fn new(id: String, kind: NodeKind) -> Self {
        Self { id, kind }
    }

    /// Identifier used for node declarations and edge endpoints; unique and
    /// stable within one traversal.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Display label: `root` for the root, the symbol glyph for
    /// intermediates, the decoded character (or `?`) for terminals.
    pub fn label(&self) -> String {
        match self.kind {
            NodeKind::Root => "root".to_string(),
            NodeKind::Intermediate(symbol) => symbol.glyph().to_string(),
            NodeKind::Terminal(Some(character)) => character.to_string(),
            NodeKind::Terminal(None) => "?".to_string(),
        }
    }
}
