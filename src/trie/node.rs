//! Trie node type
//!
//! Each node owns at most one child per symbol, held in a fixed two-slot
//! table indexed by [`Symbol::index`]. Terminal nodes carry the character
//! their root-to-node symbol path decodes to.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::alphabet::Symbol;

/// Reserved JSON key marking a node's terminal flag.
pub const END_KEY: &str = "_end";

/// JSON key carrying the decoded character on terminal nodes.
pub const CHAR_KEY: &str = "char";

#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    children: [Option<Box<TrieNode>>; Symbol::COUNT],
    is_terminal: bool,
    decoded: Option<char>,
}

impl TrieNode {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// The decoded character; `Some` iff this node is terminal.
    pub fn decoded(&self) -> Option<char> {
        self.decoded
    }

    pub fn child(&self, symbol: Symbol) -> Option<&TrieNode> {
        self.children[symbol.index()].as_deref()
    }

    /// Present children in display order, dot before dash.
    pub fn children(&self) -> impl Iterator<Item = (Symbol, &TrieNode)> {
        Symbol::ALL
            .into_iter()
            .filter_map(|symbol| self.child(symbol).map(|child| (symbol, child)))
    }

    pub fn has_children(&self) -> bool {
        self.children.iter().any(Option::is_some)
    }

    /// Nodes in the subtree rooted here, this node included.
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .map(|(_, child)| child.node_count())
            .sum::<usize>()
    }

    pub(crate) fn child_or_insert(&mut self, symbol: Symbol) -> &mut TrieNode {
        self.children[symbol.index()].get_or_insert_default()
    }

    /// Marks this node as the end of a sequence. Last write wins when the
    /// input table maps two identical sequences to different characters.
    pub(crate) fn mark_terminal(&mut self, character: char) {
        self.is_terminal = true;
        self.decoded = Some(character);
    }
}

impl Serialize for TrieNode {
    /// Nested-object form: the `_end` flag first, the decoded character on
    /// terminal nodes, then child subtrees under their symbol keys with dot
    /// before dash. Emission order is fixed, so re-serializing an unchanged
    /// trie is byte-identical.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(END_KEY, &self.is_terminal)?;
        if let Some(character) = self.decoded {
            map.serialize_entry(CHAR_KEY, &character)?;
        }
        for (symbol, child) in self.children() {
            map.serialize_entry(&symbol.glyph().to_string(), child)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_empty() {
        let node = TrieNode::new();
        assert!(!node.is_terminal());
        assert!(node.decoded().is_none());
        assert!(!node.has_children());
        assert_eq!(node.node_count(), 1);
    }

    #[test]
    fn test_mark_terminal_sets_both_fields() {
        let mut node = TrieNode::new();
        node.mark_terminal('E');
        assert!(node.is_terminal());
        assert_eq!(node.decoded(), Some('E'));
    }

    #[test]
    fn test_mark_terminal_last_write_wins() {
        let mut node = TrieNode::new();
        node.mark_terminal('E');
        node.mark_terminal('X');
        assert_eq!(node.decoded(), Some('X'));
    }

    #[test]
    fn test_children_iterate_dot_before_dash() {
        let mut node = TrieNode::new();
        node.child_or_insert(Symbol::Dash);
        node.child_or_insert(Symbol::Dot);

        let order: Vec<Symbol> = node.children().map(|(symbol, _)| symbol).collect();
        assert_eq!(order, vec![Symbol::Dot, Symbol::Dash]);
    }

    #[test]
    fn test_child_or_insert_reuses_existing_child() {
        let mut node = TrieNode::new();
        node.child_or_insert(Symbol::Dot).mark_terminal('E');
        node.child_or_insert(Symbol::Dot);

        assert_eq!(node.node_count(), 2);
        assert_eq!(node.child(Symbol::Dot).unwrap().decoded(), Some('E'));
    }

    #[test]
    fn test_serialize_leaf() {
        let mut node = TrieNode::new();
        node.mark_terminal('E');

        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, r#"{"_end":true,"char":"E"}"#);
    }

    #[test]
    fn test_serialize_omits_char_on_non_terminal() {
        let node = TrieNode::new();
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(json, r#"{"_end":false}"#);
    }
}
