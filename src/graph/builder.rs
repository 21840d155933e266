//! Builds the diagram graph from a trie

use petgraph::graph::{DiGraph, NodeIndex};

use crate::alphabet::Symbol;
use crate::graph::{GlyphNode, NodeKind};
use crate::trie::{Trie, TrieNode};

/// Derives a directed graph from a built trie: one [`GlyphNode`] per trie
/// node, one edge per parent-child link, weighted by the symbol that labels
/// it.
pub struct TrieGraphBuilder {
    graph: DiGraph<GlyphNode, Symbol>,
    next_index: usize,
}

impl Default for TrieGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TrieGraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            next_index: 0,
        }
    }

    /// Depth-first pre-order traversal over the trie. Every trie node is
    /// visited exactly once and assigned the next `n<i>` identifier; dot
    /// children are walked before dash children so identifiers match the
    /// visual left-to-right convention.
    pub fn build_from_trie(&mut self, trie: &Trie) {
        let root_index = self.add_node(NodeKind::Root);
        self.walk(trie.root(), root_index);
    }

    pub fn graph(&self) -> &DiGraph<GlyphNode, Symbol> {
        &self.graph
    }

    fn walk(&mut self, node: &TrieNode, parent: NodeIndex) {
        for (symbol, child) in node.children() {
            let kind = if child.is_terminal() {
                NodeKind::Terminal(child.decoded())
            } else {
                NodeKind::Intermediate(symbol)
            };
            let child_index = self.add_node(kind);
            self.graph.add_edge(parent, child_index, symbol);
            self.walk(child, child_index);
        }
    }

    fn add_node(&mut self, kind: NodeKind) -> NodeIndex {
        let id = format!("n{}", self.next_index);
        self.next_index += 1;
        self.graph.add_node(GlyphNode::new(id, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{CodeEntry, ITU_M1677};

    fn build(entries: &[CodeEntry]) -> DiGraph<GlyphNode, Symbol> {
        let trie = Trie::from_entries(entries).unwrap();
        let mut builder = TrieGraphBuilder::new();
        builder.build_from_trie(&trie);
        builder.graph().clone()
    }

    #[test]
    fn test_empty_trie_yields_single_root_node() {
        let graph = build(&[]);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph[NodeIndex::new(0)].kind(), NodeKind::Root);
    }

    #[test]
    fn test_graph_node_count_matches_trie_node_count() {
        let trie = Trie::from_entries(ITU_M1677).unwrap();
        let mut builder = TrieGraphBuilder::new();
        builder.build_from_trie(&trie);

        assert_eq!(builder.graph().node_count(), trie.node_count());
        // Every node except the root has exactly one incoming edge
        assert_eq!(builder.graph().edge_count(), trie.node_count() - 1);
    }

    #[test]
    fn test_identifiers_are_unique_and_sequential() {
        let graph = build(&[CodeEntry::new(".-", 'A'), CodeEntry::new("-", 'T')]);

        let mut ids: Vec<&str> = graph.node_weights().map(GlyphNode::id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), graph.node_count());
        assert!(graph.node_weights().any(|n| n.id() == "n0"));
    }

    #[test]
    fn test_preorder_walks_dot_branch_first() {
        // root=n0, then the dot subtree (".": n1, ".-": n2), then "-": n3
        let graph = build(&[
            CodeEntry::new(".-", 'A'),
            CodeEntry::new(".", 'E'),
            CodeEntry::new("-", 'T'),
        ]);

        assert_eq!(graph[NodeIndex::new(0)].kind(), NodeKind::Root);
        assert_eq!(graph[NodeIndex::new(1)].kind(), NodeKind::Terminal(Some('E')));
        assert_eq!(graph[NodeIndex::new(2)].kind(), NodeKind::Terminal(Some('A')));
        assert_eq!(graph[NodeIndex::new(3)].kind(), NodeKind::Terminal(Some('T')));
    }

    #[test]
    fn test_edges_carry_their_symbol() {
        let graph = build(&[CodeEntry::new(".-", 'A')]);

        let symbols: Vec<Symbol> = graph.edge_weights().copied().collect();
        assert_eq!(symbols, vec![Symbol::Dot, Symbol::Dash]);
    }

    #[test]
    fn test_intermediate_kind_records_arrival_symbol() {
        // "-." passes through a non-terminal dash child
        let graph = build(&[CodeEntry::new("-.", 'N')]);

        assert_eq!(
            graph[NodeIndex::new(1)].kind(),
            NodeKind::Intermediate(Symbol::Dash)
        );
        assert_eq!(graph[NodeIndex::new(2)].kind(), NodeKind::Terminal(Some('N')));
    }
}
