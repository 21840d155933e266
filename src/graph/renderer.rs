use std::io::Write;

use miette::Result;
use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;

use crate::alphabet::Symbol;
use crate::cli::RankDir;
use crate::error::MorseSpectacleError;
use crate::graph::{GlyphNode, NodeKind};

// Palette inherited from the reference diagrams: grays for the two symbol
// branches, green for completed characters
mod colors {
    pub const DOT_NODE_FILL: &str = "#808080"; // Light gray
    pub const DASH_NODE_FILL: &str = "#3b3b3b"; // Dark gray
    pub const TERMINAL_NODE_FILL: &str = "#007F01"; // Green
    pub const NODE_TEXT: &str = "white";
}

const SYMBOL_FONT: &str = "Courier-Bold";
const SYMBOL_FONT_SIZE: u32 = 18;
const CAPTION_FONT_SIZE: u32 = 24;

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(MorseSpectacleError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(MorseSpectacleError::from)
    };
}

/// Renders the derived trie graph as Graphviz DOT text.
pub struct DotRenderer {
    rankdir: RankDir,
    caption: Option<String>,
}

impl DotRenderer {
    pub fn new(rankdir: RankDir, caption: Option<String>) -> Self {
        Self { rankdir, caption }
    }

    /// Write the full DOT document: graph attributes, one declaration per
    /// node in identifier order, then one labeled edge per parent-child
    /// link. Output is deterministic for a given graph.
    pub fn render_dot(
        &self,
        graph: &DiGraph<GlyphNode, Symbol>,
        output: &mut dyn Write,
    ) -> Result<()> {
        writeln_out!(output, "digraph morse_trie {{")?;
        writeln_out!(output, "    rankdir={};", self.rankdir.as_str())?;
        if let Some(caption) = &self.caption {
            writeln_out!(output, "    label=\"{}\";", escape(caption))?;
            writeln_out!(output, "    labelloc=\"b\";")?;
            writeln_out!(output, "    labeljust=\"r\";")?;
            writeln_out!(output, "    fontsize={CAPTION_FONT_SIZE};")?;
        }
        writeln_out!(output)?;

        for node in graph.node_weights() {
            self.render_node(node, output)?;
        }

        writeln_out!(output)?;

        for edge in graph.edge_references() {
            let source = &graph[edge.source()];
            let target = &graph[edge.target()];
            writeln_out!(
                output,
                r#"    {} -> {} [label="{}"];"#,
                source.id(),
                target.id(),
                edge.weight().glyph()
            )?;
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    fn render_node(&self, node: &GlyphNode, output: &mut dyn Write) -> Result<()> {
        let label = escape(&node.label());
        match node.kind() {
            NodeKind::Root => {
                writeln_out!(output, r#"    {} [label="{}", shape=box];"#, node.id(), label)?;
            }
            NodeKind::Intermediate(symbol) => {
                let fill = match symbol {
                    Symbol::Dot => colors::DOT_NODE_FILL,
                    Symbol::Dash => colors::DASH_NODE_FILL,
                };
                writeln_out!(
                    output,
                    r#"    {} [label="{}", shape=circle, style=filled, fillcolor="{}", fontcolor="{}", fontname="{}", fontsize={}];"#,
                    node.id(),
                    label,
                    fill,
                    colors::NODE_TEXT,
                    SYMBOL_FONT,
                    SYMBOL_FONT_SIZE
                )?;
            }
            NodeKind::Terminal(_) => {
                writeln_out!(
                    output,
                    r#"    {} [label="{}", shape=doublecircle, style=filled, fillcolor="{}", fontcolor="{}"];"#,
                    node.id(),
                    label,
                    colors::TERMINAL_NODE_FILL,
                    colors::NODE_TEXT
                )?;
            }
        }
        Ok(())
    }
}

// DOT double-quoted strings need embedded quotes and backslashes escaped
fn escape(text: &str) -> String {
    text.chars()
        .flat_map(|c| match c {
            '"' => vec!['\\', '"'],
            '\\' => vec!['\\', '\\'],
            other => vec![other],
        })
        .collect()
}
