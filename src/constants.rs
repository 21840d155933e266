//! Configuration constants for morse-spectacle
//!
//! Defaults used by the CLI when flags are omitted.

/// Output defaults
pub mod output {
    /// Default stem for generated files
    pub const DEFAULT_BASENAME: &str = "morse";

    /// Default directory for generated files
    pub const DEFAULT_DIRECTORY: &str = "output";

    /// Extension of the DOT description file
    pub const DOT_EXTENSION: &str = "gv";
}

/// External renderer defaults
pub mod render {
    /// Graphviz layout program invoked for image output
    pub const DOT_PROGRAM: &str = "dot";

    /// Caption placed under the rendered diagram
    pub const GRAPH_CAPTION: &str = "INTERNATIONAL MORSE CODE TRIE";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_BASENAME, "morse");
        assert_eq!(output::DOT_EXTENSION, "gv");
    }

    #[test]
    fn test_render_constants() {
        assert_eq!(render::DOT_PROGRAM, "dot");
    }
}
