//! Export run orchestration
//!
//! Runs the full pass: build the trie, write the JSON data file, write the
//! DOT description, then hand the DOT file to the external Graphviz
//! renderer once per requested image format. Each stage failure is wrapped
//! with a message naming the stage.

use std::fs::{self, File};
use std::io::{BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::alphabet::ITU_M1677;
use crate::config::ExportOptions;
use crate::constants;
use crate::export::{GraphvizRenderer, write_json};
use crate::graph::{DotRenderer, TrieGraphBuilder};
use crate::trie::Trie;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

pub struct ExportExecutor;

impl CommandExecutor for ExportExecutor {
    type Config = ExportOptions;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Building Morse trie from {} code entries...",
            style("•").cyan(),
            ITU_M1677.len()
        );

        let trie = Trie::from_entries(ITU_M1677).wrap_err("Failed to build Morse trie")?;

        fs::create_dir_all(&config.output_dir)
            .into_diagnostic()
            .wrap_err_with(|| {
                format!(
                    "Failed to create output directory '{}'",
                    config.output_dir.display()
                )
            })?;

        let stem = config.output_dir.join(&config.basename);

        // Data export
        let json_path = stem.with_extension("json");
        write_json(&trie, &json_path)
            .wrap_err_with(|| format!("Failed to write '{}'", json_path.display()))?;
        eprintln!(
            "{} Data written to {}",
            style("✓").green(),
            style(json_path.display()).bold()
        );

        // Graph description
        let mut graph_builder = TrieGraphBuilder::new();
        graph_builder.build_from_trie(&trie);

        let renderer = DotRenderer::new(
            config.rankdir,
            Some(constants::render::GRAPH_CAPTION.to_string()),
        );
        let dot_path = stem.with_extension(constants::output::DOT_EXTENSION);
        let mut dot_writer = BufWriter::new(
            File::create(&dot_path)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to create '{}'", dot_path.display()))?,
        );
        renderer
            .render_dot(graph_builder.graph(), &mut dot_writer)
            .wrap_err("Failed to render DOT graph")?;
        dot_writer
            .flush()
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to write '{}'", dot_path.display()))?;
        eprintln!(
            "{} Graph description written to {}",
            style("✓").green(),
            style(dot_path.display()).bold()
        );

        if config.skip_render {
            eprintln!("{} Skipping external renderer", style("ℹ").blue());
            return Ok(());
        }

        // External rendering
        let graphviz = GraphvizRenderer::new(config.dot_program.clone());
        for format in &config.image_formats {
            let image_path = stem.with_extension(format.extension());
            graphviz
                .render(&dot_path, *format, &image_path)
                .wrap_err_with(|| {
                    format!(
                        "Rendering failed after data export; '{}' and '{}' were written",
                        json_path.display(),
                        dot_path.display()
                    )
                })?;
            eprintln!(
                "{} Rendered {}",
                style("✓").green(),
                style(image_path.display()).bold()
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{ImageFormat, RankDir};

    fn options(dir: &std::path::Path, skip_render: bool) -> ExportOptions {
        ExportOptions {
            basename: "morse".to_string(),
            output_dir: dir.to_path_buf(),
            rankdir: RankDir::Tb,
            image_formats: vec![ImageFormat::Png],
            dot_program: "definitely-not-a-real-layout-engine".to_string(),
            skip_render,
        }
    }

    #[test]
    fn test_execute_skip_render_writes_json_and_dot() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir = dir.path().join("nested").join("out");

        ExportExecutor::execute(options(&output_dir, true)).unwrap();

        assert!(output_dir.join("morse.json").exists());
        assert!(output_dir.join("morse.gv").exists());
        assert!(!output_dir.join("morse.png").exists());
    }

    #[test]
    fn test_execute_surfaces_renderer_failure_after_data_export() {
        let dir = tempfile::tempdir().unwrap();

        let result = ExportExecutor::execute(options(dir.path(), false));

        assert!(result.is_err());
        // The data files were still written before the collaborator failed
        assert!(dir.path().join("morse.json").exists());
        assert!(dir.path().join("morse.gv").exists());
    }
}
