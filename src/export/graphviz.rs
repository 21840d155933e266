//! External Graphviz collaborator
//!
//! Layout and rasterization are not done in-process: the finished DOT file
//! is handed to the Graphviz layout binary, once per requested image
//! format. A missing or failing binary is a fatal, unretried error.

use std::path::Path;
use std::process::Command;

use crate::cli::ImageFormat;
use crate::error::MorseSpectacleError;

/// Invokes the Graphviz layout program on a DOT file.
pub struct GraphvizRenderer {
    program: String,
}

impl GraphvizRenderer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run `<program> -T<format> -o <output_path> <dot_path>`.
    ///
    /// Fails with [`MorseSpectacleError::Render`] if the program cannot be
    /// spawned or exits non-zero; Graphviz's stderr is carried in the error.
    pub fn render(
        &self,
        dot_path: &Path,
        format: ImageFormat,
        output_path: &Path,
    ) -> Result<(), MorseSpectacleError> {
        let output = Command::new(&self.program)
            .arg(format!("-T{}", format.extension()))
            .arg("-o")
            .arg(output_path)
            .arg(dot_path)
            .output()
            .map_err(|source| MorseSpectacleError::Render {
                program: self.program.clone(),
                message: format!("failed to invoke: {source}"),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(MorseSpectacleError::Render {
                program: self.program.clone(),
                message: format!(
                    "exited with {} while producing '{}': {}",
                    output.status,
                    output_path.display(),
                    stderr.trim()
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_a_render_error() {
        let renderer = GraphvizRenderer::new("definitely-not-a-real-layout-engine");
        let error = renderer
            .render(
                Path::new("input.gv"),
                ImageFormat::Png,
                Path::new("output.png"),
            )
            .unwrap_err();

        // The spawn failure must reach the user through the display
        let display = error.to_string();
        assert!(display.contains("definitely-not-a-real-layout-engine"));
        assert!(display.contains("failed to invoke"));

        match error {
            MorseSpectacleError::Render { program, message } => {
                assert_eq!(program, "definitely-not-a-real-layout-engine");
                assert!(message.contains("failed to invoke"));
            }
            _ => panic!("Expected Render variant"),
        }
    }
}
