//! Export run configuration

use std::path::PathBuf;

use crate::cli::{Cli, ImageFormat, RankDir};
use crate::error::MorseSpectacleError;

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, MorseSpectacleError>;
}

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub basename: String,
    pub output_dir: PathBuf,
    pub rankdir: RankDir,
    pub image_formats: Vec<ImageFormat>,
    pub dot_program: String,
    pub skip_render: bool,
}

impl ExportOptions {
    pub fn builder() -> ExportOptionsBuilder {
        ExportOptionsBuilder::new()
    }

    pub fn from_cli(cli: Cli) -> Result<Self, MorseSpectacleError> {
        ExportOptions::builder()
            .with_basename(cli.basename)
            .with_output_dir(cli.output_dir)
            .with_rankdir(cli.rankdir)
            .with_image_formats(cli.image_formats)
            .with_dot_program(cli.dot_program)
            .with_skip_render(cli.skip_render)
            .build()
    }
}

#[derive(Default)]
pub struct ExportOptionsBuilder {
    basename: Option<String>,
    output_dir: Option<PathBuf>,
    rankdir: Option<RankDir>,
    image_formats: Option<Vec<ImageFormat>>,
    dot_program: Option<String>,
    skip_render: Option<bool>,
}

impl ExportOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_basename(mut self, basename: String) -> Self {
        self.basename = Some(basename);
        self
    }

    pub fn with_output_dir(mut self, output_dir: PathBuf) -> Self {
        self.output_dir = Some(output_dir);
        self
    }

    pub fn with_rankdir(mut self, rankdir: RankDir) -> Self {
        self.rankdir = Some(rankdir);
        self
    }

    pub fn with_image_formats(mut self, image_formats: Vec<ImageFormat>) -> Self {
        self.image_formats = Some(image_formats);
        self
    }

    pub fn with_dot_program(mut self, dot_program: String) -> Self {
        self.dot_program = Some(dot_program);
        self
    }

    pub fn with_skip_render(mut self, skip_render: bool) -> Self {
        self.skip_render = Some(skip_render);
        self
    }
}

impl ConfigBuilder for ExportOptionsBuilder {
    type Config = ExportOptions;

    fn build(self) -> Result<Self::Config, MorseSpectacleError> {
        let basename = self
            .basename
            .ok_or_else(|| MorseSpectacleError::ConfigurationError {
                message: "Missing required field: basename".to_string(),
            })?;
        if basename.is_empty() {
            return Err(MorseSpectacleError::ConfigurationError {
                message: "basename must not be empty".to_string(),
            });
        }

        Ok(ExportOptions {
            basename,
            output_dir: self.output_dir.ok_or_else(|| {
                MorseSpectacleError::ConfigurationError {
                    message: "Missing required field: output_dir".to_string(),
                }
            })?,
            rankdir: self
                .rankdir
                .ok_or_else(|| MorseSpectacleError::ConfigurationError {
                    message: "Missing required field: rankdir".to_string(),
                })?,
            image_formats: self.image_formats.ok_or_else(|| {
                MorseSpectacleError::ConfigurationError {
                    message: "Missing required field: image_formats".to_string(),
                }
            })?,
            dot_program: self.dot_program.ok_or_else(|| {
                MorseSpectacleError::ConfigurationError {
                    message: "Missing required field: dot_program".to_string(),
                }
            })?,
            skip_render: self.skip_render.ok_or_else(|| {
                MorseSpectacleError::ConfigurationError {
                    message: "Missing required field: skip_render".to_string(),
                }
            })?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_builder() -> ExportOptionsBuilder {
        ExportOptions::builder()
            .with_basename("morse".to_string())
            .with_output_dir(PathBuf::from("output"))
            .with_rankdir(RankDir::Tb)
            .with_image_formats(vec![ImageFormat::Png])
            .with_dot_program("dot".to_string())
            .with_skip_render(false)
    }

    #[test]
    fn test_builder_with_all_fields() {
        let options = full_builder().build().unwrap();
        assert_eq!(options.basename, "morse");
        assert_eq!(options.rankdir, RankDir::Tb);
        assert_eq!(options.image_formats, vec![ImageFormat::Png]);
    }

    #[test]
    fn test_builder_missing_field_fails() {
        let error = ExportOptions::builder()
            .with_basename("morse".to_string())
            .build()
            .unwrap_err();
        assert!(matches!(
            error,
            MorseSpectacleError::ConfigurationError { .. }
        ));
    }

    #[test]
    fn test_builder_empty_basename_fails() {
        let error = full_builder()
            .with_basename(String::new())
            .build()
            .unwrap_err();
        match error {
            MorseSpectacleError::ConfigurationError { message } => {
                assert_eq!(message, "basename must not be empty");
            }
            _ => panic!("Expected ConfigurationError variant"),
        }
    }
}
