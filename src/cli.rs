use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "morse-spectacle",
    about = "Build a Morse-code prefix trie and export it as JSON and Graphviz diagrams",
    long_about = "morse-spectacle builds a prefix tree from the ITU M.1677 Morse code table, \
                  writes it out as a nested JSON structure and a Graphviz DOT description, and \
                  invokes the Graphviz 'dot' program to render image artifacts. Running with no \
                  flags produces the default-named output set in the default directory.",
    version
)]
pub struct Cli {
    /// Base filename (stem) for generated outputs
    #[arg(
        short,
        long,
        default_value = crate::constants::output::DEFAULT_BASENAME,
        env = "MORSE_SPECTACLE_BASENAME"
    )]
    pub basename: String,

    /// Directory for generated outputs (created if absent)
    #[arg(
        short,
        long,
        default_value = crate::constants::output::DEFAULT_DIRECTORY,
        env = "MORSE_SPECTACLE_OUTPUT_DIR"
    )]
    pub output_dir: PathBuf,

    /// Layout orientation of the rendered graph
    #[arg(
        short,
        long,
        value_enum,
        default_value = "tb",
        env = "MORSE_SPECTACLE_RANKDIR"
    )]
    pub rankdir: RankDir,

    /// Image formats to request from Graphviz (repeatable)
    #[arg(
        short,
        long = "image-format",
        value_enum,
        default_values = ["pdf", "png", "svg"],
        value_delimiter = ',',
        env = "MORSE_SPECTACLE_IMAGE_FORMATS"
    )]
    pub image_formats: Vec<ImageFormat>,

    /// Graphviz layout program to invoke
    #[arg(
        long,
        default_value = crate::constants::render::DOT_PROGRAM,
        env = "MORSE_SPECTACLE_DOT_PROGRAM"
    )]
    pub dot_program: String,

    /// Write the JSON and DOT files only; skip the external renderer
    #[arg(long, env = "MORSE_SPECTACLE_SKIP_RENDER")]
    pub skip_render: bool,
}

/// Layout orientation passed to Graphviz as the `rankdir` attribute
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum RankDir {
    /// Top to bottom
    Tb,
    /// Left to right
    Lr,
    /// Right to left
    Rl,
    /// Bottom to top
    Bt,
}

impl RankDir {
    pub fn as_str(self) -> &'static str {
        match self {
            RankDir::Tb => "TB",
            RankDir::Lr => "LR",
            RankDir::Rl => "RL",
            RankDir::Bt => "BT",
        }
    }
}

/// Image formats the external renderer is asked to produce
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ImageFormat {
    Pdf,
    Png,
    Svg,
}

impl ImageFormat {
    /// File extension, also the Graphviz `-T` format name
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Pdf => "pdf",
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_uses_defaults() {
        let cli = Cli::parse_from(["morse-spectacle"]);
        assert_eq!(cli.basename, "morse");
        assert_eq!(cli.output_dir, PathBuf::from("output"));
        assert_eq!(cli.rankdir, RankDir::Tb);
        assert_eq!(
            cli.image_formats,
            vec![ImageFormat::Pdf, ImageFormat::Png, ImageFormat::Svg]
        );
        assert!(!cli.skip_render);
    }

    #[test]
    fn test_rankdir_values_parse() {
        for (flag, expected) in [
            ("tb", RankDir::Tb),
            ("lr", RankDir::Lr),
            ("rl", RankDir::Rl),
            ("bt", RankDir::Bt),
        ] {
            let cli = Cli::parse_from(["morse-spectacle", "--rankdir", flag]);
            assert_eq!(cli.rankdir, expected);
        }
    }

    #[test]
    fn test_rankdir_as_str() {
        assert_eq!(RankDir::Tb.as_str(), "TB");
        assert_eq!(RankDir::Lr.as_str(), "LR");
        assert_eq!(RankDir::Rl.as_str(), "RL");
        assert_eq!(RankDir::Bt.as_str(), "BT");
    }

    #[test]
    fn test_repeated_image_formats() {
        let cli = Cli::parse_from(["morse-spectacle", "-i", "png", "-i", "svg"]);
        assert_eq!(cli.image_formats, vec![ImageFormat::Png, ImageFormat::Svg]);
    }
}
