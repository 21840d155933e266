use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum MorseSpectacleError {
    #[error("Invalid Morse sequence '{sequence}': {reason}")]
    #[diagnostic(
        code(morse_spectacle::invalid_sequence),
        help("The compiled-in code table contains a malformed entry - please report it")
    )]
    InvalidSequence { sequence: String, reason: String },

    #[error("Graphviz renderer '{program}' failed: {message}")]
    #[diagnostic(
        code(morse_spectacle::render_error),
        help("Check that Graphviz is installed and the layout binary is on your PATH")
    )]
    Render { program: String, message: String },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(morse_spectacle::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("IO error")]
    #[diagnostic(
        code(morse_spectacle::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(morse_spectacle::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}
