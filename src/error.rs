use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the formatter and corrector pipelines.
///
/// Every variant is fatal to the invoking command; the binary prints the
/// message and exits non-zero.
#[derive(Error, Debug)]
pub enum CoachError {
    #[error("Invalid date format '{0}'. Use YYYYMMDD (e.g., 20251222)")]
    InvalidSessionId(String),

    #[error("{what} not found: {}\n\n{}", .path.display(), .available)]
    InputNotFound {
        what: &'static str,
        path: PathBuf,
        available: String,
    },

    #[error(
        ".env file not found at {}\nCreate the file with your OpenAI API key:\n  echo 'OPENAI_API_KEY=your-api-key' > {}",
        .0.display(),
        .0.display()
    )]
    CredentialFileMissing(PathBuf),

    #[error(
        "OPENAI_API_KEY not found in {}\nAdd the following line to your .env file:\n  OPENAI_API_KEY=your-api-key",
        .0.display()
    )]
    MissingApiKey(PathBuf),

    #[error(transparent)]
    Credential(#[from] dotenvy::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("OpenAI API error: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("OpenAI API returned no message content")]
    EmptyResponse,
}

pub type Result<T> = std::result::Result<T, CoachError>;
