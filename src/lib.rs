pub mod error;
pub mod heuristics;
pub mod io;
pub mod llm;
pub mod models;
pub mod stages;

pub use error::{CoachError, Result};
pub use heuristics::{is_minimal_interjection, MINIMAL_INTERJECTIONS};
pub use io::{read_formatted_transcript, read_raw_transcript, write_markdown, SessionLayout};
pub use llm::{OpenAiClient, OpenAiConfig};
pub use models::{ParsedTranscript, SessionId, Utterance};
pub use stages::{
    add_punctuation, clean_text, format_session, merge_utterances, parse_transcript,
    render_session, FormatResult, ParseConfig,
};
