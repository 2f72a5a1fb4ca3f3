use std::path::PathBuf;

use tracing::info;

use crate::error::Result;
use crate::io::{read_raw_transcript, write_markdown, SessionLayout};
use crate::models::SessionId;

use super::{merge_utterances, parse_transcript, render_session, ParseConfig};

/// Result of formatting one session
#[derive(Debug)]
pub struct FormatResult {
    /// Path of the written Markdown document
    pub path: PathBuf,
    /// Utterances found by the parser
    pub utterance_count: usize,
    /// Turns after merging
    pub turn_count: usize,
}

/// Format `raw/<id>.txt` into `formatted/<id>.md`
///
/// The session id is validated before anything on disk is touched.
pub fn format_session(
    layout: &SessionLayout,
    session: &str,
    config: &ParseConfig,
) -> Result<FormatResult> {
    let session: SessionId = session.parse()?;
    let raw = read_raw_transcript(layout, &session)?;

    info!("Parsing transcript...");
    let parsed = parse_transcript(&raw, config);
    info!("  Found {} utterances", parsed.utterances.len());

    info!("Merging consecutive utterances...");
    let turns = merge_utterances(&parsed.utterances);
    info!("  Merged into {} turns", turns.len());

    let document = render_session(&session, &turns);
    let path = layout.formatted_path(&session);
    write_markdown(&path, &document)?;

    Ok(FormatResult {
        path,
        utterance_count: parsed.utterances.len(),
        turn_count: turns.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoachError;

    #[test]
    fn test_invalid_session_touches_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let layout = SessionLayout::new(dir.path().join("cambly"));

        let err = format_session(&layout, "2025122", &ParseConfig::default()).unwrap_err();

        assert!(matches!(err, CoachError::InvalidSessionId(ref s) if s == "2025122"));
        assert!(!layout.base_dir().exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_raw_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let layout = SessionLayout::new(dir.path());

        let err = format_session(&layout, "20251222", &ParseConfig::default()).unwrap_err();

        assert!(matches!(err, CoachError::InputNotFound { .. }));
        assert!(!layout.formatted_dir().exists());
    }

    #[test]
    fn test_formats_raw_file() {
        let dir = tempfile::tempdir().unwrap();
        let layout = SessionLayout::new(dir.path());
        std::fs::create_dir_all(layout.raw_dir()).unwrap();
        std::fs::write(
            layout.raw_dir().join("20251222.txt"),
            "Emilyのアバター\nI think so\n\nNealのアバター\nmm-hmm\n\nEmilyのアバター\nit was good\n\nNealのアバター\nreally,\n",
        )
        .unwrap();

        let result = format_session(&layout, "20251222", &ParseConfig::default()).unwrap();

        assert_eq!(result.path, layout.formatted_dir().join("20251222.md"));
        assert_eq!(result.utterance_count, 4);
        assert_eq!(result.turn_count, 2);
        assert_eq!(
            std::fs::read_to_string(&result.path).unwrap(),
            "# Cambly Session - 2025-12-22\n\n\
             Emily: I think so mm-hmm it was good.\n\n\
             Neal: Really.\n"
        );
    }
}
