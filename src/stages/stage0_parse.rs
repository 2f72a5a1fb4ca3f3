use crate::models::{ParsedTranscript, Utterance};

/// Suffix that marks a speaker label line in Cambly exports ("'s avatar")
pub const DEFAULT_SPEAKER_SUFFIX: &str = "のアバター";

/// Configuration for transcript parsing
#[derive(Debug, Clone)]
pub struct ParseConfig {
    /// A trimmed line ending with this suffix starts a new utterance
    pub speaker_suffix: String,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            speaker_suffix: DEFAULT_SPEAKER_SUFFIX.to_string(),
        }
    }
}

/// Speaker block being accumulated during the scan
struct OpenBlock<'a> {
    speaker: &'a str,
    lines: Vec<&'a str>,
}

impl OpenBlock<'_> {
    fn close(self, utterances: &mut Vec<Utterance>) {
        // Blocks without any speech are dropped
        if !self.lines.is_empty() {
            utterances.push(Utterance::new(self.speaker, self.lines.join(" ")));
        }
    }
}

/// Parse a raw transcript into utterances
///
/// Label lines (`<name><suffix>`) open a new block for `<name>`; every
/// other non-blank line is speech for the current block. Text before the
/// first label has no speaker and is discarded.
pub fn parse_transcript(raw: &str, config: &ParseConfig) -> ParsedTranscript {
    let mut utterances = Vec::new();
    let mut current: Option<OpenBlock> = None;

    for line in raw.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(speaker) = line.strip_suffix(config.speaker_suffix.as_str()) {
            if let Some(block) = current.take() {
                block.close(&mut utterances);
            }
            // A bare suffix names nobody; its text is discarded like a preamble
            current = (!speaker.is_empty()).then(|| OpenBlock {
                speaker,
                lines: Vec::new(),
            });
        } else if let Some(block) = current.as_mut() {
            block.lines.push(line);
        }
    }

    if let Some(block) = current {
        block.close(&mut utterances);
    }

    ParsedTranscript::from_utterances(utterances)
}
