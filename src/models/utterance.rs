/// One contiguous block of speech attributed to a single labelled speaker.
///
/// Merged turns reuse this type: their `text` is the space-joined text of
/// every utterance absorbed into the turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    /// Speaker name, as it appears before the label suffix
    pub speaker: String,
    /// Speech text, joined with single spaces
    pub text: String,
}

impl Utterance {
    pub fn new(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
        }
    }

    /// Number of whitespace-separated words in the text
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}

/// Result of parsing a raw transcript
#[derive(Debug, Clone, Default)]
pub struct ParsedTranscript {
    /// Utterances in order of appearance
    pub utterances: Vec<Utterance>,
    /// Distinct speakers in order of first appearance
    pub speakers: Vec<String>,
}

impl ParsedTranscript {
    pub fn from_utterances(utterances: Vec<Utterance>) -> Self {
        let mut speakers: Vec<String> = Vec::new();
        for utterance in &utterances {
            if !speakers.contains(&utterance.speaker) {
                speakers.push(utterance.speaker.clone());
            }
        }
        Self {
            utterances,
            speakers,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.utterances.is_empty()
    }
}
