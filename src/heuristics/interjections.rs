/// Short acknowledgements a listener drops into the other speaker's turn.
///
/// Matched after lowercasing, trimming and stripping trailing `.,!?`.
pub const MINIMAL_INTERJECTIONS: &[&str] = &[
    "mmm", "mm", "mhm", "mm-hmm", "mmhmm",
    "uh-huh", "uh huh", "uhuh",
    "yeah", "yep", "yup",
    "okay", "ok", "right",
    "oh", "ah", "i see",
];

const TRAILING_PUNCTUATION: [char; 4] = ['.', ',', '!', '?'];

/// Check whether an utterance is nothing but a minimal interjection
pub fn is_minimal_interjection(text: &str) -> bool {
    let lowered = text.to_lowercase();
    let cleaned = lowered.trim().trim_end_matches(TRAILING_PUNCTUATION);
    MINIMAL_INTERJECTIONS.contains(&cleaned)
}
