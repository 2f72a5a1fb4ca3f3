/// Collapse whitespace runs and drop one trailing comma
pub fn clean_text(text: &str) -> String {
    let mut collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.ends_with(',') {
        collapsed.pop();
    }
    collapsed
}

/// Apply light punctuation to a turn
///
/// Cleans the text, uppercases its first character and appends a period
/// unless it already ends in `.`, `!` or `?`. Only the first character of
/// the whole turn changes case. Empty text is returned as-is.
pub fn add_punctuation(text: &str) -> String {
    let cleaned = clean_text(text);

    let mut chars = cleaned.chars();
    let Some(first) = chars.next() else {
        return cleaned;
    };

    let mut result: String = first.to_uppercase().chain(chars).collect();
    if !result.ends_with(['.', '!', '?']) {
        result.push('.');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("  so   I\twent \n there  "), "so I went there");
        assert_eq!(clean_text("and then,"), "and then");
        assert_eq!(clean_text("and then,,"), "and then,");
        assert_eq!(clean_text("   "), "");
    }

    #[test]
    fn test_add_punctuation() {
        assert_eq!(add_punctuation("i think so"), "I think so.");
        assert_eq!(add_punctuation("really?"), "Really?");
        assert_eq!(add_punctuation("wow!"), "Wow!");
        assert_eq!(add_punctuation("done."), "Done.");
        assert_eq!(add_punctuation("well, you know,"), "Well, you know.");
    }

    #[test]
    fn test_only_first_character_changes_case() {
        assert_eq!(
            add_punctuation("I think so mm-hmm It was good"),
            "I think so mm-hmm It was good."
        );
        assert_eq!(add_punctuation("iPhone is NICE"), "IPhone is NICE.");
    }

    #[test]
    fn test_empty_text_unchanged() {
        assert_eq!(add_punctuation(""), "");
        assert_eq!(add_punctuation("  "), "");
        assert_eq!(add_punctuation(","), "");
    }

    #[test]
    fn test_single_character() {
        assert_eq!(add_punctuation("a"), "A.");
        assert_eq!(add_punctuation("?"), "?");
    }

    #[test]
    fn test_non_ascii_first_character() {
        assert_eq!(add_punctuation("éclair time"), "Éclair time.");
        assert_eq!(add_punctuation("はい"), "はい.");
    }

    #[test]
    fn test_punctuation_is_idempotent() {
        for text in [
            "i think so",
            "really?",
            "and then,,",
            "  spaced   out ,",
            "",
            "ok!",
            "a",
            "what...",
        ] {
            let once = add_punctuation(text);
            assert_eq!(add_punctuation(&once), once, "{text:?}");
        }
    }
}
