use crate::models::{SessionId, Utterance};

use super::add_punctuation;

/// Render one turn as `Speaker: Text.`
pub fn render_turn(turn: &Utterance) -> String {
    format!("{}: {}", turn.speaker, add_punctuation(&turn.text))
}

/// Render merged turns as blank-line separated lines, without a title
pub fn render_turns(turns: &[Utterance]) -> String {
    turns
        .iter()
        .map(render_turn)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render the formatted session document
///
/// ```text
/// # Cambly Session - 2025-12-22
///
/// Tutor: Hello.
///
/// Neal: Hi.
/// ```
pub fn render_session(session: &SessionId, turns: &[Utterance]) -> String {
    let mut output = format!("# Cambly Session - {}\n\n", session.display_date());
    output.push_str(&render_turns(turns));
    output.push('\n');
    output
}
