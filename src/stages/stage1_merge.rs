use crate::heuristics::is_minimal_interjection;
use crate::models::Utterance;

/// Merge utterances into speaker turns
///
/// A turn anchored at speaker S keeps absorbing the next utterance while
/// either:
/// 1. it is also by S, or
/// 2. it is a minimal interjection and the utterance right after it is by S.
///
/// Absorbed interjections stay in the turn text verbatim. An interjection
/// with nothing after it always closes the turn and becomes its own turn.
pub fn merge_utterances(utterances: &[Utterance]) -> Vec<Utterance> {
    let mut merged = Vec::new();
    let mut i = 0;

    while i < utterances.len() {
        let anchor = &utterances[i];
        let mut pieces = vec![anchor.text.as_str()];

        let mut j = i + 1;
        while let Some(next) = utterances.get(j) {
            let absorb = next.speaker == anchor.speaker
                || (is_minimal_interjection(&next.text)
                    && utterances
                        .get(j + 1)
                        .is_some_and(|after| after.speaker == anchor.speaker));
            if !absorb {
                break;
            }
            pieces.push(next.text.as_str());
            j += 1;
        }

        merged.push(Utterance::new(anchor.speaker.clone(), pieces.join(" ")));
        i = j;
    }

    merged
}
