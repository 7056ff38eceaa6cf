use std::collections::BTreeMap;

use crate::models::QuizItem;

/// Counts questions whose recorded answer equals the answer key entry.
///
/// Unmatched questions count as incorrect; there is no partial credit and no
/// penalty, so the result is always in `0..=items.len()`.
pub fn score(matches: &BTreeMap<u32, String>, items: &[QuizItem]) -> usize {
    items
        .iter()
        .filter(|item| {
            matches
                .get(&item.id)
                .is_some_and(|label| *label == item.correct_answer)
        })
        .count()
}
