use std::collections::BTreeMap;

use crate::connector::ConnectorStyle;
use crate::scoring::score;

#[derive(Debug, Clone)]
pub struct QuizItem {
    pub id: u32,
    pub prompt: String,
    pub correct_answer: String,
}

/// The compiled-in question set. Ids are stable for the lifetime of a session
/// and every `correct_answer` is one of the labels in [`answer_options`].
pub fn quiz_items() -> Vec<QuizItem> {
    vec![
        QuizItem {
            id: 1,
            prompt: "Given a string representing a number, return the closest number that is a palindrome.".to_string(),
            correct_answer: "Some other pattern".to_string(),
        },
        QuizItem {
            id: 2,
            prompt: "Given an array of numbers in the range 1 to n, find all the numbers that are missing in the array.".to_string(),
            correct_answer: "Cyclic Sort".to_string(),
        },
        QuizItem {
            id: 3,
            prompt: "Given a set of numbers, find the first 5 missing positive numbers.".to_string(),
            correct_answer: "Some other pattern".to_string(),
        },
        QuizItem {
            id: 4,
            prompt: "Given a set, return the number of subsets with the sum equal to 10.".to_string(),
            correct_answer: "Some other pattern".to_string(),
        },
    ]
}

/// The fixed set of answer labels shown in the right-hand column.
pub fn answer_options() -> Vec<String> {
    vec!["Cyclic Sort".to_string(), "Some other pattern".to_string()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResults {
    pub score: usize,
    pub total: usize,
}

/// Which column the keyboard highlight sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Questions,
    Answers,
}

#[derive(Debug)]
pub struct MatchSession {
    pub items: Vec<QuizItem>,
    pub answers: Vec<String>,
    /// Question id -> chosen answer label. A later choice for the same
    /// question overwrites the earlier one.
    pub matches: BTreeMap<u32, String>,
    /// The question currently awaiting an answer click, if any.
    pub armed: Option<u32>,
    /// `Some` once submitted; freezes the matching UI until reset.
    pub results: Option<QuizResults>,
    pub highlight_column: Column,
    pub highlight_index: usize,
    pub connector_style: ConnectorStyle,
}

impl MatchSession {
    pub fn new() -> Self {
        Self {
            items: quiz_items(),
            answers: answer_options(),
            matches: BTreeMap::new(),
            armed: None,
            results: None,
            highlight_column: Column::Questions,
            highlight_index: 0,
            connector_style: ConnectorStyle::default(),
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.results.is_some()
    }

    /// Arms a question for matching. Clicking a second question before
    /// answering simply re-arms.
    pub fn select_question(&mut self, id: u32) {
        if self.is_submitted() {
            return;
        }
        self.armed = Some(id);
    }

    /// Records a match for the armed question and disarms. Ignored when no
    /// question is armed.
    pub fn select_answer(&mut self, label: &str) {
        if self.is_submitted() {
            return;
        }
        if let Some(id) = self.armed.take() {
            self.matches.insert(id, label.to_string());
        }
    }

    /// Scores the current matches against the answer key and reveals the
    /// result. A second submit is a no-op.
    pub fn submit(&mut self) {
        if self.is_submitted() {
            return;
        }
        self.armed = None;
        self.results = Some(QuizResults {
            score: score(&self.matches, &self.items),
            total: self.items.len(),
        });
    }

    /// Clears all interaction state back to the initial empty session.
    pub fn reset(&mut self) {
        self.matches.clear();
        self.armed = None;
        self.results = None;
        self.highlight_column = Column::Questions;
        self.highlight_index = 0;
    }
}

impl Default for MatchSession {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Quiz,
    QuitConfirm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_content_is_consistent() {
        let items = quiz_items();
        let answers = answer_options();
        assert_eq!(items.len(), 4);
        assert_eq!(answers.len(), 2);
        for item in &items {
            assert!(
                answers.contains(&item.correct_answer),
                "answer key entry for question {} is not an answer option",
                item.id
            );
        }
        let mut ids: Vec<u32> = items.iter().map(|item| item.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), items.len(), "question ids must be unique");
    }

    #[test]
    fn test_select_question_overwrites_armed() {
        let mut session = MatchSession::new();
        session.select_question(1);
        assert_eq!(session.armed, Some(1));
        session.select_question(3);
        assert_eq!(session.armed, Some(3));
    }

    #[test]
    fn test_select_answer_records_match_and_disarms() {
        let mut session = MatchSession::new();
        session.select_question(2);
        session.select_answer("Cyclic Sort");
        assert_eq!(session.armed, None);
        assert_eq!(
            session.matches.get(&2).map(String::as_str),
            Some("Cyclic Sort")
        );
    }

    #[test]
    fn test_select_answer_without_armed_question_is_a_noop() {
        let mut session = MatchSession::new();
        session.select_answer("Cyclic Sort");
        assert!(session.matches.is_empty());
        assert_eq!(session.armed, None);
    }

    #[test]
    fn test_later_choice_overwrites_earlier_one() {
        let mut session = MatchSession::new();
        session.select_question(1);
        session.select_answer("Cyclic Sort");
        session.select_question(1);
        session.select_answer("Some other pattern");
        assert_eq!(session.matches.len(), 1);
        assert_eq!(
            session.matches.get(&1).map(String::as_str),
            Some("Some other pattern")
        );
    }

    #[test]
    fn test_at_most_one_entry_per_question() {
        let mut session = MatchSession::new();
        for _ in 0..5 {
            session.select_question(4);
            session.select_answer("Cyclic Sort");
        }
        assert_eq!(session.matches.len(), 1);
    }

    #[test]
    fn test_submit_freezes_matching() {
        let mut session = MatchSession::new();
        session.select_question(1);
        session.select_answer("Some other pattern");
        session.submit();
        assert!(session.is_submitted());

        session.select_question(2);
        assert_eq!(session.armed, None);
        session.select_answer("Cyclic Sort");
        assert_eq!(session.matches.len(), 1);
    }

    #[test]
    fn test_submit_is_idempotent() {
        let mut session = MatchSession::new();
        session.select_question(2);
        session.select_answer("Cyclic Sort");
        session.submit();
        let first = session.results;
        session.submit();
        assert_eq!(session.results, first);
    }

    #[test]
    fn test_submit_with_empty_matches_scores_zero() {
        let mut session = MatchSession::new();
        session.submit();
        assert_eq!(session.results, Some(QuizResults { score: 0, total: 4 }));
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut session = MatchSession::new();
        session.select_question(1);
        session.select_answer("Cyclic Sort");
        session.select_question(3);
        session.submit();
        session.reset();

        assert!(session.matches.is_empty());
        assert_eq!(session.armed, None);
        assert_eq!(session.results, None);
        assert!(!session.is_submitted());
    }

    #[test]
    fn test_reset_then_matching_works_again() {
        let mut session = MatchSession::new();
        session.submit();
        session.reset();
        session.select_question(2);
        session.select_answer("Cyclic Sort");
        assert_eq!(session.matches.len(), 1);
    }
}
