use serde::{Deserialize, Serialize};

use crate::data::UserAnswer;

/// Mutable state of one quiz attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSession {
    index: usize,
    answers: Vec<UserAnswer>,
    transitioning: bool,
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn answers(&self) -> &[UserAnswer] {
        &self.answers
    }

    #[must_use]
    pub const fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub(crate) const fn set_transitioning(&mut self, transitioning: bool) {
        self.transitioning = transitioning;
    }

    /// Move to `index`, clamped to the last question.
    pub(crate) fn set_index(&mut self, index: usize, question_count: usize) {
        self.index = index.min(question_count.saturating_sub(1));
    }

    /// Record an answer, replacing any earlier one for the same question.
    pub fn record(&mut self, answer: UserAnswer) {
        if let Some(existing) = self
            .answers
            .iter_mut()
            .find(|a| a.question_id == answer.question_id)
        {
            *existing = answer;
        } else {
            self.answers.push(answer);
        }
    }

    /// The answer id recorded for `question_id`, if any.
    #[must_use]
    pub fn selected_for(&self, question_id: &str) -> Option<&str> {
        self.answers
            .iter()
            .find(|a| a.question_id == question_id)
            .map(|a| a.answer_id.as_str())
    }

    /// Forget the index and every recorded answer.
    pub fn clear(&mut self) {
        self.index = 0;
        self.answers.clear();
    }
}
