//! Reduces recorded answers to a winning result category.
use serde::{Deserialize, Serialize};

use crate::data::{ResultCategory, UserAnswer};
use crate::table::ScoringTable;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub category: String,
    pub score: u32,
}

/// Outcome of [`resolve`]: ordered totals plus the winning category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedResult {
    /// Accumulated totals in canonical category order.
    pub scores: Vec<CategoryScore>,
    pub winner: String,
    pub winning_score: u32,
    /// Recorded answers whose question or answer id was not in the table.
    pub unmatched: usize,
}

impl ResolvedResult {
    #[must_use]
    pub fn score_for(&self, category: &str) -> Option<u32> {
        self.scores
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.score)
    }

    /// Full definition of the winning category.
    #[must_use]
    pub fn winner_in<'a>(&self, table: &'a ScoringTable) -> Option<&'a ResultCategory> {
        table.category(&self.winner)
    }
}

/// Sum every recorded answer's score vector and pick the winner.
///
/// Unknown question or answer ids contribute nothing and are counted in
/// `unmatched`. The first category to reach the maximum in canonical order
/// wins; a maximum of zero selects the table's fallback category.
#[must_use]
pub fn resolve(table: &ScoringTable, answers: &[UserAnswer]) -> ResolvedResult {
    let categories = table.categories();
    let mut totals = vec![0_u32; categories.len()];
    let mut unmatched = 0;

    for recorded in answers {
        let Some(answer) = table
            .question_by_id(&recorded.question_id)
            .and_then(|question| question.answer(&recorded.answer_id))
        else {
            unmatched += 1;
            continue;
        };
        for (total, score) in totals.iter_mut().zip(answer.scores()) {
            *total = total.saturating_add(*score);
        }
    }

    let mut best: Option<(usize, u32)> = None;
    for (idx, &total) in totals.iter().enumerate() {
        if total > best.map_or(0, |(_, score)| score) {
            best = Some((idx, total));
        }
    }
    let (winner_idx, winning_score) = best.unwrap_or((table.fallback_index(), 0));

    ResolvedResult {
        scores: categories
            .iter()
            .zip(&totals)
            .map(|(category, &score)| CategoryScore {
                category: category.id.clone(),
                score,
            })
            .collect(),
        winner: categories[winner_idx].id.clone(),
        winning_score,
        unmatched,
    }
}

impl ScoringTable {
    /// Convenience wrapper around [`resolve`].
    #[must_use]
    pub fn resolve(&self, answers: &[UserAnswer]) -> ResolvedResult {
        resolve(self, answers)
    }
}
