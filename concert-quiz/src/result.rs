//! Result screen summary
use serde::{Deserialize, Serialize};

use crate::resolver::{CategoryScore, ResolvedResult};
use crate::table::ScoringTable;

/// Everything the result screen and the completion log line need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub category: String,
    pub title: String,
    pub short_title: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub accent_color: String,
    pub image: Option<String>,
    pub scores: Vec<CategoryScore>,
    pub winning_score: u32,
    pub answered: usize,
    pub question_count: usize,
    pub unmatched: usize,
    pub dataset: String,
}

impl std::fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.winning_score)?;
        for entry in &self.scores {
            write!(f, " {}={}", entry.category, entry.score)?;
        }
        Ok(())
    }
}

/// Build the summary for a resolved result.
///
/// A winner id missing from the table (a result resolved against another
/// dataset) falls back to the table's fallback category presentation.
#[must_use]
pub fn result_summary(
    table: &ScoringTable,
    resolved: &ResolvedResult,
    answered: usize,
) -> ResultSummary {
    let category = resolved
        .winner_in(table)
        .unwrap_or_else(|| table.fallback());
    ResultSummary {
        category: category.id.clone(),
        title: category.title.clone(),
        short_title: category.short_title.clone(),
        description: category.description.clone(),
        icon: category.icon.clone(),
        color: category.color.clone(),
        accent_color: category.accent_color.clone(),
        image: category.image.clone(),
        scores: resolved.scores.clone(),
        winning_score: resolved.winning_score,
        answered,
        question_count: table.question_count(),
        unmatched: resolved.unmatched,
        dataset: table.fingerprint_hex(),
    }
}
