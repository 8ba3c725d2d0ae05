use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Presentation and identity of a quiz outcome.
///
/// Only `id` and `fallback` take part in scoring; the rest is carried for
/// the result screen and must round-trip untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultCategory {
    pub id: String,
    pub title: String,
    pub short_title: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub accent_color: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub fallback: bool,
}

/// A selectable answer as authored in the dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerDef {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub scores: BTreeMap<String, u32>,
}

/// A question as authored in the dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDef {
    pub id: String,
    pub prompt: String,
    #[serde(default)]
    pub answers: Vec<AnswerDef>,
}

/// Raw quiz dataset prior to validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QuizData {
    #[serde(default)]
    pub categories: Vec<ResultCategory>,
    #[serde(default)]
    pub questions: Vec<QuestionDef>,
}

impl QuizData {
    /// Create an empty dataset (useful for tests)
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load quiz data from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a quiz dataset.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load the dataset bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled JSON is malformed.
    pub fn load_from_static() -> Result<Self, serde_json::Error> {
        Self::from_json(crate::constants::EMBEDDED_QUIZ_JSON)
    }

    /// Canonical serialization used for fingerprinting.
    ///
    /// Score maps are ordered, so two equal datasets always produce the same
    /// bytes.
    #[must_use]
    pub fn canonical_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Answer recorded for one question during a session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserAnswer {
    pub question_id: String,
    pub answer_id: String,
}

impl UserAnswer {
    #[must_use]
    pub fn new(question_id: impl Into<String>, answer_id: impl Into<String>) -> Self {
        Self {
            question_id: question_id.into(),
            answer_id: answer_id.into(),
        }
    }
}
