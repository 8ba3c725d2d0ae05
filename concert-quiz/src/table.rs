//! Validated, read-only scoring table built from a raw `QuizData` set.
use regex::Regex;
use smallvec::SmallVec;
use std::collections::HashSet;
use std::hash::Hasher;
use std::sync::OnceLock;
use thiserror::Error;
use twox_hash::XxHash64;

use crate::constants::{COLOR_PATTERN, MIN_ANSWERS_PER_QUESTION};
use crate::data::{QuestionDef, QuizData, ResultCategory};

/// Dense per-category scores aligned with the table's category order.
pub type ScoreVector = SmallVec<[u32; 8]>;

/// Data-integrity failures detected while building a [`ScoringTable`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("dataset defines no result categories")]
    NoCategories,
    #[error("dataset defines no questions")]
    NoQuestions,
    #[error("{kind} id must not be empty")]
    EmptyId { kind: &'static str },
    #[error("duplicate result category `{id}`")]
    DuplicateCategory { id: String },
    #[error("expected exactly one fallback category, found {found}")]
    FallbackCount { found: usize },
    #[error("category `{category}` has invalid {field} `{value}`")]
    InvalidColor {
        category: String,
        field: &'static str,
        value: String,
    },
    #[error("duplicate question `{id}`")]
    DuplicateQuestion { id: String },
    #[error("question `{question}` needs at least {min} answers (got {found})")]
    TooFewAnswers {
        question: String,
        min: usize,
        found: usize,
    },
    #[error("duplicate answer `{answer}` in question `{question}`")]
    DuplicateAnswer { question: String, answer: String },
    #[error("answer `{question}/{answer}` has no score for category `{category}`")]
    MissingScore {
        question: String,
        answer: String,
        category: String,
    },
    #[error("answer `{question}/{answer}` scores unknown category `{category}`")]
    UnknownCategory {
        question: String,
        answer: String,
        category: String,
    },
    #[error("dataset is not valid JSON: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    id: String,
    label: String,
    scores: ScoreVector,
}

impl Answer {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Scores in category order.
    #[must_use]
    pub fn scores(&self) -> &[u32] {
        &self.scores
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: String,
    prompt: String,
    answers: SmallVec<[Answer; 4]>,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    #[must_use]
    pub fn answer(&self, id: &str) -> Option<&Answer> {
        self.answers.iter().find(|a| a.id == id)
    }
}

/// Immutable questions, answers and result categories.
///
/// Construction refuses any dataset with partial score vectors, duplicate
/// ids, or anything other than a single fallback category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringTable {
    categories: Vec<ResultCategory>,
    questions: Vec<Question>,
    fallback: usize,
    fingerprint: u64,
}

fn color_regex() -> &'static Regex {
    static COLOR: OnceLock<Regex> = OnceLock::new();
    COLOR.get_or_init(|| Regex::new(COLOR_PATTERN).expect("color pattern compiles"))
}

impl ScoringTable {
    /// Validate a raw dataset and build the table.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] describing the first integrity problem found.
    pub fn from_data(data: QuizData) -> Result<Self, TableError> {
        let fingerprint = fingerprint_of(&data);
        let fallback = validate_categories(&data.categories)?;
        if data.questions.is_empty() {
            return Err(TableError::NoQuestions);
        }

        let mut seen = HashSet::new();
        let mut questions = Vec::with_capacity(data.questions.len());
        for def in data.questions {
            if def.id.is_empty() {
                return Err(TableError::EmptyId { kind: "question" });
            }
            if !seen.insert(def.id.clone()) {
                return Err(TableError::DuplicateQuestion { id: def.id });
            }
            questions.push(build_question(def, &data.categories)?);
        }

        Ok(Self {
            categories: data.categories,
            questions,
            fallback,
            fingerprint,
        })
    }

    /// Parse and validate a JSON dataset.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Parse`] for malformed JSON, otherwise any
    /// validation error from [`ScoringTable::from_data`].
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let data = QuizData::from_json(json).map_err(|err| TableError::Parse(err.to_string()))?;
        Self::from_data(data)
    }

    /// Build the table from the dataset bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled dataset has been corrupted.
    pub fn load_default() -> Result<Self, TableError> {
        Self::from_json(crate::constants::EMBEDDED_QUIZ_JSON)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn question_by_id(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    #[must_use]
    pub fn question_index(&self, id: &str) -> Option<usize> {
        self.questions.iter().position(|q| q.id == id)
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// Categories in canonical order; tie-breaks follow this order.
    #[must_use]
    pub fn categories(&self) -> &[ResultCategory] {
        &self.categories
    }

    #[must_use]
    pub fn category(&self, id: &str) -> Option<&ResultCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn category_index(&self, id: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.id == id)
    }

    /// The category chosen when no score rises above zero.
    #[must_use]
    pub fn fallback(&self) -> &ResultCategory {
        &self.categories[self.fallback]
    }

    #[must_use]
    pub const fn fallback_index(&self) -> usize {
        self.fallback
    }

    /// `XxHash64` of the source dataset's canonical JSON.
    #[must_use]
    pub const fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    #[must_use]
    pub fn fingerprint_hex(&self) -> String {
        format!("{:016x}", self.fingerprint)
    }
}

fn fingerprint_of(data: &QuizData) -> u64 {
    let mut hasher = XxHash64::with_seed(0);
    hasher.write(data.canonical_json().as_bytes());
    hasher.finish()
}

fn validate_categories(categories: &[ResultCategory]) -> Result<usize, TableError> {
    if categories.is_empty() {
        return Err(TableError::NoCategories);
    }
    let mut seen = HashSet::new();
    for category in categories {
        if category.id.is_empty() {
            return Err(TableError::EmptyId { kind: "category" });
        }
        if !seen.insert(category.id.as_str()) {
            return Err(TableError::DuplicateCategory {
                id: category.id.clone(),
            });
        }
        for (field, value) in [
            ("color", &category.color),
            ("accent_color", &category.accent_color),
        ] {
            if !color_regex().is_match(value) {
                return Err(TableError::InvalidColor {
                    category: category.id.clone(),
                    field,
                    value: value.clone(),
                });
            }
        }
    }

    let mut fallbacks = categories
        .iter()
        .enumerate()
        .filter(|(_, c)| c.fallback)
        .map(|(idx, _)| idx);
    match (fallbacks.next(), fallbacks.count()) {
        (Some(idx), 0) => Ok(idx),
        (None, _) => Err(TableError::FallbackCount { found: 0 }),
        (Some(_), extra) => Err(TableError::FallbackCount { found: extra + 1 }),
    }
}

fn build_question(def: QuestionDef, categories: &[ResultCategory]) -> Result<Question, TableError> {
    if def.answers.len() < MIN_ANSWERS_PER_QUESTION {
        return Err(TableError::TooFewAnswers {
            question: def.id,
            min: MIN_ANSWERS_PER_QUESTION,
            found: def.answers.len(),
        });
    }

    let mut seen = HashSet::new();
    let mut answers = SmallVec::with_capacity(def.answers.len());
    for answer in def.answers {
        if answer.id.is_empty() {
            return Err(TableError::EmptyId { kind: "answer" });
        }
        if !seen.insert(answer.id.clone()) {
            return Err(TableError::DuplicateAnswer {
                question: def.id,
                answer: answer.id,
            });
        }
        if let Some(unknown) = answer
            .scores
            .keys()
            .find(|key| !categories.iter().any(|c| &c.id == *key))
        {
            return Err(TableError::UnknownCategory {
                question: def.id,
                answer: answer.id,
                category: unknown.clone(),
            });
        }

        let mut scores = ScoreVector::with_capacity(categories.len());
        for category in categories {
            let Some(score) = answer.scores.get(&category.id) else {
                return Err(TableError::MissingScore {
                    question: def.id,
                    answer: answer.id,
                    category: category.id.clone(),
                });
            };
            scores.push(*score);
        }
        answers.push(Answer {
            id: answer.id,
            label: answer.label,
            scores,
        });
    }

    Ok(Question {
        id: def.id,
        prompt: def.prompt,
        answers,
    })
}
