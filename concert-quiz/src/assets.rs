//! Data loader backed by the JSON assets compiled into the crate.
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::DataLoader;
use crate::constants::{EMBEDDED_CONFIG_JSON, EMBEDDED_QUIZ_JSON, QUIZ_CONFIG_NAME};
use crate::data::QuizData;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to parse bundled asset `{name}`: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("no bundled configuration named `{0}`")]
    UnknownConfig(String),
}

/// Loads the bundled dataset and configuration.
///
/// An override dataset (for instance one read from disk by a tester) can be
/// supplied with [`EmbeddedAssets::with_quiz_json`].
#[derive(Debug, Clone, Default)]
pub struct EmbeddedAssets {
    quiz_json: Option<String>,
    config_json: Option<String>,
}

impl EmbeddedAssets {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            quiz_json: None,
            config_json: None,
        }
    }

    #[must_use]
    pub fn with_quiz_json(mut self, json: impl Into<String>) -> Self {
        self.quiz_json = Some(json.into());
        self
    }

    #[must_use]
    pub fn with_config_json(mut self, json: impl Into<String>) -> Self {
        self.config_json = Some(json.into());
        self
    }
}

impl DataLoader for EmbeddedAssets {
    type Error = AssetError;

    fn load_quiz_data(&self) -> Result<QuizData, Self::Error> {
        let json = self.quiz_json.as_deref().unwrap_or(EMBEDDED_QUIZ_JSON);
        QuizData::from_json(json).map_err(|source| AssetError::Parse {
            name: "quiz.json".to_string(),
            source,
        })
    }

    fn load_config<T>(&self, config_name: &str) -> Result<T, Self::Error>
    where
        T: DeserializeOwned,
    {
        if config_name != QUIZ_CONFIG_NAME {
            return Err(AssetError::UnknownConfig(config_name.to_string()));
        }
        let json = self.config_json.as_deref().unwrap_or(EMBEDDED_CONFIG_JSON);
        serde_json::from_str(json).map_err(|source| AssetError::Parse {
            name: format!("{config_name}.json"),
            source,
        })
    }
}
