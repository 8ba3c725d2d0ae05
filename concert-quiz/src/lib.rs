//! Concert Quiz Engine
//!
//! Platform-agnostic core logic for the Orchestrating Community concert quiz.
//! This crate provides scoring, quiz flow and idle handling without UI or
//! platform-specific dependencies.

pub mod assets;
pub mod config;
pub mod constants;
pub mod data;
#[cfg(feature = "async")]
pub mod driver;
pub mod idle;
pub mod machine;
pub mod numbers;
pub mod observer;
pub mod resolver;
pub mod result;
pub mod session;
pub mod state;
pub mod table;

use anyhow::Context;
use std::sync::Arc;

// Re-export commonly used types
pub use assets::{AssetError, EmbeddedAssets};
pub use config::{ConfigError, EscapeAction, IdleConfig, QuizConfig};
pub use data::{AnswerDef, QuestionDef, QuizData, ResultCategory, UserAnswer};
#[cfg(feature = "async")]
pub use driver::{QuizDriver, UiEvent};
pub use idle::{IdleAction, IdleController};
pub use machine::{Progress, QuizStateMachine};
pub use observer::{EventLog, NullObserver, QuizEvent, QuizObserver};
pub use resolver::{CategoryScore, ResolvedResult, resolve};
pub use result::{ResultSummary, result_summary};
pub use session::QuizSession;
pub use state::{Handled, Ignored, Screen};
pub use table::{Answer, Question, ScoreVector, ScoringTable, TableError};

/// Trait for abstracting data loading operations
/// Platform-specific implementations should provide this
pub trait DataLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the raw quiz dataset from the platform-specific source
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be loaded.
    fn load_quiz_data(&self) -> Result<QuizData, Self::Error>;

    /// Load configuration data for a specific system
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or parsed.
    fn load_config<T>(&self, config_name: &str) -> Result<T, Self::Error>
    where
        T: serde::de::DeserializeOwned;
}

/// Builds validated tables and ready-to-run state machines
pub struct QuizEngine<L>
where
    L: DataLoader,
{
    data_loader: L,
}

impl<L> QuizEngine<L>
where
    L: DataLoader,
{
    /// Create a new engine with the provided data loader
    pub const fn new(data_loader: L) -> Self {
        Self { data_loader }
    }

    /// Load and validate the scoring table.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be loaded or fails validation.
    pub fn load_table(&self) -> anyhow::Result<ScoringTable> {
        let data = self
            .data_loader
            .load_quiz_data()
            .context("loading quiz dataset")?;
        let table = ScoringTable::from_data(data).context("validating quiz dataset")?;
        log::info!(
            "quiz dataset {} loaded: {} questions, {} result categories",
            table.fingerprint_hex(),
            table.question_count(),
            table.categories().len()
        );
        Ok(table)
    }

    /// Load the named quiz configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or is invalid.
    pub fn load_config(&self) -> anyhow::Result<QuizConfig> {
        let config: QuizConfig = self
            .data_loader
            .load_config(constants::QUIZ_CONFIG_NAME)
            .context("loading quiz configuration")?;
        config.validate().context("validating quiz configuration")?;
        Ok(config)
    }

    /// Construct a state machine from the loaded table and configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset or configuration is unusable; the
    /// quiz refuses to start on partial data.
    pub fn create_machine<O: QuizObserver>(
        &self,
        observer: O,
    ) -> anyhow::Result<QuizStateMachine<O>> {
        let table = Arc::new(self.load_table()?);
        let config = self.load_config()?;
        Ok(QuizStateMachine::new(table, config, observer)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[derive(Clone, Copy, Default)]
    struct FixtureLoader;

    impl DataLoader for FixtureLoader {
        type Error = Infallible;

        fn load_quiz_data(&self) -> Result<QuizData, Self::Error> {
            Ok(QuizData::empty())
        }

        fn load_config<T>(&self, _config_name: &str) -> Result<T, Self::Error>
        where
            T: serde::de::DeserializeOwned,
        {
            Ok(serde_json::from_str("{}").unwrap())
        }
    }

    #[test]
    fn engine_builds_machine_from_bundled_assets() {
        let engine = QuizEngine::new(EmbeddedAssets::new());
        let machine = engine.create_machine(EventLog::new()).unwrap();
        assert_eq!(machine.screen(), Screen::Welcome);
        assert_eq!(machine.table().question_count(), 8);
        assert_eq!(machine.config(), &QuizConfig::default());
    }

    #[test]
    fn engine_refuses_empty_dataset() {
        let engine = QuizEngine::new(FixtureLoader);
        let err = engine.create_machine(NullObserver).unwrap_err();
        assert!(format!("{err:#}").contains("no result categories"));
    }

    #[test]
    fn engine_rejects_invalid_config() {
        let engine = QuizEngine::new(
            EmbeddedAssets::new().with_config_json(r#"{ "idle": { "timeout_ms": 0 } }"#),
        );
        let err = engine.load_config().unwrap_err();
        assert!(format!("{err:#}").contains("idle timeout must be positive"));
    }
}
