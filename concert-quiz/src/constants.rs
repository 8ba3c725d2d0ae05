//! Centralized timing and presentation constants for the quiz flow.
//!
//! Defaults mirror the kiosk build: a short exit animation between screens,
//! a confirmation pause after an answer, and a two minute idle window.
//! Deployments tune these through `QuizConfig` rather than by editing code.

// Timing defaults (milliseconds) -------------------------------------------
pub(crate) const DEFAULT_TRANSITION_DELAY_MS: u64 = 300;
pub(crate) const DEFAULT_ANSWER_DELAY_MS: u64 = 600;
pub(crate) const DEFAULT_IDLE_TIMEOUT_MS: u64 = 120_000;

// Dataset rules ------------------------------------------------------------
pub(crate) const MIN_ANSWERS_PER_QUESTION: usize = 2;
pub(crate) const COLOR_PATTERN: &str = r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$";

// Asset names --------------------------------------------------------------
pub(crate) const QUIZ_CONFIG_NAME: &str = "quiz";
pub(crate) const EMBEDDED_QUIZ_JSON: &str = include_str!("../assets/quiz.json");
pub(crate) const EMBEDDED_CONFIG_JSON: &str = include_str!("../assets/config.json");
