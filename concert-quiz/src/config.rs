//! Tunable timings and kiosk behavior.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_ANSWER_DELAY_MS, DEFAULT_IDLE_TIMEOUT_MS, DEFAULT_TRANSITION_DELAY_MS,
};

/// What the escape key does while a quiz is underway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscapeAction {
    /// Step back one question; ignored elsewhere.
    #[default]
    GoBack,
    /// Abandon the quiz from a question or the result screen.
    StartOver,
}

/// Errors raised when quiz configuration invariants are violated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("idle timeout must be positive when idle handling is enabled")]
    ZeroIdleTimeout,
    #[error("idle timeout {timeout_ms}ms must exceed the transition delay {transition_ms}ms")]
    IdleShorterThanTransition { timeout_ms: u64, transition_ms: u64 },
}

/// Inactivity handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdleConfig {
    #[serde(default = "IdleConfig::default_enabled")]
    pub enabled: bool,
    #[serde(default = "IdleConfig::default_timeout_ms")]
    pub timeout_ms: u64,
    /// Show the attract screen instead of silently resetting.
    #[serde(default)]
    pub kiosk_mode: bool,
    /// Drop the answer history when the attract screen takes over.
    ///
    /// When false, the kept history is still reported on welcome after the
    /// attract screen is dismissed, until the next `start` clears it.
    #[serde(default = "IdleConfig::default_clear_on_attract")]
    pub clear_on_attract: bool,
}

impl IdleConfig {
    const fn default_enabled() -> bool {
        true
    }

    const fn default_timeout_ms() -> u64 {
        DEFAULT_IDLE_TIMEOUT_MS
    }

    const fn default_clear_on_attract() -> bool {
        true
    }

    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            enabled: false,
            timeout_ms: DEFAULT_IDLE_TIMEOUT_MS,
            kiosk_mode: false,
            clear_on_attract: true,
        }
    }
}

impl Default for IdleConfig {
    fn default() -> Self {
        Self {
            enabled: Self::default_enabled(),
            timeout_ms: Self::default_timeout_ms(),
            kiosk_mode: false,
            clear_on_attract: Self::default_clear_on_attract(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    #[serde(default = "QuizConfig::default_transition_delay_ms")]
    pub transition_delay_ms: u64,
    #[serde(default = "QuizConfig::default_answer_delay_ms")]
    pub answer_delay_ms: u64,
    #[serde(default)]
    pub escape_action: EscapeAction,
    #[serde(default)]
    pub idle: IdleConfig,
}

impl QuizConfig {
    const fn default_transition_delay_ms() -> u64 {
        DEFAULT_TRANSITION_DELAY_MS
    }

    const fn default_answer_delay_ms() -> u64 {
        DEFAULT_ANSWER_DELAY_MS
    }

    /// Kiosk preset: attract screen after inactivity.
    #[must_use]
    pub fn kiosk() -> Self {
        Self {
            idle: IdleConfig {
                kiosk_mode: true,
                ..IdleConfig::default()
            },
            ..Self::default()
        }
    }

    /// Scale every delay down to `step_ms`, keeping the idle window the
    /// longest. Used by automated runs that drive real timers.
    #[must_use]
    pub fn with_compressed_timings(mut self, step_ms: u64) -> Self {
        self.transition_delay_ms = step_ms;
        self.answer_delay_ms = step_ms.saturating_mul(2);
        self.idle.timeout_ms = step_ms.saturating_mul(40);
        self
    }

    /// Check the configuration's internal consistency.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the idle window cannot fire correctly.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if !self.idle.enabled {
            return Ok(());
        }
        if self.idle.timeout_ms == 0 {
            return Err(ConfigError::ZeroIdleTimeout);
        }
        if self.idle.timeout_ms <= self.transition_delay_ms {
            return Err(ConfigError::IdleShorterThanTransition {
                timeout_ms: self.idle.timeout_ms,
                transition_ms: self.transition_delay_ms,
            });
        }
        Ok(())
    }

    /// Parse a configuration from JSON; missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            transition_delay_ms: Self::default_transition_delay_ms(),
            answer_delay_ms: Self::default_answer_delay_ms(),
            escape_action: EscapeAction::default(),
            idle: IdleConfig::default(),
        }
    }
}
