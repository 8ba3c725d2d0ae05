use serde::{Deserialize, Serialize};

/// Screens the quiz can be showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "screen", content = "index")]
pub enum Screen {
    Welcome,
    Question(usize),
    Result,
    /// Attract loop shown after prolonged inactivity in kiosk mode.
    Idle,
}

impl Screen {
    #[must_use]
    pub const fn is_welcome(self) -> bool {
        matches!(self, Self::Welcome)
    }

    #[must_use]
    pub const fn question_index(self) -> Option<usize> {
        match self {
            Self::Question(idx) => Some(idx),
            _ => None,
        }
    }

    /// Screens that have nothing for the idle timer to undo.
    #[must_use]
    pub const fn is_resting(self) -> bool {
        matches!(self, Self::Welcome | Self::Idle)
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Welcome => write!(f, "welcome"),
            Self::Question(idx) => write!(f, "question[{idx}]"),
            Self::Result => write!(f, "result"),
            Self::Idle => write!(f, "idle"),
        }
    }
}

/// Why a request was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ignored {
    /// A screen transition is still playing.
    Transitioning,
    /// The request does not apply to the current screen.
    WrongScreen,
    /// The answer id is not offered by the current question.
    UnknownAnswer,
    /// Already on the first question.
    AtFirstQuestion,
    /// Idle handling is switched off.
    IdleDisabled,
}

/// Result of feeding one UI request to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Handled {
    Applied,
    Ignored(Ignored),
}

impl Handled {
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}
