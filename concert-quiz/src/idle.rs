//! Inactivity deadline that returns an abandoned quiz to its start.
use crate::config::IdleConfig;
use crate::numbers::deadline_after;
use crate::state::Screen;

/// What the state machine must do when the idle deadline fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleAction {
    /// Kiosk mode: show the attract screen.
    Attract,
    /// Clear the session and go straight back to welcome.
    Reset,
}

/// Single re-armable deadline. Re-arming replaces the previous deadline.
#[derive(Debug, Clone)]
pub struct IdleController {
    config: IdleConfig,
    deadline: Option<u64>,
}

impl IdleController {
    #[must_use]
    pub const fn new(config: IdleConfig) -> Self {
        Self {
            config,
            deadline: None,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &IdleConfig {
        &self.config
    }

    #[must_use]
    pub const fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub const fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Re-arm or cancel the deadline to suit the screen now showing.
    ///
    /// Armed only while enabled and away from welcome and the attract screen.
    pub fn sync(&mut self, now: u64, screen: Screen) {
        if !self.config.enabled || screen.is_resting() {
            if self.deadline.take().is_some() {
                log::debug!("idle deadline cancelled on {screen}");
            }
            return;
        }
        self.deadline = Some(deadline_after(now, self.config.timeout_ms));
    }

    /// Fire the deadline if it has passed.
    ///
    /// The deadline is consumed either way once due; a due deadline on a
    /// resting screen yields nothing.
    pub fn poll(&mut self, now: u64, screen: Screen) -> Option<IdleAction> {
        let due = self.deadline.filter(|deadline| *deadline <= now)?;
        self.deadline = None;
        if screen.is_resting() {
            return None;
        }
        log::debug!("idle deadline {due} reached on {screen}");
        Some(if self.config.kiosk_mode {
            IdleAction::Attract
        } else {
            IdleAction::Reset
        })
    }
}
