//! Callbacks from the quiz core into the rendering layer.
use serde::{Deserialize, Serialize};

use crate::resolver::ResolvedResult;
use crate::state::Screen;

/// Implemented by whatever draws the quiz. All methods default to no-ops.
pub trait QuizObserver {
    /// A screen became active (including question to question moves).
    fn on_state_change(&mut self, _screen: Screen) {}

    /// The final answer was resolved; fires before the result screen is shown.
    fn on_result_ready(&mut self, _result: &ResolvedResult) {}

    /// The outgoing screen should start its exit animation.
    fn on_transition_started(&mut self, _from: Screen, _to: Screen) {}
}

/// Observer that ignores every callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl QuizObserver for NullObserver {}

impl<T: QuizObserver + ?Sized> QuizObserver for Box<T> {
    fn on_state_change(&mut self, screen: Screen) {
        (**self).on_state_change(screen);
    }

    fn on_result_ready(&mut self, result: &ResolvedResult) {
        (**self).on_result_ready(result);
    }

    fn on_transition_started(&mut self, from: Screen, to: Screen) {
        (**self).on_transition_started(from, to);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "event")]
pub enum QuizEvent {
    TransitionStarted { from: Screen, to: Screen },
    StateChanged { screen: Screen },
    ResultReady { result: ResolvedResult },
}

/// Observer that records every callback in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<QuizEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[QuizEvent] {
        &self.events
    }

    /// Take the recorded events, leaving the log empty.
    pub fn drain(&mut self) -> Vec<QuizEvent> {
        std::mem::take(&mut self.events)
    }

    /// Screens entered, in order.
    #[must_use]
    pub fn screens(&self) -> Vec<Screen> {
        self.events
            .iter()
            .filter_map(|event| match event {
                QuizEvent::StateChanged { screen } => Some(*screen),
                _ => None,
            })
            .collect()
    }

    #[must_use]
    pub fn last_result(&self) -> Option<&ResolvedResult> {
        self.events.iter().rev().find_map(|event| match event {
            QuizEvent::ResultReady { result } => Some(result),
            _ => None,
        })
    }
}

impl QuizObserver for EventLog {
    fn on_state_change(&mut self, screen: Screen) {
        self.events.push(QuizEvent::StateChanged { screen });
    }

    fn on_result_ready(&mut self, result: &ResolvedResult) {
        self.events.push(QuizEvent::ResultReady {
            result: result.clone(),
        });
    }

    fn on_transition_started(&mut self, from: Screen, to: Screen) {
        self.events.push(QuizEvent::TransitionStarted { from, to });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_log_records_in_order() {
        let mut log = EventLog::new();
        log.on_transition_started(Screen::Welcome, Screen::Question(0));
        log.on_state_change(Screen::Question(0));
        log.on_state_change(Screen::Question(1));

        assert_eq!(log.events().len(), 3);
        assert_eq!(log.screens(), vec![Screen::Question(0), Screen::Question(1)]);
        assert!(log.last_result().is_none());

        let drained = log.drain();
        assert_eq!(drained.len(), 3);
        assert!(log.events().is_empty());
    }

    #[test]
    fn boxed_observers_forward() {
        let mut boxed: Box<EventLog> = Box::default();
        QuizObserver::on_state_change(&mut boxed, Screen::Result);
        assert_eq!(boxed.screens(), vec![Screen::Result]);
    }

    #[test]
    fn null_observer_accepts_everything() {
        let mut null = NullObserver;
        null.on_state_change(Screen::Idle);
        null.on_transition_started(Screen::Idle, Screen::Welcome);
    }
}
