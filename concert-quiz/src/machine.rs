//! Quiz progression state machine.
//!
//! The machine never blocks or spawns. Every delay (screen exit animation,
//! answer confirmation pause, idle window) is held as a deadline against the
//! host's monotonic millisecond clock; the host feeds the clock back through
//! [`QuizStateMachine::advance_to`] and may use
//! [`QuizStateMachine::next_deadline`] to schedule a single wakeup.
use std::sync::Arc;

use crate::config::{ConfigError, EscapeAction, QuizConfig};
use crate::data::UserAnswer;
use crate::idle::{IdleAction, IdleController};
use crate::numbers::{deadline_after, ratio_f32};
use crate::observer::{NullObserver, QuizObserver};
use crate::resolver::ResolvedResult;
use crate::result::result_summary;
use crate::session::QuizSession;
use crate::state::{Handled, Ignored, Screen};
use crate::table::{Question, ScoringTable};

/// One-based position within the question list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub position: usize,
    pub total: usize,
}

impl Progress {
    #[must_use]
    pub fn fraction(self) -> f32 {
        ratio_f32(self.position, self.total)
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.position, self.total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingTransition {
    to: Screen,
    due: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingAdvance {
    from: usize,
    due: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Timer {
    Transition,
    Advance,
    Idle,
}

pub struct QuizStateMachine<O: QuizObserver = NullObserver> {
    table: Arc<ScoringTable>,
    config: QuizConfig,
    session: QuizSession,
    screen: Screen,
    transition: Option<PendingTransition>,
    advance: Option<PendingAdvance>,
    idle: IdleController,
    result: Option<ResolvedResult>,
    observer: O,
}

impl<O: QuizObserver> std::fmt::Debug for QuizStateMachine<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizStateMachine")
            .field("screen", &self.screen)
            .field("session", &self.session)
            .field("transition", &self.transition)
            .field("advance", &self.advance)
            .field("idle", &self.idle)
            .finish_non_exhaustive()
    }
}

impl<O: QuizObserver> QuizStateMachine<O> {
    /// Build a machine sitting on the welcome screen.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration fails validation.
    pub fn new(
        table: Arc<ScoringTable>,
        config: QuizConfig,
        observer: O,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let idle = IdleController::new(config.idle.clone());
        Ok(Self {
            table,
            config,
            session: QuizSession::new(),
            screen: Screen::Welcome,
            transition: None,
            advance: None,
            idle,
            result: None,
            observer,
        })
    }

    // Queries ---------------------------------------------------------------

    #[must_use]
    pub fn table(&self) -> &ScoringTable {
        &self.table
    }

    #[must_use]
    pub const fn config(&self) -> &QuizConfig {
        &self.config
    }

    #[must_use]
    pub const fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub const fn is_transitioning(&self) -> bool {
        self.session.is_transitioning()
    }

    /// Screen being transitioned to, if a transition is in flight.
    #[must_use]
    pub fn pending_screen(&self) -> Option<Screen> {
        self.transition.map(|t| t.to)
    }

    #[must_use]
    pub const fn has_pending_advance(&self) -> bool {
        self.advance.is_some()
    }

    #[must_use]
    pub const fn idle(&self) -> &IdleController {
        &self.idle
    }

    #[must_use]
    pub fn answers(&self) -> &[UserAnswer] {
        self.session.answers()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.screen
            .question_index()
            .and_then(|idx| self.table.question(idx))
    }

    /// Answer recorded for the current question, shown as pre-selected.
    #[must_use]
    pub fn selected_answer(&self) -> Option<&str> {
        self.current_question()
            .and_then(|question| self.session.selected_for(question.id()))
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            position: self.session.index() + 1,
            total: self.table.question_count(),
        }
    }

    /// `(index + 1) / question_count`
    #[must_use]
    pub fn progress_fraction(&self) -> f32 {
        self.progress().fraction()
    }

    #[must_use]
    pub const fn can_go_back(&self) -> bool {
        matches!(self.screen, Screen::Question(idx) if idx > 0)
    }

    #[must_use]
    pub const fn result(&self) -> Option<&ResolvedResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub const fn observer(&self) -> &O {
        &self.observer
    }

    pub const fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    #[must_use]
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Earliest pending deadline across all timers.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        [
            self.transition.map(|t| t.due),
            self.advance.map(|a| a.due),
            self.idle.deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    // UI requests -----------------------------------------------------------

    /// Welcome -> first question, with an empty answer history.
    pub fn start(&mut self, now: u64) -> Handled {
        if self.is_transitioning() {
            return Handled::Ignored(Ignored::Transitioning);
        }
        if !self.screen.is_welcome() {
            return Handled::Ignored(Ignored::WrongScreen);
        }
        self.clear_session();
        log::info!(
            "quiz started with {} questions",
            self.table.question_count()
        );
        self.begin_transition(Screen::Question(0), now);
        Handled::Applied
    }

    /// Record `answer_id` for the current question and arm the advance delay.
    ///
    /// Selecting again before the delay elapses replaces the answer and
    /// restarts the delay.
    pub fn select_answer(&mut self, answer_id: &str, now: u64) -> Handled {
        if self.is_transitioning() {
            return Handled::Ignored(Ignored::Transitioning);
        }
        let Screen::Question(idx) = self.screen else {
            return Handled::Ignored(Ignored::WrongScreen);
        };
        let Some(question) = self.table.question(idx) else {
            return Handled::Ignored(Ignored::WrongScreen);
        };
        if question.answer(answer_id).is_none() {
            return Handled::Ignored(Ignored::UnknownAnswer);
        }

        self.session
            .record(UserAnswer::new(question.id(), answer_id));
        self.advance = Some(PendingAdvance {
            from: idx,
            due: deadline_after(now, self.config.answer_delay_ms),
        });
        log::debug!("recorded {}={answer_id}", question.id());
        Handled::Applied
    }

    /// Step back one question, cancelling any pending advance.
    pub fn go_back(&mut self, _now: u64) -> Handled {
        if self.is_transitioning() {
            return Handled::Ignored(Ignored::Transitioning);
        }
        let Screen::Question(idx) = self.screen else {
            return Handled::Ignored(Ignored::WrongScreen);
        };
        if idx == 0 {
            return Handled::Ignored(Ignored::AtFirstQuestion);
        }
        self.advance = None;
        self.show_question(idx - 1);
        Handled::Applied
    }

    /// Return to welcome from anywhere, clearing the session.
    pub fn restart(&mut self, now: u64) -> Handled {
        self.return_to_welcome(now)
    }

    /// Same contract as [`QuizStateMachine::restart`]; used by the idle
    /// timeout and the explicit "start over" action.
    pub fn reset_to_start(&mut self, now: u64) -> Handled {
        self.return_to_welcome(now)
    }

    /// Keyboard escape.
    pub fn escape(&mut self, now: u64) -> Handled {
        match (self.config.escape_action, self.screen) {
            (EscapeAction::GoBack, Screen::Question(_)) => self.go_back(now),
            (EscapeAction::StartOver, Screen::Question(_) | Screen::Result) => {
                self.reset_to_start(now)
            }
            _ => Handled::Ignored(Ignored::WrongScreen),
        }
    }

    /// Any pointer, key or touch activity.
    ///
    /// Re-arms the idle deadline, or leaves the attract screen for welcome.
    pub fn interaction(&mut self, now: u64) -> Handled {
        if !self.idle.config().enabled {
            return Handled::Ignored(Ignored::IdleDisabled);
        }
        if self.screen == Screen::Idle {
            if self.is_transitioning() {
                return Handled::Ignored(Ignored::Transitioning);
            }
            self.begin_transition(Screen::Welcome, now);
            return Handled::Applied;
        }
        self.idle.sync(now, self.screen);
        Handled::Applied
    }

    /// Fire every deadline due at or before `now`, earliest first.
    pub fn advance_to(&mut self, now: u64) {
        while let Some((timer, due)) = self.next_due(now) {
            match timer {
                Timer::Transition => self.complete_transition(due),
                Timer::Advance => self.fire_advance(due),
                Timer::Idle => self.fire_idle(due),
            }
        }
    }

    // Internals -------------------------------------------------------------

    fn next_due(&self, now: u64) -> Option<(Timer, u64)> {
        [
            self.transition.map(|t| (Timer::Transition, t.due)),
            self.advance.map(|a| (Timer::Advance, a.due)),
            self.idle.deadline().map(|due| (Timer::Idle, due)),
        ]
        .into_iter()
        .flatten()
        .filter(|(_, due)| *due <= now)
        .min_by_key(|(_, due)| *due)
    }

    fn clear_session(&mut self) {
        self.session.clear();
        self.result = None;
        self.advance = None;
    }

    fn return_to_welcome(&mut self, now: u64) -> Handled {
        if self.is_transitioning() {
            return Handled::Ignored(Ignored::Transitioning);
        }
        self.clear_session();
        if !self.screen.is_welcome() {
            self.begin_transition(Screen::Welcome, now);
        }
        Handled::Applied
    }

    fn begin_transition(&mut self, to: Screen, now: u64) {
        let from = self.screen;
        self.session.set_transitioning(true);
        self.transition = Some(PendingTransition {
            to,
            due: deadline_after(now, self.config.transition_delay_ms),
        });
        if to.is_resting() {
            self.idle.cancel();
        }
        log::debug!("transition {from} -> {to} started at {now}");
        self.observer.on_transition_started(from, to);
    }

    fn complete_transition(&mut self, due: u64) {
        let Some(pending) = self.transition.take() else {
            return;
        };
        if let Screen::Question(idx) = pending.to {
            self.session.set_index(idx, self.table.question_count());
        }
        self.screen = pending.to;
        self.session.set_transitioning(false);
        log::debug!("entered {} at {due}", pending.to);
        self.observer.on_state_change(pending.to);
        self.idle.sync(due, pending.to);
    }

    fn show_question(&mut self, idx: usize) {
        self.session.set_index(idx, self.table.question_count());
        self.screen = Screen::Question(self.session.index());
        self.observer.on_state_change(self.screen);
    }

    fn fire_advance(&mut self, due: u64) {
        let Some(pending) = self.advance.take() else {
            return;
        };
        if self.screen != Screen::Question(pending.from) || self.is_transitioning() {
            log::debug!("dropping stale advance from question {}", pending.from);
            return;
        }
        if pending.from + 1 < self.table.question_count() {
            self.show_question(pending.from + 1);
        } else {
            self.show_result(due);
        }
    }

    fn show_result(&mut self, now: u64) {
        let resolved = self.table.resolve(self.session.answers());
        if resolved.unmatched > 0 {
            log::warn!(
                "{} recorded answers did not match dataset {}",
                resolved.unmatched,
                self.table.fingerprint_hex()
            );
        }
        let summary = result_summary(&self.table, &resolved, self.session.answers().len());
        log::info!("quiz result: {summary}");
        self.observer.on_result_ready(&resolved);
        self.result = Some(resolved);
        self.begin_transition(Screen::Result, now);
    }

    fn fire_idle(&mut self, due: u64) {
        let Some(action) = self.idle.poll(due, self.screen) else {
            return;
        };
        if self.is_transitioning() {
            return;
        }
        match action {
            IdleAction::Attract => {
                if self.idle.config().clear_on_attract {
                    self.clear_session();
                } else {
                    self.advance = None;
                }
                self.begin_transition(Screen::Idle, due);
            }
            IdleAction::Reset => {
                self.clear_session();
                self.begin_transition(Screen::Welcome, due);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IdleConfig;
    use crate::observer::{EventLog, QuizEvent};
    use crate::table::tests::small_data;

    const STEP: u64 = 300;
    const PAUSE: u64 = 600;

    fn small_machine(config: QuizConfig) -> QuizStateMachine<EventLog> {
        let table = Arc::new(ScoringTable::from_data(small_data()).unwrap());
        QuizStateMachine::new(table, config, EventLog::new()).unwrap()
    }

    fn started(config: QuizConfig) -> QuizStateMachine<EventLog> {
        let mut machine = small_machine(config);
        assert_eq!(machine.start(0), Handled::Applied);
        machine.advance_to(STEP);
        assert_eq!(machine.screen(), Screen::Question(0));
        machine
    }

    #[test]
    fn invalid_config_is_rejected() {
        let table = Arc::new(ScoringTable::from_data(small_data()).unwrap());
        let mut config = QuizConfig::default();
        config.idle.timeout_ms = 0;
        assert!(QuizStateMachine::new(table, config, NullObserver).is_err());
    }

    #[test]
    fn start_waits_for_transition() {
        let mut machine = small_machine(QuizConfig::default());
        machine.start(1_000);
        assert!(machine.is_transitioning());
        assert_eq!(machine.screen(), Screen::Welcome);
        assert_eq!(machine.pending_screen(), Some(Screen::Question(0)));
        assert_eq!(machine.next_deadline(), Some(1_300));

        machine.advance_to(1_299);
        assert_eq!(machine.screen(), Screen::Welcome);
        machine.advance_to(1_300);
        assert_eq!(machine.screen(), Screen::Question(0));
        assert!(!machine.is_transitioning());
        assert_eq!(machine.current_question().unwrap().id(), "q1");
        assert_eq!(
            machine.observer().events()[0],
            QuizEvent::TransitionStarted {
                from: Screen::Welcome,
                to: Screen::Question(0)
            }
        );
    }

    #[test]
    fn requests_during_transition_are_dropped() {
        let mut machine = small_machine(QuizConfig::default());
        machine.start(0);
        assert_eq!(machine.start(10), Handled::Ignored(Ignored::Transitioning));
        assert_eq!(machine.restart(10), Handled::Ignored(Ignored::Transitioning));
        assert_eq!(
            machine.select_answer("x", 10),
            Handled::Ignored(Ignored::Transitioning)
        );
        machine.advance_to(STEP);
        let starts = machine
            .observer()
            .events()
            .iter()
            .filter(|e| matches!(e, QuizEvent::TransitionStarted { .. }))
            .count();
        assert_eq!(starts, 1);
    }

    #[test]
    fn answer_advances_after_pause() {
        let mut machine = started(QuizConfig::default());
        assert_eq!(machine.select_answer("x", 400), Handled::Applied);
        assert!(machine.has_pending_advance());
        machine.advance_to(400 + PAUSE - 1);
        assert_eq!(machine.screen(), Screen::Question(0));
        machine.advance_to(400 + PAUSE);
        assert_eq!(machine.screen(), Screen::Question(1));
        assert_eq!(machine.progress().to_string(), "2 of 2");
        assert!((machine.progress_fraction() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn last_answer_resolves_and_shows_result() {
        let mut machine = started(QuizConfig::default());
        machine.select_answer("x", 400);
        machine.advance_to(1_000);
        machine.select_answer("y", 1_100);
        machine.advance_to(1_700);
        assert!(machine.is_transitioning());
        assert_eq!(machine.result().unwrap().winner, "b");
        machine.advance_to(2_000);
        assert_eq!(machine.screen(), Screen::Result);

        let log = machine.observer();
        assert_eq!(log.last_result().unwrap().winning_score, 5);
        assert_eq!(
            log.screens(),
            vec![Screen::Question(0), Screen::Question(1), Screen::Result]
        );
    }

    #[test]
    fn whole_quiz_in_one_advance_call() {
        let mut machine = small_machine(QuizConfig::default());
        machine.start(0);
        machine.advance_to(STEP);
        machine.select_answer("x", STEP);
        machine.advance_to(STEP + PAUSE);
        machine.select_answer("x", STEP + PAUSE);
        machine.advance_to(10_000);
        assert_eq!(machine.screen(), Screen::Result);
        assert_eq!(machine.result().unwrap().winner, "a");
    }

    #[test]
    fn reselecting_rearms_without_double_advance() {
        let mut machine = started(QuizConfig::default());
        machine.select_answer("x", 400);
        machine.select_answer("y", 900);
        machine.advance_to(1_000);
        assert_eq!(machine.screen(), Screen::Question(0));
        machine.advance_to(1_500);
        assert_eq!(machine.screen(), Screen::Question(1));
        assert_eq!(machine.answers(), &[UserAnswer::new("q1", "y")]);
        machine.advance_to(5_000);
        assert_eq!(machine.screen(), Screen::Question(1));
    }

    #[test]
    fn unknown_answer_and_wrong_screen_are_noops() {
        let mut machine = small_machine(QuizConfig::default());
        assert_eq!(
            machine.select_answer("x", 0),
            Handled::Ignored(Ignored::WrongScreen)
        );
        assert_eq!(machine.go_back(0), Handled::Ignored(Ignored::WrongScreen));
        machine.start(0);
        machine.advance_to(STEP);
        assert_eq!(
            machine.select_answer("nope", STEP),
            Handled::Ignored(Ignored::UnknownAnswer)
        );
        assert!(machine.answers().is_empty());
        assert_eq!(
            machine.go_back(STEP),
            Handled::Ignored(Ignored::AtFirstQuestion)
        );
    }

    #[test]
    fn go_back_resurfaces_selection_and_cancels_advance() {
        let mut machine = started(QuizConfig::default());
        machine.select_answer("y", 400);
        machine.advance_to(1_000);
        assert!(machine.can_go_back());
        machine.select_answer("x", 1_100);
        assert_eq!(machine.go_back(1_200), Handled::Applied);
        assert!(!machine.has_pending_advance());
        assert_eq!(machine.screen(), Screen::Question(0));
        assert_eq!(machine.selected_answer(), Some("y"));
        machine.advance_to(5_000);
        assert_eq!(machine.screen(), Screen::Question(0));
        assert_eq!(machine.answers().len(), 2);
    }

    #[test]
    fn restart_clears_and_cancels_pending_advance() {
        let mut machine = started(QuizConfig::default());
        machine.select_answer("x", 400);
        assert_eq!(machine.restart(500), Handled::Applied);
        assert!(machine.answers().is_empty());
        assert!(!machine.has_pending_advance());
        machine.advance_to(5_000);
        assert_eq!(machine.screen(), Screen::Welcome);
        assert_eq!(machine.progress().position, 1);
    }

    #[test]
    fn restart_on_welcome_clears_without_transition() {
        let mut machine = small_machine(QuizConfig::default());
        assert_eq!(machine.restart(0), Handled::Applied);
        assert!(!machine.is_transitioning());
        assert!(machine.observer().events().is_empty());
    }

    #[test]
    fn escape_goes_back_by_default() {
        let mut machine = started(QuizConfig::default());
        machine.select_answer("x", 400);
        machine.advance_to(1_000);
        assert_eq!(machine.escape(1_100), Handled::Applied);
        assert_eq!(machine.screen(), Screen::Question(0));
    }

    #[test]
    fn escape_can_start_over() {
        let config = QuizConfig {
            escape_action: EscapeAction::StartOver,
            ..QuizConfig::default()
        };
        let mut machine = started(config);
        machine.select_answer("x", 400);
        assert_eq!(machine.escape(500), Handled::Applied);
        assert_eq!(machine.pending_screen(), Some(Screen::Welcome));
        assert!(machine.answers().is_empty());
        machine.advance_to(800);
        assert_eq!(machine.escape(900), Handled::Ignored(Ignored::WrongScreen));
    }

    #[test]
    fn idle_timeout_resets_to_welcome() {
        let mut machine = started(QuizConfig::default());
        assert_eq!(machine.idle().deadline(), Some(STEP + 120_000));
        machine.select_answer("x", 400);
        machine.advance_to(1_000);
        machine.advance_to(STEP + 120_000);
        assert_eq!(machine.pending_screen(), Some(Screen::Welcome));
        assert!(machine.answers().is_empty());
        machine.advance_to(STEP + 120_000 + STEP);
        assert_eq!(machine.screen(), Screen::Welcome);
        assert!(!machine.idle().is_armed());
        assert_eq!(machine.next_deadline(), None);
    }

    #[test]
    fn interaction_pushes_idle_deadline() {
        let mut machine = started(QuizConfig::default());
        assert_eq!(machine.interaction(60_000), Handled::Applied);
        machine.advance_to(STEP + 120_000);
        assert_eq!(machine.screen(), Screen::Question(0));
        machine.advance_to(180_000);
        assert_eq!(machine.pending_screen(), Some(Screen::Welcome));
    }

    #[test]
    fn kiosk_mode_shows_attract_then_welcome() {
        let mut machine = started(QuizConfig::kiosk());
        machine.select_answer("x", 400);
        machine.advance_to(1_000);
        machine.advance_to(STEP + 120_000 + STEP);
        assert_eq!(machine.screen(), Screen::Idle);
        assert!(machine.answers().is_empty());
        assert!(!machine.idle().is_armed());

        assert_eq!(machine.interaction(200_000), Handled::Applied);
        machine.advance_to(200_000 + STEP);
        assert_eq!(machine.screen(), Screen::Welcome);
    }

    #[test]
    fn kiosk_attract_can_keep_history() {
        let config = QuizConfig {
            idle: IdleConfig {
                kiosk_mode: true,
                clear_on_attract: false,
                ..IdleConfig::default()
            },
            ..QuizConfig::default()
        };
        let mut machine = started(config);
        machine.select_answer("x", 400);
        machine.advance_to(STEP + 120_000 + STEP);
        assert_eq!(machine.screen(), Screen::Idle);
        assert_eq!(machine.answers().len(), 1);
        assert!(!machine.has_pending_advance());

        let wake = STEP + 120_000 + STEP + 50;
        assert_eq!(machine.interaction(wake), Handled::Applied);
        machine.advance_to(wake + STEP);
        assert_eq!(machine.screen(), Screen::Welcome);
        assert_eq!(machine.answers().len(), 1);
        assert_eq!(machine.start(wake + STEP + 10), Handled::Applied);
        assert!(machine.answers().is_empty());
    }

    #[test]
    fn idle_reset_from_result_clears_result() {
        let mut machine = started(QuizConfig::default());
        machine.select_answer("x", 400);
        machine.advance_to(1_000);
        machine.select_answer("y", 1_000);
        machine.advance_to(1_900);
        assert_eq!(machine.screen(), Screen::Result);
        let deadline = machine.idle().deadline().unwrap();
        assert_eq!(deadline, 1_900 + 120_000);

        machine.advance_to(deadline);
        assert!(machine.result().is_none());
        assert!(machine.answers().is_empty());
        assert_eq!(machine.pending_screen(), Some(Screen::Welcome));
        assert_eq!(
            machine.observer().events().last(),
            Some(&QuizEvent::TransitionStarted {
                from: Screen::Result,
                to: Screen::Welcome
            })
        );
        machine.advance_to(deadline + STEP);
        assert_eq!(machine.screen(), Screen::Welcome);
        assert_eq!(machine.next_deadline(), None);
    }

    #[test]
    fn disabled_idle_never_fires() {
        let config = QuizConfig {
            idle: IdleConfig::disabled(),
            ..QuizConfig::default()
        };
        let mut machine = started(config);
        assert_eq!(
            machine.interaction(500),
            Handled::Ignored(Ignored::IdleDisabled)
        );
        machine.advance_to(10_000_000);
        assert_eq!(machine.screen(), Screen::Question(0));
    }

    #[test]
    fn result_restart_returns_to_welcome() {
        let mut machine = started(QuizConfig::default());
        machine.select_answer("x", 400);
        machine.advance_to(1_000);
        machine.select_answer("x", 1_000);
        machine.advance_to(2_000);
        assert_eq!(machine.screen(), Screen::Result);
        assert_eq!(machine.restart(2_100), Handled::Applied);
        assert!(machine.result().is_none());
        machine.advance_to(2_400);
        assert_eq!(machine.screen(), Screen::Welcome);
        assert_eq!(machine.start(2_500), Handled::Applied);
    }
}
