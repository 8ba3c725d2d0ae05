//! Tokio driver that runs a [`QuizStateMachine`] against real timers.
//!
//! The driver owns the machine, receives UI events over a channel and
//! sleeps until the machine's next deadline. It is meant for a
//! current-thread runtime next to the rendering layer.
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::time::{Instant, sleep_until};

use crate::machine::QuizStateMachine;
use crate::observer::QuizObserver;
use crate::state::Handled;

/// Requests coming from the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "answer")]
pub enum UiEvent {
    Start,
    SelectAnswer(String),
    GoBack,
    Restart,
    ResetToStart,
    Escape,
    /// Pointer, key or touch activity with no other meaning.
    Interaction,
    Shutdown,
}

#[must_use]
pub fn channel() -> (UnboundedSender<UiEvent>, UnboundedReceiver<UiEvent>) {
    unbounded_channel()
}

pub struct QuizDriver<O: QuizObserver> {
    machine: QuizStateMachine<O>,
    origin: Instant,
}

impl<O: QuizObserver> QuizDriver<O> {
    /// Wrap a machine; its clock starts at zero now.
    #[must_use]
    pub fn new(machine: QuizStateMachine<O>) -> Self {
        Self {
            machine,
            origin: Instant::now(),
        }
    }

    #[must_use]
    pub const fn machine(&self) -> &QuizStateMachine<O> {
        &self.machine
    }

    /// Milliseconds since the driver was created.
    #[must_use]
    pub fn now(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Apply one event at the current time.
    ///
    /// Every user-originated event also counts as idle activity.
    pub fn dispatch(&mut self, event: &UiEvent) -> Handled {
        let now = self.now();
        self.machine.advance_to(now);
        if matches!(event, UiEvent::Shutdown) {
            return Handled::Applied;
        }
        let ping = self.machine.interaction(now);
        match event {
            UiEvent::Start => self.machine.start(now),
            UiEvent::SelectAnswer(answer_id) => self.machine.select_answer(answer_id, now),
            UiEvent::GoBack => self.machine.go_back(now),
            UiEvent::Restart => self.machine.restart(now),
            UiEvent::ResetToStart => self.machine.reset_to_start(now),
            UiEvent::Escape => self.machine.escape(now),
            UiEvent::Interaction | UiEvent::Shutdown => ping,
        }
    }

    /// Run until [`UiEvent::Shutdown`] arrives or every sender is dropped,
    /// then hand the machine back.
    pub async fn run(mut self, mut events: UnboundedReceiver<UiEvent>) -> QuizStateMachine<O> {
        loop {
            let now = self.now();
            self.machine.advance_to(now);
            let wake = self
                .machine
                .next_deadline()
                .and_then(|due| self.origin.checked_add(Duration::from_millis(due)));

            tokio::select! {
                event = events.recv() => match event {
                    None | Some(UiEvent::Shutdown) => break,
                    Some(event) => {
                        let handled = self.dispatch(&event);
                        log::debug!("{event:?} -> {handled:?}");
                    }
                },
                () = sleep_until_deadline(wake) => {}
            }
        }
        let now = self.now();
        self.machine.advance_to(now);
        self.machine
    }
}

async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
