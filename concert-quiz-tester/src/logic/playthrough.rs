//! Quiz sessions driven by a simulated millisecond clock.
use anyhow::{Context, Result, bail, ensure};
use rand::Rng;
use rand::seq::SliceRandom;
use std::sync::Arc;

use concert_quiz::{
    EventLog, Handled, QuizConfig, QuizStateMachine, ResolvedResult, ScoringTable, Screen,
    UserAnswer,
};

pub struct Playthrough {
    machine: QuizStateMachine<EventLog>,
    now: u64,
}

impl Playthrough {
    pub fn new(table: Arc<ScoringTable>, config: QuizConfig) -> Result<Self> {
        let machine = QuizStateMachine::new(table, config, EventLog::new())
            .context("building quiz state machine")?;
        Ok(Self { machine, now: 0 })
    }

    pub const fn machine(&self) -> &QuizStateMachine<EventLog> {
        &self.machine
    }

    pub const fn machine_mut(&mut self) -> &mut QuizStateMachine<EventLog> {
        &mut self.machine
    }

    pub const fn now(&self) -> u64 {
        self.now
    }

    /// Move the clock forward and fire whatever fell due.
    pub fn wait(&mut self, ms: u64) {
        self.now = self.now.saturating_add(ms);
        self.machine.advance_to(self.now);
    }

    pub fn wait_transition(&mut self) {
        self.wait(self.machine.config().transition_delay_ms);
    }

    pub fn wait_answer(&mut self) {
        self.wait(self.machine.config().answer_delay_ms);
    }

    /// User activity with no other meaning.
    pub fn touch(&mut self) -> Handled {
        self.machine.interaction(self.now)
    }

    pub fn start(&mut self) -> Result<()> {
        self.touch();
        expect_applied(self.machine.start(self.now), "start")?;
        self.wait_transition();
        ensure!(
            self.machine.screen() == Screen::Question(0),
            "start landed on {}",
            self.machine.screen()
        );
        Ok(())
    }

    /// Select an answer on the current question and let the pause elapse.
    pub fn pick(&mut self, answer_id: &str) -> Result<()> {
        self.touch();
        let label = format!("select `{answer_id}` on {}", self.machine.screen());
        expect_applied(self.machine.select_answer(answer_id, self.now), &label)?;
        self.wait_answer();
        Ok(())
    }

    pub fn go_back(&mut self) -> Result<()> {
        self.touch();
        expect_applied(self.machine.go_back(self.now), "go back")
    }

    /// Let the result transition finish and hand back the result.
    pub fn finish(&mut self) -> Result<&ResolvedResult> {
        self.wait_transition();
        ensure!(
            self.machine.screen() == Screen::Result,
            "expected result screen, found {}",
            self.machine.screen()
        );
        self.machine
            .result()
            .context("result screen without a resolved result")
    }

    /// Start and answer every question in table order.
    pub fn play(&mut self, picks: &[UserAnswer]) -> Result<&ResolvedResult> {
        self.start()?;
        for pick in picks {
            let current = self
                .machine
                .current_question()
                .map(|question| question.id().to_string());
            if current.as_deref() != Some(pick.question_id.as_str()) {
                bail!(
                    "expected question `{}`, showing {}",
                    pick.question_id,
                    self.machine.screen()
                );
            }
            self.pick(&pick.answer_id)?;
        }
        self.finish()
    }
}

/// One answer per question, in table order.
pub fn first_answers(table: &ScoringTable) -> Vec<UserAnswer> {
    table
        .questions()
        .iter()
        .filter_map(|question| {
            question
                .answers()
                .first()
                .map(|answer| UserAnswer::new(question.id(), answer.id()))
        })
        .collect()
}

pub fn random_answers<R: Rng>(table: &ScoringTable, rng: &mut R) -> Vec<UserAnswer> {
    table
        .questions()
        .iter()
        .filter_map(|question| {
            question
                .answers()
                .choose(rng)
                .map(|answer| UserAnswer::new(question.id(), answer.id()))
        })
        .collect()
}

fn expect_applied(handled: Handled, what: &str) -> Result<()> {
    match handled {
        Handled::Applied => Ok(()),
        Handled::Ignored(reason) => bail!("{what} was ignored: {reason:?}"),
    }
}
