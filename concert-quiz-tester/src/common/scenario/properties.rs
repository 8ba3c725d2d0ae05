use anyhow::{Result, ensure};
use concert_quiz::{EventLog, QuizStateMachine, Screen};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

use super::ScenarioCtx;
use crate::logic::playthrough::random_answers;

const SHUFFLES: usize = 16;
const WALK_STEPS: usize = 400;

/// Resolution must not depend on the order answers were given in.
pub fn shuffle_invariance(ctx: &ScenarioCtx) -> Result<String> {
    let mut rng = ctx.rng();
    let mut answers = random_answers(&ctx.table, &mut rng);
    let baseline = ctx.table.resolve(&answers);

    answers.reverse();
    ensure!(
        ctx.table.resolve(&answers) == baseline,
        "reversed answers changed the result"
    );
    for round in 0..SHUFFLES {
        answers.shuffle(&mut rng);
        ensure!(
            ctx.table.resolve(&answers) == baseline,
            "shuffle {round} changed the result from {}",
            baseline.winner
        );
    }
    Ok(format!("{} ({})", baseline.winner, baseline.winning_score))
}

/// Random taps, backs and waits; machine invariants are checked after
/// every step.
pub fn random_walk(ctx: &ScenarioCtx) -> Result<String> {
    let mut rng = ctx.rng();
    let mut run = ctx.playthrough()?;
    let max_wait = run.machine().config().answer_delay_ms.saturating_mul(2);
    let mut completed = 0usize;

    for step in 0..WALK_STEPS {
        let now = run.now();
        let _ = run.touch();
        let screen = run.machine().screen();
        let machine = run.machine_mut();
        match screen {
            Screen::Welcome | Screen::Idle => {
                let _ = machine.start(now);
            }
            Screen::Result => {
                if machine.restart(now).is_applied() {
                    completed += 1;
                }
            }
            Screen::Question(_) => match rng.gen_range(0..20) {
                0..=13 => {
                    let choice = machine
                        .current_question()
                        .and_then(|question| question.answers().choose(&mut rng))
                        .map(|answer| answer.id().to_string());
                    if let Some(answer_id) = choice {
                        let _ = machine.select_answer(&answer_id, now);
                    }
                }
                14 | 15 => {
                    let _ = machine.go_back(now);
                }
                16 => {
                    let _ = machine.escape(now);
                }
                17 => {
                    let _ = machine.select_answer("__not_offered__", now);
                }
                18 => {
                    let _ = machine.restart(now);
                }
                _ => {}
            },
        }
        run.wait(rng.gen_range(0..=max_wait));

        check_invariants(ctx, run.machine())
            .map_err(|err| err.context(format!("after step {step} at {}ms", run.now())))?;
    }

    Ok(format!("{WALK_STEPS} steps, {completed} results"))
}

fn check_invariants(ctx: &ScenarioCtx, machine: &QuizStateMachine<EventLog>) -> Result<()> {
    let table = &ctx.table;
    let answers = machine.answers();

    ensure!(
        answers.len() <= table.question_count(),
        "{} answers for {} questions",
        answers.len(),
        table.question_count()
    );
    let mut seen = HashSet::new();
    for answer in answers {
        ensure!(
            seen.insert(answer.question_id.as_str()),
            "question `{}` answered twice",
            answer.question_id
        );
        ensure!(
            table
                .question_by_id(&answer.question_id)
                .and_then(|question| question.answer(&answer.answer_id))
                .is_some(),
            "recorded answer `{}/{}` is not in the dataset",
            answer.question_id,
            answer.answer_id
        );
    }

    ensure!(
        machine.is_transitioning() == machine.pending_screen().is_some(),
        "transition flag out of sync with pending screen"
    );
    // The outgoing screen may already see a cleared session.
    if machine.is_transitioning() {
        return Ok(());
    }
    match machine.screen() {
        Screen::Question(idx) => {
            ensure!(idx < table.question_count(), "question index {idx} out of range");
            ensure!(
                machine.session().index() == idx,
                "session index {} on {}",
                machine.session().index(),
                machine.screen()
            );
        }
        Screen::Result => {
            let result = machine.result();
            ensure!(
                result == Some(&table.resolve(answers)),
                "result screen disagrees with recorded answers"
            );
        }
        Screen::Welcome | Screen::Idle => {
            ensure!(
                !machine.idle().is_armed(),
                "idle deadline armed on {}",
                machine.screen()
            );
        }
    }
    Ok(())
}
