use anyhow::{Context, Result, ensure};
use concert_quiz::driver::channel;
use concert_quiz::{EventLog, QuizDriver, QuizStateMachine, Screen, UiEvent, result_summary};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

use super::ScenarioCtx;
use crate::logic::playthrough::random_answers;

/// Base delay for the compressed driver timings.
const STEP_MS: u64 = 5;

/// Play a seeded quiz through the tokio driver against real timers.
pub fn driver_playthrough(ctx: &ScenarioCtx) -> Result<String> {
    let config = ctx.config.clone().with_compressed_timings(STEP_MS);
    let picks = random_answers(&ctx.table, &mut ctx.rng());
    let machine = QuizStateMachine::new(Arc::clone(&ctx.table), config, EventLog::new())
        .context("building quiz state machine")?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("building driver runtime")?;

    let script_picks = picks.clone();
    let machine = runtime.block_on(async move {
        let (tx, rx) = channel();
        let driver = QuizDriver::new(machine);
        let step = Duration::from_millis(STEP_MS);

        let script = async move {
            tx.send(UiEvent::Start)?;
            sleep(step * 3).await;
            for pick in script_picks {
                tx.send(UiEvent::SelectAnswer(pick.answer_id))?;
                sleep(step * 4).await;
            }
            sleep(step * 3).await;
            tx.send(UiEvent::Shutdown)?;
            anyhow::Ok(())
        };

        let (machine, sent) = tokio::join!(driver.run(rx), script);
        sent.map(|()| machine)
    })?;

    ensure!(
        machine.screen() == Screen::Result,
        "driver stopped on {}",
        machine.screen()
    );
    let result = machine.result().context("driver finished without a result")?;
    ensure!(
        *result == ctx.table.resolve(&picks),
        "driver result differs from direct resolution"
    );
    ensure!(
        machine.answers().len() == picks.len(),
        "driver recorded {} of {} answers",
        machine.answers().len(),
        picks.len()
    );
    Ok(result_summary(&ctx.table, result, picks.len()).to_string())
}
