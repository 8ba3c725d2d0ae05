use anyhow::{Context, Result, ensure};
use concert_quiz::{Handled, QuizConfig, Screen};

use super::ScenarioCtx;
use crate::logic::Playthrough;
use crate::logic::playthrough::first_answers;

fn idle_config(ctx: &ScenarioCtx, kiosk_mode: bool) -> QuizConfig {
    let mut config = ctx.config.clone();
    config.idle.enabled = true;
    config.idle.kiosk_mode = kiosk_mode;
    config
}

/// Answer one question, then walk the clock up to the idle deadline.
fn abandon_mid_quiz(ctx: &ScenarioCtx, run: &mut Playthrough) -> Result<()> {
    run.start()?;
    let pick = first_answers(&ctx.table)
        .into_iter()
        .next()
        .context("dataset has no questions")?;
    run.pick(&pick.answer_id)?;
    run.wait_transition();
    ensure!(
        !run.machine().answers().is_empty(),
        "the answer was not recorded"
    );

    let due = run
        .machine()
        .idle()
        .deadline()
        .context("idle deadline not armed mid-quiz")?;
    run.wait(due.saturating_sub(run.now()).saturating_sub(1));
    ensure!(
        !run.machine().screen().is_resting() && !run.machine().is_transitioning(),
        "idle fired before its deadline"
    );
    run.wait(1);
    run.wait_transition();
    Ok(())
}

pub fn idle_reset(ctx: &ScenarioCtx) -> Result<String> {
    let config = idle_config(ctx, false);
    let timeout = config.idle.timeout_ms;
    let mut run = ctx.playthrough_with(config)?;
    abandon_mid_quiz(ctx, &mut run)?;

    let machine = run.machine();
    ensure!(
        machine.screen() == Screen::Welcome,
        "idle timeout left the quiz on {}",
        machine.screen()
    );
    ensure!(machine.answers().is_empty(), "idle reset kept answers");
    ensure!(
        !machine.observer().screens().contains(&Screen::Idle),
        "silent reset showed the attract screen"
    );
    ensure!(
        machine.next_deadline().is_none(),
        "welcome screen still has a pending deadline"
    );
    Ok(format!("reset after {timeout}ms"))
}

pub fn kiosk_attract(ctx: &ScenarioCtx) -> Result<String> {
    let config = idle_config(ctx, true);
    let clears = config.idle.clear_on_attract;
    let mut run = ctx.playthrough_with(config)?;
    abandon_mid_quiz(ctx, &mut run)?;

    ensure!(
        run.machine().screen() == Screen::Idle,
        "kiosk timeout left the quiz on {}",
        run.machine().screen()
    );
    ensure!(
        run.machine().answers().is_empty() == clears,
        "attract screen history does not match clear_on_attract={clears}"
    );

    ensure!(
        run.touch() == Handled::Applied,
        "touching the attract screen was ignored"
    );
    run.wait_transition();
    ensure!(
        run.machine().screen() == Screen::Welcome,
        "touch on attract screen went to {}",
        run.machine().screen()
    );

    run.start()?;
    ensure!(
        run.machine().answers().is_empty(),
        "new session inherited answers"
    );
    Ok(format!("attract then welcome (cleared: {clears})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use concert_quiz::{IdleConfig, ScoringTable};
    use std::sync::Arc;

    fn ctx(config: QuizConfig) -> ScenarioCtx {
        ScenarioCtx {
            table: Arc::new(ScoringTable::load_default().unwrap()),
            config,
            seed: 1,
        }
    }

    #[test]
    fn idle_reset_enables_idle_handling() {
        let config = QuizConfig {
            idle: IdleConfig::disabled(),
            ..QuizConfig::default()
        };
        assert_eq!(idle_reset(&ctx(config)).unwrap(), "reset after 120000ms");
    }

    #[test]
    fn kiosk_attract_can_keep_history() {
        let mut config = QuizConfig::default();
        config.idle.clear_on_attract = false;
        assert_eq!(
            kiosk_attract(&ctx(config)).unwrap(),
            "attract then welcome (cleared: false)"
        );
    }

    #[test]
    fn compressed_timings_still_reset() {
        let config = QuizConfig::default().with_compressed_timings(5);
        assert_eq!(idle_reset(&ctx(config)).unwrap(), "reset after 200ms");
    }
}
