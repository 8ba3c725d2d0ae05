use anyhow::{Context, Result, ensure};
use concert_quiz::{UserAnswer, result_summary};

use super::ScenarioCtx;
use crate::logic::playthrough::first_answers;

const PATRIOTIC_PICKS: [(&str, &str); 8] = [
    ("section", "brass"),
    ("mood", "beethoven"),
    ("venue", "bandshell"),
    ("occasion", "july4"),
    ("outfit", "stripes"),
    ("budget", "free"),
    ("plusone", "grandparent"),
    ("conductor", "general"),
];

/// Answer the first option everywhere; the machine and resolver must agree.
pub fn smoke(ctx: &ScenarioCtx) -> Result<String> {
    let picks = first_answers(&ctx.table);
    ensure!(
        picks.len() == ctx.table.question_count(),
        "every question needs at least one answer"
    );

    let mut run = ctx.playthrough()?;
    let result = run.play(&picks)?.clone();
    ensure!(
        result == ctx.table.resolve(&picks),
        "machine result differs from direct resolution"
    );

    let summary = result_summary(&ctx.table, &result, picks.len());
    ensure!(summary.unmatched == 0, "scripted answers went unmatched");
    ensure!(
        summary.answered == summary.question_count,
        "answered {} of {} questions",
        summary.answered,
        summary.question_count
    );
    Ok(summary.to_string())
}

pub fn patriotic_sweep(ctx: &ScenarioCtx) -> Result<String> {
    let picks: Vec<UserAnswer> = PATRIOTIC_PICKS
        .iter()
        .map(|(question, answer)| UserAnswer::new(*question, *answer))
        .collect();

    let mut run = ctx.playthrough()?;
    let result = run.play(&picks)?.clone();
    ensure!(
        result.unmatched == 0,
        "{} patriotic picks are missing from dataset {}",
        result.unmatched,
        ctx.table.fingerprint_hex()
    );
    ensure!(
        result.winner == "patriotic" && result.winning_score == 32,
        "expected patriotic with 32, got {} with {}",
        result.winner,
        result.winning_score
    );
    for entry in result.scores.iter().filter(|s| s.category != "patriotic") {
        ensure!(
            entry.score < result.winning_score,
            "{} reached {} alongside the winner",
            entry.category,
            entry.score
        );
    }
    Ok(format!("patriotic={}", result.winning_score))
}

/// No answers, or only answers the dataset no longer knows, land on the
/// fallback category with nothing scored.
pub fn empty_fallback(ctx: &ScenarioCtx) -> Result<String> {
    let fallback = ctx.table.fallback();

    let empty = ctx.table.resolve(&[]);
    ensure!(
        empty.winner == fallback.id,
        "empty answers resolved to {} instead of {}",
        empty.winner,
        fallback.id
    );
    ensure!(
        empty.winning_score == 0 && empty.scores.iter().all(|s| s.score == 0),
        "empty answers produced a non-zero score"
    );

    let retired: Vec<UserAnswer> = ctx
        .table
        .questions()
        .iter()
        .map(|question| UserAnswer::new(question.id(), "__retired__"))
        .collect();
    let stale = ctx.table.resolve(&retired);
    ensure!(
        stale.winner == fallback.id && stale.winning_score == 0,
        "retired answers resolved to {}",
        stale.winner
    );
    ensure!(
        stale.unmatched == retired.len(),
        "expected {} unmatched answers, counted {}",
        retired.len(),
        stale.unmatched
    );
    Ok(format!("fallback={}", fallback.id))
}

/// Answer, step back, change the answer; only the new one may count.
pub fn back_and_change(ctx: &ScenarioCtx) -> Result<String> {
    if ctx.table.question_count() < 2 {
        return Ok("skipped: single question dataset".to_string());
    }
    let mut picks = first_answers(&ctx.table);
    let first = ctx.table.question(0).context("dataset has no questions")?;
    let replacement = first
        .answers()
        .last()
        .map(|answer| answer.id().to_string())
        .context("first question has no answers")?;
    ensure!(
        replacement != picks[0].answer_id,
        "first question needs two distinct answers"
    );

    let mut run = ctx.playthrough()?;
    run.start()?;
    run.pick(&picks[0].answer_id)?;
    run.go_back()?;
    ensure!(
        run.machine().selected_answer() == Some(picks[0].answer_id.as_str()),
        "going back did not re-surface the earlier selection"
    );
    run.pick(&replacement)?;
    for pick in &picks[1..] {
        run.pick(&pick.answer_id)?;
    }

    let recorded: Vec<&UserAnswer> = run
        .machine()
        .answers()
        .iter()
        .filter(|answer| answer.question_id == first.id())
        .collect();
    ensure!(
        recorded.len() == 1 && recorded[0].answer_id == replacement,
        "expected a single `{replacement}` for `{}`, found {recorded:?}",
        first.id()
    );

    picks[0] = UserAnswer::new(first.id(), replacement.as_str());
    let expected = ctx.table.resolve(&picks);
    let result = run.finish()?;
    ensure!(
        *result == expected,
        "result still reflects the replaced answer"
    );
    Ok(format!("{}={}", first.id(), replacement))
}
