use std::collections::BTreeSet;

use concert_quiz::{QuizData, ScoringTable, TableError};

fn bundled_data() -> QuizData {
    QuizData::from_json(include_str!("../assets/quiz.json")).unwrap()
}

#[test]
fn every_answer_scores_every_category() {
    let data = bundled_data();
    let categories: BTreeSet<_> = data.categories.iter().map(|c| c.id.clone()).collect();
    for question in &data.questions {
        assert_eq!(question.answers.len(), 4, "question {}", question.id);
        for answer in &question.answers {
            let scored: BTreeSet<_> = answer.scores.keys().cloned().collect();
            assert_eq!(scored, categories, "{}/{}", question.id, answer.id);
            assert!(
                answer.scores.values().all(|score| (1..=4).contains(score)),
                "{}/{} scores outside 1-4",
                question.id,
                answer.id
            );
        }
    }
}

#[test]
fn category_order_is_canonical() {
    let table = ScoringTable::load_default().unwrap();
    let ids: Vec<_> = table.categories().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["patriotic", "pops", "chamber", "grand", "unknown"]);
    assert_eq!(table.fallback().id, "pops");
}

#[test]
fn question_order_matches_kiosk_flow() {
    let table = ScoringTable::load_default().unwrap();
    let ids: Vec<_> = table.questions().iter().map(|q| q.id()).collect();
    assert_eq!(
        ids,
        [
            "section", "mood", "venue", "occasion", "outfit", "budget", "plusone", "conductor"
        ]
    );
    assert_eq!(
        table.question_by_id("conductor").unwrap().prompt(),
        "Pick a conductor"
    );
}

#[test]
fn categories_round_trip_presentation() {
    let table = ScoringTable::load_default().unwrap();
    let chamber = table.category("chamber").unwrap();
    assert_eq!(chamber.title, "A Chatty Chamber Concert");
    assert_eq!(chamber.icon, "🌲");
    assert_eq!(chamber.color, "#2d5a27");
    assert_eq!(chamber.accent_color, "#8fbc8f");

    let json = serde_json::to_string(chamber).unwrap();
    let back: concert_quiz::ResultCategory = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, chamber);
}

#[test]
fn partial_vector_refuses_to_load() {
    let mut data = bundled_data();
    data.questions[3].answers[2].scores.remove("grand");
    assert_eq!(
        ScoringTable::from_data(data),
        Err(TableError::MissingScore {
            question: "occasion".to_string(),
            answer: "premiere".to_string(),
            category: "grand".to_string(),
        })
    );
}

#[test]
fn fingerprint_is_stable_for_bundled_dataset() {
    let first = ScoringTable::load_default().unwrap();
    let second = ScoringTable::from_data(bundled_data()).unwrap();
    assert_eq!(first.fingerprint(), second.fingerprint());

    let mut edited = bundled_data();
    edited.questions[0].prompt.push('!');
    let edited = ScoringTable::from_data(edited).unwrap();
    assert_ne!(first.fingerprint_hex(), edited.fingerprint_hex());
}
