use anyhow::Result;
use concert_quiz::{QuizConfig, ScoringTable};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

use crate::logic::Playthrough;

pub mod catalog;
pub mod driver;
pub mod idle;
pub mod properties;

/// Everything one scenario iteration needs.
#[derive(Debug, Clone)]
pub struct ScenarioCtx {
    pub table: Arc<ScoringTable>,
    pub config: QuizConfig,
    pub seed: u64,
}

impl ScenarioCtx {
    pub fn rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.seed)
    }

    pub fn playthrough(&self) -> Result<Playthrough> {
        self.playthrough_with(self.config.clone())
    }

    pub fn playthrough_with(&self, config: QuizConfig) -> Result<Playthrough> {
        Playthrough::new(Arc::clone(&self.table), config)
    }
}

/// Returns a one-line detail shown in verbose mode.
pub type ScenarioCheck = fn(&ScenarioCtx) -> Result<String>;

#[derive(Debug, Clone, Copy)]
pub struct TestScenario {
    pub key: &'static str,
    pub name: &'static str,
    pub check: ScenarioCheck,
}

const SCENARIOS: &[TestScenario] = &[
    TestScenario {
        key: "smoke",
        name: "Smoke Test",
        check: catalog::smoke,
    },
    TestScenario {
        key: "patriotic-sweep",
        name: "Patriotic Salute Sweep",
        check: catalog::patriotic_sweep,
    },
    TestScenario {
        key: "empty-fallback",
        name: "Empty Answers Fallback",
        check: catalog::empty_fallback,
    },
    TestScenario {
        key: "back-and-change",
        name: "Go Back and Change Answer",
        check: catalog::back_and_change,
    },
    TestScenario {
        key: "idle-reset",
        name: "Idle Timeout Reset",
        check: idle::idle_reset,
    },
    TestScenario {
        key: "kiosk-attract",
        name: "Kiosk Attract Loop",
        check: idle::kiosk_attract,
    },
    TestScenario {
        key: "shuffle-invariance",
        name: "Answer Order Invariance",
        check: properties::shuffle_invariance,
    },
    TestScenario {
        key: "random-walk",
        name: "Random Input Walk",
        check: properties::random_walk,
    },
    TestScenario {
        key: "driver-playthrough",
        name: "Async Driver Playthrough",
        check: driver::driver_playthrough,
    },
];

pub fn get_scenario(name: &str) -> Option<TestScenario> {
    let key = match name.to_lowercase().as_str() {
        "patriotic" => "patriotic-sweep",
        "fallback" | "empty" => "empty-fallback",
        "back" => "back-and-change",
        "idle" => "idle-reset",
        "kiosk" | "attract" => "kiosk-attract",
        "shuffle" => "shuffle-invariance",
        "walk" | "random" => "random-walk",
        "driver" => "driver-playthrough",
        other => return SCENARIOS.iter().find(|s| s.key == other).copied(),
    };
    SCENARIOS.iter().find(|s| s.key == key).copied()
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    SCENARIOS.iter().map(|s| (s.key, s.name)).collect()
}

pub fn scenario_keys() -> impl Iterator<Item = &'static str> {
    SCENARIOS.iter().map(|s| s.key)
}
