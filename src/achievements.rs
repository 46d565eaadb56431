//! Earnable badges evaluated over the ledger and the just-finished battle.

use crate::stats::StatsLedger;
use crate::types::Dinosaur;
use serde::{Deserialize, Serialize};

/// The battle a badge predicate may inspect, available only right after a
/// reveal.
#[derive(Debug, Clone, Copy)]
pub struct BattleContext<'a> {
    pub winner: &'a Dinosaur,
    pub loser: &'a Dinosaur,
    pub correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    FirstDiscovery,
    ApexPredator,
    DinoDominator,
    Paleontologist,
    GiantSlayer,
    SpeedDemon,
    TinyTerror,
}

impl Achievement {
    pub const ALL: [Achievement; 7] = [
        Achievement::FirstDiscovery,
        Achievement::ApexPredator,
        Achievement::DinoDominator,
        Achievement::Paleontologist,
        Achievement::GiantSlayer,
        Achievement::SpeedDemon,
        Achievement::TinyTerror,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Achievement::FirstDiscovery => "First Discovery",
            Achievement::ApexPredator => "Apex Predator",
            Achievement::DinoDominator => "Dino Dominator",
            Achievement::Paleontologist => "Paleontologist",
            Achievement::GiantSlayer => "Giant Slayer",
            Achievement::SpeedDemon => "Speed Demon",
            Achievement::TinyTerror => "Tiny Terror",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Achievement::FirstDiscovery => "Win your first battle.",
            Achievement::ApexPredator => "Win 3 battles in a row.",
            Achievement::DinoDominator => "Achieve a winning streak of 10.",
            Achievement::Paleontologist => "Encounter 10 different dinosaurs.",
            Achievement::GiantSlayer => "Win with a dinosaur smaller than the opponent.",
            Achievement::SpeedDemon => "Win with a dinosaur that has over 50km/h speed.",
            Achievement::TinyTerror => "Win a battle with a dinosaur under 2m in size.",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Achievement::FirstDiscovery => "🦕",
            Achievement::ApexPredator => "🔥",
            Achievement::DinoDominator => "👑",
            Achievement::Paleontologist => "🧭",
            Achievement::GiantSlayer => "⚔️",
            Achievement::SpeedDemon => "⚡",
            Achievement::TinyTerror => "🐜",
        }
    }

    pub fn earned(self, stats: &StatsLedger, battle: Option<&BattleContext<'_>>) -> bool {
        match self {
            Achievement::FirstDiscovery => stats.wins >= 1,
            Achievement::ApexPredator => stats.current_streak >= 3,
            Achievement::DinoDominator => stats.current_streak >= 10,
            Achievement::Paleontologist => stats.discovered.len() >= 10,
            Achievement::GiantSlayer => battle
                .map(|b| b.correct && b.winner.size < b.loser.size)
                .unwrap_or(false),
            Achievement::SpeedDemon => battle
                .map(|b| b.correct && b.winner.speed >= 50.0)
                .unwrap_or(false),
            Achievement::TinyTerror => battle
                .map(|b| b.correct && b.winner.size <= 2.0)
                .unwrap_or(false),
        }
    }
}

/// All badges currently satisfied by the ledger and battle context.
pub fn earned_now(stats: &StatsLedger, battle: Option<&BattleContext<'_>>) -> Vec<Achievement> {
    Achievement::ALL
        .into_iter()
        .filter(|a| a.earned(stats, battle))
        .collect()
}
