//! Battle resolution.
//!
//! Scoring combines a super-linear mass term, a super-linear combat term,
//! and a linear agility term, then layers three situational rules on top:
//! a flat bonus for massive scale mismatches, an independent critical-hit
//! roll per competitor (the only stochastic element), and a terrain
//! multiplier for water creatures fighting on water terrain.

use crate::types::{Dinosaur, Element};
use rand::Rng;
use serde::{Deserialize, Serialize};

// Scoring constants. These are the canonical tuning; changing any of them
// changes battle outcomes, so tests pin them down.
pub const MASS_EXPONENT: f64 = 2.8;
pub const MASS_WEIGHT: f64 = 10.0;
pub const COMBAT_EXPONENT: f64 = 2.0;
pub const COMBAT_WEIGHT: f64 = 15.0;
pub const AGILITY_WEIGHT: f64 = 5.0;

/// Size ratio above which the larger competitor gets [`MISMATCH_BONUS`].
pub const MISMATCH_RATIO: f64 = 2.5;
/// Flat score override that all but guarantees the larger party wins.
pub const MISMATCH_BONUS: f64 = 50_000.0;

pub const CRIT_BASE_CHANCE: f64 = 0.05;
pub const CRIT_ATTACK_SCALE: f64 = 50.0;
pub const CRIT_MULTIPLIER: f64 = 1.5;

pub const AQUATIC_MULTIPLIER: f64 = 1.2;

/// Size ratio above which commentary calls out sheer mass.
pub const COLOSSAL_RATIO: f64 = 2.0;

const WATER_TERRAIN: [&str; 3] = ["swamp", "river", "ocean"];

/// Whether an environment label names water terrain. Environments are
/// free-form labels, so this is a case-insensitive substring check against
/// a fixed vocabulary.
pub fn has_water_terrain(environment: &str) -> bool {
    let label = environment.to_lowercase();
    WATER_TERRAIN.iter().any(|term| label.contains(term))
}

/// Chance in [0, 1) that a competitor with the given attack rating lands a
/// critical hit.
pub fn crit_chance(attack: f64) -> f64 {
    CRIT_BASE_CHANCE + attack / CRIT_ATTACK_SCALE
}

/// Simulation trace events, emitted in a stable stage order for console
/// playback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum SimEvent {
    LinkEstablished,
    #[serde(rename_all = "camelCase")]
    BiomeDetected { environment: String },
    #[serde(rename_all = "camelCase")]
    MassComputed {
        first: String,
        first_size: f64,
        second: String,
        second_size: f64,
    },
    #[serde(rename_all = "camelCase")]
    PowerReadings {
        first_attack: f64,
        second_attack: f64,
    },
    ScaleMismatch,
    #[serde(rename_all = "camelCase")]
    CriticalStrike { name: String },
    #[serde(rename_all = "camelCase")]
    TerrainAdvantage { name: String },
    Stabilized,
    #[serde(rename_all = "camelCase")]
    Victor { name: String },
}

impl SimEvent {
    /// Fixed-format console line for this event.
    pub fn to_line(&self) -> String {
        match self {
            SimEvent::LinkEstablished => "INITIATING NEURAL LINK...".to_string(),
            SimEvent::BiomeDetected { environment } => {
                format!("BIOME DETECTED: {}", environment.to_uppercase())
            }
            SimEvent::MassComputed {
                first,
                first_size,
                second,
                second_size,
            } => format!("CALCULATING MASS: {first} ({first_size}m) VS {second} ({second_size}m)"),
            SimEvent::PowerReadings {
                first_attack,
                second_attack,
            } => format!("COMBAT POWER READINGS: {first_attack}/10 VS {second_attack}/10"),
            SimEvent::ScaleMismatch => "WARNING: MASSIVE SCALE MISMATCH DETECTED.".to_string(),
            SimEvent::CriticalStrike { name } => {
                format!("CRITICAL STRIKE: {name} LANDED VITAL HIT!")
            }
            SimEvent::TerrainAdvantage { name } => {
                format!("AQUATIC BUFF: {name} HAS TERRAIN ADVANTAGE.")
            }
            SimEvent::Stabilized => "SIMULATION STABILIZED.".to_string(),
            SimEvent::Victor { name } => {
                format!("VICTOR IDENTIFIED: {}", name.to_uppercase())
            }
        }
    }
}

/// Result of one resolved battle.
///
/// `commentary` holds the deterministic fallback sentence at construction;
/// the session may replace it when the narrative collaborator answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleOutcome {
    pub winner: Dinosaur,
    pub loser: Dinosaur,
    pub events: Vec<SimEvent>,
    pub commentary: String,
    pub crit_landed: bool,
    pub size_ratio: f64,
}

impl BattleOutcome {
    /// The trace rendered as console lines, in emission order.
    pub fn log_lines(&self) -> Vec<String> {
        self.events.iter().map(SimEvent::to_line).collect()
    }
}

// ==========================================
// MAIN BATTLE RESOLVER
// ==========================================

/// Resolves a battle between two distinct competitors in an environment.
///
/// Deterministic except for the two independent crit rolls drawn from
/// `rng`. Ties resolve to the first competitor.
pub fn resolve<R: Rng>(
    a: &Dinosaur,
    b: &Dinosaur,
    environment: &str,
    rng: &mut R,
) -> BattleOutcome {
    assert_ne!(a.name, b.name, "battle requires two distinct competitors");

    let mut events = vec![
        SimEvent::LinkEstablished,
        SimEvent::BiomeDetected {
            environment: environment.to_string(),
        },
    ];

    let mass_a = a.size.powf(MASS_EXPONENT) * MASS_WEIGHT;
    let mass_b = b.size.powf(MASS_EXPONENT) * MASS_WEIGHT;
    events.push(SimEvent::MassComputed {
        first: a.name.clone(),
        first_size: a.size,
        second: b.name.clone(),
        second_size: b.size,
    });

    let combat_a = a.attack.powf(COMBAT_EXPONENT) * COMBAT_WEIGHT;
    let combat_b = b.attack.powf(COMBAT_EXPONENT) * COMBAT_WEIGHT;
    events.push(SimEvent::PowerReadings {
        first_attack: a.attack,
        second_attack: b.attack,
    });

    let agility_a = a.speed * AGILITY_WEIGHT;
    let agility_b = b.speed * AGILITY_WEIGHT;

    let size_ratio = if a.size > b.size {
        a.size / b.size
    } else {
        b.size / a.size
    };

    let mut score_a = 0.0;
    let mut score_b = 0.0;

    if size_ratio > MISMATCH_RATIO {
        events.push(SimEvent::ScaleMismatch);
        if a.size > b.size {
            score_a += MISMATCH_BONUS;
        } else {
            score_b += MISMATCH_BONUS;
        }
    }

    score_a += mass_a + combat_a + agility_a;
    score_b += mass_b + combat_b + agility_b;

    let crit_a = rng.gen::<f64>() < crit_chance(a.attack);
    let crit_b = rng.gen::<f64>() < crit_chance(b.attack);

    if crit_a {
        score_a *= CRIT_MULTIPLIER;
        events.push(SimEvent::CriticalStrike {
            name: a.name.clone(),
        });
    }
    if crit_b {
        score_b *= CRIT_MULTIPLIER;
        events.push(SimEvent::CriticalStrike {
            name: b.name.clone(),
        });
    }

    if has_water_terrain(environment) {
        if a.element == Element::Water {
            score_a *= AQUATIC_MULTIPLIER;
            events.push(SimEvent::TerrainAdvantage {
                name: a.name.clone(),
            });
        }
        if b.element == Element::Water {
            score_b *= AQUATIC_MULTIPLIER;
            events.push(SimEvent::TerrainAdvantage {
                name: b.name.clone(),
            });
        }
    }

    // Ties go to the first competitor.
    let (winner, loser) = if score_a >= score_b { (a, b) } else { (b, a) };

    events.push(SimEvent::Stabilized);
    events.push(SimEvent::Victor {
        name: winner.name.clone(),
    });

    log::debug!(
        "resolved {} ({score_a:.0}) vs {} ({score_b:.0}) in {environment}: {} wins",
        a.name,
        b.name,
        winner.name
    );

    let crit_landed = crit_a || crit_b;
    let commentary = fallback_commentary(winner, loser, crit_landed, size_ratio);

    BattleOutcome {
        winner: winner.clone(),
        loser: loser.clone(),
        events,
        commentary,
        crit_landed,
        size_ratio,
    }
}

/// Deterministic commentary used until (or instead of) the narrative
/// collaborator's sentence. Colossal size beats crit phrasing beats the
/// generic line.
pub fn fallback_commentary(
    winner: &Dinosaur,
    loser: &Dinosaur,
    crit_landed: bool,
    size_ratio: f64,
) -> String {
    if size_ratio > COLOSSAL_RATIO && winner.size > loser.size {
        format!(
            "Sheer colossal size was the deciding factor. The {} had no chance against such mass.",
            loser.name
        )
    } else if crit_landed {
        format!(
            "A legendary critical hit secured the victory for the {}.",
            winner.name
        )
    } else {
        format!("The {} dominated the arena with superior stats.", winner.name)
    }
}
