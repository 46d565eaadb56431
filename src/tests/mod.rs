mod achievements;
mod media;
mod playback;
mod stats;

use crate::types::{Dinosaur, Element, SoundKey, Tier};
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ==========================================
// HELPER FUNCTIONS (Boilerplate Reduction)
// ==========================================

fn dino(name: &str, size: f64, speed: f64, attack: f64, element: Element) -> Dinosaur {
    Dinosaur {
        name: name.to_string(),
        scientific: name.to_string(),
        blurb: "Test specimen.".to_string(),
        size,
        speed,
        attack,
        element,
        tier: Tier::Common,
        sound: SoundKey::GenericRoar,
        aliases: vec![],
    }
}

/// RNG whose [0, 1) draws sit just below 1.0, so a crit never lands.
/// With crits out of the picture the resolver is fully deterministic.
fn no_crit_rng() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

/// RNG whose draws are 0.0, so a crit always lands for both sides.
fn all_crit_rng() -> StepRng {
    StepRng::new(0, 0)
}

fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
