use crate::media::{
    cache_image, cached_image, compose_image_prompt, CommentaryGenerator, ImageGenerator,
    ImageHandle, MediaError,
};
use crate::storage::MemoryStore;
use crate::tests::*;
use crate::types::{Dinosaur, Element};

/// Canned art collaborator used the way a native host would drive the
/// port.
struct ScriptedArtDesk {
    calls: u32,
    fail: bool,
}

impl ImageGenerator for ScriptedArtDesk {
    fn generate(&mut self, prompt: &str, environment: &str) -> Result<ImageHandle, MediaError> {
        self.calls += 1;
        if self.fail {
            return Err(MediaError::new("quota exhausted"));
        }
        Ok(ImageHandle(format!(
            "render://{}/{}",
            environment.len(),
            prompt.len()
        )))
    }
}

struct ScriptedNarrator {
    fail: bool,
}

impl CommentaryGenerator for ScriptedNarrator {
    fn generate(
        &mut self,
        winner: &Dinosaur,
        _loser: &Dinosaur,
        _environment: &str,
    ) -> Result<String, MediaError> {
        if self.fail {
            return Err(MediaError::new("quota exhausted"));
        }
        Ok(format!("{} takes the day.", winner.name))
    }
}

#[test]
fn test_prompt_names_the_subject_and_environment() {
    let rex = dino("Tyrannosaurus Rex", 12.0, 25.0, 10.0, Element::Earth);
    let prompt = compose_image_prompt(&rex, "Misty Swamp at Dawn");

    assert!(prompt.contains("a single Tyrannosaurus Rex"));
    assert!(prompt.contains("Misty Swamp at Dawn"));
    assert!(prompt.contains("Test specimen."));
    // Negative constraints ride along on every prompt.
    assert!(prompt.contains("Negative:"));
}

#[test]
fn test_generator_ports_feed_the_session() {
    use crate::catalog::Catalog;
    use crate::session::{AssetState, Session, SessionPhase};

    let catalog = Catalog::from_records(vec![
        dino("Titan", 12.0, 25.0, 10.0, Element::Earth),
        dino("Scrapper", 2.0, 60.0, 7.0, Element::Earth),
    ]);
    let mut session = Session::new();
    let mut art_desk = ScriptedArtDesk {
        calls: 0,
        fail: false,
    };
    let mut narrator = ScriptedNarrator { fail: false };

    let ticket = session
        .start_battle(&catalog, true, &mut seeded_rng(1))
        .unwrap();
    for (slot, prompt) in ticket.prompts.iter().enumerate() {
        let result = art_desk.generate(prompt, &ticket.environment);
        session.deliver_asset(ticket.epoch, slot, result);
    }

    assert_eq!(art_desk.calls, 2);
    assert_eq!(session.phase(), SessionPhase::Presenting);
    assert!(session
        .assets()
        .iter()
        .all(|a| matches!(a, AssetState::Ready(_))));

    session.pick("Titan", &mut no_crit_rng()).unwrap();
    let outcome = session.outcome().unwrap();
    let sentence = narrator.generate(&outcome.winner, &outcome.loser, &ticket.environment);
    session.attach_commentary(ticket.epoch, sentence);
    assert_eq!(session.outcome().unwrap().commentary, "Titan takes the day.");
}

#[test]
fn test_failing_generators_degrade_without_blocking() {
    use crate::catalog::Catalog;
    use crate::session::{AssetState, Session, SessionPhase};

    let catalog = Catalog::from_records(vec![
        dino("Titan", 12.0, 25.0, 10.0, Element::Earth),
        dino("Scrapper", 2.0, 60.0, 7.0, Element::Earth),
    ]);
    let mut session = Session::new();
    let mut art_desk = ScriptedArtDesk {
        calls: 0,
        fail: true,
    };
    let mut narrator = ScriptedNarrator { fail: true };

    let ticket = session
        .start_battle(&catalog, true, &mut seeded_rng(1))
        .unwrap();
    for (slot, prompt) in ticket.prompts.iter().enumerate() {
        let result = art_desk.generate(prompt, &ticket.environment);
        session.deliver_asset(ticket.epoch, slot, result);
    }

    // Both slots degraded, battle goes on.
    assert_eq!(session.phase(), SessionPhase::Presenting);
    assert!(session
        .assets()
        .iter()
        .all(|a| *a == AssetState::Placeholder));

    session.pick("Titan", &mut no_crit_rng()).unwrap();
    let fallback = session.outcome().unwrap().commentary.clone();
    let outcome = session.outcome().unwrap();
    let sentence = narrator.generate(&outcome.winner, &outcome.loser, &ticket.environment);
    session.attach_commentary(ticket.epoch, sentence);
    assert_eq!(session.outcome().unwrap().commentary, fallback);
}

#[test]
fn test_asset_cache_round_trip() {
    let mut store = MemoryStore::new();
    assert!(cached_image(&store, "Tyrannosaurus Rex").is_none());

    let handle = ImageHandle("data:image/png;base64,xyz".to_string());
    cache_image(&mut store, "Tyrannosaurus Rex", &handle);

    assert_eq!(cached_image(&store, "Tyrannosaurus Rex"), Some(handle));
    // Keys are per creature.
    assert!(cached_image(&store, "Velociraptor").is_none());
}
