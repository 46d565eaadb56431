//! Collaborator ports for generated flavor content.
//!
//! The session never calls these directly: the host dispatches the work
//! (fetch, worker, queue, whatever it has) and feeds results back with
//! the ticket epoch. Both collaborators may fail or stall; the battle
//! never waits on them and never aborts because of them.

use crate::storage::StoragePort;
use crate::types::Dinosaur;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque reference to a generated image (URL or data URI).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageHandle(pub String);

/// Generic stand-in shown when image generation fails.
pub const PLACEHOLDER_IMAGE: &str = "https://picsum.photos/1280/720?grayscale&blur=2";

pub fn placeholder_image() -> ImageHandle {
    ImageHandle(PLACEHOLDER_IMAGE.to_string())
}

/// A collaborator call that failed or timed out. Always recoverable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaError {
    pub detail: String,
}

impl MediaError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "media generation failed: {}", self.detail)
    }
}

impl std::error::Error for MediaError {}

/// Produces flavor art for a competitor in an environment.
pub trait ImageGenerator {
    fn generate(&mut self, prompt: &str, environment: &str) -> Result<ImageHandle, MediaError>;
}

/// Produces a short narrative sentence (<= 25 words) about a finished
/// battle.
pub trait CommentaryGenerator {
    fn generate(
        &mut self,
        winner: &Dinosaur,
        loser: &Dinosaur,
        environment: &str,
    ) -> Result<String, MediaError>;
}

const NEGATIVE_PROMPT: &str = "Negative: letterbox, black bars, cinematic bars, white borders, \
     cropping, skeletons, bones, fossils, museum, flowers, text, blurry, distorted.";

/// Composes the single-subject cinematic prompt for a competitor's card
/// art.
pub fn compose_image_prompt(dino: &Dinosaur, environment: &str) -> String {
    format!(
        "Cinematic wide landscape shot of a single {} in a {}. {} \
         Format: 16:9 wide-angle landscape shot, filling the entire frame edge to edge. \
         Style: high-end prehistoric nature documentary, photorealistic, highly detailed texture. \
         Content: one living, breathing animal, purely prehistoric nature, no man-made objects. \
         {}",
        dino.name, environment, dino.blurb, NEGATIVE_PROMPT
    )
}

fn cache_key(name: &str) -> String {
    format!("asset:{name}")
}

/// Previously generated art for a creature, if cached.
pub fn cached_image(store: &dyn StoragePort, name: &str) -> Option<ImageHandle> {
    store.get(&cache_key(name)).map(ImageHandle)
}

/// Remembers generated art for a creature. Write failures only cost a
/// regeneration later.
pub fn cache_image(store: &mut dyn StoragePort, name: &str, handle: &ImageHandle) {
    if let Err(err) = store.set(&cache_key(name), &handle.0) {
        log::debug!("asset cache write skipped: {err}");
    }
}
