use serde::{Deserialize, Serialize};

/// Elemental affinity checked by the terrain rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Element {
    Earth,
    Water,
    Sky,
}

/// Availability tier. Legendary creatures only appear in premium sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tier {
    Common,
    Legendary,
}

/// Closed set of roar samples the UI can play for a creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundKey {
    TrexRoar,
    RaptorScreech,
    TriceratopsBellow,
    GenericRoar,
}

/// A creature record from the roster catalog.
///
/// Identity is the `name`; records never change after the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dinosaur {
    pub name: String,
    pub scientific: String,
    /// One-line description, also used when composing image prompts.
    pub blurb: String,
    /// Body length in meters.
    pub size: f64,
    /// Top speed in km/h.
    pub speed: f64,
    /// Combat rating in [0, 10].
    pub attack: f64,
    pub element: Element,
    pub tier: Tier,
    pub sound: SoundKey,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

impl Dinosaur {
    pub fn is_legendary(&self) -> bool {
        self.tier == Tier::Legendary
    }
}

/// One finished battle as remembered by the stats ledger.
///
/// Field names on the wire match the ledger documents written by earlier
/// releases, so old saves keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    /// Milliseconds since the Unix epoch.
    #[serde(rename = "timestamp")]
    pub timestamp_ms: i64,
    pub winner_name: String,
    pub loser_name: String,
    #[serde(rename = "isPlayerCorrect")]
    pub player_correct: bool,
    pub environment: String,
}
