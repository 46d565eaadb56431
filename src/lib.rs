mod achievements;
mod battle;
mod catalog;
mod error;
mod media;
mod playback;
mod session;
mod stats;
mod storage;
mod types;

#[cfg(feature = "browser")]
mod browser;

#[cfg(test)]
mod tests;

pub use achievements::{earned_now, Achievement, BattleContext};
pub use battle::{
    crit_chance, fallback_commentary, has_water_terrain, resolve, BattleOutcome, SimEvent,
    AGILITY_WEIGHT, AQUATIC_MULTIPLIER, COLOSSAL_RATIO, COMBAT_EXPONENT, COMBAT_WEIGHT,
    CRIT_ATTACK_SCALE, CRIT_BASE_CHANCE, CRIT_MULTIPLIER, MASS_EXPONENT, MASS_WEIGHT,
    MISMATCH_BONUS, MISMATCH_RATIO,
};
pub use catalog::{Catalog, Matchup, BASIC_ENVIRONMENTS, EXOTIC_ENVIRONMENTS};
pub use error::{GameError, GameResult};
pub use media::{
    cache_image, cached_image, compose_image_prompt, placeholder_image, CommentaryGenerator,
    ImageGenerator, ImageHandle, MediaError, PLACEHOLDER_IMAGE,
};
pub use playback::{ConsolePlayback, PlaybackStep, COMPLETE_HOLD_MS, LINE_INTERVAL_MS};
pub use session::{AssetState, BattleTicket, Session, SessionPhase};
pub use stats::{StatsLedger, RECENT_MATCH_CAP, STATS_KEY};
pub use storage::{MemoryStore, StorageError, StoragePort};
pub use types::*;

#[cfg(feature = "browser")]
pub use browser::Arena;
