//! Persisted win/loss/streak ledger.
//!
//! Loaded once at startup, mutated only when a battle finalizes, written
//! back through the storage port after every mutation. Loading tolerates
//! missing, corrupt, and partial documents: every field defaults, so a
//! ledger written by an older schema still loads.

use crate::storage::{StorageError, StoragePort};
use crate::types::MatchRecord;
use serde::{Deserialize, Serialize};

/// Storage key for the serialized ledger.
pub const STATS_KEY: &str = "dino_stats";

/// Cap on the match history, most-recent first.
pub const RECENT_MATCH_CAP: usize = 20;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsLedger {
    pub wins: u32,
    pub losses: u32,
    pub current_streak: u32,
    pub highest_streak: u32,
    /// Creature names the player has seen win, insertion order, no
    /// duplicates. Serialized under the legacy field name.
    #[serde(rename = "dinosDiscovered")]
    pub discovered: Vec<String>,
    pub recent_matches: Vec<MatchRecord>,
}

impl StatsLedger {
    /// Reads the ledger from storage. Absent or unreadable data yields a
    /// zeroed ledger; partial documents get defaults for missing fields.
    pub fn load(store: &dyn StoragePort) -> Self {
        match store.get(STATS_KEY) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(ledger) => ledger,
                Err(err) => {
                    log::warn!("stored stats were unreadable, starting fresh: {err}");
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }

    pub fn save(&self, store: &mut dyn StoragePort) -> Result<(), StorageError> {
        let raw = serde_json::to_string(self).map_err(|err| StorageError::new(err.to_string()))?;
        store.set(STATS_KEY, &raw)
    }

    /// Applies one finished battle and persists synchronously.
    ///
    /// The winner's name is added to `discovered` on every finalized
    /// battle, regardless of whether the player's prediction was right.
    /// A storage failure is logged and swallowed; history survives in
    /// memory and the battle still completes.
    pub fn record_result(&mut self, record: MatchRecord, store: &mut dyn StoragePort) {
        if record.player_correct {
            self.wins += 1;
            self.current_streak += 1;
            self.highest_streak = self.highest_streak.max(self.current_streak);
        } else {
            self.losses += 1;
            self.current_streak = 0;
        }

        if !self.discovered.contains(&record.winner_name) {
            self.discovered.push(record.winner_name.clone());
        }

        self.recent_matches.insert(0, record);
        self.recent_matches.truncate(RECENT_MATCH_CAP);

        if let Err(err) = self.save(store) {
            log::warn!("failed to persist stats: {err}");
        }
    }

    pub fn total_battles(&self) -> u32 {
        self.wins + self.losses
    }
}
