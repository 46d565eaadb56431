//! One battle lifecycle, from matchup draw to reveal.
//!
//! The session is host-driven and single-threaded: asset and commentary
//! results are delivered by the host together with the epoch from the
//! ticket that requested them, and anything stale is discarded. Starting
//! a new battle always invalidates in-flight work for the previous one.

use crate::battle::{resolve, BattleOutcome};
use crate::catalog::Catalog;
use crate::error::{GameError, GameResult};
use crate::media::{compose_image_prompt, ImageHandle, MediaError};
use crate::playback::{ConsolePlayback, PlaybackStep};
use crate::stats::StatsLedger;
use crate::storage::StoragePort;
use crate::types::{Dinosaur, MatchRecord};
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionPhase {
    Idle,
    AwaitingAssets,
    Presenting,
    Resolving,
    Revealed,
}

impl Default for SessionPhase {
    fn default() -> Self {
        SessionPhase::Idle
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum AssetState {
    Pending,
    Ready(ImageHandle),
    Placeholder,
}

impl Default for AssetState {
    fn default() -> Self {
        AssetState::Pending
    }
}

impl AssetState {
    fn is_pending(&self) -> bool {
        matches!(self, AssetState::Pending)
    }
}

/// Returned by `start_battle`: everything the host needs to dispatch the
/// flavor-art requests and route their results back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleTicket {
    pub epoch: u64,
    pub prompts: [String; 2],
    pub environment: String,
}

#[derive(Debug, Default)]
pub struct Session {
    phase: SessionPhase,
    epoch: u64,
    fighters: Option<[Dinosaur; 2]>,
    environment: String,
    assets: [AssetState; 2],
    player_pick: Option<String>,
    outcome: Option<BattleOutcome>,
    playback: Option<ConsolePlayback>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws a fresh matchup and moves to `AwaitingAssets`.
    ///
    /// Allowed from any phase: a new battle cancels live playback and
    /// bumps the epoch so stale asset or commentary deliveries can no
    /// longer touch session state.
    pub fn start_battle<R: Rng>(
        &mut self,
        catalog: &Catalog,
        premium: bool,
        rng: &mut R,
    ) -> GameResult<BattleTicket> {
        let matchup = catalog.draw_matchup(premium, rng)?;

        if let Some(playback) = self.playback.as_mut() {
            playback.cancel();
        }
        self.epoch += 1;
        self.phase = SessionPhase::AwaitingAssets;
        self.assets = [AssetState::Pending, AssetState::Pending];
        self.player_pick = None;
        self.outcome = None;
        self.playback = None;

        let prompts = [
            compose_image_prompt(&matchup.fighters[0], &matchup.environment),
            compose_image_prompt(&matchup.fighters[1], &matchup.environment),
        ];
        log::info!(
            "battle {}: {} vs {} in {}",
            self.epoch,
            matchup.fighters[0].name,
            matchup.fighters[1].name,
            matchup.environment
        );

        self.environment = matchup.environment.clone();
        self.fighters = Some(matchup.fighters);

        Ok(BattleTicket {
            epoch: self.epoch,
            prompts,
            environment: matchup.environment,
        })
    }

    /// Accepts one fighter's art from the host. Stale epochs are
    /// discarded; a failed generation installs the placeholder. Once both
    /// slots have resolved (in either order) the session presents.
    pub fn deliver_asset(
        &mut self,
        epoch: u64,
        slot: usize,
        result: Result<ImageHandle, MediaError>,
    ) {
        assert!(slot < 2, "asset slot out of range");
        if epoch != self.epoch {
            log::debug!("discarding stale asset delivery (epoch {epoch}, now {})", self.epoch);
            return;
        }
        self.assets[slot] = match result {
            Ok(handle) => AssetState::Ready(handle),
            Err(err) => {
                log::warn!("art generation failed for slot {slot}, using placeholder: {err}");
                AssetState::Placeholder
            }
        };
        if self.phase == SessionPhase::AwaitingAssets
            && self.assets.iter().all(|a| !a.is_pending())
        {
            self.phase = SessionPhase::Presenting;
        }
    }

    /// Host-side timeout escape hatch: stop waiting, fill unresolved
    /// slots with placeholders, and present. Late deliveries for this
    /// epoch may still upgrade a placeholder to real art.
    pub fn present_now(&mut self) {
        if self.phase != SessionPhase::AwaitingAssets {
            return;
        }
        for asset in self.assets.iter_mut() {
            if asset.is_pending() {
                *asset = AssetState::Placeholder;
            }
        }
        self.phase = SessionPhase::Presenting;
    }

    /// Records the player's prediction and resolves the battle.
    ///
    /// A pick is accepted at most once per battle: any pick after the
    /// first is a no-op, so duplicate clicks can never re-trigger
    /// resolution. Picking outside `Presenting` is `WrongPhase`; a name
    /// that is not one of the fighters is `UnknownCompetitor`.
    pub fn pick<R: Rng>(&mut self, name: &str, rng: &mut R) -> GameResult<()> {
        if self.player_pick.is_some() {
            return Ok(());
        }
        if self.phase != SessionPhase::Presenting {
            return Err(GameError::WrongPhase);
        }
        let Some(fighters) = self.fighters.as_ref() else {
            return Err(GameError::WrongPhase);
        };
        if !fighters.iter().any(|d| d.name == name) {
            return Err(GameError::UnknownCompetitor {
                name: name.to_string(),
            });
        }

        self.player_pick = Some(name.to_string());
        let outcome = resolve(&fighters[0], &fighters[1], &self.environment, rng);
        self.playback = Some(ConsolePlayback::new(outcome.log_lines()));
        self.outcome = Some(outcome);
        self.phase = SessionPhase::Resolving;
        Ok(())
    }

    /// Advances trace playback one step. On the single `Done` step the
    /// battle finalizes: correctness is computed, the ledger records and
    /// persists the result, and the session reveals.
    pub fn tick(
        &mut self,
        ledger: &mut StatsLedger,
        store: &mut dyn StoragePort,
    ) -> PlaybackStep {
        if self.phase != SessionPhase::Resolving {
            return PlaybackStep::Idle;
        }
        let Some(playback) = self.playback.as_mut() else {
            return PlaybackStep::Idle;
        };
        let step = playback.tick();
        if step == PlaybackStep::Done {
            self.finalize(ledger, store);
        }
        step
    }

    fn finalize(&mut self, ledger: &mut StatsLedger, store: &mut dyn StoragePort) {
        let (Some(outcome), Some(pick)) = (self.outcome.as_ref(), self.player_pick.as_ref())
        else {
            return;
        };
        let correct = *pick == outcome.winner.name;
        ledger.record_result(
            MatchRecord {
                timestamp_ms: Utc::now().timestamp_millis(),
                winner_name: outcome.winner.name.clone(),
                loser_name: outcome.loser.name.clone(),
                player_correct: correct,
                environment: self.environment.clone(),
            },
            store,
        );
        self.phase = SessionPhase::Revealed;
        log::info!(
            "battle {} revealed: {} wins, prediction {}",
            self.epoch,
            outcome.winner.name,
            if correct { "correct" } else { "wrong" }
        );
    }

    /// Attaches late narrative commentary. Stale epochs are discarded; a
    /// failed generation keeps the deterministic fallback already on the
    /// outcome.
    pub fn attach_commentary(&mut self, epoch: u64, result: Result<String, MediaError>) {
        if epoch != self.epoch {
            log::debug!("discarding stale commentary (epoch {epoch}, now {})", self.epoch);
            return;
        }
        match result {
            Ok(text) => {
                if let Some(outcome) = self.outcome.as_mut() {
                    outcome.commentary = text;
                }
            }
            Err(err) => {
                log::warn!("commentary generation failed, keeping fallback: {err}");
            }
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn fighters(&self) -> Option<&[Dinosaur; 2]> {
        self.fighters.as_ref()
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn assets(&self) -> &[AssetState; 2] {
        &self.assets
    }

    pub fn player_pick(&self) -> Option<&str> {
        self.player_pick.as_deref()
    }

    pub fn outcome(&self) -> Option<&BattleOutcome> {
        self.outcome.as_ref()
    }

    /// Whether the player's prediction matched the winner. `None` until
    /// the battle reveals.
    pub fn player_correct(&self) -> Option<bool> {
        if self.phase != SessionPhase::Revealed {
            return None;
        }
        let outcome = self.outcome.as_ref()?;
        let pick = self.player_pick.as_ref()?;
        Some(*pick == outcome.winner.name)
    }
}
