//! wasm-bindgen facade for browser hosts.
//!
//! Wraps the catalog, session, and ledger behind one `Arena` object and
//! persists stats through `window.localStorage`. The JS side owns timers
//! and the calls to the generative service; results come back through
//! `deliver_asset` / `attach_commentary` with the ticket epoch.

use crate::achievements::{earned_now, BattleContext};
use crate::catalog::Catalog;
use crate::media::{ImageHandle, MediaError};
use crate::session::Session;
use crate::stats::StatsLedger;
use crate::storage::{StorageError, StoragePort};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Storage port over `window.localStorage`. Read problems surface as
/// absent values; write problems (quota, privacy mode) as `StorageError`.
struct LocalStorage;

impl LocalStorage {
    fn backing(&self) -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl StoragePort for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.backing().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self
            .backing()
            .ok_or_else(|| StorageError::new("localStorage unavailable"))?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::new(format!("localStorage rejected write to {key}")))
    }
}

#[wasm_bindgen]
pub struct Arena {
    catalog: Catalog,
    session: Session,
    ledger: StatsLedger,
    store: LocalStorage,
    rng: StdRng,
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Arena {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Arena {
        let store = LocalStorage;
        let ledger = StatsLedger::load(&store);
        Arena {
            catalog: Catalog::standard(),
            session: Session::new(),
            ledger,
            store,
            rng: StdRng::from_entropy(),
        }
    }

    /// Starts a battle and returns the `BattleTicket` as a JS object.
    #[wasm_bindgen(js_name = startBattle)]
    pub fn start_battle(&mut self, premium: bool) -> Result<JsValue, JsValue> {
        let ticket = self
            .session
            .start_battle(&self.catalog, premium, &mut self.rng)
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        serde_wasm_bindgen::to_value(&ticket).map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Delivers one fighter's art. Pass `null` for a failed generation.
    #[wasm_bindgen(js_name = deliverAsset)]
    pub fn deliver_asset(&mut self, epoch: u64, slot: u32, url: Option<String>) {
        let result = match url {
            Some(url) => Ok(ImageHandle(url)),
            None => Err(MediaError::new("host reported generation failure")),
        };
        self.session.deliver_asset(epoch, slot as usize, result);
    }

    #[wasm_bindgen(js_name = presentNow)]
    pub fn present_now(&mut self) {
        self.session.present_now();
    }

    pub fn pick(&mut self, name: &str) -> Result<(), JsValue> {
        self.session
            .pick(name, &mut self.rng)
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Advances trace playback; returns the `PlaybackStep` as a JS
    /// object. Call once per `LINE_INTERVAL_MS`.
    pub fn tick(&mut self) -> JsValue {
        let step = self.session.tick(&mut self.ledger, &mut self.store);
        serde_wasm_bindgen::to_value(&step).unwrap_or(JsValue::NULL)
    }

    /// Delivers narrative commentary. Pass `null` to keep the fallback.
    #[wasm_bindgen(js_name = attachCommentary)]
    pub fn attach_commentary(&mut self, epoch: u64, text: Option<String>) {
        let result = match text {
            Some(text) => Ok(text),
            None => Err(MediaError::new("host reported generation failure")),
        };
        self.session.attach_commentary(epoch, result);
    }

    pub fn phase(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.session.phase()).unwrap_or(JsValue::NULL)
    }

    pub fn fighters(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.session.fighters()).unwrap_or(JsValue::NULL)
    }

    pub fn outcome(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.session.outcome()).unwrap_or(JsValue::NULL)
    }

    pub fn stats(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.ledger).unwrap_or(JsValue::NULL)
    }

    /// Badges satisfied right now, including battle-scoped ones when a
    /// battle has just revealed.
    pub fn achievements(&self) -> JsValue {
        let battle_ctx = match (self.session.outcome(), self.session.player_correct()) {
            (Some(outcome), Some(correct)) => Some(BattleContext {
                winner: &outcome.winner,
                loser: &outcome.loser,
                correct,
            }),
            _ => None,
        };
        serde_wasm_bindgen::to_value(&earned_now(&self.ledger, battle_ctx.as_ref()))
            .unwrap_or(JsValue::NULL)
    }
}
