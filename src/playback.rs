//! Step-driven reveal of the simulation trace.
//!
//! The host owns the timer and calls [`ConsolePlayback::tick`] once per
//! interval; the playback owns the cursor, the trailing hold, and the
//! single completion signal. Cancelling (when a new battle starts
//! mid-playback) guarantees `Done` is never emitted for the stale run.

use serde::{Deserialize, Serialize};

/// Suggested milliseconds between reveal ticks.
pub const LINE_INTERVAL_MS: u64 = 150;
/// Suggested hold after the last line before the outcome is revealed.
pub const COMPLETE_HOLD_MS: u64 = 1000;

const HOLD_TICKS: u32 = (COMPLETE_HOLD_MS / LINE_INTERVAL_MS) as u32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum PlaybackStep {
    /// The next console line to show.
    Line(String),
    /// All lines shown; holding before completion.
    Hold,
    /// Playback finished. Emitted exactly once.
    Done,
    /// Nothing left to do (already finished, or cancelled).
    Idle,
}

#[derive(Debug, Clone)]
pub struct ConsolePlayback {
    lines: Vec<String>,
    cursor: usize,
    hold_remaining: u32,
    done_emitted: bool,
    cancelled: bool,
}

impl ConsolePlayback {
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            lines,
            cursor: 0,
            hold_remaining: HOLD_TICKS,
            done_emitted: false,
            cancelled: false,
        }
    }

    /// Advance one step. Yields every line once in order, then `Hold`
    /// for the trailing delay, then `Done` exactly once, then `Idle`.
    pub fn tick(&mut self) -> PlaybackStep {
        if self.cancelled {
            return PlaybackStep::Idle;
        }
        if self.cursor < self.lines.len() {
            let line = self.lines[self.cursor].clone();
            self.cursor += 1;
            return PlaybackStep::Line(line);
        }
        if self.hold_remaining > 0 {
            self.hold_remaining -= 1;
            return PlaybackStep::Hold;
        }
        if !self.done_emitted {
            self.done_emitted = true;
            return PlaybackStep::Done;
        }
        PlaybackStep::Idle
    }

    /// Stop the playback. A cancelled playback never yields `Done`, so a
    /// stale run can never finalize a newer session.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn is_finished(&self) -> bool {
        self.done_emitted
    }
}
