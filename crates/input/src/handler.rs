//! Input handler for terminal environments.
//!
//! Folds key events into an [`InputState`] between ticks. Supports terminals
//! that do not emit key release events by releasing a held control once no
//! press or repeat for it has arrived within a timeout. On such terminals a
//! new tap cannot be told apart from a held key, so every press raises a
//! fresh edge.

use arrayvec::ArrayVec;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::map::{control_for_code, control_for_key};
use crate::types::{Control, InputState};

/// Controls touched in one call, at most one entry per control.
pub type ControlSet = ArrayVec<Control, { Control::ALL.len() }>;

// Terminals without release events send auto-repeat presses while a key is
// held (typically every 30-50ms after an initial ~250-500ms delay). A held
// key lapses once during that initial delay.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

#[derive(Debug, Clone)]
pub struct InputHandler {
    state: InputState,
    /// Milliseconds since the last press or repeat, per control
    since_seen_ms: [u32; Control::ALL.len()],
    key_release_timeout_ms: u32,
    /// Set once the terminal has delivered a real release event
    release_events_seen: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            state: InputState::new(),
            since_seen_ms: [0; Control::ALL.len()],
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            release_events_seen: false,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn release_events_seen(&self) -> bool {
        self.release_events_seen
    }

    /// Input for the current tick
    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Fold any crossterm key event; returns the control it mapped to.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<Control> {
        let control = control_for_key(key)?;
        match key.kind {
            KeyEventKind::Press => self.press(control, true),
            KeyEventKind::Repeat => self.press(control, false),
            KeyEventKind::Release => {
                self.release_events_seen = true;
                self.state.release(control);
            }
        }
        Some(control)
    }

    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<Control> {
        let control = control_for_code(code)?;
        self.press(control, true);
        Some(control)
    }

    fn press(&mut self, control: Control, new_tap: bool) {
        self.since_seen_ms[control.index()] = 0;
        if new_tap && !self.release_events_seen {
            self.state.release(control);
        }
        self.state.press(control);
    }

    /// The terminal lost focus: release events for held keys will never arrive.
    pub fn focus_lost(&mut self) {
        self.state.release_all();
        self.since_seen_ms = [0; Control::ALL.len()];
    }

    /// Age held controls and auto-release the stale ones.
    ///
    /// Does nothing once the terminal has proven it reports releases.
    /// Returns the controls released by this call.
    pub fn update(&mut self, elapsed_ms: u32) -> ControlSet {
        let mut released = ControlSet::new();
        if self.release_events_seen {
            return released;
        }

        for control in Control::ALL {
            if self.state.is_up(control) {
                continue;
            }
            let seen = &mut self.since_seen_ms[control.index()];
            *seen = seen.saturating_add(elapsed_ms);
            if *seen > self.key_release_timeout_ms {
                self.state.release(control);
                released.push(control);
            }
        }

        released
    }

    /// Clear the per-tick edges once the simulation has consumed them.
    pub fn end_tick(&mut self) {
        self.state.end_tick();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
