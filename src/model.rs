//! Core data models for the swipe pad.
//! Touch input and keyboard input both resolve to a `SwipeDirection`.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;
use yew::Reducible;

/// How many recent signals the history keeps.
pub const HISTORY_LEN: usize = 10;

/// A touch coordinate in UI-surface units (CSS pixels, `clientX`/`clientY`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

impl TouchPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Directional signal, serialized as the matching arrow-key identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwipeDirection {
    #[serde(rename = "ArrowLeft")]
    Left,
    #[serde(rename = "ArrowRight")]
    Right,
    #[serde(rename = "ArrowUp")]
    Up,
    #[serde(rename = "ArrowDown")]
    Down,
}

impl SwipeDirection {
    pub const ALL: [SwipeDirection; 4] = [
        SwipeDirection::Left,
        SwipeDirection::Right,
        SwipeDirection::Up,
        SwipeDirection::Down,
    ];

    /// The `KeyboardEvent.key` value for this direction.
    pub fn key(self) -> &'static str {
        match self {
            SwipeDirection::Left => "ArrowLeft",
            SwipeDirection::Right => "ArrowRight",
            SwipeDirection::Up => "ArrowUp",
            SwipeDirection::Down => "ArrowDown",
        }
    }

    /// Maps a `KeyboardEvent.key` value back into the signal space.
    /// Non-arrow keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(SwipeDirection::Left),
            "ArrowRight" => Some(SwipeDirection::Right),
            "ArrowUp" => Some(SwipeDirection::Up),
            "ArrowDown" => Some(SwipeDirection::Down),
            _ => None,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            SwipeDirection::Left => "←",
            SwipeDirection::Right => "→",
            SwipeDirection::Up => "↑",
            SwipeDirection::Down => "↓",
        }
    }

    fn index(self) -> usize {
        match self {
            SwipeDirection::Left => 0,
            SwipeDirection::Right => 1,
            SwipeDirection::Up => 2,
            SwipeDirection::Down => 3,
        }
    }
}

impl fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputSource {
    Touch,
    Keyboard,
}

impl InputSource {
    pub fn label(self) -> &'static str {
        match self {
            InputSource::Touch => "touch",
            InputSource::Keyboard => "keyboard",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    pub dir: SwipeDirection,
    pub source: InputSource,
    /// Monotonic sequence number, unique within a session.
    pub seq: u64,
}

/// User preferences, persisted as JSON in local storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub show_history: bool,
    /// Raise console logging to debug so every gesture is traced.
    pub log_gestures: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_history: true,
            log_gestures: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignalState {
    pub last: Option<Signal>,
    /// Per-direction totals, indexed like `SwipeDirection::ALL`.
    pub counts: [u32; 4],
    /// Most recent first.
    pub history: VecDeque<Signal>,
    pub next_seq: u64,
}

impl SignalState {
    pub fn count(&self, dir: SwipeDirection) -> u32 {
        self.counts[dir.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SignalAction {
    Input {
        dir: SwipeDirection,
        source: InputSource,
    },
    Clear,
}

impl Reducible for SignalState {
    type Action = SignalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            SignalAction::Input { dir, source } => {
                let signal = Signal {
                    dir,
                    source,
                    seq: new.next_seq,
                };
                new.next_seq = new.next_seq.saturating_add(1);
                let slot = &mut new.counts[dir.index()];
                *slot = slot.saturating_add(1);
                new.history.push_front(signal);
                new.history.truncate(HISTORY_LEN);
                new.last = Some(signal);
            }
            SignalAction::Clear => {
                // Keep the sequence running so history keys stay unique.
                let next_seq = new.next_seq;
                new = SignalState {
                    next_seq,
                    ..Default::default()
                };
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(state: Rc<SignalState>, dir: SwipeDirection, source: InputSource) -> Rc<SignalState> {
        state.reduce(SignalAction::Input { dir, source })
    }

    #[test]
    fn key_identifiers_round_trip() {
        for dir in SwipeDirection::ALL {
            assert_eq!(SwipeDirection::from_key(dir.key()), Some(dir));
        }
        assert_eq!(SwipeDirection::Left.to_string(), "ArrowLeft");
    }

    #[test]
    fn non_arrow_keys_are_ignored() {
        assert_eq!(SwipeDirection::from_key("a"), None);
        assert_eq!(SwipeDirection::from_key(" "), None);
        assert_eq!(SwipeDirection::from_key("arrowleft"), None);
        assert_eq!(SwipeDirection::from_key("Left"), None);
    }

    #[test]
    fn direction_serializes_as_key_literal() {
        let json = serde_json::to_string(&SwipeDirection::Down).unwrap();
        assert_eq!(json, "\"ArrowDown\"");
        let back: SwipeDirection = serde_json::from_str("\"ArrowUp\"").unwrap();
        assert_eq!(back, SwipeDirection::Up);
    }

    #[test]
    fn settings_fill_missing_fields_with_defaults() {
        let s: Settings = serde_json::from_str("{\"log_gestures\":true}").unwrap();
        assert!(s.show_history);
        assert!(s.log_gestures);
        let empty: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Settings::default());
    }

    #[test]
    fn input_updates_last_counts_and_history() {
        let mut state = Rc::new(SignalState::default());
        state = input(state, SwipeDirection::Right, InputSource::Touch);
        state = input(state, SwipeDirection::Right, InputSource::Keyboard);
        state = input(state, SwipeDirection::Up, InputSource::Touch);

        let last = state.last.unwrap();
        assert_eq!(last.dir, SwipeDirection::Up);
        assert_eq!(last.source, InputSource::Touch);
        assert_eq!(last.seq, 2);
        assert_eq!(state.count(SwipeDirection::Right), 2);
        assert_eq!(state.count(SwipeDirection::Up), 1);
        assert_eq!(state.count(SwipeDirection::Left), 0);
        assert_eq!(state.total(), 3);
        assert_eq!(state.history.front().map(|s| s.dir), Some(SwipeDirection::Up));
        assert_eq!(state.history.back().map(|s| s.dir), Some(SwipeDirection::Right));
    }

    #[test]
    fn history_is_bounded() {
        let mut state = Rc::new(SignalState::default());
        for _ in 0..(HISTORY_LEN + 5) {
            state = input(state, SwipeDirection::Left, InputSource::Keyboard);
        }
        assert_eq!(state.history.len(), HISTORY_LEN);
        assert_eq!(state.count(SwipeDirection::Left), (HISTORY_LEN + 5) as u32);
        assert_eq!(state.history.front().unwrap().seq, (HISTORY_LEN + 4) as u64);
    }

    #[test]
    fn clear_resets_everything_but_sequence() {
        let mut state = Rc::new(SignalState::default());
        state = input(state, SwipeDirection::Down, InputSource::Touch);
        state = state.reduce(SignalAction::Clear);
        assert_eq!(state.last, None);
        assert_eq!(state.total(), 0);
        assert!(state.history.is_empty());

        state = input(state, SwipeDirection::Down, InputSource::Touch);
        assert_eq!(state.last.unwrap().seq, 1);
    }
}
