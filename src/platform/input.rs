//! Input mapping: keyboard and pointer events to jump requests

use glam::Vec2;

use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};

/// Keys the host may report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    ArrowUp,
    W,
    /// Leave the game screen
    Escape,
    Other,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.code`-style name
    pub fn from_code(code: &str) -> Self {
        match code {
            "Space" => Key::Space,
            "ArrowUp" => Key::ArrowUp,
            "KeyW" => Key::W,
            "Escape" => Key::Escape,
            _ => Key::Other,
        }
    }
}

/// Raw input from the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Key went down (repeats are the host's business to filter)
    KeyDown(Key),
    /// Click or tap, in play-surface coordinates
    PointerDown { pos: Vec2 },
}

/// Whether an event is a jump request.
///
/// Pointer presses only count when they land on the play surface.
pub fn is_jump(event: &InputEvent) -> bool {
    match event {
        InputEvent::KeyDown(key) => matches!(key, Key::Space | Key::ArrowUp | Key::W),
        InputEvent::PointerDown { pos } => {
            (0.0..=FIELD_WIDTH).contains(&pos.x) && (0.0..=FIELD_HEIGHT).contains(&pos.y)
        }
    }
}
