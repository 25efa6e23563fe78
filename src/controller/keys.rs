//! Logical key set, the action each key triggers, and physical key bindings

use std::collections::HashMap;

use winit::keyboard::KeyCode;

use crate::compound::{Direction, Rank, Side};
use crate::context::camera_plugin::CameraKind;

/// The fixed set of inputs the viewer reacts to
///
/// Declaration order is the dispatch order used by
/// [`KeyController::process_frame`](super::KeyController::process_frame).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalKey {
    SelectFrontal,
    SelectTop,
    SelectSide,
    ToggleWireframe,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    MoveBackwards,
    MoveForward,
    RotatePrimaryLeft,
    RotatePrimaryRight,
    RotateSecondaryLeft,
    RotateSecondaryRight,
    RotateTertiaryLeft,
    RotateTertiaryRight,
}

/// What a logical key asks for when dispatched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    SelectCamera(CameraKind),
    ToggleWireframe,
    Move(Direction),
    Rotate(Rank, Side),
}

impl LogicalKey {
    pub const COUNT: usize = 16;

    pub const ALL: [LogicalKey; Self::COUNT] = [
        LogicalKey::SelectFrontal,
        LogicalKey::SelectTop,
        LogicalKey::SelectSide,
        LogicalKey::ToggleWireframe,
        LogicalKey::MoveUp,
        LogicalKey::MoveDown,
        LogicalKey::MoveLeft,
        LogicalKey::MoveRight,
        LogicalKey::MoveBackwards,
        LogicalKey::MoveForward,
        LogicalKey::RotatePrimaryLeft,
        LogicalKey::RotatePrimaryRight,
        LogicalKey::RotateSecondaryLeft,
        LogicalKey::RotateSecondaryRight,
        LogicalKey::RotateTertiaryLeft,
        LogicalKey::RotateTertiaryRight,
    ];

    /// Position in [`LogicalKey::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn action(self) -> KeyAction {
        match self {
            LogicalKey::SelectFrontal => KeyAction::SelectCamera(CameraKind::Frontal),
            LogicalKey::SelectTop => KeyAction::SelectCamera(CameraKind::Top),
            LogicalKey::SelectSide => KeyAction::SelectCamera(CameraKind::Side),
            LogicalKey::ToggleWireframe => KeyAction::ToggleWireframe,
            LogicalKey::MoveUp => KeyAction::Move(Direction::Up),
            LogicalKey::MoveDown => KeyAction::Move(Direction::Down),
            LogicalKey::MoveLeft => KeyAction::Move(Direction::Left),
            LogicalKey::MoveRight => KeyAction::Move(Direction::Right),
            LogicalKey::MoveBackwards => KeyAction::Move(Direction::Backwards),
            LogicalKey::MoveForward => KeyAction::Move(Direction::Forward),
            LogicalKey::RotatePrimaryLeft => KeyAction::Rotate(Rank::Primary, Side::Left),
            LogicalKey::RotatePrimaryRight => KeyAction::Rotate(Rank::Primary, Side::Right),
            LogicalKey::RotateSecondaryLeft => KeyAction::Rotate(Rank::Secondary, Side::Left),
            LogicalKey::RotateSecondaryRight => KeyAction::Rotate(Rank::Secondary, Side::Right),
            LogicalKey::RotateTertiaryLeft => KeyAction::Rotate(Rank::Tertiary, Side::Left),
            LogicalKey::RotateTertiaryRight => KeyAction::Rotate(Rank::Tertiary, Side::Right),
        }
    }

    /// Momentary keys fire once per press; all others fire every held frame
    pub fn is_momentary(self) -> bool {
        matches!(
            self.action(),
            KeyAction::SelectCamera(_) | KeyAction::ToggleWireframe
        )
    }

    /// Maps legacy DOM-style virtual key codes (`49` for "1", `38` for the up arrow, ...)
    pub fn from_virtual_key_code(code: u32) -> Option<Self> {
        let key = match code {
            49 => LogicalKey::SelectFrontal,
            50 => LogicalKey::SelectTop,
            51 => LogicalKey::SelectSide,
            52 => LogicalKey::ToggleWireframe,
            38 => LogicalKey::MoveUp,
            40 => LogicalKey::MoveDown,
            37 => LogicalKey::MoveLeft,
            39 => LogicalKey::MoveRight,
            68 => LogicalKey::MoveBackwards,
            67 => LogicalKey::MoveForward,
            81 => LogicalKey::RotatePrimaryLeft,
            87 => LogicalKey::RotatePrimaryRight,
            65 => LogicalKey::RotateSecondaryLeft,
            83 => LogicalKey::RotateSecondaryRight,
            90 => LogicalKey::RotateTertiaryLeft,
            88 => LogicalKey::RotateTertiaryRight,
            _ => return None,
        };
        Some(key)
    }
}

/// Physical key → logical key table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    map: HashMap<KeyCode, LogicalKey>,
}

impl KeyBindings {
    /// Binds `code` to `key`
    ///
    /// Each logical key has exactly one physical key: whatever `code` and
    /// `key` were bound to before is dropped.
    pub fn bind(&mut self, code: KeyCode, key: LogicalKey) -> &mut Self {
        self.map.retain(|_, bound| *bound != key);
        self.map.insert(code, key);
        self
    }

    pub fn with_binding(mut self, code: KeyCode, key: LogicalKey) -> Self {
        self.bind(code, key);
        self
    }

    pub fn lookup(&self, code: KeyCode) -> Option<LogicalKey> {
        self.map.get(&code).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let table = [
            (KeyCode::Digit1, LogicalKey::SelectFrontal),
            (KeyCode::Digit2, LogicalKey::SelectTop),
            (KeyCode::Digit3, LogicalKey::SelectSide),
            (KeyCode::Digit4, LogicalKey::ToggleWireframe),
            (KeyCode::ArrowUp, LogicalKey::MoveUp),
            (KeyCode::ArrowDown, LogicalKey::MoveDown),
            (KeyCode::ArrowLeft, LogicalKey::MoveLeft),
            (KeyCode::ArrowRight, LogicalKey::MoveRight),
            (KeyCode::KeyD, LogicalKey::MoveBackwards),
            (KeyCode::KeyC, LogicalKey::MoveForward),
            (KeyCode::KeyQ, LogicalKey::RotatePrimaryLeft),
            (KeyCode::KeyW, LogicalKey::RotatePrimaryRight),
            (KeyCode::KeyA, LogicalKey::RotateSecondaryLeft),
            (KeyCode::KeyS, LogicalKey::RotateSecondaryRight),
            (KeyCode::KeyZ, LogicalKey::RotateTertiaryLeft),
            (KeyCode::KeyX, LogicalKey::RotateTertiaryRight),
        ];

        Self {
            map: table.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_dispatch_order() {
        for (position, key) in LogicalKey::ALL.iter().enumerate() {
            assert_eq!(key.index(), position);
        }
    }

    #[test]
    fn test_only_camera_and_wireframe_keys_are_momentary() {
        let momentary: Vec<LogicalKey> = LogicalKey::ALL
            .into_iter()
            .filter(|key| key.is_momentary())
            .collect();
        assert_eq!(
            momentary,
            [
                LogicalKey::SelectFrontal,
                LogicalKey::SelectTop,
                LogicalKey::SelectSide,
                LogicalKey::ToggleWireframe,
            ]
        );
    }

    #[test]
    fn test_default_bindings_cover_every_logical_key() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.len(), LogicalKey::COUNT);
        for key in LogicalKey::ALL {
            assert!(bindings.map.values().any(|bound| *bound == key), "{key:?}");
        }
        assert_eq!(bindings.lookup(KeyCode::KeyQ), Some(LogicalKey::RotatePrimaryLeft));
        assert_eq!(bindings.lookup(KeyCode::KeyP), None);
    }

    #[test]
    fn test_virtual_key_codes_follow_same_table() {
        assert_eq!(LogicalKey::from_virtual_key_code(50), Some(LogicalKey::SelectTop));
        assert_eq!(LogicalKey::from_virtual_key_code(68), Some(LogicalKey::MoveBackwards));
        assert_eq!(LogicalKey::from_virtual_key_code(88), Some(LogicalKey::RotateTertiaryRight));
        assert_eq!(LogicalKey::from_virtual_key_code(13), None);
    }

    #[test]
    fn test_rebinding_replaces_code() {
        let bindings = KeyBindings::default().with_binding(KeyCode::KeyQ, LogicalKey::MoveUp);
        assert_eq!(bindings.lookup(KeyCode::KeyQ), Some(LogicalKey::MoveUp));
        assert_eq!(bindings.lookup(KeyCode::ArrowUp), None);
        // RotatePrimaryLeft lost its only key
        assert_eq!(bindings.len(), LogicalKey::COUNT - 1);
    }

    #[test]
    fn test_each_logical_key_has_one_code() {
        let bindings = KeyBindings::default().with_binding(KeyCode::KeyK, LogicalKey::MoveUp);
        let codes = bindings
            .map
            .values()
            .filter(|bound| **bound == LogicalKey::MoveUp)
            .count();
        assert_eq!(codes, 1);
        assert_eq!(bindings.lookup(KeyCode::KeyK), Some(LogicalKey::MoveUp));
    }
}
