use winit::keyboard::KeyCode;

use crate::error::ViewerError;

use super::keys::{KeyAction, KeyBindings, LogicalKey};
use super::traits::{Movable, ViewContext};

/// Tracks which logical keys are held and turns them into per-frame actions
///
/// Every key has its own flag, so any combination of keys can be held at
/// once. Key events only flip flags; nothing moves until
/// [`process_frame`](KeyController::process_frame) runs.
pub struct KeyController {
    bindings: KeyBindings,
    held: [bool; LogicalKey::COUNT],
}

impl KeyController {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            held: [false; LogicalKey::COUNT],
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Marks the key bound to `code` as held; unbound codes are ignored
    pub fn on_key_down(&mut self, code: KeyCode) {
        if let Some(key) = self.bindings.lookup(code) {
            self.press(key);
        }
    }

    /// Clears the key bound to `code`; unbound codes are ignored
    pub fn on_key_up(&mut self, code: KeyCode) {
        if let Some(key) = self.bindings.lookup(code) {
            self.release(key);
        }
    }

    /// Entry point for raw window events
    ///
    /// OS auto-repeat presses are dropped for momentary keys, so holding "2"
    /// switches camera once instead of on every repeat tick.
    pub fn on_key_event(&mut self, code: KeyCode, pressed: bool, repeat: bool) {
        if !pressed {
            self.on_key_up(code);
            return;
        }

        match self.bindings.lookup(code) {
            Some(key) if repeat && key.is_momentary() => {}
            Some(key) => self.press(key),
            None => log::trace!("Ignoring unbound key {code:?}"),
        }
    }

    pub fn press(&mut self, key: LogicalKey) {
        self.held[key.index()] = true;
    }

    pub fn release(&mut self, key: LogicalKey) {
        self.held[key.index()] = false;
    }

    pub fn is_held(&self, key: LogicalKey) -> bool {
        self.held[key.index()]
    }

    /// Releases every key, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.held = [false; LogicalKey::COUNT];
    }

    /// Dispatches the action of every held key, in [`LogicalKey::ALL`] order
    ///
    /// Momentary keys are cleared right after dispatch; continuous keys stay
    /// held and act again next frame, scaled by that frame's `delta`. The
    /// first failing rotation aborts the remaining dispatch and is returned.
    pub fn process_frame<C, M>(
        &mut self,
        context: &mut C,
        target: &mut M,
        delta: f32,
    ) -> Result<(), ViewerError>
    where
        C: ViewContext + ?Sized,
        M: Movable + ?Sized,
    {
        for key in LogicalKey::ALL {
            if !self.held[key.index()] {
                continue;
            }

            if key.is_momentary() {
                self.held[key.index()] = false;
            }

            match key.action() {
                KeyAction::SelectCamera(kind) => context.select_camera(kind),
                KeyAction::ToggleWireframe => context.toggle_wireframe(),
                KeyAction::Move(direction) => target.move_towards(direction, delta),
                KeyAction::Rotate(rank, side) => target.rotate(rank, side, delta)?,
            }
        }

        Ok(())
    }
}

impl Default for KeyController {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compound::{CompoundObject, Direction, Rank, Side, MOVE_STEP, ROTATE_STEP};
    use crate::config::CameraSettings;
    use crate::context::camera_plugin::CameraKind;
    use crate::context::ContextManagementEngine;
    use crate::error::CompoundError;
    use crate::gfx::scene::node::{Axis, SceneNode};
    use cgmath::{Rad, Vector3};

    #[derive(Default)]
    struct RecordingContext {
        cameras: Vec<CameraKind>,
        toggles: usize,
    }

    impl ViewContext for RecordingContext {
        fn select_camera(&mut self, kind: CameraKind) {
            self.cameras.push(kind);
        }

        fn toggle_wireframe(&mut self) {
            self.toggles += 1;
        }
    }

    #[derive(Default)]
    struct RecordingTarget {
        moves: Vec<(Direction, f32)>,
        rotations: Vec<(Rank, Side, f32)>,
    }

    impl Movable for RecordingTarget {
        fn move_towards(&mut self, direction: Direction, delta: f32) {
            self.moves.push((direction, delta));
        }

        fn rotate(&mut self, rank: Rank, side: Side, delta: f32) -> Result<(), CompoundError> {
            self.rotations.push((rank, side, delta));
            Ok(())
        }
    }

    fn assembled() -> CompoundObject {
        let mut compound = CompoundObject::new();
        for rank in Rank::ALL {
            compound
                .set_segment(rank, SceneNode::group(format!("pivot-{rank}")))
                .unwrap();
        }
        compound
    }

    fn context() -> ContextManagementEngine {
        ContextManagementEngine::new(1400, 700, &CameraSettings::default())
    }

    #[test]
    fn test_key_flags_are_independent() {
        let mut controller = KeyController::default();
        controller.on_key_down(KeyCode::ArrowUp);
        controller.on_key_down(KeyCode::ArrowRight);
        controller.on_key_up(KeyCode::ArrowUp);

        assert!(!controller.is_held(LogicalKey::MoveUp));
        assert!(controller.is_held(LogicalKey::MoveRight));

        controller.on_key_up(KeyCode::ArrowRight);
        assert!(!controller.is_held(LogicalKey::MoveRight));
    }

    #[test]
    fn test_rebound_key_releases_cleanly() {
        let bindings = KeyBindings::default().with_binding(KeyCode::KeyK, LogicalKey::MoveUp);
        let mut controller = KeyController::new(bindings);

        // The old physical key no longer drives MoveUp
        controller.on_key_down(KeyCode::ArrowUp);
        assert!(!controller.is_held(LogicalKey::MoveUp));

        controller.on_key_down(KeyCode::KeyK);
        controller.on_key_up(KeyCode::ArrowUp);
        assert!(controller.is_held(LogicalKey::MoveUp));

        controller.on_key_up(KeyCode::KeyK);
        assert!(!controller.is_held(LogicalKey::MoveUp));
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut controller = KeyController::default();
        controller.on_key_down(KeyCode::KeyP);
        controller.on_key_up(KeyCode::F12);

        assert!(LogicalKey::ALL.iter().all(|key| !controller.is_held(*key)));
    }

    #[test]
    fn test_simultaneous_moves_apply_in_one_frame() {
        let mut controller = KeyController::default();
        let mut context = context();
        let mut compound = assembled();

        controller.on_key_down(KeyCode::ArrowUp);
        controller.on_key_down(KeyCode::ArrowRight);
        controller
            .process_frame(&mut context, &mut compound, 0.5)
            .unwrap();

        let expected = MOVE_STEP * 0.5;
        assert_eq!(compound.position(), Vector3::new(expected, expected, 0.0));
    }

    #[test]
    fn test_continuous_keys_fire_every_frame() {
        let mut controller = KeyController::default();
        let mut context = RecordingContext::default();
        let mut target = RecordingTarget::default();

        controller.on_key_down(KeyCode::KeyA);
        for delta in [0.1, 0.2, 0.3] {
            controller
                .process_frame(&mut context, &mut target, delta)
                .unwrap();
        }

        assert_eq!(
            target.rotations,
            [
                (Rank::Secondary, Side::Left, 0.1),
                (Rank::Secondary, Side::Left, 0.2),
                (Rank::Secondary, Side::Left, 0.3),
            ]
        );
        assert!(controller.is_held(LogicalKey::RotateSecondaryLeft));
    }

    #[test]
    fn test_momentary_key_fires_once() {
        let mut controller = KeyController::default();
        let mut context = context();
        let mut compound = assembled();

        controller.on_key_down(KeyCode::Digit2);
        controller
            .process_frame(&mut context, &mut compound, 0.016)
            .unwrap();
        assert_eq!(context.camera_kind(), CameraKind::Top);
        assert!(!controller.is_held(LogicalKey::SelectTop));

        context.select_camera(CameraKind::Side);
        for _ in 0..3 {
            controller
                .process_frame(&mut context, &mut compound, 0.016)
                .unwrap();
        }
        assert_eq!(context.camera_kind(), CameraKind::Side);
    }

    #[test]
    fn test_auto_repeat_does_not_rearm_momentary_keys() {
        let mut controller = KeyController::default();
        let mut context = RecordingContext::default();
        let mut target = RecordingTarget::default();

        controller.on_key_event(KeyCode::Digit4, true, false);
        controller.process_frame(&mut context, &mut target, 0.016).unwrap();
        controller.on_key_event(KeyCode::Digit4, true, true);
        controller.process_frame(&mut context, &mut target, 0.016).unwrap();
        assert_eq!(context.toggles, 1);

        // A repeated arrow key keeps moving
        controller.on_key_event(KeyCode::ArrowDown, true, true);
        controller.process_frame(&mut context, &mut target, 0.016).unwrap();
        assert_eq!(target.moves, [(Direction::Down, 0.016)]);

        controller.on_key_event(KeyCode::ArrowDown, false, false);
        assert!(!controller.is_held(LogicalKey::MoveDown));
    }

    #[test]
    fn test_dispatch_follows_fixed_order() {
        let mut controller = KeyController::default();
        let mut context = RecordingContext::default();
        let mut target = RecordingTarget::default();

        for code in [
            KeyCode::KeyX,
            KeyCode::KeyC,
            KeyCode::Digit3,
            KeyCode::KeyQ,
            KeyCode::ArrowLeft,
            KeyCode::Digit1,
        ] {
            controller.on_key_down(code);
        }
        controller.process_frame(&mut context, &mut target, 1.0).unwrap();

        assert_eq!(context.cameras, [CameraKind::Frontal, CameraKind::Side]);
        assert_eq!(
            target.moves,
            [(Direction::Left, 1.0), (Direction::Forward, 1.0)]
        );
        assert_eq!(
            target.rotations,
            [
                (Rank::Primary, Side::Left, 1.0),
                (Rank::Tertiary, Side::Right, 1.0),
            ]
        );
    }

    #[test]
    fn test_camera_switch_without_release() {
        let mut controller = KeyController::default();
        let mut context = context();
        let mut compound = assembled();

        controller.on_key_down(KeyCode::Digit1);
        controller
            .process_frame(&mut context, &mut compound, 0.016)
            .unwrap();
        assert_eq!(context.camera_kind(), CameraKind::Frontal);

        controller.on_key_down(KeyCode::Digit3);
        assert!(!controller.is_held(LogicalKey::SelectFrontal));
        controller
            .process_frame(&mut context, &mut compound, 0.016)
            .unwrap();
        assert_eq!(context.camera_kind(), CameraKind::Side);
    }

    #[test]
    fn test_wireframe_key_raises_toggle_edge() {
        let mut controller = KeyController::default();
        let mut context = context();
        let mut compound = assembled();

        controller.on_key_down(KeyCode::Digit4);
        controller
            .process_frame(&mut context, &mut compound, 0.016)
            .unwrap();

        assert!(context.wireframe_enabled());
        assert_eq!(context.take_wireframe_change(), Some(true));
        assert_eq!(context.take_wireframe_change(), None);
    }

    #[test]
    fn test_rotation_error_surfaces() {
        let mut controller = KeyController::default();
        let mut context = context();
        let mut compound = CompoundObject::new();

        controller.on_key_down(KeyCode::KeyW);
        let result = controller.process_frame(&mut context, &mut compound, 0.1);

        assert!(matches!(
            result,
            Err(ViewerError::Compound(CompoundError::SegmentUnset(Rank::Primary)))
        ));
    }

    #[test]
    fn test_held_rotation_scales_with_delta() {
        let mut controller = KeyController::default();
        let mut context = context();
        let mut compound = assembled();

        controller.on_key_down(KeyCode::KeyZ);
        controller
            .process_frame(&mut context, &mut compound, 0.25)
            .unwrap();
        controller.on_key_up(KeyCode::KeyZ);
        controller
            .process_frame(&mut context, &mut compound, 0.25)
            .unwrap();

        let tertiary = compound.segment(Rank::Tertiary).unwrap();
        assert_eq!(tertiary.rotation_about(Axis::Y), Rad(ROTATE_STEP * 0.25));
    }

    #[test]
    fn test_release_all_clears_every_flag() {
        let mut controller = KeyController::default();
        for key in LogicalKey::ALL {
            controller.press(key);
        }
        controller.release_all();
        assert!(LogicalKey::ALL.iter().all(|key| !controller.is_held(*key)));
    }
}
