//! Seams between the key controller and the things it drives

use crate::compound::{CompoundObject, Direction, Rank, Side};
use crate::context::camera_plugin::CameraKind;
use crate::error::CompoundError;

/// Something that can be translated and have its segments rotated
pub trait Movable {
    /// Translates along `direction`, scaled by `delta` seconds
    fn move_towards(&mut self, direction: Direction, delta: f32);

    /// Rotates the `rank` segment towards `side`, scaled by `delta` seconds
    fn rotate(&mut self, rank: Rank, side: Side, delta: f32) -> Result<(), CompoundError>;
}

/// View state the key controller is allowed to change
pub trait ViewContext {
    fn select_camera(&mut self, kind: CameraKind);

    fn toggle_wireframe(&mut self);
}

impl Movable for CompoundObject {
    fn move_towards(&mut self, direction: Direction, delta: f32) {
        CompoundObject::move_towards(self, direction, delta);
    }

    fn rotate(&mut self, rank: Rank, side: Side, delta: f32) -> Result<(), CompoundError> {
        CompoundObject::rotate(self, rank, side, delta)
    }
}
