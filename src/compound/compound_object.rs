//! Articulated compound object
//!
//! A root group that owns three pivot segments directly. Moving translates
//! the root group; rotating turns one segment in place about its own pivot
//! axis, independent of the other two.

use cgmath::{Rad, Vector3};

use crate::error::CompoundError;
use crate::gfx::scene::node::SceneNode;

use super::types::{Direction, Rank, Side};

/// Default translation speed in world units per second
pub const MOVE_STEP: f32 = 60.0;

/// Default rotation speed in radians per second
pub const ROTATE_STEP: f32 = 1.5;

pub struct CompoundObject {
    group: SceneNode,
    /// Index into `group.children` for each rank
    segments: [Option<usize>; 3],
    move_step: f32,
    rotate_step: f32,
}

impl CompoundObject {
    /// Creates an empty compound object with the default steps
    pub fn new() -> Self {
        Self::with_steps(MOVE_STEP, ROTATE_STEP)
    }

    pub fn with_steps(move_step: f32, rotate_step: f32) -> Self {
        Self {
            group: SceneNode::group("compound"),
            segments: [None; 3],
            move_step,
            rotate_step,
        }
    }

    /// Attaches `node` under the root group as the `rank` segment
    ///
    /// Each rank can be set once; a second call for the same rank fails and
    /// leaves the hierarchy untouched.
    pub fn set_segment(&mut self, rank: Rank, node: SceneNode) -> Result<(), CompoundError> {
        let slot = &mut self.segments[rank.index()];
        if slot.is_some() {
            return Err(CompoundError::SegmentAlreadySet(rank));
        }

        log::debug!("Attaching '{}' as {} segment", node.name, rank);
        *slot = Some(self.group.add_child(node));
        Ok(())
    }

    pub fn segment(&self, rank: Rank) -> Option<&SceneNode> {
        self.segments[rank.index()].map(|index| &self.group.children[index])
    }

    fn segment_mut(&mut self, rank: Rank) -> Result<&mut SceneNode, CompoundError> {
        let index = self.segments[rank.index()].ok_or(CompoundError::SegmentUnset(rank))?;
        Ok(&mut self.group.children[index])
    }

    /// Root group holding every segment
    pub fn group(&self) -> &SceneNode {
        &self.group
    }

    pub(crate) fn group_mut(&mut self) -> &mut SceneNode {
        &mut self.group
    }

    pub fn position(&self) -> Vector3<f32> {
        self.group.position
    }

    pub fn move_step(&self) -> f32 {
        self.move_step
    }

    pub fn rotate_step(&self) -> f32 {
        self.rotate_step
    }

    /// Translates the root group by `move_step * delta` along `direction`
    pub fn move_towards(&mut self, direction: Direction, delta: f32) {
        let Some(delta) = usable_delta(delta) else {
            return;
        };

        self.group
            .translate(direction.axis(), direction.sign() * self.move_step * delta);
    }

    /// Turns the `rank` segment by `rotate_step * delta` radians about its pivot axis
    pub fn rotate(&mut self, rank: Rank, side: Side, delta: f32) -> Result<(), CompoundError> {
        let angle = side.sign() * self.rotate_step;
        let segment = self.segment_mut(rank)?;

        if let Some(delta) = usable_delta(delta) {
            segment.rotate_about(rank.pivot_axis(), Rad(angle * delta));
        }
        Ok(())
    }
}

impl Default for CompoundObject {
    fn default() -> Self {
        Self::new()
    }
}

/// Filters out deltas that must not move anything: zero, negative, NaN or infinite
fn usable_delta(delta: f32) -> Option<f32> {
    if !delta.is_finite() || delta < 0.0 {
        log::trace!("Ignoring invalid frame delta {delta}");
        return None;
    }
    (delta > 0.0).then_some(delta)
}
