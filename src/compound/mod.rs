//! # Articulated Compound Object
//!
//! The one movable thing in the scene: a root group with three pivoted
//! segments (primary, secondary, tertiary), akin to a small articulated arm.
//!
//! - [`CompoundObject`] - owns the hierarchy and applies move/rotate requests
//! - [`Direction`], [`Rank`], [`Side`] - closed tag sets for those requests
//!
//! All steps are scaled by the frame delta, so motion speed does not depend
//! on the frame rate.

pub mod compound_object;
pub mod types;

pub use compound_object::{CompoundObject, MOVE_STEP, ROTATE_STEP};
pub use types::{Direction, Rank, Side};
