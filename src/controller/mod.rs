//! # Keyboard Control
//!
//! Turns raw key events into per-frame requests against the compound object
//! and the view context.
//!
//! - [`KeyController`] - held-key tracking and per-frame dispatch
//! - [`LogicalKey`], [`KeyBindings`] - the recognized key set and its physical mapping
//! - [`Movable`], [`ViewContext`] - what the controller drives

pub mod key_controller;
pub mod keys;
pub mod traits;

pub use key_controller::KeyController;
pub use keys::{KeyAction, KeyBindings, LogicalKey};
pub use traits::{Movable, ViewContext};
