//! Error types for the viewer
//!
//! [`CompoundError`] covers caller mistakes against the articulated object,
//! [`ViewerError`] everything that can go wrong while bringing up the window,
//! the GPU or running a frame.

use thiserror::Error;

use crate::compound::Rank;

/// Precondition failures of [`CompoundObject`](crate::compound::CompoundObject) operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompoundError {
    #[error("{0} segment has not been set")]
    SegmentUnset(Rank),

    #[error("{0} segment is already set and cannot be reassigned")]
    SegmentAlreadySet(Rank),
}

/// Top level error of the viewer
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error(transparent)]
    Compound(#[from] CompoundError),

    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("failed to request GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("failed to acquire the next frame: {0}")]
    Frame(#[from] wgpu::SurfaceError),

    #[error("surface does not support any texture format")]
    NoSurfaceFormat,

    #[error("render pipeline '{0}' is not available")]
    MissingPipeline(String),

    #[error("geometry {0} has not been uploaded to the GPU")]
    MissingMesh(usize),
}

pub type Result<T, E = ViewerError> = std::result::Result<T, E>;
