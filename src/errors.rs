//! Error Types
//!
//! This module defines the error types used throughout the engine.
//!
//! # Overview
//!
//! The main error type [`UmbraError`] covers all failure modes including:
//! - GPU initialization and render-target setup failures
//! - Asset loading and decoding errors
//! - Geometry validation errors
//! - Shadow-map bind-state violations
//!
//! # Usage
//!
//! All public APIs return [`Result<T>`] which is an alias for `std::result::Result<T, UmbraError>`.

use thiserror::Error;

/// The main error type for the Umbra engine.
///
/// Each variant provides specific context about what went wrong. Asset
/// lookups distinguish "the resource does not exist" ([`UmbraError::AssetNotFound`])
/// from "the resource exists but could not be read" ([`UmbraError::Io`]) so
/// callers can fall back on the former and abort on the latter.
#[derive(Error, Debug)]
pub enum UmbraError {
    // ========================================================================
    // GPU & Rendering Errors
    // ========================================================================
    /// Failed to request a compatible GPU adapter.
    #[error("Failed to request WGPU adapter: {0}")]
    AdapterRequestFailed(String),

    /// Failed to create the GPU device.
    #[error("Failed to create WGPU device: {0}")]
    DeviceCreateFailed(#[from] wgpu::RequestDeviceError),

    /// A depth render target could not reach a usable state.
    ///
    /// Fatal to the resource being constructed: no partially-usable value
    /// is returned alongside this error.
    #[error("Framebuffer incomplete: {0}")]
    FramebufferIncomplete(String),

    /// A shadow-map bind/unbind call arrived out of order.
    #[error("Invalid bind state: expected {expected}, was {actual}")]
    InvalidBindState {
        /// State the operation requires
        expected: &'static str,
        /// State the shadow map was actually in
        actual: &'static str,
    },

    // ========================================================================
    // Asset Loading Errors
    // ========================================================================
    /// The requested asset was not found in the packaged namespace.
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    /// File I/O error while streaming asset bytes.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decoding error.
    #[error("Image decode error: {0}")]
    ImageDecodeError(String),

    // ========================================================================
    // Geometry Errors
    // ========================================================================
    /// Mesh data violated a structural invariant.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),
}

impl From<image::ImageError> for UmbraError {
    fn from(err: image::ImageError) -> Self {
        UmbraError::ImageDecodeError(err.to_string())
    }
}

/// Alias for `Result<T, UmbraError>`.
pub type Result<T> = std::result::Result<T, UmbraError>;
