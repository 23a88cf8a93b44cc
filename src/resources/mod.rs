//! CPU-side resources
//!
//! Geometry and image data that live on the CPU before GPU upload:
//! - [`Mesh`]: validated, immutable vertex/normal/index arrays
//! - [`Image`]: decoded RGBA8 pixel data
//! - [`primitives`]: factories for built-in geometry (cube, plane)

pub mod image;
pub mod mesh;
pub mod primitives;

pub use image::Image;
pub use mesh::Mesh;
