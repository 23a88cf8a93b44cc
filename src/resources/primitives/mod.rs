//! Primitive geometry factories
//!
//! Pure, deterministic constructors for built-in meshes. Identical inputs
//! always produce bit-identical geometry.

pub mod cube;
pub mod plane;

pub use cube::cube;
pub use plane::plane;
