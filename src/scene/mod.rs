//! Scene model
//!
//! The pieces a scene is composed from:
//! - [`Transform`]: position, rotation, scale with an on-demand model matrix
//! - [`GameObject`]: a positioned, textured mesh instance
//! - [`DirectionalLight`] / [`PointLight`]: the light model, including the
//!   directional light's shadow projection and point-light attenuation

pub mod game_object;
pub mod light;
pub mod transform;

pub use game_object::GameObject;
pub use light::{Attenuation, DirectionalLight, PointLight};
pub use transform::Transform;
