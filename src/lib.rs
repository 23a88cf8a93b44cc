#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod assets;
pub mod errors;
pub mod renderer;
pub mod resources;
pub mod scene;

pub use assets::{AssetLoader, RawResource};
pub use errors::UmbraError;
pub use renderer::{GpuMesh, ShadowMap, ShadowMapConfig, Texture, WgpuContext};
pub use resources::{Image, Mesh};
pub use resources::primitives::{cube, plane};
pub use scene::{Attenuation, DirectionalLight, GameObject, PointLight, Transform};
