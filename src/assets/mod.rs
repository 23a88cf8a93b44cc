//! Asset loading
//!
//! Synchronous loading of packaged resources:
//! - [`AssetLoader`]: resolves namespaced paths against a packaged asset root
//! - [`RawResource`]: move-only owned byte buffer returned by the loader

pub mod loader;
pub mod raw;

pub use loader::AssetLoader;
pub use raw::RawResource;
