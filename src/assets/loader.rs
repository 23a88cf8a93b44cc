use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

use crate::assets::RawResource;
use crate::errors::{Result, UmbraError};

/// Loader for packaged assets, anchored at a root directory.
///
/// Paths are flat, `/`-separated and relative; nothing outside the packaged
/// namespace is addressable. Loading is synchronous: the call returns an
/// owned [`RawResource`] or fails before the caller proceeds.
///
/// Failure kinds are distinct so callers can react differently:
/// - [`UmbraError::AssetNotFound`]: the path does not name a packaged
///   resource (recoverable, e.g. by a fallback asset)
/// - [`UmbraError::Io`]: the resource exists but streaming its bytes failed
pub struct AssetLoader {
    root: PathBuf,
}

impl AssetLoader {
    /// Creates a loader rooted at the given asset directory.
    ///
    /// If `root` names a file, its parent directory is used, so a loader can
    /// be anchored next to a manifest the same way it is anchored to a
    /// directory.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let path = root.as_ref();
        let root = if path.is_file() {
            path.parent().unwrap_or(Path::new(".")).to_path_buf()
        } else {
            path.to_path_buf()
        };
        Self { root }
    }

    /// The asset namespace root.
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Loads a namespaced resource into an owned byte buffer.
    ///
    /// The returned buffer's length equals the resource's byte length. On
    /// the failure path nothing is leaked: any partially-read buffer is
    /// dropped before the error propagates.
    pub fn load(&self, path: &str) -> Result<RawResource> {
        let Some(relative) = namespaced(path) else {
            return Err(UmbraError::AssetNotFound(path.to_string()));
        };

        let full = self.root.join(relative);
        match std::fs::read(&full) {
            Ok(bytes) => {
                log::debug!("loaded '{}' ({} bytes)", path, bytes.len());
                Ok(RawResource::new(path.to_string(), bytes))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(UmbraError::AssetNotFound(path.to_string()))
            }
            Err(err) => Err(UmbraError::Io(err)),
        }
    }
}

/// Validates that a resource path stays inside the asset namespace.
///
/// Returns the path as a relative `PathBuf`, or `None` for absolute paths,
/// drive prefixes, and any `..` component.
fn namespaced(path: &str) -> Option<PathBuf> {
    let relative = Path::new(path);
    let mut out = PathBuf::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    if out.as_os_str().is_empty() { None } else { Some(out) }
}
