use std::ops::Deref;

/// An owned, fixed-length byte buffer produced by the [`AssetLoader`].
///
/// The buffer is immutable after load. `RawResource` is deliberately
/// move-only (no `Clone`): ownership transfers to whoever holds the value,
/// and the backing memory is freed exactly once when it is dropped or
/// explicitly [`release`]d. Double-free and use-after-free are therefore
/// unrepresentable rather than merely discouraged.
///
/// [`AssetLoader`]: crate::assets::AssetLoader
/// [`release`]: RawResource::release
#[derive(Debug)]
pub struct RawResource {
    path: String,
    bytes: Box<[u8]>,
}

impl RawResource {
    pub(crate) fn new(path: String, bytes: Vec<u8>) -> Self {
        Self {
            path,
            bytes: bytes.into_boxed_slice(),
        }
    }

    /// The namespaced path this resource was loaded from.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Length of the buffer in bytes, equal to the packaged resource length.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Read-only view of the loaded bytes.
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Explicitly releases the buffer.
    ///
    /// Equivalent to dropping the value; provided so call sites that manage
    /// native resource lifetimes can make the release visible in the code.
    pub fn release(self) {
        log::debug!("releasing resource buffer '{}' ({} bytes)", self.path, self.bytes.len());
    }
}

impl Deref for RawResource {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<[u8]> for RawResource {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
