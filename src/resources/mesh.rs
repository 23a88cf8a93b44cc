use glam::Vec3;

use crate::errors::{Result, UmbraError};

/// Immutable triangle geometry.
///
/// A mesh holds an ordered sequence of vertex positions, an index-aligned
/// sequence of normals, and a triangle index list. Construction validates
/// the structural invariants; after that the data never changes, so meshes
/// can be shared read-only across any number of scene nodes.
///
/// This is the shape every mesh source must produce — the built-in
/// [`primitives`](crate::resources::primitives) as well as any external
/// importer.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    indices: Vec<u32>,
}

impl Mesh {
    /// Builds a mesh, validating the invariants:
    ///
    /// - `normals.len() == positions.len()` (index-aligned attributes)
    /// - `indices.len()` is a multiple of 3 (whole triangles)
    /// - every index is `< positions.len()`
    pub fn new(positions: Vec<Vec3>, normals: Vec<Vec3>, indices: Vec<u32>) -> Result<Self> {
        if normals.len() != positions.len() {
            return Err(UmbraError::InvalidMesh(format!(
                "normal count {} does not match vertex count {}",
                normals.len(),
                positions.len()
            )));
        }
        if indices.len() % 3 != 0 {
            return Err(UmbraError::InvalidMesh(format!(
                "index count {} is not a multiple of 3",
                indices.len()
            )));
        }
        let vertex_count = positions.len() as u32;
        if let Some(&out_of_range) = indices.iter().find(|&&i| i >= vertex_count) {
            return Err(UmbraError::InvalidMesh(format!(
                "index {out_of_range} out of range for {vertex_count} vertices"
            )));
        }

        Ok(Self {
            positions,
            normals,
            indices,
        })
    }

    #[inline]
    #[must_use]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    #[must_use]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles described by the index list.
    #[inline]
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
