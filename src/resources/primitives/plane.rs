use glam::Vec3;

use crate::resources::Mesh;

/// Creates a square ground plane of side `size`, centered at the origin in
/// the XZ plane.
///
/// 4 vertices, all normals `(0, 1, 0)`, 6 indices describing 2 triangles
/// wound counter-clockwise when viewed from above.
#[must_use]
pub fn plane(size: f32) -> Mesh {
    let h = size / 2.0;

    let positions = vec![
        Vec3::new(-h, 0.0, -h),
        Vec3::new(-h, 0.0, h),
        Vec3::new(h, 0.0, h),
        Vec3::new(h, 0.0, -h),
    ];

    let normals = vec![Vec3::Y; 4];

    let indices = vec![0, 1, 2, 0, 2, 3];

    Mesh::new(positions, normals, indices).expect("plane geometry is statically valid")
}
