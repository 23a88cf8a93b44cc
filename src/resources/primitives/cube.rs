use glam::Vec3;

use crate::resources::Mesh;

/// Creates a unit cube centered at the origin.
///
/// 24 vertices (4 per face, so each face keeps a sharp normal), 36 indices
/// with counter-clockwise winding.
#[must_use]
pub fn cube() -> Mesh {
    let h = 0.5;

    let positions = vec![
        // Front face (+Z)
        Vec3::new(-h, -h, h),
        Vec3::new(h, -h, h),
        Vec3::new(h, h, h),
        Vec3::new(-h, h, h),
        // Back face (-Z)
        Vec3::new(-h, -h, -h),
        Vec3::new(-h, h, -h),
        Vec3::new(h, h, -h),
        Vec3::new(h, -h, -h),
        // Top face (+Y)
        Vec3::new(-h, h, -h),
        Vec3::new(-h, h, h),
        Vec3::new(h, h, h),
        Vec3::new(h, h, -h),
        // Bottom face (-Y)
        Vec3::new(-h, -h, -h),
        Vec3::new(h, -h, -h),
        Vec3::new(h, -h, h),
        Vec3::new(-h, -h, h),
        // Right face (+X)
        Vec3::new(h, -h, -h),
        Vec3::new(h, h, -h),
        Vec3::new(h, h, h),
        Vec3::new(h, -h, h),
        // Left face (-X)
        Vec3::new(-h, -h, -h),
        Vec3::new(-h, -h, h),
        Vec3::new(-h, h, h),
        Vec3::new(-h, h, -h),
    ];

    // All 4 vertices of each face share the face normal
    let face_normals = [
        Vec3::Z,
        Vec3::NEG_Z,
        Vec3::Y,
        Vec3::NEG_Y,
        Vec3::X,
        Vec3::NEG_X,
    ];
    let normals: Vec<Vec3> = face_normals
        .iter()
        .flat_map(|&n| std::iter::repeat_n(n, 4))
        .collect();

    // 2 triangles per face: 0-1-2, 0-2-3
    let indices: Vec<u32> = (0..6u32)
        .flat_map(|face| {
            let base = face * 4;
            [base, base + 1, base + 2, base, base + 2, base + 3]
        })
        .collect();

    Mesh::new(positions, normals, indices).expect("cube geometry is statically valid")
}
