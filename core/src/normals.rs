use glam::Vec3;

// Smooth per-vertex normals for a row-major size×size vertex grid.
//
// Every quad (row, col) in [0, size−1)² splits into the two triangles
// (i0, i2, i1) and (i1, i2, i3), wound so a flat grid faces +Y. Face
// normals are accumulated unnormalized, so larger triangles weigh more
// in the per-vertex average, then the sums are normalized. Boundary
// vertices simply receive fewer contributions; there is no wraparound.
pub fn vertex_normals(vertices: &[Vec3], size: usize) -> Vec<Vec3> {
    debug_assert_eq!(vertices.len(), size * size);
    let mut normals = vec![Vec3::ZERO; vertices.len()];

    for row in 0..size - 1 {
        for col in 0..size - 1 {
            let i0 = row * size + col;
            let i1 = i0 + 1;
            let i2 = i0 + size;
            let i3 = i2 + 1;

            let v0 = vertices[i0];
            let v1 = vertices[i1];
            let v2 = vertices[i2];
            let v3 = vertices[i3];

            // Triangle (i0, i2, i1)
            let n0 = (v2 - v0).cross(v1 - v0);
            normals[i0] += n0;
            normals[i2] += n0;
            normals[i1] += n0;

            // Triangle (i1, i2, i3)
            let n1 = (v2 - v1).cross(v3 - v1);
            normals[i1] += n1;
            normals[i2] += n1;
            normals[i3] += n1;
        }
    }

    normals
        .into_iter()
        .map(|n| {
            let unit = n.normalize_or_zero();
            // Degenerate accumulation (all incident triangles with zero
            // area) falls back to straight up
            if unit == Vec3::ZERO { Vec3::Y } else { unit }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::vertex_normals;
    use glam::Vec3;

    fn flat_grid(size: usize) -> Vec<Vec3> {
        (0..size * size)
            .map(|i| {
                let col = i % size;
                let row = i / size;
                Vec3::new(col as f32, 0.0, row as f32)
            })
            .collect()
    }

    #[test]
    fn normals_flat_grid_face_up() {
        let grid = flat_grid(4);
        for n in vertex_normals(&grid, 4) {
            assert!((n - Vec3::Y).length() < 1e-6);
        }
    }

    #[test]
    fn normals_unit_length() {
        // Tilted plane: y = x, so every normal should be unit length
        // and tilted toward −x
        let size = 5;
        let mut grid = flat_grid(size);
        for v in &mut grid {
            v.y = v.x;
        }
        for n in vertex_normals(&grid, size) {
            assert!((n.length() - 1.0).abs() < 1e-5);
            assert!(n.x < 0.0 && n.y > 0.0);
        }
    }

    #[test]
    fn normals_count_matches_grid() {
        let grid = flat_grid(7);
        assert_eq!(vertex_normals(&grid, 7).len(), 49);
    }

    #[test]
    fn normals_tilted_plane_exact() {
        // y = x has analytic normal (−1, 1, 0) / √2 everywhere; the
        // accumulated average must agree even at edges and corners
        let size = 3;
        let mut grid = flat_grid(size);
        for v in &mut grid {
            v.y = v.x;
        }
        let expected = Vec3::new(-1.0, 1.0, 0.0).normalize();
        for n in vertex_normals(&grid, size) {
            assert!((n - expected).length() < 1e-5);
        }
    }
}
