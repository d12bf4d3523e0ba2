// core holds the noise field, fractal heightmap, and normal algorithms
pub mod cache;
pub mod errors;
pub mod heightmap;
pub mod normals;
pub mod seed;
pub mod simplex2;

pub use cache::NoiseCache;
pub use errors::TerrainError;
pub use heightmap::{Offset, TerrainMesh, TerrainParameters, generate, generate_terrain};
pub use normals::vertex_normals;
pub use seed::Seed;
pub use simplex2::Simplex2D;

// seeded 2D noise field sampled by the fractal heightmap generator
// Contract: same seed + same coordinates ⇒ same value,
// output bounded to roughly [−1, +1], continuous everywhere.
pub trait NoiseField {
    // Sample the field at (x, z).
    fn sample(&self, x: f64, z: f64) -> f64;
}
