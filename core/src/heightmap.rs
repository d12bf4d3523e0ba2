use std::time::Instant;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::normals::vertex_normals;
use crate::{NoiseField, Seed, Simplex2D, TerrainError};

// Largest grid side whose last vertex index (size² − 1) still fits a
// 32-bit mesh index buffer.
const MAX_SIZE: usize = 65_536;

fn default_levels() -> u32 {
    8
}

fn default_scale() -> f32 {
    1.0
}

// World-space origin shift of the sampled noise window
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: f32,
    pub z: f32,
}

impl Offset {
    pub fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }
}

// Shape parameters for one generation call. Any field change means a
// wholesale regeneration; grids are never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainParameters {
    // grid side length; the grid holds size² vertices
    pub size: usize,
    // vertical amplitude applied to the fractal sum
    pub height: f32,
    // octave count; fractal depth is 2^levels
    #[serde(default = "default_levels")]
    pub levels: u32,
    // horizontal spatial scale
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default)]
    pub offset: Offset,
}

impl TerrainParameters {
    pub fn new(size: usize, height: f32) -> Self {
        Self {
            size,
            height,
            levels: default_levels(),
            scale: default_scale(),
            offset: Offset::default(),
        }
    }

    // Cheap local checks, run before any sampling starts
    pub fn validate(&self) -> Result<(), TerrainError> {
        if self.size < 2 {
            return Err(TerrainError::InvalidParameter(format!(
                "size must be at least 2, got {}",
                self.size
            )));
        }
        if self.size > MAX_SIZE {
            return Err(TerrainError::InvalidParameter(format!(
                "size must be at most {MAX_SIZE}, got {}",
                self.size
            )));
        }
        if self.levels < 1 {
            return Err(TerrainError::InvalidParameter(
                "levels must be at least 1".into(),
            ));
        }
        // `!(x > 0.0)` also catches NaN
        if !(self.scale > 0.0) || !self.scale.is_finite() {
            return Err(TerrainError::InvalidParameter(format!(
                "scale must be positive and finite, got {}",
                self.scale
            )));
        }
        if !self.height.is_finite() {
            return Err(TerrainError::InvalidParameter(format!(
                "height must be finite, got {}",
                self.height
            )));
        }
        if !self.offset.x.is_finite() || !self.offset.z.is_finite() {
            return Err(TerrainError::InvalidParameter(format!(
                "offset must be finite, got ({}, {})",
                self.offset.x, self.offset.z
            )));
        }
        Ok(())
    }
}

// Generated terrain: size² vertices in row-major order (index =
// row·size + col) with a parallel array of unit normals. Immutable
// once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainMesh {
    size: usize,
    vertices: Vec<Vec3>,
    normals: Vec<Vec3>,
}

impl TerrainMesh {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    // Index buffer for the implicit grid topology: 2·(size−1)²
    // triangles, wound to face +Y, derived from `size` alone
    pub fn triangle_indices(&self) -> impl Iterator<Item = [u32; 3]> {
        let size = self.size;
        (0..size - 1).flat_map(move |row| {
            (0..size - 1).flat_map(move |col| {
                let i0 = (row * size + col) as u32;
                let i1 = i0 + 1;
                let i2 = i0 + size as u32;
                let i3 = i2 + 1;
                [[i0, i2, i1], [i1, i2, i3]]
            })
        })
    }
}

// Fractal octave sum at grid coordinates (x, z).
//
// Iterative form of the recursive definition
//   noise(level) = sample(offset·scale + scale·level·p) / level
//                + noise(level / 2)   while level > 1
// starting at level = 2^levels. Accumulating innermost octave first
// (level 1, 2, 4, …) reproduces the recursion's association order, so
// the sum is bit-identical to the recursive form. The 1/level octave
// weight is deliberate; it is not the usual fixed persistence ratio.
fn fractal_noise(field: &dyn NoiseField, params: &TerrainParameters, x: f64, z: f64) -> f64 {
    let scale = params.scale as f64;
    let ox = params.offset.x as f64;
    let oz = params.offset.z as f64;

    let mut acc = 0.0;
    let mut level = 1.0f64;
    for _ in 0..=params.levels {
        let term = field.sample(ox * scale + scale * level * x, oz * scale + scale * level * z)
            / level;
        acc = term + acc;
        level *= 2.0;
    }
    acc
}

// Turn (noise field, parameters) into a terrain mesh. Pure: fixed
// field + parameters always produce bit-identical output. Fails fast
// on bad parameters; a non-finite vertex component aborts the call so
// no partial grid ever escapes.
pub fn generate(
    field: &dyn NoiseField,
    params: &TerrainParameters,
) -> Result<TerrainMesh, TerrainError> {
    params.validate()?;
    let started = Instant::now();

    let size = params.size;
    let count = size * size;
    let mut vertices = Vec::with_capacity(count);
    for i in 0..count {
        let col = i % size;
        let row = i / size;
        // grid centered on [−0.5, 0.5) in both axes
        let x = col as f64 / size as f64 - 0.5;
        let z = row as f64 / size as f64 - 0.5;

        let world_x = (params.offset.x as f64 + x) * params.scale as f64;
        let world_z = (params.offset.z as f64 + z) * params.scale as f64;
        let world_y = fractal_noise(field, params, x, z) * params.height as f64;

        let vertex = Vec3::new(world_x as f32, world_y as f32, world_z as f32);
        if !vertex.is_finite() {
            return Err(TerrainError::NumericOverflow { index: i });
        }
        vertices.push(vertex);
    }

    let normals = vertex_normals(&vertices, size);

    tracing::debug!(
        size,
        octaves = params.levels + 1,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "generated terrain mesh"
    );
    Ok(TerrainMesh {
        size,
        vertices,
        normals,
    })
}

// Convenience entry point: build (or rebuild) the noise field for
// `seed` and generate in one call. Callers that regenerate on every
// parameter tweak should hold a NoiseCache instead and call
// `generate` with the cached field.
pub fn generate_terrain(seed: &Seed, params: &TerrainParameters) -> Result<TerrainMesh, TerrainError> {
    let field = Simplex2D::new(seed.clone())?;
    generate(&field, params)
}
