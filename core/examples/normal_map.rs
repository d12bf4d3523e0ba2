use image::{Rgb, RgbImage};
use std::path::Path;
use terrain_mesh::{Seed, TerrainParameters, generate_terrain};

// Dump the per-vertex normals as an RGB-encoded normal map
// (components remapped from [-1, 1] to [0, 255])
fn main() {
    let seed = Seed::Number(2025);
    let params = TerrainParameters::new(257, 25.0);
    let mesh = generate_terrain(&seed, &params).unwrap();

    let size = mesh.size();
    let mut img = RgbImage::new(size as u32, size as u32);
    for row in 0..size {
        for col in 0..size {
            let n = mesh.normals()[row * size + col];
            img.put_pixel(
                col as u32,
                row as u32,
                Rgb([
                    ((n.x * 0.5 + 0.5) * 255.0) as u8,
                    ((n.y * 0.5 + 0.5) * 255.0) as u8,
                    ((n.z * 0.5 + 0.5) * 255.0) as u8,
                ]),
            );
        }
    }

    let path = Path::new("normal_map.png");
    img.save(path).unwrap();
    println!("Saved normal map to {:?}", path);
}
