use glam::Vec3;
use image::{Rgb, RgbImage};
use palette::{Gradient, LinSrgb};
use std::path::Path;
use terrain_mesh::{Seed, TerrainParameters, generate_terrain};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Generate a 513×513 terrain mesh
    let seed = Seed::from("alpine");
    let mut params = TerrainParameters::new(513, 40.0);
    params.scale = 4.0;
    let mesh = generate_terrain(&seed, &params).unwrap();

    let size = mesh.size();

    // Normalize elevations to 0.0..1.0 for coloring
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for v in mesh.vertices() {
        min = min.min(v.y);
        max = max.max(v.y);
    }

    // Color gradient - deep water to beach to grass to rock to snow
    let gradient = Gradient::with_domain(vec![
        (0.00, LinSrgb::new(0.0, 0.0, 0.5)), // deep blue
        (0.30, LinSrgb::new(0.8, 0.8, 0.5)), // sand
        (0.50, LinSrgb::new(0.1, 0.6, 0.2)), // green
        (0.75, LinSrgb::new(0.5, 0.4, 0.3)), // rock
        (1.00, LinSrgb::new(1.0, 1.0, 1.0)), // snow
    ]);

    // Fixed light direction for hillshading from the mesh normals
    let light = Vec3::new(-1.0, 1.0, -1.0).normalize();

    let mut img = RgbImage::new(size as u32, size as u32);
    for row in 0..size {
        for col in 0..size {
            let i = row * size + col;
            let h = mesh.vertices()[i].y;
            let norm = if (max - min).abs() < f32::EPSILON {
                0.5
            } else {
                (h - min) / (max - min)
            };
            let col3: LinSrgb = gradient.get(norm);
            let rgb = col3.into_format::<u8>();

            // Lambertian shade from the per-vertex normal
            let shade = mesh.normals()[i].dot(light).max(0.0) * 0.5 + 0.5;
            let pixel = Rgb([
                (rgb.red as f32 * shade) as u8,
                (rgb.green as f32 * shade) as u8,
                (rgb.blue as f32 * shade) as u8,
            ]);
            img.put_pixel(col as u32, row as u32, pixel);
        }
    }

    let path = Path::new("terrain_preview.png");
    img.save(path).unwrap();
    println!("Saved shaded terrain preview to {:?}", path);
}
