use terrain_mesh::{NoiseCache, Seed, TerrainParameters, generate};

fn main() {
    // Cache the noise field so regenerating with new shape parameters
    // only pays for the grid, not the permutation-table setup
    let cache = NoiseCache::new();
    let field = cache.get_or_build(&Seed::from(42u64)).unwrap();

    let mut params = TerrainParameters::new(129, 10.0);
    params.levels = 4;
    let mesh = generate(field.as_ref(), &params).unwrap();

    // Print the top-left 8×8 corner of the elevations
    for row in 0..8 {
        for col in 0..8 {
            print!("{:>7.3} ", mesh.vertices()[row * 129 + col].y);
        }
        println!();
    }

    // Same seed, different offset: reuses the cached field
    params.offset.x = 10.0;
    let shifted = generate(field.as_ref(), &params).unwrap();
    println!(
        "shifted corner elevation: {:.3} (was {:.3})",
        shifted.vertices()[0].y,
        mesh.vertices()[0].y
    );
}
