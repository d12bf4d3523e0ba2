use crate::{NoiseField, Seed, TerrainError};

// 2D Simplex noise field, based on Ken Perlin's Simplex algorithm
// One octave only: fractal layering is the heightmap generator's job,
// this type just provides the seeded, bounded, continuous base signal.
pub struct Simplex2D {
    seed: Seed,
    // permutation table (256 shuffled entries duplicated into 512)
    perm: [u8; 512],
    // Simplex divides space into triangles rather than squares,
    // which gives better isotropy (uniformity in all directions)
    grad3: [(i8, i8); 12],
}

impl Simplex2D {
    // Build the field for a seed. Construction is the only non-trivial
    // cost (permutation-table shuffle); sampling afterwards is pure.
    pub fn new(seed: impl Into<Seed>) -> Result<Self, TerrainError> {
        let seed = seed.into();
        let resolved = seed.resolve()?;

        // Shuffle 0..=255 with a xorshift stream derived from the seed
        let mut p: Vec<u8> = (0..256).map(|i| i as u8).collect();
        let mut x = resolved ^ 0x1234_5678_9ABC_DEF0_u64;
        let mut rng = || {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            (x & 0xFF) as u8
        };
        // Fisher–Yates shuffle p[0..256]
        for i in (1..256).rev() {
            let j = (rng() as usize) % (i + 1);
            p.swap(i, j);
        }
        // Duplicate into 512 entries so corner lookups skip the modulo
        let mut perm = [0u8; 512];
        for i in 0..512 {
            perm[i] = p[i & 255];
        }

        // Predefined 2D gradient directions (length ≈ 1)
        let grad3 = [
            (1, 1),
            (-1, 1),
            (1, -1),
            (-1, -1),
            (1, 0),
            (-1, 0),
            (0, 1),
            (0, -1),
            (1, 2),
            (-1, 2),
            (1, -2),
            (-1, -2),
        ];

        Ok(Self { seed, perm, grad3 })
    }

    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    // Dot product helper for a gradient chosen via grad3[hash % 12]
    #[inline]
    fn dot(g: (i8, i8), x: f64, y: f64) -> f64 {
        (g.0 as f64) * x + (g.1 as f64) * y
    }
}

impl NoiseField for Simplex2D {
    // Raw 2D Simplex noise at (x, z), in roughly [−1.0, +1.0]
    fn sample(&self, xin: f64, zin: f64) -> f64 {
        const SQRT_3: f64 = 1.732_050_807_568_877_293_5;
        // Skewing/unskewing factors for 2D simplex
        const F2: f64 = 0.5 * (SQRT_3 - 1.0); // square → rhombus of equilateral triangles
        const G2: f64 = (3.0 - SQRT_3) / 6.0; // reverses the skew

        // Skew input space to find the containing simplex cell
        let s = (xin + zin) * F2;
        let i = (xin + s).floor() as i32;
        let j = (zin + s).floor() as i32;

        // Unskew back to get the position relative to the origin corner
        let t = (i + j) as f64 * G2;
        let x0 = xin - (i as f64 - t);
        let z0 = zin - (j as f64 - t);

        // Which of the two triangles are we in (lower or upper)?
        let (i1, j1) = if x0 > z0 { (1, 0) } else { (0, 1) };

        // Offsets for the remaining corners
        let x1 = x0 - i1 as f64 + G2;
        let z1 = z0 - j1 as f64 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let z2 = z0 - 1.0 + 2.0 * G2;

        // Hash the three simplex corners
        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;
        // Double lookup so the index depends on both i and j
        let gi0 = (self.perm[ii + self.perm[jj] as usize] as usize) % 12;
        let gi1 = (self.perm[ii + i1 + self.perm[jj + j1] as usize] as usize) % 12;
        let gi2 = (self.perm[ii + 1 + self.perm[jj + 1] as usize] as usize) % 12;

        // Contribution from corner 0
        let mut n0 = 0.0;
        let t0 = 0.5 - x0 * x0 - z0 * z0; // circular zone of influence
        if t0 > 0.0 {
            let t0_sq = t0 * t0;
            n0 = t0_sq * t0_sq * Self::dot(self.grad3[gi0], x0, z0);
        }
        // Corner 1
        let mut n1 = 0.0;
        let t1 = 0.5 - x1 * x1 - z1 * z1;
        if t1 > 0.0 {
            let t1_sq = t1 * t1;
            n1 = t1_sq * t1_sq * Self::dot(self.grad3[gi1], x1, z1);
        }
        // Corner 2
        let mut n2 = 0.0;
        let t2 = 0.5 - x2 * x2 - z2 * z2;
        if t2 > 0.0 {
            let t2_sq = t2 * t2;
            n2 = t2_sq * t2_sq * Self::dot(self.grad3[gi2], x2, z2);
        }

        // Scaled so the output covers roughly [−1, +1]
        70.0 * (n0 + n1 + n2)
    }
}

#[cfg(test)]
mod tests {
    use super::Simplex2D;
    use crate::{NoiseField, TerrainError};

    #[test]
    fn simplex2_determinism() {
        let s1 = Simplex2D::new(9999u64).unwrap();
        let s2 = Simplex2D::new(9999u64).unwrap();
        // Same seed ⇒ bit-identical samples
        assert_eq!(
            s1.sample(1.23, 4.56).to_bits(),
            s2.sample(1.23, 4.56).to_bits()
        );
    }

    #[test]
    fn simplex2_text_seed_matches_itself() {
        let s1 = Simplex2D::new("alpine").unwrap();
        let s2 = Simplex2D::new("alpine").unwrap();
        assert_eq!(
            s1.sample(-3.1, 0.7).to_bits(),
            s2.sample(-3.1, 0.7).to_bits()
        );
    }

    #[test]
    fn simplex2_range() {
        let s = Simplex2D::new(0u64).unwrap();
        for &(x, z) in &[(0.0, 0.0), (5.5, -5.5), (0.31, 0.77), (100.1, 100.1)] {
            let v = s.sample(x, z);
            assert!(v >= -1.0 - 1e-6 && v <= 1.0 + 1e-6, "{v} out of range");
        }
    }

    #[test]
    fn simplex2_continuous_at_cell_boundary() {
        // No jump when crossing an integer lattice line
        let s = Simplex2D::new(7u64).unwrap();
        let below = s.sample(0.999_999, 0.5);
        let above = s.sample(1.000_001, 0.5);
        assert!((below - above).abs() < 1e-3);
    }

    #[test]
    fn simplex2_seeds_differ() {
        let a = Simplex2D::new(1u64).unwrap();
        let b = Simplex2D::new(2u64).unwrap();
        let pts = [(0.13, 0.87), (1.5, -2.5), (10.01, 3.99)];
        assert!(pts.iter().any(|&(x, z)| a.sample(x, z) != b.sample(x, z)));
    }

    #[test]
    fn simplex2_rejects_empty_text_seed() {
        match Simplex2D::new("") {
            Err(TerrainError::InvalidSeed(_)) => {}
            _ => panic!("expected InvalidSeed"),
        }
    }
}
