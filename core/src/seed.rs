use std::fmt;

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh64::xxh64;

use crate::TerrainError;

// Fixed hash seed so text seeds resolve identically across runs and builds
const TEXT_HASH_SEED: u64 = 0x7E11_A9E5_0C2B_4D17;

// Noise seed taken from configuration: either a plain integer or a
// text label ("alpine", "badlands", ...). Text is reduced to a u64
// with xxh64 so equal labels always name the same noise field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    Number(u64),
    Text(String),
}

impl Seed {
    // Resolve to the u64 that seeds the permutation-table shuffle.
    // The only invalid representation is empty text.
    pub fn resolve(&self) -> Result<u64, TerrainError> {
        match self {
            Seed::Number(n) => Ok(*n),
            Seed::Text(s) if s.is_empty() => Err(TerrainError::InvalidSeed(
                "text seed must not be empty".into(),
            )),
            Seed::Text(s) => Ok(xxh64(s.as_bytes(), TEXT_HASH_SEED)),
        }
    }
}

impl From<u64> for Seed {
    fn from(n: u64) -> Self {
        Seed::Number(n)
    }
}

impl From<&str> for Seed {
    fn from(s: &str) -> Self {
        Seed::Text(s.to_string())
    }
}

impl From<String> for Seed {
    fn from(s: String) -> Self {
        Seed::Text(s)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Number(n) => write!(f, "{n}"),
            Seed::Text(s) => write!(f, "{s:?}"),
        }
    }
}
