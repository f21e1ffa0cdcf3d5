use itertools::Itertools;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::key_width::{KeyWidth, KeyWidthError};

/// A bijective lookup table over `[0, 2^k)`.
///
/// Keys are implicit: the value for key `i` is stored at index `i`, so iteration
/// always happens in ascending key order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FairHashTable {
    width: KeyWidth,
    seed: u64,
    values: Vec<u32>,
}

impl FairHashTable {
    /// Generate a table for `key_width` bits, shuffled with a generator seeded by `seed`.
    ///
    /// The same `(key_width, seed)` pair always yields the same table for a given build.
    /// Tables are not portable to other shuffle or generator algorithms.
    pub fn generate(key_width: u32, seed: u64) -> Result<Self, KeyWidthError> {
        let width = KeyWidth::new(key_width)?;
        let mut rng = StdRng::seed_from_u64(seed);
        Ok(Self::with_rng(width, seed, &mut rng))
    }

    /// Generate a table using a caller-provided generator.
    ///
    /// `seed` is only recorded so it can be reported alongside the table.
    pub fn with_rng<R: Rng + ?Sized>(width: KeyWidth, seed: u64, rng: &mut R) -> Self {
        let mut values = identity(width);
        values.shuffle(rng);
        Self { width, seed, values }
    }

    pub fn width(&self) -> KeyWidth {
        self.width
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Hash a single key. Returns `None` if `key` is outside the table domain.
    pub fn get(&self, key: u32) -> Option<u32> {
        self.values.get(key as usize).copied()
    }

    /// Shuffled values, indexed by key.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// `(key, value)` pairs in ascending key order.
    pub fn entries(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0u32..).zip(self.values.iter().copied())
    }

    /// Reverse lookup table: `inverse()[value] == key`.
    pub fn inverse(&self) -> Vec<u32> {
        let mut inv = vec![0u32; self.values.len()];
        for (key, value) in self.entries() {
            inv[value as usize] = key;
        }
        inv
    }

    /// Check that every value in `[0, 2^k)` appears exactly once.
    pub fn is_bijective(&self) -> bool {
        self.values.len() == self.width.n_entries()
            && self.values.iter().all(|v| *v <= self.width.max_value())
            && self.values.iter().all_unique()
    }
}

fn identity(width: KeyWidth) -> Vec<u32> {
    (0..=width.max_value()).collect()
}
