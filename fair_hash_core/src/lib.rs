//! Seeded generation of fair (bijective) hash tables.
//!
//! ```
//! let table = fair_hash_core::FairHashTable::generate(4, 42).unwrap();
//! assert_eq!(table.len(), 16);
//! assert!(table.is_bijective());
//! ```

mod key_width;
mod table;

pub use key_width::{KeyWidth, KeyWidthError};
pub use table::FairHashTable;

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 42;
