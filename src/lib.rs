//! Generate fair hash functions for hardware designs.
//!
//! A fair hash over `k` bits is a random permutation of `[0, 2^k)`, emitted as a
//! SystemVerilog `case` table:
//!
//! ```no_run
//! use fair_hash::{GeneratorConfig, run};
//!
//! let config = GeneratorConfig::new(4, "fair_hash.sv").unwrap().with_seed(7);
//! run(&config).unwrap();
//! ```
//!
//! The same table is available at compile time for Rust code through [`make_fair_hash!`].

pub mod config;
pub mod emit;
pub mod error;
pub mod function_name;

pub use fair_hash_core::{FairHashTable, KeyWidth, KeyWidthError, DEFAULT_SEED};
pub use fair_hash_macros::make_fair_hash;

pub use config::{run, GeneratorConfig};
pub use emit::{emit, SystemVerilog};
pub use error::{Error, InvalidArgument, Result};
pub use function_name::FunctionName;
