use std::path::{Path, PathBuf};

use fair_hash_core::{FairHashTable, KeyWidth, DEFAULT_SEED};
use tracing::info;

use crate::{emit::emit, error::Result, function_name::FunctionName};

/// Everything needed to produce one hash function file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub key_width: KeyWidth,
    pub seed: u64,
    pub function_name: FunctionName,
    pub output: PathBuf,
}

impl GeneratorConfig {
    /// Config with default seed and function name.
    pub fn new(key_width: u32, output: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            key_width: KeyWidth::new(key_width)?,
            seed: DEFAULT_SEED,
            function_name: FunctionName::default(),
            output: output.into(),
        })
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_function_name(mut self, function_name: FunctionName) -> Self {
        self.function_name = function_name;
        self
    }
}

/// Generate the table described by `config` and write it out. Returns the output path.
pub fn run(config: &GeneratorConfig) -> Result<&Path> {
    info!(
        key_width = config.key_width.bits(),
        entries = config.key_width.n_entries(),
        seed = config.seed,
        "generating fair hash table"
    );
    let table = FairHashTable::generate(config.key_width.bits(), config.seed)?;
    emit(&table, &config.function_name, &config.output)?;
    info!(path = %config.output.display(), "fair hash function written");
    Ok(&config.output)
}
