//! Document Store Config

use std::path::PathBuf;

use clap::Args;

/// Document store settings.
#[derive(Debug, Args)]
pub struct StoreConfig {
    /// JSON snapshot the in-memory store is seeded from
    #[arg(long, env = "PETALO_SEED", default_value = "seed/storefront.json")]
    pub seed: PathBuf,
}
