use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::catalog::SortMode;

/// Root configuration
///
/// The catalog itself reads no configuration; the host loads this and feeds
/// the relevant values into catalog calls.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Catalog behaviour
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Whether test-marked items survive a reload. Debug builds set this to
    /// true; production builds leave the default.
    #[serde(default)]
    pub include_test_content: bool,
    /// Sort mode applied until the user picks another one.
    #[serde(default)]
    pub default_sort: SortMode,
}

/// Snapshot cache location
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Where the host keeps the cached catalog snapshot. Reading and writing
    /// the file is the host's job.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
        }
    }
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("catalog.json")
}
