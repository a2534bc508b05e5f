pub mod catalog;
pub mod config;
pub mod testing;

pub use catalog::{Catalog, CatalogError, CatalogItem, SortMode};
pub use config::{
    load_config, load_config_from_str, CacheConfig, CatalogConfig, Config, ConfigError,
};
