//! Types for the wallpaper catalog.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// `isTest` value marking test-only content in the upstream snapshot.
const TEST_CONTENT_SENTINEL: i64 = 1;

/// One wallpaper entry, as stored in the snapshot cache.
///
/// Items are immutable once parsed. Ids are assigned by the upstream catalog
/// service in upload order, so a higher id means a newer wallpaper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique id, monotonically assigned upstream.
    pub id: u64,
    /// Wallpaper title.
    pub title: String,
    /// Uploader name.
    pub author: String,
    /// Download count.
    pub downloads: u64,
    /// Whether this is a pro (paid) wallpaper.
    #[serde(rename = "isPro", default)]
    pub is_pro: bool,
    /// Test-content marker (1 = test-only), consumed by the load filter.
    #[serde(rename = "isTest", default)]
    pub is_test: i64,
}

impl CatalogItem {
    /// Whether this item is marked as test-only content.
    pub fn is_test_content(&self) -> bool {
        self.is_test == TEST_CONTENT_SENTINEL
    }
}

/// Ranking policy applied to the catalog.
///
/// Unknown mode strings (e.g. from a config written by a newer client)
/// deserialize to `Popularity` rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Newest uploads first.
    New,
    /// Title, ascending.
    Title,
    /// Author, ascending, ties broken by title.
    Author,
    /// Downloads, fairness-adjusted between pro and normal items.
    #[default]
    #[serde(other)]
    Popularity,
}

/// Errors for catalog reload.
///
/// A failed reload leaves the catalog untouched; the caller keeps showing the
/// previous contents (or an empty catalog on first run).
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Snapshot text is not valid JSON for an item array. Expected for a
    /// missing or corrupt cache file.
    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(#[from] serde_json::Error),

    /// Snapshot parsed to JSON `null` instead of an item array. A well-behaved
    /// snapshot source never produces this.
    #[error("snapshot is null, expected an item array")]
    NullSnapshot,
}
