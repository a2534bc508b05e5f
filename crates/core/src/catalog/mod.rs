//! Wallpaper catalog - a ranked, reloadable list of catalog items.
//!
//! The catalog is rehydrated wholesale from a cached JSON snapshot and kept
//! ordered under the active sort mode. Popularity ranking applies a fairness
//! factor recomputed from the current contents on every reload, so pro and
//! normal wallpapers rank on a comparable download scale.

mod sort;
mod types;

pub use types::{CatalogError, CatalogItem, SortMode};

use tracing::debug;

/// Ordered, sortable collection of wallpaper entries.
///
/// Created empty; contents are replaced wholesale by [`Catalog::reload`] and
/// never merged incrementally. The active sort mode persists across reloads
/// until changed through [`Catalog::set_sort_mode`].
///
/// Not safe for concurrent mutation - the design assumes a single owner
/// serializing reload/sort calls.
#[derive(Debug)]
pub struct Catalog {
    items: Vec<CatalogItem>,
    sort_mode: SortMode,
    popularity_fix: f64,
}

impl Catalog {
    /// Creates an empty catalog sorted by popularity.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            sort_mode: SortMode::default(),
            popularity_fix: 1.0,
        }
    }

    /// Replaces the catalog contents from a serialized snapshot.
    ///
    /// The snapshot is a JSON array of item records. When
    /// `include_test_content` is false, items marked as test-only are dropped
    /// during population (production builds); debug builds pass true and keep
    /// everything.
    ///
    /// On success the popularity fix is recomputed from the new contents and
    /// the current sort mode is re-applied. On any failure the catalog is left
    /// exactly as it was - contents, order and sort mode - and the caller is
    /// expected to keep showing them.
    pub fn reload(
        &mut self,
        snapshot: &str,
        include_test_content: bool,
    ) -> Result<(), CatalogError> {
        let items: Option<Vec<CatalogItem>> = serde_json::from_str(snapshot)?;
        // An upstream snapshot is never a bare null; bail without touching
        // the current contents if one shows up anyway.
        let items = items.ok_or(CatalogError::NullSnapshot)?;

        self.items.clear();
        if include_test_content {
            self.items.extend(items);
        } else {
            self.items
                .extend(items.into_iter().filter(|item| !item.is_test_content()));
        }

        self.popularity_fix = compute_popularity_fix(&self.items);
        debug!(
            items = self.items.len(),
            popularity_fix = self.popularity_fix,
            "catalog reloaded from snapshot"
        );

        self.set_sort_mode(self.sort_mode);
        Ok(())
    }

    /// Sets the active sort mode and reorders the catalog in place.
    ///
    /// The underlying sort is stable: items with equal keys keep their
    /// relative order, so repeated calls with an unchanged catalog are
    /// idempotent.
    pub fn set_sort_mode(&mut self, mode: SortMode) {
        self.sort_mode = mode;
        let popularity_fix = self.popularity_fix;
        match mode {
            SortMode::Popularity => self
                .items
                .sort_by(|lhs, rhs| sort::by_popularity(lhs, rhs, popularity_fix)),
            SortMode::New => self.items.sort_by(sort::by_new),
            SortMode::Title => self.items.sort_by(sort::by_title),
            SortMode::Author => self.items.sort_by(sort::by_author),
        }
    }

    /// The active sort mode.
    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    /// The fairness factor from the last reload.
    ///
    /// Non-finite when either category was empty at that point; see
    /// [`Catalog::reload`].
    pub fn popularity_fix(&self) -> f64 {
        self.popularity_fix
    }

    /// Items in the current order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Iterates the items in the current order.
    pub fn iter(&self) -> std::slice::Iter<'_, CatalogItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogItem;
    type IntoIter = std::slice::Iter<'a, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ratio of average pro downloads to average normal downloads.
///
/// The two wallpaper populations have structurally different download
/// volumes; multiplying a normal item's count by this ratio puts it on the
/// pro scale for popularity comparisons.
///
/// An empty category makes its average 0.0/0.0 = NaN, which propagates into
/// the ratio. That is deliberate: mixed-category comparisons cannot occur
/// when a category is empty, and the comparator stays total regardless.
fn compute_popularity_fix(items: &[CatalogItem]) -> f64 {
    let mut pro_count = 0.0_f64;
    let mut normal_count = 0.0_f64;
    let mut pro_downloads = 0.0_f64;
    let mut normal_downloads = 0.0_f64;

    for item in items {
        if item.is_pro {
            pro_count += 1.0;
            pro_downloads += item.downloads as f64;
        } else {
            normal_count += 1.0;
            normal_downloads += item.downloads as f64;
        }
    }

    (pro_downloads / pro_count) / (normal_downloads / normal_count)
}
