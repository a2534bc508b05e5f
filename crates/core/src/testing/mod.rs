//! Testing utilities for exercising the catalog without a real snapshot cache.

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::catalog::CatalogItem;

    /// Create a normal (non-pro) catalog item with reasonable defaults.
    pub fn item(id: u64, title: &str, downloads: u64) -> CatalogItem {
        CatalogItem {
            id,
            title: title.to_string(),
            author: "mock-author".to_string(),
            downloads,
            is_pro: false,
            is_test: 0,
        }
    }

    /// Create a pro catalog item.
    pub fn pro_item(id: u64, title: &str, downloads: u64) -> CatalogItem {
        CatalogItem {
            is_pro: true,
            ..item(id, title, downloads)
        }
    }

    /// Create an item marked as test-only content.
    pub fn test_item(id: u64, title: &str) -> CatalogItem {
        CatalogItem {
            is_test: 1,
            ..item(id, title, 0)
        }
    }

    /// Serialize items into the JSON snapshot format kept in the cache.
    pub fn snapshot(items: &[CatalogItem]) -> String {
        serde_json::to_string(items).expect("catalog items serialize")
    }
}
