//! Comparators for the catalog sort modes.

use std::cmp::Ordering;

use super::types::CatalogItem;

/// Compare by downloads, descending.
///
/// For a mixed pro/normal pair the normal item's downloads are rescaled by
/// `popularity_fix` so the two populations rank on a common scale. The
/// comparison uses `total_cmp`, which stays total and deterministic even when
/// the rescaled value comes out non-finite.
pub(super) fn by_popularity(
    lhs: &CatalogItem,
    rhs: &CatalogItem,
    popularity_fix: f64,
) -> Ordering {
    let mut lhs_downloads = lhs.downloads as f64;
    let mut rhs_downloads = rhs.downloads as f64;

    if lhs.is_pro && !rhs.is_pro {
        rhs_downloads *= popularity_fix;
    }
    if !lhs.is_pro && rhs.is_pro {
        lhs_downloads *= popularity_fix;
    }

    rhs_downloads.total_cmp(&lhs_downloads)
}

/// Newest first: descending id.
pub(super) fn by_new(lhs: &CatalogItem, rhs: &CatalogItem) -> Ordering {
    rhs.id.cmp(&lhs.id)
}

/// Title, ascending.
pub(super) fn by_title(lhs: &CatalogItem, rhs: &CatalogItem) -> Ordering {
    lhs.title.cmp(&rhs.title)
}

/// Author, ascending, ties broken by title.
pub(super) fn by_author(lhs: &CatalogItem, rhs: &CatalogItem) -> Ordering {
    lhs.author
        .cmp(&rhs.author)
        .then_with(|| lhs.title.cmp(&rhs.title))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u64, title: &str, author: &str, downloads: u64, is_pro: bool) -> CatalogItem {
        CatalogItem {
            id,
            title: title.to_string(),
            author: author.to_string(),
            downloads,
            is_pro,
            is_test: 0,
        }
    }

    #[test]
    fn test_popularity_same_category_compares_raw_downloads() {
        let high = make_item(1, "A", "a", 500, false);
        let low = make_item(2, "B", "b", 100, false);

        // Fix must not apply within a category
        assert_eq!(by_popularity(&high, &low, 0.001), Ordering::Less);
        assert_eq!(by_popularity(&low, &high, 0.001), Ordering::Greater);
    }

    #[test]
    fn test_popularity_scales_normal_side_of_mixed_pair() {
        let pro = make_item(1, "Pro", "a", 100, true);
        let normal = make_item(2, "Normal", "b", 150, false);

        // 150 * 0.5 = 75 effective, so the pro item ranks first
        assert_eq!(by_popularity(&pro, &normal, 0.5), Ordering::Less);
        assert_eq!(by_popularity(&normal, &pro, 0.5), Ordering::Greater);
    }

    #[test]
    fn test_popularity_scaled_tie_is_equal() {
        let normal = make_item(1, "N", "a", 200, false);
        let pro = make_item(2, "P", "b", 100, true);

        assert_eq!(by_popularity(&normal, &pro, 0.5), Ordering::Equal);
        assert_eq!(by_popularity(&pro, &normal, 0.5), Ordering::Equal);
    }

    #[test]
    fn test_popularity_total_with_non_finite_fix() {
        let pro = make_item(1, "P", "a", 100, true);
        let normal = make_item(2, "N", "b", 0, false);

        // 0 * inf = NaN; total_cmp ranks it above the finite side both ways
        let fix = f64::INFINITY;
        assert_eq!(by_popularity(&pro, &normal, fix), Ordering::Greater);
        assert_eq!(by_popularity(&normal, &pro, fix), Ordering::Less);
    }

    #[test]
    fn test_new_orders_descending_by_id() {
        let older = make_item(1, "A", "a", 0, false);
        let newer = make_item(9, "B", "b", 0, false);

        assert_eq!(by_new(&newer, &older), Ordering::Less);
        assert_eq!(by_new(&older, &newer), Ordering::Greater);
    }

    #[test]
    fn test_title_orders_ascending_case_sensitive() {
        let apple = make_item(1, "Apple", "a", 0, false);
        let banana = make_item(2, "Banana", "b", 0, false);
        let lower = make_item(3, "apple", "c", 0, false);

        assert_eq!(by_title(&apple, &banana), Ordering::Less);
        // Uppercase sorts before lowercase in str ordering
        assert_eq!(by_title(&apple, &lower), Ordering::Less);
    }

    #[test]
    fn test_author_breaks_ties_by_title() {
        let outro = make_item(1, "Outro", "ann", 0, false);
        let intro = make_item(2, "Intro", "ann", 0, false);
        let zed = make_item(3, "Aardvark", "zed", 0, false);

        assert_eq!(by_author(&intro, &outro), Ordering::Less);
        assert_eq!(by_author(&outro, &zed), Ordering::Less);
    }
}
