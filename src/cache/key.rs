//! Cache key derivation for product listing pages.

/// Prefix shared by every product-listing key.
pub const KEY_PREFIX: &str = "products";

// == Build Key ==
/// Derives the cache key for one page of the product listing.
///
/// Both parts are decimal integers joined by `_`, so distinct `(page, limit)`
/// pairs can never produce the same key.
///
/// # Examples
///
/// ```
/// use storefront_cache::cache::build_key;
///
/// assert_eq!(build_key(1, 10), "products_1_10");
/// ```
pub fn build_key(page: u32, limit: u32) -> String {
    format!("{}_{}_{}", KEY_PREFIX, page, limit)
}
