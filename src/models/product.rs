//! Product domain models
//!
//! `ProductPage` is the payload the listing handler stores in the response cache.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product in the storefront catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price in the smallest currency unit
    pub price_cents: u64,
    #[serde(default)]
    pub category: String,
    pub in_stock: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One page of the product listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub items: Vec<Product>,
    /// 1-based page number
    pub page: u32,
    pub limit: u32,
    /// Number of products in the whole catalog
    pub total: u64,
    pub total_pages: u64,
}

impl ProductPage {
    /// Builds a page, deriving `total_pages` from `total` and `limit`.
    pub fn new(items: Vec<Product>, page: u32, limit: u32, total: u64) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            total.div_ceil(u64::from(limit))
        };
        Self {
            items,
            page,
            limit,
            total,
            total_pages,
        }
    }
}
