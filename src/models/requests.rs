//! Request DTOs for the storefront API
//!
//! Defines the structure of incoming query strings and request bodies.

use serde::Deserialize;

/// Maximum product name length in characters
pub const MAX_NAME_LENGTH: usize = 200;

/// Query string for `GET /products`
///
/// Missing values are filled in from configuration by [`ListQuery::resolve`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ListQuery {
    /// Normalises the query into a concrete `(page, limit)` pair.
    ///
    /// Returns an error message if the page is zero or the limit is outside
    /// `1..=max_limit`.
    pub fn resolve(&self, default_limit: u32, max_limit: u32) -> Result<(u32, u32), String> {
        let page = self.page.unwrap_or(1);
        let limit = self.limit.unwrap_or(default_limit);

        if page == 0 {
            return Err("Page must be at least 1".to_string());
        }
        if limit == 0 || limit > max_limit {
            return Err(format!("Limit must be between 1 and {}", max_limit));
        }
        Ok((page, limit))
    }
}

/// Request body for `POST /products`
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price_cents: u64,
    #[serde(default)]
    pub category: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

impl CreateProductRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_name(&self.name)
    }
}

/// Request body for `PUT /products/:id`
///
/// Only the fields present in the body are changed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_cents: Option<u64>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

impl UpdateProductRequest {
    pub fn validate(&self) -> Option<String> {
        self.name.as_deref().and_then(validate_name)
    }
}

fn validate_name(name: &str) -> Option<String> {
    if name.trim().is_empty() {
        return Some("Name cannot be empty".to_string());
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Some(format!(
            "Name exceeds maximum length of {} characters",
            MAX_NAME_LENGTH
        ));
    }
    None
}
