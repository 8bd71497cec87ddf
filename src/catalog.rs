//! Product Catalog Module
//!
//! In-memory product collection standing in for the document database.
//! Listing is the expensive read the response cache sits in front of.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Utc;
use tracing::{debug, info};

use crate::error::{AppError, Result};
use crate::models::{CreateProductRequest, Product, ProductPage, UpdateProductRequest};

#[derive(Debug, Default)]
struct Inner {
    products: BTreeMap<u64, Product>,
    next_id: u64,
}

// == Product Catalog ==
/// Thread-safe product collection ordered by id.
#[derive(Debug, Default)]
pub struct ProductCatalog {
    inner: Mutex<Inner>,
}

impl ProductCatalog {
    // == Constructor ==
    /// Creates an empty catalog. Ids start at 1.
    pub fn new() -> Self {
        Self::default()
    }

    // == Seed ==
    /// Inserts `count` demo products.
    pub fn seed(&self, count: usize) {
        const CATEGORIES: [&str; 3] = ["mattress", "pillow", "bedding"];

        for i in 0..count {
            self.create(CreateProductRequest {
                name: format!("Sample product {}", i + 1),
                description: String::new(),
                price_cents: 19_900 + (i as u64 % 10) * 10_000,
                category: CATEGORIES[i % CATEGORIES.len()].to_string(),
                in_stock: i % 7 != 6,
            });
        }
        info!("Catalog seeded with {} products", count);
    }

    // == List ==
    /// Returns one page of products ordered by id, plus the catalog total.
    ///
    /// `page` is 1-based. Pages past the end are empty.
    pub fn list(&self, page: u32, limit: u32) -> ProductPage {
        let inner = self.lock();
        let skip = (page.saturating_sub(1) as usize).saturating_mul(limit as usize);
        let items: Vec<Product> = inner
            .products
            .values()
            .skip(skip)
            .take(limit as usize)
            .cloned()
            .collect();
        let total = inner.products.len() as u64;

        debug!(page, limit, returned = items.len(), total, "catalog page fetched");
        ProductPage::new(items, page, limit, total)
    }

    // == Get ==
    pub fn get(&self, id: u64) -> Result<Product> {
        self.lock()
            .products
            .get(&id)
            .cloned()
            .ok_or(AppError::NotFound(id))
    }

    // == Create ==
    /// Inserts a new product and returns it with its assigned id.
    pub fn create(&self, req: CreateProductRequest) -> Product {
        let mut inner = self.lock();
        inner.next_id += 1;
        let now = Utc::now();
        let product = Product {
            id: inner.next_id,
            name: req.name,
            description: req.description,
            price_cents: req.price_cents,
            category: req.category,
            in_stock: req.in_stock,
            created_at: now,
            updated_at: now,
        };
        inner.products.insert(product.id, product.clone());
        product
    }

    // == Update ==
    /// Applies the fields present in `req` and refreshes `updated_at`.
    pub fn update(&self, id: u64, req: UpdateProductRequest) -> Result<Product> {
        let mut inner = self.lock();
        let product = inner.products.get_mut(&id).ok_or(AppError::NotFound(id))?;

        if let Some(name) = req.name {
            product.name = name;
        }
        if let Some(description) = req.description {
            product.description = description;
        }
        if let Some(price_cents) = req.price_cents {
            product.price_cents = price_cents;
        }
        if let Some(category) = req.category {
            product.category = category;
        }
        if let Some(in_stock) = req.in_stock {
            product.in_stock = in_stock;
        }
        product.updated_at = Utc::now();

        Ok(product.clone())
    }

    // == Delete ==
    /// Removes a product and returns it.
    pub fn delete(&self, id: u64) -> Result<Product> {
        self.lock()
            .products
            .remove(&id)
            .ok_or(AppError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.lock().products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().products.is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_product(name: &str) -> CreateProductRequest {
        CreateProductRequest {
            name: name.to_string(),
            description: String::new(),
            price_cents: 100,
            category: "mattress".to_string(),
            in_stock: true,
        }
    }

    #[test]
    fn test_create_assigns_increasing_ids() {
        let catalog = ProductCatalog::new();
        let a = catalog.create(new_product("a"));
        let b = catalog.create(new_product("b"));

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_list_pagination() {
        let catalog = ProductCatalog::new();
        catalog.seed(25);

        let first = catalog.list(1, 10);
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.items[0].id, 1);
        assert_eq!(first.total, 25);
        assert_eq!(first.total_pages, 3);

        let last = catalog.list(3, 10);
        assert_eq!(last.items.len(), 5);
        assert_eq!(last.items[0].id, 21);

        let past_end = catalog.list(4, 10);
        assert!(past_end.items.is_empty());
        assert_eq!(past_end.total, 25);
    }

    #[test]
    fn test_list_huge_page_does_not_overflow() {
        let catalog = ProductCatalog::new();
        catalog.seed(3);

        assert!(catalog.list(u32::MAX, u32::MAX).items.is_empty());
    }

    #[test]
    fn test_update_partial_fields() {
        let catalog = ProductCatalog::new();
        let created = catalog.create(new_product("Original"));

        let updated = catalog
            .update(
                created.id,
                UpdateProductRequest {
                    price_cents: Some(250),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.name, "Original");
        assert_eq!(updated.price_cents, 250);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[test]
    fn test_missing_ids_are_not_found() {
        let catalog = ProductCatalog::new();

        assert!(matches!(catalog.get(9), Err(AppError::NotFound(9))));
        assert!(matches!(
            catalog.update(9, UpdateProductRequest::default()),
            Err(AppError::NotFound(9))
        ));
        assert!(matches!(catalog.delete(9), Err(AppError::NotFound(9))));
    }

    #[test]
    fn test_delete_removes_product() {
        let catalog = ProductCatalog::new();
        let created = catalog.create(new_product("gone"));

        assert_eq!(catalog.delete(created.id).unwrap().name, "gone");
        assert!(catalog.is_empty());
    }
}
