//! In-memory catalog storage
//!
//! Backs both the ordered-scan capability the pagination engine consumes
//! and the product repository. Records live in a `BTreeMap` keyed by id,
//! so ascending-id scans fall out of the map's iteration order.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use tracing::debug;

use crate::domain::store::{paginate, RecordStore, Scan};
use crate::domain::{NewProduct, Product, ProductFilter, ProductRepository, ProductUpdate};
use crate::shared::{DomainError, DomainResult, PageRequest, PageResult};

/// In-memory product store for tests and embedded use.
pub struct InMemoryCatalog {
    products: RwLock<BTreeMap<i64, Product>>,
    id_counter: AtomicI64,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(BTreeMap::new()),
            id_counter: AtomicI64::new(1),
        }
    }

    fn next_id(&self) -> i64 {
        self.id_counter.fetch_add(1, Ordering::SeqCst)
    }

    /// Rows matching `filter`, ascending by id.
    fn matching(&self, filter: &ProductFilter) -> Vec<Product> {
        self.products
            .read()
            .expect("products lock poisoned")
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect()
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_anchor(scan: &Scan) -> DomainResult<Option<i64>> {
    match &scan.cursor {
        Some(cursor) => cursor
            .as_str()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| DomainError::Validation(format!("Malformed cursor: {cursor}"))),
        None => Ok(None),
    }
}

#[async_trait]
impl RecordStore for InMemoryCatalog {
    type Rec = Product;
    type Filter = ProductFilter;

    async fn scan(&self, filter: &ProductFilter, scan: Scan) -> DomainResult<Vec<Product>> {
        let anchor = parse_anchor(&scan)?;
        let cap = scan.take.unsigned_abs() as usize;
        let rows = self.matching(filter);

        debug!(
            anchor = ?anchor,
            take = scan.take,
            skip = scan.skip,
            matching = rows.len(),
            "catalog scan"
        );

        let window = if scan.take >= 0 {
            // Forward: anchor-inclusive window, ascending.
            let from = anchor.map_or(0, |a| rows.partition_point(|p| p.id < a));
            let anchor_present =
                anchor.is_some_and(|a| rows.get(from).is_some_and(|p| p.id == a));
            // A cursor at a deleted id is a boundary, not a row to skip.
            let skip = if anchor_present { scan.skip } else { 0 };
            rows.into_iter().skip(from + skip).take(cap).collect()
        } else {
            // Backward: window ends at the anchor (inclusive), still
            // ascending; keep the tail of it.
            let upto = anchor.map_or(rows.len(), |a| rows.partition_point(|p| p.id <= a));
            let anchor_present =
                anchor.is_some_and(|a| upto > 0 && rows[upto - 1].id == a);
            let skip = if anchor_present { scan.skip } else { 0 };
            let end = upto.saturating_sub(skip);
            let start = end.saturating_sub(cap);
            rows[start..end].to_vec()
        };

        Ok(window)
    }
}

#[async_trait]
impl ProductRepository for InMemoryCatalog {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Product>> {
        Ok(self
            .products
            .read()
            .expect("products lock poisoned")
            .get(&id)
            .cloned())
    }

    async fn find_first_by_name(&self, name: &str) -> DomainResult<Option<Product>> {
        Ok(self
            .products
            .read()
            .expect("products lock poisoned")
            .values()
            .find(|p| p.name == name)
            .cloned())
    }

    async fn list(
        &self,
        filter: &ProductFilter,
        request: &PageRequest,
    ) -> DomainResult<PageResult<Product>> {
        paginate(self, filter, request).await
    }

    async fn create(&self, input: NewProduct) -> DomainResult<Product> {
        let now = Utc::now();
        let product = Product {
            id: self.next_id(),
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            stock: input.stock,
            status: input.status,
            owner_id: input.owner_id,
            created_at: now,
            updated_at: now,
        };
        self.products
            .write()
            .expect("products lock poisoned")
            .insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, id: i64, changes: ProductUpdate) -> DomainResult<Product> {
        let mut products = self.products.write().expect("products lock poisoned");
        let product = products.get_mut(&id).ok_or(DomainError::NotFound {
            entity: "product",
            field: "id",
            value: id.to_string(),
        })?;

        if let Some(name) = changes.name {
            product.name = name;
        }
        if let Some(description) = changes.description {
            product.description = description;
        }
        if let Some(price) = changes.price {
            product.price = price;
        }
        if let Some(category) = changes.category {
            product.category = category;
        }
        if let Some(stock) = changes.stock {
            product.stock = stock;
        }
        if let Some(status) = changes.status {
            product.status = status;
        }
        product.updated_at = Utc::now();

        Ok(product.clone())
    }

    async fn delete(&self, id: i64) -> DomainResult<Product> {
        self.products
            .write()
            .expect("products lock poisoned")
            .remove(&id)
            .ok_or(DomainError::NotFound {
                entity: "product",
                field: "id",
                value: id.to_string(),
            })
    }

    async fn count(&self, filter: &ProductFilter) -> DomainResult<u64> {
        Ok(self.matching(filter).len() as u64)
    }
}
