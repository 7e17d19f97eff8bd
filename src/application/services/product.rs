//! Product catalog service

use std::sync::Arc;

use tracing::info;

use crate::domain::{
    NewProduct, Product, ProductFilter, ProductRepository, ProductStatus, ProductUpdate,
};
use crate::shared::{
    Cursor, Direction, DomainError, DomainResult, PageRequest, PageResult, DEFAULT_LIMIT,
    MAX_LIMIT,
};

/// Listing criteria as supplied by the caller: business filters plus
/// pagination parameters, all optional.
#[derive(Debug, Clone, Default)]
pub struct ListProducts {
    pub category: Option<String>,
    pub status: Option<ProductStatus>,
    pub search: Option<String>,
    pub min_price: Option<rust_decimal::Decimal>,
    pub max_price: Option<rust_decimal::Decimal>,
    pub cursor: Option<Cursor>,
    pub limit: Option<u32>,
    pub direction: Option<Direction>,
}

/// Service for catalog operations
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, input: NewProduct) -> DomainResult<Product> {
        if self
            .repository
            .find_first_by_name(&input.name)
            .await?
            .is_some()
        {
            return Err(DomainError::Conflict(
                "Product name already exists".to_string(),
            ));
        }

        let product = self.repository.create(input).await?;
        info!(id = product.id, name = %product.name, "product created");
        Ok(product)
    }

    pub async fn find_by_id(&self, id: i64) -> DomainResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "product",
                field: "id",
                value: id.to_string(),
            })
    }

    /// Paginated listing. Plays the upstream-validation role for the
    /// pagination engine: the limit is bounds-checked here, so the engine
    /// can trust it.
    pub async fn list(&self, criteria: ListProducts) -> DomainResult<PageResult<Product>> {
        let limit = criteria.limit.unwrap_or(DEFAULT_LIMIT);
        if limit == 0 || limit > MAX_LIMIT {
            return Err(DomainError::Validation(format!(
                "limit must be between 1 and {MAX_LIMIT}"
            )));
        }

        let filter = ProductFilter {
            category: criteria.category,
            status: criteria.status,
            search: criteria.search,
            min_price: criteria.min_price,
            max_price: criteria.max_price,
        };
        let request = PageRequest {
            cursor: criteria.cursor,
            limit,
            direction: criteria.direction.unwrap_or_default(),
        };

        self.repository.list(&filter, &request).await
    }

    pub async fn update(&self, id: i64, changes: ProductUpdate) -> DomainResult<Product> {
        // Existence check first so the caller gets NotFound, not a silent no-op.
        self.find_by_id(id).await?;

        if let Some(price) = changes.price {
            if price <= rust_decimal::Decimal::ZERO {
                return Err(DomainError::Validation(
                    "Price must be greater than 0".to_string(),
                ));
            }
        }

        let product = self.repository.update(id, changes).await?;
        info!(id = product.id, "product updated");
        Ok(product)
    }

    pub async fn delete(&self, id: i64) -> DomainResult<Product> {
        self.find_by_id(id).await?;
        let product = self.repository.delete(id).await?;
        info!(id = product.id, name = %product.name, "product deleted");
        Ok(product)
    }
}
