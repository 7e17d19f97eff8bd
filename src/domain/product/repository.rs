//! Product repository interface

use async_trait::async_trait;

use super::model::{NewProduct, Product, ProductFilter, ProductUpdate};
use crate::shared::{DomainResult, PageRequest, PageResult};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Product>>;
    async fn find_first_by_name(&self, name: &str) -> DomainResult<Option<Product>>;
    /// Cursor-paginated listing in ascending id order.
    async fn list(
        &self,
        filter: &ProductFilter,
        request: &PageRequest,
    ) -> DomainResult<PageResult<Product>>;
    async fn create(&self, input: NewProduct) -> DomainResult<Product>;
    async fn update(&self, id: i64, changes: ProductUpdate) -> DomainResult<Product>;
    /// Delete and return the removed product.
    async fn delete(&self, id: i64) -> DomainResult<Product>;
    async fn count(&self, filter: &ProductFilter) -> DomainResult<u64>;
}
