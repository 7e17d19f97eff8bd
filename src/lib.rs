//! # Catalog Core
//!
//! Cursor-paginated product catalog core: a pagination engine over an
//! ordered record store, plus the product repository and service built on
//! top of it.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **domain**: entities, the record-store capability, and the pagination
//!   engine
//! - **application**: catalog business logic (`ProductService`)
//! - **infrastructure**: storage backends (`InMemoryCatalog`)
//! - **shared**: cross-cutting types (errors, pagination request/response)
//!
//! Pagination is stateless on the server side: every page request carries
//! its position in an opaque cursor, the engine issues one overfetch scan
//! against the store, and the extra row tells it whether more data exists
//! without a count query.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use application::{ListProducts, ProductService};
pub use domain::{
    paginate, NewProduct, Product, ProductFilter, ProductRepository, ProductStatus,
    ProductUpdate, Record, RecordStore, Scan,
};
pub use infrastructure::InMemoryCatalog;
pub use shared::{
    Cursor, Direction, DomainError, DomainResult, PageMeta, PageRequest, PageResult,
    DEFAULT_LIMIT, MAX_LIMIT,
};
