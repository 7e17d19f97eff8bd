//! Product aggregate

pub mod model;
pub mod repository;

pub use model::{NewProduct, Product, ProductFilter, ProductStatus, ProductUpdate};
pub use repository::ProductRepository;
