pub mod product;
pub mod store;

// Re-export commonly used types
pub use product::{NewProduct, Product, ProductFilter, ProductRepository, ProductStatus, ProductUpdate};
pub use store::{paginate, Record, RecordStore, Scan};
