//! Application services

mod product;

pub use product::{ListProducts, ProductService};
