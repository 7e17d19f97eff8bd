pub mod services;

pub use services::{ListProducts, ProductService};
