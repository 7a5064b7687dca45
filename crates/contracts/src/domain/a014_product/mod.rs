pub mod aggregate;

pub use aggregate::{CreateProductDto, Product, ProductId, UpdateProductDto};
