pub mod aggregate;

pub use aggregate::{CreateSaleDto, Sale, SaleId, SaleLine, SaleView, UpdateSaleDto};
