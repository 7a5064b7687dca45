pub mod a001_region;
pub mod a002_commune;
pub mod a003_address;
pub mod a004_product_type;
pub mod a005_classification;
pub mod a006_status;
pub mod a007_genre;
pub mod a008_platform;
pub mod a009_saga;
pub mod a010_developer_type;
pub mod a011_developer;
pub mod a012_company_type;
pub mod a013_company;
pub mod a014_product;
pub mod a015_product_image;
pub mod a016_purchase_link;
pub mod a017_payment_method;
pub mod a018_shipping_method;
pub mod a019_sale_status;
pub mod a020_sale;
