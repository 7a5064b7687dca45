use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, system};

/// All application routes.
pub fn configure_routes() -> Router {
    let require_auth = || middleware::from_fn(system::auth::middleware::require_auth);
    let require_admin = || middleware::from_fn(system::auth::middleware::require_admin);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES
        // ========================================
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        .route(
            "/api/system/auth/logout",
            post(system::handlers::auth::logout).layer(require_auth()),
        )
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user).layer(require_auth()),
        )
        // System users management (admin only)
        .route(
            "/api/system/users",
            get(system::handlers::users::list)
                .post(system::handlers::users::create)
                .layer(require_admin()),
        )
        .route(
            "/api/system/users/:id",
            get(system::handlers::users::get_by_id)
                .patch(system::handlers::users::update)
                .delete(system::handlers::users::delete)
                .layer(require_admin()),
        )
        .route(
            "/api/system/users/:id/change-password",
            post(system::handlers::users::change_password).layer(require_auth()),
        )
        // System roles management (admin only)
        .route(
            "/api/system/roles",
            get(system::handlers::roles::list)
                .post(system::handlers::roles::create)
                .layer(require_admin()),
        )
        .route(
            "/api/system/roles/:id",
            get(system::handlers::roles::get_by_id)
                .patch(system::handlers::roles::update)
                .delete(system::handlers::roles::delete)
                .layer(require_admin()),
        )
        // ========================================
        // LOCATION ROUTES
        // ========================================
        .route(
            "/api/region",
            get(handlers::a001_region::list_all).post(handlers::a001_region::create),
        )
        .route(
            "/api/region/:id",
            get(handlers::a001_region::get_by_id)
                .patch(handlers::a001_region::update)
                .delete(handlers::a001_region::delete),
        )
        .route(
            "/api/region/:id/commune",
            get(handlers::a002_commune::list_by_region),
        )
        .route(
            "/api/commune",
            get(handlers::a002_commune::list_all).post(handlers::a002_commune::create),
        )
        .route(
            "/api/commune/:id",
            get(handlers::a002_commune::get_by_id)
                .patch(handlers::a002_commune::update)
                .delete(handlers::a002_commune::delete),
        )
        .route(
            "/api/address",
            get(handlers::a003_address::list_all)
                .post(handlers::a003_address::create)
                .layer(require_auth()),
        )
        .route(
            "/api/address/:id",
            get(handlers::a003_address::get_by_id)
                .patch(handlers::a003_address::update)
                .delete(handlers::a003_address::delete)
                .layer(require_auth()),
        )
        .route(
            "/api/user/:id/address",
            get(handlers::a003_address::get_by_user).layer(require_auth()),
        )
        // ========================================
        // CATALOG REFERENCE DATA
        // ========================================
        .route(
            "/api/product-type",
            get(handlers::a004_product_type::list_all).post(handlers::a004_product_type::create),
        )
        .route(
            "/api/product-type/:id",
            get(handlers::a004_product_type::get_by_id)
                .patch(handlers::a004_product_type::update)
                .delete(handlers::a004_product_type::delete),
        )
        .route(
            "/api/classification",
            get(handlers::a005_classification::list_all)
                .post(handlers::a005_classification::create),
        )
        .route(
            "/api/classification/:id",
            get(handlers::a005_classification::get_by_id)
                .patch(handlers::a005_classification::update)
                .delete(handlers::a005_classification::delete),
        )
        .route(
            "/api/status",
            get(handlers::a006_status::list_all).post(handlers::a006_status::create),
        )
        .route(
            "/api/status/:id",
            get(handlers::a006_status::get_by_id)
                .patch(handlers::a006_status::update)
                .delete(handlers::a006_status::delete),
        )
        .route(
            "/api/genre",
            get(handlers::a007_genre::list_all).post(handlers::a007_genre::create),
        )
        .route(
            "/api/genre/:id",
            get(handlers::a007_genre::get_by_id)
                .patch(handlers::a007_genre::update)
                .delete(handlers::a007_genre::delete),
        )
        .route(
            "/api/genre/:id/product",
            get(handlers::a014_product::list_by_genre),
        )
        .route(
            "/api/platform",
            get(handlers::a008_platform::list_all).post(handlers::a008_platform::create),
        )
        .route(
            "/api/platform/:id",
            get(handlers::a008_platform::get_by_id)
                .patch(handlers::a008_platform::update)
                .delete(handlers::a008_platform::delete),
        )
        .route(
            "/api/platform/:id/product",
            get(handlers::a014_product::list_by_platform),
        )
        .route(
            "/api/saga",
            get(handlers::a009_saga::list_all).post(handlers::a009_saga::create),
        )
        .route(
            "/api/saga/:id",
            get(handlers::a009_saga::get_by_id)
                .patch(handlers::a009_saga::update)
                .delete(handlers::a009_saga::delete),
        )
        // ========================================
        // DEVELOPERS & COMPANIES
        // ========================================
        .route(
            "/api/developer-type",
            get(handlers::a010_developer_type::list_all)
                .post(handlers::a010_developer_type::create),
        )
        .route(
            "/api/developer-type/:id",
            get(handlers::a010_developer_type::get_by_id)
                .patch(handlers::a010_developer_type::update)
                .delete(handlers::a010_developer_type::delete),
        )
        .route(
            "/api/developer",
            get(handlers::a011_developer::list_all).post(handlers::a011_developer::create),
        )
        .route(
            "/api/developer/:id",
            get(handlers::a011_developer::get_by_id)
                .patch(handlers::a011_developer::update)
                .delete(handlers::a011_developer::delete),
        )
        .route(
            "/api/developer/:id/type",
            get(handlers::a011_developer::list_types),
        )
        .route(
            "/api/developer/:id/type/:type_id",
            post(handlers::a011_developer::add_type).delete(handlers::a011_developer::remove_type),
        )
        .route(
            "/api/company-type",
            get(handlers::a012_company_type::list_all).post(handlers::a012_company_type::create),
        )
        .route(
            "/api/company-type/:id",
            get(handlers::a012_company_type::get_by_id)
                .patch(handlers::a012_company_type::update)
                .delete(handlers::a012_company_type::delete),
        )
        .route(
            "/api/company",
            get(handlers::a013_company::list_all).post(handlers::a013_company::create),
        )
        .route(
            "/api/company/:id",
            get(handlers::a013_company::get_by_id)
                .patch(handlers::a013_company::update)
                .delete(handlers::a013_company::delete),
        )
        .route(
            "/api/company/:id/type",
            get(handlers::a013_company::list_types),
        )
        .route(
            "/api/company/:id/type/:type_id",
            post(handlers::a013_company::add_type).delete(handlers::a013_company::remove_type),
        )
        // ========================================
        // PRODUCTS
        // ========================================
        .route(
            "/api/product",
            get(handlers::a014_product::list_all).post(handlers::a014_product::create),
        )
        .route(
            "/api/product/:id",
            get(handlers::a014_product::get_by_id)
                .patch(handlers::a014_product::update)
                .delete(handlers::a014_product::delete),
        )
        .route(
            "/api/product/:id/genre",
            get(handlers::a014_product::list_genres),
        )
        .route(
            "/api/product/:id/genre/:genre_id",
            post(handlers::a014_product::add_genre).delete(handlers::a014_product::remove_genre),
        )
        .route(
            "/api/product/:id/platform",
            get(handlers::a014_product::list_platforms),
        )
        .route(
            "/api/product/:id/platform/:platform_id",
            post(handlers::a014_product::add_platform)
                .delete(handlers::a014_product::remove_platform),
        )
        .route(
            "/api/product/:id/developer",
            get(handlers::a014_product::list_developers),
        )
        .route(
            "/api/product/:id/developer/:developer_id",
            post(handlers::a014_product::add_developer)
                .delete(handlers::a014_product::remove_developer),
        )
        .route(
            "/api/product/:id/company",
            get(handlers::a014_product::list_companies),
        )
        .route(
            "/api/product/:id/company/:company_id",
            post(handlers::a014_product::add_company)
                .delete(handlers::a014_product::remove_company),
        )
        .route(
            "/api/product/:id/image",
            get(handlers::a015_product_image::list_by_product)
                .post(handlers::a015_product_image::create),
        )
        .route(
            "/api/image/:id",
            get(handlers::a015_product_image::get_by_id)
                .patch(handlers::a015_product_image::update)
                .delete(handlers::a015_product_image::delete),
        )
        .route(
            "/api/product/:id/purchase-link",
            get(handlers::a016_purchase_link::list_by_product)
                .post(handlers::a016_purchase_link::create),
        )
        .route(
            "/api/purchase-link/:id",
            get(handlers::a016_purchase_link::get_by_id)
                .patch(handlers::a016_purchase_link::update)
                .delete(handlers::a016_purchase_link::delete),
        )
        // ========================================
        // SALES
        // ========================================
        .route(
            "/api/payment-method",
            get(handlers::a017_payment_method::list_all)
                .post(handlers::a017_payment_method::create),
        )
        .route(
            "/api/payment-method/:id",
            get(handlers::a017_payment_method::get_by_id)
                .patch(handlers::a017_payment_method::update)
                .delete(handlers::a017_payment_method::delete),
        )
        .route(
            "/api/shipping-method",
            get(handlers::a018_shipping_method::list_all)
                .post(handlers::a018_shipping_method::create),
        )
        .route(
            "/api/shipping-method/:id",
            get(handlers::a018_shipping_method::get_by_id)
                .patch(handlers::a018_shipping_method::update)
                .delete(handlers::a018_shipping_method::delete),
        )
        .route(
            "/api/sale-status",
            get(handlers::a019_sale_status::list_all).post(handlers::a019_sale_status::create),
        )
        .route(
            "/api/sale-status/:id",
            get(handlers::a019_sale_status::get_by_id)
                .patch(handlers::a019_sale_status::update)
                .delete(handlers::a019_sale_status::delete),
        )
        .route(
            "/api/sale",
            get(handlers::a020_sale::list_all)
                .layer(require_admin())
                .post(handlers::a020_sale::create)
                .layer(require_auth()),
        )
        .route(
            "/api/sale/mine",
            get(handlers::a020_sale::list_mine).layer(require_auth()),
        )
        .route(
            "/api/sale/:id",
            get(handlers::a020_sale::get_by_id)
                .patch(handlers::a020_sale::update)
                .delete(handlers::a020_sale::delete)
                .layer(require_admin()),
        )
}
