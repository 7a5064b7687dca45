//! Shared test fixtures: an in-memory database wired through the regular
//! schema bootstrap, plus helpers that seed the reference rows most tests
//! need. Fixture names carry a UUID wherever a unique constraint applies,
//! since every test in the binary shares the same database.

use contracts::domain::a002_commune::aggregate::{Commune, CreateCommuneDto};
use contracts::domain::a014_product::aggregate::{CreateProductDto, Product};
use contracts::domain::a019_sale_status::aggregate::{CreateSaleStatusDto, SaleStatus};
use contracts::system::auth::AuthSession;
use contracts::system::roles::{CreateRoleDto, Role};
use contracts::system::users::{CreateUserDto, User};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use uuid::Uuid;

use crate::shared::data::db;

/// Connect the process-wide connection to an in-memory SQLite database and
/// run the schema bootstrap. Safe to call from every test; the first call
/// wins and the bootstrap is idempotent.
pub async fn setup_test_db() -> &'static DatabaseConnection {
    if !db::is_initialized() {
        let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
        options.max_connections(1);
        if let Ok(conn) = Database::connect(options).await {
            let _ = db::try_install_connection(conn);
        }
    }

    let conn = db::get_connection();
    db::create_schema(conn).await.expect("schema bootstrap");
    conn
}

pub async fn seed_role(name: &str) -> Role {
    crate::system::roles::service::create(CreateRoleDto {
        name: name.to_string(),
    })
    .await
    .expect("seed role")
}

/// A fresh user with its own role; the tag keeps usernames readable in
/// failure output.
pub async fn seed_user(tag: &str) -> (User, Role) {
    let role = seed_role(&format!("role-{tag}-{}", Uuid::new_v4())).await;
    let user = crate::system::users::service::create(CreateUserDto {
        username: format!("user-{tag}-{}", Uuid::new_v4()),
        password: "password123".to_string(),
        email: None,
        full_name: None,
        role_id: role.id.clone(),
    })
    .await
    .expect("seed user");
    (user, role)
}

pub fn session_for(user: &User) -> AuthSession {
    AuthSession {
        user_id: user.id.clone(),
        username: user.username.clone(),
        role: "customer".to_string(),
    }
}

pub async fn seed_commune(name: &str) -> Commune {
    let region = crate::domain::a001_region::service::create(
        contracts::domain::a001_region::aggregate::CreateRegionDto {
            name: format!("Region {}", Uuid::new_v4()),
        },
    )
    .await
    .expect("seed region");

    crate::domain::a002_commune::service::create(CreateCommuneDto {
        name: name.to_string(),
        region_id: region.id.value().to_string(),
    })
    .await
    .expect("seed commune")
}

pub struct ProductRefs {
    pub product_type_id: String,
    pub classification_id: String,
    pub status_id: String,
}

pub async fn seed_product_refs() -> ProductRefs {
    let product_type = crate::domain::a004_product_type::service::create(
        contracts::domain::a004_product_type::aggregate::CreateProductTypeDto {
            name: "game".to_string(),
        },
    )
    .await
    .expect("seed product type");
    let classification = crate::domain::a005_classification::service::create(
        contracts::domain::a005_classification::aggregate::CreateClassificationDto {
            name: "E10+".to_string(),
        },
    )
    .await
    .expect("seed classification");
    let status = crate::domain::a006_status::service::create(
        contracts::domain::a006_status::aggregate::CreateStatusDto {
            name: "available".to_string(),
        },
    )
    .await
    .expect("seed status");

    ProductRefs {
        product_type_id: product_type.id.value().to_string(),
        classification_id: classification.id.value().to_string(),
        status_id: status.id.value().to_string(),
    }
}

pub async fn seed_product(name: &str, price: f64) -> Product {
    let refs = seed_product_refs().await;
    crate::domain::a014_product::service::create(CreateProductDto {
        name: name.to_string(),
        description: None,
        price,
        product_type_id: refs.product_type_id,
        classification_id: refs.classification_id,
        status_id: refs.status_id,
        saga_id: None,
    })
    .await
    .expect("seed product")
}

pub struct SaleRefs {
    pub payment_method_id: String,
    pub shipping_method_id: String,
    pub status_id: String,
}

pub async fn seed_sale_status(name: &str) -> SaleStatus {
    crate::domain::a019_sale_status::service::create(CreateSaleStatusDto {
        name: name.to_string(),
    })
    .await
    .expect("seed sale status")
}

pub async fn seed_sale_refs() -> SaleRefs {
    let payment = crate::domain::a017_payment_method::service::create(
        contracts::domain::a017_payment_method::aggregate::CreatePaymentMethodDto {
            name: "credit card".to_string(),
        },
    )
    .await
    .expect("seed payment method");
    let shipping = crate::domain::a018_shipping_method::service::create(
        contracts::domain::a018_shipping_method::aggregate::CreateShippingMethodDto {
            name: "courier".to_string(),
        },
    )
    .await
    .expect("seed shipping method");
    let status = seed_sale_status("pending").await;

    SaleRefs {
        payment_method_id: payment.id.value().to_string(),
        shipping_method_id: shipping.id.value().to_string(),
        status_id: status.id.value().to_string(),
    }
}
