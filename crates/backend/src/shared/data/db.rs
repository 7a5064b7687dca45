use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Schema bootstrap, executed statement by statement at startup.
///
/// Referential integrity between tables is enforced at the service layer;
/// the storage layer only carries the uniqueness constraints (bridge
/// pairs, usernames, role names, one address per user) that must hold
/// under concurrent writers.
const SCHEMA: &[&str] = &[
    // location
    "CREATE TABLE IF NOT EXISTS a001_region (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        version INTEGER NOT NULL DEFAULT 0
    );",
    "CREATE TABLE IF NOT EXISTS a002_commune (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        region_id TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        version INTEGER NOT NULL DEFAULT 0
    );",
    "CREATE TABLE IF NOT EXISTS a003_address (
        id TEXT PRIMARY KEY NOT NULL,
        street TEXT NOT NULL,
        number TEXT NOT NULL,
        extra TEXT,
        commune_id TEXT NOT NULL,
        user_id TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        version INTEGER NOT NULL DEFAULT 0
    );",
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_a003_address_user
        ON a003_address(user_id);",
    // catalog reference data
    "CREATE TABLE IF NOT EXISTS a004_product_type (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        version INTEGER NOT NULL DEFAULT 0
    );",
    "CREATE TABLE IF NOT EXISTS a005_classification (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        version INTEGER NOT NULL DEFAULT 0
    );",
    "CREATE TABLE IF NOT EXISTS a006_status (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        version INTEGER NOT NULL DEFAULT 0
    );",
    "CREATE TABLE IF NOT EXISTS a007_genre (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        version INTEGER NOT NULL DEFAULT 0
    );",
    "CREATE TABLE IF NOT EXISTS a008_platform (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        version INTEGER NOT NULL DEFAULT 0
    );",
    "CREATE TABLE IF NOT EXISTS a009_saga (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        version INTEGER NOT NULL DEFAULT 0
    );",
    "CREATE TABLE IF NOT EXISTS a010_developer_type (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        version INTEGER NOT NULL DEFAULT 0
    );",
    "CREATE TABLE IF NOT EXISTS a011_developer (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        version INTEGER NOT NULL DEFAULT 0
    );",
    "CREATE TABLE IF NOT EXISTS a011_developer_type_link (
        id TEXT PRIMARY KEY NOT NULL,
        developer_id TEXT NOT NULL,
        developer_type_id TEXT NOT NULL,
        created_at TEXT NOT NULL
    );",
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_a011_developer_type_pair
        ON a011_developer_type_link(developer_id, developer_type_id);",
    "CREATE TABLE IF NOT EXISTS a012_company_type (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        version INTEGER NOT NULL DEFAULT 0
    );",
    "CREATE TABLE IF NOT EXISTS a013_company (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        version INTEGER NOT NULL DEFAULT 0
    );",
    "CREATE TABLE IF NOT EXISTS a013_company_type_link (
        id TEXT PRIMARY KEY NOT NULL,
        company_id TEXT NOT NULL,
        company_type_id TEXT NOT NULL,
        created_at TEXT NOT NULL
    );",
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_a013_company_type_pair
        ON a013_company_type_link(company_id, company_type_id);",
    // products and owned children
    "CREATE TABLE IF NOT EXISTS a014_product (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        description TEXT,
        price REAL NOT NULL,
        product_type_id TEXT NOT NULL,
        classification_id TEXT NOT NULL,
        status_id TEXT NOT NULL,
        saga_id TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        version INTEGER NOT NULL DEFAULT 0
    );",
    "CREATE TABLE IF NOT EXISTS a014_product_genre (
        id TEXT PRIMARY KEY NOT NULL,
        product_id TEXT NOT NULL,
        genre_id TEXT NOT NULL,
        created_at TEXT NOT NULL
    );",
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_a014_product_genre_pair
        ON a014_product_genre(product_id, genre_id);",
    "CREATE TABLE IF NOT EXISTS a014_product_platform (
        id TEXT PRIMARY KEY NOT NULL,
        product_id TEXT NOT NULL,
        platform_id TEXT NOT NULL,
        created_at TEXT NOT NULL
    );",
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_a014_product_platform_pair
        ON a014_product_platform(product_id, platform_id);",
    "CREATE TABLE IF NOT EXISTS a014_product_developer (
        id TEXT PRIMARY KEY NOT NULL,
        product_id TEXT NOT NULL,
        developer_id TEXT NOT NULL,
        created_at TEXT NOT NULL
    );",
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_a014_product_developer_pair
        ON a014_product_developer(product_id, developer_id);",
    "CREATE TABLE IF NOT EXISTS a014_product_company (
        id TEXT PRIMARY KEY NOT NULL,
        product_id TEXT NOT NULL,
        company_id TEXT NOT NULL,
        created_at TEXT NOT NULL
    );",
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_a014_product_company_pair
        ON a014_product_company(product_id, company_id);",
    "CREATE TABLE IF NOT EXISTS a015_product_image (
        id TEXT PRIMARY KEY NOT NULL,
        product_id TEXT NOT NULL,
        url TEXT NOT NULL,
        alt_text TEXT,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        version INTEGER NOT NULL DEFAULT 0
    );",
    "CREATE TABLE IF NOT EXISTS a016_purchase_link (
        id TEXT PRIMARY KEY NOT NULL,
        product_id TEXT NOT NULL,
        store TEXT NOT NULL,
        url TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        version INTEGER NOT NULL DEFAULT 0
    );",
    // sales
    "CREATE TABLE IF NOT EXISTS a017_payment_method (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        version INTEGER NOT NULL DEFAULT 0
    );",
    "CREATE TABLE IF NOT EXISTS a018_shipping_method (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        version INTEGER NOT NULL DEFAULT 0
    );",
    "CREATE TABLE IF NOT EXISTS a019_sale_status (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        version INTEGER NOT NULL DEFAULT 0
    );",
    "CREATE TABLE IF NOT EXISTS a020_sale (
        id TEXT PRIMARY KEY NOT NULL,
        user_id TEXT NOT NULL,
        payment_method_id TEXT NOT NULL,
        shipping_method_id TEXT NOT NULL,
        status_id TEXT NOT NULL,
        purchase_date TEXT NOT NULL,
        purchase_time TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        version INTEGER NOT NULL DEFAULT 0
    );",
    "CREATE TABLE IF NOT EXISTS a020_sale_line (
        id TEXT PRIMARY KEY NOT NULL,
        sale_id TEXT NOT NULL,
        product_id TEXT NOT NULL,
        line_no INTEGER NOT NULL,
        quantity INTEGER NOT NULL,
        unit_price REAL NOT NULL
    );",
    "CREATE INDEX IF NOT EXISTS idx_a020_sale_line_sale
        ON a020_sale_line(sale_id);",
    // identity
    "CREATE TABLE IF NOT EXISTS sys_roles (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL UNIQUE,
        created_at TEXT NOT NULL
    );",
    "CREATE TABLE IF NOT EXISTS sys_users (
        id TEXT PRIMARY KEY NOT NULL,
        username TEXT NOT NULL UNIQUE,
        email TEXT,
        full_name TEXT,
        password_hash TEXT NOT NULL,
        role_id TEXT NOT NULL,
        is_active INTEGER NOT NULL DEFAULT 1,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL,
        last_login_at TEXT
    );",
    "CREATE TABLE IF NOT EXISTS sys_sessions (
        id TEXT PRIMARY KEY NOT NULL,
        user_id TEXT NOT NULL,
        token_hash TEXT NOT NULL,
        created_at TEXT NOT NULL,
        expires_at TEXT NOT NULL,
        revoked_at TEXT
    );",
    "CREATE INDEX IF NOT EXISTS idx_sys_sessions_token
        ON sys_sessions(token_hash);",
];

pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    let db_file = db_path.unwrap_or("target/db/gamestore.db");
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    let conn = Database::connect(&db_url).await?;
    create_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

/// Run every bootstrap statement; all of them are idempotent.
pub async fn create_schema(conn: &DatabaseConnection) -> Result<(), sea_orm::DbErr> {
    for sql in SCHEMA {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            (*sql).to_string(),
        ))
        .await?;
    }
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

#[cfg(test)]
pub(crate) fn try_install_connection(conn: DatabaseConnection) -> bool {
    DB_CONN.set(conn).is_ok()
}

#[cfg(test)]
pub(crate) fn is_initialized() -> bool {
    DB_CONN.get().is_some()
}
