use contracts::domain::a007_genre::aggregate::Genre;
use contracts::domain::a008_platform::aggregate::Platform;
use contracts::domain::a011_developer::aggregate::Developer;
use contracts::domain::a013_company::aggregate::Company;
use contracts::domain::a014_product::aggregate::{CreateProductDto, Product, UpdateProductDto};
use uuid::Uuid;

use super::repository;
use crate::domain::a004_product_type::repository as product_type_repository;
use crate::domain::a005_classification::repository as classification_repository;
use crate::domain::a006_status::repository as status_repository;
use crate::domain::a007_genre::repository as genre_repository;
use crate::domain::a008_platform::repository as platform_repository;
use crate::domain::a009_saga::repository as saga_repository;
use crate::domain::a011_developer::repository as developer_repository;
use crate::domain::a013_company::repository as company_repository;
use crate::errors::{Error, Result};
use crate::shared::data::{guards, links};

async fn ensure_reference(
    label: &'static str,
    raw_id: &str,
    exists: impl std::future::Future<Output = Result<bool>>,
) -> Result<()> {
    if !exists.await? {
        return Err(Error::not_found(label, raw_id));
    }
    Ok(())
}

fn parse_reference(label: &'static str, raw_id: &str) -> Result<Uuid> {
    Uuid::parse_str(raw_id).map_err(|_| Error::validation(format!("invalid {label} id: {raw_id}")))
}

/// Every foreign key on the aggregate must point at an existing row.
async fn ensure_references(product: &Product) -> Result<()> {
    let type_id = parse_reference("product type", &product.product_type_id)?;
    ensure_reference(
        "product type",
        &product.product_type_id,
        product_type_repository::exists(type_id),
    )
    .await?;

    let classification_id = parse_reference("classification", &product.classification_id)?;
    ensure_reference(
        "classification",
        &product.classification_id,
        classification_repository::exists(classification_id),
    )
    .await?;

    let status_id = parse_reference("status", &product.status_id)?;
    ensure_reference(
        "status",
        &product.status_id,
        status_repository::exists(status_id),
    )
    .await?;

    if let Some(saga_id) = &product.saga_id {
        let parsed = parse_reference("saga", saga_id)?;
        ensure_reference("saga", saga_id, saga_repository::exists(parsed)).await?;
    }

    Ok(())
}

pub async fn create(dto: CreateProductDto) -> Result<Product> {
    let aggregate = Product::new_for_insert(
        dto.name,
        dto.description,
        dto.price,
        dto.product_type_id,
        dto.classification_id,
        dto.status_id,
        dto.saga_id,
    );
    aggregate.validate().map_err(Error::Validation)?;
    ensure_references(&aggregate).await?;
    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: UpdateProductDto) -> Result<Product> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("product", id))?;

    aggregate.apply(&dto);
    aggregate.validate().map_err(Error::Validation)?;
    ensure_references(&aggregate).await?;
    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(aggregate)
}

/// A product that has been sold stays in the catalog; everything the
/// product owns (images, purchase links, bridge rows) goes with it.
pub async fn delete(id: Uuid) -> Result<()> {
    guards::ensure_no_dependents(id, &[("a020_sale_line", "product_id", "sale lines")]).await?;
    if !repository::delete(id).await? {
        return Err(Error::not_found("product", id));
    }
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> Result<Option<Product>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> Result<Vec<Product>> {
    repository::list_all().await
}

async fn ensure_product_exists(product_id: Uuid) -> Result<()> {
    if !repository::exists(product_id).await? {
        return Err(Error::not_found("product", product_id));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Bridge operations. Each pair is unique; linking twice is a no-op and
// unlinking a missing pair reports not-found.
// ---------------------------------------------------------------------------

pub async fn add_genre(product_id: Uuid, genre_id: Uuid) -> Result<bool> {
    ensure_product_exists(product_id).await?;
    if !genre_repository::exists(genre_id).await? {
        return Err(Error::not_found("genre", genre_id));
    }
    links::PRODUCT_GENRE.link(product_id, genre_id).await
}

pub async fn remove_genre(product_id: Uuid, genre_id: Uuid) -> Result<()> {
    if !links::PRODUCT_GENRE.unlink(product_id, genre_id).await? {
        return Err(Error::NotFound(format!(
            "product {product_id} is not linked to genre {genre_id}"
        )));
    }
    Ok(())
}

pub async fn genres(product_id: Uuid) -> Result<Vec<Genre>> {
    ensure_product_exists(product_id).await?;
    let ids = links::PRODUCT_GENRE.right_ids(product_id).await?;
    collect_linked(ids, |uuid| genre_repository::get_by_id(uuid)).await
}

/// The bridge read from the other side: catalog browsing by genre.
pub async fn list_by_genre(genre_id: Uuid) -> Result<Vec<Product>> {
    if !genre_repository::exists(genre_id).await? {
        return Err(Error::not_found("genre", genre_id));
    }
    let ids = links::PRODUCT_GENRE.left_ids(genre_id).await?;
    collect_linked(ids, |uuid| repository::get_by_id(uuid)).await
}

pub async fn list_by_platform(platform_id: Uuid) -> Result<Vec<Product>> {
    if !platform_repository::exists(platform_id).await? {
        return Err(Error::not_found("platform", platform_id));
    }
    let ids = links::PRODUCT_PLATFORM.left_ids(platform_id).await?;
    collect_linked(ids, |uuid| repository::get_by_id(uuid)).await
}

pub async fn add_platform(product_id: Uuid, platform_id: Uuid) -> Result<bool> {
    ensure_product_exists(product_id).await?;
    if !platform_repository::exists(platform_id).await? {
        return Err(Error::not_found("platform", platform_id));
    }
    links::PRODUCT_PLATFORM.link(product_id, platform_id).await
}

pub async fn remove_platform(product_id: Uuid, platform_id: Uuid) -> Result<()> {
    if !links::PRODUCT_PLATFORM
        .unlink(product_id, platform_id)
        .await?
    {
        return Err(Error::NotFound(format!(
            "product {product_id} is not linked to platform {platform_id}"
        )));
    }
    Ok(())
}

pub async fn platforms(product_id: Uuid) -> Result<Vec<Platform>> {
    ensure_product_exists(product_id).await?;
    let ids = links::PRODUCT_PLATFORM.right_ids(product_id).await?;
    collect_linked(ids, |uuid| platform_repository::get_by_id(uuid)).await
}

pub async fn add_developer(product_id: Uuid, developer_id: Uuid) -> Result<bool> {
    ensure_product_exists(product_id).await?;
    if !developer_repository::exists(developer_id).await? {
        return Err(Error::not_found("developer", developer_id));
    }
    links::PRODUCT_DEVELOPER.link(product_id, developer_id).await
}

pub async fn remove_developer(product_id: Uuid, developer_id: Uuid) -> Result<()> {
    if !links::PRODUCT_DEVELOPER
        .unlink(product_id, developer_id)
        .await?
    {
        return Err(Error::NotFound(format!(
            "product {product_id} is not linked to developer {developer_id}"
        )));
    }
    Ok(())
}

pub async fn developers(product_id: Uuid) -> Result<Vec<Developer>> {
    ensure_product_exists(product_id).await?;
    let ids = links::PRODUCT_DEVELOPER.right_ids(product_id).await?;
    collect_linked(ids, |uuid| developer_repository::get_by_id(uuid)).await
}

pub async fn add_company(product_id: Uuid, company_id: Uuid) -> Result<bool> {
    ensure_product_exists(product_id).await?;
    if !company_repository::exists(company_id).await? {
        return Err(Error::not_found("company", company_id));
    }
    links::PRODUCT_COMPANY.link(product_id, company_id).await
}

pub async fn remove_company(product_id: Uuid, company_id: Uuid) -> Result<()> {
    if !links::PRODUCT_COMPANY.unlink(product_id, company_id).await? {
        return Err(Error::NotFound(format!(
            "product {product_id} is not linked to company {company_id}"
        )));
    }
    Ok(())
}

pub async fn companies(product_id: Uuid) -> Result<Vec<Company>> {
    ensure_product_exists(product_id).await?;
    let ids = links::PRODUCT_COMPANY.right_ids(product_id).await?;
    collect_linked(ids, |uuid| company_repository::get_by_id(uuid)).await
}

async fn collect_linked<T, F, Fut>(ids: Vec<String>, fetch: F) -> Result<Vec<T>>
where
    F: Fn(Uuid) -> Fut,
    Fut: std::future::Future<Output = Result<Option<T>>>,
{
    let mut items = Vec::with_capacity(ids.len());
    for id in ids {
        let uuid =
            Uuid::parse_str(&id).map_err(|_| Error::Internal(format!("corrupt bridge row: {id}")))?;
        if let Some(item) = fetch(uuid).await? {
            items.push(item);
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a007_genre::service as genre_service;
    use crate::domain::a015_product_image::service as image_service;
    use crate::test_utils;
    use contracts::domain::a007_genre::aggregate::CreateGenreDto;
    use contracts::domain::a015_product_image::aggregate::CreateProductImageDto;

    #[tokio::test]
    async fn create_rejects_unknown_references() {
        test_utils::setup_test_db().await;
        let refs = test_utils::seed_product_refs().await;

        let err = create(CreateProductDto {
            name: "Phantom".to_string(),
            description: None,
            price: 9990.0,
            product_type_id: Uuid::new_v4().to_string(),
            classification_id: refs.classification_id.clone(),
            status_id: refs.status_id.clone(),
            saga_id: None,
        })
        .await
        .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn genre_links_are_idempotent_per_pair() {
        test_utils::setup_test_db().await;
        let product = test_utils::seed_product("Hollow Knight", 14990.0).await;
        let genre = genre_service::create(CreateGenreDto {
            name: format!("metroidvania-{}", Uuid::new_v4()),
        })
        .await
        .unwrap();

        assert!(add_genre(product.id.value(), genre.id.value())
            .await
            .unwrap());
        assert!(!add_genre(product.id.value(), genre.id.value())
            .await
            .unwrap());

        let linked = genres(product.id.value()).await.unwrap();
        assert_eq!(linked.len(), 1);

        // genre in use blocks its deletion
        let err = genre_service::delete(genre.id.value()).await.unwrap_err();
        assert!(matches!(err, Error::Conflict(_)));
    }

    #[tokio::test]
    async fn unlinking_missing_genre_pair_is_not_found() {
        test_utils::setup_test_db().await;
        let product = test_utils::seed_product("Celeste", 9990.0).await;

        let err = remove_genre(product.id.value(), Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn deleting_a_product_removes_owned_rows() {
        test_utils::setup_test_db().await;
        let product = test_utils::seed_product("Tunic", 19990.0).await;
        let genre = genre_service::create(CreateGenreDto {
            name: format!("adventure-{}", Uuid::new_v4()),
        })
        .await
        .unwrap();

        add_genre(product.id.value(), genre.id.value()).await.unwrap();
        image_service::create(
            product.id.value(),
            CreateProductImageDto {
                url: "https://cdn.example/tunic.png".to_string(),
                alt_text: None,
            },
        )
        .await
        .unwrap();

        delete(product.id.value()).await.unwrap();

        assert!(get_by_id(product.id.value()).await.unwrap().is_none());
        let images = crate::domain::a015_product_image::repository::list_by_product(
            product.id.value(),
        )
        .await
        .unwrap();
        assert!(images.is_empty());
        // the genre is free again once the bridge rows are gone
        genre_service::delete(genre.id.value()).await.unwrap();
    }
}
