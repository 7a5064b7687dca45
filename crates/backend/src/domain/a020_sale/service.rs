use contracts::domain::a020_sale::aggregate::{CreateSaleDto, Sale, SaleLine, UpdateSaleDto};
use contracts::system::auth::AuthSession;
use uuid::Uuid;

use super::repository;
use crate::domain::a014_product::repository as product_repository;
use crate::domain::a017_payment_method::repository as payment_repository;
use crate::domain::a018_shipping_method::repository as shipping_repository;
use crate::domain::a019_sale_status::repository as status_repository;
use crate::errors::{Error, Result};
use crate::system::users::repository as users_repository;

fn parse_reference(label: &'static str, raw_id: &str) -> Result<Uuid> {
    Uuid::parse_str(raw_id).map_err(|_| Error::validation(format!("invalid {label} id: {raw_id}")))
}

async fn ensure_header_references(sale: &Sale) -> Result<()> {
    let payment_id = parse_reference("payment method", &sale.payment_method_id)?;
    if !payment_repository::exists(payment_id).await? {
        return Err(Error::not_found("payment method", &sale.payment_method_id));
    }
    let shipping_id = parse_reference("shipping method", &sale.shipping_method_id)?;
    if !shipping_repository::exists(shipping_id).await? {
        return Err(Error::not_found("shipping method", &sale.shipping_method_id));
    }
    let status_id = parse_reference("sale status", &sale.status_id)?;
    if !status_repository::exists(status_id).await? {
        return Err(Error::not_found("sale status", &sale.status_id));
    }
    Ok(())
}

/// Build and persist a sale for the authenticated caller.
///
/// The caller's identity comes from the session context, never from the
/// request body. The unit price of every line is taken from the request
/// as-is: prices are locked when the cart is built and deliberately not
/// re-read from the catalog here.
pub async fn create(auth: &AuthSession, dto: CreateSaleDto) -> Result<Sale> {
    if users_repository::get_by_id(&auth.user_id).await?.is_none() {
        return Err(Error::not_found("user", &auth.user_id));
    }

    let lines: Vec<SaleLine> = dto
        .lines
        .into_iter()
        .map(|line| SaleLine {
            id: Uuid::new_v4().to_string(),
            product_id: line.product_id,
            quantity: line.quantity,
            unit_price: line.unit_price,
        })
        .collect();

    let aggregate = Sale::new_for_insert(
        auth.user_id.clone(),
        dto.payment_method_id,
        dto.shipping_method_id,
        dto.status_id,
        lines,
    );
    aggregate.validate().map_err(Error::Validation)?;

    ensure_header_references(&aggregate).await?;
    for line in &aggregate.lines {
        let product_id = parse_reference("product", &line.product_id)?;
        if !product_repository::exists(product_id).await? {
            return Err(Error::not_found("product", &line.product_id));
        }
    }

    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

/// Patch the header references; the line items are immutable.
pub async fn update(id: Uuid, dto: UpdateSaleDto) -> Result<Sale> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("sale", id))?;

    aggregate.apply(&dto);
    aggregate.validate().map_err(Error::Validation)?;
    ensure_header_references(&aggregate).await?;
    aggregate.before_write();
    repository::update_header(&aggregate).await?;
    Ok(aggregate)
}

pub async fn delete(id: Uuid) -> Result<()> {
    if !repository::delete(id).await? {
        return Err(Error::not_found("sale", id));
    }
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> Result<Option<Sale>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> Result<Vec<Sale>> {
    repository::list_all().await
}

pub async fn list_for_user(auth: &AuthSession) -> Result<Vec<Sale>> {
    repository::list_by_user(&auth.user_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::guards;
    use crate::test_utils;
    use contracts::domain::a020_sale::aggregate::SaleLineDto;

    fn dto_with_lines(refs: &test_utils::SaleRefs, lines: Vec<SaleLineDto>) -> CreateSaleDto {
        CreateSaleDto {
            payment_method_id: refs.payment_method_id.clone(),
            shipping_method_id: refs.shipping_method_id.clone(),
            status_id: refs.status_id.clone(),
            lines,
        }
    }

    #[tokio::test]
    async fn persists_all_lines_and_derives_the_total() {
        test_utils::setup_test_db().await;
        let (user, _role) = test_utils::seed_user("sale-totals").await;
        let auth = test_utils::session_for(&user);
        let refs = test_utils::seed_sale_refs().await;
        let first = test_utils::seed_product("Katamari Reroll", 12990.0).await;
        let second = test_utils::seed_product("Paprika BluRay", 5000.0).await;

        let sale = create(
            &auth,
            dto_with_lines(
                &refs,
                vec![
                    SaleLineDto {
                        product_id: first.id.value().to_string(),
                        quantity: 2,
                        unit_price: 12990.0,
                    },
                    SaleLineDto {
                        product_id: second.id.value().to_string(),
                        quantity: 1,
                        unit_price: 5000.0,
                    },
                ],
            ),
        )
        .await
        .unwrap();

        assert_eq!(sale.total(), 30980.0);

        let persisted = get_by_id(sale.id.value()).await.unwrap().unwrap();
        assert_eq!(persisted.lines.len(), 2);
        assert_eq!(persisted.lines[0].subtotal(), 25980.0);
        assert_eq!(persisted.lines[1].subtotal(), 5000.0);
        assert_eq!(persisted.total(), 30980.0);
        assert_eq!(persisted.user_id, user.id);
    }

    #[tokio::test]
    async fn empty_line_list_is_a_validation_error() {
        test_utils::setup_test_db().await;
        let (user, _role) = test_utils::seed_user("sale-empty").await;
        let auth = test_utils::session_for(&user);
        let refs = test_utils::seed_sale_refs().await;

        let err = create(&auth, dto_with_lines(&refs, Vec::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn non_positive_quantity_is_a_validation_error() {
        test_utils::setup_test_db().await;
        let (user, _role) = test_utils::seed_user("sale-qty").await;
        let auth = test_utils::session_for(&user);
        let refs = test_utils::seed_sale_refs().await;
        let product = test_utils::seed_product("Okami HD", 19990.0).await;

        let err = create(
            &auth,
            dto_with_lines(
                &refs,
                vec![SaleLineDto {
                    product_id: product.id.value().to_string(),
                    quantity: 0,
                    unit_price: 19990.0,
                }],
            ),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn unknown_product_fails_and_persists_nothing() {
        test_utils::setup_test_db().await;
        let (user, _role) = test_utils::seed_user("sale-unknown-product").await;
        let auth = test_utils::session_for(&user);
        let refs = test_utils::seed_sale_refs().await;
        let known = test_utils::seed_product("Journey", 9990.0).await;

        let err = create(
            &auth,
            dto_with_lines(
                &refs,
                vec![
                    SaleLineDto {
                        product_id: known.id.value().to_string(),
                        quantity: 1,
                        unit_price: 9990.0,
                    },
                    SaleLineDto {
                        product_id: Uuid::new_v4().to_string(),
                        quantity: 1,
                        unit_price: 100.0,
                    },
                ],
            ),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));

        let sales = repository::list_by_user(&user.id).await.unwrap();
        assert!(sales.is_empty());
    }

    #[tokio::test]
    async fn unknown_payment_method_is_not_found() {
        test_utils::setup_test_db().await;
        let (user, _role) = test_utils::seed_user("sale-unknown-payment").await;
        let auth = test_utils::session_for(&user);
        let refs = test_utils::seed_sale_refs().await;
        let product = test_utils::seed_product("Rez Infinite", 14990.0).await;

        let mut dto = dto_with_lines(
            &refs,
            vec![SaleLineDto {
                product_id: product.id.value().to_string(),
                quantity: 1,
                unit_price: 14990.0,
            }],
        );
        dto.payment_method_id = Uuid::new_v4().to_string();

        let err = create(&auth, dto).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn vanished_session_user_is_not_found() {
        test_utils::setup_test_db().await;
        let refs = test_utils::seed_sale_refs().await;
        let product = test_utils::seed_product("Ico", 4990.0).await;
        let auth = AuthSession {
            user_id: Uuid::new_v4().to_string(),
            username: "ghost".to_string(),
            role: "customer".to_string(),
        };

        let err = create(
            &auth,
            dto_with_lines(
                &refs,
                vec![SaleLineDto {
                    product_id: product.id.value().to_string(),
                    quantity: 1,
                    unit_price: 4990.0,
                }],
            ),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[tokio::test]
    async fn header_patch_moves_status_only() {
        test_utils::setup_test_db().await;
        let (user, _role) = test_utils::seed_user("sale-patch").await;
        let auth = test_utils::session_for(&user);
        let refs = test_utils::seed_sale_refs().await;
        let product = test_utils::seed_product("Shadow of the Colossus", 24990.0).await;
        let shipped = test_utils::seed_sale_status("shipped").await;

        let sale = create(
            &auth,
            dto_with_lines(
                &refs,
                vec![SaleLineDto {
                    product_id: product.id.value().to_string(),
                    quantity: 1,
                    unit_price: 24990.0,
                }],
            ),
        )
        .await
        .unwrap();

        let patched = update(
            sale.id.value(),
            UpdateSaleDto {
                status_id: Some(shipped.id.value().to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert_eq!(patched.status_id, shipped.id.value().to_string());
        assert_eq!(patched.payment_method_id, refs.payment_method_id);
        assert_eq!(patched.lines.len(), 1);
        assert_eq!(patched.total(), 24990.0);
    }

    #[tokio::test]
    async fn deleting_a_sale_removes_its_lines() {
        test_utils::setup_test_db().await;
        let (user, _role) = test_utils::seed_user("sale-delete").await;
        let auth = test_utils::session_for(&user);
        let refs = test_utils::seed_sale_refs().await;
        let product = test_utils::seed_product("Gris", 8990.0).await;

        let sale = create(
            &auth,
            dto_with_lines(
                &refs,
                vec![SaleLineDto {
                    product_id: product.id.value().to_string(),
                    quantity: 3,
                    unit_price: 8990.0,
                }],
            ),
        )
        .await
        .unwrap();

        delete(sale.id.value()).await.unwrap();

        assert!(get_by_id(sale.id.value()).await.unwrap().is_none());
        let orphan_lines = guards::count_rows("a020_sale_line", "sale_id", sale.id.value())
            .await
            .unwrap();
        assert_eq!(orphan_lines, 0);
    }
}
