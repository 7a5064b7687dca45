use contracts::domain::a017_payment_method::aggregate::{CreatePaymentMethodDto, UpdatePaymentMethodDto, PaymentMethod};
use uuid::Uuid;

use super::repository;
use crate::errors::{Error, Result};
use crate::shared::data::guards;

pub async fn create(dto: CreatePaymentMethodDto) -> Result<PaymentMethod> {
    let aggregate = PaymentMethod::new_for_insert(dto.name);
    aggregate.validate().map_err(Error::Validation)?;
    repository::insert(&aggregate).await?;
    Ok(aggregate)
}

pub async fn update(id: Uuid, dto: UpdatePaymentMethodDto) -> Result<PaymentMethod> {
    let mut aggregate = repository::get_by_id(id)
        .await?
        .ok_or_else(|| Error::not_found("payment method", id))?;

    aggregate.apply(&dto);
    aggregate.validate().map_err(Error::Validation)?;
    aggregate.before_write();
    repository::update(&aggregate).await?;
    Ok(aggregate)
}

/// Payment methods referenced by recorded sales cannot be removed.
pub async fn delete(id: Uuid) -> Result<()> {
    guards::ensure_no_dependents(id, &[("a020_sale", "payment_method_id", "sales")]).await?;
    if !repository::delete(id).await? {
        return Err(Error::not_found("payment method", id));
    }
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> Result<Option<PaymentMethod>> {
    repository::get_by_id(id).await
}

pub async fn list_all() -> Result<Vec<PaymentMethod>> {
    repository::list_all().await
}
