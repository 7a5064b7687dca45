use crate::domain::common::{AggregateId, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressId(pub Uuid);

impl AddressId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for AddressId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(AddressId::new)
            .map_err(|e| format!("invalid UUID: {e}"))
    }
}

/// Delivery address. A user owns at most one address; the uniqueness is
/// enforced both in the service layer and by an index on `user_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: AddressId,
    pub street: String,
    pub number: String,
    /// Apartment, floor, block, or similar.
    pub extra: Option<String>,
    pub commune_id: String,
    pub user_id: String,
    pub metadata: EntityMetadata,
}

impl Address {
    pub fn new_for_insert(
        street: String,
        number: String,
        extra: Option<String>,
        commune_id: String,
        user_id: String,
    ) -> Self {
        Self {
            id: AddressId::new_v4(),
            street,
            number,
            extra,
            commune_id,
            user_id,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn apply(&mut self, dto: &UpdateAddressDto) {
        if let Some(street) = &dto.street {
            self.street = street.clone();
        }
        if let Some(number) = &dto.number {
            self.number = number.clone();
        }
        if let Some(extra) = &dto.extra {
            self.extra = Some(extra.clone());
        }
        if let Some(commune_id) = &dto.commune_id {
            self.commune_id = commune_id.clone();
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.street.trim().is_empty() {
            return Err("street must not be empty".into());
        }
        if self.number.trim().is_empty() {
            return Err("number must not be empty".into());
        }
        if self.commune_id.trim().is_empty() {
            return Err("commune is required".into());
        }
        if self.user_id.trim().is_empty() {
            return Err("user is required".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateAddressDto {
    pub street: String,
    pub number: String,
    pub extra: Option<String>,
    pub commune_id: String,
    pub user_id: String,
}

/// The owning user is fixed for the lifetime of the address; only the
/// location fields can be patched.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAddressDto {
    pub street: Option<String>,
    pub number: Option<String>,
    pub extra: Option<String>,
    pub commune_id: Option<String>,
}
