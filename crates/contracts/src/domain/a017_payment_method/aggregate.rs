use crate::domain::common::{AggregateId, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymentMethodId(pub Uuid);

impl PaymentMethodId {
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

impl AggregateId for PaymentMethodId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PaymentMethodId::new)
            .map_err(|e| format!("invalid UUID: {e}"))
    }
}

/// Payment option referenced by sales.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: PaymentMethodId,
    pub name: String,
    pub metadata: EntityMetadata,
}

impl PaymentMethod {
    pub fn new_for_insert(name: String) -> Self {
        Self {
            id: PaymentMethodId::new_v4(),
            name,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn apply(&mut self, dto: &UpdatePaymentMethodDto) {
        if let Some(name) = &dto.name {
            self.name = name.clone();
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CreatePaymentMethodDto {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdatePaymentMethodDto {
    pub name: Option<String>,
}
