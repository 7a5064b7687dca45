use crate::domain::common::{AggregateId, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PurchaseLinkId(pub Uuid);

impl PurchaseLinkId {
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

impl AggregateId for PurchaseLinkId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PurchaseLinkId::new)
            .map_err(|e| format!("invalid UUID: {e}"))
    }
}

/// External storefront link owned by a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseLink {
    pub id: PurchaseLinkId,
    pub product_id: String,
    /// Name of the store the link points at.
    pub store: String,
    pub url: String,
    pub metadata: EntityMetadata,
}

impl PurchaseLink {
    pub fn new_for_insert(product_id: String, store: String, url: String) -> Self {
        Self {
            id: PurchaseLinkId::new_v4(),
            product_id,
            store,
            url,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn apply(&mut self, dto: &UpdatePurchaseLinkDto) {
        if let Some(store) = &dto.store {
            self.store = store.clone();
        }
        if let Some(url) = &dto.url {
            self.url = url.clone();
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.store.trim().is_empty() {
            return Err("store must not be empty".into());
        }
        if self.url.trim().is_empty() {
            return Err("url must not be empty".into());
        }
        if self.product_id.trim().is_empty() {
            return Err("product is required".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreatePurchaseLinkDto {
    pub store: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePurchaseLinkDto {
    pub store: Option<String>,
    pub url: Option<String>,
}
