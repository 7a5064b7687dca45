use crate::domain::common::{AggregateId, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductImageId(pub Uuid);

impl ProductImageId {
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

impl AggregateId for ProductImageId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductImageId::new)
            .map_err(|e| format!("invalid UUID: {e}"))
    }
}

/// Image owned by a product; removed together with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    pub id: ProductImageId,
    pub product_id: String,
    pub url: String,
    pub alt_text: Option<String>,
    pub metadata: EntityMetadata,
}

impl ProductImage {
    pub fn new_for_insert(product_id: String, url: String, alt_text: Option<String>) -> Self {
        Self {
            id: ProductImageId::new_v4(),
            product_id,
            url,
            alt_text,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn apply(&mut self, dto: &UpdateProductImageDto) {
        if let Some(url) = &dto.url {
            self.url = url.clone();
        }
        if let Some(alt_text) = &dto.alt_text {
            self.alt_text = Some(alt_text.clone());
        }
    }

    pub fn validate(&self) -> Result<(), String> {
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
pub struct CreateProductImageDto {
    pub url: String,
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductImageDto {
    pub url: Option<String>,
    pub alt_text: Option<String>,
}
