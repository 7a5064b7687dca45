use crate::domain::common::{AggregateId, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
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

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("invalid UUID: {e}"))
    }
}

/// Catalog item: a movie, a game, or an accessory.
///
/// Genres, platforms, developers, and companies are attached through
/// bridge tables; images and purchase links are owned child rows. The
/// aggregate itself only carries scalar fields and foreign keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    /// Current catalog price. Sales capture their own unit price and are
    /// not affected when this changes.
    pub price: f64,
    pub product_type_id: String,
    pub classification_id: String,
    pub status_id: String,
    pub saga_id: Option<String>,
    pub metadata: EntityMetadata,
}

impl Product {
    #[allow(clippy::too_many_arguments)]
    pub fn new_for_insert(
        name: String,
        description: Option<String>,
        price: f64,
        product_type_id: String,
        classification_id: String,
        status_id: String,
        saga_id: Option<String>,
    ) -> Self {
        Self {
            id: ProductId::new_v4(),
            name,
            description,
            price,
            product_type_id,
            classification_id,
            status_id,
            saga_id,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn apply(&mut self, dto: &UpdateProductDto) {
        if let Some(name) = &dto.name {
            self.name = name.clone();
        }
        if let Some(description) = &dto.description {
            self.description = Some(description.clone());
        }
        if let Some(price) = dto.price {
            self.price = price;
        }
        if let Some(product_type_id) = &dto.product_type_id {
            self.product_type_id = product_type_id.clone();
        }
        if let Some(classification_id) = &dto.classification_id {
            self.classification_id = classification_id.clone();
        }
        if let Some(status_id) = &dto.status_id {
            self.status_id = status_id.clone();
        }
        if let Some(saga_id) = &dto.saga_id {
            self.saga_id = Some(saga_id.clone());
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".into());
        }
        if self.price < 0.0 {
            return Err("price must not be negative".into());
        }
        if self.product_type_id.trim().is_empty() {
            return Err("product type is required".into());
        }
        if self.classification_id.trim().is_empty() {
            return Err("classification is required".into());
        }
        if self.status_id.trim().is_empty() {
            return Err("status is required".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductDto {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub product_type_id: String,
    pub classification_id: String,
    pub status_id: String,
    pub saga_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub product_type_id: Option<String>,
    pub classification_id: Option<String>,
    pub status_id: Option<String>,
    pub saga_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_merges_only_present_fields() {
        let mut product = Product::new_for_insert(
            "Outer Wilds".to_string(),
            Some("Space archaeology".to_string()),
            24990.0,
            "type-1".to_string(),
            "class-1".to_string(),
            "status-1".to_string(),
            None,
        );

        product.apply(&UpdateProductDto {
            price: Some(19990.0),
            ..Default::default()
        });

        assert_eq!(product.price, 19990.0);
        assert_eq!(product.name, "Outer Wilds");
        assert_eq!(product.description.as_deref(), Some("Space archaeology"));
        assert_eq!(product.status_id, "status-1");
    }

    #[test]
    fn validate_rejects_negative_price() {
        let mut product = Product::new_for_insert(
            "Broken".to_string(),
            None,
            10.0,
            "t".to_string(),
            "c".to_string(),
            "s".to_string(),
            None,
        );
        assert!(product.validate().is_ok());
        product.price = -1.0;
        assert!(product.validate().is_err());
    }
}
