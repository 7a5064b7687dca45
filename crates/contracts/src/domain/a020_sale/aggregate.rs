use crate::domain::common::{AggregateId, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SaleId(pub Uuid);

impl SaleId {
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

impl AggregateId for SaleId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SaleId::new)
            .map_err(|e| format!("invalid UUID: {e}"))
    }
}

/// One line of a sale.
///
/// The unit price is captured at sale time and never re-read from the
/// catalog afterwards; the line is immutable once the sale is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleLine {
    pub id: String,
    pub product_id: String,
    pub quantity: i32,
    pub unit_price: f64,
}

impl SaleLine {
    pub fn subtotal(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

/// A purchase event together with its owned line items, persisted as one
/// unit. The total is always derived from the lines, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: SaleId,
    pub user_id: String,
    pub payment_method_id: String,
    pub shipping_method_id: String,
    pub status_id: String,
    pub purchase_date: chrono::NaiveDate,
    pub purchase_time: chrono::NaiveTime,
    pub lines: Vec<SaleLine>,
    pub metadata: EntityMetadata,
}

impl Sale {
    pub fn new_for_insert(
        user_id: String,
        payment_method_id: String,
        shipping_method_id: String,
        status_id: String,
        lines: Vec<SaleLine>,
    ) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: SaleId::new_v4(),
            user_id,
            payment_method_id,
            shipping_method_id,
            status_id,
            purchase_date: now.date_naive(),
            purchase_time: now.time(),
            lines,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn total(&self) -> f64 {
        self.lines.iter().map(SaleLine::subtotal).sum()
    }

    /// Header-only merge; lines are immutable after creation.
    pub fn apply(&mut self, dto: &UpdateSaleDto) {
        if let Some(payment_method_id) = &dto.payment_method_id {
            self.payment_method_id = payment_method_id.clone();
        }
        if let Some(shipping_method_id) = &dto.shipping_method_id {
            self.shipping_method_id = shipping_method_id.clone();
        }
        if let Some(status_id) = &dto.status_id {
            self.status_id = status_id.clone();
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.user_id.trim().is_empty() {
            return Err("user is required".into());
        }
        if self.payment_method_id.trim().is_empty() {
            return Err("payment method is required".into());
        }
        if self.shipping_method_id.trim().is_empty() {
            return Err("shipping method is required".into());
        }
        if self.status_id.trim().is_empty() {
            return Err("status is required".into());
        }
        if self.lines.is_empty() {
            return Err("a sale requires at least one line".into());
        }
        for line in &self.lines {
            if line.product_id.trim().is_empty() {
                return Err("every line requires a product".into());
            }
            if line.quantity <= 0 {
                return Err("line quantity must be positive".into());
            }
            if line.unit_price < 0.0 {
                return Err("line unit price must not be negative".into());
            }
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
    }
}

/// Checkout request. The purchaser comes from the session, not the body.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateSaleDto {
    pub payment_method_id: String,
    pub shipping_method_id: String,
    pub status_id: String,
    pub lines: Vec<SaleLineDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SaleLineDto {
    pub product_id: String,
    pub quantity: i32,
    pub unit_price: f64,
}

/// Header-only patch; payment, shipping, and status references can move,
/// the line items cannot.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSaleDto {
    pub payment_method_id: Option<String>,
    pub shipping_method_id: Option<String>,
    pub status_id: Option<String>,
}

/// Response shape for sale endpoints: the aggregate plus the derived
/// subtotal per line and the order total.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleView {
    pub id: String,
    pub user_id: String,
    pub payment_method_id: String,
    pub shipping_method_id: String,
    pub status_id: String,
    pub purchase_date: chrono::NaiveDate,
    pub purchase_time: chrono::NaiveTime,
    pub lines: Vec<SaleLineView>,
    pub total: f64,
    pub metadata: EntityMetadata,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleLineView {
    pub id: String,
    pub product_id: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub subtotal: f64,
}

impl From<&Sale> for SaleView {
    fn from(sale: &Sale) -> Self {
        Self {
            id: sale.id.as_string(),
            user_id: sale.user_id.clone(),
            payment_method_id: sale.payment_method_id.clone(),
            shipping_method_id: sale.shipping_method_id.clone(),
            status_id: sale.status_id.clone(),
            purchase_date: sale.purchase_date,
            purchase_time: sale.purchase_time,
            lines: sale
                .lines
                .iter()
                .map(|line| SaleLineView {
                    id: line.id.clone(),
                    product_id: line.product_id.clone(),
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                    subtotal: line.subtotal(),
                })
                .collect(),
            total: sale.total(),
            metadata: sale.metadata.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product_id: &str, quantity: i32, unit_price: f64) -> SaleLine {
        SaleLine {
            id: Uuid::new_v4().to_string(),
            product_id: product_id.to_string(),
            quantity,
            unit_price,
        }
    }

    fn sale_with(lines: Vec<SaleLine>) -> Sale {
        Sale::new_for_insert(
            "user-1".to_string(),
            "pay-1".to_string(),
            "ship-1".to_string(),
            "status-1".to_string(),
            lines,
        )
    }

    #[test]
    fn total_is_sum_of_line_subtotals() {
        let sale = sale_with(vec![line("p-10", 2, 12990.0), line("p-11", 1, 5000.0)]);
        assert_eq!(sale.lines[0].subtotal(), 25980.0);
        assert_eq!(sale.lines[1].subtotal(), 5000.0);
        assert_eq!(sale.total(), 30980.0);
    }

    #[test]
    fn validate_rejects_empty_line_list() {
        let sale = sale_with(Vec::new());
        assert!(sale.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_positive_quantity() {
        let sale = sale_with(vec![line("p-1", 0, 100.0)]);
        assert!(sale.validate().is_err());
        let sale = sale_with(vec![line("p-1", -3, 100.0)]);
        assert!(sale.validate().is_err());
    }

    #[test]
    fn apply_patches_header_without_touching_lines() {
        let mut sale = sale_with(vec![line("p-1", 1, 100.0)]);
        sale.apply(&UpdateSaleDto {
            status_id: Some("status-2".to_string()),
            ..Default::default()
        });
        assert_eq!(sale.status_id, "status-2");
        assert_eq!(sale.payment_method_id, "pay-1");
        assert_eq!(sale.lines.len(), 1);
    }

    #[test]
    fn view_carries_subtotals_and_total() {
        let sale = sale_with(vec![line("p-10", 2, 12990.0), line("p-11", 1, 5000.0)]);
        let view = SaleView::from(&sale);
        assert_eq!(view.lines.len(), 2);
        assert_eq!(view.lines[0].subtotal, 25980.0);
        assert_eq!(view.total, 30980.0);
    }
}
