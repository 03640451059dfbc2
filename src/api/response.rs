use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
    pub parent_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CategoryTreeResponse {
    pub id: i32,
    pub name: String,
    pub parent_id: Option<i32>,
    pub children: Vec<CategoryTreeResponse>,
    /// Products filed directly in this category.
    pub item_count: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub quantity: BigDecimal,
    pub price: BigDecimal,
    pub category_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrderLineResponse {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: BigDecimal,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorDetail {
    pub detail: String,
    pub code: Option<String>,
    pub available: Option<BigDecimal>,
    pub requested: Option<BigDecimal>,
}

impl ErrorDetail {
    pub fn new(detail: String, code: &str) -> Self {
        ErrorDetail {
            detail,
            code: Some(code.to_string()),
            available: None,
            requested: None,
        }
    }
}
