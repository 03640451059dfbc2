use bigdecimal::{BigDecimal, Zero};
use serde::de::{self, Deserializer};
use serde::Deserialize;
use serde_json::value::RawValue;
use std::str::FromStr;

/// Fractional digits kept by `order_lines.quantity` (`DECIMAL(18, 4)`).
pub const QUANTITY_SCALE: i64 = 4;

/// Boundary checks run by `ValidatedJson` after deserializing.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Deserialize, Debug, Clone)]
pub struct AddLineToOrderRequest {
    pub order_id: i32,
    #[serde(alias = "nomenclature_id")]
    pub product_id: i32,
    /// Accepts a JSON number or a numeric string; parsed from the literal text.
    #[serde(deserialize_with = "decimal_from_literal")]
    pub quantity: BigDecimal,
}

impl Validate for AddLineToOrderRequest {
    fn validate(&self) -> Result<(), String> {
        if self.order_id <= 0 {
            return Err("order_id must be greater than 0".to_string());
        }
        if self.product_id <= 0 {
            return Err("product_id must be greater than 0".to_string());
        }
        if self.quantity <= BigDecimal::zero() {
            return Err("quantity must be greater than 0".to_string());
        }
        let (_, scale) = self.quantity.normalized().as_bigint_and_exponent();
        if scale > QUANTITY_SCALE {
            return Err(format!(
                "quantity must have at most {} decimal places",
                QUANTITY_SCALE
            ));
        }
        Ok(())
    }
}

/// Reads a decimal from its JSON text so numbers never pass through `f64`.
fn decimal_from_literal<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Box::<RawValue>::deserialize(deserializer)?;
    let text = raw.get();

    let literal = if text.starts_with('"') {
        serde_json::from_str::<String>(text).map_err(de::Error::custom)?
    } else {
        text.to_string()
    };

    BigDecimal::from_str(literal.trim())
        .map_err(|_| de::Error::custom(format!("invalid decimal: {}", text)))
}
