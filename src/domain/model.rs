use serde::{Deserialize, Serialize};

/// Header line of the backing file.
pub const INVENTORY_HEADER: [&str; 5] = ["Country", "Code", "Product", "Cost", "Quantity"];

/// One inventory line. Field order matches the file's column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shoe {
    pub country: String,
    pub code: String,
    pub product: String,
    pub cost: u64,
    pub quantity: u64,
}

impl Shoe {
    pub fn new(
        country: impl Into<String>,
        code: impl Into<String>,
        product: impl Into<String>,
        cost: u64,
        quantity: u64,
    ) -> Self {
        Self {
            country: country.into(),
            code: code.into(),
            product: product.into(),
            cost,
            quantity,
        }
    }

    /// cost × quantity
    pub fn total_value(&self) -> u64 {
        self.cost.saturating_mul(self.quantity)
    }
}
