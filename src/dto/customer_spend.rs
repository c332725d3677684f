use crate::common::*;

#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct CustomerSpend {
    pub customer_id: i64,
    pub total_sale: f64,
}

impl CustomerSpend {
    pub fn label(&self) -> String {
        format!("Customer {}", self.customer_id)
    }
}
