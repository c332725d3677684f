use crate::common::*;

#[doc = r#"
    Scalar aggregates printed at the end of a run.

    The arg-max fields are `None` for an empty data set.
"#]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct SalesSummary {
    pub total_transactions: usize,
    pub unique_customers: usize,
    pub total_revenue: f64,
    pub total_profit: f64,
    pub average_transaction: f64,
    pub average_profit_margin: f64,
    pub top_category: Option<String>,
    pub best_day: Option<String>,
    pub peak_hour: Option<u32>,
}
