use crate::common::*;

#[doc = r#"
    One row of the retail sales table, as returned by the load query.

    Integer columns are cast to BIGINT and decimal columns to DOUBLE in SQL,
    so every numeric field decodes to `i64` / `f64` whatever the column's
    declared width. Everything except the identifier may be NULL.
"#]
#[derive(Debug, Clone, PartialEq, FromRow, new)]
pub struct TransactionRow {
    pub transactions_id: i64,
    pub sale_date: Option<NaiveDate>,
    pub sale_time: Option<NaiveTime>,
    pub customer_id: Option<i64>,
    pub gender: Option<String>,
    pub age: Option<i64>,
    pub category: Option<String>,
    pub quantity: Option<i64>,
    pub price_per_unit: Option<f64>,
    pub cogs: Option<f64>,
    pub total_sale: Option<f64>,
    pub profit: Option<f64>,
}
