use crate::dto::{
    category_profit::*, customer_spend::*, gender_breakdown::*, hourly_heatmap::*,
    labeled_value::*, monthly_sales::*, sales_summary::*,
};
use crate::model::sales::sales_record::*;

#[doc = r#"
    In-memory group-by aggregates over loaded sales records.

    Ties between equal group values keep ascending key order.
"#]
pub trait AnalyticsService: Send + Sync {
    /// Revenue per category, largest first
    fn category_revenue(&self, records: &[SalesRecord]) -> Vec<LabeledValue>;
    /// Revenue per month number, January first
    fn monthly_sales(&self, records: &[SalesRecord]) -> Vec<MonthlySales>;
    /// Revenue per weekday present in the data, Monday first
    fn day_of_week_sales(&self, records: &[SalesRecord]) -> Vec<LabeledValue>;
    fn hourly_heatmap(&self, records: &[SalesRecord]) -> HourlyHeatmap;
    /// Revenue per age group, largest first; rows without an age group are left out
    fn age_group_spending(&self, records: &[SalesRecord]) -> Vec<LabeledValue>;
    /// Revenue, profit and margin per category, category ascending
    fn category_profit_margin(&self, records: &[SalesRecord]) -> Vec<CategoryProfit>;
    fn gender_breakdown(&self, records: &[SalesRecord]) -> GenderBreakdown;
    /// The `limit` biggest spenders, smallest of them first
    fn top_customers(&self, records: &[SalesRecord], limit: usize) -> Vec<CustomerSpend>;
    fn summarize(&self, records: &[SalesRecord]) -> SalesSummary;
}
