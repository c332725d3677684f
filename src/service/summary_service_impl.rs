use crate::common::*;

use crate::dto::sales_summary::*;
use crate::model::sales::sales_record::*;
use crate::traits::service_traits::summary_service::*;
use crate::utils_modules::number_utils::*;

const RULE_WIDTH: usize = 60;

#[derive(Debug, Clone, Default, new)]
pub struct SummaryServiceImpl;

fn or_na<T: Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

impl SummaryService for SummaryServiceImpl {
    fn render_load_result(&self, records: &[SalesRecord]) -> String {
        let first_date: Option<NaiveDate> = records.iter().map(|r| *r.sale_date()).min();
        let last_date: Option<NaiveDate> = records.iter().map(|r| *r.sale_date()).max();
        let total_revenue: f64 = records.iter().map(|r| *r.total_sale()).sum();

        [
            format!(
                "✅ Loaded {} transactions",
                format_thousands(records.len() as f64, 0)
            ),
            format!(
                "✅ Date range: {} to {}",
                or_na(first_date),
                or_na(last_date)
            ),
            format!("✅ Total revenue: {}", format_currency(total_revenue, 2)),
        ]
        .join("\n")
    }

    fn render_summary(&self, summary: &SalesSummary) -> String {
        let rule: String = "=".repeat(RULE_WIDTH);

        let lines: Vec<String> = vec![
            String::new(),
            rule.clone(),
            "📊 SALES ANALYTICS SUMMARY".to_string(),
            rule.clone(),
            format!(
                "Total Transactions: {}",
                format_thousands(*summary.total_transactions() as f64, 0)
            ),
            format!(
                "Unique Customers: {}",
                format_thousands(*summary.unique_customers() as f64, 0)
            ),
            format!(
                "Total Revenue: {}",
                format_currency(*summary.total_revenue(), 2)
            ),
            format!(
                "Total Profit: {}",
                format_currency(*summary.total_profit(), 2)
            ),
            format!(
                "Average Transaction: {}",
                format_currency(*summary.average_transaction(), 2)
            ),
            format!(
                "Average Profit Margin: {:.2}%",
                summary.average_profit_margin()
            ),
            String::new(),
            format!("Top Category: {}", or_na(summary.top_category().as_deref())),
            format!("Best Day: {}", or_na(summary.best_day().as_deref())),
            format!("Peak Hour: {}", or_na(*summary.peak_hour())),
            rule,
        ];

        lines.join("\n")
    }
}
