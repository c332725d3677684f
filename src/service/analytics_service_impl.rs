use crate::common::*;

use crate::dto::{
    category_profit::*, customer_spend::*, gender_breakdown::*, hourly_heatmap::*,
    labeled_value::*, monthly_sales::*, sales_summary::*,
};
use crate::enums::{age_group::*, sort_order::*};
use crate::model::sales::sales_record::*;
use crate::traits::service_traits::analytics_service::*;
use crate::utils_modules::{number_utils::*, time_utils::*};

#[derive(Debug, Clone, Default, new)]
pub struct AnalyticsServiceImpl;

impl AnalyticsServiceImpl {
    #[doc = "Σ total_sale per key; records for which `key` returns None are left out"]
    fn sum_sales_by<K, F>(&self, records: &[SalesRecord], key: F) -> BTreeMap<K, f64>
    where
        K: Ord,
        F: Fn(&SalesRecord) -> Option<K>,
    {
        let mut groups: BTreeMap<K, f64> = BTreeMap::new();

        for record in records {
            if let Some(group_key) = key(record) {
                *groups.entry(group_key).or_insert(0.0) += *record.total_sale();
            }
        }

        groups
    }

    #[doc = "Key of the largest value; the first key in ascending order wins a tie"]
    fn arg_max<K: Clone>(&self, groups: &BTreeMap<K, f64>) -> Option<K> {
        let mut best: Option<(&K, f64)> = None;

        for (key, value) in groups {
            match best {
                Some((_, best_value)) if *value <= best_value => {}
                _ => best = Some((key, *value)),
            }
        }

        best.map(|(key, _)| key.clone())
    }
}

impl AnalyticsService for AnalyticsServiceImpl {
    fn category_revenue(&self, records: &[SalesRecord]) -> Vec<LabeledValue> {
        let mut category_revenue: Vec<LabeledValue> = self
            .sum_sales_by(records, |r| Some(r.category().clone()))
            .into_iter()
            .map(|(category, total)| LabeledValue::new(category, total))
            .collect();

        SortOrder::Desc.sort_by_value(&mut category_revenue, |lv| lv.value);
        category_revenue
    }

    fn monthly_sales(&self, records: &[SalesRecord]) -> Vec<MonthlySales> {
        self.sum_sales_by(records, |r| Some(*r.month_num()))
            .into_iter()
            .map(|(month_num, total)| MonthlySales::new(month_num, total))
            .collect()
    }

    fn day_of_week_sales(&self, records: &[SalesRecord]) -> Vec<LabeledValue> {
        self.sum_sales_by(records, |r| Some(*r.day_num()))
            .into_iter()
            .map(|(day_num, total)| LabeledValue::new(weekday_name(day_num).to_string(), total))
            .collect()
    }

    fn hourly_heatmap(&self, records: &[SalesRecord]) -> HourlyHeatmap {
        let day_hour_sales: BTreeMap<(u32, u32), f64> =
            self.sum_sales_by(records, |r| Some((*r.day_num(), *r.hour())));

        let hours: Vec<u32> = records
            .iter()
            .map(|r| *r.hour())
            .collect::<std::collections::BTreeSet<u32>>()
            .into_iter()
            .collect();

        let cells: Vec<Vec<f64>> = (0..WEEKDAY_NAMES.len() as u32)
            .map(|day_num| {
                hours
                    .iter()
                    .map(|hour| *day_hour_sales.get(&(day_num, *hour)).unwrap_or(&0.0))
                    .collect()
            })
            .collect();

        let days: Vec<String> = WEEKDAY_NAMES.iter().map(|d| d.to_string()).collect();

        HourlyHeatmap::new(days, hours, cells)
    }

    fn age_group_spending(&self, records: &[SalesRecord]) -> Vec<LabeledValue> {
        let age_sales: BTreeMap<AgeGroup, f64> = self.sum_sales_by(records, |r| *r.age_group());

        /* every bin is listed, empty ones with 0 */
        let mut age_spending: Vec<LabeledValue> = AgeGroup::ALL
            .iter()
            .map(|group| {
                LabeledValue::new(
                    group.label().to_string(),
                    *age_sales.get(group).unwrap_or(&0.0),
                )
            })
            .collect();

        SortOrder::Desc.sort_by_value(&mut age_spending, |lv| lv.value);
        age_spending
    }

    fn category_profit_margin(&self, records: &[SalesRecord]) -> Vec<CategoryProfit> {
        let mut category_totals: BTreeMap<String, (f64, f64)> = BTreeMap::new();

        for record in records {
            let totals: &mut (f64, f64) = category_totals
                .entry(record.category().clone())
                .or_insert((0.0, 0.0));
            totals.0 += *record.total_sale();
            totals.1 += *record.profit();
        }

        category_totals
            .into_iter()
            .map(|(category, (total_sale, profit))| {
                let profit_margin_pct: f64 =
                    calc_profit_margin(profit, total_sale).unwrap_or(0.0);
                CategoryProfit::new(category, total_sale, profit, profit_margin_pct)
            })
            .collect()
    }

    fn gender_breakdown(&self, records: &[SalesRecord]) -> GenderBreakdown {
        let mut gender_counts: BTreeMap<String, usize> = BTreeMap::new();
        for record in records {
            *gender_counts.entry(record.gender().clone()).or_insert(0) += 1;
        }

        let mut counts: Vec<LabeledCount> = gender_counts
            .into_iter()
            .map(|(gender, count)| LabeledCount::new(gender, count))
            .collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count));

        let revenue: Vec<LabeledValue> = self
            .sum_sales_by(records, |r| Some(r.gender().clone()))
            .into_iter()
            .map(|(gender, total)| LabeledValue::new(gender, total))
            .collect();

        GenderBreakdown::new(counts, revenue)
    }

    fn top_customers(&self, records: &[SalesRecord], limit: usize) -> Vec<CustomerSpend> {
        let mut customer_spend: Vec<CustomerSpend> = self
            .sum_sales_by(records, |r| Some(*r.customer_id()))
            .into_iter()
            .map(|(customer_id, total)| CustomerSpend::new(customer_id, total))
            .collect();

        SortOrder::Desc.sort_by_value(&mut customer_spend, |c| c.total_sale);
        customer_spend.truncate(limit);
        SortOrder::Asc.sort_by_value(&mut customer_spend, |c| c.total_sale);

        customer_spend
    }

    fn summarize(&self, records: &[SalesRecord]) -> SalesSummary {
        let total_transactions: usize = records.len();

        let unique_customers: usize = records
            .iter()
            .map(|r| *r.customer_id())
            .collect::<HashSet<i64>>()
            .len();

        let total_revenue: f64 = records.iter().map(|r| *r.total_sale()).sum();
        let total_profit: f64 = records.iter().map(|r| *r.profit()).sum();

        let average_transaction: f64 = if total_transactions > 0 {
            total_revenue / total_transactions as f64
        } else {
            0.0
        };

        let margins: Vec<f64> = records.iter().filter_map(|r| *r.profit_margin()).collect();
        let average_profit_margin: f64 = if margins.is_empty() {
            0.0
        } else {
            margins.iter().sum::<f64>() / margins.len() as f64
        };

        let top_category: Option<String> =
            self.arg_max(&self.sum_sales_by(records, |r| Some(r.category().clone())));
        let best_day: Option<String> =
            self.arg_max(&self.sum_sales_by(records, |r| Some(r.day_of_week().clone())));
        let peak_hour: Option<u32> = self.arg_max(&self.sum_sales_by(records, |r| Some(*r.hour())));

        SalesSummary::new(
            total_transactions,
            unique_customers,
            total_revenue,
            total_profit,
            average_transaction,
            average_profit_margin,
            top_category,
            best_day,
            peak_hour,
        )
    }
}
