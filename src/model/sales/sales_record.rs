use crate::common::*;

use crate::enums::age_group::*;
use crate::model::sales::transaction_row::*;
use crate::utils_modules::{number_utils::*, time_utils::*};

#[doc = r#"
    A transaction with its derived analysis fields.

    Built once from a `TransactionRow` and never mutated afterwards.
"#]
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct SalesRecord {
    transaction_id: i64,
    sale_date: NaiveDate,
    sale_time: NaiveTime,
    customer_id: i64,
    gender: String,
    age: Option<i64>,
    category: String,
    quantity: Option<i64>,
    price_per_unit: Option<f64>,
    cogs: f64,
    total_sale: f64,
    profit: f64,
    /* None when total_sale is zero */
    profit_margin: Option<f64>,
    month_name: String,
    month_num: u32,
    day_of_week: String,
    day_num: u32,
    hour: u32,
    age_group: Option<AgeGroup>,
}

#[doc = "profit / total_sale * 100, rounded to two decimals"]
pub fn calc_profit_margin(profit: f64, total_sale: f64) -> Option<f64> {
    if total_sale == 0.0 {
        return None;
    }

    Some(round_to(profit / total_sale * 100.0, 2))
}

fn required<T>(value: Option<T>, transaction_id: i64, field: &str) -> anyhow::Result<T> {
    value.ok_or_else(|| {
        anyhow!(
            "[SalesRecord->try_from] transaction {} has no '{}'",
            transaction_id,
            field
        )
    })
}

impl TryFrom<TransactionRow> for SalesRecord {
    type Error = anyhow::Error;

    fn try_from(row: TransactionRow) -> Result<Self, Self::Error> {
        let transaction_id: i64 = row.transactions_id;

        let sale_date: NaiveDate = required(row.sale_date, transaction_id, "sale_date")?;
        let sale_time: NaiveTime = required(row.sale_time, transaction_id, "sale_time")?;
        let customer_id: i64 = required(row.customer_id, transaction_id, "customer_id")?;
        let gender: String = required(row.gender, transaction_id, "gender")?;
        let category: String = required(row.category, transaction_id, "category")?;
        let cogs: f64 = required(row.cogs, transaction_id, "cogs")?;
        let total_sale: f64 = required(row.total_sale, transaction_id, "total_sale")?;

        let profit: f64 = row.profit.unwrap_or(total_sale - cogs);
        let month_num: u32 = sale_date.month();
        let day_num: u32 = day_num_of(sale_date);

        Ok(SalesRecord {
            transaction_id,
            sale_date,
            sale_time,
            customer_id,
            gender,
            age: row.age,
            category,
            quantity: row.quantity,
            price_per_unit: row.price_per_unit,
            cogs,
            total_sale,
            profit,
            profit_margin: calc_profit_margin(profit, total_sale),
            month_name: month_name(month_num).to_string(),
            month_num,
            day_of_week: weekday_name(day_num).to_string(),
            day_num,
            hour: sale_time.hour(),
            age_group: row.age.and_then(AgeGroup::from_age),
        })
    }
}
