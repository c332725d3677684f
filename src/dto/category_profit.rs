use crate::common::*;

#[doc = r#"
    Revenue and profit of one category.

    # Fields
    * `category` - product category
    * `total_sale` - summed sale value
    * `profit` - summed profit
    * `profit_margin_pct` - profit / total_sale * 100, two decimals (0 when there is no revenue)
"#]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct CategoryProfit {
    pub category: String,
    pub total_sale: f64,
    pub profit: f64,
    pub profit_margin_pct: f64,
}
