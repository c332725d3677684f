use crate::common::*;

#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct MonthlySales {
    pub month_num: u32,
    pub total_sale: f64,
}
