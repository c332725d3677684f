use crate::utils_modules::number_utils::*;

#[doc = "How a bar's value label is printed"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// `$12,345`
    Currency,
    /// `12.3%`
    Percent,
}

impl ValueFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            ValueFormat::Currency => format_currency(value, 0),
            ValueFormat::Percent => format!("{:.1}%", value),
        }
    }
}
