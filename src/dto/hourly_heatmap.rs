use crate::common::*;

#[doc = r#"
    Revenue per (weekday, hour) cell.

    `cells[d][h]` is the revenue of `days[d]` at `hours[h]`; cells without
    sales hold 0. `days` always lists Monday through Sunday, `hours` only
    the hours that occur in the data, ascending.
"#]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct HourlyHeatmap {
    pub days: Vec<String>,
    pub hours: Vec<u32>,
    pub cells: Vec<Vec<f64>>,
}

impl HourlyHeatmap {
    pub fn cell(&self, day: &str, hour: u32) -> Option<f64> {
        let day_idx: usize = self.days.iter().position(|d| d == day)?;
        let hour_idx: usize = self.hours.iter().position(|h| *h == hour)?;

        self.cells.get(day_idx)?.get(hour_idx).copied()
    }

    pub fn max_value(&self) -> f64 {
        self.cells
            .iter()
            .flatten()
            .copied()
            .fold(0.0, f64::max)
    }

    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }
}
