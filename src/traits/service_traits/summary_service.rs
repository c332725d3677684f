use crate::dto::sales_summary::*;
use crate::model::sales::sales_record::*;

pub trait SummaryService {
    fn render_load_result(&self, records: &[SalesRecord]) -> String;
    fn render_summary(&self, summary: &SalesSummary) -> String;
    fn print_load_result(&self, records: &[SalesRecord]) {
        println!("{}", self.render_load_result(records));
    }
    fn print_summary(&self, summary: &SalesSummary) {
        println!("{}", self.render_summary(summary));
    }
}
