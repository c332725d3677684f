use crate::common::*;

use crate::model::sales::sales_record::*;

#[async_trait]
pub trait QueryService {
    #[doc = r#"
        Loads every transaction of `table_name` and derives its analysis fields.
        Rows missing a required column are skipped.
    "#]
    async fn get_sales_records(&self, table_name: &str) -> anyhow::Result<Vec<SalesRecord>>;
    async fn close_connection(&self);
}
