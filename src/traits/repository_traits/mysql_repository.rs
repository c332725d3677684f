use crate::common::*;

use crate::model::sales::transaction_row::*;

#[async_trait]
pub trait MysqlRepository: Send + Sync {
    async fn fetch_transactions(&self, table_name: &str) -> anyhow::Result<Vec<TransactionRow>>;
    async fn close(&self);
}
