use crate::common::*;

use crate::model::sales::{sales_record::*, transaction_row::*};

use crate::traits::repository_traits::mysql_repository::*;
use crate::traits::service_traits::query_service::*;

#[derive(Debug, new)]
pub struct QueryServiceImpl<R: MysqlRepository> {
    mysql_conn: R,
}

#[async_trait]
impl<R: MysqlRepository> QueryService for QueryServiceImpl<R> {
    async fn get_sales_records(&self, table_name: &str) -> anyhow::Result<Vec<SalesRecord>> {
        let rows: Vec<TransactionRow> = self
            .mysql_conn
            .fetch_transactions(table_name)
            .await
            .context("[QueryServiceImpl->get_sales_records] Failed to load transactions")?;

        let total_rows: usize = rows.len();
        let mut sales_records: Vec<SalesRecord> = Vec::with_capacity(total_rows);

        for row in rows {
            match SalesRecord::try_from(row) {
                Ok(record) => sales_records.push(record),
                Err(e) => {
                    warn!("{}", e);
                }
            }
        }

        let skipped: usize = total_rows - sales_records.len();
        if skipped > 0 {
            warn!(
                "[QueryServiceImpl->get_sales_records] Skipped {} of {} rows with missing required columns",
                skipped, total_rows
            );
        }

        Ok(sales_records)
    }

    async fn close_connection(&self) {
        self.mysql_conn.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sales::sales_record::test_fixtures::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct FakeRepository {
        rows: Vec<TransactionRow>,
        closed: AtomicBool,
    }

    #[async_trait]
    impl MysqlRepository for FakeRepository {
        async fn fetch_transactions(
            &self,
            table_name: &str,
        ) -> anyhow::Result<Vec<TransactionRow>> {
            if table_name != "retail_sales" {
                return Err(anyhow!("Table '{}' doesn't exist", table_name));
            }
            Ok(self.rows.clone())
        }

        async fn close(&self) {
            self.closed.store(true, Ordering::SeqCst);
        }
    }

    fn fake_repository() -> FakeRepository {
        let mut no_cogs = row(3, "2022-02-01", "11:00:00", 9, "Male", Some(30), "Beauty", 80.0, 0.0);
        no_cogs.cogs = None;

        FakeRepository {
            rows: vec![
                row(1, "2022-01-05", "09:15:00", 7, "Female", Some(25), "Clothing", 100.0, 40.0),
                row(2, "2022-01-06", "18:30:00", 8, "Male", None, "Electronics", 500.0, 450.0),
                no_cogs,
            ],
            closed: AtomicBool::new(false),
        }
    }

    #[tokio::test]
    async fn derives_records_and_skips_incomplete_rows() {
        let service = QueryServiceImpl::new(fake_repository());

        let records: Vec<SalesRecord> = service.get_sales_records("retail_sales").await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(*records[0].transaction_id(), 1);
        assert_eq!(*records[0].profit(), 60.0);
        assert_eq!(*records[1].profit_margin(), Some(10.0));
    }

    #[tokio::test]
    async fn query_failure_propagates() {
        let service = QueryServiceImpl::new(fake_repository());

        let err = service.get_sales_records("missing_table").await.unwrap_err();

        assert!(format!("{:?}", err).contains("doesn't exist"));
    }

    #[tokio::test]
    async fn close_connection_closes_repository() {
        let service = QueryServiceImpl::new(fake_repository());

        service.close_connection().await;

        assert!(service.mysql_conn.closed.load(Ordering::SeqCst));
    }
}
