use crate::common::*;

use crate::model::{configs::mysql_config::*, sales::transaction_row::*};

use crate::traits::repository_traits::mysql_repository::*;

#[derive(Debug, Clone)]
pub struct MysqlRepositoryImpl {
    pool: MySqlPool,
}

impl MysqlRepositoryImpl {
    #[doc = r#"
        Opens the database session.

        The pool is capped at a single connection, so every query of the run
        goes through one session.

        # Arguments
        * `mysql_config` - host / port / user / database settings
        * `password` - MySQL password

        # Errors
        Authentication or connectivity failure
    "#]
    pub async fn new(mysql_config: &MysqlConfig, password: &str) -> Result<Self, anyhow::Error> {
        let connect_options: MySqlConnectOptions = MySqlConnectOptions::new()
            .host(mysql_config.host())
            .port(*mysql_config.port())
            .username(mysql_config.user())
            .password(password)
            .database(mysql_config.database());

        let pool: MySqlPool = MySqlPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(*mysql_config.connect_timeout_sec()))
            .connect_with(connect_options)
            .await
            .map_err(|e| anyhow!("{}", e))?;

        info!(
            "MySQL session opened: {}@{}:{}/{}",
            mysql_config.user(),
            mysql_config.host(),
            mysql_config.port(),
            mysql_config.database()
        );

        Ok(MysqlRepositoryImpl { pool })
    }
}

#[doc = "Table names are interpolated into SQL, so only `[A-Za-z0-9_]+` is accepted"]
fn validate_table_name(table_name: &str) -> anyhow::Result<()> {
    if table_name.is_empty()
        || !table_name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(anyhow!(
            "[MysqlRepositoryImpl->validate_table_name] Invalid table name: '{}'",
            table_name
        ));
    }

    Ok(())
}

#[doc = r#"
    The fixed twelve-column load query.

    Integer columns are cast to SIGNED (BIGINT) and decimal columns to DOUBLE
    so that they decode as `i64` / `f64`.
"#]
pub fn build_load_query(table_name: &str) -> anyhow::Result<String> {
    validate_table_name(table_name)?;

    Ok(format!(
        r#"
        SELECT
            CAST(transactions_id AS SIGNED) AS transactions_id,
            sale_date,
            sale_time,
            CAST(customer_id AS SIGNED) AS customer_id,
            gender,
            CAST(age AS SIGNED) AS age,
            category,
            CAST(quantity AS SIGNED) AS quantity,
            CAST(price_per_unit AS DOUBLE) AS price_per_unit,
            CAST(cogs AS DOUBLE) AS cogs,
            CAST(total_sale AS DOUBLE) AS total_sale,
            CAST(total_sale - cogs AS DOUBLE) AS profit
        FROM `{}`
        "#,
        table_name
    ))
}

#[async_trait]
impl MysqlRepository for MysqlRepositoryImpl {
    #[doc = "Function that EXECUTES the load query"]
    async fn fetch_transactions(&self, table_name: &str) -> anyhow::Result<Vec<TransactionRow>> {
        let query: String = build_load_query(table_name)?;

        let rows: Vec<TransactionRow> = sqlx::query_as::<_, TransactionRow>(&query)
            .fetch_all(&self.pool)
            .await
            .with_context(|| {
                format!(
                    "[MysqlRepositoryImpl->fetch_transactions] Query against '{}' failed",
                    table_name
                )
            })?;

        info!("Fetched {} rows from '{}'", rows.len(), table_name);

        Ok(rows)
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("MySQL session closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_query_selects_twelve_columns_from_table() {
        let query: String = build_load_query("retail_sales").unwrap();

        assert!(query.contains("FROM `retail_sales`"));
        assert_eq!(query.matches("CAST(").count(), 8);
        for column in [
            "transactions_id",
            "sale_date",
            "sale_time",
            "customer_id",
            "gender",
            "age",
            "category",
            "quantity",
            "price_per_unit",
            "cogs",
            "total_sale",
            "profit",
        ] {
            assert!(query.contains(column), "missing column {}", column);
        }
    }

    #[test]
    fn rejects_table_names_that_are_not_identifiers() {
        assert!(build_load_query("").is_err());
        assert!(build_load_query("retail_sales; DROP TABLE x").is_err());
        assert!(build_load_query("db.retail_sales").is_err());
        assert!(build_load_query("`retail`").is_err());
        assert!(build_load_query("Retail_Sales_2024").is_ok());
    }
}
