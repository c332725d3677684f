use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct MysqlConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub database: String,
    pub table_name: String,
    pub connect_timeout_sec: u64,
}

impl Default for MysqlConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3306,
            user: "root".to_string(),
            database: "MINI_SALES_PROJECT".to_string(),
            table_name: "retail_sales".to_string(),
            connect_timeout_sec: 10,
        }
    }
}
