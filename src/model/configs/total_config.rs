use crate::common::*;

use crate::model::configs::{chart_config::*, mysql_config::*, system_config::*};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

static TOTAL_CONFIG: once_lazy<TotalConfig> = once_lazy::new(initialize_server_config);

#[doc = "Function to initialize Server configuration information instances"]
pub fn initialize_server_config() -> TotalConfig {
    info!("initialize_server_config() START!");
    TotalConfig::new()
}

#[derive(Debug, Default, Deserialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct TotalConfig {
    pub mysql: MysqlConfig,
    pub system: SystemConfig,
    pub chart: ChartConfig,
}

#[doc = "MySQL connection settings"]
pub fn get_mysql_config_info() -> &'static MysqlConfig {
    &TOTAL_CONFIG.mysql
}

#[doc = "system settings"]
pub fn get_system_config_info() -> &'static SystemConfig {
    &TOTAL_CONFIG.system
}

#[doc = "chart rendering settings"]
pub fn get_chart_config_info() -> &'static ChartConfig {
    &TOTAL_CONFIG.chart
}

impl TotalConfig {
    fn new() -> Self {
        let config_path: &str = match SERVER_CONFIG_PATH.as_deref() {
            Some(config_path) => config_path,
            None => {
                info!("SERVER_CONFIG_PATH is not set. Using built-in defaults.");
                return TotalConfig::default();
            }
        };

        match read_toml_from_file::<TotalConfig>(config_path) {
            Ok(config) => config,
            Err(e) => {
                let err_msg: &str =
                    "Failed to convert the data from SERVER_CONFIG_PATH into the TotalConfig structure.";
                error!("[TotalConfig->new] {} {:?}", err_msg, e);
                std::process::exit(1);
            }
        }
    }
}
