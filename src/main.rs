/*
Author      : Seunghwan Shin
Create date : 2025-10-00
Description : Loads the retail sales table from MySQL, renders eight analysis charts
              and prints a sales summary.

History     : 2025-10-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod repository;
use repository::mysql_repository_impl::*;

mod env_configuration;
use env_configuration::env_config::*;

mod traits;

mod model;
use model::configs::total_config::*;

mod dto;

mod enums;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{
    analytics_service_impl::*, chart_service_impl::*, query_service_impl::*,
    summary_service_impl::*, visualization_service_impl::*,
};

mod controller;
use controller::main_controller::*;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    /* Global logger and environment */
    dotenv().ok();
    let _logger: LoggerHandle = set_global_logger();

    info!("Retail sales analytics start!");

    /* MySQL connection */
    let mysql_conn: MysqlRepositoryImpl =
        match MysqlRepositoryImpl::new(get_mysql_config_info(), &MYSQL_PASSWORD).await {
            Ok(mysql_conn) => {
                println!("✅ Database connected successfully!");
                mysql_conn
            }
            Err(e) => {
                println!("❌ Connection failed: {}", e);
                error!("[main] An issue occurred while initializing mysql_conn. {:?}", e);
                std::process::exit(1);
            }
        };

    /* Dependency injection */
    let chart_config = get_chart_config_info();

    let query_service: QueryServiceImpl<MysqlRepositoryImpl> = QueryServiceImpl::new(mysql_conn);
    let analytics_service: AnalyticsServiceImpl = AnalyticsServiceImpl::new();
    let chart_service: ChartServiceImpl = ChartServiceImpl::new(chart_config.font_family().clone());
    let visualization_service: VisualizationServiceImpl<AnalyticsServiceImpl, ChartServiceImpl> =
        VisualizationServiceImpl::new(
            analytics_service.clone(),
            chart_service,
            chart_config.clone(),
            *get_system_config_info().top_customer_count(),
        );
    let summary_service: SummaryServiceImpl = SummaryServiceImpl::new();

    let main_controller: MainController<
        QueryServiceImpl<MysqlRepositoryImpl>,
        VisualizationServiceImpl<AnalyticsServiceImpl, ChartServiceImpl>,
        SummaryServiceImpl,
        AnalyticsServiceImpl,
    > = MainController::new(
        query_service,
        visualization_service,
        summary_service,
        analytics_service,
    );

    main_controller.main_task().await.unwrap_or_else(|e| {
        error!("{:?}", e);
        panic!("{:?}", e)
    });

    info!("Retail sales analytics finished.");
}
