use crate::common::*;

use crate::model::{configs::total_config::*, sales::sales_record::*};

use crate::dto::{chart_image_info::*, sales_summary::*};

use crate::traits::service_traits::{
    analytics_service::*, query_service::*, summary_service::*, visualization_service::*,
};

#[derive(Debug, new)]
pub struct MainController<
    Q: QueryService,
    V: VisualizationService,
    S: SummaryService,
    A: AnalyticsService,
> {
    query_service: Q,
    visualization_service: V,
    summary_service: S,
    analytics_service: A,
}

impl<Q, V, S, A> MainController<Q, V, S, A>
where
    Q: QueryService,
    V: VisualizationService,
    S: SummaryService,
    A: AnalyticsService,
{
    #[doc = r#"
        Runs the whole analysis once.

        1. Loads the sales table and derives the analysis fields
        2. Renders the eight charts into the configured output directory
        3. Prints the summary block
        4. Closes the database session

        # Returns
        * `anyhow::Result<()>` - Err on the first failing step; the session is closed either way
    "#]
    pub async fn main_task(&self) -> anyhow::Result<()> {
        let result: anyhow::Result<()> = self.run_analysis().await;

        self.query_service.close_connection().await;
        println!("✅ Database connection closed.");
        info!("Database connection closed.");

        result
    }

    async fn run_analysis(&self) -> anyhow::Result<()> {
        let table_name: &str = get_mysql_config_info().table_name();
        let output_dir: &str = get_system_config_info().output_dir();

        /* 1. Load */
        let records: Vec<SalesRecord> = self.query_service.get_sales_records(table_name).await?;
        info!("Loaded {} sales records from '{}'", records.len(), table_name);
        self.summary_service.print_load_result(&records);

        /* 2. Charts */
        let images: Vec<ChartImageInfo> = self
            .visualization_service
            .generate_all_charts(&records, Path::new(output_dir))
            .await?;

        /* 3. Summary */
        let summary: SalesSummary = self.analytics_service.summarize(&records);
        self.summary_service.print_summary(&summary);

        println!(
            "\n✅ All {} charts saved to '{}/' folder!",
            images.len(),
            output_dir
        );

        Ok(())
    }
}
