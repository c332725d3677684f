use crate::common::*;

use crate::dto::chart_image_info::*;
use crate::model::sales::sales_record::*;

#[async_trait]
pub trait VisualizationService {
    #[doc = "Renders the eight analysis charts into `output_dir`, creating it if needed"]
    async fn generate_all_charts(
        &self,
        records: &[SalesRecord],
        output_dir: &Path,
    ) -> anyhow::Result<Vec<ChartImageInfo>>;
}
