use crate::common::*;

use crate::dto::{
    category_profit::*, chart_frame::*, chart_image_info::*, customer_spend::*,
    gender_breakdown::*, hourly_heatmap::*, labeled_value::*, monthly_sales::*,
};
use crate::enums::{palette::*, value_format::*};
use crate::model::{configs::chart_config::*, sales::sales_record::*};
use crate::traits::service_traits::{
    analytics_service::*, chart_service::*, visualization_service::*,
};
use crate::utils_modules::{color_utils::*, io_utils::*, time_utils::*};

const PROFIT_MARGIN_COLORS: [Rgb; 3] = [(0x27, 0xAE, 0x60), (0xE6, 0x7E, 0x22), (0x34, 0x98, 0xDB)];
const GENDER_COLORS: [Rgb; 2] = [(0xFF, 0x6B, 0x9D), (0x4E, 0xCD, 0xC4)];

#[derive(Debug, new)]
pub struct VisualizationServiceImpl<A: AnalyticsService, C: ChartService> {
    analytics_service: A,
    chart_service: C,
    chart_config: ChartConfig,
    top_customer_count: usize,
}

impl<A: AnalyticsService, C: ChartService> VisualizationServiceImpl<A, C> {
    fn frame(&self, title: &str, x_desc: &str, y_desc: &str, inches: (u32, u32)) -> ChartFrame {
        ChartFrame::new(
            title.to_string(),
            x_desc.to_string(),
            y_desc.to_string(),
            self.chart_config.figure_size(inches.0, inches.1),
        )
    }

    #[doc = "Chart 1: revenue per category, largest first"]
    async fn revenue_by_category(
        &self,
        records: &[SalesRecord],
        output_path: &Path,
    ) -> anyhow::Result<()> {
        let bars: Vec<LabeledValue> = self.analytics_service.category_revenue(records);
        let colors: Vec<Rgb> = sample_palette(Palette::Viridis, bars.len());

        self.chart_service
            .generate_bar_chart(
                &self.frame("Total Revenue by Category", "Category", "Revenue ($)", (10, 6)),
                bars,
                colors,
                ValueFormat::Currency,
                None,
                output_path,
            )
            .await
    }

    #[doc = "Chart 2: monthly trend with the best and worst month marked"]
    async fn monthly_sales_trend(
        &self,
        records: &[SalesRecord],
        output_path: &Path,
    ) -> anyhow::Result<()> {
        let monthly: Vec<MonthlySales> = self.analytics_service.monthly_sales(records);

        let x_labels: Vec<String> = monthly
            .iter()
            .map(|month| month_abbr(*month.month_num()).to_string())
            .collect();
        let y_data: Vec<f64> = monthly.iter().map(|month| *month.total_sale()).collect();

        self.chart_service
            .generate_line_chart(
                &self.frame("Monthly Sales Trend", "Month", "Total Sales ($)", (12, 6)),
                x_labels,
                y_data,
                true,
                output_path,
            )
            .await
    }

    async fn sales_by_day(&self, records: &[SalesRecord], output_path: &Path) -> anyhow::Result<()> {
        let bars: Vec<LabeledValue> = self.analytics_service.day_of_week_sales(records);
        /* colours are fixed per position over a full week */
        let colors: Vec<Rgb> = sample_palette(Palette::Coolwarm, WEEKDAY_NAMES.len());

        self.chart_service
            .generate_bar_chart(
                &self.frame("Sales by Day of Week", "Day", "Total Sales ($)", (10, 6)),
                bars,
                colors,
                ValueFormat::Currency,
                None,
                output_path,
            )
            .await
    }

    async fn sales_heatmap(&self, records: &[SalesRecord], output_path: &Path) -> anyhow::Result<()> {
        let heatmap: HourlyHeatmap = self.analytics_service.hourly_heatmap(records);

        self.chart_service
            .generate_heatmap(
                &self.frame("Sales Heatmap: Day vs Hour", "Hour of Day", "Day of Week", (12, 6)),
                heatmap,
                "Revenue ($)",
                output_path,
            )
            .await
    }

    async fn age_group_spending(
        &self,
        records: &[SalesRecord],
        output_path: &Path,
    ) -> anyhow::Result<()> {
        let bars: Vec<LabeledValue> = self.analytics_service.age_group_spending(records);
        let colors: Vec<Rgb> = sample_palette(Palette::Mako, bars.len());

        self.chart_service
            .generate_horizontal_bar_chart(
                &self.frame("Total Spending by Age Group", "Total Sales ($)", "Age Group", (10, 6)),
                bars,
                colors,
                ValueFormat::Currency,
                output_path,
            )
            .await
    }

    #[doc = "Chart 6: margin per category with a dashed line at the mean of the category margins"]
    async fn profit_margin(&self, records: &[SalesRecord], output_path: &Path) -> anyhow::Result<()> {
        let categories: Vec<CategoryProfit> =
            self.analytics_service.category_profit_margin(records);

        let bars: Vec<LabeledValue> = categories
            .iter()
            .map(|c| LabeledValue::new(c.category().clone(), *c.profit_margin_pct()))
            .collect();

        let reference_line: Option<ReferenceLine> = mean_of(&bars).map(|mean| {
            ReferenceLine::new(mean, format!("Avg: {}", ValueFormat::Percent.format(mean)))
        });

        self.chart_service
            .generate_bar_chart(
                &self.frame("Profit Margin by Category", "Category", "Profit Margin (%)", (10, 6)),
                bars,
                PROFIT_MARGIN_COLORS.to_vec(),
                ValueFormat::Percent,
                reference_line,
                output_path,
            )
            .await
    }

    async fn gender_analysis(
        &self,
        records: &[SalesRecord],
        output_path: &Path,
    ) -> anyhow::Result<()> {
        let breakdown: GenderBreakdown = self.analytics_service.gender_breakdown(records);

        self.chart_service
            .generate_pie_bar_chart(
                "Transaction Distribution by Gender",
                breakdown.counts().clone(),
                &self.frame("Total Revenue by Gender", "Gender", "Revenue ($)", (14, 6)),
                breakdown.revenue().clone(),
                GENDER_COLORS.to_vec(),
                output_path,
            )
            .await
    }

    async fn top_customers(&self, records: &[SalesRecord], output_path: &Path) -> anyhow::Result<()> {
        let customers: Vec<CustomerSpend> = self
            .analytics_service
            .top_customers(records, self.top_customer_count);

        let bars: Vec<LabeledValue> = customers
            .iter()
            .map(|customer| LabeledValue::new(customer.label(), *customer.total_sale()))
            .collect();
        let colors: Vec<Rgb> = sample_palette(Palette::Rocket, bars.len());
        let title: String = format!("Top {} Customers by Total Spend", self.top_customer_count);

        self.chart_service
            .generate_horizontal_bar_chart(
                &self.frame(&title, "Total Spend ($)", "Customer ID", (10, 7)),
                bars,
                colors,
                ValueFormat::Currency,
                output_path,
            )
            .await
    }
}

fn mean_of(values: &[LabeledValue]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    Some(values.iter().map(|v| *v.value()).sum::<f64>() / values.len() as f64)
}

#[async_trait]
impl<A: AnalyticsService, C: ChartService> VisualizationService for VisualizationServiceImpl<A, C> {
    async fn generate_all_charts(
        &self,
        records: &[SalesRecord],
        output_dir: &Path,
    ) -> anyhow::Result<Vec<ChartImageInfo>> {
        ensure_dir(output_dir).await.with_context(|| {
            format!(
                "[VisualizationServiceImpl->generate_all_charts] Failed to create {:?}",
                output_dir
            )
        })?;

        let mut images: Vec<ChartImageInfo> = Vec::with_capacity(8);

        let mut record_image = |chart_name: &str| -> PathBuf {
            let pic_path: PathBuf = output_dir.join(format!("{}.png", chart_name));
            images.push(ChartImageInfo::new(chart_name.to_string(), pic_path.clone()));
            pic_path
        };

        /* 1. Revenue by category */
        let path: PathBuf = record_image("1_revenue_by_category");
        self.revenue_by_category(records, &path).await?;
        info!("Chart 1 saved: {:?}", path);

        /* 2. Monthly sales trend */
        let path: PathBuf = record_image("2_monthly_sales_trend");
        self.monthly_sales_trend(records, &path).await?;
        info!("Chart 2 saved: {:?}", path);

        /* 3. Sales by day of week */
        let path: PathBuf = record_image("3_sales_by_day");
        self.sales_by_day(records, &path).await?;
        info!("Chart 3 saved: {:?}", path);

        /* 4. Day x hour heatmap */
        let path: PathBuf = record_image("4_sales_heatmap");
        self.sales_heatmap(records, &path).await?;
        info!("Chart 4 saved: {:?}", path);

        /* 5. Spending by age group */
        let path: PathBuf = record_image("5_age_group_spending");
        self.age_group_spending(records, &path).await?;
        info!("Chart 5 saved: {:?}", path);

        /* 6. Profit margin by category */
        let path: PathBuf = record_image("6_profit_margin");
        self.profit_margin(records, &path).await?;
        info!("Chart 6 saved: {:?}", path);

        /* 7. Gender analysis */
        let path: PathBuf = record_image("7_gender_analysis");
        self.gender_analysis(records, &path).await?;
        info!("Chart 7 saved: {:?}", path);

        /* 8. Top customers */
        let path: PathBuf = record_image("8_top_customers");
        self.top_customers(records, &path).await?;
        info!("Chart 8 saved: {:?}", path);

        Ok(images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::analytics_service_impl::{test_dataset::*, *};
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Bar {
            title: String,
            size: (u32, u32),
            labels: Vec<String>,
            values: Vec<f64>,
            colors: usize,
            value_format: ValueFormat,
            reference: Option<(f64, String)>,
        },
        HorizontalBar {
            title: String,
            labels: Vec<String>,
        },
        Line {
            x_labels: Vec<String>,
            y_data: Vec<f64>,
        },
        Heatmap {
            hours: Vec<u32>,
            colorbar_desc: String,
        },
        PieBar {
            pie_title: String,
            slices: Vec<(String, usize)>,
            bar_title: String,
        },
    }

    #[derive(Debug, Default)]
    struct RecordingChartService {
        calls: Mutex<Vec<(Call, PathBuf)>>,
    }

    impl RecordingChartService {
        fn push(&self, call: Call, output_path: &Path) {
            self.calls.lock().unwrap().push((call, output_path.to_path_buf()));
        }
    }

    fn labels_of(bars: &[LabeledValue]) -> Vec<String> {
        bars.iter().map(|bar| bar.label().clone()).collect()
    }

    #[async_trait]
    impl ChartService for RecordingChartService {
        async fn generate_bar_chart(
            &self,
            frame: &ChartFrame,
            bars: Vec<LabeledValue>,
            colors: Vec<Rgb>,
            value_format: ValueFormat,
            reference_line: Option<ReferenceLine>,
            output_path: &Path,
        ) -> anyhow::Result<()> {
            self.push(
                Call::Bar {
                    title: frame.title().clone(),
                    size: *frame.size(),
                    labels: labels_of(&bars),
                    values: bars.iter().map(|bar| *bar.value()).collect(),
                    colors: colors.len(),
                    value_format,
                    reference: reference_line.map(|r| (*r.value(), r.legend().clone())),
                },
                output_path,
            );
            Ok(())
        }

        async fn generate_horizontal_bar_chart(
            &self,
            frame: &ChartFrame,
            bars: Vec<LabeledValue>,
            _colors: Vec<Rgb>,
            _value_format: ValueFormat,
            output_path: &Path,
        ) -> anyhow::Result<()> {
            self.push(
                Call::HorizontalBar {
                    title: frame.title().clone(),
                    labels: labels_of(&bars),
                },
                output_path,
            );
            Ok(())
        }

        async fn generate_line_chart(
            &self,
            _frame: &ChartFrame,
            x_labels: Vec<String>,
            y_data: Vec<f64>,
            _highlight_extremes: bool,
            output_path: &Path,
        ) -> anyhow::Result<()> {
            self.push(Call::Line { x_labels, y_data }, output_path);
            Ok(())
        }

        async fn generate_heatmap(
            &self,
            _frame: &ChartFrame,
            heatmap: HourlyHeatmap,
            colorbar_desc: &str,
            output_path: &Path,
        ) -> anyhow::Result<()> {
            self.push(
                Call::Heatmap {
                    hours: heatmap.hours().clone(),
                    colorbar_desc: colorbar_desc.to_string(),
                },
                output_path,
            );
            Ok(())
        }

        async fn generate_pie_bar_chart(
            &self,
            pie_title: &str,
            slices: Vec<LabeledCount>,
            bar_frame: &ChartFrame,
            _bars: Vec<LabeledValue>,
            _colors: Vec<Rgb>,
            output_path: &Path,
        ) -> anyhow::Result<()> {
            self.push(
                Call::PieBar {
                    pie_title: pie_title.to_string(),
                    slices: slices
                        .iter()
                        .map(|s| (s.label().clone(), *s.count()))
                        .collect(),
                    bar_title: bar_frame.title().clone(),
                },
                output_path,
            );
            Ok(())
        }
    }

    fn service() -> VisualizationServiceImpl<AnalyticsServiceImpl, RecordingChartService> {
        VisualizationServiceImpl::new(
            AnalyticsServiceImpl::new(),
            RecordingChartService::default(),
            ChartConfig::default(),
            10,
        )
    }

    #[tokio::test]
    async fn writes_eight_charts_in_order_into_created_dir() {
        let dir = tempfile::tempdir().unwrap();
        let output_dir: PathBuf = dir.path().join("visuals");
        let service = service();

        let images: Vec<ChartImageInfo> = service
            .generate_all_charts(&sales_records(), &output_dir)
            .await
            .unwrap();

        assert!(output_dir.is_dir());

        let names: Vec<&str> = images.iter().map(|i| i.chart_name().as_str()).collect();
        assert_eq!(
            names,
            vec![
                "1_revenue_by_category",
                "2_monthly_sales_trend",
                "3_sales_by_day",
                "4_sales_heatmap",
                "5_age_group_spending",
                "6_profit_margin",
                "7_gender_analysis",
                "8_top_customers",
            ]
        );

        let calls = service.chart_service.calls.lock().unwrap();
        assert_eq!(calls.len(), 8);
        for ((_, path), image) in calls.iter().zip(images.iter()) {
            assert_eq!(path, image.pic_path());
            assert_eq!(path.parent(), Some(output_dir.as_path()));
        }
    }

    #[tokio::test]
    async fn charts_receive_aggregates() {
        let dir = tempfile::tempdir().unwrap();
        let service = service();

        service
            .generate_all_charts(&sales_records(), dir.path())
            .await
            .unwrap();

        let calls = service.chart_service.calls.lock().unwrap();

        match &calls[0].0 {
            Call::Bar {
                labels,
                size,
                colors,
                value_format,
                reference,
                ..
            } => {
                assert_eq!(labels, &vec!["Electronics", "Clothing", "Beauty"]);
                assert_eq!(*size, (1000, 600));
                assert_eq!(*colors, 3);
                assert_eq!(*value_format, ValueFormat::Currency);
                assert_eq!(*reference, None);
            }
            other => panic!("unexpected call {:?}", other),
        }

        assert_eq!(
            calls[1].0,
            Call::Line {
                x_labels: vec!["Jan".to_string(), "Feb".to_string(), "Mar".to_string()],
                y_data: vec![400.0, 700.0, 1050.0],
            }
        );

        match &calls[2].0 {
            Call::Bar { labels, colors, .. } => {
                assert_eq!(labels, &vec!["Monday", "Tuesday", "Saturday", "Sunday"]);
                assert_eq!(*colors, 7);
            }
            other => panic!("unexpected call {:?}", other),
        }

        assert_eq!(
            calls[3].0,
            Call::Heatmap {
                hours: vec![9, 10, 18, 20],
                colorbar_desc: "Revenue ($)".to_string(),
            }
        );

        match &calls[5].0 {
            Call::Bar {
                title,
                values,
                value_format,
                reference,
                ..
            } => {
                assert_eq!(title, "Profit Margin by Category");
                assert_eq!(values, &vec![66.67, 50.0, 23.33]);
                assert_eq!(*value_format, ValueFormat::Percent);

                let (mean, legend) = reference.clone().unwrap();
                assert!((mean - (66.67 + 50.0 + 23.33) / 3.0).abs() < 1e-9);
                assert_eq!(legend, "Avg: 46.7%");
            }
            other => panic!("unexpected call {:?}", other),
        }

        assert_eq!(
            calls[6].0,
            Call::PieBar {
                pie_title: "Transaction Distribution by Gender".to_string(),
                slices: vec![("Male".to_string(), 4), ("Female".to_string(), 2)],
                bar_title: "Total Revenue by Gender".to_string(),
            }
        );

        assert_eq!(
            calls[7].0,
            Call::HorizontalBar {
                title: "Top 10 Customers by Total Spend".to_string(),
                labels: vec![
                    "Customer 4".to_string(),
                    "Customer 3".to_string(),
                    "Customer 1".to_string(),
                    "Customer 2".to_string(),
                ],
            }
        );
    }

    #[tokio::test]
    async fn renders_all_chart_files_with_plotters() {
        use crate::service::chart_service_impl::*;

        let dir = tempfile::tempdir().unwrap();
        let output_dir: PathBuf = dir.path().join("visuals");
        let config = ChartConfig::default();
        let service = VisualizationServiceImpl::new(
            AnalyticsServiceImpl::new(),
            ChartServiceImpl::new(config.font_family().clone()),
            config,
            10,
        );

        let images: Vec<ChartImageInfo> = service
            .generate_all_charts(&sales_records(), &output_dir)
            .await
            .unwrap();

        assert_eq!(images.len(), 8);
        for image in &images {
            let metadata = std::fs::metadata(image.pic_path()).unwrap();
            assert!(metadata.len() > 0, "{:?} is empty", image.pic_path());
        }
    }
}
