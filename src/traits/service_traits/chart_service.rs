use crate::common::*;

use crate::dto::{chart_frame::*, hourly_heatmap::*, labeled_value::*};
use crate::enums::value_format::*;
use crate::utils_modules::color_utils::Rgb;

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Generate a vertical bar chart and save it as an image file
        # Arguments
        * `frame` - Title, axis descriptions and image size
        * `bars` - One bar per entry, drawn left to right
        * `colors` - Bar fill colours, cycled when shorter than `bars`
        * `value_format` - Format of the label printed above each bar
        * `reference_line` - Optional dashed horizontal line with a legend entry
        * `output_path` - Path where the chart image will be saved
    "]
    async fn generate_bar_chart(
        &self,
        frame: &ChartFrame,
        bars: Vec<LabeledValue>,
        colors: Vec<Rgb>,
        value_format: ValueFormat,
        reference_line: Option<ReferenceLine>,
        output_path: &Path,
    ) -> anyhow::Result<()>;

    #[doc = "
        Generate a horizontal bar chart; the first entry is drawn at the bottom
    "]
    async fn generate_horizontal_bar_chart(
        &self,
        frame: &ChartFrame,
        bars: Vec<LabeledValue>,
        colors: Vec<Rgb>,
        value_format: ValueFormat,
        output_path: &Path,
    ) -> anyhow::Result<()>;

    #[doc = "
        Generate a line chart with markers and a filled area
        # Arguments
        * `x_labels` - Labels for X-axis
        * `y_data` - Data points for Y-axis
        * `highlight_extremes` - Mark the highest point green and the lowest red
    "]
    async fn generate_line_chart(
        &self,
        frame: &ChartFrame,
        x_labels: Vec<String>,
        y_data: Vec<f64>,
        highlight_extremes: bool,
        output_path: &Path,
    ) -> anyhow::Result<()>;

    #[doc = "
        Generate a weekday x hour heatmap with a colour bar
    "]
    async fn generate_heatmap(
        &self,
        frame: &ChartFrame,
        heatmap: HourlyHeatmap,
        colorbar_desc: &str,
        output_path: &Path,
    ) -> anyhow::Result<()>;

    #[doc = "
        Generate a two-panel image: a pie chart on the left and a bar chart on the right
        # Arguments
        * `pie_title` - Caption of the pie panel
        * `slices` - Pie slices, drawn counter-clockwise from 12 o'clock
        * `bar_frame` - Caption and axis descriptions of the bar panel; its size is the whole image
        * `bars` - Bars of the right panel
        * `colors` - Colours shared by both panels
    "]
    async fn generate_pie_bar_chart(
        &self,
        pie_title: &str,
        slices: Vec<LabeledCount>,
        bar_frame: &ChartFrame,
        bars: Vec<LabeledValue>,
        colors: Vec<Rgb>,
        output_path: &Path,
    ) -> anyhow::Result<()>;
}
