use crate::common::*;
use crate::dto::{chart_frame::*, hourly_heatmap::*, labeled_value::*};
use crate::enums::palette::Palette;
use crate::enums::value_format::*;
use crate::traits::service_traits::chart_service::*;
use crate::utils_modules::{color_utils::*, number_utils::*};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

type BitMapArea<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl {
    font_family: String,
}

fn to_rgb_color(rgb: Rgb) -> RGBColor {
    RGBColor(rgb.0, rgb.1, rgb.2)
}

#[doc = r#"
    Label of the category drawn at integer position `position`.
    Items sit at 0, 1, 2 ... so any tick that is not on an integer gets no label.
"#]
fn index_label(labels: &[String], position: f64) -> String {
    let rounded: f64 = position.round();

    if rounded < 0.0 || (position - rounded).abs() > 1e-6 {
        return String::new();
    }

    labels.get(rounded as usize).cloned().unwrap_or_default()
}

#[doc = "Indices of the first maximum and the first minimum"]
fn extreme_indices(values: &[f64]) -> Option<(usize, usize)> {
    if values.is_empty() {
        return None;
    }

    let mut max_idx: usize = 0;
    let mut min_idx: usize = 0;

    for (idx, value) in values.iter().enumerate() {
        if *value > values[max_idx] {
            max_idx = idx;
        }
        if *value < values[min_idx] {
            min_idx = idx;
        }
    }

    Some((max_idx, min_idx))
}

#[doc = "Pixel at `radius` from `center`, `degrees` counter-clockwise from 3 o'clock"]
fn polar_point(center: (i32, i32), radius: f64, degrees: f64) -> (i32, i32) {
    let radians: f64 = degrees.to_radians();
    (
        center.0 + (radius * radians.cos()).round() as i32,
        center.1 - (radius * radians.sin()).round() as i32,
    )
}

#[doc = "Polygon outline of a pie wedge: the centre followed by the arc, one point per degree or less"]
fn wedge_points(center: (i32, i32), radius: f64, start_deg: f64, sweep_deg: f64) -> Vec<(i32, i32)> {
    let steps: usize = sweep_deg.abs().ceil().max(1.0) as usize;
    let mut points: Vec<(i32, i32)> = Vec::with_capacity(steps + 2);

    points.push(center);
    for step in 0..=steps {
        let degrees: f64 = start_deg + sweep_deg * step as f64 / steps as f64;
        points.push(polar_point(center, radius, degrees));
    }

    points
}

#[doc = "Bars, outlines, value labels and optional dashed reference line on one drawing area"]
#[allow(clippy::too_many_arguments)]
fn draw_bar_panel(
    area: &BitMapArea<'_>,
    font: &str,
    title: &str,
    x_desc: &str,
    y_desc: &str,
    bars: &[LabeledValue],
    colors: &[RGBColor],
    value_format: ValueFormat,
    value_range: (f64, f64),
    reference_line: Option<&ReferenceLine>,
) -> anyhow::Result<()> {
    let labels: Vec<String> = bars.iter().map(|bar| bar.label().clone()).collect();
    let n: usize = bars.len();
    let x_range: std::ops::Range<f64> = -0.5..(n as f64 - 0.5);

    let mut chart = ChartBuilder::on(area)
        .caption(title, (font, 28).into_font().style(FontStyle::Bold))
        .margin(30)
        .x_label_area_size(60)
        .y_label_area_size(110)
        .build_cartesian_2d(x_range, value_range.0..value_range.1)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(RGBColor(235, 235, 235))
        .x_desc(x_desc)
        .y_desc(y_desc)
        .axis_desc_style((font, 20).into_font().style(FontStyle::Bold))
        .label_style((font, 16))
        .x_labels(n)
        .y_labels(10)
        .x_label_formatter(&|x| index_label(&labels, *x))
        .y_label_formatter(&|y| format_thousands(*y, 0))
        .draw()?;

    chart.draw_series(bars.iter().enumerate().map(|(idx, bar)| {
        let fill: RGBColor = colors[idx % colors.len()];
        Rectangle::new(
            [(idx as f64 - 0.4, 0.0), (idx as f64 + 0.4, *bar.value())],
            fill.mix(0.8).filled(),
        )
    }))?;

    chart.draw_series(bars.iter().enumerate().map(|(idx, bar)| {
        Rectangle::new(
            [(idx as f64 - 0.4, 0.0), (idx as f64 + 0.4, *bar.value())],
            BLACK.stroke_width(1),
        )
    }))?;

    let value_style: TextStyle = TextStyle::from((font, 16).into_font().style(FontStyle::Bold))
        .pos(Pos::new(HPos::Center, VPos::Bottom));

    chart.draw_series(bars.iter().enumerate().map(|(idx, bar)| {
        Text::new(
            value_format.format(*bar.value()),
            (idx as f64, *bar.value()),
            value_style.clone(),
        )
    }))?;

    if let Some(reference_line) = reference_line {
        let y: f64 = *reference_line.value();
        let (x_start, x_end) = (-0.5, n as f64 - 0.5);
        let (dash, gap) = (0.12, 0.08);

        let mut dashes: Vec<PathElement<(f64, f64)>> = Vec::new();
        let mut x: f64 = x_start;
        while x < x_end {
            let end: f64 = (x + dash).min(x_end);
            dashes.push(PathElement::new(vec![(x, y), (end, y)], RED.stroke_width(2)));
            x += dash + gap;
        }

        chart
            .draw_series(dashes)?
            .label(reference_line.legend().as_str())
            .legend(|(x, y)| PathElement::new(vec![(x - 10, y), (x + 10, y)], RED.stroke_width(2)));

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font((font, 16))
            .draw()?;
    }

    Ok(())
}

impl ChartServiceImpl {
    #[doc = "Helper function to determine value-axis range with padding; zero is always included"]
    fn calculate_value_range(&self, values: &[f64]) -> (f64, f64) {
        let max_val: f64 = values.iter().copied().fold(0.0, f64::max);
        let min_val: f64 = values.iter().copied().fold(0.0, f64::min);

        let span: f64 = (max_val - min_val).max(1.0);

        let lower: f64 = if min_val < 0.0 {
            min_val - span * 0.1
        } else {
            0.0
        };
        let upper: f64 = max_val + span * 0.15;

        (lower, upper)
    }

    fn validate_series(
        &self,
        caller: &str,
        labels_len: usize,
        values_len: usize,
        colors_len: usize,
    ) -> anyhow::Result<()> {
        if labels_len != values_len {
            return Err(anyhow!(
                "[ChartServiceImpl->{}] Labels and values must have the same length: {} vs {}",
                caller,
                labels_len,
                values_len
            ));
        }

        if labels_len == 0 {
            return Err(anyhow!(
                "[ChartServiceImpl->{}] Cannot generate chart with empty data",
                caller
            ));
        }

        if colors_len == 0 {
            return Err(anyhow!(
                "[ChartServiceImpl->{}] At least one colour is required",
                caller
            ));
        }

        Ok(())
    }

    #[doc = "Creates the parent directory of `output_path` and returns the path as a string"]
    async fn prepare_output(&self, output_path: &Path) -> anyhow::Result<String> {
        if let Some(parent) = output_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        Ok(output_path.to_string_lossy().to_string())
    }

    #[doc = "Runs the synchronous plotters code on the blocking pool and waits for it"]
    async fn run_drawing<F>(&self, caller: &str, output_path: &Path, draw: F) -> anyhow::Result<()>
    where
        F: FnOnce() -> anyhow::Result<()> + Send + 'static,
    {
        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(draw);

        let drawing_result: Result<(), anyhow::Error> = handle.await.with_context(|| {
            format!(
                "[ChartServiceImpl->{}] blocking task join failed (panic/cancelled)",
                caller
            )
        })?;

        drawing_result
            .with_context(|| format!("[ChartServiceImpl->{}] drawing/present failed", caller))?;

        info!("{} generated successfully: {:?}", caller, output_path);

        Ok(())
    }
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn generate_bar_chart(
        &self,
        frame: &ChartFrame,
        bars: Vec<LabeledValue>,
        colors: Vec<Rgb>,
        value_format: ValueFormat,
        reference_line: Option<ReferenceLine>,
        output_path: &Path,
    ) -> anyhow::Result<()> {
        self.validate_series("generate_bar_chart", bars.len(), bars.len(), colors.len())?;

        let output_path_str: String = self.prepare_output(output_path).await?;
        let font: String = self.font_family.clone();
        let frame: ChartFrame = frame.clone();

        /* Calculate value range before moving into closure */
        let mut range_values: Vec<f64> = bars.iter().map(|bar| *bar.value()).collect();
        if let Some(reference_line) = &reference_line {
            range_values.push(*reference_line.value());
        }
        let value_range: (f64, f64) = self.calculate_value_range(&range_values);

        self.run_drawing("generate_bar_chart", output_path, move || {
            let root = BitMapBackend::new(&output_path_str, *frame.size()).into_drawing_area();
            root.fill(&WHITE)?;

            let colors: Vec<RGBColor> = colors.into_iter().map(to_rgb_color).collect();

            draw_bar_panel(
                &root,
                &font,
                frame.title(),
                frame.x_desc(),
                frame.y_desc(),
                &bars,
                &colors,
                value_format,
                value_range,
                reference_line.as_ref(),
            )?;

            root.present()?;
            Ok(())
        })
        .await
    }

    async fn generate_horizontal_bar_chart(
        &self,
        frame: &ChartFrame,
        bars: Vec<LabeledValue>,
        colors: Vec<Rgb>,
        value_format: ValueFormat,
        output_path: &Path,
    ) -> anyhow::Result<()> {
        self.validate_series(
            "generate_horizontal_bar_chart",
            bars.len(),
            bars.len(),
            colors.len(),
        )?;

        let output_path_str: String = self.prepare_output(output_path).await?;
        let font: String = self.font_family.clone();
        let frame: ChartFrame = frame.clone();

        let values: Vec<f64> = bars.iter().map(|bar| *bar.value()).collect();
        let (x_min, x_max) = self.calculate_value_range(&values);
        /* extra room on the right for the value labels */
        let x_max: f64 = x_max + (x_max - x_min) * 0.1;

        self.run_drawing("generate_horizontal_bar_chart", output_path, move || {
            let root = BitMapBackend::new(&output_path_str, *frame.size()).into_drawing_area();
            root.fill(&WHITE)?;

            let labels: Vec<String> = bars.iter().map(|bar| bar.label().clone()).collect();
            let n: usize = bars.len();

            let mut chart = ChartBuilder::on(&root)
                .caption(frame.title(), (font.as_str(), 28).into_font().style(FontStyle::Bold))
                .margin(30)
                .x_label_area_size(60)
                .y_label_area_size(140)
                .build_cartesian_2d(x_min..x_max, -0.5..(n as f64 - 0.5))?;

            chart
                .configure_mesh()
                .disable_y_mesh()
                .light_line_style(RGBColor(235, 235, 235))
                .x_desc(frame.x_desc().as_str())
                .y_desc(frame.y_desc().as_str())
                .axis_desc_style((font.as_str(), 20).into_font().style(FontStyle::Bold))
                .label_style((font.as_str(), 16))
                .y_labels(n)
                .x_labels(8)
                .y_label_formatter(&|y| index_label(&labels, *y))
                .x_label_formatter(&|x| format_thousands(*x, 0))
                .draw()?;

            chart.draw_series(bars.iter().enumerate().map(|(idx, bar)| {
                let fill: RGBColor = to_rgb_color(colors[idx % colors.len()]);
                Rectangle::new(
                    [(0.0, idx as f64 - 0.4), (*bar.value(), idx as f64 + 0.4)],
                    fill.mix(0.8).filled(),
                )
            }))?;

            chart.draw_series(bars.iter().enumerate().map(|(idx, bar)| {
                Rectangle::new(
                    [(0.0, idx as f64 - 0.4), (*bar.value(), idx as f64 + 0.4)],
                    BLACK.stroke_width(1),
                )
            }))?;

            let value_style: TextStyle =
                TextStyle::from((font.as_str(), 15).into_font().style(FontStyle::Bold))
                    .pos(Pos::new(HPos::Left, VPos::Center));

            chart.draw_series(bars.iter().enumerate().map(|(idx, bar)| {
                Text::new(
                    format!(" {}", value_format.format(*bar.value())),
                    (*bar.value(), idx as f64),
                    value_style.clone(),
                )
            }))?;

            root.present()?;
            Ok(())
        })
        .await
    }

    async fn generate_line_chart(
        &self,
        frame: &ChartFrame,
        x_labels: Vec<String>,
        y_data: Vec<f64>,
        highlight_extremes: bool,
        output_path: &Path,
    ) -> anyhow::Result<()> {
        self.validate_series("generate_line_chart", x_labels.len(), y_data.len(), 1)?;

        let output_path_str: String = self.prepare_output(output_path).await?;
        let font: String = self.font_family.clone();
        let frame: ChartFrame = frame.clone();

        /* Calculate y_range before moving into closure */
        let (y_min, y_max) = self.calculate_value_range(&y_data);
        let extremes: Option<(usize, usize)> = if highlight_extremes {
            extreme_indices(&y_data)
        } else {
            None
        };

        self.run_drawing("generate_line_chart", output_path, move || {
            let root = BitMapBackend::new(&output_path_str, *frame.size()).into_drawing_area();
            root.fill(&WHITE)?;

            let n: usize = x_labels.len();
            let line_color: RGBColor = RGBColor(0x2e, 0x86, 0xab);
            let marker_color: RGBColor = RGBColor(0xa2, 0x3b, 0x72);

            let mut chart = ChartBuilder::on(&root)
                .caption(frame.title(), (font.as_str(), 28).into_font().style(FontStyle::Bold))
                .margin(30)
                .x_label_area_size(60)
                .y_label_area_size(110)
                .build_cartesian_2d(-0.5..(n as f64 - 0.5), y_min..y_max)?;

            chart
                .configure_mesh()
                .light_line_style(RGBColor(235, 235, 235))
                .x_desc(frame.x_desc().as_str())
                .y_desc(frame.y_desc().as_str())
                .axis_desc_style((font.as_str(), 20).into_font().style(FontStyle::Bold))
                .label_style((font.as_str(), 16))
                .x_labels(n)
                .y_labels(10)
                .x_label_formatter(&|x| index_label(&x_labels, *x))
                .y_label_formatter(&|y| format_thousands(*y, 0))
                .draw()?;

            let points: Vec<(f64, f64)> = y_data
                .iter()
                .enumerate()
                .map(|(idx, y)| (idx as f64, *y))
                .collect();

            chart.draw_series(AreaSeries::new(points.clone(), 0.0, line_color.mix(0.3)))?;

            chart.draw_series(LineSeries::new(
                points.clone(),
                line_color.stroke_width(3),
            ))?;

            chart.draw_series(
                points
                    .iter()
                    .map(|point| Circle::new(*point, 6, marker_color.filled())),
            )?;

            if let Some((max_idx, min_idx)) = extremes {
                chart
                    .draw_series(std::iter::once(Circle::new(
                        points[max_idx],
                        12,
                        GREEN.filled(),
                    )))?
                    .label("Highest")
                    .legend(|(x, y)| Circle::new((x, y), 6, GREEN.filled()));

                chart
                    .draw_series(std::iter::once(Circle::new(
                        points[min_idx],
                        12,
                        RED.filled(),
                    )))?
                    .label("Lowest")
                    .legend(|(x, y)| Circle::new((x, y), 6, RED.filled()));

                chart
                    .configure_series_labels()
                    .position(SeriesLabelPosition::UpperLeft)
                    .background_style(WHITE.mix(0.8))
                    .border_style(BLACK)
                    .label_font((font.as_str(), 16))
                    .draw()?;
            }

            root.present()?;
            Ok(())
        })
        .await
    }

    async fn generate_heatmap(
        &self,
        frame: &ChartFrame,
        heatmap: HourlyHeatmap,
        colorbar_desc: &str,
        output_path: &Path,
    ) -> anyhow::Result<()> {
        self.validate_series(
            "generate_heatmap",
            heatmap.days().len(),
            heatmap.cells().len(),
            1,
        )?;

        if heatmap.is_empty() {
            return Err(anyhow!(
                "[ChartServiceImpl->generate_heatmap] Cannot generate chart with empty data"
            ));
        }

        let output_path_str: String = self.prepare_output(output_path).await?;
        let font: String = self.font_family.clone();
        let frame: ChartFrame = frame.clone();
        let colorbar_desc: String = colorbar_desc.to_string();
        let max_value: f64 = heatmap.max_value().max(1.0);

        self.run_drawing("generate_heatmap", output_path, move || {
            let (width, _height) = *frame.size();
            let root = BitMapBackend::new(&output_path_str, *frame.size()).into_drawing_area();
            root.fill(&WHITE)?;

            let root = root.titled(
                frame.title(),
                (font.as_str(), 28).into_font().style(FontStyle::Bold),
            )?;
            let (plot_area, colorbar_area) = root.split_horizontally(width as i32 - 180);

            let days: &Vec<String> = heatmap.days();
            let hour_labels: Vec<String> = heatmap.hours().iter().map(|h| h.to_string()).collect();
            let n_days: usize = days.len();
            let n_hours: usize = hour_labels.len();

            /* Monday on the top row */
            let row_labels: Vec<String> = days.iter().rev().cloned().collect();

            let mut chart = ChartBuilder::on(&plot_area)
                .margin(20)
                .x_label_area_size(60)
                .y_label_area_size(130)
                .build_cartesian_2d(-0.5..(n_hours as f64 - 0.5), -0.5..(n_days as f64 - 0.5))?;

            chart
                .configure_mesh()
                .disable_mesh()
                .x_desc(frame.x_desc().as_str())
                .y_desc(frame.y_desc().as_str())
                .axis_desc_style((font.as_str(), 20).into_font().style(FontStyle::Bold))
                .label_style((font.as_str(), 15))
                .x_labels(n_hours)
                .y_labels(n_days)
                .x_label_formatter(&|x| index_label(&hour_labels, *x))
                .y_label_formatter(&|y| index_label(&row_labels, *y))
                .draw()?;

            chart.draw_series(heatmap.cells().iter().enumerate().flat_map(|(day_idx, row)| {
                let row_pos: f64 = (n_days - 1 - day_idx) as f64;
                row.iter().enumerate().map(move |(hour_idx, value)| {
                    let fill: RGBColor =
                        to_rgb_color(colormap(Palette::YlOrRd, *value / max_value));
                    Rectangle::new(
                        [
                            (hour_idx as f64 - 0.5, row_pos - 0.5),
                            (hour_idx as f64 + 0.5, row_pos + 0.5),
                        ],
                        fill.filled(),
                    )
                })
            }))?;

            /* cell separators */
            chart.draw_series(heatmap.cells().iter().enumerate().flat_map(|(day_idx, row)| {
                let row_pos: f64 = (n_days - 1 - day_idx) as f64;
                (0..row.len()).map(move |hour_idx| {
                    Rectangle::new(
                        [
                            (hour_idx as f64 - 0.5, row_pos - 0.5),
                            (hour_idx as f64 + 0.5, row_pos + 0.5),
                        ],
                        WHITE.stroke_width(1),
                    )
                })
            }))?;

            let mut colorbar = ChartBuilder::on(&colorbar_area)
                .margin_top(20)
                .margin_bottom(80)
                .margin_right(20)
                .y_label_area_size(110)
                .build_cartesian_2d(0.0..1.0, 0.0..max_value)?;

            colorbar
                .configure_mesh()
                .disable_mesh()
                .disable_x_axis()
                .y_desc(colorbar_desc.as_str())
                .axis_desc_style((font.as_str(), 18).into_font().style(FontStyle::Bold))
                .label_style((font.as_str(), 14))
                .y_labels(8)
                .y_label_formatter(&|y| format_thousands(*y, 0))
                .draw()?;

            let steps: usize = 100;
            colorbar.draw_series((0..steps).map(|step| {
                let lower: f64 = max_value * step as f64 / steps as f64;
                let upper: f64 = max_value * (step + 1) as f64 / steps as f64;
                let fill: RGBColor = to_rgb_color(colormap(
                    Palette::YlOrRd,
                    (step as f64 + 0.5) / steps as f64,
                ));
                Rectangle::new([(0.0, lower), (1.0, upper)], fill.filled())
            }))?;

            root.present()?;
            Ok(())
        })
        .await
    }

    async fn generate_pie_bar_chart(
        &self,
        pie_title: &str,
        slices: Vec<LabeledCount>,
        bar_frame: &ChartFrame,
        bars: Vec<LabeledValue>,
        colors: Vec<Rgb>,
        output_path: &Path,
    ) -> anyhow::Result<()> {
        self.validate_series("generate_pie_bar_chart", slices.len(), slices.len(), colors.len())?;
        self.validate_series("generate_pie_bar_chart", bars.len(), bars.len(), colors.len())?;

        let total_count: usize = slices.iter().map(|slice| *slice.count()).sum();
        if total_count == 0 {
            return Err(anyhow!(
                "[ChartServiceImpl->generate_pie_bar_chart] Pie slices add up to zero"
            ));
        }

        let output_path_str: String = self.prepare_output(output_path).await?;
        let font: String = self.font_family.clone();
        let frame: ChartFrame = bar_frame.clone();
        let pie_title: String = pie_title.to_string();

        let values: Vec<f64> = bars.iter().map(|bar| *bar.value()).collect();
        let value_range: (f64, f64) = self.calculate_value_range(&values);

        self.run_drawing("generate_pie_bar_chart", output_path, move || {
            let (width, _height) = *frame.size();
            let root = BitMapBackend::new(&output_path_str, *frame.size()).into_drawing_area();
            root.fill(&WHITE)?;

            let colors: Vec<RGBColor> = colors.into_iter().map(to_rgb_color).collect();
            let (pie_half, bar_half) = root.split_horizontally((width / 2) as i32);

            /* ---- left: pie ---- */
            let pie_area = pie_half.titled(
                &pie_title,
                (font.as_str(), 26).into_font().style(FontStyle::Bold),
            )?;
            let (area_w, area_h) = pie_area.dim_in_pixel();
            let center: (i32, i32) = ((area_w / 2) as i32, (area_h / 2) as i32);
            let radius: f64 = area_w.min(area_h) as f64 * 0.36;

            let slice_label_style: TextStyle =
                TextStyle::from((font.as_str(), 18).into_font().style(FontStyle::Bold))
                    .pos(Pos::new(HPos::Center, VPos::Center));

            let mut start_deg: f64 = 90.0;
            for (idx, slice) in slices.iter().enumerate() {
                let share: f64 = *slice.count() as f64 / total_count as f64;
                let sweep_deg: f64 = 360.0 * share;
                let fill: RGBColor = colors[idx % colors.len()];

                pie_area.draw(&Polygon::new(
                    wedge_points(center, radius, start_deg, sweep_deg),
                    fill.filled(),
                ))?;

                let mid_deg: f64 = start_deg + sweep_deg / 2.0;
                pie_area.draw(&Text::new(
                    slice.label().clone(),
                    polar_point(center, radius * 1.15, mid_deg),
                    slice_label_style.clone(),
                ))?;
                pie_area.draw(&Text::new(
                    format!("{:.1}%", share * 100.0),
                    polar_point(center, radius * 0.6, mid_deg),
                    slice_label_style.clone(),
                ))?;

                start_deg += sweep_deg;
            }

            /* ---- right: bars ---- */
            draw_bar_panel(
                &bar_half,
                &font,
                frame.title(),
                frame.x_desc(),
                frame.y_desc(),
                &bars,
                &colors,
                ValueFormat::Currency,
                value_range,
                None,
            )?;

            root.present()?;
            Ok(())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> ChartFrame {
        ChartFrame::new(
            "Title".to_string(),
            "X".to_string(),
            "Y".to_string(),
            (800, 500),
        )
    }

    #[test]
    fn labels_only_on_integer_positions() {
        let labels: Vec<String> = vec!["Jan".to_string(), "Feb".to_string()];

        assert_eq!(index_label(&labels, 0.0), "Jan");
        assert_eq!(index_label(&labels, 1.0000000001), "Feb");
        assert_eq!(index_label(&labels, 0.5), "");
        assert_eq!(index_label(&labels, -1.0), "");
        assert_eq!(index_label(&labels, 2.0), "");
    }

    #[test]
    fn extremes_pick_first_occurrence() {
        assert_eq!(extreme_indices(&[3.0, 9.0, 1.0, 9.0, 1.0]), Some((1, 2)));
        assert_eq!(extreme_indices(&[5.0]), Some((0, 0)));
        assert_eq!(extreme_indices(&[]), None);
    }

    #[test]
    fn value_range_includes_zero_and_headroom() {
        let service = ChartServiceImpl::new("sans-serif".to_string());

        let (lower, upper) = service.calculate_value_range(&[100.0, 400.0]);
        assert_eq!(lower, 0.0);
        assert_eq!(upper, 460.0);

        let (lower, upper) = service.calculate_value_range(&[-10.0, 30.0]);
        assert_eq!(lower, -14.0);
        assert_eq!(upper, 36.0);

        let (lower, upper) = service.calculate_value_range(&[]);
        assert_eq!((lower, upper), (0.0, 0.15));
    }

    #[test]
    fn pie_geometry_starts_at_twelve_o_clock() {
        assert_eq!(polar_point((100, 100), 50.0, 90.0), (100, 50));
        assert_eq!(polar_point((100, 100), 50.0, 180.0), (50, 100));

        let wedge = wedge_points((100, 100), 50.0, 90.0, 90.0);
        assert_eq!(wedge.first(), Some(&(100, 100)));
        assert_eq!(wedge[1], (100, 50));
        assert_eq!(wedge.last(), Some(&(50, 100)));
        assert_eq!(wedge.len(), 92);
    }

    #[tokio::test]
    async fn line_chart_rejects_mismatched_series() {
        let service = ChartServiceImpl::new("sans-serif".to_string());
        let dir = tempfile::tempdir().unwrap();

        let err = service
            .generate_line_chart(
                &frame(),
                vec!["Jan".to_string(), "Feb".to_string()],
                vec![1.0],
                true,
                &dir.path().join("line.png"),
            )
            .await
            .unwrap_err();

        assert!(err.to_string().contains("same length"));
        assert!(!dir.path().join("line.png").exists());
    }

    #[tokio::test]
    async fn bar_chart_rejects_empty_data_and_missing_colors() {
        let service = ChartServiceImpl::new("sans-serif".to_string());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bar.png");

        let err = service
            .generate_bar_chart(&frame(), vec![], vec![(0, 0, 0)], ValueFormat::Currency, None, &path)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("empty data"));

        let err = service
            .generate_horizontal_bar_chart(
                &frame(),
                vec![LabeledValue::new("a".to_string(), 1.0)],
                vec![],
                ValueFormat::Currency,
                &path,
            )
            .await
            .unwrap_err();
        assert!(err.to_string().contains("colour"));
    }

    #[tokio::test]
    async fn heatmap_without_hours_is_rejected() {
        let service = ChartServiceImpl::new("sans-serif".to_string());
        let dir = tempfile::tempdir().unwrap();
        let days: Vec<String> = vec!["Monday".to_string()];
        let heatmap = HourlyHeatmap::new(days, vec![], vec![vec![]]);

        let err = service
            .generate_heatmap(&frame(), heatmap, "Revenue ($)", &dir.path().join("heat.png"))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("empty data"));
    }

    #[tokio::test]
    async fn pie_with_zero_total_is_rejected() {
        let service = ChartServiceImpl::new("sans-serif".to_string());
        let dir = tempfile::tempdir().unwrap();

        let err = service
            .generate_pie_bar_chart(
                "Pie",
                vec![LabeledCount::new("Male".to_string(), 0)],
                &frame(),
                vec![LabeledValue::new("Male".to_string(), 0.0)],
                vec![(1, 2, 3)],
                &dir.path().join("pie.png"),
            )
            .await
            .unwrap_err();

        assert!(err.to_string().contains("zero"));
    }

    fn assert_png_written(path: &Path) {
        let metadata = std::fs::metadata(path).unwrap();
        assert!(metadata.is_file());
        assert!(metadata.len() > 0);
    }

    fn bars(values: &[(&str, f64)]) -> Vec<LabeledValue> {
        values
            .iter()
            .map(|(label, value)| LabeledValue::new(label.to_string(), *value))
            .collect()
    }

    #[tokio::test]
    async fn renders_bar_chart_with_reference_line() {
        let service = ChartServiceImpl::new("sans-serif".to_string());
        let dir = tempfile::tempdir().unwrap();
        /* parent directory is created on demand */
        let path = dir.path().join("nested").join("bar.png");

        service
            .generate_bar_chart(
                &frame(),
                bars(&[("Beauty", 66.67), ("Clothing", 50.0), ("Electronics", 23.33)]),
                vec![(0x27, 0xAE, 0x60), (0xE6, 0x7E, 0x22)],
                ValueFormat::Percent,
                Some(ReferenceLine::new(46.67, "Avg: 46.7%".to_string())),
                &path,
            )
            .await
            .unwrap();

        assert_png_written(&path);
    }

    #[tokio::test]
    async fn renders_horizontal_bar_chart() {
        let service = ChartServiceImpl::new("sans-serif".to_string());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hbar.png");

        service
            .generate_horizontal_bar_chart(
                &frame(),
                bars(&[("Customer 4", 50.0), ("Customer 1", 600.0), ("Customer 2", 1300.0)]),
                sample_palette(Palette::Rocket, 3),
                ValueFormat::Currency,
                &path,
            )
            .await
            .unwrap();

        assert_png_written(&path);
    }

    #[tokio::test]
    async fn renders_line_chart_with_extremes() {
        let service = ChartServiceImpl::new("sans-serif".to_string());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("line.png");

        service
            .generate_line_chart(
                &frame(),
                vec!["Jan".to_string(), "Feb".to_string(), "Mar".to_string()],
                vec![400.0, 700.0, 1050.0],
                true,
                &path,
            )
            .await
            .unwrap();

        assert_png_written(&path);
    }

    #[tokio::test]
    async fn renders_heatmap_with_colorbar() {
        let service = ChartServiceImpl::new("sans-serif".to_string());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("heat.png");

        let days: Vec<String> = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
            .iter()
            .map(|d| d.to_string())
            .collect();
        let mut cells: Vec<Vec<f64>> = vec![vec![0.0; 2]; 7];
        cells[0] = vec![100.0, 1000.0];
        cells[5] = vec![0.0, 200.0];
        let heatmap = HourlyHeatmap::new(days, vec![9, 18], cells);

        service
            .generate_heatmap(&frame(), heatmap, "Revenue ($)", &path)
            .await
            .unwrap();

        assert_png_written(&path);
    }

    #[tokio::test]
    async fn renders_pie_and_bar_panels() {
        let service = ChartServiceImpl::new("sans-serif".to_string());
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pie.png");

        service
            .generate_pie_bar_chart(
                "Transaction Distribution by Gender",
                vec![
                    LabeledCount::new("Male".to_string(), 4),
                    LabeledCount::new("Female".to_string(), 2),
                ],
                &ChartFrame::new(
                    "Total Revenue by Gender".to_string(),
                    "Gender".to_string(),
                    "Revenue ($)".to_string(),
                    (1000, 500),
                ),
                bars(&[("Female", 600.0), ("Male", 1550.0)]),
                vec![(0xFF, 0x6B, 0x9D), (0x4E, 0xCD, 0xC4)],
                &path,
            )
            .await
            .unwrap();

        assert_png_written(&path);
    }
}
