use crate::common::*;
use crate::model::chart::{bar_chart_params::*, line_chart_params::*};
use crate::traits::service_traits::chart_service::*;
use crate::utils_modules::{io_utils::*, number_utils::*};
use plotters::prelude::*;

const LINE_COLOR: RGBColor = RGBColor(46, 139, 87);
const MARKER_COLOR: RGBColor = RGBColor(255, 99, 71);
const ANNOTATION_COLOR: RGBColor = RGBColor(173, 216, 230);
const BAR_PALETTE: [RGBColor; 5] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
];

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl {
    width: u32,
    height: u32,
}

impl ChartServiceImpl {
    #[doc = "Helper function to determine Y-axis range with padding"]
    fn calculate_y_range(&self, values: &[f64]) -> (f64, f64) {
        if values.is_empty() {
            return (0.0, 100.0);
        }

        let min_val: f64 = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max_val: f64 = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let padding: f64 = ((max_val - min_val) * 0.1).max(1.0);

        /* 음수(환불)가 없으면 0 아래로 내려가지 않게 */
        let y_min: f64 = if min_val >= 0.0 {
            (min_val - padding).max(0.0)
        } else {
            min_val - padding
        };
        let y_max: f64 = max_val + padding;

        (y_min, y_max)
    }

    #[doc = "Helper function to determine X-axis range; a single point still gets a visible span"]
    fn calculate_x_range(&self, values: &[f64]) -> (f64, f64) {
        if values.is_empty() {
            return (0.0, 1.0);
        }

        let min_val: f64 = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max_val: f64 = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if max_val - min_val < f64::EPSILON {
            return (min_val - 1.0, max_val + 1.0);
        }

        let padding: f64 = (max_val - min_val) * 0.02;
        (min_val - padding, max_val + padding)
    }

    #[doc = "Helper function for bar charts: the range always contains the zero baseline"]
    fn calculate_bar_range(&self, values: &[f64]) -> (f64, f64) {
        let low: f64 = values.iter().copied().fold(0.0, f64::min);
        let high: f64 = values.iter().copied().fold(0.0, f64::max);
        let span: f64 = (high - low).max(1.0);

        let y_min: f64 = if low < 0.0 { low - span * 0.1 } else { 0.0 };
        let y_max: f64 = high + span * 0.1;

        (y_min, y_max)
    }

    #[doc = r#"
        막대 차트용 x 축 슬롯 범위.

        plotters 의 정수 범위는 끝 값을 포함하므로 막대 n 개에는 `0..n-1` 을 쓴다.
        막대가 하나뿐이면 한 점짜리 범위가 붕괴되므로 `0..1` 로 둔다.
    "#]
    fn bar_slot_range(&self, bar_count: usize) -> std::ops::Range<usize> {
        0..bar_count.saturating_sub(1).max(1)
    }

    fn validate_values(&self, caller: &str, values: &[f64]) -> anyhow::Result<()> {
        if values.is_empty() {
            return Err(anyhow!(
                "[ChartServiceImpl->{}] Cannot generate chart with empty data",
                caller
            ));
        }

        if values.iter().any(|v| !v.is_finite()) {
            return Err(anyhow!(
                "[ChartServiceImpl->{}] Chart data contains NaN or infinite values",
                caller
            ));
        }

        Ok(())
    }
}

#[doc = "주문 ID 축 라벨: 정수 위치에만 표시하고 중간 눈금은 비워둔다"]
fn format_order_tick(x: f64) -> String {
    if (x - x.round()).abs() < 1e-9 {
        format!("{:.0}", x)
    } else {
        String::new()
    }
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn generate_line_chart(&self, params: LineChartParams) -> anyhow::Result<()> {
        let xs: Vec<f64> = params.points.iter().map(|(x, _)| *x).collect();
        let ys: Vec<f64> = params.points.iter().map(|(_, y)| *y).collect();

        self.validate_values("generate_line_chart", &xs)?;
        self.validate_values("generate_line_chart", &ys)?;

        ensure_parent_dir(&params.output_path)?;

        let (x_min, x_max) = self.calculate_x_range(&xs);
        let x_tick_count: usize = xs.len().clamp(2, 10);
        let (y_min, y_max) = self.calculate_y_range(&ys);
        let (width, height) = (self.width, self.height);
        let output_path: PathBuf = params.output_path.clone();

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                let LineChartParams {
                    title,
                    points,
                    x_label,
                    y_label,
                    legend,
                    annotation,
                    output_path,
                } = params;

                let root = BitMapBackend::new(&output_path, (width, height)).into_drawing_area();
                root.fill(&WHITE)?;

                let mut chart = ChartBuilder::on(&root)
                    .caption(
                        &title,
                        ("sans-serif", 40).into_font().style(FontStyle::Bold),
                    )
                    .margin(30)
                    .x_label_area_size(70)
                    .y_label_area_size(130)
                    .build_cartesian_2d(x_min..x_max, y_min..y_max)?;

                chart
                    .configure_mesh()
                    .x_desc(&x_label)
                    .y_desc(&y_label)
                    .axis_desc_style(("sans-serif", 24).into_font().style(FontStyle::Bold))
                    .x_labels(x_tick_count)
                    .y_labels(10)
                    .light_line_style(BLACK.mix(0.05))
                    .bold_line_style(BLACK.mix(0.3))
                    .x_label_style(("sans-serif", 18))
                    .y_label_style(("sans-serif", 18))
                    .x_label_formatter(&|x| format_order_tick(*x))
                    .y_label_formatter(&|y| format_axis_dollars(*y))
                    .draw()?;

                chart
                    .draw_series(LineSeries::new(
                        points.iter().copied(),
                        LINE_COLOR.stroke_width(3),
                    ))?
                    .label(legend.as_str())
                    .legend(|(x, y)| {
                        PathElement::new(vec![(x, y), (x + 20, y)], LINE_COLOR.stroke_width(3))
                    });

                chart.draw_series(
                    points
                        .iter()
                        .map(|&(x, y)| Circle::new((x, y), 4, MARKER_COLOR.filled())),
                )?;

                chart
                    .configure_series_labels()
                    .position(SeriesLabelPosition::UpperLeft)
                    .background_style(WHITE.mix(0.8))
                    .border_style(BLACK.mix(0.3))
                    .label_font(("sans-serif", 20))
                    .draw()?;

                /* 우측 상단 주석 박스 */
                if let Some(text) = annotation {
                    let (x_pixels, y_pixels) = chart.plotting_area().get_pixel_range();
                    let style: TextStyle = ("sans-serif", 24).into_font().color(&BLACK);
                    let (text_w, text_h) = root.estimate_text_size(&text, &style)?;
                    let pad: i32 = 10;

                    let right: i32 = x_pixels.end - 20;
                    let top: i32 = y_pixels.start + 20;
                    let left: i32 = right - text_w as i32 - 2 * pad;
                    let bottom: i32 = top + text_h as i32 + 2 * pad;

                    root.draw(&Rectangle::new(
                        [(left, top), (right, bottom)],
                        ANNOTATION_COLOR.mix(0.7).filled(),
                    ))?;
                    root.draw(&Text::new(text, (left + pad, top + pad), style))?;
                }

                root.present()?;
                Ok(())
            });

        let drawing_result: Result<(), anyhow::Error> = handle.await.context(
            "[ChartServiceImpl->generate_line_chart] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result.context("[ChartServiceImpl->generate_line_chart] drawing/present failed")?;

        info!("Line chart generated successfully: {:?}", output_path);

        Ok(())
    }

    async fn generate_bar_chart(&self, params: BarChartParams) -> anyhow::Result<()> {
        if params.labels.len() != params.values.len() {
            return Err(anyhow!(
                "[ChartServiceImpl->generate_bar_chart] Labels and values must have the same length: {} vs {}",
                params.labels.len(),
                params.values.len()
            ));
        }

        self.validate_values("generate_bar_chart", &params.values)?;

        ensure_parent_dir(&params.output_path)?;

        let (y_min, y_max) = self.calculate_bar_range(&params.values);
        let slot_range: std::ops::Range<usize> = self.bar_slot_range(params.labels.len());
        let (width, height) = (self.width, self.height);
        let output_path: PathBuf = params.output_path.clone();

        let handle: tokio::task::JoinHandle<Result<(), anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                let BarChartParams {
                    title,
                    labels,
                    values,
                    x_label,
                    y_label,
                    legend,
                    output_path,
                } = params;

                let root = BitMapBackend::new(&output_path, (width, height)).into_drawing_area();
                root.fill(&WHITE)?;

                let mut chart = ChartBuilder::on(&root)
                    .caption(
                        &title,
                        ("sans-serif", 40).into_font().style(FontStyle::Bold),
                    )
                    .margin(30)
                    .x_label_area_size(90)
                    .y_label_area_size(130)
                    .build_cartesian_2d(slot_range.into_segmented(), y_min..y_max)?;

                chart
                    .configure_mesh()
                    .disable_x_mesh()
                    .x_desc(&x_label)
                    .y_desc(&y_label)
                    .axis_desc_style(("sans-serif", 24).into_font().style(FontStyle::Bold))
                    .x_labels(labels.len())
                    .y_labels(10)
                    .light_line_style(BLACK.mix(0.05))
                    .bold_line_style(BLACK.mix(0.3))
                    .x_label_style(("sans-serif", 18))
                    .y_label_style(("sans-serif", 18))
                    .x_label_formatter(&|x| match x {
                        SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
                        _ => String::new(),
                    })
                    .y_label_formatter(&|y| format_axis_dollars(*y))
                    .draw()?;

                chart
                    .draw_series(
                        Histogram::vertical(&chart)
                            .style_func(|x, _| {
                                let idx: usize = match x {
                                    SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => *i,
                                    SegmentValue::Last => 0,
                                };
                                BAR_PALETTE[idx % BAR_PALETTE.len()].filled()
                            })
                            .margin(12)
                            .data(values.iter().enumerate().map(|(i, v)| (i, *v))),
                    )?
                    .label(legend.as_str())
                    .legend(|(x, y)| {
                        Rectangle::new([(x, y - 6), (x + 14, y + 6)], BAR_PALETTE[0].filled())
                    });

                /* 막대 테두리 */
                chart.draw_series(
                    Histogram::vertical(&chart)
                        .style(BLACK.stroke_width(1))
                        .margin(12)
                        .data(values.iter().enumerate().map(|(i, v)| (i, *v))),
                )?;

                chart
                    .configure_series_labels()
                    .position(SeriesLabelPosition::UpperRight)
                    .background_style(WHITE.mix(0.8))
                    .border_style(BLACK.mix(0.3))
                    .label_font(("sans-serif", 20))
                    .draw()?;

                root.present()?;
                Ok(())
            });

        let drawing_result: Result<(), anyhow::Error> = handle.await.context(
            "[ChartServiceImpl->generate_bar_chart] blocking task join failed (panic/cancelled)",
        )?;

        drawing_result.context("[ChartServiceImpl->generate_bar_chart] drawing/present failed")?;

        info!("Bar chart generated successfully: {:?}", output_path);

        Ok(())
    }
}
