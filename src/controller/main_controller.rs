use crate::common::*;

use crate::dto::revenue_summary::*;

use crate::enums::report_type::*;

use crate::model::{
    chart::{bar_chart_params::*, dashboard_page::*, figure_spec::*, line_chart_params::*},
    configs::{dataset_config::*, total_config::*},
    dataset::{gapminder_record::*, wind_record::*},
    revenue::{cumulative_row::*, employee_revenue_row::*, order_revenue_row::*},
};

use crate::service::view_service_impl::WIND_FIGURE_TITLE;

use crate::traits::service_traits::{
    chart_service::*, dataset_service::*, html_chart_service::*, query_service::*,
    view_service::*,
};

use crate::utils_modules::{console_utils::*, cumulative_utils::*, number_utils::*};

const HTML_MARKER: &str = "Plotly.newPlot";
const PREVIEW_ROWS: usize = 5;
const DATASET_PREVIEW_ROWS: usize = 10;

#[derive(Debug, new)]
pub struct MainController<
    Q: QueryService,
    C: ChartService,
    H: HtmlChartService,
    D: DatasetService,
    V: ViewService,
> {
    query_service: Q,
    chart_service: C,
    html_chart_service: H,
    dataset_service: D,
    view_service: V,
}

impl<Q, C, H, D, V> MainController<Q, C, H, D, V>
where
    Q: QueryService + Sync,
    C: ChartService,
    H: HtmlChartService,
    D: DatasetService,
    V: ViewService,
{
    #[doc = r#"
        설정 파일에 나열된 리포트를 순서대로 한 번씩 실행한다.

        1. `[system] reports` 목록을 순회
        2. 각 리포트는 산출물을 `[system] output_dir` 아래 고정 파일명으로 저장
        3. 한 리포트가 실패하면 오류를 로깅하고 다음 리포트로 진행

        # Returns
        * `anyhow::Result<()>` - 모든 리포트를 시도한 뒤 Ok(())
    "#]
    pub async fn main_task(&self) -> anyhow::Result<()> {
        let system_config = get_system_config_info();
        let output_dir: &Path = Path::new(system_config.output_dir());

        for report_type in system_config.reports() {
            let output_path: PathBuf = output_dir.join(report_type.output_file_name());

            info!("[MainController->main_task] {:?} START", report_type);

            let result: anyhow::Result<()> = match report_type {
                ReportType::CumulativeRevenue => self.cumulative_revenue_task(&output_path).await,
                ReportType::EmployeeRevenue => self.employee_revenue_task(&output_path).await,
                ReportType::WindAnalysis => {
                    self.wind_analysis_task(get_dataset_config_info(), &output_path)
                        .await
                }
                ReportType::GdpDashboard => {
                    self.gdp_dashboard_task(get_dataset_config_info(), &output_path)
                        .await
                }
            };

            match result {
                Ok(_) => info!("[MainController->main_task] {:?} END", report_type),
                Err(e) => {
                    error!(
                        "[ERROR][MainController->main_task] {:?} failed: {:?}",
                        report_type, e
                    );
                    println!("{:?} failed: {}", report_type, e);
                }
            }

            println!();
        }

        Ok(())
    }

    #[doc = "주문별 누적 매출 라인 차트"]
    async fn cumulative_revenue_task(&self, output_path: &Path) -> anyhow::Result<()> {
        println!("Loading order data for cumulative revenue analysis...");

        let order_rows: Vec<OrderRevenueRow> = match self.query_service.load_order_totals().await
        {
            Some(rows) if !rows.is_empty() => rows,
            _ => {
                println!("No data retrieved from database");
                return Ok(());
            }
        };

        println!("\nFound {} orders", order_rows.len());
        println!("\nFirst {} orders:", PREVIEW_ROWS);
        println!(
            "{}",
            format_table(
                &["order_id", "total_price"],
                &order_rows
                    .iter()
                    .take(PREVIEW_ROWS)
                    .map(|row| {
                        vec![
                            row.order_id.to_string(),
                            row.total_price
                                .map(|p| p.to_string())
                                .unwrap_or_else(|| "NULL".to_string()),
                        ]
                    })
                    .collect::<Vec<Vec<String>>>(),
                0
            )
        );

        let cumulative_rows: Vec<CumulativeRow> = compute_cumulative(&order_rows)
            .context("[MainController->cumulative_revenue_task] Failed to compute cumulative revenue")?;

        println!("\nData with cumulative revenue:");
        println!(
            "{}",
            format_table(
                &["order_id", "total_price", "cumulative"],
                &cumulative_rows
                    .iter()
                    .take(PREVIEW_ROWS)
                    .map(|row| {
                        vec![
                            row.order_id.to_string(),
                            row.total_price.to_string(),
                            row.cumulative.to_string(),
                        ]
                    })
                    .collect::<Vec<Vec<String>>>(),
                0
            )
        );

        let summary: RevenueSummary = RevenueSummary::calculate(&cumulative_rows).ok_or_else(
            || anyhow!("[MainController->cumulative_revenue_task] No rows to summarize"),
        )?;

        println!(
            "\nTotal revenue: {}",
            format_currency(*summary.total_revenue())
        );
        println!(
            "Average order value: {}",
            format_currency(*summary.average_order_value())
        );

        println!("\nCreating cumulative revenue line plot...");

        let points: Vec<(f64, f64)> = cumulative_rows
            .iter()
            .map(|row| {
                let y: f64 = row.cumulative.to_f64().ok_or_else(|| {
                    anyhow!(
                        "[MainController->cumulative_revenue_task] Cumulative value of order {} is not representable as f64",
                        row.order_id
                    )
                })?;
                Ok((row.order_id as f64, y))
            })
            .collect::<anyhow::Result<Vec<(f64, f64)>>>()?;

        let params: LineChartParams = LineChartParams::new(
            "Cumulative Revenue Over Orders".to_string(),
            points,
            "Order ID".to_string(),
            "Cumulative Revenue ($)".to_string(),
            "Cumulative Revenue".to_string(),
            Some(format!(
                "Total Revenue: {}",
                format_currency(*summary.total_revenue())
            )),
            output_path.to_path_buf(),
        );

        self.chart_service.generate_line_chart(params).await?;

        println!("Chart saved as '{}'", output_path.display());

        Ok(())
    }

    #[doc = "직원별 매출 막대 차트"]
    async fn employee_revenue_task(&self, output_path: &Path) -> anyhow::Result<()> {
        println!("Loading employee revenue data...");

        let db_path: &Path = self.query_service.db_path();
        println!("Database path: {}", db_path.display());
        println!("File exists: {}", db_path.exists());

        if let Some(tables) = self.query_service.list_tables().await {
            println!("Available tables: {:?}", tables);
        }

        let employee_rows: Vec<EmployeeRevenueRow> =
            match self.query_service.load_employee_revenue().await {
                Some(rows) if !rows.is_empty() => rows,
                _ => {
                    println!("No data retrieved from database");
                    return Ok(());
                }
            };

        println!("\nEmployee Revenue Data:");
        println!(
            "{}",
            format_table(
                &["last_name", "revenue"],
                &employee_rows
                    .iter()
                    .map(|row| vec![row.last_name.clone(), row.revenue.to_string()])
                    .collect::<Vec<Vec<String>>>(),
                0
            )
        );

        println!("\nCreating bar chart...");

        let values: Vec<f64> = employee_rows
            .iter()
            .map(|row| {
                row.revenue.to_f64().ok_or_else(|| {
                    anyhow!(
                        "[MainController->employee_revenue_task] Revenue of '{}' is not representable as f64",
                        row.last_name
                    )
                })
            })
            .collect::<anyhow::Result<Vec<f64>>>()?;

        let params: BarChartParams = BarChartParams::new(
            "Employee Revenue Performance".to_string(),
            employee_rows.iter().map(|row| row.last_name.clone()).collect(),
            values,
            "Employee Last Name".to_string(),
            "Revenue ($)".to_string(),
            "Revenue".to_string(),
            output_path.to_path_buf(),
        );

        self.chart_service.generate_bar_chart(params).await?;

        println!("Chart saved as '{}'", output_path.display());

        Ok(())
    }

    #[doc = "바람 세기/빈도 산점도 (인터랙티브 HTML)"]
    async fn wind_analysis_task(
        &self,
        dataset_config: &DatasetConfig,
        output_path: &Path,
    ) -> anyhow::Result<()> {
        let raw_records: Vec<WindRawRecord> = self
            .dataset_service
            .load_wind_records(dataset_config.wind_csv_path())
            .await?;

        let raw_table = |rows: &[WindRawRecord]| -> Vec<Vec<String>> {
            rows.iter()
                .map(|r| {
                    vec![
                        r.direction.clone(),
                        r.strength.clone(),
                        r.frequency.to_string(),
                    ]
                })
                .collect()
        };

        let tail_start: usize = raw_records.len().saturating_sub(DATASET_PREVIEW_ROWS);

        println!("First {} rows:", DATASET_PREVIEW_ROWS);
        println!(
            "{}",
            format_table(
                &["direction", "strength", "frequency"],
                &raw_table(&raw_records[..raw_records.len().min(DATASET_PREVIEW_ROWS)]),
                0
            )
        );
        println!("\nLast {} rows:", DATASET_PREVIEW_ROWS);
        println!(
            "{}",
            format_table(
                &["direction", "strength", "frequency"],
                &raw_table(&raw_records[tail_start..]),
                tail_start
            )
        );

        let records: Vec<WindRecord> = self.dataset_service.clean_strength(&raw_records)?;

        let (strength_min, strength_max) = records
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
                (lo.min(r.strength), hi.max(r.strength))
            });

        println!(
            "\nCleaned {} rows: strength parsed to f64 (range {} to {})",
            records.len(),
            strength_min,
            strength_max
        );

        let figure: FigureSpec = self.view_service.build_wind_figure(&records);

        self.html_chart_service
            .write_figure_html(WIND_FIGURE_TITLE, &figure, output_path)
            .await?;

        let verified: bool = self
            .html_chart_service
            .verify_html(output_path, HTML_MARKER)
            .await?;

        println!("Verification passed: {}", verified);
        println!("Done! Open {} in your browser.", output_path.display());

        Ok(())
    }

    #[doc = "국가별 1인당 GDP 대시보드 (인터랙티브 HTML)"]
    async fn gdp_dashboard_task(
        &self,
        dataset_config: &DatasetConfig,
        output_path: &Path,
    ) -> anyhow::Result<()> {
        let records: Vec<GapminderRecord> = self
            .dataset_service
            .load_gapminder_records(dataset_config.gapminder_csv_path())
            .await?;

        let page: DashboardPage = match self
            .view_service
            .build_country_dashboard(&records, dataset_config.default_country())
        {
            Some(page) => page,
            None => {
                println!("No data in the gapminder dataset");
                return Ok(());
            }
        };

        println!(
            "Dashboard with {} countries, default selection '{}'",
            page.options.len(),
            page.selected
        );

        self.html_chart_service
            .write_dashboard_html(&page, output_path)
            .await?;

        let verified: bool = self
            .html_chart_service
            .verify_html(output_path, HTML_MARKER)
            .await?;

        println!("Verification passed: {}", verified);
        println!("Done! Open {} in your browser.", output_path.display());

        Ok(())
    }
}
