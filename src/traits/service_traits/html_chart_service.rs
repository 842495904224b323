use crate::common::*;

use crate::model::chart::{dashboard_page::*, figure_spec::*};

#[async_trait]
pub trait HtmlChartService: Send + Sync {
    async fn write_figure_html(
        &self,
        title: &str,
        figure: &FigureSpec,
        output_path: &Path,
    ) -> anyhow::Result<()>;
    async fn write_dashboard_html(
        &self,
        page: &DashboardPage,
        output_path: &Path,
    ) -> anyhow::Result<()>;
    async fn verify_html(&self, output_path: &Path, marker: &str) -> anyhow::Result<bool>;
}
