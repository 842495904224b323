use crate::common::*;

use crate::model::chart::{bar_chart_params::*, line_chart_params::*};

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Generate a line chart and save it as a PNG image
        # Arguments
        * `params` - Title, points, axis descriptions, legend, optional corner annotation and output path
    "]
    async fn generate_line_chart(&self, params: LineChartParams) -> anyhow::Result<()>;

    #[doc = "
        Generate a bar chart with one bar per label and save it as a PNG image
        # Arguments
        * `params` - Title, bar labels and values, axis descriptions, legend and output path
    "]
    async fn generate_bar_chart(&self, params: BarChartParams) -> anyhow::Result<()>;
}
