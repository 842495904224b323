use crate::common::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    CumulativeRevenue,
    EmployeeRevenue,
    WindAnalysis,
    GdpDashboard,
}

impl ReportType {
    #[doc = "Fixed artifact file name each report writes into the output directory"]
    pub fn output_file_name(&self) -> &'static str {
        match self {
            ReportType::CumulativeRevenue => "cumulative_revenue.png",
            ReportType::EmployeeRevenue => "employee_revenue_chart.png",
            ReportType::WindAnalysis => "wind.html",
            ReportType::GdpDashboard => "gdp_dashboard.html",
        }
    }
}
