use crate::common::*;

use crate::model::configs::{
    chart_config::*, database_config::*, dataset_config::*, html_config::*, system_config::*,
};

use crate::utils_modules::io_utils::*;

use crate::env_configuration::env_config::*;

static TOTAL_CONFIG: once_lazy<TotalConfig> = once_lazy::new(initialize_server_config);

#[doc = "Function to initialize Server configuration information instances"]
pub fn initialize_server_config() -> TotalConfig {
    info!("initialize_server_config() START!");
    TotalConfig::new()
}

#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct TotalConfig {
    pub database: DatabaseConfig,
    pub system: SystemConfig,
    #[serde(default)]
    pub chart: ChartConfig,
    pub dataset: DatasetConfig,
    #[serde(default)]
    pub html: HtmlConfig,
}

#[doc = "SQLite config 정보"]
pub fn get_database_config_info() -> &'static DatabaseConfig {
    &TOTAL_CONFIG.database
}

#[doc = "system 설정 정보"]
pub fn get_system_config_info() -> &'static SystemConfig {
    &TOTAL_CONFIG.system
}

#[doc = "차트 이미지 설정 정보"]
pub fn get_chart_config_info() -> &'static ChartConfig {
    &TOTAL_CONFIG.chart
}

#[doc = "데이터셋 경로 설정 정보"]
pub fn get_dataset_config_info() -> &'static DatasetConfig {
    &TOTAL_CONFIG.dataset
}

#[doc = "HTML 템플릿 설정 정보"]
pub fn get_html_config_info() -> &'static HtmlConfig {
    &TOTAL_CONFIG.html
}

impl TotalConfig {
    fn new() -> Self {
        match read_toml_from_file::<TotalConfig>(&SERVER_CONFIG_PATH) {
            Ok(config) => config,
            Err(e) => {
                let err_msg: &str = "Failed to convert the data from SERVER_CONFIG_PATH into the TotalConfig structure.";
                error!("[TotalConfig->new] {} {:?}", err_msg, e);
                std::process::exit(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::report_type::ReportType;

    #[test]
    fn bundled_server_config_parses() {
        let path: String = format!(
            "{}/config/server_config.toml",
            env!("CARGO_MANIFEST_DIR")
        );

        let config: TotalConfig =
            read_toml_from_file::<TotalConfig>(&path).expect("bundled config must parse");

        assert_eq!(config.database().db_path(), "db/lesson.db");
        assert_eq!(
            config.system().reports(),
            &vec![
                ReportType::CumulativeRevenue,
                ReportType::EmployeeRevenue,
                ReportType::WindAnalysis,
                ReportType::GdpDashboard,
            ]
        );
        assert_eq!(config.dataset().default_country(), "Canada");
    }

    #[test]
    fn chart_and_html_sections_fall_back_to_defaults() {
        let raw: &str = r#"
            [database]
            db_path = "lesson.db"

            [system]
            output_dir = "out"
            reports = ["cumulative_revenue"]

            [dataset]
            wind_csv_path = "wind.csv"
            gapminder_csv_path = "gapminder.csv"
            default_country = "Canada"
        "#;

        let config: TotalConfig = toml::from_str(raw).expect("minimal config must parse");

        assert_eq!(*config.chart().width(), 1800);
        assert_eq!(*config.chart().height(), 1200);
        assert_eq!(
            config.html().figure_template_path(),
            "html/figure_template.html"
        );
    }
}
