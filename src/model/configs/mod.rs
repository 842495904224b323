pub mod chart_config;
pub mod database_config;
pub mod dataset_config;
pub mod html_config;
pub mod system_config;
pub mod total_config;
