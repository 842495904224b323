pub mod chart_service;
pub mod dataset_service;
pub mod html_chart_service;
pub mod query_service;
pub mod view_service;
