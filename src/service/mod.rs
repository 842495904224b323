pub mod chart_service_impl;
pub mod dataset_service_impl;
pub mod html_chart_service_impl;
pub mod query_service_impl;
pub mod view_service_impl;
