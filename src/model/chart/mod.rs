pub mod bar_chart_params;
pub mod dashboard_page;
pub mod figure_spec;
pub mod line_chart_params;
