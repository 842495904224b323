pub mod revenue_summary;
