pub mod report_type;
