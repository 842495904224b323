use crate::common::*;

use crate::enums::report_type::*;

#[derive(Debug, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct SystemConfig {
    pub output_dir: String,
    pub reports: Vec<ReportType>,
}
