use crate::common::*;

#[derive(Debug, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct DatasetConfig {
    pub wind_csv_path: String,
    pub gapminder_csv_path: String,
    pub default_country: String,
}
