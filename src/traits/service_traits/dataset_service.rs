use crate::common::*;

use crate::model::dataset::{gapminder_record::*, wind_record::*};

#[async_trait]
pub trait DatasetService: Send + Sync {
    async fn load_wind_records(&self, csv_path: &str) -> anyhow::Result<Vec<WindRawRecord>>;
    fn clean_strength(&self, raw_records: &[WindRawRecord]) -> anyhow::Result<Vec<WindRecord>>;
    async fn load_gapminder_records(&self, csv_path: &str)
        -> anyhow::Result<Vec<GapminderRecord>>;
}
