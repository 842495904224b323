use crate::common::*;

use crate::model::dataset::{gapminder_record::*, wind_record::*};

use crate::traits::service_traits::dataset_service::*;

use crate::utils_modules::io_utils::*;

/* "0-1" -> "0", "6+" -> "6", "2.5 m/s" -> "2.5" */
static STRENGTH_PREFIX: once_lazy<Result<Regex, regex::Error>> =
    once_lazy::new(|| Regex::new(r"^\s*([0-9]+(?:\.[0-9]+)?)\D.*$"));

#[derive(Debug, Clone, Default, new)]
pub struct DatasetServiceImpl;

impl DatasetServiceImpl {
    #[doc = r#"
        바람 세기 구간 문자열을 앞쪽 숫자로 정리하는 함수.

        숫자 뒤에 숫자가 아닌 문자가 오면 앞쪽 숫자만 취한다 ("0-1" -> 0, "6+" -> 6).
        그런 접미사가 없으면 그대로 파싱한다 ("7" -> 7.0).
    "#]
    fn parse_strength(&self, strength: &str) -> anyhow::Result<f64> {
        let pattern: &Regex = STRENGTH_PREFIX.as_ref().map_err(|e| {
            anyhow!(
                "[DatasetServiceImpl->parse_strength] Invalid strength pattern: {}",
                e
            )
        })?;

        let cleaned: &str = pattern
            .captures(strength)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .unwrap_or(strength);

        cleaned.trim().parse::<f64>().map_err(|e| {
            anyhow!(
                "[DatasetServiceImpl->parse_strength] Cannot convert strength '{}' to float: {}",
                strength,
                e
            )
        })
    }
}

#[async_trait]
impl DatasetService for DatasetServiceImpl {
    async fn load_wind_records(&self, csv_path: &str) -> anyhow::Result<Vec<WindRawRecord>> {
        let records: Vec<WindRawRecord> = read_csv_from_file::<WindRawRecord>(csv_path)?;
        info!(
            "[DatasetServiceImpl->load_wind_records] {} rows loaded from {}",
            records.len(),
            csv_path
        );
        Ok(records)
    }

    fn clean_strength(&self, raw_records: &[WindRawRecord]) -> anyhow::Result<Vec<WindRecord>> {
        raw_records
            .iter()
            .map(|raw| {
                let strength: f64 = self.parse_strength(&raw.strength)?;
                Ok(WindRecord::new(
                    raw.direction.clone(),
                    strength,
                    raw.frequency,
                ))
            })
            .collect()
    }

    async fn load_gapminder_records(
        &self,
        csv_path: &str,
    ) -> anyhow::Result<Vec<GapminderRecord>> {
        let records: Vec<GapminderRecord> = read_csv_from_file::<GapminderRecord>(csv_path)?;
        info!(
            "[DatasetServiceImpl->load_gapminder_records] {} rows loaded from {}",
            records.len(),
            csv_path
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(direction: &str, strength: &str, frequency: f64) -> WindRawRecord {
        WindRawRecord::new(direction.to_string(), strength.to_string(), frequency)
    }

    #[test]
    fn strength_buckets_reduce_to_leading_number() {
        let service = DatasetServiceImpl::new();

        assert_eq!(service.parse_strength("0-1").unwrap(), 0.0);
        assert_eq!(service.parse_strength("6+").unwrap(), 6.0);
        assert_eq!(service.parse_strength(" 2.5-3").unwrap(), 2.5);
        assert_eq!(service.parse_strength("7").unwrap(), 7.0);
    }

    #[test]
    fn unparseable_strength_is_an_error() {
        let service = DatasetServiceImpl::new();

        let err = service
            .clean_strength(&[raw("N", "0-1", 0.5), raw("N", "calm", 0.1)])
            .unwrap_err();

        assert!(err.to_string().contains("calm"));
    }

    #[test]
    fn cleaning_keeps_row_order_and_other_columns() {
        let service = DatasetServiceImpl::new();

        let cleaned = service
            .clean_strength(&[raw("N", "0-1", 0.5), raw("NNE", "1-2", 0.6)])
            .unwrap();

        assert_eq!(
            cleaned,
            vec![
                WindRecord::new("N".to_string(), 0.0, 0.5),
                WindRecord::new("NNE".to_string(), 1.0, 0.6),
            ]
        );
    }

    #[tokio::test]
    async fn wind_and_gapminder_csv_files_load() {
        let dir = tempfile::tempdir().unwrap();
        let wind_path = dir.path().join("wind.csv");
        let gap_path = dir.path().join("gapminder.csv");
        fs::write(&wind_path, "direction,strength,frequency\nN,0-1,0.5\nE,6+,0.9\n").unwrap();
        fs::write(
            &gap_path,
            "country,continent,year,lifeExp,pop,gdpPercap,iso_alpha,iso_num\n\
             Canada,Americas,1952,68.75,14785584,11367.16112,CAN,124\n",
        )
        .unwrap();

        let service = DatasetServiceImpl::new();

        let wind = service
            .load_wind_records(wind_path.to_str().unwrap())
            .await
            .unwrap();
        let gap = service
            .load_gapminder_records(gap_path.to_str().unwrap())
            .await
            .unwrap();

        assert_eq!(wind, vec![raw("N", "0-1", 0.5), raw("E", "6+", 0.9)]);
        assert_eq!(gap.len(), 1);
        assert_eq!(gap[0].country, "Canada");
        assert_eq!(gap[0].year, 1952);
        assert_eq!(gap[0].gdp_percap, 11367.16112);
    }
}
