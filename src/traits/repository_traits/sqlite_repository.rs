use crate::common::*;

use crate::utils_modules::traits::*;

#[async_trait]
pub trait SqliteRepository: Send + Sync {
    fn db_path(&self) -> &Path;
    async fn fetch_rows<T>(&self, sql: &'static str) -> Result<Vec<T>, anyhow::Error>
    where
        T: FromSqlRow + Send + 'static;
    async fn list_tables(&self) -> Result<Vec<String>, anyhow::Error>;
}
