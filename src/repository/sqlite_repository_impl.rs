use crate::common::*;

use crate::model::configs::database_config::*;

use crate::traits::repository_traits::sqlite_repository::*;

use crate::utils_modules::traits::*;

const LIST_TABLES_SQL: &str =
    "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name";

#[derive(Debug, Clone)]
pub struct SqliteRepositoryImpl {
    db_path: PathBuf,
}

impl SqliteRepositoryImpl {
    pub fn new(db_config: &DatabaseConfig) -> Self {
        SqliteRepositoryImpl {
            db_path: PathBuf::from(db_config.db_path()),
        }
    }

    #[doc = r#"
        읽기 전용 쿼리 하나를 실행하고, 그 쿼리 동안만 커넥션을 유지하는 함수.

        커넥션은 blocking task 안에서 열리고 task 가 끝나면 성공/실패와 관계없이 drop 된다.
        DB 파일이 없으면 빈 DB 를 새로 만들지 않고 오류를 반환한다.
    "#]
    async fn execute_query<T>(&self, sql: &'static str) -> Result<Vec<T>, anyhow::Error>
    where
        T: FromSqlRow + Send + 'static,
    {
        let db_path: PathBuf = self.db_path.clone();

        let handle: tokio::task::JoinHandle<Result<Vec<T>, anyhow::Error>> =
            tokio::task::spawn_blocking(move || {
                let conn: Connection = Connection::open_with_flags(
                    &db_path,
                    OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
                )
                .with_context(|| {
                    format!(
                        "[SqliteRepositoryImpl->execute_query] Failed to open database {:?}",
                        db_path
                    )
                })?;

                let mut stmt: rusqlite::Statement<'_> = conn.prepare(sql).context(
                    "[SqliteRepositoryImpl->execute_query] Failed to prepare statement",
                )?;

                let rows: Vec<T> = stmt
                    .query_map([], |row| T::from_sql_row(row))?
                    .collect::<rusqlite::Result<Vec<T>>>()
                    .context("[SqliteRepositoryImpl->execute_query] Failed to read result set")?;

                Ok(rows)
            });

        handle.await.context(
            "[SqliteRepositoryImpl->execute_query] blocking task join failed (panic/cancelled)",
        )?
    }
}

#[async_trait]
impl SqliteRepository for SqliteRepositoryImpl {
    fn db_path(&self) -> &Path {
        &self.db_path
    }

    #[doc = "Function that EXECUTES sqlite queries - select"]
    async fn fetch_rows<T>(&self, sql: &'static str) -> Result<Vec<T>, anyhow::Error>
    where
        T: FromSqlRow + Send + 'static,
    {
        self.execute_query::<T>(sql).await
    }

    #[doc = "Function that lists the user tables of the database"]
    async fn list_tables(&self) -> Result<Vec<String>, anyhow::Error> {
        self.execute_query::<String>(LIST_TABLES_SQL).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository_for(path: &Path) -> SqliteRepositoryImpl {
        SqliteRepositoryImpl {
            db_path: path.to_path_buf(),
        }
    }

    #[tokio::test]
    async fn lists_user_tables_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tables.db");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch("CREATE TABLE orders (id INTEGER); CREATE TABLE employees (id INTEGER);")
            .unwrap();
        drop(conn);

        let tables = repository_for(&path).list_tables().await.unwrap();

        assert_eq!(tables, vec!["employees".to_string(), "orders".to_string()]);
    }

    #[tokio::test]
    async fn missing_database_file_is_not_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.db");

        let result = repository_for(&path).list_tables().await;

        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn bad_sql_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.db");
        Connection::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE t (x INTEGER);")
            .unwrap();

        let result = repository_for(&path)
            .fetch_rows::<String>("SELECT name FROM no_such_table")
            .await;

        assert!(result.is_err());
    }
}
