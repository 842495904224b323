use crate::common::*;

use crate::traits::{repository_traits::sqlite_repository::*, service_traits::query_service::*};

use crate::model::revenue::{employee_revenue_row::*, order_revenue_row::*};

/* 주문별 총 금액 (order_id 오름차순) */
const ORDER_TOTALS_SQL: &str = r#"
    SELECT
        o.order_id,
        SUM(p.price * l.quantity) AS total_price
    FROM orders o
    JOIN line_items l ON o.order_id = l.order_id
    JOIN products p ON l.product_id = p.product_id
    GROUP BY o.order_id
    ORDER BY o.order_id
"#;

/* 직원별 매출 */
const EMPLOYEE_REVENUE_SQL: &str = r#"
    SELECT
        e.last_name,
        SUM(p.price * l.quantity) AS revenue
    FROM employees e
    JOIN orders o ON e.employee_id = o.employee_id
    JOIN line_items l ON o.order_id = l.order_id
    JOIN products p ON l.product_id = p.product_id
    GROUP BY e.employee_id
    ORDER BY e.employee_id
"#;

#[derive(Debug, new)]
pub struct QueryServiceImpl<R: SqliteRepository> {
    sqlite_conn: R,
}

impl<R: SqliteRepository> QueryServiceImpl<R> {
    #[doc = r#"
        쿼리 실패를 값 없음(`None`)으로 바꿔주는 함수.

        실패 내용은 호출한 작업 이름과 함께 로그로 남기고, 호출부는 "no data" 메시지를 출력한다.
    "#]
    fn or_absent<T>(&self, caller: &str, result: anyhow::Result<Vec<T>>) -> Option<Vec<T>> {
        match result {
            Ok(rows) => Some(rows),
            Err(e) => {
                error!("[QueryServiceImpl->{}] Database error: {:?}", caller, e);
                None
            }
        }
    }
}

#[async_trait]
impl<R: SqliteRepository> QueryService for QueryServiceImpl<R> {
    fn db_path(&self) -> &Path {
        self.sqlite_conn.db_path()
    }

    async fn list_tables(&self) -> Option<Vec<String>> {
        let result: anyhow::Result<Vec<String>> = self.sqlite_conn.list_tables().await;
        self.or_absent("list_tables", result)
    }

    async fn load_order_totals(&self) -> Option<Vec<OrderRevenueRow>> {
        let result: anyhow::Result<Vec<OrderRevenueRow>> = self
            .sqlite_conn
            .fetch_rows::<OrderRevenueRow>(ORDER_TOTALS_SQL)
            .await;

        self.or_absent("load_order_totals", result)
    }

    async fn load_employee_revenue(&self) -> Option<Vec<EmployeeRevenueRow>> {
        let result: anyhow::Result<Vec<EmployeeRevenueRow>> = self
            .sqlite_conn
            .fetch_rows::<EmployeeRevenueRow>(EMPLOYEE_REVENUE_SQL)
            .await;

        self.or_absent("load_employee_revenue", result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::configs::database_config::DatabaseConfig;
    use crate::repository::sqlite_repository_impl::SqliteRepositoryImpl;
    use rust_decimal_macros::dec;

    const LESSON_SCHEMA: &str = r#"
        CREATE TABLE employees (employee_id INTEGER PRIMARY KEY, first_name TEXT, last_name TEXT);
        CREATE TABLE products (product_id INTEGER PRIMARY KEY, product_name TEXT, price REAL);
        CREATE TABLE orders (order_id INTEGER PRIMARY KEY, customer_id INTEGER, employee_id INTEGER);
        CREATE TABLE line_items (
            line_item_id INTEGER PRIMARY KEY,
            order_id INTEGER,
            product_id INTEGER,
            quantity INTEGER
        );

        INSERT INTO employees VALUES (1, 'Ana', 'Ito'), (2, 'Ben', 'Kowalski'), (3, 'Cy', 'Idle');
        INSERT INTO products VALUES (1, 'Widget', 2.50), (2, 'Gadget', 10.00), (3, 'Gizmo', 0.10);
        INSERT INTO orders VALUES (3, 100, 2), (1, 101, 1), (2, 102, 1);
        INSERT INTO line_items VALUES
            (1, 1, 1, 4),
            (2, 1, 2, 1),
            (3, 2, 3, 3),
            (4, 3, 2, 2),
            (5, 3, 1, 2);
    "#;

    fn service_for(path: &Path) -> QueryServiceImpl<SqliteRepositoryImpl> {
        let config = DatabaseConfig {
            db_path: path.to_string_lossy().to_string(),
        };
        QueryServiceImpl::new(SqliteRepositoryImpl::new(&config))
    }

    fn lesson_db(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("lesson.db");
        Connection::open(&path)
            .unwrap()
            .execute_batch(LESSON_SCHEMA)
            .unwrap();
        path
    }

    #[tokio::test]
    async fn order_totals_are_grouped_and_ordered_by_order_id() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_for(&lesson_db(&dir));

        let rows = service.load_order_totals().await.unwrap();

        assert_eq!(
            rows,
            vec![
                OrderRevenueRow::new(1, Some(dec!(20.00))),
                OrderRevenueRow::new(2, Some(dec!(0.30))),
                OrderRevenueRow::new(3, Some(dec!(25.00))),
            ]
        );
    }

    #[tokio::test]
    async fn employee_revenue_skips_employees_without_orders() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_for(&lesson_db(&dir));

        let rows = service.load_employee_revenue().await.unwrap();

        assert_eq!(
            rows,
            vec![
                EmployeeRevenueRow::new("Ito".to_string(), dec!(20.30)),
                EmployeeRevenueRow::new("Kowalski".to_string(), dec!(25.00)),
            ]
        );
    }

    #[tokio::test]
    async fn tables_are_listed() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_for(&lesson_db(&dir));

        let tables = service.list_tables().await.unwrap();

        assert_eq!(tables, vec!["employees", "line_items", "orders", "products"]);
    }

    #[tokio::test]
    async fn empty_tables_give_empty_result_not_absence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.db");
        Connection::open(&path)
            .unwrap()
            .execute_batch(
                "CREATE TABLE orders (order_id INTEGER, employee_id INTEGER);
                 CREATE TABLE line_items (order_id INTEGER, product_id INTEGER, quantity INTEGER);
                 CREATE TABLE products (product_id INTEGER, price REAL);",
            )
            .unwrap();

        let rows = service_for(&path).load_order_totals().await;

        assert_eq!(rows, Some(Vec::new()));
    }

    #[tokio::test]
    async fn missing_database_gives_absence() {
        let dir = tempfile::tempdir().unwrap();
        let service = service_for(&dir.path().join("missing.db"));

        assert!(service.load_order_totals().await.is_none());
        assert!(service.load_employee_revenue().await.is_none());
    }

    #[tokio::test]
    async fn missing_table_gives_absence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.db");
        Connection::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE orders (order_id INTEGER);")
            .unwrap();

        assert!(service_for(&path).load_order_totals().await.is_none());
    }
}
