use crate::common::*;

use crate::model::revenue::{employee_revenue_row::*, order_revenue_row::*};

#[async_trait]
pub trait QueryService {
    fn db_path(&self) -> &Path;
    async fn list_tables(&self) -> Option<Vec<String>>;
    async fn load_order_totals(&self) -> Option<Vec<OrderRevenueRow>>;
    async fn load_employee_revenue(&self) -> Option<Vec<EmployeeRevenueRow>>;
}
