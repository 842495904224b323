use crate::common::*;

use crate::utils_modules::{sql_utils::*, traits::*};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct EmployeeRevenueRow {
    pub last_name: String,
    pub revenue: Decimal,
}

impl FromSqlRow for EmployeeRevenueRow {
    fn from_sql_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let last_name: String = row.get("last_name")?;
        let revenue: SqlDecimal = row.get("revenue")?;

        Ok(EmployeeRevenueRow::new(last_name, revenue.into()))
    }
}
