use crate::common::*;

use crate::utils_modules::{sql_utils::*, traits::*};

#[doc = r#"
    주문 한 건의 합계 금액.

    저장소가 집계 결과로 SQL NULL 을 돌려주면 `total_price` 는 `None` 이 되고,
    누적 합계 계산에서는 이 행을 0으로 보지 않고 거부한다.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct OrderRevenueRow {
    pub order_id: i64,
    #[serde(default)]
    pub total_price: Option<Decimal>,
}

impl FromSqlRow for OrderRevenueRow {
    fn from_sql_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let order_id: i64 = row.get("order_id")?;
        let total_price: Option<Decimal> = row
            .get::<_, Option<SqlDecimal>>("total_price")?
            .map(Decimal::from);

        Ok(OrderRevenueRow::new(order_id, total_price))
    }
}
