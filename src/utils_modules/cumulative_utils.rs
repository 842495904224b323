use crate::common::*;

use crate::errors::aggregate_error::*;

use crate::model::revenue::{cumulative_row::*, order_revenue_row::*};

#[doc = r#"
    주문별 합계 목록으로 누적 매출을 계산하는 함수.

    입력은 이미 `order_id` 순으로 정렬되어 있어야 하며, 여기서 다시 정렬하지 않는다.
    결과의 `i` 번째 원소는 `total_price[0] + ... + total_price[i]` 이다.

    1. 누적값을 들고 행을 한 번만 순회
    2. `total_price` 가 없는 행은 거부 (0으로 보지 않음)
    3. `checked_add` 로 더해서 decimal overflow 를 오류로 반환

    # Arguments
    * `rows` - `order_id` 오름차순으로 정렬된 주문 합계

    # Returns
    * `Vec<CumulativeRow>` - `rows` 와 같은 길이, 같은 순서
    * `AggregateError::MissingField` - `total_price` 가 없는 행이 있는 경우
    * `AggregateError::Overflow` - 누적값이 `Decimal` 범위를 벗어난 경우
"#]
pub fn compute_cumulative(rows: &[OrderRevenueRow]) -> Result<Vec<CumulativeRow>, AggregateError> {
    let mut running: Decimal = Decimal::ZERO;

    rows.iter()
        .map(|row| {
            let total_price: Decimal =
                row.total_price.ok_or(AggregateError::MissingField {
                    field: "total_price",
                    order_id: row.order_id,
                })?;

            running = running
                .checked_add(total_price)
                .ok_or(AggregateError::Overflow {
                    order_id: row.order_id,
                })?;

            Ok(CumulativeRow::new(row.order_id, total_price, running))
        })
        .collect()
}
