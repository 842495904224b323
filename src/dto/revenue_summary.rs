use crate::common::*;

use crate::model::revenue::cumulative_row::*;

#[doc = r#"
    누적 매출 계산 후 출력되는 요약 통계

    # Fields
    * `order_count` - 주문 수
    * `total_revenue` - 전체 주문 합계 (마지막 누적값과 같다)
    * `average_order_value` - `total_revenue / order_count`
"#]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters, new)]
#[getset(get = "pub")]
pub struct RevenueSummary {
    pub order_count: usize,
    pub total_revenue: Decimal,
    pub average_order_value: Decimal,
}

impl RevenueSummary {
    pub fn calculate(rows: &[CumulativeRow]) -> Option<Self> {
        let last: &CumulativeRow = rows.last()?;
        let order_count: usize = rows.len();
        let total_revenue: Decimal = last.cumulative;
        let average_order_value: Decimal = total_revenue / Decimal::from(order_count);

        Some(RevenueSummary::new(
            order_count,
            total_revenue,
            average_order_value,
        ))
    }
}
