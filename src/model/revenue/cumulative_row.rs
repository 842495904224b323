use crate::common::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct CumulativeRow {
    pub order_id: i64,
    pub total_price: Decimal,
    pub cumulative: Decimal,
}
