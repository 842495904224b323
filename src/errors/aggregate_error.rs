use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregateError {
    #[error("row for order {order_id} is missing required field '{field}'")]
    MissingField { field: &'static str, order_id: i64 },

    #[error("running total overflowed at order {order_id}")]
    Overflow { order_id: i64 },
}
