pub mod cumulative_row;
pub mod employee_revenue_row;
pub mod order_revenue_row;
