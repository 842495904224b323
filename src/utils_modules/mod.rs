pub mod console_utils;
pub mod cumulative_utils;
pub mod io_utils;
pub mod logger_utils;
pub mod number_utils;
pub mod sql_utils;
pub mod traits;
