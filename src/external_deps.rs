pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
    Record,
};
pub use once_cell::sync::Lazy as once_lazy;
pub use regex::Regex;
pub use rusqlite::{
    Connection, OpenFlags, Row,
    types::{FromSql, FromSqlError, FromSqlResult, ValueRef},
};
pub use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
