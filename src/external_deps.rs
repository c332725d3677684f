pub use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
    Record,
};
pub use once_cell::sync::Lazy as once_lazy;
pub use sqlx::{
    FromRow,
    mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions},
};
