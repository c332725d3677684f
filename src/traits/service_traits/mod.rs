pub mod analytics_service;
pub mod chart_service;
pub mod query_service;
pub mod summary_service;
pub mod visualization_service;
