pub mod analytics_service_impl;
pub mod chart_service_impl;
pub mod query_service_impl;
pub mod summary_service_impl;
pub mod visualization_service_impl;
