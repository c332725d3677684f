pub mod configs;
pub mod sales;
