pub mod age_group;
pub mod palette;
pub mod sort_order;
pub mod value_format;
