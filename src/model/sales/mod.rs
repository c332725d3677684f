pub mod sales_record;
pub mod transaction_row;
