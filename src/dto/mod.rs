pub mod category_profit;
pub mod chart_frame;
pub mod chart_image_info;
pub mod customer_spend;
pub mod gender_breakdown;
pub mod hourly_heatmap;
pub mod labeled_value;
pub mod monthly_sales;
pub mod sales_summary;
