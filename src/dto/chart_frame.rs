use crate::common::*;

#[doc = r#"
    Caption, axis descriptions and pixel size shared by every chart kind.

    # Fields
    * `title` - caption drawn above the plot
    * `x_desc` - X-axis description
    * `y_desc` - Y-axis description
    * `size` - image width and height in pixels
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct ChartFrame {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub size: (u32, u32),
}

#[doc = "Horizontal line drawn across a bar chart, with its legend text"]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct ReferenceLine {
    pub value: f64,
    pub legend: String,
}
