use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct ChartConfig {
    /* image size = figure inches * pixels_per_inch */
    pub pixels_per_inch: u32,
    pub font_family: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            pixels_per_inch: 100,
            font_family: "sans-serif".to_string(),
        }
    }
}

impl ChartConfig {
    #[doc = "Pixel size of a figure given in inches"]
    pub fn figure_size(&self, width_in: u32, height_in: u32) -> (u32, u32) {
        (
            width_in * self.pixels_per_inch,
            height_in * self.pixels_per_inch,
        )
    }
}
