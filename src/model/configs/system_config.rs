use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
#[serde(default)]
pub struct SystemConfig {
    pub output_dir: String,
    pub top_customer_count: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            output_dir: "visuals".to_string(),
            top_customer_count: 10,
        }
    }
}
