use crate::common::*;

#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct ChartImageInfo {
    pub chart_name: String,
    pub pic_path: PathBuf,
}
