use crate::common::*;

use crate::dto::labeled_value::*;

#[doc = r#"
    # Fields
    * `counts` - transactions per gender, most frequent first
    * `revenue` - summed sale value per gender, gender ascending
"#]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct GenderBreakdown {
    pub counts: Vec<LabeledCount>,
    pub revenue: Vec<LabeledValue>,
}
