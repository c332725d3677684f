use crate::common::*;

#[doc = "One group of an aggregate: its key rendered as a label and its summed value"]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct LabeledValue {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct LabeledCount {
    pub label: String,
    pub count: usize,
}
