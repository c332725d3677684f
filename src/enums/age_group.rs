use crate::common::*;

#[doc = r#"
    Age bucket with right-inclusive bins over (0, 100]:
    (0,25] → "18-25", (25,35] → "26-35", (35,45] → "36-45",
    (45,55] → "46-55", (55,65] → "56-65", (65,100] → "65+".
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AgeGroup {
    UpTo25,
    From26To35,
    From36To45,
    From46To55,
    From56To65,
    Over65,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 6] = [
        AgeGroup::UpTo25,
        AgeGroup::From26To35,
        AgeGroup::From36To45,
        AgeGroup::From46To55,
        AgeGroup::From56To65,
        AgeGroup::Over65,
    ];

    #[doc = "Bucket for `age`, `None` outside (0, 100]"]
    pub fn from_age(age: i64) -> Option<Self> {
        match age {
            1..=25 => Some(AgeGroup::UpTo25),
            26..=35 => Some(AgeGroup::From26To35),
            36..=45 => Some(AgeGroup::From36To45),
            46..=55 => Some(AgeGroup::From46To55),
            56..=65 => Some(AgeGroup::From56To65),
            66..=100 => Some(AgeGroup::Over65),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeGroup::UpTo25 => "18-25",
            AgeGroup::From26To35 => "26-35",
            AgeGroup::From36To45 => "36-45",
            AgeGroup::From46To55 => "46-55",
            AgeGroup::From56To65 => "56-65",
            AgeGroup::Over65 => "65+",
        }
    }
}

impl Display for AgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bin_edges_are_right_inclusive() {
        assert_eq!(AgeGroup::from_age(18), Some(AgeGroup::UpTo25));
        assert_eq!(AgeGroup::from_age(25), Some(AgeGroup::UpTo25));
        assert_eq!(AgeGroup::from_age(26), Some(AgeGroup::From26To35));
        assert_eq!(AgeGroup::from_age(35), Some(AgeGroup::From26To35));
        assert_eq!(AgeGroup::from_age(36), Some(AgeGroup::From36To45));
        assert_eq!(AgeGroup::from_age(45), Some(AgeGroup::From36To45));
        assert_eq!(AgeGroup::from_age(46), Some(AgeGroup::From46To55));
        assert_eq!(AgeGroup::from_age(55), Some(AgeGroup::From46To55));
        assert_eq!(AgeGroup::from_age(56), Some(AgeGroup::From56To65));
        assert_eq!(AgeGroup::from_age(65), Some(AgeGroup::From56To65));
        assert_eq!(AgeGroup::from_age(66), Some(AgeGroup::Over65));
        assert_eq!(AgeGroup::from_age(100), Some(AgeGroup::Over65));
    }

    #[test]
    fn ages_outside_bins_have_no_group() {
        assert_eq!(AgeGroup::from_age(0), None);
        assert_eq!(AgeGroup::from_age(-3), None);
        assert_eq!(AgeGroup::from_age(101), None);
    }

    #[test]
    fn labels_follow_bin_order() {
        let labels: Vec<String> = AgeGroup::ALL.iter().map(|g| g.to_string()).collect();

        assert_eq!(
            labels,
            vec!["18-25", "26-35", "36-45", "46-55", "56-65", "65+"]
        );
    }
}
