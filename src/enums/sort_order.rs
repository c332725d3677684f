#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    #[doc = r#"
        Stable sort of `items` by the `f64` returned from `key`.
        Equal keys keep their incoming order, NaN sorts last in both directions.
    "#]
    pub fn sort_by_value<T, F>(&self, items: &mut [T], key: F)
    where
        F: Fn(&T) -> f64,
    {
        items.sort_by(|a, b| {
            let (ka, kb) = (key(a), key(b));
            match (ka.is_nan(), kb.is_nan()) {
                (true, true) => std::cmp::Ordering::Equal,
                (true, false) => std::cmp::Ordering::Greater,
                (false, true) => std::cmp::Ordering::Less,
                (false, false) => match self {
                    SortOrder::Asc => ka.total_cmp(&kb),
                    SortOrder::Desc => kb.total_cmp(&ka),
                },
            }
        });
    }
}
