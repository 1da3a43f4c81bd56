use crate::domain::model::{CategoryCounts, HeightCategory};

pub fn aggregate<'a, I>(categories: I) -> CategoryCounts
where
    I: IntoIterator<Item = &'a HeightCategory>,
{
    let mut counts = CategoryCounts::default();
    for category in categories {
        counts.increment(*category);
    }
    counts
}
