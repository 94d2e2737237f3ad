//! Category Tally
//!
//! 分類結果のカテゴリ別集計。

use std::collections::BTreeMap;

use super::stack::Category;

/// Per-category counts of classified packages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTally {
    counts: BTreeMap<Category, usize>,
}

impl CategoryTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, category: Category) {
        *self.counts.entry(category).or_insert(0) += 1;
    }

    /// Count for one category (zero when never recorded)
    pub fn count(&self, category: Category) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Every category with its count, least restrictive first
    pub fn iter(&self) -> impl Iterator<Item = (Category, usize)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.count(c)))
    }
}

impl FromIterator<Category> for CategoryTally {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut tally = Self::new();
        for category in iter {
            tally.record(category);
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tally() {
        let tally = CategoryTally::new();
        assert_eq!(tally.total(), 0);
        assert!(tally.iter().all(|(_, n)| n == 0));
    }

    #[test]
    fn test_record_and_count() {
        let tally: CategoryTally = [
            Category::Special,
            Category::Standard,
            Category::Special,
            Category::Rejected,
        ]
        .into_iter()
        .collect();

        assert_eq!(tally.count(Category::Standard), 1);
        assert_eq!(tally.count(Category::Special), 2);
        assert_eq!(tally.count(Category::Rejected), 1);
        assert_eq!(tally.total(), 4);

        let order: Vec<Category> = tally.iter().map(|(c, _)| c).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }
}
