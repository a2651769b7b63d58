//! Derived views over the dataset: per-year release counts and the
//! per-year brand leaderboard. Pure functions; the dataset is never
//! mutated and nothing here is cached — the aggregate scene recomputes
//! from scratch on every activation, which is fine at this data size.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::dataset::PhoneRecord;

/// Releases attributed to one brand within a single year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BrandCount {
    pub brand: String,
    pub count: usize,
}

/// One point of the release-count line chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct YearAggregate {
    pub year: i32,
    pub count: usize,
    /// Top 3 brands for the year, descending by count, ties kept in
    /// first-seen order.
    pub top_brands: Vec<BrandCount>,
}

/// Group records by release year, ascending, with the brand leaderboard
/// attached to each year. Counts always sum to `records.len()`.
pub fn count_by_year(records: &[PhoneRecord]) -> Vec<YearAggregate> {
    let mut by_year: BTreeMap<i32, usize> = BTreeMap::new();
    for record in records {
        *by_year.entry(record.release_year).or_insert(0) += 1;
    }

    by_year
        .into_iter()
        .map(|(year, count)| YearAggregate {
            year,
            count,
            top_brands: top_brands(records, year, 3),
        })
        .collect()
}

/// Rank the brands releasing phones in `year`, descending by count,
/// truncated to `k`. The sort is stable, so brands with equal counts keep
/// their first-encountered order.
pub fn top_brands(records: &[PhoneRecord], year: i32, k: usize) -> Vec<BrandCount> {
    let mut counts: Vec<BrandCount> = Vec::new();
    for record in records.iter().filter(|r| r.release_year == year) {
        match counts.iter_mut().find(|entry| entry.brand == record.brand) {
            Some(entry) => entry.count += 1,
            None => counts.push(BrandCount {
                brand: record.brand.clone(),
                count: 1,
            }),
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(k);
    counts
}

/// The aggregate carrying the maximum count. Ties resolve to the earliest
/// year because the input is year-ascending and the comparison is strict.
pub fn peak_year(aggregates: &[YearAggregate]) -> Option<&YearAggregate> {
    let max = aggregates.iter().map(|a| a.count).max()?;
    aggregates.iter().find(|a| a.count == max)
}
