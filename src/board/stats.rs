// ABOUTME: Summary statistics derived from the current job set
// ABOUTME: Total count, most common location and trending category

use std::collections::HashMap;

use crate::remote::models::{Job, DEFAULT_CATEGORY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub top_location: Option<String>,
    pub trending_category: String,
}

impl Stats {
    pub fn from_jobs(jobs: &[Job]) -> Self {
        let top_location = most_frequent(jobs.iter().map(|j| j.location.as_str()));
        let trending_category = most_frequent(jobs.iter().filter_map(|j| j.category.as_deref()))
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        Self {
            total: jobs.len(),
            top_location,
            trending_category,
        }
    }
}

/// Mode of the non-empty values.
///
/// Sorts every occurrence by its frequency with a stable sort and takes the
/// last element, so among equally frequent values the one that occurs last in
/// the input wins: `[A, B, B, A]` yields `A`, `[A, B]` yields `B`.
pub fn most_frequent<'a>(values: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut occurrences: Vec<&str> = values.filter(|v| !v.is_empty()).collect();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in &occurrences {
        *counts.entry(*value).or_insert(0) += 1;
    }

    occurrences.sort_by_key(|v| counts[v]);
    occurrences.last().map(|v| v.to_string())
}
