// ABOUTME: Checkbox facet filters over the already-fetched job set
// ABOUTME: Derives option lists and applies the exact-match predicate

use std::collections::BTreeSet;

use crate::remote::models::Job;

/// Employment types always offered in the type checkbox group.
pub const JOB_TYPES: [&str; 4] = ["Full-time", "Part-time", "Contract", "Executive"];

/// The fixed employment types, followed by any other checked type.
pub fn type_choices(checked: &BTreeSet<String>) -> Vec<String> {
    let mut choices: Vec<String> = JOB_TYPES.iter().map(|t| t.to_string()).collect();
    for value in checked {
        if !choices.contains(value) {
            choices.push(value.clone());
        }
    }
    choices
}

/// Checked values for the three checkbox groups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetSelection {
    pub types: BTreeSet<String>,
    pub locations: BTreeSet<String>,
    pub companies: BTreeSet<String>,
}

impl FacetSelection {
    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.locations.is_empty() && self.companies.is_empty()
    }

    pub fn clear(&mut self) {
        self.types.clear();
        self.locations.clear();
        self.companies.clear();
    }

    /// An empty group accepts everything; groups are AND-ed together.
    pub fn matches(&self, job: &Job) -> bool {
        (self.types.is_empty() || self.types.contains(job.job_type()))
            && (self.locations.is_empty() || self.locations.contains(&job.location))
            && (self.companies.is_empty() || self.companies.contains(&job.company))
    }

    pub fn apply(&self, jobs: &[Job]) -> Vec<Job> {
        jobs.iter().filter(|job| self.matches(job)).cloned().collect()
    }
}

/// Sets or clears `value` in a checkbox group.
pub fn set_checked(group: &mut BTreeSet<String>, value: &str, checked: bool) {
    if checked {
        group.insert(value.to_string());
    } else {
        group.remove(value);
    }
}

/// Distinct non-empty values in first-occurrence order, capped at `limit`.
pub fn distinct_values<'a>(values: impl Iterator<Item = &'a str>, limit: usize) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values.filter(|v| !v.is_empty()) {
        if seen.len() == limit {
            break;
        }
        if !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub locations: Vec<String>,
    pub companies: Vec<String>,
}

impl FilterOptions {
    pub fn from_jobs(jobs: &[Job], limit: usize) -> Self {
        Self {
            locations: distinct_values(jobs.iter().map(|j| j.location.as_str()), limit),
            companies: distinct_values(jobs.iter().map(|j| j.company.as_str()), limit),
        }
    }
}
