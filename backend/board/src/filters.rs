//! # Filters
//!
//! Technical-area filter selection.
//!
//! - [`Filters`] is the full set of known areas paired with an on/off flag, in first-seen order
//! - [`ActiveFilters`] is derived from it on demand, never stored next to it
//! - Rebuilding from a refreshed job list keeps the flags of areas that still exist
use std::collections::BTreeSet;

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::models::Job;

pub type ActiveFilters = BTreeSet<String>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    entries: Vec<(String, bool)>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, active)| *active)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Inserts or overwrites, keeping the original position of an existing key.
    pub fn set(&mut self, name: &str, active: bool) {
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some((_, value)) => *value = active,
            None => self.entries.push((name.to_string(), active)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.entries.iter().map(|(key, active)| (key.as_str(), *active))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for Filters {
    fn from_iter<I: IntoIterator<Item = (S, bool)>>(iter: I) -> Self {
        let mut filters = Filters::new();
        for (name, active) in iter {
            let name: String = name.into();
            filters.set(&name, active);
        }
        filters
    }
}

impl Serialize for Filters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, active) in &self.entries {
            map.serialize_entry(key, active)?;
        }
        map.end()
    }
}

pub fn build_active_filter_set(filters: &Filters) -> ActiveFilters {
    filters
        .iter()
        .filter(|(_, active)| *active)
        .map(|(name, _)| name.to_string())
        .collect()
}

/// Jobs whose technical area is active. An empty active set filters nothing.
pub fn filter_jobs<'a>(jobs: &'a [Job], active: &ActiveFilters) -> Vec<&'a Job> {
    if active.is_empty() {
        return jobs.iter().collect();
    }

    jobs.iter()
        .filter(|job| active.contains(&job.tech_area))
        .collect()
}

pub fn build_filters_from_jobs(jobs: &[Job], existing: &Filters) -> Filters {
    let mut filters = Filters::new();

    for job in jobs {
        let tech_area = &job.tech_area;

        if tech_area.is_empty() || filters.contains(tech_area) {
            continue;
        }

        filters
            .entries
            .push((tech_area.clone(), existing.get(tech_area).unwrap_or(false)));
    }

    filters
}

/// Flips `name`, or `None` if it is not a known filter.
pub fn toggle_filter(filters: &Filters, name: &str) -> Option<Filters> {
    let current = filters.get(name)?;

    let mut toggled = filters.clone();
    toggled.set(name, !current);

    Some(toggled)
}

/// Sets every known filter to its membership in `active`. Keys are never added or removed.
pub fn reconcile_filters(filters: &Filters, active: &ActiveFilters) -> Filters {
    Filters {
        entries: filters
            .keys()
            .map(|name| (name.to_string(), active.contains(name)))
            .collect(),
    }
}
