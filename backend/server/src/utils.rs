use board::{
    Job,
    counts::count_jobs_by_tech_area,
    filters::{Filters, build_active_filter_set, build_filters_from_jobs, filter_jobs, reconcile_filters},
    freshness::{UPDATE_INTERVAL, time_ago},
    location::{Location, read_active_filters, sync_filters},
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{error::AppError, state::Sheet};

pub const BOARD_PATH: &str = "/jobs";

#[derive(Serialize, Debug)]
pub struct FilterEntry {
    pub name: String,
    pub active: bool,
    pub count: usize,
}

#[derive(Serialize, Debug)]
pub struct BoardView {
    pub jobs: Vec<Job>,
    pub filters: Vec<FilterEntry>,
    pub total: usize,
    pub location: String,
}

#[derive(Serialize, Debug)]
pub struct StatusView {
    pub is_loading: bool,
    pub error: Option<String>,
    pub jobs: usize,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_ago: Option<String>,
    pub refresh_after_secs: u64,
}

/// Board location for a raw request query, always rooted at [`BOARD_PATH`].
pub fn board_location(query: Option<&str>) -> Result<Location, AppError> {
    let location = match query.filter(|query| !query.is_empty()) {
        Some(query) => Location::parse(&format!("{BOARD_PATH}?{query}"))?,
        None => Location::parse(BOARD_PATH)?,
    };

    Ok(location)
}

/// Filters for `jobs` with the selection carried by `location`.
pub fn current_filters(jobs: &[Job], location: &Location) -> Filters {
    let filters = build_filters_from_jobs(jobs, &Filters::new());

    reconcile_filters(&filters, &read_active_filters(location))
}

pub fn build_view(jobs: &[Job], filters: &Filters, mut location: Location) -> BoardView {
    sync_filters(&mut location, filters);

    let active = build_active_filter_set(filters);
    let counts = count_jobs_by_tech_area(jobs);

    BoardView {
        jobs: filter_jobs(jobs, &active).into_iter().cloned().collect(),
        filters: filters
            .iter()
            .map(|(name, active)| FilterEntry {
                name: name.to_string(),
                active,
                count: counts.get(name).copied().unwrap_or(0),
            })
            .collect(),
        total: jobs.len(),
        location: location.to_string(),
    }
}

pub fn build_status(sheet: &Sheet, now: DateTime<Utc>) -> StatusView {
    StatusView {
        is_loading: sheet.fetch.is_loading,
        error: sheet.fetch.error.as_ref().map(ToString::to_string),
        jobs: sheet.jobs.len(),
        updated_at: sheet.updated_at,
        updated_ago: sheet.updated_at.map(|updated_at| time_ago(updated_at, now)),
        refresh_after_secs: UPDATE_INTERVAL.as_secs(),
    }
}

#[cfg(test)]
mod tests {
    use board::Job;

    use super::*;

    fn job(company: &str, tech_area: &str) -> Job {
        Job {
            company: company.to_string(),
            title: "Engineer".to_string(),
            location: "Remote".to_string(),
            tech_area: tech_area.to_string(),
            url: format!("https://jobs.example/{company}"),
        }
    }

    #[test]
    fn test_board_location() {
        assert_eq!(board_location(None).unwrap().to_string(), "/jobs");
        assert_eq!(board_location(Some("")).unwrap().to_string(), "/jobs");
        assert_eq!(
            board_location(Some("filters=ML")).unwrap().to_string(),
            "/jobs?filters=ML"
        );
    }

    #[test]
    fn test_unknown_filters_are_dropped_from_location() {
        let jobs = [job("a", "Backend"), job("b", "ML")];
        let location = board_location(Some("filters=Gone,ML")).unwrap();

        let filters = current_filters(&jobs, &location);
        let view = build_view(&jobs, &filters, location);

        assert_eq!(view.location, "/jobs?filters=ML");
        assert_eq!(view.jobs, [job("b", "ML")]);
        assert_eq!(view.total, 2);
    }

    #[test]
    fn test_view_counts_follow_filter_order() {
        let jobs = [job("a", "ML"), job("b", "Backend"), job("c", "ML")];
        let location = board_location(None).unwrap();

        let view = build_view(&jobs, &current_filters(&jobs, &location), location);
        let entries: Vec<_> = view
            .filters
            .iter()
            .map(|entry| (entry.name.as_str(), entry.active, entry.count))
            .collect();

        assert_eq!(entries, [("ML", false, 2), ("Backend", false, 1)]);
        assert_eq!(view.jobs.len(), 3);
    }

    #[test]
    fn test_status_without_fetch() {
        let status = build_status(&Sheet::default(), Utc::now());

        assert!(!status.is_loading);
        assert_eq!(status.error, None);
        assert_eq!(status.updated_ago, None);
        assert_eq!(status.refresh_after_secs, 60);
    }
}
