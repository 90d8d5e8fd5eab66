//! # Board
//!
//! Core of the job board: spreadsheet rows in, filtered jobs and a shareable URL out.
//!
//! ## Pipeline
//! 1. [`parse::parse_jobs`] turns the sheet grid into [`Job`]s, skipping the header rows
//! 2. [`filters::build_filters_from_jobs`] derives the tech-area filters, keeping prior selections
//! 3. [`filters::filter_jobs`] narrows the list to the active areas
//! 4. [`filters::toggle_filter`] flips one area
//! 5. [`location`] keeps the active areas in the `filters` query parameter
//! 6. [`counts::count_jobs_by_tech_area`] counts jobs per area
//!
//! Everything except [`remote`] and [`config`] is a pure function of its inputs.
use std::{fs, path::Path};

pub mod config;
pub mod counts;
pub mod filters;
pub mod freshness;
pub mod location;
pub mod models;
pub mod parse;
pub mod remote;

pub use models::{Job, SpreadsheetResponse};
use remote::FetchError;

/// Reads a saved spreadsheet response.
pub fn read_sheet(path: impl AsRef<Path>) -> Result<SpreadsheetResponse, FetchError> {
    let data = fs::read(path)?;

    Ok(serde_json::from_slice(&data)?)
}

pub fn write_sheet(path: impl AsRef<Path>, sheet: &SpreadsheetResponse) -> Result<(), FetchError> {
    fs::write(path, serde_json::to_vec_pretty(sheet)?)?;

    Ok(())
}
