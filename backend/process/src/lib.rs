//! # Sheet Processing
//!
//! Command line view of the job board.
//!
//! ## Flow
//! 1. Load the sheet, either fetched from the values API or read from a saved response
//! 2. Parse jobs and derive the tech-area filters
//! 3. Seed the selection from the `filters` parameter of the given location
//! 4. Apply each `--toggle` in order, unknown names are reported and skipped
//! 5. Print the visible jobs, the filters, optionally the counts, and the resulting location
//!
//! ## Notes
//! - A failed fetch is reported as an error, nothing is printed for the board
//! - `--save` writes the fetched response so later runs can use `--file`
use std::time::Duration;

use anyhow::Result;
use board::{
    SpreadsheetResponse,
    counts::count_jobs_by_tech_area,
    filters::{Filters, build_active_filter_set, build_filters_from_jobs, filter_jobs, reconcile_filters, toggle_filter},
    location::{Location, read_active_filters, sync_filters},
    parse::parse_jobs,
    read_sheet,
    remote::{Fetch, client},
    write_sheet,
};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

pub mod models;
pub mod utils;

use models::{Options, Outcome, Source};
use utils::{format_counts, format_filters, format_job};

pub async fn run(options: Options, show_counts: bool) -> Result<()> {
    let sheet = load_sheet(&options.source).await?;

    if let Some(path) = &options.save {
        write_sheet(path, &sheet)?;
        info!("Saved sheet to {}", path.display());
    }

    let outcome = process_sheet(Some(&sheet), options.location, &options.toggles);

    for name in &outcome.unknown {
        warn!("Unknown filter, skipped: {name}");
    }

    println!("Filters: {}\n", format_filters(&outcome.filters));

    for job in &outcome.visible {
        println!("{}", format_job(job));
    }
    println!("\nShowing {} of {} jobs", outcome.visible.len(), outcome.total);

    if show_counts {
        println!("\n{}", format_counts(&outcome.counts));
    }

    println!("\nLocation: {}", outcome.location);

    Ok(())
}

pub async fn load_sheet(source: &Source) -> Result<SpreadsheetResponse> {
    match source {
        Source::File(path) => {
            info!("Reading sheet from {}", path.display());
            Ok(read_sheet(path)?)
        }
        Source::Remote(url) => fetch_sheet(url).await,
    }
}

async fn fetch_sheet(url: &str) -> Result<SpreadsheetResponse> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message("Fetching jobs");

    let mut fetch: Fetch<SpreadsheetResponse> = Fetch::default();
    fetch.fetch_sheet(&client(), url).await;

    if let Some(e) = fetch.error {
        pb.abandon_with_message("Failed");
        return Err(e.into());
    }

    pb.finish_with_message("Done");

    Ok(fetch.data.unwrap_or_default())
}

pub fn process_sheet(
    sheet: Option<&SpreadsheetResponse>,
    mut location: Location,
    toggles: &[String],
) -> Outcome {
    let jobs = parse_jobs(sheet);

    let mut filters = reconcile_filters(
        &build_filters_from_jobs(&jobs, &Filters::new()),
        &read_active_filters(&location),
    );

    let mut unknown = Vec::new();
    for name in toggles {
        match toggle_filter(&filters, name) {
            Some(toggled) => filters = toggled,
            None => unknown.push(name.clone()),
        }
    }

    sync_filters(&mut location, &filters);

    let active = build_active_filter_set(&filters);
    let visible = filter_jobs(&jobs, &active).into_iter().cloned().collect();

    Outcome {
        visible,
        total: jobs.len(),
        counts: count_jobs_by_tech_area(&jobs),
        filters,
        location,
        unknown,
    }
}
