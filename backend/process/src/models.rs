use std::path::PathBuf;

use board::{Job, counts::TechAreaCounts, filters::Filters, location::Location};

pub const DEFAULT_LOCATION: &str = "/";

pub enum Source {
    File(PathBuf),
    Remote(String),
}

pub struct Options {
    pub source: Source,
    pub location: Location,
    pub toggles: Vec<String>,
    pub save: Option<PathBuf>,
}

pub struct Outcome {
    pub visible: Vec<Job>,
    pub total: usize,
    pub filters: Filters,
    pub counts: TechAreaCounts,
    pub location: Location,
    pub unknown: Vec<String>,
}
