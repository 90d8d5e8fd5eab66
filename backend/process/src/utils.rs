use board::{Job, counts::TechAreaCounts, filters::Filters};

pub fn format_job(job: &Job) -> String {
    let Job {
        company,
        title,
        location,
        tech_area,
        url,
    } = job;

    format!("{company} | {title} | {location} | {tech_area} | {url}")
}

pub fn format_filters(filters: &Filters) -> String {
    filters
        .iter()
        .map(|(name, active)| {
            let mark = if active { "x" } else { " " };
            format!("[{mark}] {name}")
        })
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn format_counts(counts: &TechAreaCounts) -> String {
    counts
        .iter()
        .map(|(area, count)| format!("{area}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}
