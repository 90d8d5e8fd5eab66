use crate::models::{Job, NUMBER_OF_HEADER_ROWS, SpreadsheetResponse};

pub fn parse_jobs(data: Option<&SpreadsheetResponse>) -> Vec<Job> {
    let Some(values) = data.and_then(|response| response.values.as_ref()) else {
        return Vec::new();
    };

    values
        .iter()
        .skip(NUMBER_OF_HEADER_ROWS)
        .filter_map(|row| Job::from_row(row))
        .collect()
}
