use serde::{Deserialize, Serialize};

pub const NUMBER_OF_HEADER_ROWS: usize = 5;
pub const NUMBER_OF_JOB_DETAILS: usize = 5;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SpreadsheetResponse {
    #[serde(default)]
    pub major_dimension: String,
    #[serde(default)]
    pub range: String,
    #[serde(default)]
    pub values: Option<Vec<Vec<String>>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub company: String,
    pub title: String,
    pub location: String,
    pub tech_area: String,
    pub url: String,
}

impl Job {
    /// Builds a job from a sheet row, `None` unless the row has exactly
    /// [`NUMBER_OF_JOB_DETAILS`] cells.
    pub fn from_row(row: &[String]) -> Option<Self> {
        match row {
            [company, title, location, tech_area, url] => Some(Self {
                company: company.clone(),
                title: title.clone(),
                location: location.clone(),
                tech_area: tech_area.clone(),
                url: url.clone(),
            }),
            _ => None,
        }
    }

    pub fn into_row(self) -> [String; NUMBER_OF_JOB_DETAILS] {
        [
            self.company,
            self.title,
            self.location,
            self.tech_area,
            self.url,
        ]
    }
}

impl From<[String; NUMBER_OF_JOB_DETAILS]> for Job {
    fn from([company, title, location, tech_area, url]: [String; NUMBER_OF_JOB_DETAILS]) -> Self {
        Self {
            company,
            title,
            location,
            tech_area,
            url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_from_row_exact_length() {
        let job = Job::from_row(&row(&["Acme", "Eng", "Remote", "Backend", "u1"])).unwrap();

        assert_eq!(job.company, "Acme");
        assert_eq!(job.tech_area, "Backend");
        assert_eq!(job.url, "u1");
    }

    #[test]
    fn test_from_row_wrong_length() {
        assert_eq!(Job::from_row(&row(&["X", "Y"])), None);
        assert_eq!(Job::from_row(&row(&["a", "b", "c", "d", "e", "f"])), None);
        assert_eq!(Job::from_row(&[]), None);
    }

    #[test]
    fn test_row_shape_preserved() {
        let cells = ["Acme", "Eng", "Remote", "Backend", "u1"].map(String::from);
        let job = Job::from(cells.clone());

        assert_eq!(job.into_row(), cells);
    }

    #[test]
    fn test_response_tolerates_missing_fields() {
        let response: SpreadsheetResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.values, None);

        let response: SpreadsheetResponse = serde_json::from_str(
            r#"{"majorDimension":"ROWS","range":"Jobs!A1:E9","values":[["a"]]}"#,
        )
        .unwrap();
        assert_eq!(response.major_dimension, "ROWS");
        assert_eq!(response.values, Some(vec![vec!["a".to_string()]]));
    }
}
