use std::collections::BTreeMap;

use crate::models::Job;

pub type TechAreaCounts = BTreeMap<String, usize>;

pub fn count_jobs_by_tech_area(jobs: &[Job]) -> TechAreaCounts {
    let mut counts = TechAreaCounts::new();

    for job in jobs.iter().filter(|job| !job.tech_area.is_empty()) {
        *counts.entry(job.tech_area.clone()).or_insert(0) += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::count_jobs_by_tech_area;
    use crate::models::Job;

    fn job(tech_area: &str) -> Job {
        Job {
            company: "Acme".to_string(),
            title: "Engineer".to_string(),
            location: "Remote".to_string(),
            tech_area: tech_area.to_string(),
            url: "https://acme.example/jobs".to_string(),
        }
    }

    #[test]
    fn test_counts() {
        let counts = count_jobs_by_tech_area(&[job("Backend"), job("Backend"), job("ML")]);

        assert_eq!(counts.len(), 2);
        assert_eq!(counts["Backend"], 2);
        assert_eq!(counts["ML"], 1);
    }

    #[test]
    fn test_skips_empty_area() {
        let counts = count_jobs_by_tech_area(&[job(""), job("Design"), job("")]);

        assert_eq!(counts.into_iter().collect::<Vec<_>>(), [("Design".to_string(), 1)]);
    }

    #[test]
    fn test_no_jobs() {
        assert!(count_jobs_by_tech_area(&[]).is_empty());
    }
}
