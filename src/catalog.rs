//! Collaborator interfaces for the excluded persistence layer.
//!
//! The scorer only needs two things from the outside world: a candidate's
//! profile and the open job postings. These traits keep the core
//! independent of whatever store backs them; `JobBoard` is an in-memory
//! implementation used by tests and demos.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{CandidateProfile, JobPosting};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("profile not found: {0}")]
    ProfileNotFound(i64),
    #[error("invalid pagination: {0}")]
    InvalidPagination(String),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub trait ProfileStore {
    fn find_profile(&self, candidate_id: i64) -> Result<CandidateProfile, CatalogError>;
}

pub trait JobCatalog {
    /// Open postings matching the filter, in catalog order.
    fn open_jobs(&self, filter: &JobFilter) -> Result<Vec<JobPosting>, CatalogError>;
}

/// Pre-filter applied before scoring: free-text search over the posting's
/// text fields, location substring, and exact (case-insensitive) job-type
/// and work-mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobFilter {
    pub search: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub work_mode: Option<String>,
}

impl JobFilter {
    pub fn matches(&self, job: &JobPosting) -> bool {
        if let Some(search) = non_empty(self.search.as_deref()) {
            let haystack = format!("{} {} {}", job.title, job.description, job.requirements)
                .to_lowercase();
            if !haystack.contains(&search.to_lowercase()) {
                return false;
            }
        }

        if let Some(location) = non_empty(self.location.as_deref()) {
            let job_location = job.location.as_deref().unwrap_or("").to_lowercase();
            if !job_location.contains(&location.to_lowercase()) {
                return false;
            }
        }

        if let Some(job_type) = non_empty(self.job_type.as_deref()) {
            if !equals_ignore_case(job.job_type.as_deref(), job_type) {
                return false;
            }
        }

        if let Some(work_mode) = non_empty(self.work_mode.as_deref()) {
            if !equals_ignore_case(job.work_mode.as_deref(), work_mode) {
                return false;
            }
        }

        true
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn equals_ignore_case(actual: Option<&str>, wanted: &str) -> bool {
    actual
        .map(|a| a.trim().eq_ignore_ascii_case(wanted))
        .unwrap_or(false)
}

/// In-memory store backing both collaborator traits.
#[derive(Debug, Clone, Default)]
pub struct JobBoard {
    profiles: HashMap<i64, CandidateProfile>,
    jobs: Vec<JobPosting>,
}

impl JobBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_profile(&mut self, candidate_id: i64, profile: CandidateProfile) {
        self.profiles.insert(candidate_id, profile);
    }

    pub fn insert_job(&mut self, job: JobPosting) {
        self.jobs.push(job);
    }
}

impl ProfileStore for JobBoard {
    fn find_profile(&self, candidate_id: i64) -> Result<CandidateProfile, CatalogError> {
        self.profiles
            .get(&candidate_id)
            .cloned()
            .ok_or(CatalogError::ProfileNotFound(candidate_id))
    }
}

impl JobCatalog for JobBoard {
    fn open_jobs(&self, filter: &JobFilter) -> Result<Vec<JobPosting>, CatalogError> {
        Ok(self
            .jobs
            .iter()
            .filter(|job| filter.matches(job))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> JobBoard {
        let mut board = JobBoard::new();
        board.insert_job(JobPosting {
            title: "Rust Engineer".into(),
            description: "Backend services".into(),
            requirements: "Rust, SQL".into(),
            location: Some("Cairo, Egypt".into()),
            job_type: Some("full-time".into()),
            work_mode: Some("hybrid".into()),
            ..JobPosting::default()
        });
        board.insert_job(JobPosting {
            title: "Designer".into(),
            description: "Product design".into(),
            requirements: "Figma".into(),
            location: Some("Berlin, Germany".into()),
            job_type: Some("contract".into()),
            work_mode: Some("remote".into()),
            ..JobPosting::default()
        });
        board
    }

    #[test]
    fn empty_filter_returns_everything() {
        let jobs = board().open_jobs(&JobFilter::default()).unwrap();
        assert_eq!(jobs.len(), 2);
    }

    #[test]
    fn search_scans_all_text_fields() {
        let filter = JobFilter {
            search: Some("figma".into()),
            ..JobFilter::default()
        };
        let jobs = board().open_jobs(&filter).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].title, "Designer");
    }

    #[test]
    fn location_is_substring_and_types_are_exact() {
        let filter = JobFilter {
            location: Some("cairo".into()),
            job_type: Some("Full-Time".into()),
            ..JobFilter::default()
        };
        let jobs = board().open_jobs(&filter).unwrap();
        assert_eq!(jobs.len(), 1);

        let too_strict = JobFilter {
            job_type: Some("full".into()),
            ..JobFilter::default()
        };
        assert!(board().open_jobs(&too_strict).unwrap().is_empty());
    }

    #[test]
    fn work_mode_filters_independently_of_job_type() {
        let filter = JobFilter {
            work_mode: Some("remote".into()),
            ..JobFilter::default()
        };
        let jobs = board().open_jobs(&filter).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].job_type.as_deref(), Some("contract"));
    }

    #[test]
    fn missing_profile_is_an_error() {
        let err = board().find_profile(42).unwrap_err();
        assert!(matches!(err, CatalogError::ProfileNotFound(42)));
    }
}
