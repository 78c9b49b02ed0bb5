pub mod api;
pub mod catalog;
pub mod logging;
pub mod matching;
pub mod signals;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use matching::scoring::{compute_match, MatchConfig, MatchResult, MatchScorer};

// Commonly used data models for matching functions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub location: Option<String>,
    pub availability: Option<String>,
    pub expected_salary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub position: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    /// Ongoing engagement; the end date is the scorer's `as_of` date.
    pub current: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
}

/// A job posting as fetched from the catalog. `job_type` carries the
/// employment type (full-time/part-time/contract) and `work_mode` the
/// work arrangement (remote/hybrid/on-site); older records that stuffed
/// "remote" into `job_type` still score the same because remote
/// detection reads both fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub work_mode: Option<String>,
    pub salary_range: Option<String>,
}

impl JobPosting {
    /// True when either arrangement field signals a remote position.
    pub fn is_remote(&self) -> bool {
        self.work_mode
            .as_deref()
            .map(signals::mentions_remote)
            .unwrap_or(false)
            || self
                .job_type
                .as_deref()
                .map(signals::mentions_remote)
                .unwrap_or(false)
    }
}
