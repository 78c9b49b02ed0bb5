//! Serde DTOs for the HTTP layer. The server itself lives elsewhere;
//! this module only fixes the response shapes so the ranking endpoint
//! and any client-side preview serialize the same structure.

use serde::{Deserialize, Serialize};

use crate::matching::pipeline::RankedJob;
use crate::matching::scoring::{MatchBreakdown, MatchResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub score: u8,
    pub reasons: Vec<String>,
    pub warnings: Vec<String>,
    /// Per-factor scores; a debug/inspection view, not part of the
    /// numeric contract.
    pub breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
    pub job_type: f64,
    pub salary: f64,
    pub education: f64,
}

impl From<&MatchBreakdown> for ScoreBreakdown {
    fn from(value: &MatchBreakdown) -> Self {
        Self {
            skills: value.skills.score,
            experience: value.experience.score,
            location: value.location.score,
            job_type: value.job_type.score,
            salary: value.salary.score,
            education: value.education.score,
        }
    }
}

impl MatchResponse {
    pub fn new(result: &MatchResult, breakdown: &MatchBreakdown) -> Self {
        Self {
            score: result.score,
            reasons: result.reasons.clone(),
            warnings: result.warnings.clone(),
            breakdown: ScoreBreakdown::from(breakdown),
        }
    }
}

/// One row of the ranked listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedJobResponse {
    pub title: String,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub work_mode: Option<String>,
    pub score: u8,
    pub reasons: Vec<String>,
}

impl From<&RankedJob> for RankedJobResponse {
    fn from(value: &RankedJob) -> Self {
        Self {
            title: value.job.title.clone(),
            location: value.job.location.clone(),
            job_type: value.job.job_type.clone(),
            work_mode: value.job.work_mode.clone(),
            score: value.result.score,
            reasons: value.result.reasons.clone(),
        }
    }
}
