use tracing::debug;

use super::scoring::{MatchConfig, MatchResult, MatchScorer};
use crate::catalog::CatalogError;
use crate::{CandidateProfile, JobPosting};

const MAX_LIMIT: usize = 200;
const MAX_OFFSET: usize = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub struct RankedJob {
    pub job: JobPosting,
    pub result: MatchResult,
}

/// Scores a filtered job set for one candidate and orders it for the
/// listing endpoint. Each job is scored independently; callers that want
/// parallelism can split the slice however they like.
pub struct MatchingEngine {
    scorer: MatchScorer,
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

impl MatchingEngine {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            scorer: MatchScorer::new(config),
        }
    }

    /// Score every job against the profile and sort descending by score.
    /// The sort is stable, so catalog order breaks ties.
    pub fn rank_jobs(&self, profile: &CandidateProfile, jobs: &[JobPosting]) -> Vec<RankedJob> {
        debug!(jobs = jobs.len(), "ranking jobs for profile");

        let mut ranked: Vec<RankedJob> = jobs
            .iter()
            .map(|job| RankedJob {
                job: job.clone(),
                result: self.scorer.score(Some(profile), Some(job)),
            })
            .collect();

        ranked.sort_by(|a, b| b.result.score.cmp(&a.result.score));
        ranked
    }
}

/// Page into an already-ranked listing. Bounds mirror the API layer's
/// pagination contract.
pub fn paginate<T>(items: &[T], limit: usize, offset: usize) -> Result<&[T], CatalogError> {
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(CatalogError::InvalidPagination(format!(
            "limit must be between 1 and {MAX_LIMIT}"
        )));
    }

    if offset > MAX_OFFSET {
        return Err(CatalogError::InvalidPagination(format!(
            "offset must be between 0 and {MAX_OFFSET}"
        )));
    }

    let start = offset.min(items.len());
    let end = (start + limit).min(items.len());
    Ok(&items[start..end])
}
