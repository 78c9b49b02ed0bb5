use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{
    education::{score_education, EducationScore},
    experience::{score_experience, ExperienceScore},
    job_type::{score_job_type, JobTypeScore},
    location::{score_location, LocationScore},
    salary::{score_salary, SalaryScore},
    skills::{score_skills, SkillsScore},
    weights::{Weights, DEFAULT_WEIGHTS},
};
use crate::{CandidateProfile, JobPosting};

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub weights: Weights,
    /// Reference date closing `current: true` experience entries.
    pub as_of: NaiveDate,
    pub reason_limit: usize,
    pub warning_limit: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            weights: DEFAULT_WEIGHTS,
            as_of: Utc::now().date_naive(),
            reason_limit: env_limit("JM_REASON_LIMIT", 3),
            warning_limit: env_limit("JM_WARNING_LIMIT", 2),
        }
    }
}

fn env_limit(var: &str, default: usize) -> usize {
    std::env::var(var)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Final result returned to callers: composite score plus the top
/// explanation strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u8,
    pub reasons: Vec<String>,
    pub warnings: Vec<String>,
}

/// Per-factor view behind a `MatchResult`; useful for debugging and for
/// API responses that expose the breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchBreakdown {
    pub skills: SkillsScore,
    pub experience: ExperienceScore,
    pub location: LocationScore,
    pub job_type: JobTypeScore,
    pub salary: SalaryScore,
    pub education: EducationScore,
}

pub struct MatchScorer {
    config: MatchConfig,
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

impl MatchScorer {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run all six factor scorers. Pure; safe to call from any thread.
    pub fn breakdown(&self, profile: &CandidateProfile, job: &JobPosting) -> MatchBreakdown {
        let remote = job.is_remote();

        MatchBreakdown {
            skills: score_skills(&profile.skills, job),
            experience: score_experience(&profile.experience, job, self.config.as_of),
            location: score_location(
                profile.location.as_deref(),
                job.location.as_deref(),
                remote,
            ),
            job_type: score_job_type(
                profile.availability.as_deref(),
                job.job_type.as_deref(),
                remote,
            ),
            salary: score_salary(
                profile.expected_salary.as_deref(),
                job.salary_range.as_deref(),
            ),
            education: score_education(&profile.education, &job.requirements),
        }
    }

    /// Composite score for a (profile, job) pair. Absent input on either
    /// side is the documented "not computable" signal: score 0 with no
    /// explanations, never an error.
    pub fn score(
        &self,
        profile: Option<&CandidateProfile>,
        job: Option<&JobPosting>,
    ) -> MatchResult {
        let (Some(profile), Some(job)) = (profile, job) else {
            return MatchResult::default();
        };

        let breakdown = self.breakdown(profile, job);
        let weights = self.config.weights;
        let total = breakdown.skills.score * weights.skills
            + breakdown.experience.score * weights.experience
            + breakdown.location.score * weights.location
            + breakdown.job_type.score * weights.job_type
            + breakdown.salary.score * weights.salary
            + breakdown.education.score * weights.education;

        let mut reasons = collect_reasons(&breakdown);
        reasons.truncate(self.config.reason_limit);
        let mut warnings = collect_warnings(&breakdown);
        warnings.truncate(self.config.warning_limit);

        MatchResult {
            score: total.round().clamp(0.0, 100.0) as u8,
            reasons,
            warnings,
        }
    }
}

/// Convenience wrapper with default config.
pub fn compute_match(
    profile: Option<&CandidateProfile>,
    job: Option<&JobPosting>,
) -> MatchResult {
    MatchScorer::default().score(profile, job)
}

// Fixed priority: skills, experience, location, salary. Job type and
// education never emit a positive reason.
fn collect_reasons(breakdown: &MatchBreakdown) -> Vec<String> {
    let mut reasons = Vec::new();

    if breakdown.skills.score > 70.0 {
        reasons.push(format!(
            "Strong skills match: {} relevant skills",
            breakdown.skills.matched
        ));
    } else if breakdown.skills.score > 40.0 {
        reasons.push("Moderate skills match".to_string());
    }

    if breakdown.experience.score > 70.0 {
        reasons.push("Experience aligns well with the role".to_string());
    }

    if breakdown.location.score >= 95.0 {
        reasons.push("Location is a good fit".to_string());
    }

    if breakdown.salary.score > 80.0 {
        reasons.push("Salary aligns with expectations".to_string());
    }

    reasons
}

fn collect_warnings(breakdown: &MatchBreakdown) -> Vec<String> {
    let mut warnings = Vec::new();

    if breakdown.skills.score > 0.0 && breakdown.skills.score <= 40.0 {
        warnings.push("Limited match with the required skills".to_string());
    }

    if breakdown.experience.score < 30.0 {
        warnings.push("May require more experience".to_string());
    }

    let salary_known = breakdown.salary.expected.is_some() && breakdown.salary.offered.is_some();
    if salary_known && breakdown.salary.score <= 50.0 {
        warnings.push("Salary may be below expectations".to_string());
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EducationEntry, ExperienceEntry};
    use chrono::NaiveDate;

    fn config() -> MatchConfig {
        MatchConfig {
            as_of: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            ..MatchConfig::default()
        }
    }

    fn strong_profile() -> CandidateProfile {
        CandidateProfile {
            skills: vec!["Rust".into(), "PostgreSQL".into()],
            experience: vec![ExperienceEntry {
                position: "Backend Engineer".into(),
                start_date: NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
                end_date: None,
                current: true,
            }],
            education: vec![EducationEntry {
                degree: "Bachelor of Science".into(),
            }],
            location: Some("Cairo, Egypt".into()),
            availability: Some("Available".into()),
            expected_salary: Some("$80,000".into()),
        }
    }

    fn matching_job() -> JobPosting {
        JobPosting {
            title: "Backend Engineer".into(),
            description: "We run Rust services on PostgreSQL".into(),
            requirements: "3+ years with Rust and PostgreSQL, Bachelor's degree".into(),
            location: Some("Cairo, Egypt".into()),
            job_type: Some("full-time".into()),
            work_mode: Some("on-site".into()),
            salary_range: Some("$85,000 - $95,000".into()),
        }
    }

    #[test]
    fn absent_inputs_score_zero_without_running_scorers() {
        let scorer = MatchScorer::new(config());
        let profile = strong_profile();
        let job = matching_job();

        assert_eq!(scorer.score(None, Some(&job)), MatchResult::default());
        assert_eq!(scorer.score(Some(&profile), None), MatchResult::default());
        assert_eq!(scorer.score(None, None), MatchResult::default());
    }

    #[test]
    fn strong_pair_scores_high_with_reasons() {
        let scorer = MatchScorer::new(config());
        let result = scorer.score(Some(&strong_profile()), Some(&matching_job()));

        assert!(result.score >= 90, "got {}", result.score);
        assert!(result.reasons.len() <= 3);
        assert!(result.reasons[0].starts_with("Strong skills match"));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn composite_is_the_weighted_rounded_sum() {
        let scorer = MatchScorer::new(config());
        let profile = strong_profile();
        let job = matching_job();

        let breakdown = scorer.breakdown(&profile, &job);
        let expected = breakdown.skills.score * 0.35
            + breakdown.experience.score * 0.25
            + breakdown.location.score * 0.15
            + breakdown.job_type.score * 0.10
            + breakdown.salary.score * 0.10
            + breakdown.education.score * 0.05;

        let result = scorer.score(Some(&profile), Some(&job));
        assert_eq!(result.score, expected.round() as u8);
    }

    #[test]
    fn weak_pair_collects_warnings() {
        let scorer = MatchScorer::new(config());
        let profile = CandidateProfile {
            skills: vec!["Excel".into(), "Word".into(), "Outlook".into()],
            expected_salary: Some("$150,000".into()),
            ..CandidateProfile::default()
        };
        let mut job = matching_job();
        job.description.clear();
        job.requirements = "5+ years senior Rust engineer, Excel reporting".into();

        let result = scorer.score(Some(&profile), Some(&job));

        assert!(result.warnings.len() <= 2);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("skills") || w.contains("experience") || w.contains("Salary")));
    }

    #[test]
    fn identical_inputs_give_identical_output() {
        let scorer = MatchScorer::new(config());
        let profile = strong_profile();
        let job = matching_job();

        let first = scorer.score(Some(&profile), Some(&job));
        let second = scorer.score(Some(&profile), Some(&job));
        assert_eq!(first, second);
    }
}
