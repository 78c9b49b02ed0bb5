use crate::JobPosting;

#[derive(Debug, Clone, PartialEq)]
pub struct SkillsScore {
    pub score: f64,
    pub matched: usize,
    pub total: usize,
    pub matched_skills: Vec<String>,
}

/// Substring-match the candidate's skills against the job's requirements
/// and description text.
///
/// Score is the match ratio on a 0-100 scale plus a small bonus per
/// matched skill (capped at 30), so a candidate matching 3 of 6 skills
/// still clears the "moderate" band. No skills listed scores 0: an empty
/// skill section is a missing profile, not a neutral signal.
pub fn score_skills(skills: &[String], job: &JobPosting) -> SkillsScore {
    let haystack = format!("{} {}", job.requirements, job.description).to_lowercase();

    let considered: Vec<&str> = skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    let total = considered.len();
    if total == 0 {
        return SkillsScore {
            score: 0.0,
            matched: 0,
            total: 0,
            matched_skills: vec![],
        };
    }

    let matched_skills: Vec<String> = considered
        .iter()
        .filter(|skill| haystack.contains(&skill.to_lowercase()))
        .map(|skill| skill.to_string())
        .collect();
    let matched = matched_skills.len();

    let ratio_points = matched as f64 / total as f64 * 100.0;
    let bonus = ((matched * 10) as f64).min(30.0);
    let score = (ratio_points + bonus).min(100.0).clamp(0.0, 100.0);

    SkillsScore {
        score,
        matched,
        total,
        matched_skills,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(requirements: &str, description: &str) -> JobPosting {
        JobPosting {
            requirements: requirements.into(),
            description: description.into(),
            ..JobPosting::default()
        }
    }

    #[test]
    fn one_of_two_skills_scores_sixty() {
        let result = score_skills(
            &["Python".into(), "React".into()],
            &job("Looking for a Python developer", ""),
        );

        assert_eq!(result.matched, 1);
        assert_eq!(result.total, 2);
        assert_eq!(result.score, 60.0);
        assert_eq!(result.matched_skills, vec!["Python".to_string()]);
    }

    #[test]
    fn empty_skill_set_scores_zero() {
        let result = score_skills(&[], &job("Python, Rust, everything", ""));
        assert_eq!(result.score, 0.0);
        assert_eq!(result.total, 0);
    }

    #[test]
    fn full_match_caps_at_hundred() {
        let result = score_skills(
            &["rust".into(), "postgres".into(), "docker".into(), "aws".into()],
            &job("rust postgres docker aws kubernetes", ""),
        );

        assert_eq!(result.matched, 4);
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn description_counts_as_secondary_text_pool() {
        let result = score_skills(
            &["GraphQL".into()],
            &job("team player", "our stack is graphql over postgres"),
        );

        assert_eq!(result.matched, 1);
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn blank_skill_entries_are_ignored() {
        let result = score_skills(
            &["  ".into(), "python".into()],
            &job("python shop", ""),
        );

        assert_eq!(result.total, 1);
        assert_eq!(result.matched, 1);
    }
}
