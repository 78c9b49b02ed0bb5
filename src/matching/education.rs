use crate::signals::{degree_rank, max_degree_rank};
use crate::EducationEntry;

#[derive(Debug, Clone, PartialEq)]
pub struct EducationScore {
    pub score: f64,
    pub candidate_rank: u32,
    pub required_rank: u32,
}

/// Compare the candidate's best degree against the degree level the job
/// requirements mention. Ranks come from the shared degree table in
/// `signals`; a requirements text mentioning several levels requires the
/// highest one.
pub fn score_education(entries: &[EducationEntry], requirements: &str) -> EducationScore {
    let required_rank = max_degree_rank(requirements);

    if entries.is_empty() {
        let score = if required_rank > 0 { 40.0 } else { 50.0 };
        return EducationScore {
            score,
            candidate_rank: 0,
            required_rank,
        };
    }

    let candidate_rank = entries
        .iter()
        .map(|entry| degree_rank(&entry.degree))
        .max()
        .unwrap_or(0);

    let score = if required_rank == 0 {
        // No requirement: the degree itself is the score, unrecognized
        // degrees land on a neutral 70.
        if candidate_rank > 0 {
            candidate_rank as f64
        } else {
            70.0
        }
    } else if candidate_rank >= required_rank {
        100.0
    } else {
        60.0
    };

    EducationScore {
        score,
        candidate_rank,
        required_rank,
    }
}
