use chrono::{Datelike, NaiveDate};

use crate::signals::required_years;
use crate::{ExperienceEntry, JobPosting};

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceScore {
    pub score: f64,
    pub tenure_years: f64,
    pub required_years: u32,
    pub title_bonus: bool,
}

/// Flat score for a profile with no experience section.
const NO_EXPERIENCE_SCORE: f64 = 20.0;
/// Bonus when a past position's title overlaps the job title.
const TITLE_BONUS: f64 = 15.0;

/// Compare candidate tenure against the years-of-experience requirement
/// inferred from the job's requirements and title.
///
/// `as_of` closes `current: true` entries; inject a fixed date in tests
/// to keep the scorer deterministic.
pub fn score_experience(
    entries: &[ExperienceEntry],
    job: &JobPosting,
    as_of: NaiveDate,
) -> ExperienceScore {
    let required = required_years(&format!("{} {}", job.requirements, job.title));

    if entries.is_empty() {
        return ExperienceScore {
            score: NO_EXPERIENCE_SCORE,
            tenure_years: 0.0,
            required_years: required,
            title_bonus: false,
        };
    }

    let years = tenure_years(entries, as_of);

    let mut score = if required == 0 {
        // No stated requirement: reward tenure from a neutral base.
        (50.0 + years * 10.0).min(100.0)
    } else {
        let ratio = years / required as f64;
        if ratio >= 1.0 {
            (80.0 + ratio * 10.0).min(100.0)
        } else if ratio >= 0.7 {
            60.0 + ratio * 20.0
        } else {
            30.0 + ratio * 30.0
        }
    };

    let title_bonus = title_overlaps(entries, &job.title);
    if title_bonus {
        score = (score + TITLE_BONUS).min(100.0);
    }

    ExperienceScore {
        score: score.clamp(0.0, 100.0),
        tenure_years: years,
        required_years: required,
        title_bonus,
    }
}

/// Total tenure in years across entries. Entries without an end date and
/// not marked `current` contribute nothing; inverted ranges floor to 0.
pub fn tenure_years(entries: &[ExperienceEntry], as_of: NaiveDate) -> f64 {
    let months: i32 = entries
        .iter()
        .filter_map(|entry| {
            let end = if entry.current {
                Some(as_of)
            } else {
                entry.end_date
            };
            end.map(|end| months_between(entry.start_date, end))
        })
        .sum();

    months as f64 / 12.0
}

fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let months =
        (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32);
    months.max(0)
}

/// A position counts as relevant when it contains any word longer than
/// 3 characters from the job title.
fn title_overlaps(entries: &[ExperienceEntry], title: &str) -> bool {
    let title = title.to_lowercase();
    let words: Vec<&str> = title.split(' ').filter(|w| w.len() > 3).collect();
    if words.is_empty() {
        return false;
    }

    entries.iter().any(|entry| {
        let position = entry.position.to_lowercase();
        words.iter().any(|word| position.contains(word))
    })
}
