//! Free-text signal extraction shared by the factor scorers.
//!
//! Job requirements and candidate fields arrive as unstructured text, so
//! everything the scorers need (years of experience, salary figures,
//! degree levels, remote-ness) is pulled out here behind fixed precedence
//! rules. Keeping the scans in one place lets them be tested apart from
//! the scoring weights.

use once_cell::sync::Lazy;
use regex::Regex;

// "3-5 years" style ranges are resolved before the plain pattern so the
// lower bound wins instead of whichever number sits next to "years".
static YEARS_RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*-\s*(\d+)\s*years?").unwrap());
// "5 years" / "5+ years"
static YEARS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*\+?\s*years?").unwrap());
// First digit run, commas allowed inside ("90,000")
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d[\d,]*").unwrap());

/// Degree keywords in rank order; the first keyword found in an entry
/// decides that entry's rank.
const DEGREE_RANKS: &[(&str, u32)] = &[
    ("phd", 100),
    ("doctorate", 100),
    ("master", 85),
    ("bachelor", 70),
    ("associate", 60),
];

/// Years-of-experience requirement inferred from requirements/title text.
///
/// Precedence: explicit range takes its lower bound, otherwise the first
/// `N years` / `N+ years` occurrence. Seniority wording then floors the
/// result (senior/lead 5, mid-level/intermediate 3, junior/entry 1).
/// Returns 0 when the text carries no requirement at all.
pub fn required_years(text: &str) -> u32 {
    let text = text.to_lowercase();

    let stated = if let Some(caps) = YEARS_RANGE_RE.captures(&text) {
        caps.get(1).and_then(|m| m.as_str().parse().ok())
    } else {
        YEARS_RE
            .captures(&text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    };

    let floor = seniority_floor(&text);
    stated.unwrap_or(0).max(floor)
}

fn seniority_floor(text: &str) -> u32 {
    let mut floor = 0;
    if text.contains("senior") || text.contains("lead") {
        floor = floor.max(5);
    }
    if text.contains("mid-level") || text.contains("intermediate") {
        floor = floor.max(3);
    }
    if text.contains("junior") || text.contains("entry") {
        floor = floor.max(1);
    }
    floor
}

/// First positive integer in a salary string, tolerating thousand
/// separators ("$90,000 - $100,000" yields 90000).
pub fn first_salary_number(text: &str) -> Option<u64> {
    let run = NUMBER_RE.find(text)?;
    let digits: String = run.as_str().chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(n) => Some(n),
    }
}

/// Rank of a single degree string; 0 when no keyword matches.
pub fn degree_rank(degree: &str) -> u32 {
    let degree = degree.to_lowercase();
    DEGREE_RANKS
        .iter()
        .find(|(keyword, _)| degree.contains(keyword))
        .map(|(_, rank)| *rank)
        .unwrap_or(0)
}

/// Highest degree rank mentioned anywhere in a free-text requirements
/// blob; 0 when none is mentioned.
pub fn max_degree_rank(text: &str) -> u32 {
    let text = text.to_lowercase();
    DEGREE_RANKS
        .iter()
        .filter(|(keyword, _)| text.contains(keyword))
        .map(|(_, rank)| *rank)
        .max()
        .unwrap_or(0)
}

pub fn mentions_remote(text: &str) -> bool {
    text.to_lowercase().contains("remote")
}
