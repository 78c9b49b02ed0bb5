#[derive(Debug, Clone, PartialEq)]
pub struct LocationScore {
    pub score: f64,
    pub detail: String,
}

/// Compare candidate and job locations, both conventionally
/// "City, Region/Country" free text.
///
/// A remote arrangement short-circuits everything else, including empty
/// location fields. Missing data on either side is neutral (50). From
/// there the comparison degrades: exact string, city segment, city
/// containment, country segment, nothing in common.
pub fn score_location(
    candidate: Option<&str>,
    job: Option<&str>,
    remote: bool,
) -> LocationScore {
    if remote {
        return LocationScore {
            score: 100.0,
            detail: "remote position, no location constraint".into(),
        };
    }

    let candidate = candidate.map(str::trim).unwrap_or("");
    let job = job.map(str::trim).unwrap_or("");
    if candidate.is_empty() || job.is_empty() {
        return LocationScore {
            score: 50.0,
            detail: "location not specified".into(),
        };
    }

    let candidate = candidate.to_lowercase();
    let job = job.to_lowercase();

    if candidate == job {
        return LocationScore {
            score: 100.0,
            detail: format!("location match: {candidate}"),
        };
    }

    let candidate_city = city_of(&candidate);
    let job_city = city_of(&job);
    if candidate_city == job_city {
        return LocationScore {
            score: 95.0,
            detail: format!("same city: {candidate_city}"),
        };
    }

    if candidate.contains(job_city) || job.contains(candidate_city) {
        return LocationScore {
            score: 70.0,
            detail: format!("nearby: {candidate_city} / {job_city}"),
        };
    }

    if country_of(&candidate) == country_of(&job) {
        return LocationScore {
            score: 50.0,
            detail: format!("same country: {}", country_of(&job)),
        };
    }

    LocationScore {
        score: 30.0,
        detail: format!("different locations: {candidate} vs {job}"),
    }
}

fn city_of(location: &str) -> &str {
    location.split(',').next().unwrap_or(location).trim()
}

fn country_of(location: &str) -> &str {
    location.rsplit(',').next().unwrap_or(location).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_overrides_everything() {
        let result = score_location(None, None, true);
        assert_eq!(result.score, 100.0);

        let result = score_location(Some("Cairo, Egypt"), Some("Berlin, Germany"), true);
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn missing_side_is_neutral() {
        assert_eq!(score_location(None, Some("Cairo, Egypt"), false).score, 50.0);
        assert_eq!(score_location(Some("Cairo, Egypt"), None, false).score, 50.0);
        assert_eq!(score_location(Some("  "), Some("Cairo"), false).score, 50.0);
    }

    #[test]
    fn exact_match_scores_full() {
        let result = score_location(Some("Cairo, Egypt"), Some("Cairo, Egypt"), false);
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn case_and_whitespace_are_ignored() {
        let result = score_location(Some("  cairo, egypt "), Some("Cairo, Egypt"), false);
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn same_city_different_suffix() {
        let result = score_location(Some("Cairo, Egypt"), Some("Cairo, EG"), false);
        assert_eq!(result.score, 95.0);
    }

    #[test]
    fn city_containment_scores_seventy() {
        let result = score_location(Some("Greater Cairo Area, Egypt"), Some("Cairo"), false);
        assert_eq!(result.score, 70.0);
    }

    #[test]
    fn same_country_only() {
        let result = score_location(Some("Alexandria, Egypt"), Some("Cairo, Egypt"), false);
        assert_eq!(result.score, 50.0);
    }

    #[test]
    fn nothing_in_common() {
        let result = score_location(Some("Alexandria, Egypt"), Some("Berlin, Germany"), false);
        assert_eq!(result.score, 30.0);
    }
}
