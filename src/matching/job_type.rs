use crate::signals::mentions_remote;

#[derive(Debug, Clone, PartialEq)]
pub struct JobTypeScore {
    pub score: f64,
    pub detail: String,
}

const NEUTRAL: f64 = 70.0;

/// Compare the candidate's stated availability against the job's
/// employment type.
///
/// `remote` carries the job-side remote signal (from `work_mode` or a
/// legacy `job_type` value); remote work is compatible with almost any
/// availability, so it wins outright once both fields are present.
pub fn score_job_type(
    availability: Option<&str>,
    job_type: Option<&str>,
    remote: bool,
) -> JobTypeScore {
    let availability = availability.map(str::trim).unwrap_or("");
    let job_type = job_type.map(str::trim).unwrap_or("");
    if availability.is_empty() || job_type.is_empty() {
        return JobTypeScore {
            score: NEUTRAL,
            detail: "availability or job type not specified".into(),
        };
    }

    let availability = availability.to_lowercase();
    let job_type = job_type.to_lowercase();

    if remote || mentions_remote(&availability) {
        return JobTypeScore {
            score: 100.0,
            detail: "remote arrangement suits availability".into(),
        };
    }

    if availability.contains("not actively looking") && !availability.contains("available") {
        return JobTypeScore {
            score: 40.0,
            detail: "candidate not actively looking".into(),
        };
    }

    if availability.contains("available") {
        if job_type.contains("full-time") || job_type.contains("full time") {
            return JobTypeScore {
                score: 100.0,
                detail: "available for full-time work".into(),
            };
        }
        if job_type.contains("part-time") || job_type.contains("part time") {
            return JobTypeScore {
                score: 85.0,
                detail: "available, part-time role".into(),
            };
        }
        if job_type.contains("contract") {
            return JobTypeScore {
                score: 80.0,
                detail: "available, contract role".into(),
            };
        }
    }

    JobTypeScore {
        score: NEUTRAL,
        detail: format!("no strong signal: {availability} vs {job_type}"),
    }
}
