use crate::signals::first_salary_number;

#[derive(Debug, Clone, PartialEq)]
pub struct SalaryScore {
    pub score: f64,
    pub expected: Option<u64>,
    pub offered: Option<u64>,
}

const NEUTRAL: f64 = 70.0;

/// Compare the first figure of the job's salary range against the
/// candidate's expectation. Free-text on both sides; when either yields
/// no usable number the score is neutral.
pub fn score_salary(expected: Option<&str>, range: Option<&str>) -> SalaryScore {
    let expected_num = expected.and_then(first_salary_number);
    let offered_num = range.and_then(first_salary_number);

    let (Some(expected_val), Some(offered_val)) = (expected_num, offered_num) else {
        return SalaryScore {
            score: NEUTRAL,
            expected: expected_num,
            offered: offered_num,
        };
    };

    let ratio = offered_val as f64 / expected_val as f64;
    let score = if ratio >= 1.0 {
        100.0
    } else if ratio >= 0.9 {
        85.0
    } else if ratio >= 0.8 {
        70.0
    } else if ratio >= 0.7 {
        50.0
    } else {
        30.0
    };

    SalaryScore {
        score,
        expected: expected_num,
        offered: offered_num,
    }
}
