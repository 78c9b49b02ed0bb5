/// Default composite weights. Skills dominate, experience second;
/// the remaining factors are tiebreakers.
pub const DEFAULT_WEIGHTS: Weights = Weights {
    skills: 0.35,
    experience: 0.25,
    location: 0.15,
    job_type: 0.10,
    salary: 0.10,
    education: 0.05,
};

#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
    pub job_type: f64,
    pub salary: f64,
    pub education: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.location + self.job_type + self.salary + self.education
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        assert!((DEFAULT_WEIGHTS.sum() - 1.0).abs() < 1e-9);
    }
}
