pub mod education;
pub mod experience;
pub mod job_type;
pub mod location;
pub mod pipeline;
pub mod salary;
pub mod scoring;
pub mod skills;
pub mod weights;
