//! Recruiting pipeline records: teams, jobs, candidates, employees, and applications.

pub mod domain;
pub mod intake;
pub mod metrics;
pub mod repository;


pub use domain::{
    Application, ApplicationId, ApplicationStatus, Candidate, CandidateId, CandidateProfile,
    CandidateStatus, Education, Employee, EmployeeId, EmploymentType, Job, JobId, Seniority, Team,
    TeamId,
};
pub use intake::{
    register_candidate, register_job, register_team, CandidateIntake, IntakeError, JobIntake,
    TeamIntake,
};
pub use metrics::DashboardMetrics;
pub use repository::{ApplicationRepository, CatalogRepository, RepositoryError};
