use super::domain::{
    Application, Candidate, CandidateId, Employee, EmployeeId, Job, JobId,
    NewApplication, NewCandidate, NewJob, NewTeam, Team, TeamId,
};

/// Reference collections backing the dashboard and the wizard pickers.
pub trait CatalogRepository: Send + Sync {
    fn teams(&self) -> Result<Vec<Team>, RepositoryError>;
    fn team(&self, id: TeamId) -> Result<Option<Team>, RepositoryError>;
    fn insert_team(&self, team: NewTeam) -> Result<Team, RepositoryError>;

    fn jobs(&self) -> Result<Vec<Job>, RepositoryError>;
    fn job(&self, id: JobId) -> Result<Option<Job>, RepositoryError>;
    fn insert_job(&self, job: NewJob) -> Result<Job, RepositoryError>;

    fn candidates(&self) -> Result<Vec<Candidate>, RepositoryError>;
    fn candidate(&self, id: CandidateId) -> Result<Option<Candidate>, RepositoryError>;
    fn insert_candidate(&self, candidate: NewCandidate) -> Result<Candidate, RepositoryError>;

    fn employees(&self) -> Result<Vec<Employee>, RepositoryError>;
    fn employee(&self, id: EmployeeId) -> Result<Option<Employee>, RepositoryError>;
}

/// Storage for job applications. Lookups preserve insertion order.
pub trait ApplicationRepository: Send + Sync {
    fn applications(&self) -> Result<Vec<Application>, RepositoryError>;
    fn find_by_pair(
        &self,
        job_id: JobId,
        candidate_id: CandidateId,
    ) -> Result<Option<Application>, RepositoryError>;
    fn for_job(&self, job_id: JobId) -> Result<Vec<Application>, RepositoryError>;
    fn insert_application(
        &self,
        application: NewApplication,
    ) -> Result<Application, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists: {0}")]
    Conflict(String),
    #[error("record not found: {0}")]
    NotFound(String),
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
