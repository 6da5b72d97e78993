//! In-memory repository backing the dashboard and the scheduling workflow.
//!
//! A single `MemoryStore` owns every collection plus the identifier allocators, and
//! implements all repository traits so services can share one `Arc` to it.

mod seed;
mod sequence;

use std::sync::{Mutex, MutexGuard};

pub use seed::{reference_dataset, SeedData};
pub use sequence::{IdSequence, StoreSequences};

use crate::workflows::interviews::domain::{
    Interview, InterviewEmployee, InterviewId, NewInterview,
};
use crate::workflows::interviews::repository::InterviewRepository;
use crate::workflows::pipeline::domain::{
    Application, ApplicationId, Candidate, CandidateId, Employee, EmployeeId, Job, JobId,
    NewApplication, NewCandidate, NewJob, NewTeam, Team, TeamId,
};
use crate::workflows::pipeline::repository::{
    ApplicationRepository, CatalogRepository, RepositoryError,
};

#[derive(Debug, Default)]
struct StoreState {
    teams: Vec<Team>,
    jobs: Vec<Job>,
    candidates: Vec<Candidate>,
    employees: Vec<Employee>,
    applications: Vec<Application>,
    interviews: Vec<Interview>,
    participants: Vec<InterviewEmployee>,
}

impl StoreState {
    fn from_seed(seed: SeedData) -> Self {
        Self {
            teams: seed.teams,
            jobs: seed.jobs,
            candidates: seed.candidates,
            employees: seed.employees,
            applications: seed.applications,
            interviews: seed.interviews,
            participants: seed.participants,
        }
    }
}

/// Process-lifetime store. Lookups are linear scans in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<StoreState>,
    sequences: StoreSequences,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store preloaded with the reference teams, jobs, candidates, and interviews.
    pub fn seeded() -> Self {
        Self::from_seed(reference_dataset())
    }

    pub fn from_seed(seed: SeedData) -> Self {
        let store = Self {
            state: Mutex::new(StoreState::from_seed(seed)),
            sequences: StoreSequences::default(),
        };
        store.reset_sequences();
        store
    }

    pub fn sequences(&self) -> &StoreSequences {
        &self.sequences
    }

    /// Rewinds every allocator to one past the highest id currently stored.
    pub fn reset_sequences(&self) {
        let state = self.lock();
        let next = |max: Option<u64>| max.map_or(1, |id| id + 1);
        self.sequences
            .teams
            .reset_to(next(state.teams.iter().map(|team| team.id.0).max()));
        self.sequences
            .jobs
            .reset_to(next(state.jobs.iter().map(|job| job.id.0).max()));
        self.sequences.candidates.reset_to(next(
            state.candidates.iter().map(|candidate| candidate.id.0).max(),
        ));
        self.sequences.applications.reset_to(next(
            state.applications.iter().map(|application| application.id.0).max(),
        ));
        self.sequences.interviews.reset_to(next(
            state.interviews.iter().map(|interview| interview.id.0).max(),
        ));
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().expect("store mutex poisoned")
    }
}

impl CatalogRepository for MemoryStore {
    fn teams(&self) -> Result<Vec<Team>, RepositoryError> {
        Ok(self.lock().teams.clone())
    }

    fn team(&self, id: TeamId) -> Result<Option<Team>, RepositoryError> {
        Ok(self.lock().teams.iter().find(|team| team.id == id).cloned())
    }

    fn insert_team(&self, team: NewTeam) -> Result<Team, RepositoryError> {
        let mut state = self.lock();
        let record = Team {
            id: TeamId(self.sequences.teams.allocate()),
            name: team.name,
            organization_id: team.organization_id,
        };
        state.teams.push(record.clone());
        Ok(record)
    }

    fn jobs(&self) -> Result<Vec<Job>, RepositoryError> {
        Ok(self.lock().jobs.clone())
    }

    fn job(&self, id: JobId) -> Result<Option<Job>, RepositoryError> {
        Ok(self.lock().jobs.iter().find(|job| job.id == id).cloned())
    }

    fn insert_job(&self, job: NewJob) -> Result<Job, RepositoryError> {
        let mut state = self.lock();
        let record = Job {
            id: JobId(self.sequences.jobs.allocate()),
            title: job.title,
            location: job.location,
            employment_type: job.employment_type,
            active: job.active,
            created_on: job.created_on,
            team_id: job.team_id,
            description: job.description,
            requirements: job.requirements,
            pdf_attachment: job.pdf_attachment,
        };
        state.jobs.push(record.clone());
        Ok(record)
    }

    fn candidates(&self) -> Result<Vec<Candidate>, RepositoryError> {
        Ok(self.lock().candidates.clone())
    }

    fn candidate(&self, id: CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        Ok(self
            .lock()
            .candidates
            .iter()
            .find(|candidate| candidate.id == id)
            .cloned())
    }

    fn insert_candidate(&self, candidate: NewCandidate) -> Result<Candidate, RepositoryError> {
        let mut state = self.lock();
        let record = Candidate {
            id: CandidateId(self.sequences.candidates.allocate()),
            name: candidate.name,
            email: candidate.email,
            position: candidate.position,
            applied_on: candidate.applied_on,
            status: candidate.status,
            profile: candidate.profile,
        };
        state.candidates.push(record.clone());
        Ok(record)
    }

    fn employees(&self) -> Result<Vec<Employee>, RepositoryError> {
        Ok(self.lock().employees.clone())
    }

    fn employee(&self, id: EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        Ok(self
            .lock()
            .employees
            .iter()
            .find(|employee| employee.id == id)
            .cloned())
    }
}

impl ApplicationRepository for MemoryStore {
    fn applications(&self) -> Result<Vec<Application>, RepositoryError> {
        Ok(self.lock().applications.clone())
    }

    fn find_by_pair(
        &self,
        job_id: JobId,
        candidate_id: CandidateId,
    ) -> Result<Option<Application>, RepositoryError> {
        Ok(self
            .lock()
            .applications
            .iter()
            .find(|application| application.links(job_id, candidate_id))
            .cloned())
    }

    fn for_job(&self, job_id: JobId) -> Result<Vec<Application>, RepositoryError> {
        Ok(self
            .lock()
            .applications
            .iter()
            .filter(|application| application.job_id == job_id)
            .cloned()
            .collect())
    }

    fn insert_application(
        &self,
        application: NewApplication,
    ) -> Result<Application, RepositoryError> {
        let mut state = self.lock();
        if state
            .applications
            .iter()
            .any(|existing| existing.links(application.job_id, application.candidate_id))
        {
            return Err(RepositoryError::Conflict(format!(
                "application for job {} and candidate {}",
                application.job_id, application.candidate_id
            )));
        }

        let record = Application {
            id: ApplicationId(self.sequences.applications.allocate()),
            job_id: application.job_id,
            candidate_id: application.candidate_id,
            status: application.status,
            source: application.source,
            submitted_at: application.submitted_at,
        };
        state.applications.push(record.clone());
        Ok(record)
    }
}

impl InterviewRepository for MemoryStore {
    fn interviews(&self) -> Result<Vec<Interview>, RepositoryError> {
        Ok(self.lock().interviews.clone())
    }

    fn interview(&self, id: InterviewId) -> Result<Option<Interview>, RepositoryError> {
        Ok(self
            .lock()
            .interviews
            .iter()
            .find(|interview| interview.id == id)
            .cloned())
    }

    fn insert_interview(&self, interview: NewInterview) -> Result<Interview, RepositoryError> {
        let mut state = self.lock();
        if !state
            .applications
            .iter()
            .any(|application| application.id == interview.application_id)
        {
            return Err(RepositoryError::NotFound(format!(
                "application {}",
                interview.application_id
            )));
        }

        let record = Interview {
            id: InterviewId(self.sequences.interviews.allocate()),
            application_id: interview.application_id,
            scheduled_at: interview.scheduled_at,
            duration_min: interview.duration_min,
            stage: interview.stage,
            location: interview.location,
            result: interview.result,
            notes: interview.notes,
        };
        state.interviews.push(record.clone());
        Ok(record)
    }

    fn participants(&self) -> Result<Vec<InterviewEmployee>, RepositoryError> {
        Ok(self.lock().participants.clone())
    }

    fn participants_for(
        &self,
        interview_id: InterviewId,
    ) -> Result<Vec<InterviewEmployee>, RepositoryError> {
        Ok(self
            .lock()
            .participants
            .iter()
            .filter(|link| link.interview_id == interview_id)
            .cloned()
            .collect())
    }

    fn insert_participant(&self, link: InterviewEmployee) -> Result<(), RepositoryError> {
        let mut state = self.lock();
        if !state
            .interviews
            .iter()
            .any(|interview| interview.id == link.interview_id)
        {
            return Err(RepositoryError::NotFound(format!(
                "interview {}",
                link.interview_id
            )));
        }
        if state.participants.iter().any(|existing| {
            existing.interview_id == link.interview_id && existing.employee_id == link.employee_id
        }) {
            return Err(RepositoryError::Conflict(format!(
                "employee {} already on interview {}",
                link.employee_id, link.interview_id
            )));
        }

        state.participants.push(link);
        Ok(())
    }
}
