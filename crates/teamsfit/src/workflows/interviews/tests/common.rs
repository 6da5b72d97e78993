use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::clock::FixedClock;
use crate::workflows::interviews::domain::{
    Interview, InterviewEmployee, InterviewId, InterviewerRole, NewInterview,
};
use crate::workflows::interviews::repository::{
    InterviewRepository, Notification, NotificationError, NotificationPublisher,
};
use crate::workflows::interviews::service::InterviewSchedulingService;
use crate::workflows::interviews::wizard::SchedulingWizard;
use crate::workflows::interviews::InterviewStage;
use crate::workflows::pipeline::domain::{
    Application, Candidate, CandidateId, Employee, EmployeeId, Job, JobId,
    NewApplication, NewCandidate, NewJob, NewTeam, Team, TeamId,
};
use crate::workflows::pipeline::repository::{
    ApplicationRepository, CatalogRepository, RepositoryError,
};
use crate::workflows::store::MemoryStore;

pub(super) fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("valid instant")
}

/// Instant the fixed clock reports during service tests.
pub(super) fn commit_time() -> DateTime<Utc> {
    at(2025, 10, 1, 9, 0)
}

pub(super) type TestService = InterviewSchedulingService<MemoryStore, MemoryNotifications>;

pub(super) fn seeded_service() -> (TestService, Arc<MemoryStore>, Arc<MemoryNotifications>) {
    let store = Arc::new(MemoryStore::seeded());
    let notifications = Arc::new(MemoryNotifications::default());
    let service = InterviewSchedulingService::new(store.clone(), notifications.clone())
        .with_clock(Arc::new(FixedClock(commit_time())));
    (service, store, notifications)
}

/// Walks a fresh wizard to the details step with one interviewer per entry.
pub(super) fn wizard_at_details(
    job_id: u64,
    candidate_id: u64,
    panel: &[(u64, InterviewerRole)],
    scheduled_at: DateTime<Utc>,
) -> SchedulingWizard {
    let mut wizard = SchedulingWizard::default();
    wizard.select_job(JobId(job_id)).expect("job step");
    assert!(wizard.next());
    wizard
        .select_candidate(CandidateId(candidate_id))
        .expect("candidate step");
    assert!(wizard.next());
    for &(employee, role) in panel {
        wizard
            .add_interviewer(EmployeeId(employee))
            .expect("add interviewer");
        wizard
            .set_interviewer_role(EmployeeId(employee), role)
            .expect("set role");
    }
    assert!(wizard.next());
    wizard.set_scheduled_at(scheduled_at).expect("schedule step");
    assert!(wizard.next());
    wizard
}

/// The reference booking: Sarah Johnson's technical round for job 1.
pub(super) fn reference_wizard() -> SchedulingWizard {
    let mut wizard = wizard_at_details(
        1,
        1,
        &[(2, InterviewerRole::Lead)],
        at(2025, 10, 5, 14, 0),
    );
    wizard
        .set_stage(InterviewStage::Technical)
        .expect("details step");
    wizard
}

#[derive(Default)]
pub(super) struct MemoryNotifications {
    events: Mutex<Vec<Notification>>,
}

impl MemoryNotifications {
    pub(super) fn events(&self) -> Vec<Notification> {
        self.events
            .lock()
            .expect("notification mutex poisoned")
            .clone()
    }
}

impl NotificationPublisher for MemoryNotifications {
    fn publish(&self, notification: Notification) -> Result<(), NotificationError> {
        self.events
            .lock()
            .expect("notification mutex poisoned")
            .push(notification);
        Ok(())
    }
}

pub(super) struct OfflineNotifications;

impl NotificationPublisher for OfflineNotifications {
    fn publish(&self, _notification: Notification) -> Result<(), NotificationError> {
        Err(NotificationError::Transport("smtp offline".to_string()))
    }
}

pub(super) struct UnavailableStore;

fn offline<T>() -> Result<T, RepositoryError> {
    Err(RepositoryError::Unavailable("store offline".to_string()))
}

impl CatalogRepository for UnavailableStore {
    fn teams(&self) -> Result<Vec<Team>, RepositoryError> {
        offline()
    }

    fn team(&self, _id: TeamId) -> Result<Option<Team>, RepositoryError> {
        offline()
    }

    fn insert_team(&self, _team: NewTeam) -> Result<Team, RepositoryError> {
        offline()
    }

    fn jobs(&self) -> Result<Vec<Job>, RepositoryError> {
        offline()
    }

    fn job(&self, _id: JobId) -> Result<Option<Job>, RepositoryError> {
        offline()
    }

    fn insert_job(&self, _job: NewJob) -> Result<Job, RepositoryError> {
        offline()
    }

    fn candidates(&self) -> Result<Vec<Candidate>, RepositoryError> {
        offline()
    }

    fn candidate(&self, _id: CandidateId) -> Result<Option<Candidate>, RepositoryError> {
        offline()
    }

    fn insert_candidate(&self, _candidate: NewCandidate) -> Result<Candidate, RepositoryError> {
        offline()
    }

    fn employees(&self) -> Result<Vec<Employee>, RepositoryError> {
        offline()
    }

    fn employee(&self, _id: EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        offline()
    }
}

impl ApplicationRepository for UnavailableStore {
    fn applications(&self) -> Result<Vec<Application>, RepositoryError> {
        offline()
    }

    fn find_by_pair(
        &self,
        _job_id: JobId,
        _candidate_id: CandidateId,
    ) -> Result<Option<Application>, RepositoryError> {
        offline()
    }

    fn for_job(&self, _job_id: JobId) -> Result<Vec<Application>, RepositoryError> {
        offline()
    }

    fn insert_application(
        &self,
        _application: NewApplication,
    ) -> Result<Application, RepositoryError> {
        offline()
    }
}

impl InterviewRepository for UnavailableStore {
    fn interviews(&self) -> Result<Vec<Interview>, RepositoryError> {
        offline()
    }

    fn interview(&self, _id: InterviewId) -> Result<Option<Interview>, RepositoryError> {
        offline()
    }

    fn insert_interview(&self, _interview: NewInterview) -> Result<Interview, RepositoryError> {
        offline()
    }

    fn participants(&self) -> Result<Vec<InterviewEmployee>, RepositoryError> {
        offline()
    }

    fn participants_for(
        &self,
        _interview_id: InterviewId,
    ) -> Result<Vec<InterviewEmployee>, RepositoryError> {
        offline()
    }

    fn insert_participant(&self, _link: InterviewEmployee) -> Result<(), RepositoryError> {
        offline()
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
