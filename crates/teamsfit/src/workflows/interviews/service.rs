use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::conflicts::{conflict_warning, BookingSnapshot, ConflictChecker, SchedulingConflict};
use super::domain::{
    Interview, InterviewEmployee, InterviewStage, InterviewerSelection, NewInterview,
};
use super::options::{self, CandidateOption};
use super::repository::{
    InterviewRepository, Notification, NotificationLevel, NotificationPublisher,
};
use super::resolver::resolve_or_create_application;
use super::wizard::{
    InterviewPlan, SchedulingWizard, WizardDefaults, WizardError, WizardStep,
    DEFAULT_DURATION_MINUTES,
};
use crate::workflows::clock::{Clock, SystemClock};
use crate::workflows::pipeline::domain::{
    Application, CandidateId, Employee, EmployeeId, Job, JobId,
};
use crate::workflows::pipeline::repository::{
    ApplicationRepository, CatalogRepository, RepositoryError,
};

/// Records produced by a successful commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledInterview {
    pub application: Application,
    pub application_created: bool,
    pub interview: Interview,
    pub participants: Vec<InterviewEmployee>,
    pub conflicts: Vec<SchedulingConflict>,
}

/// One-shot scheduling payload replayed through the wizard steps.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleRequest {
    pub job_id: Option<JobId>,
    pub candidate_id: Option<CandidateId>,
    #[serde(default)]
    pub interviewers: Vec<InterviewerSelection>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub duration_min: Option<u32>,
    pub stage: Option<InterviewStage>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub notes: String,
}

/// Interview row with its panel, as listed on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterviewSummary {
    #[serde(flatten)]
    pub interview: Interview,
    pub ends_at: DateTime<Utc>,
    pub status: &'static str,
    pub participants: Vec<InterviewEmployee>,
}

/// Drives wizard commits against the store and announces the outcome.
pub struct InterviewSchedulingService<S, N> {
    store: Arc<S>,
    notifications: Arc<N>,
    clock: Arc<dyn Clock>,
    checker: ConflictChecker,
    default_duration: u32,
}

impl<S, N> InterviewSchedulingService<S, N>
where
    S: CatalogRepository + ApplicationRepository + InterviewRepository + 'static,
    N: NotificationPublisher + 'static,
{
    pub fn new(store: Arc<S>, notifications: Arc<N>) -> Self {
        Self {
            store,
            notifications,
            clock: Arc::new(SystemClock),
            checker: ConflictChecker::default(),
            default_duration: DEFAULT_DURATION_MINUTES,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_checker(mut self, checker: ConflictChecker) -> Self {
        self.checker = checker;
        self
    }

    pub fn with_default_duration(mut self, minutes: u32) -> Self {
        if minutes > 0 {
            self.default_duration = minutes;
        }
        self
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn checker(&self) -> ConflictChecker {
        self.checker
    }

    /// Fresh wizard honoring the configured default duration.
    pub fn new_wizard(
        &self,
        job_id: Option<JobId>,
        candidate_id: Option<CandidateId>,
    ) -> SchedulingWizard {
        SchedulingWizard::new(WizardDefaults {
            duration_min: self.default_duration,
            ..WizardDefaults::prefilled(job_id, candidate_id)
        })
    }

    pub fn job_options(&self) -> Result<Vec<Job>, RepositoryError> {
        Ok(options::job_options(&self.store.jobs()?))
    }

    pub fn candidate_options(
        &self,
        job_id: Option<JobId>,
    ) -> Result<Vec<CandidateOption>, RepositoryError> {
        let candidates = self.store.candidates()?;
        let applications = self.store.applications()?;
        Ok(options::candidate_options(job_id, &candidates, &applications))
    }

    pub fn available_interviewers(
        &self,
        wizard: &SchedulingWizard,
    ) -> Result<Vec<Employee>, RepositoryError> {
        let employees = self.store.employees()?;
        Ok(options::available_interviewers(
            &employees,
            &wizard.draft().interviewers,
        ))
    }

    /// Advisory conflicts for the wizard's current time and panel.
    pub fn conflicts(
        &self,
        wizard: &SchedulingWizard,
    ) -> Result<Vec<SchedulingConflict>, RepositoryError> {
        let draft = wizard.draft();
        self.conflicts_for(draft.scheduled_at, &draft.interviewer_ids())
    }

    pub fn conflicts_for(
        &self,
        scheduled_at: Option<DateTime<Utc>>,
        interviewer_ids: &[EmployeeId],
    ) -> Result<Vec<SchedulingConflict>, RepositoryError> {
        if scheduled_at.is_none() {
            return Ok(Vec::new());
        }

        let interviews = self.store.interviews()?;
        let participants = self.store.participants()?;
        let employees = self.store.employees()?;
        Ok(self.checker.find_conflicts(
            scheduled_at,
            interviewer_ids,
            BookingSnapshot {
                interviews: &interviews,
                participants: &participants,
                employees: &employees,
            },
        ))
    }

    pub fn interviews(&self) -> Result<Vec<InterviewSummary>, RepositoryError> {
        let participants = self.store.participants()?;
        Ok(self
            .store
            .interviews()?
            .into_iter()
            .map(|interview| InterviewSummary {
                ends_at: interview.ends_at(),
                status: interview.status_label(),
                participants: participants
                    .iter()
                    .filter(|link| link.interview_id == interview.id)
                    .cloned()
                    .collect(),
                interview,
            })
            .collect())
    }

    /// Commit the wizard. On failure the wizard keeps its step and draft.
    pub fn submit(
        &self,
        wizard: &mut SchedulingWizard,
    ) -> Result<ScheduledInterview, SchedulingError> {
        let plan = wizard.plan().ok_or(SchedulingError::Incomplete {
            step: wizard.step(),
        })?;
        let scheduled = self.commit(&plan)?;
        wizard.cancel();
        Ok(scheduled)
    }

    /// Replay a one-shot request through every wizard step, then commit.
    pub fn schedule(
        &self,
        request: ScheduleRequest,
    ) -> Result<ScheduledInterview, SchedulingError> {
        let mut wizard = self.new_wizard(request.job_id, request.candidate_id);
        advance(&mut wizard)?;
        advance(&mut wizard)?;

        for selection in &request.interviewers {
            wizard.add_interviewer(selection.employee_id)?;
            wizard.set_interviewer_role(selection.employee_id, selection.role)?;
        }
        advance(&mut wizard)?;

        if let Some(scheduled_at) = request.scheduled_at {
            wizard.set_scheduled_at(scheduled_at)?;
        }
        if let Some(duration_min) = request.duration_min {
            wizard.set_duration(duration_min)?;
        }
        advance(&mut wizard)?;

        if let Some(stage) = request.stage {
            wizard.set_stage(stage)?;
        }
        wizard.set_location(request.location)?;
        wizard.set_notes(request.notes)?;

        self.submit(&mut wizard)
    }

    fn commit(&self, plan: &InterviewPlan) -> Result<ScheduledInterview, SchedulingError> {
        let job = self
            .store
            .job(plan.job_id())?
            .ok_or(SchedulingError::UnknownJob(plan.job_id()))?;
        if !job.active {
            return Err(SchedulingError::InactiveJob(job.id));
        }
        let candidate = self
            .store
            .candidate(plan.candidate_id())?
            .ok_or(SchedulingError::UnknownCandidate(plan.candidate_id()))?;
        for employee_id in plan.interviewer_ids() {
            if self.store.employee(employee_id)?.is_none() {
                return Err(SchedulingError::UnknownEmployee(employee_id));
            }
        }

        let slot = plan.slot();
        let conflicts = self.conflicts_for(Some(slot.scheduled_at), &plan.interviewer_ids())?;
        let warning = conflict_warning(&conflicts);
        if let Some(warning) = &warning {
            warn!(job_id = %job.id, candidate_id = %candidate.id, "{warning}");
        }

        let now = self.clock.now();
        let resolution =
            resolve_or_create_application(self.store.as_ref(), job.id, candidate.id, now)?;

        let interview = self.store.insert_interview(NewInterview {
            application_id: resolution.application.id,
            scheduled_at: slot.scheduled_at,
            duration_min: slot.duration_min,
            stage: plan.stage(),
            location: plan.location().to_string(),
            result: None,
            notes: plan.notes().map(str::to_string),
        })?;

        let mut participants = Vec::with_capacity(plan.interviewers().len());
        for selection in plan.interviewers() {
            let link = InterviewEmployee {
                interview_id: interview.id,
                employee_id: selection.employee_id,
                role: selection.role,
                invited_at: now,
                attended: None,
                notes: None,
            };
            self.store.insert_participant(link.clone())?;
            participants.push(link);
        }

        info!(
            interview_id = %interview.id,
            application_id = %resolution.application.id,
            application_created = resolution.created,
            panel = participants.len(),
            stage = interview.stage.label(),
            "interview scheduled"
        );

        self.announce(
            &interview,
            Notification {
                level: NotificationLevel::Success,
                title: "Interview scheduled".to_string(),
                message: format!(
                    "{} interview with {} for {} is booked.",
                    interview.stage.label(),
                    candidate.name,
                    job.title
                ),
            },
        );
        if let Some(warning) = warning {
            self.announce(
                &interview,
                Notification {
                    level: NotificationLevel::Warning,
                    title: "Possible double booking".to_string(),
                    message: warning,
                },
            );
        }

        Ok(ScheduledInterview {
            application: resolution.application,
            application_created: resolution.created,
            interview,
            participants,
            conflicts,
        })
    }

    /// Delivery failures are logged; the booking stays committed.
    fn announce(&self, interview: &Interview, notification: Notification) {
        if let Err(error) = self.notifications.publish(notification) {
            warn!(interview_id = %interview.id, %error, "interview notification not delivered");
        }
    }
}

fn advance(wizard: &mut SchedulingWizard) -> Result<(), SchedulingError> {
    if wizard.next() {
        Ok(())
    } else {
        Err(SchedulingError::Incomplete {
            step: wizard.step(),
        })
    }
}

/// Error raised by the scheduling service.
#[derive(Debug, thiserror::Error)]
pub enum SchedulingError {
    #[error("{step} step is incomplete: {hint}", hint = .step.requirement())]
    Incomplete { step: WizardStep },
    #[error("job {0} does not exist")]
    UnknownJob(JobId),
    #[error("job {0} is no longer accepting interviews")]
    InactiveJob(JobId),
    #[error("candidate {0} does not exist")]
    UnknownCandidate(CandidateId),
    #[error("employee {0} does not exist")]
    UnknownEmployee(EmployeeId),
    #[error(transparent)]
    Wizard(#[from] WizardError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
