//! Picker contents for the wizard, computed from repository snapshots.

use serde::Serialize;

use super::domain::InterviewerSelection;
use crate::workflows::pipeline::domain::{Application, Candidate, Employee, Job, JobId};

pub const NO_APPLICATION_NOTE: &str = "No application yet";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateOption {
    pub candidate: Candidate,
    pub has_application: bool,
}

impl CandidateOption {
    /// Hint shown next to candidates who will get an application on commit.
    pub fn note(&self) -> Option<&'static str> {
        (!self.has_application).then_some(NO_APPLICATION_NOTE)
    }
}

/// Only active jobs accept new interviews.
pub fn job_options(jobs: &[Job]) -> Vec<Job> {
    jobs.iter().filter(|job| job.active).cloned().collect()
}

/// Candidates who applied to `job_id` first, then everyone else, each group in store order.
pub fn candidate_options(
    job_id: Option<JobId>,
    candidates: &[Candidate],
    applications: &[Application],
) -> Vec<CandidateOption> {
    let applied = |candidate: &Candidate| {
        job_id.is_some_and(|job_id| {
            applications
                .iter()
                .any(|application| application.links(job_id, candidate.id))
        })
    };

    let (with_application, without_application): (Vec<&Candidate>, Vec<&Candidate>) =
        candidates.iter().partition(|candidate| applied(candidate));

    with_application
        .into_iter()
        .map(|candidate| CandidateOption {
            candidate: candidate.clone(),
            has_application: true,
        })
        .chain(
            without_application
                .into_iter()
                .map(|candidate| CandidateOption {
                    candidate: candidate.clone(),
                    has_application: false,
                }),
        )
        .collect()
}

/// Employees not already on the panel.
pub fn available_interviewers(
    employees: &[Employee],
    chosen: &[InterviewerSelection],
) -> Vec<Employee> {
    employees
        .iter()
        .filter(|employee| {
            !chosen
                .iter()
                .any(|selection| selection.employee_id == employee.id)
        })
        .cloned()
        .collect()
}
