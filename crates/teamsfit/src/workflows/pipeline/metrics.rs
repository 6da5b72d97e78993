use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::{Application, ApplicationStatus, Candidate, CandidateStatus, Job};
use super::repository::{ApplicationRepository, CatalogRepository, RepositoryError};
use crate::workflows::interviews::domain::Interview;
use crate::workflows::interviews::repository::InterviewRepository;

/// Headline numbers for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardMetrics {
    pub jobs_open: usize,
    pub jobs_closed: usize,
    pub jobs_in_progress: usize,
    pub candidates_total: usize,
    pub candidates_active: usize,
    pub candidates_by_status: BTreeMap<CandidateStatus, usize>,
    pub interviews_pending: usize,
    pub interviews_decided: usize,
}

impl DashboardMetrics {
    pub fn load<S>(store: &S) -> Result<Self, RepositoryError>
    where
        S: CatalogRepository + ApplicationRepository + InterviewRepository + ?Sized,
    {
        Ok(Self::compute(
            &store.jobs()?,
            &store.candidates()?,
            &store.applications()?,
            &store.interviews()?,
        ))
    }

    pub fn compute(
        jobs: &[Job],
        candidates: &[Candidate],
        applications: &[Application],
        interviews: &[Interview],
    ) -> Self {
        let jobs_open = jobs.iter().filter(|job| job.active).count();
        let jobs_in_progress = jobs
            .iter()
            .filter(|job| job.active)
            .filter(|job| {
                applications.iter().any(|application| {
                    application.job_id == job.id
                        && matches!(
                            application.status,
                            ApplicationStatus::Interview | ApplicationStatus::Offer
                        )
                })
            })
            .count();

        let mut candidates_by_status: BTreeMap<CandidateStatus, usize> = CandidateStatus::ordered()
            .into_iter()
            .map(|status| (status, 0))
            .collect();
        for candidate in candidates {
            *candidates_by_status.entry(candidate.status).or_default() += 1;
        }

        let interviews_pending = interviews
            .iter()
            .filter(|interview| interview.is_pending())
            .count();

        Self {
            jobs_open,
            jobs_closed: jobs.len() - jobs_open,
            jobs_in_progress,
            candidates_total: candidates.len(),
            candidates_active: candidates
                .iter()
                .filter(|candidate| candidate.status != CandidateStatus::Rejected)
                .count(),
            candidates_by_status,
            interviews_pending,
            interviews_decided: interviews.len() - interviews_pending,
        }
    }

    /// Status label paired with its count, in funnel order.
    pub fn status_breakdown(&self) -> Vec<(&'static str, usize)> {
        CandidateStatus::ordered()
            .into_iter()
            .map(|status| {
                (
                    status.label(),
                    self.candidates_by_status.get(&status).copied().unwrap_or(0),
                )
            })
            .collect()
    }
}
