use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

use super::interviews::conflicts::conflict_warning;
use super::interviews::repository::{InterviewRepository, NotificationPublisher};
use super::interviews::service::{InterviewSchedulingService, ScheduleRequest};
use super::pipeline::domain::{EmployeeId, JobId};
use super::pipeline::intake::{
    register_candidate, register_job, register_team, CandidateIntake, JobIntake, TeamIntake,
};
use super::pipeline::metrics::DashboardMetrics;
use super::pipeline::repository::{ApplicationRepository, CatalogRepository};
use crate::error::AppError;

type SharedService<S, N> = Arc<InterviewSchedulingService<S, N>>;

/// JSON endpoints for the dashboard pages and the scheduling wizard.
pub fn dashboard_router<S, N>(service: SharedService<S, N>) -> Router
where
    S: CatalogRepository + ApplicationRepository + InterviewRepository + 'static,
    N: NotificationPublisher + 'static,
{
    Router::new()
        .route(
            "/api/v1/teams",
            get(list_teams::<S, N>).post(create_team::<S, N>),
        )
        .route(
            "/api/v1/jobs",
            get(list_jobs::<S, N>).post(create_job::<S, N>),
        )
        .route(
            "/api/v1/jobs/:job_id/candidates",
            get(candidate_options::<S, N>),
        )
        .route(
            "/api/v1/candidates",
            get(list_candidates::<S, N>).post(create_candidate::<S, N>),
        )
        .route("/api/v1/employees", get(list_employees::<S, N>))
        .route("/api/v1/dashboard/metrics", get(metrics::<S, N>))
        .route(
            "/api/v1/interviews",
            get(list_interviews::<S, N>).post(schedule_interview::<S, N>),
        )
        .route(
            "/api/v1/interviews/conflicts",
            post(check_conflicts::<S, N>),
        )
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ConflictQuery {
    scheduled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    interviewer_ids: Vec<EmployeeId>,
}

pub(crate) async fn list_teams<S, N>(State(service): State<SharedService<S, N>>) -> Response
where
    S: CatalogRepository + ApplicationRepository + InterviewRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.store().teams() {
        Ok(teams) => (StatusCode::OK, Json(teams)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn create_team<S, N>(
    State(service): State<SharedService<S, N>>,
    Json(intake): Json<TeamIntake>,
) -> Response
where
    S: CatalogRepository + ApplicationRepository + InterviewRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match register_team(service.store().as_ref(), intake) {
        Ok(team) => (StatusCode::CREATED, Json(team)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn list_jobs<S, N>(State(service): State<SharedService<S, N>>) -> Response
where
    S: CatalogRepository + ApplicationRepository + InterviewRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.store().jobs() {
        Ok(jobs) => (StatusCode::OK, Json(jobs)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn create_job<S, N>(
    State(service): State<SharedService<S, N>>,
    Json(intake): Json<JobIntake>,
) -> Response
where
    S: CatalogRepository + ApplicationRepository + InterviewRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match register_job(service.store().as_ref(), intake, service.clock().today()) {
        Ok(job) => (StatusCode::CREATED, Json(job)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn candidate_options<S, N>(
    State(service): State<SharedService<S, N>>,
    Path(job_id): Path<u64>,
) -> Response
where
    S: CatalogRepository + ApplicationRepository + InterviewRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.candidate_options(Some(JobId(job_id))) {
        Ok(options) => {
            let payload: Vec<_> = options
                .into_iter()
                .map(|option| {
                    json!({
                        "note": option.note(),
                        "has_application": option.has_application,
                        "candidate": option.candidate,
                    })
                })
                .collect();
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn list_candidates<S, N>(State(service): State<SharedService<S, N>>) -> Response
where
    S: CatalogRepository + ApplicationRepository + InterviewRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.store().candidates() {
        Ok(candidates) => (StatusCode::OK, Json(candidates)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn create_candidate<S, N>(
    State(service): State<SharedService<S, N>>,
    Json(intake): Json<CandidateIntake>,
) -> Response
where
    S: CatalogRepository + ApplicationRepository + InterviewRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match register_candidate(service.store().as_ref(), intake, service.clock().today()) {
        Ok(candidate) => (StatusCode::CREATED, Json(candidate)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn list_employees<S, N>(State(service): State<SharedService<S, N>>) -> Response
where
    S: CatalogRepository + ApplicationRepository + InterviewRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.store().employees() {
        Ok(employees) => (StatusCode::OK, Json(employees)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn metrics<S, N>(State(service): State<SharedService<S, N>>) -> Response
where
    S: CatalogRepository + ApplicationRepository + InterviewRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match DashboardMetrics::load(service.store().as_ref()) {
        Ok(metrics) => (StatusCode::OK, Json(metrics)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn list_interviews<S, N>(State(service): State<SharedService<S, N>>) -> Response
where
    S: CatalogRepository + ApplicationRepository + InterviewRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.interviews() {
        Ok(interviews) => (StatusCode::OK, Json(interviews)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn check_conflicts<S, N>(
    State(service): State<SharedService<S, N>>,
    Json(query): Json<ConflictQuery>,
) -> Response
where
    S: CatalogRepository + ApplicationRepository + InterviewRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.conflicts_for(query.scheduled_at, &query.interviewer_ids) {
        Ok(conflicts) => {
            let payload = json!({
                "warning": conflict_warning(&conflicts),
                "conflicts": conflicts,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(error) => AppError::from(error).into_response(),
    }
}

pub(crate) async fn schedule_interview<S, N>(
    State(service): State<SharedService<S, N>>,
    Json(request): Json<ScheduleRequest>,
) -> Response
where
    S: CatalogRepository + ApplicationRepository + InterviewRepository + 'static,
    N: NotificationPublisher + 'static,
{
    match service.schedule(request) {
        Ok(scheduled) => (StatusCode::CREATED, Json(scheduled)).into_response(),
        Err(error) => AppError::from(error).into_response(),
    }
}
