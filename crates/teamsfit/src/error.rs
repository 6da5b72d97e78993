use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::interviews::schedule_time::ScheduleTimeError;
use crate::workflows::interviews::service::SchedulingError;
use crate::workflows::interviews::wizard::WizardError;
use crate::workflows::pipeline::intake::IntakeError;
use crate::workflows::pipeline::repository::RepositoryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

/// Top-level error for the binaries and any handler that bubbles failures up.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Repository(RepositoryError),
    Scheduling(SchedulingError),
    Intake(IntakeError),
    ScheduleTime(ScheduleTimeError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {err}"),
            AppError::Telemetry(err) => write!(f, "telemetry error: {err}"),
            AppError::Io(err) => write!(f, "io error: {err}"),
            AppError::Server(err) => write!(f, "server error: {err}"),
            AppError::Repository(err) => write!(f, "storage error: {err}"),
            AppError::Scheduling(err) => write!(f, "scheduling error: {err}"),
            AppError::Intake(err) => write!(f, "intake error: {err}"),
            AppError::ScheduleTime(err) => write!(f, "time error: {err}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Repository(err) => Some(err),
            AppError::Scheduling(err) => Some(err),
            AppError::Intake(err) => Some(err),
            AppError::ScheduleTime(err) => Some(err),
        }
    }
}

impl AppError {
    /// HTTP status for this failure. Repository failures keep their own status wherever
    /// they are nested.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Repository(err)
            | AppError::Scheduling(SchedulingError::Repository(err))
            | AppError::Intake(IntakeError::Repository(err)) => repository_status(err),
            AppError::Scheduling(
                SchedulingError::UnknownJob(_)
                | SchedulingError::UnknownCandidate(_)
                | SchedulingError::UnknownEmployee(_),
            )
            | AppError::Intake(IntakeError::UnknownTeam(_)) => StatusCode::NOT_FOUND,
            AppError::Scheduling(_) | AppError::Intake(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ScheduleTime(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_) | AppError::Telemetry(_) | AppError::Io(_) | AppError::Server(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

fn repository_status(err: &RepositoryError) -> StatusCode {
    match err {
        RepositoryError::Conflict(_) => StatusCode::CONFLICT,
        RepositoryError::NotFound(_) => StatusCode::NOT_FOUND,
        RepositoryError::Unavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::Intake(err @ IntakeError::Validation(_)) => json!({
                "error": self.to_string(),
                "fields": err.invalid_fields(),
            }),
            _ => json!({ "error": self.to_string() }),
        };
        (status, Json(body)).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<RepositoryError> for AppError {
    fn from(value: RepositoryError) -> Self {
        Self::Repository(value)
    }
}

impl From<SchedulingError> for AppError {
    fn from(value: SchedulingError) -> Self {
        Self::Scheduling(value)
    }
}

impl From<WizardError> for AppError {
    fn from(value: WizardError) -> Self {
        Self::Scheduling(SchedulingError::Wizard(value))
    }
}

impl From<IntakeError> for AppError {
    fn from(value: IntakeError) -> Self {
        Self::Intake(value)
    }
}

impl From<ScheduleTimeError> for AppError {
    fn from(value: ScheduleTimeError) -> Self {
        Self::ScheduleTime(value)
    }
}
