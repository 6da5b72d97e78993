use serde::{Deserialize, Serialize};

use super::domain::{Interview, InterviewEmployee, InterviewId, NewInterview};
use crate::workflows::pipeline::repository::RepositoryError;

/// Storage for interviews and their panel links.
pub trait InterviewRepository: Send + Sync {
    fn interviews(&self) -> Result<Vec<Interview>, RepositoryError>;
    fn interview(&self, id: InterviewId) -> Result<Option<Interview>, RepositoryError>;
    fn insert_interview(&self, interview: NewInterview) -> Result<Interview, RepositoryError>;
    fn participants(&self) -> Result<Vec<InterviewEmployee>, RepositoryError>;
    fn participants_for(
        &self,
        interview_id: InterviewId,
    ) -> Result<Vec<InterviewEmployee>, RepositoryError>;
    fn insert_participant(&self, link: InterviewEmployee) -> Result<(), RepositoryError>;
}

/// Outbound hook for user-facing notices (toasts, e-mail adapters).
pub trait NotificationPublisher: Send + Sync {
    fn publish(&self, notification: Notification) -> Result<(), NotificationError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification transport unavailable: {0}")]
    Transport(String),
}
