use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::workflows::pipeline::domain::{ApplicationId, EmployeeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterviewId(pub u64);

impl fmt::Display for InterviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Interview pipeline phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewStage {
    #[default]
    Screen,
    Technical,
    SystemDesign,
    HiringManager,
}

impl InterviewStage {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Screen,
            Self::Technical,
            Self::SystemDesign,
            Self::HiringManager,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Screen => "Screen",
            Self::Technical => "Technical",
            Self::SystemDesign => "System Design",
            Self::HiringManager => "Hiring Manager",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Screen => "Initial Screening",
            Self::Technical => "Technical Interview",
            Self::SystemDesign => "System Design Round",
            Self::HiringManager => "Final Interview",
        }
    }
}

/// Outcome of a completed interview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewResult {
    Pass,
    Fail,
    OnHold,
    Canceled,
}

impl InterviewResult {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Fail => "Fail",
            Self::OnHold => "On Hold",
            Self::Canceled => "Canceled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewerRole {
    Lead,
    #[default]
    Panel,
    #[serde(rename = "hm")]
    HiringManager,
}

impl InterviewerRole {
    pub const fn ordered() -> [Self; 3] {
        [Self::Lead, Self::Panel, Self::HiringManager]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Lead => "Lead",
            Self::Panel => "Panel",
            Self::HiringManager => "Hiring Manager",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interview {
    pub id: InterviewId,
    pub application_id: ApplicationId,
    pub scheduled_at: DateTime<Utc>,
    pub duration_min: u32,
    pub stage: InterviewStage,
    pub location: String,
    pub result: Option<InterviewResult>,
    pub notes: Option<String>,
}

impl Interview {
    /// A null result means the interview is still scheduled.
    pub fn is_pending(&self) -> bool {
        self.result.is_none()
    }

    pub fn ends_at(&self) -> DateTime<Utc> {
        self.scheduled_at + Duration::minutes(i64::from(self.duration_min))
    }

    pub fn status_label(&self) -> &'static str {
        match self.result {
            None => "Scheduled",
            Some(InterviewResult::Canceled) => "Cancelled",
            Some(_) => "Completed",
        }
    }
}

/// Interview fields supplied by callers; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInterview {
    pub application_id: ApplicationId,
    pub scheduled_at: DateTime<Utc>,
    pub duration_min: u32,
    pub stage: InterviewStage,
    pub location: String,
    pub result: Option<InterviewResult>,
    pub notes: Option<String>,
}

/// Join record assigning an employee to an interview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewEmployee {
    pub interview_id: InterviewId,
    pub employee_id: EmployeeId,
    pub role: InterviewerRole,
    pub invited_at: DateTime<Utc>,
    pub attended: Option<bool>,
    pub notes: Option<String>,
}

/// An interviewer picked in the wizard together with their panel role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewerSelection {
    pub employee_id: EmployeeId,
    #[serde(default)]
    pub role: InterviewerRole,
}
