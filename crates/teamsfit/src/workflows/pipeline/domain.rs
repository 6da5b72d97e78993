use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

record_id!(
    /// Identifier for a hiring team.
    TeamId
);
record_id!(
    /// Identifier for an advertised position.
    JobId
);
record_id!(
    /// Identifier for a person in the recruiting pipeline.
    CandidateId
);
record_id!(
    /// Identifier for an internal employee who can interview.
    EmployeeId
);
record_id!(
    /// Identifier linking one candidate to one job.
    ApplicationId
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub organization_id: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    #[default]
    FullTime,
    PartTime,
    Contract,
}

impl EmploymentType {
    pub const fn ordered() -> [Self; 3] {
        [Self::FullTime, Self::PartTime, Self::Contract]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::FullTime => "Full-time",
            Self::PartTime => "Part-time",
            Self::Contract => "Contract",
        }
    }
}

/// Advertised position. Only active jobs can have interviews scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub active: bool,
    pub created_on: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<TeamId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_attachment: Option<String>,
}

impl Job {
    pub fn status_label(&self) -> &'static str {
        if self.active {
            "Active"
        } else {
            "Inactive"
        }
    }
}

/// Where a candidate currently sits in the hiring funnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    New,
    Screening,
    Interview,
    Offer,
    Rejected,
}

impl CandidateStatus {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::New,
            Self::Screening,
            Self::Interview,
            Self::Offer,
            Self::Rejected,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Screening => "Screening",
            Self::Interview => "Interview",
            Self::Offer => "Offer",
            Self::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seniority {
    Junior,
    Middle,
    Senior,
    Lead,
}

impl Seniority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Junior => "Junior",
            Self::Middle => "Middle",
            Self::Senior => "Senior",
            Self::Lead => "Lead",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Education {
    #[serde(rename = "High school")]
    HighSchool,
    Bachelor,
    Master,
    #[serde(rename = "PhD")]
    Doctorate,
}

impl Education {
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighSchool => "High school",
            Self::Bachelor => "Bachelor",
            Self::Master => "Master",
            Self::Doctorate => "PhD",
        }
    }
}

/// Optional profile captured by the intake form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_expectation: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seniority: Option<Seniority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highest_education: Option<Education>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_of_experience: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    pub applied_on: NaiveDate,
    pub status: CandidateStatus,
    #[serde(default)]
    pub profile: CandidateProfile,
}

/// Read-only reference data for people who sit on interview panels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub full_name: String,
    pub title: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    New,
    InReview,
    Interview,
    Offer,
    Rejected,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InReview => "In Review",
            Self::Interview => "Interview",
            Self::Offer => "Offer",
            Self::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub job_id: JobId,
    pub candidate_id: CandidateId,
    pub status: ApplicationStatus,
    pub source: String,
    pub submitted_at: DateTime<Utc>,
}

impl Application {
    pub fn links(&self, job_id: JobId, candidate_id: CandidateId) -> bool {
        self.job_id == job_id && self.candidate_id == candidate_id
    }
}

/// Application fields supplied by callers; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub job_id: JobId,
    pub candidate_id: CandidateId,
    pub status: ApplicationStatus,
    pub source: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeam {
    pub name: String,
    pub organization_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJob {
    pub title: String,
    pub location: String,
    pub employment_type: EmploymentType,
    pub active: bool,
    pub created_on: NaiveDate,
    pub team_id: Option<TeamId>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub pdf_attachment: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewCandidate {
    pub name: String,
    pub email: String,
    pub position: Option<String>,
    pub applied_on: NaiveDate,
    pub status: CandidateStatus,
    pub profile: CandidateProfile,
}
