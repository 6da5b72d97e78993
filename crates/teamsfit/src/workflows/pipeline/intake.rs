//! Validated intake forms for teams, jobs, and candidates.
//!
//! Forms arrive with blank strings for untouched inputs; `normalize` turns those into
//! `None` before `validator` runs so optional email and URL fields accept an empty value.

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;
use validator::{Validate, ValidationErrors};

use super::domain::{
    Candidate, CandidateProfile, CandidateStatus, Education, EmploymentType, Job, NewCandidate,
    NewJob, NewTeam, Seniority, Team, TeamId,
};
use super::repository::{CatalogRepository, RepositoryError};

pub const DEFAULT_ORGANIZATION_ID: u64 = 1;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TeamIntake {
    #[validate(length(min = 1, max = 100, message = "Team name is required"))]
    pub name: String,
    pub organization_id: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct JobIntake {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Title is required and must be less than 200 characters"
    ))]
    pub title: String,
    #[validate(required(message = "Team is required"))]
    pub team_id: Option<TeamId>,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub location: Option<String>,
    pub employment_type: Option<EmploymentType>,
    /// Filename of an attached PDF. Only the name is kept.
    pub pdf_attachment: Option<String>,
}

impl JobIntake {
    fn normalize(mut self) -> Self {
        self.title = self.title.trim().to_string();
        self.description = blank_to_none(self.description);
        self.requirements = blank_to_none(self.requirements);
        self.location = blank_to_none(self.location);
        self.pdf_attachment = blank_to_none(self.pdf_attachment);
        self
    }

    /// Description shown for a job whose text came from an attached PDF.
    fn effective_description(&self) -> Option<String> {
        match &self.pdf_attachment {
            Some(file) => Some(pdf_placeholder(file)),
            None => self.description.clone(),
        }
    }
}

pub fn pdf_placeholder(file_name: &str) -> String {
    format!("(PDF attached: {file_name})\n\nExtracted job description from PDF...")
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CandidateIntake {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Full name is required and must be less than 100 characters"
    ))]
    pub full_name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    pub contact: Option<String>,
    pub phone: Option<String>,
    #[validate(url(message = "Invalid LinkedIn URL"))]
    pub linkedin_url: Option<String>,
    pub cv_file: Option<String>,
    #[validate(range(min = 0, message = "Salary must be positive"))]
    pub salary_expectation: Option<i64>,
    pub seniority: Option<Seniority>,
    pub role: Option<String>,
    pub highest_education: Option<Education>,
    #[validate(range(min = 0, max = 60, message = "Years must be between 0 and 60"))]
    pub years_of_experience: Option<i32>,
    pub position: Option<String>,
}

impl CandidateIntake {
    fn normalize(mut self) -> Self {
        self.full_name = self.full_name.trim().to_string();
        self.email = blank_to_none(self.email);
        self.contact = blank_to_none(self.contact);
        self.phone = blank_to_none(self.phone);
        self.linkedin_url = blank_to_none(self.linkedin_url);
        self.cv_file = blank_to_none(self.cv_file);
        self.role = blank_to_none(self.role);
        self.position = blank_to_none(self.position);
        self
    }
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

pub fn register_team<R>(repository: &R, intake: TeamIntake) -> Result<Team, IntakeError>
where
    R: CatalogRepository + ?Sized,
{
    let intake = TeamIntake {
        name: intake.name.trim().to_string(),
        ..intake
    };
    intake.validate()?;

    let team = repository.insert_team(NewTeam {
        name: intake.name,
        organization_id: intake.organization_id.unwrap_or(DEFAULT_ORGANIZATION_ID),
    })?;
    debug!(team_id = %team.id, "team registered");
    Ok(team)
}

/// New jobs open as active and belong to an existing team.
pub fn register_job<R>(
    repository: &R,
    intake: JobIntake,
    today: NaiveDate,
) -> Result<Job, IntakeError>
where
    R: CatalogRepository + ?Sized,
{
    let intake = intake.normalize();
    intake.validate()?;

    let team_id = intake
        .team_id
        .ok_or_else(|| IntakeError::Validation(ValidationErrors::new()))?;
    if repository.team(team_id)?.is_none() {
        return Err(IntakeError::UnknownTeam(team_id));
    }

    let description = intake.effective_description();
    let job = repository.insert_job(NewJob {
        title: intake.title,
        location: intake.location.unwrap_or_default(),
        employment_type: intake.employment_type.unwrap_or_default(),
        active: true,
        created_on: today,
        team_id: Some(team_id),
        description,
        requirements: intake.requirements,
        pdf_attachment: intake.pdf_attachment,
    })?;
    debug!(job_id = %job.id, %team_id, "job registered");
    Ok(job)
}

/// New candidates enter the pipeline as `new`, applied today.
pub fn register_candidate<R>(
    repository: &R,
    intake: CandidateIntake,
    today: NaiveDate,
) -> Result<Candidate, IntakeError>
where
    R: CatalogRepository + ?Sized,
{
    let intake = intake.normalize();
    intake.validate()?;

    let candidate = repository.insert_candidate(NewCandidate {
        name: intake.full_name,
        email: intake.email.unwrap_or_default(),
        position: intake.position.or_else(|| intake.role.clone()),
        applied_on: today,
        status: CandidateStatus::New,
        profile: CandidateProfile {
            contact: intake.contact,
            phone: intake.phone,
            linkedin_url: intake.linkedin_url,
            cv_file: intake.cv_file,
            salary_expectation: intake.salary_expectation,
            seniority: intake.seniority,
            role: intake.role,
            highest_education: intake.highest_education,
            years_of_experience: intake.years_of_experience,
        },
    })?;
    debug!(candidate_id = %candidate.id, "candidate registered");
    Ok(candidate)
}

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("invalid form: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("team {0} does not exist")]
    UnknownTeam(TeamId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl IntakeError {
    /// Field names that failed validation, sorted.
    pub fn invalid_fields(&self) -> Vec<String> {
        match self {
            Self::Validation(errors) => {
                let mut fields: Vec<String> = errors
                    .field_errors()
                    .keys()
                    .map(|field| field.to_string())
                    .collect();
                fields.sort();
                fields
            }
            _ => Vec::new(),
        }
    }
}
