//! Five-step interview scheduling wizard.
//!
//! The wizard keeps one editable draft and a step state. Each state variant carries the
//! values confirmed when the user advanced past the earlier steps, so an `InterviewPlan`
//! can only be produced from the final step with every earlier predicate satisfied.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{InterviewStage, InterviewerRole, InterviewerSelection};
use crate::workflows::pipeline::domain::{CandidateId, EmployeeId, JobId};

pub const DEFAULT_DURATION_MINUTES: u32 = 60;
pub const MAX_DURATION_MINUTES: u32 = 480;
pub const DURATION_PRESETS: [u32; 4] = [30, 45, 60, 90];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Job,
    Candidate,
    Interviewers,
    Schedule,
    Details,
}

impl WizardStep {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Job,
            Self::Candidate,
            Self::Interviewers,
            Self::Schedule,
            Self::Details,
        ]
    }

    /// 1-based position shown in the step indicator.
    pub const fn number(self) -> u8 {
        match self {
            Self::Job => 1,
            Self::Candidate => 2,
            Self::Interviewers => 3,
            Self::Schedule => 4,
            Self::Details => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Job => "Job",
            Self::Candidate => "Candidate",
            Self::Interviewers => "Interviewers",
            Self::Schedule => "Schedule",
            Self::Details => "Details",
        }
    }

    /// Hint shown while the step's predicate is unmet.
    pub const fn requirement(self) -> &'static str {
        match self {
            Self::Job => "Please select a job to continue",
            Self::Candidate => "Please select a candidate to continue",
            Self::Interviewers => "Please add at least one interviewer",
            Self::Schedule => "Please select a date and time",
            Self::Details => "Please choose an interview stage",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Values the wizard starts from and returns to on cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardDefaults {
    pub job_id: Option<JobId>,
    pub candidate_id: Option<CandidateId>,
    pub duration_min: u32,
    pub stage: InterviewStage,
}

impl Default for WizardDefaults {
    fn default() -> Self {
        Self {
            job_id: None,
            candidate_id: None,
            duration_min: DEFAULT_DURATION_MINUTES,
            stage: InterviewStage::Screen,
        }
    }
}

impl WizardDefaults {
    pub fn prefilled(job_id: Option<JobId>, candidate_id: Option<CandidateId>) -> Self {
        Self {
            job_id,
            candidate_id,
            ..Self::default()
        }
    }
}

/// Editable form buffer shared by every step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterviewDraft {
    pub job_id: Option<JobId>,
    pub candidate_id: Option<CandidateId>,
    pub interviewers: Vec<InterviewerSelection>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub duration_min: u32,
    pub stage: Option<InterviewStage>,
    pub location: String,
    pub notes: String,
}

impl InterviewDraft {
    fn from_defaults(defaults: &WizardDefaults) -> Self {
        Self {
            job_id: defaults.job_id,
            candidate_id: defaults.candidate_id,
            interviewers: Vec::new(),
            scheduled_at: None,
            duration_min: defaults.duration_min,
            stage: Some(defaults.stage),
            location: String::new(),
            notes: String::new(),
        }
    }

    pub fn interviewer_ids(&self) -> Vec<EmployeeId> {
        self.interviewers
            .iter()
            .map(|selection| selection.employee_id)
            .collect()
    }

    fn slot(&self) -> Option<ScheduledSlot> {
        match self.scheduled_at {
            Some(scheduled_at) if self.duration_min > 0 => Some(ScheduledSlot {
                scheduled_at,
                duration_min: self.duration_min,
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduledSlot {
    pub scheduled_at: DateTime<Utc>,
    pub duration_min: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum WizardState {
    Job,
    Candidate {
        job_id: JobId,
    },
    Interviewers {
        job_id: JobId,
        candidate_id: CandidateId,
    },
    Schedule {
        job_id: JobId,
        candidate_id: CandidateId,
        interviewers: Vec<InterviewerSelection>,
    },
    Details {
        job_id: JobId,
        candidate_id: CandidateId,
        interviewers: Vec<InterviewerSelection>,
        slot: ScheduledSlot,
    },
}

impl WizardState {
    fn step(&self) -> WizardStep {
        match self {
            Self::Job => WizardStep::Job,
            Self::Candidate { .. } => WizardStep::Candidate,
            Self::Interviewers { .. } => WizardStep::Interviewers,
            Self::Schedule { .. } => WizardStep::Schedule,
            Self::Details { .. } => WizardStep::Details,
        }
    }
}

/// Fully collected interview request, ready to be committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterviewPlan {
    job_id: JobId,
    candidate_id: CandidateId,
    interviewers: Vec<InterviewerSelection>,
    slot: ScheduledSlot,
    stage: InterviewStage,
    location: String,
    notes: Option<String>,
}

impl InterviewPlan {
    pub fn job_id(&self) -> JobId {
        self.job_id
    }

    pub fn candidate_id(&self) -> CandidateId {
        self.candidate_id
    }

    pub fn interviewers(&self) -> &[InterviewerSelection] {
        &self.interviewers
    }

    pub fn interviewer_ids(&self) -> Vec<EmployeeId> {
        self.interviewers
            .iter()
            .map(|selection| selection.employee_id)
            .collect()
    }

    pub fn slot(&self) -> ScheduledSlot {
        self.slot
    }

    pub fn stage(&self) -> InterviewStage {
        self.stage
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("{action} is only available on the {expected} step (currently on {current})")]
    WrongStep {
        action: &'static str,
        expected: WizardStep,
        current: WizardStep,
    },
    #[error("employee {0} is already on the interview panel")]
    DuplicateInterviewer(EmployeeId),
    #[error("employee {0} is not on the interview panel")]
    UnknownInterviewer(EmployeeId),
    #[error("duration must be at most {max} minutes, got {0}", max = MAX_DURATION_MINUTES)]
    DurationOutOfRange(u32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulingWizard {
    defaults: WizardDefaults,
    draft: InterviewDraft,
    state: WizardState,
}

impl Default for SchedulingWizard {
    fn default() -> Self {
        Self::new(WizardDefaults::default())
    }
}

impl SchedulingWizard {
    /// Always opens on the job step, even when job or candidate are pre-filled.
    pub fn new(defaults: WizardDefaults) -> Self {
        let draft = InterviewDraft::from_defaults(&defaults);
        Self {
            defaults,
            draft,
            state: WizardState::Job,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.state.step()
    }

    pub fn step_number(&self) -> u8 {
        self.step().number()
    }

    pub fn draft(&self) -> &InterviewDraft {
        &self.draft
    }

    pub fn defaults(&self) -> &WizardDefaults {
        &self.defaults
    }

    pub fn is_last_step(&self) -> bool {
        self.step() == WizardStep::Details
    }

    /// Completeness predicate for the current step.
    pub fn can_proceed(&self) -> bool {
        match self.step() {
            WizardStep::Job => self.draft.job_id.is_some(),
            WizardStep::Candidate => self.draft.candidate_id.is_some(),
            WizardStep::Interviewers => !self.draft.interviewers.is_empty(),
            WizardStep::Schedule => self.draft.slot().is_some(),
            WizardStep::Details => self.draft.stage.is_some(),
        }
    }

    /// Advance one step. Returns `false` without changing anything when the current
    /// predicate fails or the wizard is already on the last step.
    pub fn next(&mut self) -> bool {
        let advanced = match &self.state {
            WizardState::Job => self
                .draft
                .job_id
                .map(|job_id| WizardState::Candidate { job_id }),
            WizardState::Candidate { job_id } => {
                self.draft
                    .candidate_id
                    .map(|candidate_id| WizardState::Interviewers {
                        job_id: *job_id,
                        candidate_id,
                    })
            }
            WizardState::Interviewers {
                job_id,
                candidate_id,
            } => (!self.draft.interviewers.is_empty()).then(|| WizardState::Schedule {
                job_id: *job_id,
                candidate_id: *candidate_id,
                interviewers: self.draft.interviewers.clone(),
            }),
            WizardState::Schedule {
                job_id,
                candidate_id,
                interviewers,
            } => self.draft.slot().map(|slot| WizardState::Details {
                job_id: *job_id,
                candidate_id: *candidate_id,
                interviewers: interviewers.clone(),
                slot,
            }),
            WizardState::Details { .. } => None,
        };

        match advanced {
            Some(state) => {
                self.state = state;
                true
            }
            None => false,
        }
    }

    /// Step back once. Collected values stay in the draft.
    pub fn back(&mut self) -> bool {
        let previous = match &self.state {
            WizardState::Job => return false,
            WizardState::Candidate { .. } => WizardState::Job,
            WizardState::Interviewers { job_id, .. } => WizardState::Candidate { job_id: *job_id },
            WizardState::Schedule {
                job_id,
                candidate_id,
                ..
            } => WizardState::Interviewers {
                job_id: *job_id,
                candidate_id: *candidate_id,
            },
            WizardState::Details {
                job_id,
                candidate_id,
                interviewers,
                ..
            } => WizardState::Schedule {
                job_id: *job_id,
                candidate_id: *candidate_id,
                interviewers: interviewers.clone(),
            },
        };
        self.state = previous;
        true
    }

    /// Discard everything and return to the first step.
    pub fn cancel(&mut self) {
        self.draft = InterviewDraft::from_defaults(&self.defaults);
        self.state = WizardState::Job;
    }

    /// The commit payload, available only on the details step with a stage chosen.
    pub fn plan(&self) -> Option<InterviewPlan> {
        match &self.state {
            WizardState::Details {
                job_id,
                candidate_id,
                interviewers,
                slot,
            } => self.draft.stage.map(|stage| InterviewPlan {
                job_id: *job_id,
                candidate_id: *candidate_id,
                interviewers: interviewers.clone(),
                slot: *slot,
                stage,
                location: self.draft.location.trim().to_string(),
                notes: Some(self.draft.notes.trim())
                    .filter(|notes| !notes.is_empty())
                    .map(str::to_string),
            }),
            _ => None,
        }
    }

    pub fn select_job(&mut self, job_id: JobId) -> Result<(), WizardError> {
        self.require(WizardStep::Job, "selecting a job")?;
        self.draft.job_id = Some(job_id);
        Ok(())
    }

    pub fn select_candidate(&mut self, candidate_id: CandidateId) -> Result<(), WizardError> {
        self.require(WizardStep::Candidate, "selecting a candidate")?;
        self.draft.candidate_id = Some(candidate_id);
        Ok(())
    }

    /// Add an interviewer with the default `panel` role.
    pub fn add_interviewer(&mut self, employee_id: EmployeeId) -> Result<(), WizardError> {
        self.require(WizardStep::Interviewers, "adding an interviewer")?;
        if self
            .draft
            .interviewers
            .iter()
            .any(|selection| selection.employee_id == employee_id)
        {
            return Err(WizardError::DuplicateInterviewer(employee_id));
        }
        self.draft.interviewers.push(InterviewerSelection {
            employee_id,
            role: InterviewerRole::default(),
        });
        Ok(())
    }

    pub fn set_interviewer_role(
        &mut self,
        employee_id: EmployeeId,
        role: InterviewerRole,
    ) -> Result<(), WizardError> {
        self.require(WizardStep::Interviewers, "changing an interviewer role")?;
        let selection = self
            .draft
            .interviewers
            .iter_mut()
            .find(|selection| selection.employee_id == employee_id)
            .ok_or(WizardError::UnknownInterviewer(employee_id))?;
        selection.role = role;
        Ok(())
    }

    pub fn remove_interviewer(&mut self, employee_id: EmployeeId) -> Result<(), WizardError> {
        self.require(WizardStep::Interviewers, "removing an interviewer")?;
        let before = self.draft.interviewers.len();
        self.draft
            .interviewers
            .retain(|selection| selection.employee_id != employee_id);
        if self.draft.interviewers.len() == before {
            return Err(WizardError::UnknownInterviewer(employee_id));
        }
        Ok(())
    }

    pub fn set_scheduled_at(&mut self, scheduled_at: DateTime<Utc>) -> Result<(), WizardError> {
        self.require(WizardStep::Schedule, "setting the interview time")?;
        self.draft.scheduled_at = Some(scheduled_at);
        Ok(())
    }

    /// Zero is kept in the draft but fails the schedule predicate.
    pub fn set_duration(&mut self, minutes: u32) -> Result<(), WizardError> {
        self.require(WizardStep::Schedule, "setting the duration")?;
        if minutes > MAX_DURATION_MINUTES {
            return Err(WizardError::DurationOutOfRange(minutes));
        }
        self.draft.duration_min = minutes;
        Ok(())
    }

    pub fn set_stage(&mut self, stage: InterviewStage) -> Result<(), WizardError> {
        self.require(WizardStep::Details, "choosing the stage")?;
        self.draft.stage = Some(stage);
        Ok(())
    }

    pub fn clear_stage(&mut self) -> Result<(), WizardError> {
        self.require(WizardStep::Details, "clearing the stage")?;
        self.draft.stage = None;
        Ok(())
    }

    pub fn set_location(&mut self, location: impl Into<String>) -> Result<(), WizardError> {
        self.require(WizardStep::Details, "setting the location")?;
        self.draft.location = location.into();
        Ok(())
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) -> Result<(), WizardError> {
        self.require(WizardStep::Details, "setting notes")?;
        self.draft.notes = notes.into();
        Ok(())
    }

    fn require(&self, expected: WizardStep, action: &'static str) -> Result<(), WizardError> {
        let current = self.step();
        if current == expected {
            Ok(())
        } else {
            Err(WizardError::WrongStep {
                action,
                expected,
                current,
            })
        }
    }
}

/// Whether a location string is a link the UI should render as "Open link".
pub fn location_is_link(location: &str) -> bool {
    let trimmed = location.trim();
    trimmed.starts_with("https://") || trimmed.starts_with("http://")
}

pub fn location_is_zoom(location: &str) -> bool {
    location.contains("zoom.us")
}
