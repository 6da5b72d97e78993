//! Interview scheduling: the five-step wizard, advisory conflict detection, and the
//! commit that resolves an application and books the panel.

pub mod conflicts;
pub mod domain;
pub mod options;
pub mod repository;
pub mod resolver;
pub mod schedule_time;
pub mod service;
pub mod wizard;

#[cfg(test)]
mod tests;

pub use conflicts::{conflict_warning, BookingSnapshot, ConflictChecker, SchedulingConflict};
pub use domain::{
    Interview, InterviewEmployee, InterviewId, InterviewResult, InterviewStage, InterviewerRole,
    InterviewerSelection,
};
pub use options::CandidateOption;
pub use repository::{
    InterviewRepository, Notification, NotificationError, NotificationLevel, NotificationPublisher,
};
pub use resolver::{resolve_or_create_application, ApplicationResolution, SCHEDULER_SOURCE};
pub use service::{
    InterviewSchedulingService, InterviewSummary, ScheduleRequest, ScheduledInterview,
    SchedulingError,
};
pub use wizard::{
    InterviewDraft, InterviewPlan, SchedulingWizard, WizardDefaults, WizardError, WizardStep,
};
