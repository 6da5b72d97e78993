use std::sync::Arc;

use super::common::*;
use crate::workflows::clock::FixedClock;
use crate::workflows::interviews::domain::{InterviewId, InterviewStage, InterviewerRole, InterviewerSelection};
use crate::workflows::interviews::repository::{InterviewRepository, NotificationLevel};
use crate::workflows::interviews::resolver::SCHEDULER_SOURCE;
use crate::workflows::interviews::service::{
    InterviewSchedulingService, ScheduleRequest, SchedulingError,
};
use crate::workflows::interviews::wizard::{SchedulingWizard, WizardStep};
use crate::workflows::pipeline::domain::{
    ApplicationId, ApplicationStatus, CandidateId, EmployeeId, JobId,
};
use crate::workflows::pipeline::repository::{ApplicationRepository, RepositoryError};
use crate::workflows::store::MemoryStore;

#[test]
fn commits_reference_booking_against_existing_application() {
    let (service, store, notifications) = seeded_service();
    let mut wizard = reference_wizard();

    let scheduled = service.submit(&mut wizard).expect("commit succeeds");

    assert!(!scheduled.application_created);
    assert_eq!(scheduled.application.id, ApplicationId(1));
    assert_eq!(store.applications().expect("list").len(), 5);

    let interview = &scheduled.interview;
    assert_eq!(interview.id, InterviewId(4));
    assert_eq!(interview.application_id, ApplicationId(1));
    assert_eq!(interview.scheduled_at, at(2025, 10, 5, 14, 0));
    assert_eq!(interview.duration_min, 60);
    assert_eq!(interview.stage, InterviewStage::Technical);
    assert_eq!(interview.result, None);
    assert_eq!(store.interviews().expect("list").len(), 4);

    let links = store.participants_for(interview.id).expect("links");
    assert_eq!(links, scheduled.participants);
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].employee_id, EmployeeId(2));
    assert_eq!(links[0].role, InterviewerRole::Lead);
    assert_eq!(links[0].attended, None);
    assert_eq!(links[0].invited_at, commit_time());

    let events = notifications.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].level, NotificationLevel::Success);
    assert_eq!(events[0].title, "Interview scheduled");
    assert_eq!(
        events[0].message,
        "Technical interview with Sarah Johnson for Senior Frontend Developer is booked."
    );
}

#[test]
fn commit_reports_advisory_conflicts_without_blocking() {
    let (service, _, _) = seeded_service();
    let mut wizard = reference_wizard();

    let scheduled = service.submit(&mut wizard).expect("commit succeeds");

    assert_eq!(scheduled.conflicts.len(), 1);
    assert_eq!(scheduled.conflicts[0].employee_name, "Jane Doe");
    assert_eq!(scheduled.conflicts[0].interview_ids, vec![InterviewId(1)]);
}

#[test]
fn double_booking_publishes_a_warning_after_the_confirmation() {
    let (service, _, notifications) = seeded_service();
    let mut wizard = reference_wizard();

    service.submit(&mut wizard).expect("commit succeeds");

    let events = notifications.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].level, NotificationLevel::Warning);
    assert_eq!(events[1].title, "Possible double booking");
    assert_eq!(
        events[1].message,
        "Jane Doe may have another interview around this time."
    );
}

#[test]
fn commit_resets_the_wizard() {
    let (service, _, _) = seeded_service();
    let mut wizard = reference_wizard();

    service.submit(&mut wizard).expect("commit succeeds");

    assert_eq!(wizard.step(), WizardStep::Job);
    assert_eq!(wizard, SchedulingWizard::default());
}

#[test]
fn creates_application_for_candidate_without_one() {
    let (service, store, notifications) = seeded_service();
    let mut wizard = wizard_at_details(2, 1, &[(3, InterviewerRole::Panel)], at(2025, 10, 8, 11, 0));

    let scheduled = service.submit(&mut wizard).expect("commit succeeds");

    assert!(scheduled.application_created);
    let application = &scheduled.application;
    assert_eq!(application.id, ApplicationId(6));
    assert_eq!(application.job_id, JobId(2));
    assert_eq!(application.candidate_id, CandidateId(1));
    assert_eq!(application.status, ApplicationStatus::Interview);
    assert_eq!(application.source, SCHEDULER_SOURCE);
    assert_eq!(application.submitted_at, commit_time());
    assert_eq!(scheduled.interview.application_id, ApplicationId(6));
    assert_eq!(scheduled.interview.stage, InterviewStage::Screen);
    assert!(scheduled.conflicts.is_empty());
    assert_eq!(
        store.find_by_pair(JobId(2), CandidateId(1)).expect("lookup"),
        Some(application.clone())
    );

    let events = notifications.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, NotificationLevel::Success);
}

#[test]
fn incomplete_wizard_is_rejected_untouched() {
    let (service, store, notifications) = seeded_service();
    let mut wizard = SchedulingWizard::default();
    wizard.select_job(JobId(1)).expect("job");
    wizard.next();
    let before = wizard.clone();

    match service.submit(&mut wizard) {
        Err(SchedulingError::Incomplete { step }) => assert_eq!(step, WizardStep::Candidate),
        other => panic!("expected incomplete, got {other:?}"),
    }
    assert_eq!(wizard, before);
    assert_eq!(store.interviews().expect("list").len(), 3);
    assert!(notifications.events().is_empty());
}

#[test]
fn inactive_jobs_cannot_be_booked() {
    let (service, store, _) = seeded_service();
    let mut wizard = wizard_at_details(4, 4, &[(1, InterviewerRole::Lead)], at(2025, 10, 9, 9, 0));

    assert!(matches!(
        service.submit(&mut wizard),
        Err(SchedulingError::InactiveJob(JobId(4)))
    ));
    assert_eq!(wizard.step(), WizardStep::Details);
    assert_eq!(store.interviews().expect("list").len(), 3);
}

#[test]
fn unknown_references_fail_before_any_write() {
    let (service, store, _) = seeded_service();

    let mut unknown_employee =
        wizard_at_details(2, 2, &[(99, InterviewerRole::Panel)], at(2025, 10, 9, 9, 0));
    assert!(matches!(
        service.submit(&mut unknown_employee),
        Err(SchedulingError::UnknownEmployee(EmployeeId(99)))
    ));

    let mut unknown_candidate =
        wizard_at_details(2, 42, &[(1, InterviewerRole::Panel)], at(2025, 10, 9, 9, 0));
    assert!(matches!(
        service.submit(&mut unknown_candidate),
        Err(SchedulingError::UnknownCandidate(CandidateId(42)))
    ));

    let mut unknown_job =
        wizard_at_details(77, 2, &[(1, InterviewerRole::Panel)], at(2025, 10, 9, 9, 0));
    assert!(matches!(
        service.submit(&mut unknown_job),
        Err(SchedulingError::UnknownJob(JobId(77)))
    ));

    assert_eq!(store.applications().expect("list").len(), 5);
    assert_eq!(store.interviews().expect("list").len(), 3);
}

#[test]
fn notification_failures_do_not_undo_the_commit() {
    let store = Arc::new(MemoryStore::seeded());
    let service = InterviewSchedulingService::new(store.clone(), Arc::new(OfflineNotifications))
        .with_clock(Arc::new(FixedClock(commit_time())));
    let mut wizard = reference_wizard();

    let scheduled = service.submit(&mut wizard).expect("commit succeeds");

    assert_eq!(
        store.interview(scheduled.interview.id).expect("fetch"),
        Some(scheduled.interview)
    );
}

#[test]
fn repository_failures_surface_as_errors() {
    let service = InterviewSchedulingService::new(
        Arc::new(UnavailableStore),
        Arc::new(MemoryNotifications::default()),
    );
    let mut wizard = reference_wizard();

    assert!(matches!(
        service.submit(&mut wizard),
        Err(SchedulingError::Repository(RepositoryError::Unavailable(_)))
    ));
    assert!(matches!(
        service.job_options(),
        Err(RepositoryError::Unavailable(_))
    ));
}

#[test]
fn one_shot_request_follows_the_wizard_rules() {
    let (service, _, _) = seeded_service();

    let scheduled = service
        .schedule(ScheduleRequest {
            job_id: Some(JobId(1)),
            candidate_id: Some(CandidateId(1)),
            interviewers: vec![InterviewerSelection {
                employee_id: EmployeeId(2),
                role: InterviewerRole::Lead,
            }],
            scheduled_at: Some(at(2025, 10, 5, 14, 0)),
            duration_min: Some(60),
            stage: Some(InterviewStage::Technical),
            location: String::new(),
            notes: String::new(),
        })
        .expect("schedules");
    assert_eq!(scheduled.interview.application_id, ApplicationId(1));

    let missing_time = service.schedule(ScheduleRequest {
        job_id: Some(JobId(1)),
        candidate_id: Some(CandidateId(1)),
        interviewers: vec![InterviewerSelection {
            employee_id: EmployeeId(2),
            role: InterviewerRole::Lead,
        }],
        scheduled_at: None,
        duration_min: None,
        stage: None,
        location: String::new(),
        notes: String::new(),
    });
    assert!(matches!(
        missing_time,
        Err(SchedulingError::Incomplete {
            step: WizardStep::Schedule
        })
    ));
}

#[test]
fn default_duration_comes_from_the_service() {
    let (service, _, _) = seeded_service();
    let service = service.with_default_duration(45);

    let wizard = service.new_wizard(Some(JobId(1)), None);
    assert_eq!(wizard.draft().duration_min, 45);
    assert_eq!(wizard.draft().job_id, Some(JobId(1)));
}

#[test]
fn pickers_read_from_the_store() {
    let (service, _, _) = seeded_service();

    assert_eq!(service.job_options().expect("jobs").len(), 4);
    let options = service.candidate_options(Some(JobId(1))).expect("candidates");
    assert!(options[0].has_application);

    let wizard = reference_wizard();
    let available = service.available_interviewers(&wizard).expect("employees");
    assert_eq!(available.len(), 4);
    assert!(available.iter().all(|employee| employee.id != EmployeeId(2)));

    let conflicts = service.conflicts(&wizard).expect("conflicts");
    assert_eq!(conflicts.len(), 1);
}

#[test]
fn interview_listing_includes_panels() {
    let (service, _, _) = seeded_service();

    let interviews = service.interviews().expect("interviews");
    assert_eq!(interviews.len(), 3);
    assert_eq!(interviews[0].participants.len(), 2);
    assert_eq!(interviews[0].status, "Scheduled");
    assert_eq!(interviews[0].ends_at, at(2025, 10, 5, 15, 0));
    assert_eq!(interviews[1].ends_at, at(2025, 10, 4, 11, 15));
    assert_eq!(interviews[2].status, "Completed");
}
