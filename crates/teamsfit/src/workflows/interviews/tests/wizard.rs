use super::common::*;
use crate::workflows::interviews::domain::{InterviewStage, InterviewerRole, InterviewerSelection};
use crate::workflows::interviews::wizard::{
    location_is_link, location_is_zoom, SchedulingWizard, WizardDefaults, WizardError, WizardStep,
    DURATION_PRESETS, MAX_DURATION_MINUTES,
};
use crate::workflows::pipeline::domain::{CandidateId, EmployeeId, JobId};

#[test]
fn opens_on_first_step_even_when_prefilled() {
    let wizard = SchedulingWizard::new(WizardDefaults::prefilled(
        Some(JobId(1)),
        Some(CandidateId(1)),
    ));

    assert_eq!(wizard.step(), WizardStep::Job);
    assert_eq!(wizard.step_number(), 1);
    assert_eq!(wizard.draft().job_id, Some(JobId(1)));
    assert_eq!(wizard.draft().candidate_id, Some(CandidateId(1)));
    assert_eq!(wizard.draft().duration_min, 60);
    assert_eq!(wizard.draft().stage, Some(InterviewStage::Screen));
    assert!(wizard.draft().interviewers.is_empty());
    assert!(wizard.can_proceed());
}

#[test]
fn next_is_a_no_op_until_the_step_is_complete() {
    let mut wizard = SchedulingWizard::default();
    assert!(!wizard.can_proceed());
    assert!(!wizard.next());
    assert_eq!(wizard.step(), WizardStep::Job);

    wizard.select_job(JobId(3)).expect("job step");
    assert!(wizard.next());
    assert!(!wizard.next(), "candidate still missing");
    assert_eq!(wizard.step(), WizardStep::Candidate);

    wizard.select_candidate(CandidateId(3)).expect("candidate step");
    assert!(wizard.next());
    assert!(!wizard.next(), "no interviewers yet");
    assert_eq!(wizard.step(), WizardStep::Interviewers);
}

#[test]
fn steps_are_numbered_in_order() {
    let numbers: Vec<u8> = WizardStep::ordered()
        .into_iter()
        .map(WizardStep::number)
        .collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    assert_eq!(WizardStep::Schedule.label(), "Schedule");
}

#[test]
fn walks_to_details_and_produces_a_plan() {
    let wizard = reference_wizard();

    assert_eq!(wizard.step(), WizardStep::Details);
    assert!(wizard.is_last_step());
    let plan = wizard.plan().expect("plan available on details");
    assert_eq!(plan.job_id(), JobId(1));
    assert_eq!(plan.candidate_id(), CandidateId(1));
    assert_eq!(
        plan.interviewers(),
        &[InterviewerSelection {
            employee_id: EmployeeId(2),
            role: InterviewerRole::Lead,
        }]
    );
    assert_eq!(plan.slot().scheduled_at, at(2025, 10, 5, 14, 0));
    assert_eq!(plan.slot().duration_min, 60);
    assert_eq!(plan.stage(), InterviewStage::Technical);
    assert_eq!(plan.notes(), None);
}

#[test]
fn next_on_last_step_does_nothing() {
    let mut wizard = reference_wizard();
    assert!(!wizard.next());
    assert_eq!(wizard.step(), WizardStep::Details);
}

#[test]
fn plan_is_unavailable_before_details() {
    let mut wizard = SchedulingWizard::default();
    wizard.select_job(JobId(1)).expect("job step");
    assert!(wizard.plan().is_none());
    assert!(wizard.next());
    assert!(wizard.plan().is_none());
}

#[test]
fn clearing_the_stage_blocks_commit() {
    let mut wizard = reference_wizard();
    wizard.clear_stage().expect("details step");
    assert!(!wizard.can_proceed());
    assert!(wizard.plan().is_none());
}

#[test]
fn back_keeps_collected_values() {
    let mut wizard = reference_wizard();

    assert!(wizard.back());
    assert_eq!(wizard.step(), WizardStep::Schedule);
    assert!(wizard.back());
    assert!(wizard.back());
    assert!(wizard.back());
    assert_eq!(wizard.step(), WizardStep::Job);
    assert!(!wizard.back());

    let draft = wizard.draft();
    assert_eq!(draft.job_id, Some(JobId(1)));
    assert_eq!(draft.candidate_id, Some(CandidateId(1)));
    assert_eq!(draft.interviewer_ids(), vec![EmployeeId(2)]);
    assert_eq!(draft.scheduled_at, Some(at(2025, 10, 5, 14, 0)));
    assert_eq!(draft.stage, Some(InterviewStage::Technical));
}

#[test]
fn edits_are_scoped_to_the_current_step() {
    let mut wizard = SchedulingWizard::default();

    match wizard.add_interviewer(EmployeeId(1)) {
        Err(WizardError::WrongStep {
            expected, current, ..
        }) => {
            assert_eq!(expected, WizardStep::Interviewers);
            assert_eq!(current, WizardStep::Job);
        }
        other => panic!("expected wrong step, got {other:?}"),
    }
    assert!(matches!(
        wizard.set_stage(InterviewStage::Technical),
        Err(WizardError::WrongStep { .. })
    ));
    assert!(wizard.draft().interviewers.is_empty());
}

#[test]
fn interviewers_are_unique_and_default_to_panel() {
    let mut wizard =
        SchedulingWizard::new(WizardDefaults::prefilled(Some(JobId(1)), Some(CandidateId(1))));
    assert!(wizard.next());
    assert!(wizard.next());
    assert_eq!(wizard.step(), WizardStep::Interviewers);

    wizard.add_interviewer(EmployeeId(3)).expect("add");
    assert_eq!(wizard.draft().interviewers[0].role, InterviewerRole::Panel);
    assert_eq!(
        wizard.add_interviewer(EmployeeId(3)),
        Err(WizardError::DuplicateInterviewer(EmployeeId(3)))
    );

    wizard
        .set_interviewer_role(EmployeeId(3), InterviewerRole::HiringManager)
        .expect("role");
    assert_eq!(
        wizard.draft().interviewers[0].role,
        InterviewerRole::HiringManager
    );

    assert_eq!(
        wizard.remove_interviewer(EmployeeId(8)),
        Err(WizardError::UnknownInterviewer(EmployeeId(8)))
    );
    wizard.remove_interviewer(EmployeeId(3)).expect("remove");
    assert!(!wizard.can_proceed());
}

#[test]
fn zero_duration_blocks_the_schedule_step() {
    let mut wizard = SchedulingWizard::default();
    wizard.select_job(JobId(1)).expect("job");
    wizard.next();
    wizard.select_candidate(CandidateId(1)).expect("candidate");
    wizard.next();
    wizard.add_interviewer(EmployeeId(1)).expect("interviewer");
    wizard.next();

    assert!(!wizard.can_proceed(), "time not chosen");
    wizard.set_scheduled_at(at(2025, 10, 7, 9, 0)).expect("time");
    wizard.set_duration(0).expect("zero accepted");
    assert!(!wizard.can_proceed());
    assert!(!wizard.next());

    assert_eq!(
        wizard.set_duration(MAX_DURATION_MINUTES + 1),
        Err(WizardError::DurationOutOfRange(481))
    );
    for preset in DURATION_PRESETS {
        wizard.set_duration(preset).expect("preset");
    }
    assert_eq!(wizard.draft().duration_min, 90);
    assert!(wizard.next());
}

#[test]
fn cancel_restores_defaults_from_any_step() {
    let defaults = WizardDefaults::prefilled(Some(JobId(2)), None);
    let mut wizard = SchedulingWizard::new(defaults);
    wizard.next();
    wizard.select_candidate(CandidateId(4)).expect("candidate");
    wizard.next();
    wizard.add_interviewer(EmployeeId(1)).expect("interviewer");
    wizard.next();
    wizard.set_duration(30).expect("duration");

    wizard.cancel();

    assert_eq!(wizard.step(), WizardStep::Job);
    assert_eq!(wizard.draft().job_id, Some(JobId(2)));
    assert_eq!(wizard.draft().candidate_id, None);
    assert!(wizard.draft().interviewers.is_empty());
    assert_eq!(wizard.draft().scheduled_at, None);
    assert_eq!(wizard.draft().duration_min, 60);
}

#[test]
fn blank_notes_are_dropped_from_the_plan() {
    let mut wizard = reference_wizard();
    wizard.set_notes("   ").expect("notes");
    wizard
        .set_location(" https://zoom.us/j/555 ")
        .expect("location");

    let plan = wizard.plan().expect("plan");
    assert_eq!(plan.notes(), None);
    assert_eq!(plan.location(), "https://zoom.us/j/555");

    wizard.set_notes("Bring portfolio").expect("notes");
    assert_eq!(
        wizard.plan().expect("plan").notes(),
        Some("Bring portfolio")
    );
}

#[test]
fn recognises_link_locations() {
    assert!(location_is_link("https://zoom.us/j/123456789"));
    assert!(location_is_zoom("https://zoom.us/j/123456789"));
    assert!(!location_is_link("Office - Room 3A"));
}
