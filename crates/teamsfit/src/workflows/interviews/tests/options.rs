use crate::workflows::interviews::domain::{InterviewerRole, InterviewerSelection};
use crate::workflows::interviews::options::{
    available_interviewers, candidate_options, job_options, NO_APPLICATION_NOTE,
};
use crate::workflows::pipeline::domain::{CandidateId, EmployeeId, JobId};
use crate::workflows::store::reference_dataset;

#[test]
fn only_active_jobs_are_offered() {
    let seed = reference_dataset();
    let ids: Vec<JobId> = job_options(&seed.jobs).into_iter().map(|job| job.id).collect();
    assert_eq!(ids, vec![JobId(1), JobId(2), JobId(3), JobId(5)]);
}

#[test]
fn applicants_are_listed_before_other_candidates() {
    let seed = reference_dataset();
    let options = candidate_options(Some(JobId(1)), &seed.candidates, &seed.applications);

    let order: Vec<(CandidateId, bool)> = options
        .iter()
        .map(|option| (option.candidate.id, option.has_application))
        .collect();
    assert_eq!(
        order,
        vec![
            (CandidateId(1), true),
            (CandidateId(5), true),
            (CandidateId(2), false),
            (CandidateId(3), false),
            (CandidateId(4), false),
        ]
    );
    assert_eq!(options[0].note(), None);
    assert_eq!(options[2].note(), Some(NO_APPLICATION_NOTE));
}

#[test]
fn without_a_job_nobody_has_an_application() {
    let seed = reference_dataset();
    let options = candidate_options(None, &seed.candidates, &seed.applications);
    assert_eq!(options.len(), 5);
    assert!(options.iter().all(|option| !option.has_application));
}

#[test]
fn chosen_interviewers_leave_the_picker() {
    let seed = reference_dataset();
    let chosen = [
        InterviewerSelection {
            employee_id: EmployeeId(2),
            role: InterviewerRole::Lead,
        },
        InterviewerSelection {
            employee_id: EmployeeId(4),
            role: InterviewerRole::Panel,
        },
    ];

    let remaining: Vec<EmployeeId> = available_interviewers(&seed.employees, &chosen)
        .into_iter()
        .map(|employee| employee.id)
        .collect();
    assert_eq!(remaining, vec![EmployeeId(1), EmployeeId(3), EmployeeId(5)]);
}
