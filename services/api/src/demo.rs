use crate::infra::{seeded_service, DashboardService, LogNotificationPublisher};
use clap::Args;
use teamsfit::config::AppConfig;
use teamsfit::error::AppError;
use teamsfit::workflows::interviews::schedule_time::{
    format_timestamp, from_local_input, parse_offset, parse_timestamp, to_local_input,
};
use teamsfit::workflows::interviews::{
    conflict_warning, InterviewStage, InterviewerRole, ScheduledInterview, SchedulingError,
    SchedulingWizard,
};
use teamsfit::workflows::pipeline::{CandidateId, EmployeeId, JobId};

/// Slot the reference booking uses when `--at` is not given.
const REFERENCE_SLOT: &str = "2025-10-05T14:00:00Z";

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// UTC offset of the person using the time picker, e.g. +02:00 (defaults to config)
    #[arg(long)]
    pub(crate) offset: Option<String>,
    /// Picker value (YYYY-MM-DDTHH:MM) in that offset for the first booking
    #[arg(long)]
    pub(crate) at: Option<String>,
    /// Only run the first booking
    #[arg(long)]
    pub(crate) single: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let offset = match args.offset.as_deref() {
        Some(raw) => parse_offset(raw)?,
        None => config.scheduling.local_offset,
    };
    let (service, _, notifications) =
        seeded_service(&config.scheduling, LogNotificationPublisher::recording());

    let picker_value = match args.at {
        Some(value) => value,
        None => to_local_input(parse_timestamp(REFERENCE_SLOT)?, offset),
    };
    let scheduled_at = from_local_input(&picker_value, offset)?;

    println!("Interview scheduling demo (picker offset {offset})");
    let mut wizard = service.new_wizard(None, None);

    announce(&wizard);
    for job in service.job_options()? {
        println!("    #{} {} ({})", job.id, job.title, job.location);
    }
    wizard.select_job(JobId(1))?;
    advance(&mut wizard)?;

    announce(&wizard);
    for option in service.candidate_options(wizard.draft().job_id)? {
        let note = option.note().map(|note| format!(" - {note}")).unwrap_or_default();
        println!("    #{} {}{}", option.candidate.id, option.candidate.name, note);
    }
    wizard.select_candidate(CandidateId(1))?;
    advance(&mut wizard)?;

    announce(&wizard);
    wizard.add_interviewer(EmployeeId(2))?;
    wizard.set_interviewer_role(EmployeeId(2), InterviewerRole::Lead)?;
    let remaining: Vec<String> = service
        .available_interviewers(&wizard)?
        .into_iter()
        .map(|employee| employee.full_name)
        .collect();
    println!("    still available: {}", remaining.join(", "));
    advance(&mut wizard)?;

    announce(&wizard);
    wizard.set_scheduled_at(scheduled_at)?;
    println!(
        "    picker {picker_value} -> {} for {} min",
        format_timestamp(scheduled_at),
        wizard.draft().duration_min
    );
    if let Some(warning) = conflict_warning(&service.conflicts(&wizard)?) {
        println!("    warning: {warning}");
    }
    advance(&mut wizard)?;

    announce(&wizard);
    wizard.set_stage(InterviewStage::Technical)?;
    let scheduled = service.submit(&mut wizard)?;
    print_booking(&scheduled);

    if !args.single {
        println!("\nBooking a candidate who never applied");
        let scheduled = book_without_application(&service)?;
        print_booking(&scheduled);
    }

    println!("\nNotifications");
    for notification in notifications.sent() {
        println!("  [{}] {}", notification.title, notification.message);
    }

    Ok(())
}

fn book_without_application(service: &DashboardService) -> Result<ScheduledInterview, AppError> {
    let mut wizard = service.new_wizard(Some(JobId(2)), Some(CandidateId(4)));
    advance(&mut wizard)?;
    advance(&mut wizard)?;
    wizard.add_interviewer(EmployeeId(3))?;
    advance(&mut wizard)?;
    wizard.set_scheduled_at(parse_timestamp("2025-10-07T09:30:00Z")?)?;
    wizard.set_duration(45)?;
    advance(&mut wizard)?;
    wizard.set_location("Phone")?;
    Ok(service.submit(&mut wizard)?)
}

fn announce(wizard: &SchedulingWizard) {
    let step = wizard.step();
    println!("\nStep {}/5: {}", step.number(), step.label());
}

fn advance(wizard: &mut SchedulingWizard) -> Result<(), AppError> {
    if wizard.next() {
        Ok(())
    } else {
        Err(SchedulingError::Incomplete {
            step: wizard.step(),
        }
        .into())
    }
}

fn print_booking(scheduled: &ScheduledInterview) {
    let application = &scheduled.application;
    let interview = &scheduled.interview;
    println!(
        "- Application #{} ({}, source {}){}",
        application.id,
        application.status.label(),
        application.source,
        if scheduled.application_created {
            " created"
        } else {
            " reused"
        }
    );
    println!(
        "- Interview #{} {} at {} for {} min, result {}",
        interview.id,
        interview.stage.label(),
        format_timestamp(interview.scheduled_at),
        interview.duration_min,
        interview.status_label()
    );
    for link in &scheduled.participants {
        println!(
            "    employee #{} as {} (attended: pending)",
            link.employee_id,
            link.role.label()
        );
    }
    if !scheduled.conflicts.is_empty() {
        println!(
            "  {} interviewer(s) were double-booked at commit time",
            scheduled.conflicts.len()
        );
    }
}
