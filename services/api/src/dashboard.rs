use crate::infra::{seeded_service, LogNotificationPublisher};
use clap::Args;
use serde_json::json;
use teamsfit::config::AppConfig;
use teamsfit::error::AppError;
use teamsfit::workflows::interviews::schedule_time::format_timestamp;
use teamsfit::workflows::pipeline::{
    ApplicationRepository, CatalogRepository, DashboardMetrics, Job,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DashboardArgs {
    /// Emit the dashboard as JSON instead of tables
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_dashboard(args: DashboardArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let (service, store, _) =
        seeded_service(&config.scheduling, LogNotificationPublisher::default());
    let metrics = DashboardMetrics::load(store.as_ref())?;
    let jobs = store.jobs()?;
    let candidates = store.candidates()?;
    let interviews = service.interviews()?;

    if args.json {
        let payload = json!({
            "metrics": metrics,
            "jobs": jobs,
            "candidates": candidates,
            "interviews": interviews,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string())
        );
        return Ok(());
    }

    println!("TeamsFit dashboard");
    println!(
        "- Jobs: {} open | {} closed | {} in progress",
        metrics.jobs_open, metrics.jobs_closed, metrics.jobs_in_progress
    );
    println!(
        "- Candidates: {} total | {} active",
        metrics.candidates_total, metrics.candidates_active
    );
    for (label, count) in metrics.status_breakdown() {
        println!("    {label:<10} {count}");
    }
    println!(
        "- Interviews: {} scheduled | {} decided",
        metrics.interviews_pending, metrics.interviews_decided
    );

    println!("\nJobs");
    for job in &jobs {
        print_job(job, store.for_job(job.id)?.len());
    }

    println!("\nCandidates");
    for candidate in &candidates {
        println!(
            "  #{:<3} {:<18} {:<28} {:<10} applied {}",
            candidate.id,
            candidate.name,
            candidate.position.as_deref().unwrap_or("-"),
            candidate.status.label(),
            candidate.applied_on
        );
    }

    println!("\nInterviews");
    for summary in &interviews {
        let interview = &summary.interview;
        println!(
            "  #{:<3} {} until {} ({:>3} min)  {:<15} {:<9} {}",
            interview.id,
            format_timestamp(interview.scheduled_at),
            summary.ends_at.format("%H:%M"),
            interview.duration_min,
            interview.stage.label(),
            summary.status,
            interview.location
        );
        for link in &summary.participants {
            let name = store
                .employee(link.employee_id)?
                .map(|employee| employee.full_name)
                .unwrap_or_else(|| format!("employee {}", link.employee_id));
            println!("        {} ({})", name, link.role.label());
        }
    }

    Ok(())
}

fn print_job(job: &Job, applications: usize) {
    println!(
        "  #{:<3} {:<28} {:<18} {:<10} {:<8} {} application(s)",
        job.id,
        job.title,
        job.location,
        job.employment_type.label(),
        job.status_label(),
        applications
    );
}
