use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::workflows::pipeline::domain::{
    Application, ApplicationStatus, CandidateId, JobId, NewApplication,
};
use crate::workflows::pipeline::repository::{ApplicationRepository, RepositoryError};

/// Source recorded on applications opened while scheduling an interview.
pub const SCHEDULER_SOURCE: &str = "Interview Scheduler";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationResolution {
    pub application: Application,
    pub created: bool,
}

/// Return the first application linking `job_id` and `candidate_id`, creating one in the
/// `interview` status when the candidate never applied. Losing an insert race to another
/// caller resolves to the record that caller created.
pub fn resolve_or_create_application<R>(
    repository: &R,
    job_id: JobId,
    candidate_id: CandidateId,
    now: DateTime<Utc>,
) -> Result<ApplicationResolution, RepositoryError>
where
    R: ApplicationRepository + ?Sized,
{
    if let Some(application) = repository.find_by_pair(job_id, candidate_id)? {
        return Ok(ApplicationResolution {
            application,
            created: false,
        });
    }

    let inserted = repository.insert_application(NewApplication {
        job_id,
        candidate_id,
        status: ApplicationStatus::Interview,
        source: SCHEDULER_SOURCE.to_string(),
        submitted_at: now,
    });
    let application = match inserted {
        Ok(application) => application,
        Err(RepositoryError::Conflict(reason)) => {
            // Another caller opened the pair between our lookup and insert.
            return match repository.find_by_pair(job_id, candidate_id)? {
                Some(application) => {
                    debug!(application_id = %application.id, %job_id, %candidate_id, "reused application opened concurrently");
                    Ok(ApplicationResolution {
                        application,
                        created: false,
                    })
                }
                None => Err(RepositoryError::Conflict(reason)),
            };
        }
        Err(error) => return Err(error),
    };
    debug!(application_id = %application.id, %job_id, %candidate_id, "opened application for interview");

    Ok(ApplicationResolution {
        application,
        created: true,
    })
}
