use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::domain::{Interview, InterviewEmployee, InterviewId};
use crate::workflows::pipeline::domain::{Employee, EmployeeId};

pub const DEFAULT_CONFLICT_WINDOW_MINUTES: u32 = 30;

/// Borrowed view over the bookings the checker scans.
#[derive(Debug, Clone, Copy)]
pub struct BookingSnapshot<'a> {
    pub interviews: &'a [Interview],
    pub participants: &'a [InterviewEmployee],
    pub employees: &'a [Employee],
}

/// An interviewer who is already booked close to the proposed time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchedulingConflict {
    pub employee_id: EmployeeId,
    pub employee_name: String,
    pub interview_ids: Vec<InterviewId>,
}

/// Flags interviewers booked within a fixed window of a proposed start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConflictChecker {
    window: Duration,
}

impl Default for ConflictChecker {
    fn default() -> Self {
        Self::from_minutes(DEFAULT_CONFLICT_WINDOW_MINUTES)
    }
}

impl ConflictChecker {
    pub fn from_minutes(minutes: u32) -> Self {
        let minutes = if minutes == 0 {
            DEFAULT_CONFLICT_WINDOW_MINUTES
        } else {
            minutes
        };
        Self {
            window: Duration::minutes(i64::from(minutes)),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Returns one entry per interviewer with at least one interview starting strictly
    /// inside the window. Interviewers without an employee record are skipped.
    pub fn find_conflicts(
        &self,
        candidate_time: Option<DateTime<Utc>>,
        interviewer_ids: &[EmployeeId],
        bookings: BookingSnapshot<'_>,
    ) -> Vec<SchedulingConflict> {
        let Some(candidate_time) = candidate_time else {
            return Vec::new();
        };

        let mut conflicts: Vec<SchedulingConflict> = Vec::new();
        for &employee_id in interviewer_ids {
            if conflicts
                .iter()
                .any(|conflict| conflict.employee_id == employee_id)
            {
                continue;
            }

            let Some(employee) = bookings
                .employees
                .iter()
                .find(|employee| employee.id == employee_id)
            else {
                continue;
            };

            let interview_ids: Vec<InterviewId> = bookings
                .interviews
                .iter()
                .filter(|interview| self.overlaps(interview.scheduled_at, candidate_time))
                .filter(|interview| {
                    bookings.participants.iter().any(|link| {
                        link.interview_id == interview.id && link.employee_id == employee_id
                    })
                })
                .map(|interview| interview.id)
                .collect();

            if !interview_ids.is_empty() {
                conflicts.push(SchedulingConflict {
                    employee_id,
                    employee_name: employee.full_name.clone(),
                    interview_ids,
                });
            }
        }

        conflicts
    }

    fn overlaps(&self, scheduled_at: DateTime<Utc>, candidate_time: DateTime<Utc>) -> bool {
        (scheduled_at - candidate_time).abs() < self.window
    }
}

/// Warning text shown next to the time picker when conflicts exist.
pub fn conflict_warning(conflicts: &[SchedulingConflict]) -> Option<String> {
    if conflicts.is_empty() {
        return None;
    }

    let names: Vec<&str> = conflicts
        .iter()
        .map(|conflict| conflict.employee_name.as_str())
        .collect();
    Some(format!(
        "{} may have another interview around this time.",
        names.join(", ")
    ))
}
