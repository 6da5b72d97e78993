use chrono::{DateTime, NaiveDate, Utc};

use crate::workflows::interviews::domain::{
    Interview, InterviewEmployee, InterviewId, InterviewResult, InterviewStage, InterviewerRole,
};
use crate::workflows::pipeline::domain::{
    Application, ApplicationId, ApplicationStatus, Candidate, CandidateId, CandidateProfile,
    CandidateStatus, Employee, EmployeeId, EmploymentType, Job, JobId, Team, TeamId,
};

/// Reference dataset loaded by `MemoryStore::seeded`.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub teams: Vec<Team>,
    pub jobs: Vec<Job>,
    pub candidates: Vec<Candidate>,
    pub employees: Vec<Employee>,
    pub applications: Vec<Application>,
    pub interviews: Vec<Interview>,
    pub participants: Vec<InterviewEmployee>,
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed date is valid")
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .expect("seed time is valid")
        .and_utc()
}

pub fn reference_dataset() -> SeedData {
    SeedData {
        teams: teams(),
        jobs: jobs(),
        candidates: candidates(),
        employees: employees(),
        applications: applications(),
        interviews: interviews(),
        participants: participants(),
    }
}

fn teams() -> Vec<Team> {
    ["Engineering", "Product", "Design", "Marketing", "Sales"]
        .into_iter()
        .zip(1..)
        .map(|(name, id)| Team {
            id: TeamId(id),
            name: name.to_string(),
            organization_id: 1,
        })
        .collect()
}

fn job(
    id: u64,
    title: &str,
    location: &str,
    employment_type: EmploymentType,
    active: bool,
    created_on: NaiveDate,
    team: u64,
) -> Job {
    Job {
        id: JobId(id),
        title: title.to_string(),
        location: location.to_string(),
        employment_type,
        active,
        created_on,
        team_id: Some(TeamId(team)),
        description: None,
        requirements: None,
        pdf_attachment: None,
    }
}

fn jobs() -> Vec<Job> {
    vec![
        job(
            1,
            "Senior Frontend Developer",
            "San Francisco, CA",
            EmploymentType::FullTime,
            true,
            date(2025, 9, 15),
            1,
        ),
        job(
            2,
            "Product Manager",
            "Remote",
            EmploymentType::FullTime,
            true,
            date(2025, 9, 10),
            2,
        ),
        job(
            3,
            "UX Designer",
            "New York, NY",
            EmploymentType::FullTime,
            true,
            date(2025, 9, 8),
            3,
        ),
        job(
            4,
            "Backend Engineer",
            "Austin, TX",
            EmploymentType::FullTime,
            false,
            date(2025, 8, 20),
            1,
        ),
        job(
            5,
            "Marketing Intern",
            "Remote",
            EmploymentType::PartTime,
            true,
            date(2025, 9, 1),
            4,
        ),
    ]
}

fn candidate(
    id: u64,
    name: &str,
    email: &str,
    position: &str,
    applied_on: NaiveDate,
    status: CandidateStatus,
) -> Candidate {
    Candidate {
        id: CandidateId(id),
        name: name.to_string(),
        email: email.to_string(),
        position: Some(position.to_string()),
        applied_on,
        status,
        profile: CandidateProfile::default(),
    }
}

fn candidates() -> Vec<Candidate> {
    vec![
        candidate(
            1,
            "Sarah Johnson",
            "sarah.j@email.com",
            "Senior Frontend Developer",
            date(2025, 9, 28),
            CandidateStatus::Interview,
        ),
        candidate(
            2,
            "Michael Chen",
            "michael.chen@email.com",
            "Product Manager",
            date(2025, 9, 27),
            CandidateStatus::Screening,
        ),
        candidate(
            3,
            "Emily Rodriguez",
            "emily.r@email.com",
            "UX Designer",
            date(2025, 9, 26),
            CandidateStatus::Offer,
        ),
        candidate(
            4,
            "David Kim",
            "david.kim@email.com",
            "Backend Engineer",
            date(2025, 9, 25),
            CandidateStatus::New,
        ),
        candidate(
            5,
            "Lisa Wang",
            "lisa.wang@email.com",
            "Data Scientist",
            date(2025, 9, 24),
            CandidateStatus::Rejected,
        ),
    ]
}

fn employees() -> Vec<Employee> {
    [
        ("John Smith", "Engineering Manager", "john.smith@company.com"),
        ("Jane Doe", "Senior Engineer", "jane.doe@company.com"),
        ("Mike Wilson", "Product Manager", "mike.wilson@company.com"),
        ("Sarah Chen", "Tech Lead", "sarah.chen@company.com"),
        ("David Brown", "Senior Designer", "david.brown@company.com"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((full_name, title, email), id)| Employee {
        id: EmployeeId(id),
        full_name: full_name.to_string(),
        title: title.to_string(),
        email: email.to_string(),
    })
    .collect()
}

fn applications() -> Vec<Application> {
    [
        (1, 1, ApplicationStatus::Interview, "LinkedIn", at(2025, 9, 28, 10, 0)),
        (2, 2, ApplicationStatus::InReview, "Indeed", at(2025, 9, 27, 14, 30)),
        (3, 3, ApplicationStatus::Offer, "Referral", at(2025, 9, 26, 9, 15)),
        (4, 4, ApplicationStatus::New, "Company Website", at(2025, 9, 25, 16, 45)),
        (1, 5, ApplicationStatus::Rejected, "LinkedIn", at(2025, 9, 24, 11, 20)),
    ]
    .into_iter()
    .zip(1..)
    .map(
        |((job, candidate, status, source, submitted_at), id)| Application {
            id: ApplicationId(id),
            job_id: JobId(job),
            candidate_id: CandidateId(candidate),
            status,
            source: source.to_string(),
            submitted_at,
        },
    )
    .collect()
}

fn interviews() -> Vec<Interview> {
    vec![
        Interview {
            id: InterviewId(1),
            application_id: ApplicationId(1),
            scheduled_at: at(2025, 10, 5, 14, 0),
            duration_min: 60,
            stage: InterviewStage::Technical,
            location: "https://zoom.us/j/123456789".to_string(),
            result: None,
            notes: Some("Focus on React and TypeScript experience".to_string()),
        },
        Interview {
            id: InterviewId(2),
            application_id: ApplicationId(2),
            scheduled_at: at(2025, 10, 4, 10, 30),
            duration_min: 45,
            stage: InterviewStage::Screen,
            location: "Phone".to_string(),
            result: None,
            notes: None,
        },
        Interview {
            id: InterviewId(3),
            application_id: ApplicationId(3),
            scheduled_at: at(2025, 10, 3, 15, 0),
            duration_min: 60,
            stage: InterviewStage::HiringManager,
            location: "Office - Room 3A".to_string(),
            result: Some(InterviewResult::Pass),
            notes: Some("Excellent portfolio presentation".to_string()),
        },
    ]
}

fn participant(
    interview: u64,
    employee: u64,
    role: InterviewerRole,
    invited_at: DateTime<Utc>,
    attended: Option<bool>,
    notes: Option<&str>,
) -> InterviewEmployee {
    InterviewEmployee {
        interview_id: InterviewId(interview),
        employee_id: EmployeeId(employee),
        role,
        invited_at,
        attended,
        notes: notes.map(str::to_string),
    }
}

fn participants() -> Vec<InterviewEmployee> {
    vec![
        participant(1, 2, InterviewerRole::Lead, at(2025, 9, 28, 10, 0), None, None),
        participant(1, 4, InterviewerRole::Panel, at(2025, 9, 28, 10, 0), None, None),
        participant(2, 3, InterviewerRole::Lead, at(2025, 9, 27, 14, 30), None, None),
        participant(
            3,
            1,
            InterviewerRole::HiringManager,
            at(2025, 9, 26, 9, 15),
            Some(true),
            Some("Very impressed with the candidate"),
        ),
        participant(3, 5, InterviewerRole::Panel, at(2025, 9, 26, 9, 15), Some(true), None),
    ]
}
