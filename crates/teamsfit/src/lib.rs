//! Recruiting dashboard core: pipeline records, the interview scheduling wizard, and the
//! HTTP surface over an in-memory store.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

pub use workflows::interviews::{InterviewSchedulingService, SchedulingWizard};
pub use workflows::{dashboard_router, MemoryStore};
