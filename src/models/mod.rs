pub mod email_log;
pub mod job;
pub mod job_application;
pub mod manager_decision;
pub mod meeting_review;
pub mod meeting_schedule;
pub mod profile;
pub mod record_label;
pub mod team_lead_decision;
pub mod user;
