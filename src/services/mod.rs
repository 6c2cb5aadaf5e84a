pub mod admin_service;
pub mod email_log_service;
pub mod job_application_service;
pub mod job_service;
pub mod manager_decision_service;
pub mod meeting_review_service;
pub mod meeting_schedule_service;
pub mod profile_service;
pub mod storage_service;
pub mod team_lead_decision_service;
pub mod user_service;
