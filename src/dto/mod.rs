pub mod decision_dto;
pub mod email_log_dto;
pub mod job_application_dto;
pub mod job_dto;
pub mod meeting_dto;
pub mod profile_dto;
pub mod user_dto;
