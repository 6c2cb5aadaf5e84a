pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    admin_service::AdminService, email_log_service::EmailLogService,
    job_application_service::JobApplicationService, job_service::JobService,
    manager_decision_service::ManagerDecisionService,
    meeting_review_service::MeetingReviewService,
    meeting_schedule_service::MeetingScheduleService, profile_service::ProfileService,
    storage_service::StorageService, team_lead_decision_service::TeamLeadDecisionService,
    user_service::UserService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub user_service: UserService,
    pub profile_service: ProfileService,
    pub job_service: JobService,
    pub job_application_service: JobApplicationService,
    pub meeting_schedule_service: MeetingScheduleService,
    pub meeting_review_service: MeetingReviewService,
    pub team_lead_decision_service: TeamLeadDecisionService,
    pub manager_decision_service: ManagerDecisionService,
    pub email_log_service: EmailLogService,
    pub admin_service: AdminService,
    pub storage_service: StorageService,
}

impl AppState {
    pub fn new(pool: PgPool, media_root: &str) -> Self {
        Self {
            user_service: UserService::new(pool.clone()),
            profile_service: ProfileService::new(pool.clone()),
            job_service: JobService::new(pool.clone()),
            job_application_service: JobApplicationService::new(pool.clone()),
            meeting_schedule_service: MeetingScheduleService::new(pool.clone()),
            meeting_review_service: MeetingReviewService::new(pool.clone()),
            team_lead_decision_service: TeamLeadDecisionService::new(pool.clone()),
            manager_decision_service: ManagerDecisionService::new(pool.clone()),
            email_log_service: EmailLogService::new(pool.clone()),
            admin_service: AdminService::new(pool.clone()),
            storage_service: StorageService::new(media_root),
            pool,
        }
    }
}
