use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};

use crate::{dto::job_application_dto::ApplicantDetailResponse, error::Result, AppState};

/// Canonical detail view of an application, resolved by its slug.
#[axum::debug_handler]
pub async fn get_applicant(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse> {
    let application = state.job_application_service.get_by_slug(&slug).await?;
    Ok(Json(ApplicantDetailResponse::from(application)))
}
