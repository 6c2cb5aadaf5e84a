pub mod applicant;
pub mod health;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::models::job_application::APPLICANT_DETAIL_PREFIX;
use crate::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(
            &format!("{}/:slug", APPLICANT_DETAIL_PREFIX),
            get(applicant::get_applicant),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
