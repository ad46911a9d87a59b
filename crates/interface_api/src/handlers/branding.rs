//! Tenant branding handler

use axum::{extract::State, Json};

use domain_delivery::Branding;

use crate::AppState;

/// Returns the branding of the configured tenant
pub async fn get_branding(State(state): State<AppState>) -> Json<&'static Branding> {
    Json(state.branding)
}
