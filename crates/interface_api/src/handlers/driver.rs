//! Driver handlers
//!
//! Endpoints a driver uses from the handset app. Every handler requires the
//! `DRIVER` role and scopes reads to the token's subject.

use axum::{
    extract::State,
    Extension, Json,
};
use tracing::instrument;
use validator::Validate;

use domain_delivery::{require_role, DailyReport, DriverProfile, ReportQuery, Role, Vehicle};

use crate::auth::Claims;
use crate::extract::ApiQuery;
use crate::dto::reports::ReportListParams;
use crate::{error::ApiError, AppState};

/// Lists the caller's most recent reports
#[instrument(skip(state, claims), fields(driver = %claims.sub))]
pub async fn list_my_reports(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ApiQuery(params): ApiQuery<ReportListParams>,
) -> Result<Json<Vec<DailyReport>>, ApiError> {
    require_role(&claims.role, Role::Driver)?;
    let driver_id = claims.driver_id()?;
    params.validate()?;

    let query = ReportQuery::for_driver(driver_id, params.limit()?);
    let reports = state.reports.find_reports(query).await?;

    Ok(Json(reports))
}

/// Returns the caller's profile
#[instrument(skip(state, claims), fields(driver = %claims.sub))]
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<DriverProfile>, ApiError> {
    require_role(&claims.role, Role::Driver)?;
    let driver = state.drivers.get_driver(claims.driver_id()?).await?;

    Ok(Json(driver.profile()))
}

/// Lists vehicles, ordered by manufacturer then brand
#[instrument(skip(state, claims), fields(driver = %claims.sub))]
pub async fn list_vehicles(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<Vehicle>>, ApiError> {
    require_role(&claims.role, Role::Driver)?;
    let vehicles = state.vehicles.list_vehicles().await?;

    Ok(Json(vehicles))
}
