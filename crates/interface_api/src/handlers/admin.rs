//! Admin handlers

use axum::{
    extract::State,
    Extension, Json,
};
use chrono::Utc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use core_kernel::DriverId;
use domain_delivery::{require_role, DailyReport, Driver, ReportQuery, Role, SubmissionSummary};

use crate::auth::Claims;
use crate::extract::{ApiPath, ApiQuery};
use crate::dto::admin::{SummaryParams, SummaryResponse};
use crate::dto::reports::ReportListParams;
use crate::{error::ApiError, AppState};

/// Lists every driver, ordered by office code then driver code
#[instrument(skip(state, claims), fields(admin = %claims.sub))]
pub async fn list_drivers(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<Driver>>, ApiError> {
    require_role(&claims.role, Role::Admin)?;
    let drivers = state.drivers.list_drivers().await?;

    Ok(Json(drivers))
}

/// Lists one driver's most recent reports
#[instrument(skip(state, claims), fields(admin = %claims.sub))]
pub async fn list_driver_reports(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ApiPath(id): ApiPath<Uuid>,
    ApiQuery(params): ApiQuery<ReportListParams>,
) -> Result<Json<Vec<DailyReport>>, ApiError> {
    require_role(&claims.role, Role::Admin)?;
    params.validate()?;

    let driver = state.drivers.get_driver(DriverId::from_uuid(id)).await?;
    let query = ReportQuery::for_driver(driver.id, params.limit()?);
    let reports = state.reports.find_reports(query).await?;

    Ok(Json(reports))
}

/// Who has and has not filed a report for a date
#[instrument(skip(state, claims), fields(admin = %claims.sub))]
pub async fn submission_summary(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    ApiQuery(params): ApiQuery<SummaryParams>,
) -> Result<Json<SummaryResponse>, ApiError> {
    require_role(&claims.role, Role::Admin)?;

    let date = params.date.unwrap_or_else(|| state.timezone.today());
    let (drivers, reports) = tokio::try_join!(
        state.drivers.list_drivers(),
        state.reports.find_reports(ReportQuery::on_date(date)),
    )?;

    Ok(Json(SummaryResponse {
        summary: SubmissionSummary::build(date, &drivers, &reports),
        timezone: state.timezone,
        generated_at: state.timezone.format_datetime(Utc::now()),
    }))
}
