//! HTTP API Layer
//!
//! Read-only REST API over daily reports, drivers and vehicles using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: One module per audience (driver, admin) plus public endpoints
//! - **Middleware**: Bearer authentication, request ids, tracing, audit logging
//! - **DTOs**: Query parameters and response envelopes
//! - **Error Handling**: Fixed JSON error bodies
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let state = AppState::from_store(Arc::new(PostgresDeliveryAdapter::new(pool)), config)?;
//! axum::serve(listener, create_router(state)).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod auth;
pub mod extract;

use std::sync::Arc;

use axum::{
    Router,
    routing::get,
    middleware as axum_middleware,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use core_kernel::{CoreError, Timezone};
use domain_delivery::{Branding, DriverPort, ReportPort, VehiclePort};

use crate::config::ApiConfig;
use crate::middleware::{auth_middleware, audit_middleware};
use crate::handlers::{admin, branding, driver, health};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub drivers: Arc<dyn DriverPort>,
    pub reports: Arc<dyn ReportPort>,
    pub vehicles: Arc<dyn VehiclePort>,
    pub config: ApiConfig,
    pub timezone: Timezone,
    pub branding: &'static Branding,
}

impl AppState {
    /// Builds state where one store serves every port
    ///
    /// # Errors
    ///
    /// Returns an error if the configured timezone is not a valid IANA name
    /// or the JWT secret is empty
    pub fn from_store<S>(store: Arc<S>, config: ApiConfig) -> Result<Self, CoreError>
    where
        S: DriverPort + ReportPort + VehiclePort,
    {
        if config.jwt_secret.trim().is_empty() {
            return Err(CoreError::configuration("jwt_secret must not be empty"));
        }
        let timezone = config.timezone()?;
        let branding = config.branding();
        let drivers: Arc<dyn DriverPort> = store.clone();
        let reports: Arc<dyn ReportPort> = store.clone();
        let vehicles: Arc<dyn VehiclePort> = store;

        Ok(Self {
            drivers,
            reports,
            vehicles,
            config,
            timezone,
            branding,
        })
    }
}

/// Creates the main API router
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/api/v1/branding", get(branding::get_branding));

    // Driver routes
    let driver_routes = Router::new()
        .route("/reports", get(driver::list_my_reports))
        .route("/me", get(driver::get_profile));

    // Admin routes
    let admin_routes = Router::new()
        .route("/drivers", get(admin::list_drivers))
        .route("/drivers/:id/reports", get(admin::list_driver_reports))
        .route("/reports/summary", get(admin::submission_summary));

    // Protected API routes
    let api_routes = Router::new()
        .nest("/driver", driver_routes)
        .route("/vehicles", get(driver::list_vehicles))
        .nest("/admin", admin_routes)
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(axum_middleware::from_fn_with_state(state.clone(), auth_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
