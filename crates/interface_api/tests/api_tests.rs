//! Router tests against the in-memory store

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::Days;
use serde_json::Value;
use tower::ServiceExt;

use core_kernel::{CoreError, DriverId};
use domain_delivery::{DailyReport, Driver, MockDeliveryStore, Role, Vehicle};
use interface_api::auth::create_token;
use interface_api::config::ApiConfig;
use interface_api::{create_router, AppState};
use test_utils::{
    assert_catalog_order, fake_driver, fake_report, fake_vehicle, report_date_strategy,
    report_limit_strategy, DateFixtures, DriverFixtures, ReportFixtures, TestReportBuilder,
    VehicleFixtures,
};

struct TestApp {
    store: Arc<MockDeliveryStore>,
    router: Router,
    config: ApiConfig,
}

impl TestApp {
    fn new() -> Self {
        Self::with_config(ApiConfig::default())
    }

    fn with_config(config: ApiConfig) -> Self {
        let store = Arc::new(MockDeliveryStore::new());
        let state = AppState::from_store(store.clone(), config.clone()).unwrap();
        Self {
            store,
            router: create_router(state),
            config,
        }
    }

    fn token(&self, driver_id: DriverId, role: Role) -> String {
        create_token(driver_id, role, &self.config.jwt_secret, 60).unwrap()
    }

    async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        let mut request = Request::builder().uri(uri);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let response = self
            .router
            .clone()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn seed_driver(&self, driver: &Driver) {
        self.store.insert_driver(driver.clone()).await;
    }

    async fn seed_reports(&self, reports: Vec<DailyReport>) {
        for report in reports {
            self.store.insert_report(report).await;
        }
    }
}

fn report_dates(body: &Value) -> Vec<String> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|r| r["report_date"].as_str().unwrap().to_string())
        .collect()
}

mod public {
    use super::*;

    #[tokio::test]
    async fn test_health() {
        let app = TestApp::new();
        let (status, body) = app.get("/health", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_readiness_reports_unavailable_store() {
        let app = TestApp::new();
        let (status, _) = app.get("/health/ready", None).await;
        assert_eq!(status, StatusCode::OK);

        app.store.fail_reads();
        let (status, body) = app.get("/health/ready", None).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "unavailable");
    }

    #[tokio::test]
    async fn test_branding_for_configured_tenant() {
        let app = TestApp::with_config(ApiConfig {
            tenant: "sakura".to_string(),
            ..ApiConfig::default()
        });
        let (status, body) = app.get("/api/v1/branding", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tenant"], "sakura");
    }

    #[tokio::test]
    async fn test_unknown_tenant_falls_back_to_default() {
        let app = TestApp::with_config(ApiConfig {
            tenant: "nope".to_string(),
            ..ApiConfig::default()
        });
        let (_, body) = app.get("/api/v1/branding", None).await;
        assert_eq!(body["tenant"], "default");
    }

    #[test]
    fn test_empty_jwt_secret_rejected_at_startup() {
        let config = ApiConfig {
            jwt_secret: "  ".to_string(),
            ..ApiConfig::default()
        };
        let result = AppState::from_store(Arc::new(MockDeliveryStore::new()), config);
        assert!(matches!(result, Err(CoreError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_responses_carry_request_id() {
        let app = TestApp::new();
        let response = app
            .router
            .clone()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert!(response.headers().contains_key("x-request-id"));
    }
}

mod authentication {
    use super::*;

    #[tokio::test]
    async fn test_missing_token() {
        let app = TestApp::new();
        let (status, body) = app.get("/api/v1/driver/reports", None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body, serde_json::json!({"error": "Unauthorized"}));
    }

    #[tokio::test]
    async fn test_garbage_token() {
        let app = TestApp::new();
        let (status, _) = app.get("/api/v1/vehicles", Some("not-a-jwt")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_token_signed_with_other_secret() {
        let app = TestApp::new();
        let token = create_token(DriverId::new(), Role::Driver, "someone-else", 60).unwrap();
        let (status, _) = app.get("/api/v1/driver/me", Some(&token)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_admin_cannot_use_driver_endpoints() {
        let app = TestApp::new();
        let token = app.token(DriverFixtures::admin().id, Role::Admin);

        for uri in ["/api/v1/driver/reports", "/api/v1/driver/me", "/api/v1/vehicles"] {
            let (status, body) = app.get(uri, Some(&token)).await;
            assert_eq!(status, StatusCode::FORBIDDEN, "{uri}");
            assert_eq!(body["error"], "Forbidden");
        }
    }

    #[tokio::test]
    async fn test_driver_cannot_use_admin_endpoints() {
        let app = TestApp::new();
        let token = app.token(DriverId::new(), Role::Driver);

        for uri in ["/api/v1/admin/drivers", "/api/v1/admin/reports/summary"] {
            let (status, _) = app.get(uri, Some(&token)).await;
            assert_eq!(status, StatusCode::FORBIDDEN, "{uri}");
        }
    }
}

mod driver_endpoints {
    use super::*;

    #[tokio::test]
    async fn test_reports_are_own_and_newest_first() {
        let app = TestApp::new();
        let sato = DriverFixtures::sato();
        let suzuki = DriverFixtures::suzuki();
        app.seed_reports(ReportFixtures::consecutive(&sato, DateFixtures::monday(), 3)).await;
        app.seed_reports(ReportFixtures::consecutive(&suzuki, DateFixtures::monday(), 5)).await;

        let token = app.token(sato.id, Role::Driver);
        let (status, body) = app.get("/api/v1/driver/reports", Some(&token)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            report_dates(&body),
            vec!["2024-06-05", "2024-06-04", "2024-06-03"]
        );
        assert!(body
            .as_array()
            .unwrap()
            .iter()
            .all(|r| r["driver_id"] == sato.id.as_uuid().to_string()));
        assert_eq!(body[0]["distance_km"], 102);
    }

    #[tokio::test]
    async fn test_same_day_ordered_by_creation() {
        let app = TestApp::new();
        let sato = DriverFixtures::sato();
        let day = DateFixtures::monday();
        let older = TestReportBuilder::new(sato.id).on(day).created_minutes_ago(30).field("n", 1).build();
        let newer = TestReportBuilder::new(sato.id).on(day).created_minutes_ago(5).field("n", 2).build();
        app.seed_reports(vec![older, newer]).await;

        let token = app.token(sato.id, Role::Driver);
        let (_, body) = app.get("/api/v1/driver/reports", Some(&token)).await;

        assert_eq!(body[0]["n"], 2);
        assert_eq!(body[1]["n"], 1);
    }

    #[tokio::test]
    async fn test_default_limit_is_thirty() {
        let app = TestApp::new();
        let sato = DriverFixtures::sato();
        app.seed_reports(ReportFixtures::consecutive(&sato, DateFixtures::monday(), 35)).await;

        let token = app.token(sato.id, Role::Driver);
        let (_, body) = app.get("/api/v1/driver/reports", Some(&token)).await;
        let dates = report_dates(&body);

        assert_eq!(dates.len(), 30);
        let last = DateFixtures::monday() + Days::new(34);
        assert_eq!(dates[0], last.to_string());
    }

    #[tokio::test]
    async fn test_explicit_limit() {
        let app = TestApp::new();
        let sato = DriverFixtures::sato();
        app.seed_reports(ReportFixtures::consecutive(&sato, DateFixtures::monday(), 10)).await;

        let token = app.token(sato.id, Role::Driver);
        let (status, body) = app.get("/api/v1/driver/reports?limit=4", Some(&token)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_out_of_range_limit() {
        let app = TestApp::new();
        let token = app.token(DriverId::new(), Role::Driver);

        for uri in [
            "/api/v1/driver/reports?limit=0",
            "/api/v1/driver/reports?limit=101",
            "/api/v1/driver/reports?limit=-1",
            "/api/v1/driver/reports?limit=4294967296",
        ] {
            let (status, body) = app.get(uri, Some(&token)).await;
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
            assert_eq!(body["error"], "Validation error");
        }
    }

    #[tokio::test]
    async fn test_non_numeric_limit() {
        let app = TestApp::new();
        let token = app.token(DriverId::new(), Role::Driver);
        let (status, body) = app.get("/api/v1/driver/reports?limit=many", Some(&token)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Bad request");
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_no_reports_is_empty_list() {
        let app = TestApp::new();
        let token = app.token(DriverId::new(), Role::Driver);
        let (status, body) = app.get("/api/v1/driver/reports", Some(&token)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_profile() {
        let app = TestApp::new();
        let sato = DriverFixtures::sato();
        app.seed_driver(&sato).await;

        let token = app.token(sato.id, Role::Driver);
        let (status, body) = app.get("/api/v1/driver/me", Some(&token)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "佐藤 太郎");
        assert_eq!(body["office_code"], "T01");
        assert_eq!(body["driver_code"], "0042");
        assert!(body.get("role").is_none());
    }

    #[tokio::test]
    async fn test_profile_for_unknown_driver() {
        let app = TestApp::new();
        let token = app.token(DriverId::new(), Role::Driver);
        let (status, body) = app.get("/api/v1/driver/me", Some(&token)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({"error": "Driver not found"}));
    }

    #[tokio::test]
    async fn test_vehicles_in_catalog_order() {
        let app = TestApp::new();
        for vehicle in VehicleFixtures::fleet() {
            app.store.insert_vehicle(vehicle).await;
        }

        let token = app.token(DriverId::new(), Role::Driver);
        let (status, body) = app.get("/api/v1/vehicles", Some(&token)).await;

        assert_eq!(status, StatusCode::OK);
        let brands: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["brand"].as_str().unwrap())
            .collect();
        assert_eq!(brands, vec!["Dutro", "Ranger", "Elf"]);
        assert_eq!(body[0]["mileage"], Value::Null);
    }

    #[tokio::test]
    async fn test_random_fleet_in_catalog_order() {
        let app = TestApp::new();
        for _ in 0..8 {
            app.store.insert_vehicle(fake_vehicle()).await;
        }

        let token = app.token(DriverId::new(), Role::Driver);
        let (_, body) = app.get("/api/v1/vehicles", Some(&token)).await;
        let vehicles: Vec<Vehicle> = serde_json::from_value(body).unwrap();

        assert_eq!(vehicles.len(), 8);
        assert_catalog_order(&vehicles);
    }

    #[tokio::test]
    async fn test_store_failure_hides_details() {
        let app = TestApp::new();
        app.store.fail_reads();

        let token = app.token(DriverId::new(), Role::Driver);
        let (status, body) = app.get("/api/v1/vehicles", Some(&token)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({"error": "DB error"}));
    }
}

mod admin_endpoints {
    use super::*;

    /// Seeds tanaka, suzuki, sato and an admin, returned in that order
    async fn seeded() -> (TestApp, String, Vec<Driver>) {
        let app = TestApp::new();
        let drivers = vec![
            DriverFixtures::tanaka(),
            DriverFixtures::suzuki(),
            DriverFixtures::sato(),
            DriverFixtures::admin(),
        ];
        for driver in &drivers {
            app.seed_driver(driver).await;
        }
        let token = app.token(drivers[3].id, Role::Admin);
        (app, token, drivers)
    }

    #[tokio::test]
    async fn test_drivers_in_roster_order() {
        let (app, token, _) = seeded().await;
        let (status, body) = app.get("/api/v1/admin/drivers", Some(&token)).await;

        assert_eq!(status, StatusCode::OK);
        let codes: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|d| format!("{}/{}", d["office_code"].as_str().unwrap(), d["driver_code"].as_str().unwrap()))
            .collect();
        assert_eq!(codes, vec!["HQ/9001", "T01/0042", "T01/0043", "Y02/0007"]);
    }

    #[tokio::test]
    async fn test_driver_reports() {
        let app = TestApp::new();
        let sato = DriverFixtures::sato();
        app.seed_driver(&sato).await;
        app.seed_reports(ReportFixtures::consecutive(&sato, DateFixtures::monday(), 6)).await;

        let token = app.token(DriverId::new(), Role::Admin);
        let uri = format!("/api/v1/admin/drivers/{}/reports?limit=2", sato.id.as_uuid());
        let (status, body) = app.get(&uri, Some(&token)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(report_dates(&body), vec!["2024-06-08", "2024-06-07"]);
    }

    #[tokio::test]
    async fn test_reports_for_unknown_driver() {
        let (app, token, _) = seeded().await;
        let uri = format!("/api/v1/admin/drivers/{}/reports", DriverId::new().as_uuid());
        let (status, body) = app.get(&uri, Some(&token)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Driver not found");
    }

    #[tokio::test]
    async fn test_summary_for_date() {
        let (app, token, drivers) = seeded().await;
        let (tanaka, sato) = (&drivers[0], &drivers[2]);
        app.seed_reports(vec![
            DailyReport::new(sato.id, DateFixtures::monday()),
            DailyReport::new(tanaka.id, DateFixtures::sunday_before()),
        ])
        .await;

        let (status, body) = app
            .get("/api/v1/admin/reports/summary?date=2024-06-03", Some(&token))
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["date"], "2024-06-03");
        assert_eq!(body["date_label"], "2024年6月3日(月)");
        assert_eq!(body["total_drivers"], 3);
        assert_eq!(body["submitted"], 1);
        assert_eq!(body["missing"].as_array().unwrap().len(), 2);
        assert_eq!(body["timezone"], "Asia/Tokyo");
    }

    #[tokio::test]
    async fn test_summary_rejects_malformed_date() {
        let (app, token, _) = seeded().await;
        let (status, body) = app
            .get("/api/v1/admin/reports/summary?date=06/03/2024", Some(&token))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Bad request");
    }

    #[tokio::test]
    async fn test_malformed_driver_id() {
        let (app, token, _) = seeded().await;
        let (status, body) = app
            .get("/api/v1/admin/drivers/not-a-uuid/reports", Some(&token))
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Bad request");
    }

    #[tokio::test]
    async fn test_driver_reports_default_limit() {
        let (app, token, drivers) = seeded().await;
        let sato = &drivers[2];
        app.seed_reports(ReportFixtures::consecutive(sato, DateFixtures::monday(), 40)).await;

        let uri = format!("/api/v1/admin/drivers/{}/reports", sato.id.as_uuid());
        let (status, body) = app.get(&uri, Some(&token)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 30);
    }

    #[tokio::test]
    async fn test_driver_reports_negative_limit() {
        let (app, token, drivers) = seeded().await;
        let uri = format!("/api/v1/admin/drivers/{}/reports?limit=-5", drivers[2].id.as_uuid());
        let (status, body) = app.get(&uri, Some(&token)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "Validation error");
    }

    #[tokio::test]
    async fn test_store_failure_hides_details() {
        let (app, token, drivers) = seeded().await;
        app.store.fail_reads();

        let driver_reports = format!("/api/v1/admin/drivers/{}/reports", drivers[2].id.as_uuid());
        for uri in [
            "/api/v1/admin/drivers",
            "/api/v1/admin/reports/summary?date=2024-06-03",
            driver_reports.as_str(),
        ] {
            let (status, body) = app.get(uri, Some(&token)).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
            assert_eq!(body, serde_json::json!({"error": "DB error"}), "{uri}");
        }
    }
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn report_count_is_bounded_by_limit(
            limit in report_limit_strategy(),
            dates in proptest::collection::vec(report_date_strategy(), 0..60),
        ) {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();

            let (status, body) = runtime.block_on(async {
                let app = TestApp::new();
                let driver = fake_driver();
                let other = fake_driver();
                for date in &dates {
                    app.store.insert_report(fake_report(driver.id, *date)).await;
                    app.store.insert_report(fake_report(other.id, *date)).await;
                }

                let token = app.token(driver.id, Role::Driver);
                app.get(&format!("/api/v1/driver/reports?limit={limit}"), Some(&token)).await
            });

            prop_assert_eq!(status, StatusCode::OK);
            let returned = report_dates(&body);
            prop_assert_eq!(returned.len(), dates.len().min(limit as usize));
            prop_assert!(returned.windows(2).all(|w| w[0] >= w[1]));
        }
    }
}
