#[cfg(test)]
mod integration_tests {
    use crate::schemas::HealthResponse;
    use crate::test_utils::test_utils::{setup_test_app, setup_test_bundle, INDEX_HTML, ROBOTS_TXT};
    use axum::http::StatusCode;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_health_check() {
        let dist = setup_test_bundle();
        let server = TestServer::new(setup_test_app(&dist)).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(body.bundle, "present");
    }

    #[tokio::test]
    async fn test_health_reports_missing_bundle() {
        let dist = tempfile::tempdir().unwrap();
        let server = TestServer::new(setup_test_app(&dist)).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.bundle, "missing");
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let dist = setup_test_bundle();
        let server = TestServer::new(setup_test_app(&dist)).unwrap();

        let response = server.get("/").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), INDEX_HTML);
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let dist = setup_test_bundle();
        let server = TestServer::new(setup_test_app(&dist)).unwrap();

        for path in ["/terms", "/privacy", "/contact", "/no-such-page"] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::OK);
            assert_eq!(response.text(), INDEX_HTML, "fallback for {}", path);
        }
    }

    #[tokio::test]
    async fn test_static_asset_is_served() {
        let dist = setup_test_bundle();
        let server = TestServer::new(setup_test_app(&dist)).unwrap();

        let response = server.get("/static/robots.txt").await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.text(), ROBOTS_TXT);
    }

    #[tokio::test]
    async fn test_setup_installs_tracing_subscriber() {
        let dist = setup_test_bundle();
        let _app = setup_test_app(&dist);

        assert!(tracing::dispatcher::has_been_set());
        tracing::warn!("test subscriber is active");
    }
}
