#[cfg(test)]
pub mod test_utils {
    use std::fs;
    use std::time::Duration;

    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use tempfile::TempDir;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    pub const INDEX_HTML: &str =
        "<!DOCTYPE html><html><head><title>NextBanking</title></head><body></body></html>";
    pub const ROBOTS_TXT: &str = "User-agent: *\nAllow: /\n";

    /// Create a dist directory shaped like `trunk build` output
    pub fn setup_test_bundle() -> TempDir {
        let dir = tempfile::tempdir().expect("Failed to create dist directory");
        fs::write(dir.path().join("index.html"), INDEX_HTML).expect("Failed to write index.html");
        fs::create_dir(dir.path().join("static")).expect("Failed to create static directory");
        fs::write(dir.path().join("static").join("robots.txt"), ROBOTS_TXT)
            .expect("Failed to write robots.txt");
        dir
    }

    pub fn setup_test_app_state(dist: &TempDir) -> AppState {
        AppState {
            dist_dir: dist.path().to_path_buf(),
            request_timeout: Duration::from_secs(5),
        }
    }

    /// Initialize tracing for tests with output captured by the test harness.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set. The subscriber is global; later calls
    /// keep the first one.
    pub fn init_test_tracing() {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| level.parse::<Level>().ok())
            .unwrap_or(Level::WARN);

        let _ = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    }

    /// Create axum app for testing over the given dist directory
    pub fn setup_test_app(dist: &TempDir) -> Router {
        init_test_tracing();
        create_router(setup_test_app_state(dist))
    }
}
