use axum::Router;
use tempfile::TempDir;

use web_server::state::AppState;

/// Build an app backed by a store in a throwaway directory.
///
/// The TempDir must be kept alive for the duration of the test.
pub async fn test_app() -> (Router, TempDir) {
    let temp = TempDir::new().unwrap();
    let state = AppState::new(temp.path().to_path_buf()).await.unwrap();
    (web_server::app(state), temp)
}
