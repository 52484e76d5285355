use std::sync::Arc;

use dalal::{BackendConfig, DalalConnector, DalalError};

/// Environment variable that switches every demo to the offline mock connector.
pub const USE_MOCK_ENV: &str = "DALAL_DEMOS_USE_MOCK";

/// Return a connector for the demos.
///
/// With `DALAL_DEMOS_USE_MOCK` set, fixtures are served offline; otherwise the
/// HTTP connector targets the backend named by `DALAL_API_BASE`.
///
/// # Errors
/// Returns `InvalidArg` if `DALAL_API_BASE` is not an http(s) URL, or a connector
/// error if the HTTP client cannot be built.
pub fn get_connector() -> Result<Arc<dyn DalalConnector>, DalalError> {
    if std::env::var(USE_MOCK_ENV).is_ok() {
        println!("--- (Using Mock Connector for CI) ---");
        return Ok(Arc::new(dalal_mock::MockConnector::new()));
    }
    let cfg = BackendConfig::from_env()?;
    Ok(Arc::new(dalal_http::HttpConnector::new(&cfg)?))
}
