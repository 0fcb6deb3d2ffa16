use axum::Router;
use std::net::SocketAddr;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_STATIC_DIR: &str = "dist";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Config {
    port: u16,
    static_dir: PathBuf,
}

impl Config {
    fn from_env() -> Result<Self, ParseIntError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // PORT and STATIC_DIR, falling back to 3000 and ./dist when unset or blank
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ParseIntError> {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let port = match non_blank("PORT") {
            Some(p) => p.trim().parse()?,
            None => DEFAULT_PORT,
        };
        let static_dir = non_blank("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));
        Ok(Self { port, static_dir })
    }

    fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn app(static_dir: &Path) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    if !config.static_dir.join("index.html").is_file() {
        tracing::warn!(dir = %config.static_dir.display(), "index.html not found in static dir");
    }

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    tracing::info!(
        "Serving {} on http://{}",
        config.static_dir.display(),
        config.addr()
    );
    axum::serve(listener, app(&config.static_dir)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::collections::HashMap;
    use tower::ServiceExt;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    fn bundle(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("static-server-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(dir.join("assets")).unwrap();
        std::fs::write(dir.join("index.html"), "<html>cointrek</html>").unwrap();
        std::fs::write(dir.join("assets/app.js"), "console.log(1)").unwrap();
        dir
    }

    async fn get(dir: &Path, uri: &str) -> (StatusCode, String) {
        let resp = app(dir)
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.static_dir, PathBuf::from("dist"));
        assert_eq!(config.addr().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_config_overrides() {
        let config =
            Config::from_lookup(lookup(&[("PORT", "8080"), ("STATIC_DIR", "build")])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.static_dir, PathBuf::from("build"));

        let config = Config::from_lookup(lookup(&[("PORT", " ")])).unwrap();
        assert_eq!(config.port, 3000);
        assert!(Config::from_lookup(lookup(&[("PORT", "http")])).is_err());
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let dir = bundle("root");
        let (status, body) = get(&dir, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>cointrek</html>");
    }

    #[tokio::test]
    async fn test_serves_assets_and_404s_unknown_files() {
        let dir = bundle("assets");
        let (status, body) = get(&dir, "/assets/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log(1)");

        let (status, _) = get(&dir, "/missing.js").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
