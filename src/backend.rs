use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    Router,
};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use tokio::time::Instant;
use tower_http::services::{ServeDir, ServeFile};

use crate::logging::{LogLevel, Logger};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const PORT_BOUNDS: (u16, u16) = (1, u16::MAX);

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestLog {
    method: String,
    path: String,
    status: u16,
    duration_ms: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HostConfig {
    port: u16,
    dist_dir: PathBuf,
    log_level: LogLevel,
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let port = non_empty("PORT")
            .and_then(|value| value.parse::<u16>().ok())
            .filter(|value| (PORT_BOUNDS.0..=PORT_BOUNDS.1).contains(value))
            .unwrap_or(DEFAULT_PORT);
        let dist_dir = non_empty("SITE_DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let log_level = non_empty("LOG_LEVEL")
            .and_then(|value| LogLevel::parse(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            port,
            dist_dir,
            log_level,
        }
    }
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = HostConfig::from_env();
    let logger = Logger::new(config.log_level);
    let bind_address = format!("0.0.0.0:{}", config.port);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    logger.info(
        "server_listening",
        json!({
            "url": format!("http://127.0.0.1:{}", config.port),
            "distDir": config.dist_dir.display().to_string(),
        }),
    );
    axum::serve(listener, router(&config, logger)).await?;
    Ok(())
}

fn router(config: &HostConfig, logger: Logger) -> Router {
    let static_service = ServeDir::new(&config.dist_dir)
        .not_found_service(ServeFile::new(config.dist_dir.join("index.html")));

    Router::new()
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(logger, log_request))
}

async fn log_request(State(logger): State<Logger>, request: Request, next: Next) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    let entry = RequestLog {
        method,
        path,
        status: response.status().as_u16(),
        duration_ms: started.elapsed().as_millis() as u64,
    };
    logger.debug(
        "static_request",
        serde_json::to_value(&entry).unwrap_or(serde_json::Value::Null),
    );
    response
}
