//! HTTP adapters - REST API implementations.
//!
//! Each area has its own module; `build_router` assembles them under `/api`
//! and applies the shared middleware stack.

pub mod company_data;
pub mod error;
pub mod health;
pub mod planning;

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, StatusCode};
use axum::response::Response;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::ports::{BaselineStore, IntentExtractor, TableParser};

pub use company_data::{company_data_router, CompanyDataAppState};
pub use error::ErrorResponse;
pub use health::{health_router, HealthState};
pub use planning::{planning_router, PlanningAppState};

/// Path prefix of every endpoint.
pub const API_PREFIX: &str = "/api";

/// Ports shared by the HTTP modules.
#[derive(Clone)]
pub struct ApiServices {
    pub intent_extractor: Arc<dyn IntentExtractor>,
    pub baseline_store: Arc<dyn BaselineStore>,
    pub table_parser: Arc<dyn TableParser>,
    pub extraction_timeout: Duration,
}

impl ApiServices {
    fn planning_state(&self) -> PlanningAppState {
        PlanningAppState {
            intent_extractor: self.intent_extractor.clone(),
            baseline_store: self.baseline_store.clone(),
            extraction_timeout: self.extraction_timeout,
        }
    }

    fn company_data_state(&self) -> CompanyDataAppState {
        CompanyDataAppState {
            table_parser: self.table_parser.clone(),
            baseline_store: self.baseline_store.clone(),
        }
    }

    fn health_state(&self) -> HealthState {
        HealthState {
            intent_service_available: self.intent_extractor.extractor_info().remote,
            baseline_store: self.baseline_store.clone(),
        }
    }
}

/// Middleware settings for the HTTP surface.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpSettings {
    pub request_timeout: Duration,
    /// Allowed browser origins; `*` allows any.
    pub cors_origins: Vec<String>,
    pub max_upload_bytes: usize,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            cors_origins: vec!["*".to_string()],
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

/// Every endpoint without middleware, mounted at `/api`.
pub fn api_router(services: &ApiServices) -> Router {
    let api = Router::new()
        .merge(planning_router(services.planning_state()))
        .merge(company_data_router(services.company_data_state()))
        .merge(health_router(services.health_state()));

    Router::new().nest(API_PREFIX, api)
}

/// The complete application router.
pub fn build_router(services: &ApiServices, settings: &HttpSettings) -> Router {
    api_router(services)
        .layer(DefaultBodyLimit::max(settings.max_upload_bytes))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TimeoutLayer::new(settings.request_timeout))
        .layer(cors_layer(&settings.cors_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() || origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let parsed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any)
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!(panic = %detail, "request handler panicked");
    ErrorResponse::internal(detail).into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
}
