//! Trade Validation Service
//!
//! Exposes the validation engine over a JSON REST API.
//!
//! # Endpoints
//!
//! - `POST /validate`: validate one trade
//! - `POST /validateBatch`: validate many trades, results in input order
//! - `GET /rules`: the rule catalogue in evaluation order
//! - `GET /health`: liveness probe
//!
//! # Example
//!
//! ```ignore
//! use tradeval_server::{ServiceConfig, ValidationService};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServiceConfig::from_file("config/service.json").unwrap();
//!     let service = ValidationService::from_config(config).unwrap();
//!     service.run().await.unwrap();
//! }
//! ```

pub mod config;
pub mod presentation;

pub use config::{ConfigError, ServiceConfig};
pub use presentation::{ApiError, AppState, create_router};

use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tradeval_engine::ValidationEngine;

/// The validation server
pub struct ValidationService {
    pub config: ServiceConfig,
    pub engine: Arc<ValidationEngine>,
}

impl ValidationService {
    /// Wire the engine from a loaded configuration
    pub fn from_config(config: ServiceConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let calendar = config.build_calendar();
        let reference = Arc::new(config.build_reference_data());
        let engine = Arc::new(ValidationEngine::standard(calendar, reference));

        Ok(ValidationService { config, engine })
    }

    /// Create the REST API router
    pub fn rest_router(&self) -> Router {
        create_router(Arc::new(AppState::new(Arc::clone(&self.engine))))
    }

    /// Run the validation server
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let addr = format!("{}:{}", self.config.server.host, self.config.server.port);
        let router = self.rest_router();

        tracing::info!("Trade validation service listening on {}", addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}
