//! # Application State
//!
//! Shared state for the Axum application.
//! Contains the payment method selector, movie catalog, option center and
//! configuration.

use pay_core::{MovieCatalog, OptionCenter, PaymentMethodSelector};
use pay_sim::SimulatorConfig;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<std::net::SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid socket address {}:{}: {}", self.host, self.port, e))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            environment: "development".to_string(),
        }
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment method selector (one factory per enabled provider)
    pub methods: PaymentMethodSelector,
    /// Movie catalog
    pub catalog: Arc<MovieCatalog>,
    /// Per-role menu options
    pub options: Arc<OptionCenter>,
    /// Simulator config
    pub simulator: SimulatorConfig,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState from environment and `config/movies.toml`
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();
        let simulator = SimulatorConfig::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to configure payment simulator: {}", e))?;
        let catalog = load_movie_catalog()?;

        Ok(Self::from_parts(config, simulator, catalog))
    }

    /// Assemble state from explicit parts (no env or file access)
    pub fn from_parts(config: AppConfig, simulator: SimulatorConfig, catalog: MovieCatalog) -> Self {
        Self {
            methods: simulator.selector(),
            catalog: Arc::new(catalog),
            options: Arc::new(OptionCenter::new()),
            simulator,
            config,
        }
    }
}

/// Load movie catalog from config file
fn load_movie_catalog() -> anyhow::Result<MovieCatalog> {
    let config_paths = [
        "config/movies.toml",
        "../config/movies.toml",
        "../../config/movies.toml",
    ];

    for path in config_paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            let catalog = MovieCatalog::from_toml(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path, e))?;
            tracing::info!("Loaded {} movies from {}", catalog.movies.len(), path);
            return Ok(catalog);
        }
    }

    tracing::warn!("No movie catalog found, using empty catalog");
    Ok(MovieCatalog::new())
}
