//! # Ticket Booth
//!
//! Movie ticket purchases paid through simulated payment providers.
//!
//! ## Usage
//!
//! ```bash
//! # Optional: reproducible outcomes and a provider subset
//! export PAY_SIM_SEED=10
//! export PAY_ENABLED_METHODS=octopus,alipay,payme
//! export PAY_DEFAULT_METHOD=octopus
//!
//! # Run the server
//! ticket-booth
//! ```

use pay_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    print_banner();

    let state = AppState::new()?;

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Movies loaded: {}", state.catalog.movies.len());
    info!(
        "Payment methods: {:?} (default: {})",
        state.methods.payment_types(),
        state.methods.default_type()
    );
    if let Some(seed) = state.simulator.seed {
        info!("Simulator seed fixed at {}", seed);
    }

    let app = routes::create_router(state);

    info!("Ticket booth starting on http://{}", addr);

    if !is_prod {
        info!("Movies: GET http://{}/api/v1/movies", addr);
        info!("Purchase: POST http://{}/api/v1/tickets", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  Ticket Booth
  ━━━━━━━━━━━━━━━━━━━━━━━
  Octopus · Alipay · PayMe
  Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
