mod model;
mod server;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, scheduler::otp_purge, startup, state::AppState,
};

const DEFAULT_LOG_FILTER: &str = "hotel_booking=info,tower_http=info";

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let mailer = startup::setup_mailer(&config);
    let cors = startup::setup_cors(&config)?;

    startup::check_for_admin(&db, &config).await?;

    // Held for the lifetime of the server.
    let _scheduler = otp_purge::start_scheduler(db.clone()).await?;

    let state = AppState::new(
        db,
        mailer,
        chrono::Duration::minutes(config.otp_ttl_minutes),
    );

    let app = router::router()
        .with_state(state)
        .layer(session)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
