use notify_rs::analytics::AnalyticsService;
use notify_rs::api::handlers::AppState;
use notify_rs::api::ApiServer;
use notify_rs::config::Config;
use notify_rs::dispatch::Dispatcher;
use notify_rs::schedule::ScheduleStore;
use notify_rs::transport::HttpEmailTransport;
use sqlx::SqlitePool;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .pretty()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("Starting notify-rs");

    // Load configuration
    let config = if std::path::Path::new("config.toml").exists() {
        Config::from_file("config.toml")?
    } else {
        info!("No config file found, using defaults");
        Config::default()
    };

    info!("Configuration loaded");
    info!("  Listening on: {}", config.server.listen_addr);
    info!("  Database: {}", config.database.url);
    info!("  Email API: {}", config.email.api_url);
    info!(
        "  Reminder window: one {}-minute tick",
        config.notifications.run_interval_minutes
    );

    // Connect to the platform database
    let pool = SqlitePool::connect(&config.database.url).await?;
    let store = ScheduleStore::new(pool.clone());
    store.init_db().await?;

    // Wire the dispatcher
    let transport = HttpEmailTransport::new(&config.email)?;
    let dispatcher = Dispatcher::new(store, transport, config.notifications.clone());
    let analytics = AnalyticsService::new(pool);

    let server = ApiServer::new(
        AppState {
            dispatcher,
            analytics,
        },
        config.server.listen_addr.clone(),
    );
    server.run().await?;

    Ok(())
}
