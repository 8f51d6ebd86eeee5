use anyhow::Result;
use fitness_tracker::api::create_routes;
use fitness_tracker::config::{AppConfig, DatabaseConfig, DatabaseSeeder};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let database = DatabaseConfig::from_env()?;
    let repositories = database.create_repositories().await?;

    if config.seed_demo_data {
        DatabaseSeeder::new(repositories.clone()).seed_all().await?;
    }

    if config.scope_goal_listing {
        info!("Goal listing is scoped to the requesting user");
    }

    let app = create_routes(repositories, &config);

    let address = config.server_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Fitness tracker starting on http://{}", address);
    info!("Health check available at http://{}/health", address);

    axum::serve(listener, app).await?;

    Ok(())
}
