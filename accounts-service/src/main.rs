use accounts::{
    AccountsService, Argon2CredentialManager, JwtTokenIssuer, PostgresUserStore,
    adapters::config::Settings, get_postgres_pool,
};
use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = Settings::load()?;

    let pg_pool = get_postgres_pool(&settings.database).await?;
    sqlx::migrate!().run(&pg_pool).await?;

    let accounts_service = AccountsService::new(
        PostgresUserStore::new(pg_pool),
        Argon2CredentialManager::new(settings.hashing),
        JwtTokenIssuer::new(settings.jwt_auth_config()),
    );

    let listener = tokio::net::TcpListener::bind(settings.address()).await?;
    tracing::info!("Starting accounts service...");

    accounts_service
        .run_standalone(listener, settings.allowed_origins())
        .await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
