use anyhow::Result;
use quill::application::{
    ports::{
        time::Clock,
        util::{SlugGenerator, TokenGenerator},
    },
    services::{ApplicationServices, Repositories},
};
use quill::config::AppConfig;
use quill::infrastructure::{
    database,
    repositories::{
        SqliteCategoryRepository, SqliteCommentRepository, SqliteDashboardRepository,
        SqlitePostReadRepository, SqlitePostWriteRepository, SqliteSubscriberRepository,
        SqliteTagRepository,
    },
    time::SystemClock,
    util::{DefaultSlugGenerator, UuidTokenGenerator},
};
use quill::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    // `.env` has to be loaded before the filter reads RUST_LOG
    let config = AppConfig::from_env()?;
    init_tracing();

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;
    let pool = Arc::new(pool);

    let post_read = Arc::new(SqlitePostReadRepository::new(Arc::clone(&pool)));
    let categories = Arc::new(SqliteCategoryRepository::new(Arc::clone(&pool)));
    let tags = Arc::new(SqliteTagRepository::new(Arc::clone(&pool)));

    let repos = Repositories {
        post_write: Arc::new(SqlitePostWriteRepository::new(Arc::clone(&pool))),
        post_read: post_read.clone(),
        post_slugs: post_read,
        categories: categories.clone(),
        category_slugs: categories,
        tags: tags.clone(),
        tag_slugs: tags,
        comments: Arc::new(SqliteCommentRepository::new(Arc::clone(&pool))),
        subscribers: Arc::new(SqliteSubscriberRepository::new(Arc::clone(&pool))),
        dashboard: Arc::new(SqliteDashboardRepository::new(Arc::clone(&pool))),
    };

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let tokens: Arc<dyn TokenGenerator> = Arc::new(UuidTokenGenerator);

    let services = Arc::new(ApplicationServices::new(
        repos,
        clock,
        slugger,
        tokens,
        config.slug_settings(),
    ));

    let state = HttpState {
        services,
        allowed_origins: config.allowed_origins().to_vec(),
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
