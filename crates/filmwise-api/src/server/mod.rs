//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use filmwise_common::{AppConfig, AppError, JwtService};
use filmwise_core::value_objects::ImageUrlResolver;
use filmwise_db::{
    create_pool, run_migrations, PgCommentRepository, PgFavoriteRepository, PgGenreRepository,
    PgImageRepository, PgMovieRepository, PgRatingRepository, PgUserRepository, QueryDeadline,
};
use filmwise_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, operational_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Operational routes get the plain middleware stack so probes are never rate limited.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();

    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    let operational = apply_middleware(operational_routes());

    operational.merge(api).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let db_config = filmwise_db::DatabaseConfig::from(&config.database);
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool, Path::new(&config.database.migrations_dir))
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));

    let deadline = QueryDeadline::new(config.database.query_timeout());
    let images = ImageUrlResolver::new(
        config.media.image_base_url.as_str(),
        config.media.image_placeholder.as_str(),
    );

    let movie_repo = Arc::new(PgMovieRepository::new(pool.clone(), images).with_deadline(deadline));
    let genre_repo = Arc::new(PgGenreRepository::new(pool.clone()).with_deadline(deadline));
    let rating_repo = Arc::new(PgRatingRepository::new(pool.clone()).with_deadline(deadline));
    let comment_repo = Arc::new(PgCommentRepository::new(pool.clone()).with_deadline(deadline));
    let favorite_repo = Arc::new(PgFavoriteRepository::new(pool.clone()).with_deadline(deadline));
    let image_repo = Arc::new(PgImageRepository::new(pool.clone()).with_deadline(deadline));
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()).with_deadline(deadline));

    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .movie_repo(movie_repo)
        .genre_repo(genre_repo)
        .rating_repo(rating_repo)
        .comment_repo(comment_repo)
        .favorite_repo(favorite_repo)
        .image_repo(image_repo)
        .user_repo(user_repo)
        .jwt_service(jwt_service)
        .build()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("service context: {e}")))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, &addr).await
}
