use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
};
use tokio::sync::RwLock;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    repository::{ProductRepository, seed_products},
    routes,
    services::image_store::{ImageStore, PUBLIC_PREFIX},
};

/// Application context shared by every handler.
///
/// Reads take the repository's read guard; create, update and delete take
/// the write guard, so mutations are serialized.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<RwLock<ProductRepository>>,
    pub images: Arc<ImageStore>,
}

impl AppState {
    pub fn new(repository: ProductRepository, images: ImageStore) -> Self {
        Self {
            products: Arc::new(RwLock::new(repository)),
            images: Arc::new(images),
        }
    }
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let images = ImageStore::new(&config.uploads);
    images.ensure_dir().await?;
    tracing::info!("Serving uploads from {}", images.dir().display());

    let state = AppState::new(ProductRepository::new(seed_products()), images);

    build_router(state, config)
}

pub fn build_router(state: AppState, config: &AppConfig) -> Result<Router> {
    let cors = cors_layer(config)?;
    let uploads = ServeDir::new(state.images.dir());

    let app = routes::create_router()
        .nest_service(&format!("/{}", PUBLIC_PREFIX), uploads)
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

fn cors_layer(config: &AppConfig) -> Result<CorsLayer> {
    let origin = if config.cors.allowed_origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let allowed_origins: Vec<HeaderValue> = config
            .cors
            .allowed_origins
            .iter()
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|_| {
                    AppError::ConfigError(format!("Invalid CORS origin: {}", origin))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(allowed_origins)
    };

    Ok(CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(origin))
}
