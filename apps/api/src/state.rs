use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use sqlx::PgPool;

use crate::config::Config;
use crate::llm_client::TextCompleter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub s3: S3Client,
    /// The completion capability behind its minimal trait, so generators are
    /// insulated from the concrete provider.
    pub llm: Arc<dyn TextCompleter>,
    pub config: Config,
}
