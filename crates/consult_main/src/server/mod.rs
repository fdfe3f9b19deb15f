//! HTTP rendition of the consultation form.

mod handlers;
mod page;

use std::sync::Arc;

use anyhow::{Context as _, Result};
use axum::Router;
use axum::routing::get;
use consult_app::ConsultService;
use consult_domain::CompletionClient;
use tokio::net::TcpListener;
use tracing::info;

pub use page::{Page, PageView};

/// Shared state handed to every request.
pub struct AppState<C> {
    pub service: ConsultService<C>,
    pub page: Arc<Page>,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self { service: self.service.clone(), page: self.page.clone() }
    }
}

impl<C: CompletionClient> AppState<C> {
    pub fn new(service: ConsultService<C>) -> Result<Self> {
        Ok(Self { service, page: Arc::new(Page::new()?) })
    }
}

pub fn router<C: CompletionClient + 'static>(state: AppState<C>) -> Router {
    Router::new()
        .route("/", get(handlers::index::<C>).post(handlers::submit::<C>))
        .route("/health", get(handlers::health))
        .with_state(state)
}

/// Serves the form on `bind` until Ctrl-C.
pub async fn serve<C: CompletionClient + 'static>(
    bind: &str,
    service: ConsultService<C>,
) -> Result<()> {
    let app = router(AppState::new(service)?);
    let listener = TcpListener::bind(bind)
        .await
        .with_context(|| format!("Failed to bind {bind}"))?;

    info!(address = %listener.local_addr()?, "Consultation form listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
