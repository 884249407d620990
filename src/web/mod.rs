// src/web/mod.rs

//! Browser UI.
//!
//! - `GET /` renders the search page
//! - `GET /api/courses` returns the same view as JSON
//! - `POST /refresh` drops the cached catalog and redirects to `/`

pub mod render;

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::net::TcpListener;

use crate::error::Result;
use crate::handler::{SearchPage, SearchQuery, handle_search};
use crate::models::SiteConfig;
use crate::pipeline::Aggregator;

/// Shared state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<Aggregator>,
    pub site: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(aggregator: Aggregator, site: SiteConfig) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
            site: Arc::new(site),
        }
    }

    async fn search(&self, query: &SearchQuery) -> SearchPage {
        let catalog = self.aggregator.catalog().await;
        handle_search(&catalog, query, &self.site)
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/courses", get(courses))
        .route("/refresh", post(refresh))
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(state: AppState, addr: &str) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    log::info!("Serving course search on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn index(State(state): State<AppState>, Query(query): Query<SearchQuery>) -> Html<String> {
    let view = state.search(&query).await;
    log::debug!(
        "GET / category={} query={:?}: {} courses",
        view.category,
        view.query,
        view.courses.len()
    );
    Html(render::page(&view))
}

async fn courses(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<SearchPage> {
    Json(state.search(&query).await)
}

async fn refresh(State(state): State<AppState>) -> Redirect {
    let catalog = state.aggregator.refresh().await;
    log::info!("Catalog refreshed: {} courses", catalog.len());
    Redirect::to("/")
}
