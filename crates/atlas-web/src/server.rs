/// HTTP surface of the site.
///
/// Every dynamic route re-reads the dataset file before doing anything
/// else, so edits to it are visible on the next request. Slug misses
/// redirect to the listing page; everything else that fails is a 500.
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::Router;
use minijinja::{context, Environment};
use serde::Deserialize;
use tracing::info;

use atlas_core::error::CoreError;
use atlas_core::model::Destination;
use atlas_core::{data, query, quiz, select};

use crate::config::Config;
use crate::error::AppError;

/// State shared across all handlers. Nothing here is mutable; the
/// dataset itself is reloaded per request rather than held in memory.
pub struct AppState {
    pub config: Config,
    pub templates: Environment<'static>,
}

impl AppState {
    fn render(&self, name: &str, ctx: minijinja::Value) -> Result<Html<String>, AppError> {
        let tmpl = self.templates.get_template(name)?;
        Ok(Html(tmpl.render(ctx)?))
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/destination/{slug}", get(destination))
        .route("/random", get(random_destination))
        // backward-compatible URLs from older templates
        .route("/random_dest", get(random_alias))
        .route("/surprise_me", get(random_alias))
        .route("/surprise", get(random_alias))
        .route("/quiz", get(quiz_page))
        .route("/about", get(about))
        .route("/festivals", get(festivals))
        .with_state(state)
}

async fn load(state: &AppState) -> Result<Vec<Destination>, AppError> {
    let path = &state.config.data_path;
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CoreError::Read {
            path: path.display().to_string(),
            source,
        })?;
    Ok(data::parse_dataset(&content)?)
}

#[derive(Debug, Deserialize)]
struct ListingParams {
    #[serde(default)]
    q: String,
    #[serde(default)]
    category: String,
}

async fn index(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListingParams>,
) -> Result<Html<String>, AppError> {
    let records = load(&state).await?;
    let q = params.q.trim();
    let listing = query::query(records, q, &params.category);
    info!(
        q,
        category = %params.category,
        results = listing.results.len(),
        "listing served"
    );
    state.render(
        "index.html",
        context! {
            results => listing.results,
            categories => listing.categories,
            q => q,
            category => params.category,
        },
    )
}

async fn destination(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let records = load(&state).await?;
    match query::find_by_slug(&records, &slug) {
        Some(dest) => Ok(state
            .render("destination.html", context! { d => dest })?
            .into_response()),
        None => {
            info!(slug, "unknown destination, redirecting to listing");
            Ok(Redirect::to("/").into_response())
        }
    }
}

async fn random_destination(State(state): State<Arc<AppState>>) -> Result<Redirect, AppError> {
    let records = load(&state).await?;
    let dest = select::pick_one(&mut rand::rng(), &records).ok_or(CoreError::Empty)?;
    Ok(Redirect::to(&format!("/destination/{}", dest.slug)))
}

async fn random_alias() -> Redirect {
    Redirect::to("/random")
}

async fn quiz_page(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let records = load(&state).await?;
    let question = quiz::generate_quiz(&mut rand::rng(), &records)?;
    state.render("quiz.html", context! { q => question })
}

async fn about(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    state.render("about.html", context! {})
}

async fn festivals(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    state.render("festivals.html", context! {})
}
