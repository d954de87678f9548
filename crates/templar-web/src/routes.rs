//! Axum routes for the HTML interface.
//!
//! `GET /`, `GET|POST /new`, `GET|POST /:id/edit`, `POST /:id/delete`.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};

use templar_registry::TemplateRepository;

use crate::error::WebError;
use crate::forms::{EditPage, IndexQuery, TemplateForm};
use crate::views::Views;

/// Shared state for the web handlers.
#[derive(Clone)]
pub struct WebState {
    pub repository: Arc<dyn TemplateRepository>,
    pub views: Arc<Views>,
}

impl WebState {
    /// Builds the state, compiling the page templates.
    ///
    /// # Errors
    ///
    /// Returns `WebError::Render` if a page template is malformed.
    pub fn new(repository: Arc<dyn TemplateRepository>) -> Result<Self, WebError> {
        Ok(Self {
            repository,
            views: Arc::new(Views::new()?),
        })
    }
}

/// Builds the web `Router`, ready to be merged into a larger app.
pub fn router(state: WebState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/new", get(new_form).post(create))
        .route("/:id/edit", get(edit_form).post(update))
        .route("/:id/delete", post(delete))
        .with_state(state)
}

fn to_home() -> Response {
    Redirect::to("/").into_response()
}

fn rejected(html: String) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response()
}

async fn index(
    State(state): State<WebState>,
    Query(params): Query<IndexQuery>,
) -> Result<Html<String>, WebError> {
    let items = if params.q.is_empty() {
        state.repository.list().await?
    } else {
        state.repository.search(&params.q).await?
    };
    Ok(Html(state.views.index(&items, &params.q)?))
}

async fn new_form(State(state): State<WebState>) -> Result<Html<String>, WebError> {
    Ok(Html(state.views.edit(&EditPage::blank())?))
}

async fn create(
    State(state): State<WebState>,
    Form(form): Form<TemplateForm>,
) -> Result<Response, WebError> {
    let draft = form.to_draft();
    if let Err(e) = draft.validate() {
        let page = EditPage::from_form(&form).with_error(e.message);
        return Ok(rejected(state.views.edit(&page)?));
    }
    let created = state.repository.create(&draft).await?;
    tracing::info!(id = %created.id, "template created");
    Ok(to_home())
}

async fn edit_form(
    State(state): State<WebState>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    match state.repository.get(&id).await? {
        Some(template) => {
            let page = EditPage::from_template(&template);
            Ok(Html(state.views.edit(&page)?).into_response())
        }
        None => Ok(to_home()),
    }
}

async fn update(
    State(state): State<WebState>,
    Path(id): Path<String>,
    Form(form): Form<TemplateForm>,
) -> Result<Response, WebError> {
    let draft = form.to_draft();
    if let Err(e) = draft.validate() {
        // Shows the stored record, not the rejected submission.
        let Some(stored) = state.repository.get(&id).await? else {
            return Ok(to_home());
        };
        let page = EditPage::from_template(&stored).with_error(e.message);
        return Ok(rejected(state.views.edit(&page)?));
    }
    match state.repository.update(&id, &draft).await? {
        Some(_) => tracing::info!(%id, "template updated"),
        None => tracing::debug!(%id, "update of unknown template ignored"),
    }
    Ok(to_home())
}

async fn delete(
    State(state): State<WebState>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let removed = state.repository.delete(&id).await?;
    tracing::info!(%id, removed, "template delete requested");
    Ok(to_home())
}
