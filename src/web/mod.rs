//! Form-based web front end
//!
//! Browsers can only submit GET and POST from a plain form, so updates and
//! deletes share `POST /update/:id` and are told apart by the hidden
//! `_method` field. Successful submissions redirect to the listing; failures
//! are shown as a banner on the listing page.

pub mod templates;

use axum::{
    extract::{
        rejection::{FormRejection, PathRejection},
        Path, State,
    },
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::book::BookInput,
    AppState,
};

/// Raw form submission. Every field is optional so that a missing or
/// malformed value turns into a page error instead of a rejected request.
#[derive(Debug, Default, Deserialize)]
pub struct BookForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub publication_year: String,
    /// Checkbox: present with `on` when ticked, absent otherwise
    pub available: Option<String>,
    #[serde(rename = "_method")]
    pub method: Option<String>,
}

impl BookForm {
    /// True when the hidden method field asks for a deletion
    pub fn is_delete(&self) -> bool {
        self.method.as_deref() == Some("DELETE")
    }

    /// Convert into the typed input schema
    pub fn to_input(&self) -> AppResult<BookInput> {
        let publication_year = self
            .publication_year
            .trim()
            .parse::<i64>()
            .map_err(|_| {
                AppError::Validation(format!(
                    "publication_year: '{}' is not an integer",
                    self.publication_year
                ))
            })?;

        Ok(BookInput {
            title: self.title.clone(),
            author: self.author.clone(),
            publication_year,
            available: self.available.as_deref() == Some("on"),
        })
    }
}

/// GET /
pub async fn index(State(state): State<AppState>) -> Response {
    match state.books.list_all().await {
        Ok(books) => Html(templates::index(&books, None)).into_response(),
        Err(err) => render_error(&state, err).await,
    }
}

/// POST /add
pub async fn add(
    State(state): State<AppState>,
    form: Result<Form<BookForm>, FormRejection>,
) -> Response {
    let result = match form.map_err(AppError::from).and_then(|Form(form)| form.to_input()) {
        Ok(input) => state.books.insert(&input).await.map(|_| ()),
        Err(err) => Err(err),
    };
    finish(&state, result).await
}

/// POST /update/:id
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    form: Result<Form<BookForm>, FormRejection>,
) -> Response {
    let (id, form) = match (id, form) {
        (Ok(Path(id)), Ok(Form(form))) => (id, form),
        (Err(rejection), _) => return render_error(&state, rejection.into()).await,
        (_, Err(rejection)) => return render_error(&state, rejection.into()).await,
    };

    let result = if form.is_delete() {
        state.books.delete(id).await
    } else {
        match form.to_input() {
            Ok(input) => state.books.update(id, &input).await,
            Err(err) => Err(err),
        }
    };
    finish(&state, result).await
}

async fn finish(state: &AppState, result: AppResult<()>) -> Response {
    match result {
        Ok(()) => Redirect::to("/").into_response(),
        Err(err) => render_error(state, err).await,
    }
}

/// Re-render the listing with the error shown above it
async fn render_error(state: &AppState, err: AppError) -> Response {
    let message = match &err {
        AppError::Database(e) => {
            tracing::error!("Database error: {:?}", e);
            err.public_message()
        }
        _ => {
            tracing::warn!("Form submission rejected: {}", err);
            err.to_string()
        }
    };

    let books = state.books.list_all().await.unwrap_or_default();
    Html(templates::index(&books, Some(&message))).into_response()
}
