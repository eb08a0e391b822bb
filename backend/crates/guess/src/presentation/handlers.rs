//! HTTP Handlers

use crate::application::config::GameConfig;
use crate::application::reset_game::ResetGameUseCase;
use crate::application::session::GameView;
use crate::application::submit_guess::{Feedback, SubmitGuessUseCase};
use crate::application::view_game::ViewGameUseCase;
use crate::domain::repository::GameSessionRepository;
use crate::domain::services::SecretSource;
use crate::error::GuessResult;
use crate::presentation::dto::GuessForm;
use crate::presentation::page::{STYLESHEET, render_page};
use axum::Form;
use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use platform::cookie::{extract_cookie, set_cookie_header};
use std::sync::Arc;

/// Shared state for game handlers
#[derive(Clone)]
pub struct GameAppState<R>
where
    R: GameSessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<GameConfig>,
    pub secrets: Arc<dyn SecretSource>,
}

/// GET /
pub async fn view_game<R>(
    State(state): State<GameAppState<R>>,
    headers: HeaderMap,
) -> GuessResult<Response>
where
    R: GameSessionRepository + Clone + Send + Sync + 'static,
{
    let token = extract_session_cookie(&headers, &state.config);

    let use_case =
        ViewGameUseCase::new(state.repo.clone(), state.config.clone(), state.secrets.clone());
    let view = use_case.execute(token.as_deref()).await?;

    Ok(page_response(&state.config, &view, None))
}

/// POST /guess
///
/// A body axum cannot decode (wrong content type, malformed encoding) is
/// evaluated as an empty guess so the player still gets the page back.
pub async fn submit_guess<R>(
    State(state): State<GameAppState<R>>,
    headers: HeaderMap,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> GuessResult<Response>
where
    R: GameSessionRepository + Clone + Send + Sync + 'static,
{
    let token = extract_session_cookie(&headers, &state.config);

    let form = match form {
        Ok(Form(pairs)) => GuessForm::from_pairs(pairs),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable guess form");
            GuessForm::default()
        }
    };

    let use_case =
        SubmitGuessUseCase::new(state.repo.clone(), state.config.clone(), state.secrets.clone());
    let output = use_case.execute(token.as_deref(), &form.guess).await?;

    Ok(page_response(
        &state.config,
        &output.view,
        Some(&output.feedback),
    ))
}

/// GET|POST /reset
pub async fn reset_game<R>(
    State(state): State<GameAppState<R>>,
    headers: HeaderMap,
) -> GuessResult<Response>
where
    R: GameSessionRepository + Clone + Send + Sync + 'static,
{
    let token = extract_session_cookie(&headers, &state.config);

    let use_case =
        ResetGameUseCase::new(state.repo.clone(), state.config.clone(), state.secrets.clone());
    let view = use_case.execute(token.as_deref()).await?;

    let cookie = set_cookie_header(&state.config.cookie_config(), &view.session_token);

    Ok(([(header::SET_COOKIE, cookie)], Redirect::to("/")).into_response())
}

/// GET /style.css
pub async fn stylesheet() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLESHEET,
    )
}

fn page_response(config: &GameConfig, view: &GameView, feedback: Option<&Feedback>) -> Response {
    let cookie = set_cookie_header(&config.cookie_config(), &view.session_token);

    (
        [
            (header::SET_COOKIE, cookie),
            (header::CACHE_CONTROL, HeaderValue::from_static("no-store")),
        ],
        Html(render_page(view, feedback)),
    )
        .into_response()
}

fn extract_session_cookie(headers: &HeaderMap, config: &GameConfig) -> Option<String> {
    extract_cookie(headers, &config.session_cookie_name)
}
