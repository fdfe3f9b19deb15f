use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use consult_app::{Outcome, Submission};
use consult_domain::CompletionClient;
use tracing::{error, info};

use super::{AppState, PageView};

pub async fn index<C: CompletionClient + 'static>(State(state): State<AppState<C>>) -> Response {
    render(&state, StatusCode::OK, PageView::new(state.service.model()))
}

pub async fn submit<C: CompletionClient + 'static>(
    State(state): State<AppState<C>>,
    Form(submission): Form<Submission>,
) -> Response {
    info!(role = %submission.role, "Form submitted");

    let view = PageView::new(state.service.model())
        .selected(submission.role)
        .text(submission.text.clone());

    match state.service.submit(submission).await {
        Ok(Outcome::EmptyInput) => {
            render(&state, StatusCode::OK, view.warning(consult_app::EMPTY_INPUT_WARNING))
        }
        Ok(Outcome::Answered(reply)) => {
            render(&state, StatusCode::OK, view.answer(reply.into_string()))
        }
        Err(e) => {
            error!(error = ?e, "Consultation failed");
            render(&state, StatusCode::INTERNAL_SERVER_ERROR, view.error(format!("{e:#}")))
        }
    }
}

pub async fn health() -> &'static str {
    "ok"
}

fn render<C>(state: &AppState<C>, status: StatusCode, view: PageView) -> Response {
    match state.page.render(&view) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!(error = ?e, "Failed to render page");
            (StatusCode::INTERNAL_SERVER_ERROR, format!("{e:#}")).into_response()
        }
    }
}
