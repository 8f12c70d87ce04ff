use axum::extract::{Form, State};
use axum::response::{IntoResponse, Redirect, Response};
use serde::Deserialize;
use subtle::ConstantTimeEq;
use tracing::info;

use crate::router::ScrawlState;
use crate::session::Session;
use crate::views;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// GET /login -> the login form.
pub async fn login_form(session: Session) -> impl IntoResponse {
    let logged_in = session.logged_in();
    let (flashes, session) = session.take_flashes();
    (session.into_jar(), views::login_page(None, &flashes, logged_in))
}

/// POST /login -> compare against the configured credential pair and set the
/// session flag on success. Mismatches re-render the form with an error and
/// leave the flag unset.
pub async fn login(
    State(state): State<ScrawlState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    let cfg = &state.config;
    if !bool::from(form.username.as_bytes().ct_eq(cfg.username.as_bytes())) {
        return render_rejection(session, "Invalid username");
    }
    if !bool::from(form.password.as_bytes().ct_eq(cfg.password.as_bytes())) {
        return render_rejection(session, "Invalid password");
    }
    info!("login accepted");
    let session = session.log_in().flash("You were logged in");
    (session.into_jar(), Redirect::to("/")).into_response()
}

/// GET /logout -> drop the session flag. Safe to call when not logged in.
pub async fn logout(session: Session) -> impl IntoResponse {
    let session = session.log_out().flash("You were logged out");
    (session.into_jar(), Redirect::to("/"))
}

fn render_rejection(session: Session, error: &str) -> Response {
    let logged_in = session.logged_in();
    let (flashes, session) = session.take_flashes();
    (
        session.into_jar(),
        views::login_page(Some(error), &flashes, logged_in),
    )
        .into_response()
}
