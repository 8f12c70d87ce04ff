use axum::extract::{Form, State};
use axum::response::{IntoResponse, Redirect};
use tracing::info;

use crate::db::NewEntry;
use crate::error::ScrawlError;
use crate::router::ScrawlState;
use crate::session::Session;
use crate::views;

/// GET / -> all entries, newest first.
pub async fn show_entries(
    State(state): State<ScrawlState>,
    session: Session,
) -> Result<impl IntoResponse, ScrawlError> {
    let entries = state.storage.list_entries().await?;
    let logged_in = session.logged_in();
    let (flashes, session) = session.take_flashes();
    Ok((
        session.into_jar(),
        views::entries_page(&entries, &flashes, logged_in),
    ))
}

/// POST /add -> store one entry and bounce back to the listing.
/// Rejected with 401 when the session flag is not set; nothing is inserted.
pub async fn add_entry(
    State(state): State<ScrawlState>,
    session: Session,
    Form(form): Form<NewEntry>,
) -> Result<impl IntoResponse, ScrawlError> {
    if !session.logged_in() {
        return Err(ScrawlError::Unauthorized);
    }
    state.storage.insert_entry(&form.title, &form.text).await?;
    info!(title = %form.title, "stored new entry");
    let session = session.flash("New entry was successfully posted");
    Ok((session.into_jar(), Redirect::to("/")))
}
