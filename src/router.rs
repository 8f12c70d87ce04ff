use std::sync::Arc;

use axum::{
    Router,
    extract::FromRef,
    routing::{get, post},
};
use axum_extra::extract::cookie::Key;

use crate::config::Config;
use crate::db::EntryStorage;
use crate::handlers::{auth, entries};

#[derive(Clone)]
pub struct ScrawlState {
    pub storage: EntryStorage,
    pub config: Arc<Config>,
    key: Key,
}

impl ScrawlState {
    /// `config` must have passed [`Config::validate`]; [`Key::from`]
    /// requires the 64-byte minimum on `secret_key`.
    pub fn new(storage: EntryStorage, config: Config) -> Self {
        let key = Key::from(config.secret_key.as_bytes());
        Self {
            storage,
            config: Arc::new(config),
            key,
        }
    }
}

impl FromRef<ScrawlState> for Key {
    fn from_ref(state: &ScrawlState) -> Key {
        state.key.clone()
    }
}

pub fn scrawl_router(state: ScrawlState) -> Router {
    Router::new()
        .route("/", get(entries::show_entries))
        .route("/add", post(entries::add_entry))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/logout", get(auth::logout))
        .with_state(state)
}
