use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One stored blog post, as selected for the listing page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Entry {
    pub title: String,
    pub text: String,
}

/// Form payload for POST /add.
#[derive(Debug, Clone, Deserialize)]
pub struct NewEntry {
    pub title: String,
    pub text: String,
}
