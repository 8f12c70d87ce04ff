pub mod auth;
pub mod entries;
