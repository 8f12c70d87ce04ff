#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, header};
use axum::response::Response;
use tower::ServiceExt;

use scrawl::db::EntryStorage;
use scrawl::{Config, ScrawlState, scrawl_router};

pub const TEST_USERNAME: &str = "admin";
pub const TEST_PASSWORD: &str = "default";

pub struct TestApp {
    pub app: Router,
    pub storage: EntryStorage,
    db_path: PathBuf,
}

/// Fresh app over a uniquely-named temp sqlite file, schema initialized.
pub async fn spawn_app() -> TestApp {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut db_path = std::env::temp_dir();
    db_path.push(format!("scrawl-test-{}-{}.sqlite", std::process::id(), nanos));

    let database_url = format!("sqlite:{}", db_path.display());
    let storage = EntryStorage::connect(&database_url)
        .await
        .expect("failed to open test database");
    storage
        .init_schema()
        .await
        .expect("failed to initialize schema");

    let cfg = Config {
        database_url,
        username: TEST_USERNAME.to_string(),
        password: TEST_PASSWORD.to_string(),
        insecure_cookie: true,
        ..Config::default()
    };

    let state = ScrawlState::new(storage.clone(), cfg);
    TestApp {
        app: scrawl_router(state),
        storage,
        db_path,
    }
}

impl TestApp {
    pub async fn get(&self, uri: &str, cookies: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(cookies) = cookies {
            builder = builder.header(header::COOKIE, cookies);
        }
        self.app
            .clone()
            .oneshot(builder.body(Body::empty()).expect("failed to build request"))
            .await
            .expect("request failed")
    }

    pub async fn post_form(&self, uri: &str, form: &str, cookies: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookies) = cookies {
            builder = builder.header(header::COOKIE, cookies);
        }
        self.app
            .clone()
            .oneshot(
                builder
                    .body(Body::from(form.to_string()))
                    .expect("failed to build request"),
            )
            .await
            .expect("request failed")
    }

    /// Log in with the test credentials and return a Cookie header value
    /// carrying the resulting session cookies.
    pub async fn login(&self) -> String {
        let form = format!("username={TEST_USERNAME}&password={TEST_PASSWORD}");
        let resp = self.post_form("/login", &form, None).await;
        cookie_header(&resp)
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.db_path);
    }
}

/// Collect the Set-Cookie pairs of a response into a Cookie header value.
pub fn cookie_header(resp: &Response<Body>) -> String {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split(';').next())
        .collect::<Vec<_>>()
        .join("; ")
}

pub fn set_cookie_names(resp: &Response<Body>) -> Vec<String> {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|v| v.split('=').next())
        .map(|name| name.to_string())
        .collect()
}

pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("response body was not utf-8")
}
