use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, PrivateCookieJar, SameSite};
use time::Duration;

use crate::router::ScrawlState;

const LOGGED_IN_COOKIE: &str = "logged_in";
const FLASH_COOKIE: &str = "flash";

/// Explicit session state for one request, backed by a signed+encrypted
/// cookie jar. Mutating operations consume and return `self`; handlers hand
/// the final jar back in the response so the client sees the changes.
pub struct Session {
    jar: PrivateCookieJar,
    secure: bool,
}

impl Session {
    pub fn logged_in(&self) -> bool {
        self.jar
            .get(LOGGED_IN_COOKIE)
            .map(|c| c.value() == "1")
            .unwrap_or(false)
    }

    pub fn log_in(self) -> Self {
        let cookie = self.build_cookie(LOGGED_IN_COOKIE, "1".to_string(), None);
        Self {
            jar: self.jar.add(cookie),
            secure: self.secure,
        }
    }

    /// Clears the flag; harmless when it was never set.
    pub fn log_out(self) -> Self {
        Self {
            jar: self.jar.remove(clear_cookie(LOGGED_IN_COOKIE)),
            secure: self.secure,
        }
    }

    /// Queue a one-shot notice for the next rendered page.
    pub fn flash(self, message: &str) -> Self {
        let mut queued = self.queued_flashes();
        queued.push(message.to_string());
        let value = serde_json::to_string(&queued).unwrap_or_default();
        let cookie = self.build_cookie(FLASH_COOKIE, value, Some(Duration::minutes(15)));
        Self {
            jar: self.jar.add(cookie),
            secure: self.secure,
        }
    }

    /// Drain the queued flash messages for rendering.
    pub fn take_flashes(self) -> (Vec<String>, Self) {
        let queued = self.queued_flashes();
        let session = Self {
            jar: self.jar.remove(clear_cookie(FLASH_COOKIE)),
            secure: self.secure,
        };
        (queued, session)
    }

    pub fn into_jar(self) -> PrivateCookieJar {
        self.jar
    }

    fn queued_flashes(&self) -> Vec<String> {
        self.jar
            .get(FLASH_COOKIE)
            .and_then(|c| serde_json::from_str(c.value()).ok())
            .unwrap_or_default()
    }

    fn build_cookie(&self, name: &str, value: String, max_age: Option<Duration>) -> Cookie<'static> {
        let builder = Cookie::build(Cookie::new(name.to_string(), value))
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax);
        match max_age {
            Some(age) => builder.max_age(age).build(),
            None => builder.build(),
        }
    }
}

fn clear_cookie(name: &str) -> Cookie<'static> {
    Cookie::build(Cookie::new(name.to_string(), ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

impl FromRequestParts<ScrawlState> for Session {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ScrawlState,
    ) -> Result<Self, Self::Rejection> {
        let jar = PrivateCookieJar::from_request_parts(parts, state).await?;
        Ok(Self {
            jar,
            secure: !state.config.insecure_cookie,
        })
    }
}
