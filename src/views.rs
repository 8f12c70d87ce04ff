//! Minimal HTML rendering. No template engine; pages are assembled from
//! string builders with all user data escaped.

use axum::response::Html;

use crate::db::Entry;

/// The entry listing page. Shows the add-entry form only when logged in.
pub fn entries_page(entries: &[Entry], flashes: &[String], logged_in: bool) -> Html<String> {
    let mut body = String::new();

    if logged_in {
        body.push_str(
            "<form action=\"/add\" method=\"post\" class=\"add-entry\">\
             <input type=\"text\" name=\"title\" placeholder=\"Title\">\
             <textarea name=\"text\" rows=\"5\" cols=\"40\"></textarea>\
             <input type=\"submit\" value=\"Share\">\
             </form>",
        );
    }

    body.push_str("<ul class=\"entries\">");
    if entries.is_empty() {
        body.push_str("<li><em>Unbelievable. No entries here so far</em></li>");
    }
    for entry in entries {
        body.push_str("<li><h2>");
        body.push_str(&escape(&entry.title));
        body.push_str("</h2>");
        body.push_str(&escape(&entry.text));
        body.push_str("</li>");
    }
    body.push_str("</ul>");

    page("Entries", flashes, logged_in, &body)
}

/// The login form, optionally with a rejection message.
pub fn login_page(error: Option<&str>, flashes: &[String], logged_in: bool) -> Html<String> {
    let mut body = String::from("<h2>Login</h2>");
    if let Some(error) = error {
        body.push_str("<p class=\"error\"><strong>Error:</strong> ");
        body.push_str(&escape(error));
        body.push_str("</p>");
    }
    body.push_str(
        "<form action=\"/login\" method=\"post\">\
         <dl>\
         <dt>Username:<dd><input type=\"text\" name=\"username\">\
         <dt>Password:<dd><input type=\"password\" name=\"password\">\
         <dd><input type=\"submit\" value=\"Login\">\
         </dl>\
         </form>",
    );
    page("Login", flashes, logged_in, &body)
}

fn page(title: &str, flashes: &[String], logged_in: bool, body: &str) -> Html<String> {
    let nav = if logged_in {
        "<a href=\"/logout\">log out</a>"
    } else {
        "<a href=\"/login\">log in</a>"
    };

    let mut flash_block = String::new();
    for message in flashes {
        flash_block.push_str("<div class=\"flash\">");
        flash_block.push_str(&escape(message));
        flash_block.push_str("</div>");
    }

    Html(format!(
        "<!doctype html>\
         <html><head><title>Scrawl | {title}</title></head>\
         <body><div class=\"page\">\
         <h1>Scrawl</h1>\
         <div class=\"metanav\">{nav}</div>\
         {flash_block}\
         {body}\
         </div></body></html>"
    ))
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_data_is_escaped() {
        let entries = vec![Entry {
            title: "<script>alert(1)</script>".to_string(),
            text: "a & b".to_string(),
        }];
        let Html(page) = entries_page(&entries, &[], false);
        assert!(!page.contains("<script>alert"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(page.contains("a &amp; b"));
    }

    #[test]
    fn login_page_nav_follows_session_flag() {
        let Html(anon) = login_page(None, &[], false);
        assert!(anon.contains("log in"));
        let Html(authed) = login_page(None, &[], true);
        assert!(authed.contains("log out"));
    }

    #[test]
    fn listing_hides_add_form_when_logged_out() {
        let Html(anon) = entries_page(&[], &[], false);
        assert!(!anon.contains("action=\"/add\""));
        let Html(authed) = entries_page(&[], &[], true);
        assert!(authed.contains("action=\"/add\""));
    }
}
