// Request routing for the page host - no sockets in here.
// Maps a method + path to a fully-formed reply so the server loop only does I/O.

use std::borrow::Cow;

use http::{Method, StatusCode};
use rust_embed::RustEmbed;

use super::page;
use super::render;

#[derive(RustEmbed)]
#[folder = "src/assets/"]
struct Assets;

const STATIC_PREFIX: &str = "/static/";
const ALLOWED_METHODS: &str = "GET, HEAD";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: StatusCode,
    pub content_type: Cow<'static, str>,
    pub body: Vec<u8>,
    pub allow: Option<&'static str>,
}

impl Reply {
    fn new(status: StatusCode, content_type: impl Into<Cow<'static, str>>, body: Vec<u8>) -> Self {
        Self {
            status,
            content_type: content_type.into(),
            body,
            allow: None,
        }
    }

    fn text(status: StatusCode, body: &str) -> Self {
        Self::new(status, "text/plain; charset=utf-8", body.as_bytes().to_vec())
    }

    fn not_found() -> Self {
        Self::text(StatusCode::NOT_FOUND, "not found")
    }
}

/// Looks up an embedded asset by its path under `/static/`.
pub fn asset(name: &str) -> Option<Reply> {
    // Embedded files live in a flat folder.
    if name.is_empty() || name.contains("..") || name.contains('\\') {
        return None;
    }

    let file = Assets::get(name)?;
    let mime = mime_guess::from_path(name).first_or_octet_stream();
    Some(Reply::new(
        StatusCode::OK,
        mime.essence_str().to_string(),
        file.data.into_owned(),
    ))
}

/// Routes a request. The query string, if any, is ignored.
pub fn route(method: &Method, target: &str) -> Reply {
    if method != Method::GET && method != Method::HEAD {
        let mut reply = Reply::text(StatusCode::METHOD_NOT_ALLOWED, "method not allowed");
        reply.allow = Some(ALLOWED_METHODS);
        return reply;
    }

    let path = target.split(['?', '#']).next().unwrap_or("/");

    match path {
        "/" | "" => {
            // Every request re-runs the page script from scratch.
            let html = render::to_html(&page::dashboard());
            Reply::new(StatusCode::OK, "text/html; charset=utf-8", html.into_bytes())
        }
        "/healthz" => Reply::text(StatusCode::OK, "ok"),
        _ => match path.strip_prefix(STATIC_PREFIX) {
            Some(name) => asset(name).unwrap_or_else(Reply::not_found),
            None => Reply::not_found(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Method::GET, "/", StatusCode::OK)]
    #[case(Method::GET, "/?embed=true", StatusCode::OK)]
    #[case(Method::HEAD, "/", StatusCode::OK)]
    #[case(Method::GET, "/healthz", StatusCode::OK)]
    #[case(Method::GET, "/static/style.css", StatusCode::OK)]
    #[case(Method::GET, "/static/missing.css", StatusCode::NOT_FOUND)]
    #[case(Method::GET, "/static/", StatusCode::NOT_FOUND)]
    #[case(Method::GET, "/static/../Cargo.toml", StatusCode::NOT_FOUND)]
    #[case(Method::GET, "/bom", StatusCode::NOT_FOUND)]
    #[case(Method::POST, "/", StatusCode::METHOD_NOT_ALLOWED)]
    #[case(Method::DELETE, "/healthz", StatusCode::METHOD_NOT_ALLOWED)]
    fn test_route_status(#[case] method: Method, #[case] target: &str, #[case] expected: StatusCode) {
        assert_eq!(route(&method, target).status, expected);
    }

    #[test]
    fn test_index_serves_dashboard() {
        let reply = route(&Method::GET, "/");
        assert_eq!(reply.content_type, "text/html; charset=utf-8");
        let body = String::from_utf8(reply.body).unwrap();
        assert!(body.contains("<title>BOM Dashboard</title>"));
        assert!(body.contains("<h1>Bill of Materials Dashboard</h1>"));
    }

    #[test]
    fn test_index_is_identical_across_requests() {
        assert_eq!(route(&Method::GET, "/"), route(&Method::GET, "/"));
    }

    #[test]
    fn test_stylesheet_content_type() {
        let reply = route(&Method::GET, "/static/style.css");
        assert_eq!(reply.content_type, "text/css");
        assert!(String::from_utf8(reply.body).unwrap().contains(".layout-wide"));
    }

    #[test]
    fn test_method_not_allowed_sets_allow() {
        let reply = route(&Method::POST, "/");
        assert_eq!(reply.allow, Some("GET, HEAD"));
    }

    #[test]
    fn test_health_body() {
        let reply = route(&Method::GET, "/healthz");
        assert_eq!(reply.body, b"ok");
        assert_eq!(reply.allow, None);
    }
}
