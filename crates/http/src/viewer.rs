//! Web UI: embedded login page and dashboard shell.
//!
//! Any path without a dedicated route lands here. A request with a complete
//! session cookie pair gets the dashboard, everything else gets the login form.
//! The dashboard fetches its data from `/api/namespaces` and `/api/objects`.

use axum::{
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
};

use crate::session;

/// Embedded HTML for the login form
pub const LOGIN_HTML: &str = include_str!("login.html");

/// Embedded HTML for the dashboard shell
pub const DASHBOARD_HTML: &str = include_str!("dashboard.html");

pub async fn serve_ui(headers: HeaderMap) -> Response {
    let page = if session::authorize(&headers).is_ok() { DASHBOARD_HTML } else { LOGIN_HTML };
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/html; charset=utf-8")], Html(page))
        .into_response()
}
