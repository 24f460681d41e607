//! Request-interception middleware.
//!
//! Two stages run ahead of page rendering: the admin gate first, then the
//! locale resolver. They share no mutable state beyond the request itself.

pub mod admin_gate;
pub mod locale;

use axum::http::{HeaderMap, header};

pub use admin_gate::guard_admin;
pub use locale::resolve_locale;

/// Read a cookie value from the request's Cookie header.
///
/// Cookie parsing here is deliberately minimal: names are matched exactly
/// and values are returned verbatim (session tokens and locale tags never
/// need decoding).
pub(crate) fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;

    raw.split(';').map(str::trim).find_map(|pair| {
        pair.strip_prefix(name)
            .and_then(|rest| rest.strip_prefix('='))
    })
}
