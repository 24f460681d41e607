//! Locale resolution middleware.
//!
//! Guarantees every page request carries a supported locale prefix.
//! Requests without one are redirected to the same path under the preferred
//! locale, resolved from the `NEXT_LOCALE` cookie, then the Accept-Language
//! header, then the site default. Already-prefixed paths pass through
//! unchanged, so the resolver is idempotent.

use axum::{
    body::Body,
    http::{Request, header},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::i18n::{self, DEFAULT_LOCALE, LOCALES, Locale};
use crate::middleware::cookie_value;

/// Cookie holding the visitor's locale preference (a bare locale tag).
pub const LOCALE_COOKIE: &str = "NEXT_LOCALE";

/// Middleware to resolve the locale for each page request.
pub async fn resolve_locale(request: Request<Body>, next: Next) -> Response {
    let path = request.uri().path();

    // API, health, and asset-like paths are served without a locale prefix.
    if is_system_path(path) {
        return next.run(request).await;
    }

    // Already prefixed: pass through unchanged.
    if i18n::split_locale(path).is_some() {
        return next.run(request).await;
    }

    let cookie = cookie_value(request.headers(), LOCALE_COOKIE);
    let accept_language = request
        .headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());

    let locale = preferred_locale(cookie, accept_language);

    let target = redirect_target(locale, path, request.uri().query());
    tracing::debug!(path = %path, locale = %locale, target = %target, "redirecting to localized path");

    Redirect::temporary(&target).into_response()
}

/// Paths that are never localized: the JSON API, the health check, static
/// assets, and anything that looks like a file (`favicon.ico`, `robots.txt`).
fn is_system_path(path: &str) -> bool {
    path.starts_with("/api")
        || path.starts_with("/static")
        || path == "/health"
        || path.rsplit('/').next().is_some_and(|seg| seg.contains('.'))
}

/// Resolve the preferred locale: cookie, then Accept-Language, then default.
///
/// The Accept-Language check is a substring scan for each supported tag in
/// declared order; a malformed header simply never matches and falls
/// through to the default.
fn preferred_locale(cookie: Option<&str>, accept_language: Option<&str>) -> Locale {
    if let Some(locale) = cookie.and_then(Locale::from_tag) {
        return locale;
    }

    if let Some(header) = accept_language {
        for locale in LOCALES {
            if header.contains(locale.as_str()) {
                return locale;
            }
        }
    }

    DEFAULT_LOCALE
}

/// The localized redirect target, preserving the query string.
fn redirect_target(locale: Locale, path: &str, query: Option<&str>) -> String {
    let prefixed = if path == "/" {
        format!("/{locale}")
    } else {
        format!("/{locale}{path}")
    };

    match query {
        Some(q) => format!("{prefixed}?{q}"),
        None => prefixed,
    }
}

#[cfg(test)]
// Tests are allowed to use unwrap/expect freely.
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    // --- preferred_locale tests ---

    #[test]
    fn cookie_wins_over_header() {
        let locale = preferred_locale(Some("en"), Some("es-ES,es;q=0.9"));
        assert_eq!(locale, Locale::En);
    }

    #[test]
    fn invalid_cookie_falls_through_to_header() {
        let locale = preferred_locale(Some("de"), Some("en-US,en;q=0.9"));
        assert_eq!(locale, Locale::En);
    }

    #[test]
    fn header_scanned_in_declared_locale_order() {
        // Both tags appear; "es" is declared first and wins.
        let locale = preferred_locale(None, Some("en;q=1.0, es;q=0.1"));
        assert_eq!(locale, Locale::Es);
    }

    #[test]
    fn header_matches_region_variants() {
        let locale = preferred_locale(None, Some("en-GB"));
        assert_eq!(locale, Locale::En);
    }

    #[test]
    fn malformed_header_falls_back_to_default() {
        assert_eq!(preferred_locale(None, Some(";;;q=")), DEFAULT_LOCALE);
        assert_eq!(preferred_locale(None, Some("")), DEFAULT_LOCALE);
        assert_eq!(preferred_locale(None, Some("zh-CN, ja")), DEFAULT_LOCALE);
    }

    #[test]
    fn absent_everything_falls_back_to_default() {
        assert_eq!(preferred_locale(None, None), DEFAULT_LOCALE);
    }

    // --- redirect_target tests ---

    #[test]
    fn root_redirects_to_bare_prefix() {
        assert_eq!(redirect_target(Locale::En, "/", None), "/en");
    }

    #[test]
    fn path_is_prefixed() {
        assert_eq!(
            redirect_target(Locale::Es, "/contacto", None),
            "/es/contacto"
        );
    }

    #[test]
    fn query_is_preserved() {
        assert_eq!(
            redirect_target(Locale::En, "/contact", Some("subject=hi")),
            "/en/contact?subject=hi"
        );
    }

    // --- is_system_path tests ---

    #[test]
    fn api_health_and_static_are_skipped() {
        assert!(is_system_path("/api/auth/login"));
        assert!(is_system_path("/health"));
        assert!(is_system_path("/static/css/site.css"));
    }

    #[test]
    fn file_like_paths_are_skipped() {
        assert!(is_system_path("/favicon.ico"));
        assert!(is_system_path("/robots.txt"));
    }

    #[test]
    fn page_paths_are_not_skipped() {
        assert!(!is_system_path("/"));
        assert!(!is_system_path("/contacto"));
        assert!(!is_system_path("/es/sobre-mi"));
    }
}
