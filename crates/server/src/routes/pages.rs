//! Localized page routes.
//!
//! Every page is a single parameterized handler: the route's locale selects
//! a content bundle and the template renders from it. Both the Spanish and
//! English spellings of mapped segments are registered, mirroring the
//! localized URL scheme.

use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri};
use axum::response::Response;
use axum::routing::get;
use axum::{Extension, Router};
use serde::Serialize;

use crate::content::{self, projects};
use crate::i18n::{self, DEFAULT_LOCALE, Locale};
use crate::middleware::admin_gate::AdminAuth;
use crate::state::AppState;

use super::helpers::render_page;

/// A navigation entry for the page header.
#[derive(Debug, Serialize)]
struct NavLink {
    href: String,
    label: &'static str,
}

/// A project prepared for template rendering, with locale-resolved text.
#[derive(Debug, Serialize)]
struct ProjectView {
    slug: &'static str,
    title: &'static str,
    summary: &'static str,
    category: &'static str,
    technologies: &'static [&'static str],
    github_url: Option<&'static str>,
    live_url: Option<&'static str>,
    href: String,
}

fn project_view(project: &projects::Project, locale: Locale) -> ProjectView {
    let segment = i18n::localized_segment("projects", locale);
    ProjectView {
        slug: project.slug,
        title: project.title,
        summary: project.summary.get(locale),
        category: project.category,
        technologies: project.technologies,
        github_url: project.github_url,
        live_url: project.live_url,
        href: format!("/{locale}/{segment}/{}", project.slug),
    }
}

fn nav_links(locale: Locale) -> Vec<NavLink> {
    let bundle = content::bundle(locale);
    vec![
        NavLink {
            href: format!("/{locale}"),
            label: bundle.nav_home,
        },
        NavLink {
            href: format!("/{locale}/{}", i18n::localized_segment("about", locale)),
            label: bundle.nav_about,
        },
        NavLink {
            href: format!("/{locale}/{}", i18n::localized_segment("projects", locale)),
            label: bundle.nav_projects,
        },
        NavLink {
            href: format!("/{locale}/{}", i18n::localized_segment("contact", locale)),
            label: bundle.nav_contact,
        },
    ]
}

/// Base template context: locale, content bundle, navigation, and the
/// language-switcher target for the equivalent page in the other locale.
fn page_context(locale: Locale, path: &str) -> tera::Context {
    let mut context = tera::Context::new();
    context.insert("locale", locale.as_str());
    context.insert("alt_locale", locale.other().as_str());
    context.insert(
        "alt_path",
        &i18n::localized_path(path, locale, locale.other()),
    );
    context.insert("content", content::bundle(locale));
    context.insert("nav", &nav_links(locale));
    context
}

/// Render the localized 404 page.
pub fn render_not_found(state: &AppState, locale: Locale) -> Response {
    let context = page_context(locale, &format!("/{locale}"));
    let mut response = render_page(state, "not_found.html", &context);
    if response.status() == StatusCode::OK {
        *response.status_mut() = StatusCode::NOT_FOUND;
    }
    response
}

/// Fallback handler for unmatched routes.
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    let locale = i18n::split_locale(uri.path())
        .map(|(locale, _)| locale)
        .unwrap_or(DEFAULT_LOCALE);
    render_not_found(&state, locale)
}

async fn home(State(state): State<AppState>, Path(lang): Path<String>, uri: Uri) -> Response {
    let Some(locale) = Locale::from_tag(&lang) else {
        return render_not_found(&state, DEFAULT_LOCALE);
    };

    let mut context = page_context(locale, uri.path());
    let featured: Vec<ProjectView> = projects::all()
        .iter()
        .filter(|p| p.featured)
        .map(|p| project_view(p, locale))
        .collect();
    context.insert("projects", &featured);

    render_page(&state, "home.html", &context)
}

async fn about(State(state): State<AppState>, Path(lang): Path<String>, uri: Uri) -> Response {
    let Some(locale) = Locale::from_tag(&lang) else {
        return render_not_found(&state, DEFAULT_LOCALE);
    };

    let context = page_context(locale, uri.path());
    render_page(&state, "about.html", &context)
}

async fn contact_page(
    State(state): State<AppState>,
    Path(lang): Path<String>,
    uri: Uri,
) -> Response {
    let Some(locale) = Locale::from_tag(&lang) else {
        return render_not_found(&state, DEFAULT_LOCALE);
    };

    let context = page_context(locale, uri.path());
    render_page(&state, "contact.html", &context)
}

async fn projects_index(
    State(state): State<AppState>,
    Path(lang): Path<String>,
    uri: Uri,
) -> Response {
    let Some(locale) = Locale::from_tag(&lang) else {
        return render_not_found(&state, DEFAULT_LOCALE);
    };

    let mut context = page_context(locale, uri.path());
    let all: Vec<ProjectView> = projects::all()
        .iter()
        .map(|p| project_view(p, locale))
        .collect();
    context.insert("projects", &all);

    render_page(&state, "projects.html", &context)
}

async fn project_detail(
    State(state): State<AppState>,
    Path((lang, slug)): Path<(String, String)>,
    uri: Uri,
) -> Response {
    let Some(locale) = Locale::from_tag(&lang) else {
        return render_not_found(&state, DEFAULT_LOCALE);
    };

    let Some(project) = projects::find_by_slug(&slug) else {
        return render_not_found(&state, locale);
    };

    let mut context = page_context(locale, uri.path());
    context.insert("project", &project_view(project, locale));

    render_page(&state, "project.html", &context)
}

async fn admin_login(
    State(state): State<AppState>,
    Path(lang): Path<String>,
    uri: Uri,
) -> Response {
    let Some(locale) = Locale::from_tag(&lang) else {
        return render_not_found(&state, DEFAULT_LOCALE);
    };

    let context = page_context(locale, uri.path());
    render_page(&state, "admin/login.html", &context)
}

async fn admin_dashboard(
    State(state): State<AppState>,
    Path(lang): Path<String>,
    uri: Uri,
    auth: Option<Extension<AdminAuth>>,
) -> Response {
    let Some(locale) = Locale::from_tag(&lang) else {
        return render_not_found(&state, DEFAULT_LOCALE);
    };

    let mut context = page_context(locale, uri.path());
    let username = auth.as_ref().map(|e| e.0.username.as_str()).unwrap_or("");
    context.insert("admin_username", username);

    render_page(&state, "admin/index.html", &context)
}

/// Create the page router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{lang}", get(home))
        .route("/{lang}/sobre-mi", get(about))
        .route("/{lang}/about", get(about))
        .route("/{lang}/contacto", get(contact_page))
        .route("/{lang}/contact", get(contact_page))
        .route("/{lang}/proyectos", get(projects_index))
        .route("/{lang}/projects", get(projects_index))
        .route("/{lang}/proyectos/{slug}", get(project_detail))
        .route("/{lang}/projects/{slug}", get(project_detail))
        .route("/{lang}/admin", get(admin_dashboard))
        .route("/{lang}/admin/login", get(admin_login))
}
