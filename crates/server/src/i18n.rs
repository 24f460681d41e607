//! Locale definitions and localized path translation.
//!
//! The site serves every page under a locale prefix (`/es/...`, `/en/...`).
//! Route segments that differ between languages are translated through a
//! fixed symmetric mapping table.

/// Supported locales, in resolution-preference order.
pub const LOCALES: [Locale; 2] = [Locale::Es, Locale::En];

/// Locale served when nothing else resolves.
pub const DEFAULT_LOCALE: Locale = Locale::Es;

/// Route segments that differ between locales.
///
/// Each pair is (Spanish spelling, English spelling). Translation is
/// symmetric: mapping a segment across and back yields the original.
const PATH_MAPPING: [(&str, &str); 3] = [
    ("sobre-mi", "about"),
    ("contacto", "contact"),
    ("proyectos", "projects"),
];

/// A supported language tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    /// Spanish (site default).
    Es,
    /// English.
    En,
}

impl Locale {
    /// The bare locale tag as it appears in URLs and cookies.
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }

    /// Parse a bare tag into a supported locale.
    ///
    /// Matching is exact and case-sensitive: URL prefixes and cookie values
    /// are expected to carry the canonical lowercase tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "es" => Some(Locale::Es),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// The other supported locale (used for the language switcher).
    pub fn other(self) -> Self {
        match self {
            Locale::Es => Locale::En,
            Locale::En => Locale::Es,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extract a supported locale prefix from a request path.
///
/// Returns `Some((locale, remaining_path))` when the first path segment is a
/// supported tag. A bare prefix like `/en` yields a remaining path of `/`.
/// Matching is exact: `/enterprise` does not match `en`.
pub fn split_locale(path: &str) -> Option<(Locale, &str)> {
    let trimmed = path.strip_prefix('/')?;

    let (candidate, rest) = match trimmed.find('/') {
        Some(pos) => (&trimmed[..pos], &trimmed[pos..]),
        None => (trimmed, ""),
    };

    let locale = Locale::from_tag(candidate)?;

    if rest.is_empty() {
        Some((locale, "/"))
    } else {
        Some((locale, rest))
    }
}

/// Translate a localized route segment between locales.
///
/// Returns `None` when the segment has no mapping entry (slugs and shared
/// segments keep their spelling).
pub fn translate_segment(segment: &str, from: Locale, to: Locale) -> Option<&'static str> {
    PATH_MAPPING.iter().find_map(|&(es, en)| match (from, to) {
        (Locale::Es, Locale::En) if es == segment => Some(en),
        (Locale::En, Locale::Es) if en == segment => Some(es),
        _ => None,
    })
}

/// The spelling of a canonical (English) route segment in a given locale.
///
/// Unmapped segments are returned unchanged.
pub fn localized_segment(segment: &str, locale: Locale) -> &str {
    match PATH_MAPPING.iter().find(|&&(_, en)| en == segment) {
        Some(&(es, en)) => match locale {
            Locale::Es => es,
            Locale::En => en,
        },
        None => segment,
    }
}

/// Compute the equivalent path in another locale.
///
/// Strips the `from` prefix, translates the leading segment when a mapping
/// entry exists, and re-prefixes with `to`. Paths without a mapped segment
/// keep their structure, so `/es/proyectos/magic-post` becomes
/// `/en/projects/magic-post`. The root maps to the bare `/<to>` prefix.
pub fn localized_path(path: &str, from: Locale, to: Locale) -> String {
    if from == to {
        return path.to_string();
    }

    let rest = match split_locale(path) {
        Some((_, rest)) => rest,
        None => path,
    };

    if rest.is_empty() || rest == "/" {
        return format!("/{to}");
    }

    let trimmed = rest.trim_start_matches('/');
    let (first, tail) = match trimmed.find('/') {
        Some(pos) => (&trimmed[..pos], &trimmed[pos..]),
        None => (trimmed, ""),
    };

    let mapped = translate_segment(first, from, to).unwrap_or(first);
    format!("/{to}/{mapped}{tail}")
}
