//! Portfolio project records.
//!
//! Served from an in-process table; project names keep one spelling while
//! summaries are locale-keyed.

use serde::Serialize;

use crate::i18n::Locale;

/// A piece of text with one variant per locale.
#[derive(Debug, Serialize)]
pub struct Localized {
    pub es: &'static str,
    pub en: &'static str,
}

impl Localized {
    /// The variant for a locale.
    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Es => self.es,
            Locale::En => self.en,
        }
    }
}

/// A portfolio project.
#[derive(Debug, Serialize)]
pub struct Project {
    pub slug: &'static str,
    pub category: &'static str,
    pub technologies: &'static [&'static str],
    pub title: &'static str,
    pub summary: Localized,
    pub github_url: Option<&'static str>,
    pub live_url: Option<&'static str>,
    pub featured: bool,
}

static PROJECTS: [Project; 7] = [
    Project {
        slug: "logotracker-pro",
        category: "fullstack",
        technologies: &["React", "Django", "PostgreSQL"],
        title: "LogoTracker Pro",
        summary: Localized {
            es: "Gestión de activos de marca para equipos de diseño.",
            en: "Brand asset management for design teams.",
        },
        github_url: Some("https://github.com/peperuizdev/logotracker-pro"),
        live_url: None,
        featured: true,
    },
    Project {
        slug: "magic-post",
        category: "ai",
        technologies: &["Next.js", "FastAPI", "LLMs"],
        title: "Magic Post",
        summary: Localized {
            es: "Generador de publicaciones con modelos de lenguaje.",
            en: "Social post generator backed by language models.",
        },
        github_url: Some("https://github.com/peperuizdev/magic-post"),
        live_url: None,
        featured: true,
    },
    Project {
        slug: "feelflow-ai",
        category: "ai",
        technologies: &["Python", "FastAPI", "Transformers"],
        title: "FeelFlow AI",
        summary: Localized {
            es: "Análisis de sentimiento en tiempo real.",
            en: "Real-time sentiment analysis.",
        },
        github_url: Some("https://github.com/peperuizdev/feelflow-ai"),
        live_url: None,
        featured: true,
    },
    Project {
        slug: "predictor-academico",
        category: "ai",
        technologies: &["Python", "XGBoost", "scikit-learn"],
        title: "Predictor Académico",
        summary: Localized {
            es: "Predicción de rendimiento académico con XGBoost.",
            en: "Academic performance prediction with XGBoost.",
        },
        github_url: Some("https://github.com/peperuizdev/predictor-academico"),
        live_url: None,
        featured: false,
    },
    Project {
        slug: "datashop-analytics",
        category: "fullstack",
        technologies: &["React", "Django", "Pandas"],
        title: "DataShop Analytics",
        summary: Localized {
            es: "Panel de análisis de ventas para comercio electrónico.",
            en: "Sales analytics dashboard for e-commerce.",
        },
        github_url: Some("https://github.com/peperuizdev/datashop-analytics"),
        live_url: None,
        featured: false,
    },
    Project {
        slug: "the-critical-lens",
        category: "frontend",
        technologies: &["Next.js", "TypeScript", "Tailwind"],
        title: "The Critical Lens",
        summary: Localized {
            es: "Revista digital de cine con gestión editorial.",
            en: "Digital film magazine with editorial workflow.",
        },
        github_url: Some("https://github.com/peperuizdev/the-critical-lens"),
        live_url: None,
        featured: false,
    },
    Project {
        slug: "orange-digital-center-manager",
        category: "backend",
        technologies: &["Django", "PostgreSQL", "Docker"],
        title: "Orange Digital Center Manager",
        summary: Localized {
            es: "Gestión de reservas y aulas para un centro de formación.",
            en: "Room and booking management for a training center.",
        },
        github_url: Some("https://github.com/peperuizdev/orange-digital-center-manager"),
        live_url: None,
        featured: false,
    },
];

/// All projects, in display order.
pub fn all() -> &'static [Project] {
    &PROJECTS
}

/// Look up a project by its URL slug.
pub fn find_by_slug(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.slug == slug)
}
