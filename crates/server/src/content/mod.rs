//! Locale-keyed page content.
//!
//! All page copy lives here as one bundle per locale; templates are a single
//! parameterized render path taking (locale, bundle) rather than duplicated
//! per-language markup.

pub mod projects;

use serde::Serialize;

use crate::i18n::Locale;

/// Per-locale page copy.
#[derive(Debug, Serialize)]
pub struct ContentBundle {
    pub nav_home: &'static str,
    pub nav_about: &'static str,
    pub nav_projects: &'static str,
    pub nav_contact: &'static str,

    pub hero_greeting: &'static str,
    pub hero_headline: &'static str,
    pub hero_subheadline: &'static str,
    pub hero_cta: &'static str,

    pub about_title: &'static str,
    pub about_body: &'static str,

    pub projects_title: &'static str,

    pub contact_title: &'static str,
    pub contact_intro: &'static str,

    pub login_title: &'static str,
    pub admin_title: &'static str,

    pub not_found_title: &'static str,
    pub not_found_body: &'static str,
}

static ES: ContentBundle = ContentBundle {
    nav_home: "Inicio",
    nav_about: "Sobre mí",
    nav_projects: "Proyectos",
    nav_contact: "Contacto",

    hero_greeting: "Hola, soy Pepe",
    hero_headline: "AI & Full Stack Developer",
    hero_subheadline: "Transformo ideas en soluciones digitales inteligentes",
    hero_cta: "Ver mis proyectos",

    about_title: "Sobre mí",
    about_body: "Desarrollador Full Stack especializado en IA y Data Science.",

    projects_title: "Proyectos",

    contact_title: "Contacto",
    contact_intro: "¿Tienes un proyecto en mente? Escríbeme.",

    login_title: "Acceso administración",
    admin_title: "Panel de administración",

    not_found_title: "Página no encontrada",
    not_found_body: "La página que buscas no existe.",
};

static EN: ContentBundle = ContentBundle {
    nav_home: "Home",
    nav_about: "About",
    nav_projects: "Projects",
    nav_contact: "Contact",

    hero_greeting: "Hi, I'm Pepe",
    hero_headline: "AI & Full Stack Developer",
    hero_subheadline: "Turning ideas into intelligent digital solutions",
    hero_cta: "See my projects",

    about_title: "About me",
    about_body: "Full Stack developer specialized in AI and Data Science.",

    projects_title: "Projects",

    contact_title: "Contact",
    contact_intro: "Have a project in mind? Write me.",

    login_title: "Admin login",
    admin_title: "Admin dashboard",

    not_found_title: "Page not found",
    not_found_body: "The page you are looking for does not exist.",
};

/// The content bundle for a locale.
pub fn bundle(locale: Locale) -> &'static ContentBundle {
    match locale {
        Locale::Es => &ES,
        Locale::En => &EN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LOCALES;

    #[test]
    fn every_locale_has_a_bundle() {
        for locale in LOCALES {
            let b = bundle(locale);
            assert!(!b.nav_home.is_empty());
            assert!(!b.not_found_title.is_empty());
        }
    }
}
