//! Bilingual string table.
//!
//! Every key is a [`TextKey`] variant and [`text`] matches on all of them,
//! so a key without both variants does not compile. [`verify_table`] covers
//! the remaining hole (an empty string) at startup.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Es, Language::En];

    pub fn toggle(self) -> Self {
        match self {
            Language::Es => Language::En,
            Language::En => Language::Es,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "es" => Ok(Language::Es),
            "en" => Ok(Language::En),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

macro_rules! text_keys {
    ($($variant:ident => $name:literal,)+) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum TextKey {
            $($variant,)+
        }

        impl TextKey {
            pub const ALL: &'static [TextKey] = &[$(TextKey::$variant,)+];

            /// Key name as the frontend looks it up.
            pub fn name(self) -> &'static str {
                match self {
                    $(TextKey::$variant => $name,)+
                }
            }
        }
    };
}

text_keys! {
    NavHome => "nav_home",
    NavProjects => "nav_projects",
    NavAbout => "nav_about",
    NavServices => "nav_services",
    NavContact => "nav_contact",

    HeroGreeting => "hero_greeting",
    HeroRole => "hero_role",
    HeroCtaProjects => "hero_cta_projects",
    HeroCtaContact => "hero_cta_contact",
    HeroDescription => "hero_description",

    ProjectsTitle => "projects_title",
    ProjectsSubtitle => "projects_subtitle",
    ProjectsFilterAll => "projects_filter_all",
    ProjectsEmpty => "projects_empty",

    ServicesTitle => "services_title",
    ServicesSubtitle => "services_subtitle",
    ServiceWebTitle => "service_web_title",
    ServiceWebDesc => "service_web_desc",
    ServiceAppTitle => "service_app_title",
    ServiceAppDesc => "service_app_desc",
    ServiceSeoTitle => "service_seo_title",
    ServiceSeoDesc => "service_seo_desc",

    AboutTitle => "about_title",
    AboutSubtitle => "about_subtitle",
    AboutP1 => "about_p1",
    AboutP2 => "about_p2",
    AboutP3 => "about_p3",
    StatsYears => "stats_years",
    StatsProjects => "stats_projects",
    StatsClients => "stats_clients",
    StatsCoffee => "stats_coffee",
    SkillsFrontend => "skills_frontend",
    SkillsBackend => "skills_backend",
    SkillsTools => "skills_tools",

    ContactTitle => "contact_title",
    ContactSubtitle => "contact_subtitle",
    ContactName => "contact_name",
    ContactMessage => "contact_message",
    ContactSend => "contact_send",
    ContactLocation => "contact_location",
    ContactSocialFollow => "contact_social_follow",
    ContactAvailable => "contact_available",
    ContactSending => "contact_sending",
    ContactSuccessTitle => "contact_success_title",
    ContactSuccessDesc => "contact_success_desc",
    ContactErrorTitle => "contact_error_title",

    LoginTitle => "login_title",
    LoginFailedTitle => "login_failed_title",
    LoginInvalidCredentials => "login_invalid_credentials",

    AdminProjectCreated => "admin_project_created",
    AdminProjectUpdated => "admin_project_updated",
    AdminProjectDeleted => "admin_project_deleted",
    AdminTestimonialCreated => "admin_testimonial_created",
    AdminTestimonialUpdated => "admin_testimonial_updated",
    AdminTestimonialDeleted => "admin_testimonial_deleted",
    AdminMessageUpdated => "admin_message_updated",
    AdminMessageDeleted => "admin_message_deleted",
    AdminErrorTitle => "admin_error_title",
    AdminCreateFailed => "admin_create_failed",
    AdminUpdateFailed => "admin_update_failed",
    AdminDeleteFailed => "admin_delete_failed",
}

impl fmt::Display for TextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Look up the text for `key` in `language`.
pub fn text(key: TextKey, language: Language) -> &'static str {
    let (es, en) = variants(key);
    match language {
        Language::Es => es,
        Language::En => en,
    }
}

/// The full key → text map for one language, keyed by [`TextKey::name`].
pub fn table(language: Language) -> BTreeMap<&'static str, &'static str> {
    TextKey::ALL
        .iter()
        .map(|&key| (key.name(), text(key, language)))
        .collect()
}

/// Keys whose text is empty in some language.
pub fn verify_table() -> Result<(), Vec<(TextKey, Language)>> {
    let missing: Vec<_> = TextKey::ALL
        .iter()
        .flat_map(|&key| Language::ALL.iter().map(move |&lang| (key, lang)))
        .filter(|&(key, lang)| text(key, lang).trim().is_empty())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(missing)
    }
}

fn variants(key: TextKey) -> (&'static str, &'static str) {
    use TextKey::*;
    match key {
        NavHome => ("Inicio", "Home"),
        NavProjects => ("Proyectos", "Projects"),
        NavAbout => ("Sobre mí", "About"),
        NavServices => ("Servicios", "Services"),
        NavContact => ("Contacto", "Contact"),

        HeroGreeting => ("¡Hola! 👋 Mi nombre es", "Hello! 👋 My name is"),
        HeroRole => ("Desarrollador Full Stack", "Full Stack Developer"),
        HeroCtaProjects => ("Ver Proyectos", "View Projects"),
        HeroCtaContact => ("Contáctame", "Contact Me"),
        HeroDescription => (
            "Desarrollo experiencias digitales excepcionales. Especializado en crear aplicaciones web modernas, escalables y con interfaces que enamoran.",
            "I develop exceptional digital experiences. Specialized in creating modern, scalable web applications with interfaces that captivate.",
        ),

        ProjectsTitle => ("Mi Trabajo", "My Work"),
        ProjectsSubtitle => (
            "Una selección de proyectos que demuestran mis habilidades",
            "A selection of projects demonstrating my skills",
        ),
        ProjectsFilterAll => ("Todo", "All"),
        ProjectsEmpty => (
            "No hay proyectos con este filtro.",
            "No projects found with this filter.",
        ),

        ServicesTitle => ("Mis Servicios", "My Services"),
        ServicesSubtitle => (
            "Soluciones digitales a medida para hacer crecer tu negocio",
            "Tailored digital solutions to grow your business",
        ),
        ServiceWebTitle => ("Desarrollo Web", "Web Development"),
        ServiceWebDesc => (
            "Sitios web rápidos, responsivos y modernos construidos con las últimas tecnologías.",
            "Fast, responsive, and modern websites built with the latest technologies.",
        ),
        ServiceAppTitle => ("Aplicaciones Web", "Web Applications"),
        ServiceAppDesc => (
            "Aplicaciones complejas y escalables con funcionalidades avanzadas y gestión de datos.",
            "Complex and scalable applications with advanced features and data management.",
        ),
        ServiceSeoTitle => ("Optimización & SEO", "Optimization & SEO"),
        ServiceSeoDesc => (
            "Mejora de rendimiento, velocidad de carga y visibilidad en motores de búsqueda.",
            "Performance improvement, load speed, and search engine visibility.",
        ),

        AboutTitle => ("Sobre Mí", "About Me"),
        AboutSubtitle => ("Conoce al Desarrollador", "Meet the Developer"),
        AboutP1 => (
            "Soy un desarrollador full-stack apasionado por crear experiencias digitales que combinan diseño atractivo con funcionalidad robusta. Mi enfoque está en escribir código limpio, escalable y mantenible.",
            "I am a full-stack developer passionate about creating digital experiences that combine attractive design with robust functionality. My focus is on writing clean, scalable, and maintainable code.",
        ),
        AboutP2 => (
            "Con experiencia en startups y proyectos freelance, he desarrollado habilidades para trabajar tanto de forma independiente como en equipo, siempre priorizando la comunicación clara y los resultados medibles.",
            "With experience in startups and freelance projects, I have developed skills to work both independently and in teams, always prioritizing clear communication and measurable results.",
        ),
        AboutP3 => (
            "Cuando no estoy programando, probablemente me encuentres explorando nuevas tecnologías, contribuyendo a proyectos open-source, o disfrutando de una buena taza de café.",
            "When I'm not coding, you'll probably find me exploring new technologies, contributing to open-source projects, or enjoying a good cup of coffee.",
        ),
        StatsYears => ("Años de experiencia", "Years of experience"),
        StatsProjects => ("Proyectos completados", "Completed projects"),
        StatsClients => ("Clientes satisfechos", "Satisfied clients"),
        StatsCoffee => ("Café consumido ☕", "Coffee consumed ☕"),
        SkillsFrontend => ("Frontend", "Frontend"),
        SkillsBackend => ("Backend", "Backend"),
        SkillsTools => ("Herramientas", "Tools"),

        ContactTitle => ("¿Tienes un Proyecto?", "Have a Project?"),
        ContactSubtitle => (
            "Estoy siempre abierto a nuevas oportunidades.",
            "I am always open to new opportunities.",
        ),
        ContactName => ("Nombre", "Name"),
        ContactMessage => ("Mensaje", "Message"),
        ContactSend => ("Enviar Mensaje", "Send Message"),
        ContactLocation => ("Ubicación", "Location"),
        ContactSocialFollow => ("Sígueme en redes", "Follow me on social media"),
        ContactAvailable => (
            "Disponible para nuevos proyectos",
            "Available for new projects",
        ),
        ContactSending => ("Enviando...", "Sending..."),
        ContactSuccessTitle => ("¡Mensaje enviado!", "Message sent!"),
        ContactSuccessDesc => (
            "Gracias por contactarme. Te responderé pronto.",
            "Thanks for contacting me. I'll get back to you soon.",
        ),
        ContactErrorTitle => ("Error al enviar", "Error sending"),

        LoginTitle => ("Acceso Administrativo", "Admin Access"),
        LoginFailedTitle => ("Error de autenticación", "Authentication error"),
        LoginInvalidCredentials => ("Credenciales inválidas", "Invalid credentials"),

        AdminProjectCreated => ("Proyecto creado", "Project created"),
        AdminProjectUpdated => ("Proyecto actualizado", "Project updated"),
        AdminProjectDeleted => ("Proyecto eliminado", "Project deleted"),
        AdminTestimonialCreated => ("Testimonio creado", "Testimonial created"),
        AdminTestimonialUpdated => ("Testimonio actualizado", "Testimonial updated"),
        AdminTestimonialDeleted => ("Testimonio eliminado", "Testimonial deleted"),
        AdminMessageUpdated => ("Mensaje actualizado", "Message updated"),
        AdminMessageDeleted => ("Mensaje eliminado", "Message deleted"),
        AdminErrorTitle => ("Error", "Error"),
        AdminCreateFailed => ("No se pudo crear el elemento", "Could not create the item"),
        AdminUpdateFailed => (
            "No se pudo actualizar el elemento",
            "Could not update the item",
        ),
        AdminDeleteFailed => ("No se pudo eliminar el elemento", "Could not delete the item"),
    }
}
