//! Element ids, class names and style literals the controllers touch.
//!
//! The markup is maintained by hand alongside this crate; keeping every
//! identifier in one typed struct means a renamed id breaks loudly here
//! instead of silently unwiring a feature.

/// Identifiers of the page elements each controller binds to.
///
/// Defaults match the portfolio markup. Hosts with different ids build a
/// custom value; a binding that matches nothing simply leaves that feature
/// unwired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bindings {
    // Navigation
    pub nav_toggle: String,
    pub nav_menu: String,
    pub nav_link_class: String,
    pub hero_buttons_class: String,
    pub navbar_class: String,

    // Back to top
    pub back_to_top: String,

    // Theme
    pub theme_toggle: String,
    pub theme_icon: String,
    pub sun_icon_class: String,
    pub moon_icon_class: String,
    pub body: String,
    pub dark_theme_class: String,

    // Contact form
    pub contact_form: String,
    pub name_field: String,
    pub email_field: String,
    pub message_field: String,
    pub name_error: String,
    pub email_error: String,
    pub message_error: String,
    pub success_message: String,

    // Reveal on scroll
    pub reveal_class: String,
    pub revealed_class: String,

    // Sections and highlighting
    pub section_tag: String,
    pub active_class: String,
    pub show_class: String,

    // Decoration
    pub project_card_class: String,
    pub raised_shadow: String,
    pub resting_shadow: String,

    // Footer
    pub year_element: String,
}

impl Default for Bindings {
    fn default() -> Self {
        Self {
            nav_toggle: "navToggle".to_string(),
            nav_menu: "navMenu".to_string(),
            nav_link_class: "nav-link".to_string(),
            hero_buttons_class: "hero-buttons".to_string(),
            navbar_class: "navbar".to_string(),
            back_to_top: "backToTop".to_string(),
            theme_toggle: "themeToggle".to_string(),
            theme_icon: "themeIcon".to_string(),
            sun_icon_class: "ri-sun-line".to_string(),
            moon_icon_class: "ri-moon-line".to_string(),
            body: "body".to_string(),
            dark_theme_class: "dark-theme".to_string(),
            contact_form: "contactForm".to_string(),
            name_field: "name".to_string(),
            email_field: "email".to_string(),
            message_field: "message".to_string(),
            name_error: "nameError".to_string(),
            email_error: "emailError".to_string(),
            message_error: "messageError".to_string(),
            success_message: "successMessage".to_string(),
            reveal_class: "animate-on-scroll".to_string(),
            revealed_class: "animated".to_string(),
            section_tag: "section".to_string(),
            active_class: "active".to_string(),
            show_class: "show".to_string(),
            project_card_class: "project-card".to_string(),
            raised_shadow: "0 4px 12px rgba(0, 0, 0, 0.15)".to_string(),
            resting_shadow: "0 2px 10px rgba(0, 0, 0, 0.1)".to_string(),
            year_element: "currentYear".to_string(),
        }
    }
}
