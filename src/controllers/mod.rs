//! One controller per page feature. Each resolves the elements it needs
//! when wired and stays inert (never constructed) when they are missing;
//! none of them knows the others exist.

pub mod active_nav;
pub mod back_to_top;
pub mod card_hover;
pub mod contact_form;
pub mod mobile_nav;
pub mod navbar_shadow;
pub mod reveal;
pub mod smooth_scroll;
pub mod theme;
pub mod year;

pub use active_nav::ActiveNav;
pub use back_to_top::BackToTop;
pub use card_hover::CardHover;
pub use contact_form::ContactForm;
pub use mobile_nav::MobileNav;
pub use navbar_shadow::NavbarShadow;
pub use reveal::Reveal;
pub use smooth_scroll::SmoothScroll;
pub use theme::ThemeToggle;
