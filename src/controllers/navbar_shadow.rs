//! Navbar elevation: one of two fixed shadows, picked by scroll offset.

use crate::config::Bindings;
use crate::page::Page;

/// Offset past which the navbar gets the raised shadow.
const RAISED_THRESHOLD_PX: f64 = 50.0;

pub struct NavbarShadow {
    navbar: String,
}

impl NavbarShadow {
    pub fn init(page: &Page, bindings: &Bindings) -> Option<Self> {
        let navbar = page.first_by_class(&bindings.navbar_class)?.id.clone();
        Some(Self { navbar })
    }

    pub fn on_scroll(&self, page: &mut Page, bindings: &Bindings) {
        let shadow = if page.scroll_y > RAISED_THRESHOLD_PX {
            bindings.raised_shadow.as_str()
        } else {
            bindings.resting_shadow.as_str()
        };
        page.set_style(&self.navbar, "box-shadow", shadow);
    }
}
