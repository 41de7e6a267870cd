//! Slide-out navigation menu: toggle control, close on link click, close on
//! outside click.

use crate::config::Bindings;
use crate::page::Page;

pub struct MobileNav {
    toggle: String,
    menu: String,
    links: Vec<String>,
}

impl MobileNav {
    pub fn init(page: &Page, bindings: &Bindings) -> Option<Self> {
        if page.get(&bindings.nav_toggle).is_none() || page.get(&bindings.nav_menu).is_none() {
            return None;
        }
        Some(Self {
            toggle: bindings.nav_toggle.clone(),
            menu: bindings.nav_menu.clone(),
            links: page.ids_by_class(&bindings.nav_link_class),
        })
    }

    pub fn on_click(&self, page: &mut Page, bindings: &Bindings, target: &str) {
        // Hamburger: flip the open flag on control and panel together
        if page.contains(&self.toggle, target) {
            page.toggle_class(&self.toggle, &bindings.active_class);
            page.toggle_class(&self.menu, &bindings.active_class);
            return;
        }

        // A navigation link always closes the menu
        if self.links.iter().any(|link| page.contains(link, target)) {
            self.close(page, bindings);
            return;
        }

        // Anywhere else closes the menu only while it is open
        let inside = page.contains(&self.menu, target);
        if !inside && page.has_class(&self.menu, &bindings.active_class) {
            self.close(page, bindings);
        }
    }

    fn close(&self, page: &mut Page, bindings: &Bindings) {
        page.remove_class(&self.toggle, &bindings.active_class);
        page.remove_class(&self.menu, &bindings.active_class);
    }
}
