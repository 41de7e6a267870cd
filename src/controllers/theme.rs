//! Light/dark theme: restored from the preference store at wiring, flipped
//! and persisted on every toggle click.
//!
//! Invariant: after any toggle the persisted value, the body's dark flag and
//! the icon state agree.

use crate::config::Bindings;
use crate::page::Page;
use crate::prefs::{PreferenceStore, Preferences, Theme};

pub struct ThemeToggle {
    toggle: String,
    store: Box<dyn PreferenceStore>,
}

impl ThemeToggle {
    pub fn init(
        page: &mut Page,
        bindings: &Bindings,
        store: Box<dyn PreferenceStore>,
    ) -> Option<Self> {
        if page.get(&bindings.theme_toggle).is_none() || page.get(&bindings.theme_icon).is_none() {
            return None;
        }
        let theme = store.load().theme;
        apply(page, bindings, theme);
        Some(Self {
            toggle: bindings.theme_toggle.clone(),
            store,
        })
    }

    pub fn on_click(&mut self, page: &mut Page, bindings: &Bindings, target: &str) {
        if !page.contains(&self.toggle, target) {
            return;
        }
        let theme = if page.has_class(&bindings.body, &bindings.dark_theme_class) {
            Theme::Light
        } else {
            Theme::Dark
        };
        apply(page, bindings, theme);
        if let Err(e) = self.store.save(&Preferences { theme }) {
            tracing::error!("failed to persist theme preference: {e}");
        }
    }
}

/// Reflect `theme` in the body flag and the toggle icon. Sun while dark,
/// moon while light.
fn apply(page: &mut Page, bindings: &Bindings, theme: Theme) {
    page.set_class(&bindings.body, &bindings.dark_theme_class, theme.is_dark());
    if theme.is_dark() {
        page.remove_class(&bindings.theme_icon, &bindings.moon_icon_class);
        page.add_class(&bindings.theme_icon, &bindings.sun_icon_class);
    } else {
        page.remove_class(&bindings.theme_icon, &bindings.sun_icon_class);
        page.add_class(&bindings.theme_icon, &bindings.moon_icon_class);
    }
}
