//! Active-link highlighting: the lowest section whose threshold has been
//! crossed owns the highlight; at most one link is active at a time.

use crate::config::Bindings;
use crate::page::Page;

/// Extra slack below the navbar before a section counts as current.
const ACTIVATION_OFFSET_PX: f64 = 100.0;

pub struct ActiveNav {
    sections: Vec<String>,
    links: Vec<String>,
    navbar: String,
}

impl ActiveNav {
    pub fn init(page: &Page, bindings: &Bindings) -> Option<Self> {
        let sections = page.ids_by_tag(&bindings.section_tag);
        let links = page.ids_by_class(&bindings.nav_link_class);
        let navbar = page.first_by_class(&bindings.navbar_class)?.id.clone();
        if sections.is_empty() || links.is_empty() {
            return None;
        }
        Some(Self {
            sections,
            links,
            navbar,
        })
    }

    pub fn on_scroll(&self, page: &mut Page, bindings: &Bindings) {
        let navbar_height = page
            .get(&self.navbar)
            .map(|el| el.offset_height)
            .unwrap_or(0.0);

        // Later sections overwrite earlier candidates, so the last section
        // whose threshold has been crossed wins
        let mut current: Option<&str> = None;
        for id in &self.sections {
            if let Some(section) = page.get(id) {
                if page.scroll_y >= section.offset_top - navbar_height - ACTIVATION_OFFSET_PX {
                    current = Some(id.as_str());
                }
            }
        }

        let wanted = current.map(|id| format!("#{id}"));
        for link in &self.links {
            let href = page.get(link).and_then(|el| el.href.clone());
            let is_active = wanted.is_some() && href == wanted;
            page.set_class(link, &bindings.active_class, is_active);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Element;

    fn section_page(first_top: f64) -> (Page, Bindings) {
        let mut page = Page::new(600.0);
        page.add(
            Element::new("topbar", "nav")
                .with_class("navbar")
                .with_geometry(0.0, 80.0),
        );
        for (id, top) in [
            ("home", first_top),
            ("about", first_top + 800.0),
            ("contact", first_top + 1600.0),
        ] {
            page.add(Element::new(id, "section").with_geometry(top, 800.0));
            page.add(
                Element::new(&format!("link-{id}"), "a")
                    .with_class("nav-link")
                    .with_href(&format!("#{id}")),
            );
        }
        (page, Bindings::default())
    }

    fn active_links(page: &Page) -> Vec<String> {
        page.ids_by_class("active")
    }

    #[test]
    fn test_last_qualifying_section_wins() {
        let (mut page, bindings) = section_page(0.0);
        let nav = ActiveNav::init(&page, &bindings).unwrap();

        // Thresholds: home always, about at 620, contact at 1420
        page.scroll_y = 500.0;
        nav.on_scroll(&mut page, &bindings);
        assert_eq!(active_links(&page), vec!["link-home"]);

        page.scroll_y = 900.0;
        nav.on_scroll(&mut page, &bindings);
        assert_eq!(active_links(&page), vec!["link-about"]);

        page.scroll_y = 1500.0;
        nav.on_scroll(&mut page, &bindings);
        assert_eq!(active_links(&page), vec!["link-contact"]);
    }

    #[test]
    fn test_exactly_one_link_active_after_each_scroll() {
        let (mut page, bindings) = section_page(0.0);
        let nav = ActiveNav::init(&page, &bindings).unwrap();

        for offset in [0.0, 620.0, 700.0, 1420.0, 2400.0] {
            page.scroll_y = offset;
            nav.on_scroll(&mut page, &bindings);
            assert_eq!(active_links(&page).len(), 1, "offset {offset}");
        }
    }

    #[test]
    fn test_no_qualifying_section_clears_all_links() {
        let (mut page, bindings) = section_page(1000.0);
        let nav = ActiveNav::init(&page, &bindings).unwrap();

        page.scroll_y = 900.0;
        nav.on_scroll(&mut page, &bindings);
        assert_eq!(active_links(&page), vec!["link-home"]);

        // First threshold is 1000 - 80 - 100 = 820
        page.scroll_y = 500.0;
        nav.on_scroll(&mut page, &bindings);
        assert!(active_links(&page).is_empty());
    }

    #[test]
    fn test_missing_navbar_leaves_feature_unwired() {
        let (mut page, bindings) = section_page(0.0);
        page.get_mut("topbar").unwrap().classes.clear();
        assert!(ActiveNav::init(&page, &bindings).is_none());
    }
}
