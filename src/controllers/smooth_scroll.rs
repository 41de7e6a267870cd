//! In-page anchor navigation: clicks on fragment links scroll to the target
//! section, offset by the navbar's rendered height.

use crate::config::Bindings;
use crate::motion::Motion;
use crate::page::Page;

pub struct SmoothScroll {
    /// Navigation links plus call-to-action anchors, resolved at wiring.
    links: Vec<String>,
}

impl SmoothScroll {
    pub fn init(page: &Page, bindings: &Bindings) -> Option<Self> {
        let mut links = page.ids_by_class(&bindings.nav_link_class);
        for el in page.elements() {
            if el.tag == "a"
                && page.has_ancestor_with_class(&el.id, &bindings.hero_buttons_class)
                && !links.contains(&el.id)
            {
                links.push(el.id.clone());
            }
        }
        if links.is_empty() {
            return None;
        }
        Some(Self { links })
    }

    pub fn on_click(&self, page: &mut Page, motion: &mut Motion, bindings: &Bindings, target: &str) {
        let Some(link_id) = self
            .links
            .iter()
            .find(|link| page.contains(link.as_str(), target))
        else {
            return;
        };

        let Some(href) = page.get(link_id).and_then(|el| el.href.clone()) else {
            return;
        };
        let Some(fragment) = href.strip_prefix('#') else {
            return;
        };

        let Some(section_top) = page.get(fragment).map(|el| el.offset_top) else {
            return;
        };
        let Some(navbar_height) = page
            .first_by_class(&bindings.navbar_class)
            .map(|el| el.offset_height)
        else {
            return;
        };

        motion.scroll_to(page, section_top - navbar_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Element;

    fn scroll_page(native: bool) -> (Page, Bindings) {
        let mut page = Page::new(600.0);
        page.supports_smooth_scroll = native;
        page.add(Element::new("body", "body"));
        page.add(
            Element::new("topbar", "nav")
                .with_class("navbar")
                .with_geometry(0.0, 80.0),
        );
        page.add(
            Element::new("link-about", "a")
                .with_class("nav-link")
                .with_href("#about"),
        );
        page.add(Element::new("hero", "div").with_class("hero-buttons"));
        page.add(
            Element::new("cta-contact", "a")
                .with_parent("hero")
                .with_href("#contact"),
        );
        page.add(
            Element::new("link-external", "a")
                .with_class("nav-link")
                .with_href("https://example.com"),
        );
        page.add(
            Element::new("link-home", "a")
                .with_class("nav-link")
                .with_href("#home"),
        );
        page.add(Element::new("home", "section").with_geometry(0.0, 900.0));
        page.add(Element::new("about", "section").with_geometry(900.0, 700.0));
        page.add(Element::new("contact", "section").with_geometry(1600.0, 500.0));
        (page, Bindings::default())
    }

    #[test]
    fn test_nav_link_scrolls_to_section_minus_navbar() {
        let (mut page, bindings) = scroll_page(true);
        let mut motion = Motion::new();
        let scroll = SmoothScroll::init(&page, &bindings).unwrap();

        scroll.on_click(&mut page, &mut motion, &bindings, "link-about");
        assert_eq!(page.scroll_y, 820.0);
    }

    #[test]
    fn test_cta_anchor_inside_hero_buttons_is_wired() {
        let (mut page, bindings) = scroll_page(true);
        let mut motion = Motion::new();
        let scroll = SmoothScroll::init(&page, &bindings).unwrap();

        scroll.on_click(&mut page, &mut motion, &bindings, "cta-contact");
        assert_eq!(page.scroll_y, 1520.0);
    }

    #[test]
    fn test_fallback_animates_over_ticks() {
        let (mut page, bindings) = scroll_page(false);
        let mut motion = Motion::new();
        let scroll = SmoothScroll::init(&page, &bindings).unwrap();

        scroll.on_click(&mut page, &mut motion, &bindings, "link-about");
        assert_eq!(page.scroll_y, 0.0);
        assert!(motion.is_animating());

        motion.advance(&mut page, 400);
        assert!(page.scroll_y > 0.0 && page.scroll_y < 820.0);

        motion.advance(&mut page, 800);
        assert_eq!(page.scroll_y, 820.0);
        assert!(!motion.is_animating());
    }

    #[test]
    fn test_topmost_section_clamps_to_document_top() {
        let (mut page, bindings) = scroll_page(true);
        let mut motion = Motion::new();
        let scroll = SmoothScroll::init(&page, &bindings).unwrap();

        page.scroll_y = 400.0;
        scroll.on_click(&mut page, &mut motion, &bindings, "link-home");
        assert_eq!(page.scroll_y, 0.0);
    }

    #[test]
    fn test_non_fragment_href_is_ignored() {
        let (mut page, bindings) = scroll_page(true);
        let mut motion = Motion::new();
        let scroll = SmoothScroll::init(&page, &bindings).unwrap();

        scroll.on_click(&mut page, &mut motion, &bindings, "link-external");
        assert_eq!(page.scroll_y, 0.0);
    }

    #[test]
    fn test_missing_section_is_ignored() {
        let (mut page, bindings) = scroll_page(true);
        page.add(
            Element::new("link-ghost", "a")
                .with_class("nav-link")
                .with_href("#ghost"),
        );
        let mut motion = Motion::new();
        let scroll = SmoothScroll::init(&page, &bindings).unwrap();

        scroll.on_click(&mut page, &mut motion, &bindings, "link-ghost");
        assert_eq!(page.scroll_y, 0.0);
    }

    #[test]
    fn test_missing_navbar_is_ignored() {
        let (mut page, bindings) = scroll_page(true);
        page.get_mut("topbar").unwrap().classes.clear();
        let mut motion = Motion::new();
        let scroll = SmoothScroll::init(&page, &bindings).unwrap();

        scroll.on_click(&mut page, &mut motion, &bindings, "link-about");
        assert_eq!(page.scroll_y, 0.0);
    }

    #[test]
    fn test_no_links_leaves_feature_unwired() {
        let bindings = Bindings::default();
        let page = Page::new(600.0);
        assert!(SmoothScroll::init(&page, &bindings).is_none());
    }
}
