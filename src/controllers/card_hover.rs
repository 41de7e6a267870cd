//! Decorative hover polish: project cards get their transition set the
//! first time the pointer reaches them.

use crate::config::Bindings;
use crate::page::Page;

const HOVER_TRANSITION: &str = "all 0.3s ease";

pub struct CardHover {
    cards: Vec<String>,
}

impl CardHover {
    pub fn init(page: &Page, bindings: &Bindings) -> Option<Self> {
        let cards = page.ids_by_class(&bindings.project_card_class);
        if cards.is_empty() {
            return None;
        }
        Some(Self { cards })
    }

    pub fn on_mouse_enter(&self, page: &mut Page, target: &str) {
        if let Some(card) = self.cards.iter().find(|card| page.contains(card.as_str(), target)) {
            page.set_style(card, "transition", HOVER_TRANSITION);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Element;

    #[test]
    fn test_hover_sets_transition_on_the_card() {
        let bindings = Bindings::default();
        let mut page = Page::new(600.0);
        page.add(Element::new("card-1", "div").with_class("project-card"));
        page.add(Element::new("card-1-title", "h3").with_parent("card-1"));
        page.add(Element::new("hero", "div"));
        let hover = CardHover::init(&page, &bindings).unwrap();

        hover.on_mouse_enter(&mut page, "card-1-title");
        assert_eq!(page.style("card-1", "transition"), Some("all 0.3s ease"));

        hover.on_mouse_enter(&mut page, "hero");
        assert_eq!(page.style("hero", "transition"), None);
    }

    #[test]
    fn test_no_cards_leaves_feature_unwired() {
        let page = Page::new(600.0);
        assert!(CardHover::init(&page, &Bindings::default()).is_none());
    }
}
