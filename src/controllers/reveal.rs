//! Reveal-on-scroll: flagged elements gain a revealed state the first time
//! enough of them enters the viewport, then stop being watched.

use crate::config::Bindings;
use crate::page::Page;

/// Fraction of the element that must be visible.
const VISIBILITY_THRESHOLD: f64 = 0.1;

/// The viewport's bottom edge is pulled up by this much, so elements reveal
/// slightly before they would naturally clear the fold.
const BOTTOM_MARGIN_PX: f64 = 50.0;

pub struct Reveal {
    observed: Vec<String>,
}

impl Reveal {
    pub fn init(page: &mut Page, bindings: &Bindings) -> Option<Self> {
        let observed = page.ids_by_class(&bindings.reveal_class);
        if observed.is_empty() {
            return None;
        }
        let mut reveal = Self { observed };
        // Elements already in view at load reveal immediately
        reveal.on_scroll(page, bindings);
        Some(reveal)
    }

    pub fn on_scroll(&mut self, page: &mut Page, bindings: &Bindings) {
        let mut still_observed = Vec::with_capacity(self.observed.len());
        for id in self.observed.drain(..) {
            if page.visible_ratio(&id, BOTTOM_MARGIN_PX) >= VISIBILITY_THRESHOLD {
                page.add_class(&id, &bindings.revealed_class);
            } else {
                still_observed.push(id);
            }
        }
        self.observed = still_observed;
    }

    /// Elements still waiting to reveal.
    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }
}
