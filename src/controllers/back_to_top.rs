//! Back-to-top control: visible past a scroll threshold, scrolls the page
//! home on click.

use crate::config::Bindings;
use crate::motion::Motion;
use crate::page::Page;

/// Offset past which the control becomes visible.
const SHOW_THRESHOLD_PX: f64 = 300.0;

pub struct BackToTop {
    button: String,
}

impl BackToTop {
    pub fn init(page: &Page, bindings: &Bindings) -> Option<Self> {
        page.get(&bindings.back_to_top)?;
        Some(Self {
            button: bindings.back_to_top.clone(),
        })
    }

    pub fn on_scroll(&self, page: &mut Page, bindings: &Bindings) {
        let visible = page.scroll_y > SHOW_THRESHOLD_PX;
        page.set_class(&self.button, &bindings.show_class, visible);
    }

    pub fn on_click(&self, page: &mut Page, motion: &mut Motion, target: &str) {
        if page.contains(&self.button, target) {
            motion.scroll_to(page, 0.0);
        }
    }
}
