//! Footer year stamp, written once at wiring.

use crate::config::Bindings;
use crate::page::Page;

/// Write `year` into the footer placeholder. Returns whether anything was
/// stamped.
pub fn stamp(page: &mut Page, bindings: &Bindings, year: i32) -> bool {
    if page.get(&bindings.year_element).is_none() {
        return false;
    }
    page.set_text(&bindings.year_element, &year.to_string());
    true
}
