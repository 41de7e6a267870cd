//! Owned model of the live page: elements, geometry and scroll state.
//!
//! Controllers never touch a real DOM; they read and mutate this tree. The
//! host is responsible for keeping geometry (offsets, viewport height) in
//! sync with whatever actually renders the page.

use std::collections::{BTreeMap, BTreeSet};

/// A single page element. Flat fields, no behavior of its own.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    pub id: String,
    pub tag: String,
    pub classes: BTreeSet<String>,
    pub text: String,
    pub value: String,
    pub href: Option<String>,
    /// Id of the parent element, if any. Drives containment checks.
    pub parent: Option<String>,
    /// Document-relative top, in px.
    pub offset_top: f64,
    /// Rendered height, in px.
    pub offset_height: f64,
    pub styles: BTreeMap<String, String>,
}

impl Element {
    pub fn new(id: &str, tag: &str) -> Self {
        Self {
            id: id.to_string(),
            tag: tag.to_string(),
            ..Default::default()
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    pub fn with_href(mut self, href: &str) -> Self {
        self.href = Some(href.to_string());
        self
    }

    pub fn with_parent(mut self, parent: &str) -> Self {
        self.parent = Some(parent.to_string());
        self
    }

    pub fn with_geometry(mut self, offset_top: f64, offset_height: f64) -> Self {
        self.offset_top = offset_top;
        self.offset_height = offset_height;
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// The whole page: elements in document order plus document-level state.
#[derive(Debug, Default)]
pub struct Page {
    elements: Vec<Element>,
    /// Current vertical scroll offset, in px.
    pub scroll_y: f64,
    /// Height of the visible viewport, in px.
    pub viewport_height: f64,
    /// Whether the host can animate scrolling natively. When false the
    /// engine falls back to its own eased animation.
    pub supports_smooth_scroll: bool,
}

// Containment walks are bounded so a malformed parent cycle cannot hang
// the engine.
const MAX_PARENT_HOPS: usize = 64;

impl Page {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height,
            ..Default::default()
        }
    }

    /// Add an element, replacing any existing element with the same id.
    /// Insertion order is document order.
    pub fn add(&mut self, element: Element) {
        if let Some(existing) = self.elements.iter_mut().find(|el| el.id == element.id) {
            *existing = element;
        } else {
            self.elements.push(element);
        }
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|el| el.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|el| el.id == id)
    }

    /// All elements in document order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Ids of elements carrying `class`, in document order.
    pub fn ids_by_class(&self, class: &str) -> Vec<String> {
        self.elements
            .iter()
            .filter(|el| el.has_class(class))
            .map(|el| el.id.clone())
            .collect()
    }

    /// Ids of elements with the given tag, in document order.
    pub fn ids_by_tag(&self, tag: &str) -> Vec<String> {
        self.elements
            .iter()
            .filter(|el| el.tag == tag)
            .map(|el| el.id.clone())
            .collect()
    }

    pub fn first_by_class(&self, class: &str) -> Option<&Element> {
        self.elements.iter().find(|el| el.has_class(class))
    }

    /// True when `node_id` is `ancestor_id` itself or a descendant of it.
    pub fn contains(&self, ancestor_id: &str, node_id: &str) -> bool {
        if ancestor_id == node_id {
            return self.get(ancestor_id).is_some();
        }
        let mut current = self.get(node_id).and_then(|el| el.parent.clone());
        let mut hops = 0;
        while let Some(id) = current {
            if id == ancestor_id {
                return true;
            }
            hops += 1;
            if hops > MAX_PARENT_HOPS {
                return false;
            }
            current = self.get(&id).and_then(|el| el.parent.clone());
        }
        false
    }

    /// True when some strict ancestor of `id` carries `class`.
    pub fn has_ancestor_with_class(&self, id: &str, class: &str) -> bool {
        let mut current = self.get(id).and_then(|el| el.parent.clone());
        let mut hops = 0;
        while let Some(pid) = current {
            if self.get(&pid).is_some_and(|el| el.has_class(class)) {
                return true;
            }
            hops += 1;
            if hops > MAX_PARENT_HOPS {
                return false;
            }
            current = self.get(&pid).and_then(|el| el.parent.clone());
        }
        false
    }

    // --- Class and content mutation (no-ops on missing elements) ---

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.get(id).is_some_and(|el| el.has_class(class))
    }

    pub fn add_class(&mut self, id: &str, class: &str) {
        if let Some(el) = self.get_mut(id) {
            el.classes.insert(class.to_string());
        }
    }

    pub fn remove_class(&mut self, id: &str, class: &str) {
        if let Some(el) = self.get_mut(id) {
            el.classes.remove(class);
        }
    }

    pub fn toggle_class(&mut self, id: &str, class: &str) {
        if let Some(el) = self.get_mut(id) {
            if !el.classes.remove(class) {
                el.classes.insert(class.to_string());
            }
        }
    }

    pub fn set_class(&mut self, id: &str, class: &str, on: bool) {
        if on {
            self.add_class(id, class);
        } else {
            self.remove_class(id, class);
        }
    }

    pub fn text(&self, id: &str) -> &str {
        self.get(id).map(|el| el.text.as_str()).unwrap_or("")
    }

    pub fn set_text(&mut self, id: &str, text: &str) {
        if let Some(el) = self.get_mut(id) {
            el.text = text.to_string();
        }
    }

    pub fn value(&self, id: &str) -> &str {
        self.get(id).map(|el| el.value.as_str()).unwrap_or("")
    }

    pub fn set_value(&mut self, id: &str, value: &str) {
        if let Some(el) = self.get_mut(id) {
            el.value = value.to_string();
        }
    }

    pub fn style(&self, id: &str, property: &str) -> Option<&str> {
        self.get(id)
            .and_then(|el| el.styles.get(property))
            .map(|v| v.as_str())
    }

    pub fn set_style(&mut self, id: &str, property: &str, style_value: &str) {
        if let Some(el) = self.get_mut(id) {
            el.styles
                .insert(property.to_string(), style_value.to_string());
        }
    }

    // --- Geometry queries ---

    /// Fraction of the element visible inside the viewport, with the bottom
    /// edge of the viewport pulled up by `bottom_margin` px. Missing or
    /// zero-height elements report 0.
    pub fn visible_ratio(&self, id: &str, bottom_margin: f64) -> f64 {
        let Some(el) = self.get(id) else { return 0.0 };
        if el.offset_height <= 0.0 {
            return 0.0;
        }
        let top = el.offset_top - self.scroll_y;
        let bottom = top + el.offset_height;
        let region_bottom = self.viewport_height - bottom_margin;
        let overlap = bottom.min(region_bottom) - top.max(0.0);
        (overlap / el.offset_height).clamp(0.0, 1.0)
    }

    /// Scroll offset that would bring the element fully into view, aligning
    /// to whichever edge is nearer, or `None` when it is already visible.
    pub fn reveal_offset(&self, id: &str) -> Option<f64> {
        let el = self.get(id)?;
        let top = el.offset_top;
        let bottom = top + el.offset_height;
        if top < self.scroll_y {
            Some(top)
        } else if bottom > self.scroll_y + self.viewport_height {
            Some(bottom - self.viewport_height)
        } else {
            None
        }
    }
}
